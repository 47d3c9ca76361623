//! Export formatting and output writers

pub mod csv;
pub mod report;

pub use csv::CsvWriter;

use crate::aggregate::ContactRecord;
use serde::{Deserialize, Serialize};

/// One Outlook-importable contact row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRow {
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "E-mail Address")]
    pub email: String,
    #[serde(rename = "E-mail Display As")]
    pub display_as: String,
}

impl From<&ContactRecord> for ContactRow {
    fn from(record: &ContactRecord) -> Self {
        let name = record.name().unwrap_or("");
        let mut tokens = name.split_whitespace();
        let first_name = tokens.next().unwrap_or("").to_string();
        let last_name = tokens.collect::<Vec<_>>().join(" ");
        let display_as = if name.is_empty() {
            record.email.clone()
        } else {
            format!("{} ({})", name, record.email)
        };

        Self {
            first_name,
            last_name,
            email: record.email.clone(),
            display_as,
        }
    }
}
