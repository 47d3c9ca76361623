//! Gmail WEEE library - Core functionality for sent-mail contact extraction

#![allow(clippy::multiple_crate_versions)] // Transitive dependencies

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod mail;
pub mod output;
pub mod parser;
pub mod progress;
pub mod scan;

pub use aggregate::{ContactAggregator, ContactRecord};
pub use config::Config;
pub use error::{GmailWeeeError, Result};
pub use parser::AddressEntry;
