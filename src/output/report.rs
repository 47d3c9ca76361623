//! Plain-text frequency report

use crate::aggregate::ContactRecord;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Records listed in the report
const REPORT_LIMIT: usize = 50;

/// Report path derived from the CSV path: `contacts.csv` → `contacts_report.txt`
#[must_use]
pub fn report_path_for(csv_path: &Path) -> PathBuf {
    let stem = csv_path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();
    csv_path.with_file_name(format!("{stem}_report.txt"))
}

/// Write the top-50 frequency report for a ranked snapshot.
///
/// # Errors
/// Returns an error if the file cannot be created or written to.
pub fn write_report(path: &Path, records: &[ContactRecord]) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(out, "Email Address Frequency Report")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out)?;

    for record in records.iter().take(REPORT_LIMIT) {
        writeln!(out, "{:<40} - {} messages", record.email, record.count)?;
        if let Some(name) = record.name() {
            writeln!(out, "  Name: {name}")?;
        }
    }

    out.flush()?;
    Ok(())
}
