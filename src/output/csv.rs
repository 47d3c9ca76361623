//! Outlook-compatible CSV output

use crate::error::Result;
use crate::output::ContactRow;
use csv::{Reader, Writer};
use log::debug;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Column headers Outlook's CSV import maps onto contact fields
const CSV_HEADERS: [&str; 4] = [
    "First Name",
    "Last Name",
    "E-mail Address",
    "E-mail Display As",
];

/// CSV writer for the exported contact list.
///
/// The header row is written up front, so even an empty scan produces
/// a valid importable file.
pub struct CsvWriter {
    writer: Writer<BufWriter<File>>,
    record_count: u64,
}

impl CsvWriter {
    /// Create the output file and write the header row.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written to.
    pub fn create(output_path: &Path) -> Result<Self> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(64 * 1024, file);
        let mut writer = Writer::from_writer(buf_writer);

        writer.write_record(CSV_HEADERS)?;

        debug!("Created CSV writer at {}", output_path.display());

        Ok(Self {
            writer,
            record_count: 0,
        })
    }

    /// Append contact rows in the given order.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_rows(&mut self, rows: &[ContactRow]) -> Result<()> {
        for row in rows {
            self.writer.write_record([
                &row.first_name,
                &row.last_name,
                &row.email,
                &row.display_as,
            ])?;
            self.record_count += 1;
        }
        Ok(())
    }

    /// Flush and return the number of rows written.
    ///
    /// # Errors
    /// Returns an error if flushing fails.
    pub fn finish(mut self) -> Result<u64> {
        self.writer.flush()?;
        Ok(self.record_count)
    }
}

/// Read contact rows back from an exported CSV file.
///
/// # Errors
/// Returns an error if the file cannot be read or a row does not match
/// the export format.
#[allow(dead_code)]
pub fn read_contact_rows(path: &Path) -> Result<Vec<ContactRow>> {
    let file = File::open(path)?;
    let mut reader = Reader::from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}
