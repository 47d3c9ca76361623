//! Gmail WEEE - Gmail sent-mail contact extractor for Outlook autocomplete
//!
//! This tool scans the sent folder of a Gmail account over IMAP, ranks the
//! recipient addresses by usage frequency, and writes an Outlook-importable
//! CSV contact list plus a plain-text frequency report.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};
use std::path::Path;
use std::time::Instant;

mod aggregate;
mod cli;
mod config;
mod error;
mod mail;
mod output;
mod parser;
mod progress;
mod scan;

use aggregate::ContactAggregator;
use cli::Args;
use config::Config;
use mail::{ImapConfig, ImapSource};
use output::{report, ContactRow, CsvWriter};
use progress::ProgressReporter;
use scan::{run_scan, MailSource};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("Gmail WEEE - Sent-mail contact extractor");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Convert args to config
    let config: Config = args.into();

    if !config.account.contains('@') {
        error!("Account must be a full Gmail address: {}", config.account);
        std::process::exit(1);
    }

    let password = match config.password.clone() {
        Some(password) => password,
        None => prompt_password(&config.account)?,
    };

    let start = Instant::now();
    info!(
        "Connecting to {}:{} as {}",
        config.host, config.port, config.account
    );

    let mut source = match ImapSource::connect(&ImapConfig {
        host: config.host.clone(),
        port: config.port,
        account: config.account.clone(),
        password,
        max_messages: config.max_messages,
    }) {
        Ok(source) => source,
        Err(e) => {
            error!("{e}");
            error!("Check that IMAP is enabled in Gmail settings and that you are using an app password");
            error!("App passwords: https://myaccount.google.com/apppasswords");
            std::process::exit(1);
        }
    };

    info!("Scanning {} sent messages...", source.total());

    let mut aggregator = ContactAggregator::new();
    let mut reporter = ProgressReporter::new(source.total());
    let summary = run_scan(&mut source, &config.account, &mut aggregator, &mut reporter);
    reporter.finish();
    drop(source);

    if summary.aborted {
        warn!("Scan stopped early; results are partial");
    }

    info!(
        "Processed {} messages ({} skipped), found {} unique addresses",
        summary.processed,
        summary.skipped,
        aggregator.len()
    );

    // Export CSV
    let snapshot = aggregator.snapshot();
    let rows: Vec<ContactRow> = snapshot.iter().map(ContactRow::from).collect();
    let mut writer = CsvWriter::create(&config.output_path)?;
    writer.write_rows(&rows)?;
    let written = writer.finish()?;
    info!(
        "Exported {} contacts to {}",
        written,
        config.output_path.display()
    );

    // Frequency report
    let report_path = report::report_path_for(&config.output_path);
    report::write_report(&report_path, &snapshot)?;
    info!("Created frequency report: {}", report_path.display());

    let elapsed = start.elapsed();
    info!("Scan completed in {elapsed:?}");

    print_import_instructions(&config.output_path);

    Ok(())
}

fn prompt_password(account: &str) -> Result<String> {
    println!("You'll need to use an App Password for Gmail:");
    println!("1. Go to https://myaccount.google.com/apppasswords");
    println!("2. Generate an app-specific password");
    println!("3. Use that password here");
    println!();
    let password = rpassword::prompt_password(format!("Enter app password for {account}: "))?;
    Ok(password)
}

fn print_import_instructions(csv_path: &Path) {
    println!();
    println!("{}", "=".repeat(50));
    println!("SUCCESS! Next steps to import into Outlook:");
    println!("{}", "=".repeat(50));
    println!();
    println!("1. Open Outlook");
    println!("2. Go to File → Open & Export → Import/Export");
    println!("3. Choose 'Import from another program or file'");
    println!("4. Select 'Comma Separated Values'");
    println!("5. Browse to: {}", csv_path.display());
    println!("6. Select your Contacts folder as destination");
    println!("7. Map the fields if needed");
    println!("8. Click Finish");
    println!();
    println!("The imported contacts will appear in autocomplete!");
}
