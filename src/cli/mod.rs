//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Gmail WEEE - Build an Outlook autocomplete contact list from Gmail sent mail
#[derive(Parser, Debug)]
#[command(name = "gmail_weee")]
#[command(version)]
#[command(about = "Builds an Outlook-importable contact list from Gmail sent messages")]
#[command(long_about = None)]
pub struct Args {
    /// Gmail address to scan (also excluded from the extracted contacts)
    pub account: String,

    /// Gmail app password (prompted for when omitted)
    #[arg(long)]
    pub password: Option<String>,

    /// Maximum number of sent messages to scan
    #[arg(short, long, default_value = "500")]
    pub max_messages: usize,

    /// Path to the output CSV file
    #[arg(short, long, default_value = "outlook_contacts.csv")]
    pub output: PathBuf,

    /// IMAP server host
    #[arg(long, default_value = "imap.gmail.com")]
    pub host: String,

    /// IMAP server port
    #[arg(long, default_value = "993")]
    pub port: u16,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
