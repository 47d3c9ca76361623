//! Configuration structures for Gmail WEEE

use crate::cli::Args;
use std::path::PathBuf;

/// Main configuration for a scan
#[derive(Debug, Clone)]
pub struct Config {
    /// Gmail address to scan; also the self-exclusion address
    pub account: String,

    /// App password, when given on the command line
    pub password: Option<String>,

    /// Maximum number of sent messages to scan
    pub max_messages: usize,

    /// Path to the output CSV file
    pub output_path: PathBuf,

    /// IMAP server host
    pub host: String,

    /// IMAP server port
    pub port: u16,

    /// Enable debug logging
    pub debug_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account: String::new(),
            password: None,
            max_messages: 500,
            output_path: PathBuf::from("outlook_contacts.csv"),
            host: "imap.gmail.com".to_string(),
            port: 993,
            debug_mode: false,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            account: args.account,
            password: args.password,
            max_messages: args.max_messages,
            output_path: args.output,
            host: args.host,
            port: args.port,
            debug_mode: args.debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_match_cli_defaults() {
        let args = Args::try_parse_from(["gmail_weee", "me@gmail.com"]).unwrap();
        let config = Config::from(args);

        let defaults = Config::default();
        assert_eq!(config.account, "me@gmail.com");
        assert_eq!(config.max_messages, defaults.max_messages);
        assert_eq!(config.output_path, defaults.output_path);
        assert_eq!(config.host, defaults.host);
        assert_eq!(config.port, defaults.port);
        assert!(!config.debug_mode);
    }
}
