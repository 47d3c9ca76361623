//! Gmail IMAP mail source
//!
//! Connects with an app password, selects the sent folder read-only,
//! and yields raw message headers oldest-first over the most recent
//! `max_messages` messages. Header values are handed out undecoded so
//! the parser owns RFC 2047 handling.

use crate::error::{GmailWeeeError, Result};
use crate::scan::{MailSource, MessageHeaders};
use imap::{ClientBuilder, ConnectionMode};
use log::{debug, info};

/// Sent-folder aliases, tried in order
const SENT_FOLDERS: [&str; 4] = ["[Gmail]/Sent Mail", "Sent", "INBOX.Sent", "[Gmail]/Sent"];

/// Connection parameters for one scan
#[derive(Debug, Clone)]
pub struct ImapConfig {
    pub host: String,
    pub port: u16,
    pub account: String,
    pub password: String,
    /// Most recent messages to scan
    pub max_messages: usize,
}

/// IMAP-backed [`MailSource`] over the account's sent folder
pub struct ImapSource {
    session: imap::Session<imap::Connection>,
    ids: Vec<u32>,
    cursor: usize,
}

impl ImapSource {
    /// Connect, log in, select the sent folder and enumerate messages.
    ///
    /// # Errors
    /// `Connection` when the server is unreachable or rejects the login,
    /// `FolderNotFound` when no sent-folder alias is selectable.
    pub fn connect(config: &ImapConfig) -> Result<Self> {
        let client = ClientBuilder::new(&config.host, config.port)
            .tls_kind(imap::TlsKind::Native)
            .mode(ConnectionMode::AutoTls)
            .connect()
            .map_err(|e| GmailWeeeError::Connection(e.to_string()))?;

        let mut session = client
            .login(&config.account, &config.password)
            .map_err(|e| GmailWeeeError::Connection(e.0.to_string()))?;

        let folder = select_sent_folder(&mut session)?;
        info!("Found sent folder: {folder}");

        let ids = most_recent(session.search("ALL")?, config.max_messages);
        debug!("Scanning {} of the sent folder's messages", ids.len());

        Ok(Self {
            session,
            ids,
            cursor: 0,
        })
    }

    /// Fetch and parse one message's headers.
    fn fetch_headers(&mut self, id: u32) -> Result<MessageHeaders> {
        let fetches = self.session.fetch(id.to_string(), "(BODY.PEEK[HEADER])")?;
        let fetch = fetches
            .iter()
            .next()
            .ok_or_else(|| GmailWeeeError::Message(format!("no fetch data for message {id}")))?;
        let header_bytes = fetch
            .header()
            .ok_or_else(|| GmailWeeeError::Message(format!("no header data for message {id}")))?;

        let (headers, _) = mailparse::parse_headers(header_bytes)
            .map_err(|e| GmailWeeeError::Message(e.to_string()))?;

        Ok(MessageHeaders {
            to: raw_header(&headers, "To"),
            cc: raw_header(&headers, "Cc"),
            bcc: raw_header(&headers, "Bcc"),
            date: raw_header(&headers, "Date"),
        })
    }
}

impl MailSource for ImapSource {
    fn total(&self) -> usize {
        self.ids.len()
    }

    fn next_message(&mut self) -> Option<Result<MessageHeaders>> {
        let id = *self.ids.get(self.cursor)?;
        self.cursor += 1;
        Some(self.fetch_headers(id))
    }
}

impl Drop for ImapSource {
    fn drop(&mut self) {
        if let Err(e) = self.session.logout() {
            debug!("IMAP logout failed: {e}");
        }
    }
}

fn select_sent_folder(session: &mut imap::Session<imap::Connection>) -> Result<String> {
    for folder in SENT_FOLDERS {
        // EXAMINE keeps the mailbox read-only; names are quoted because
        // the Gmail aliases contain spaces and brackets
        match session.examine(format!("\"{folder}\"")) {
            Ok(_) => return Ok(folder.to_string()),
            Err(e) => debug!("Folder {folder:?} not selectable: {e}"),
        }
    }
    Err(GmailWeeeError::FolderNotFound(SENT_FOLDERS.join(", ")))
}

/// Keep the highest `max` sequence numbers, ascending (oldest first).
fn most_recent(ids: impl IntoIterator<Item = u32>, max: usize) -> Vec<u32> {
    let mut ids: Vec<u32> = ids.into_iter().collect();
    ids.sort_unstable();
    if ids.len() > max {
        ids.drain(..ids.len() - max);
    }
    ids
}

/// Undecoded value of the first header matching `name`, if present.
fn raw_header(headers: &[mailparse::MailHeader<'_>], name: &str) -> Option<String> {
    headers
        .iter()
        .find(|h| h.get_key_ref().eq_ignore_ascii_case(name))
        .map(|h| String::from_utf8_lossy(h.get_value_raw()).trim().to_string())
}
