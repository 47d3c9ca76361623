//! Sequential scan loop: mail source → header parser → aggregator
//!
//! The scan is a pure fold over the ordered message sequence a
//! [`MailSource`] yields, so its output is reproducible for a given
//! input order. Messages that fail to fetch or parse are skipped and
//! counted, never fatal.

use crate::aggregate::ContactAggregator;
use crate::error::Result;
use crate::parser::extract_addresses;
use log::debug;

/// Raw address-bearing headers of one sent message
#[derive(Debug, Clone, Default)]
pub struct MessageHeaders {
    pub to: Option<String>,
    pub cc: Option<String>,
    pub bcc: Option<String>,
    /// Raw `Date` header value, unparsed
    pub date: Option<String>,
}

/// Supplies raw message headers, one message at a time, in a fixed order
pub trait MailSource {
    /// Number of messages this source will yield
    fn total(&self) -> usize;

    /// Next message, or `None` when exhausted. An `Err` item means this
    /// one message could not be fetched or parsed; the scan skips it and
    /// moves on.
    fn next_message(&mut self) -> Option<Result<MessageHeaders>>;
}

/// Callback invoked after each message, processed or skipped
pub trait ScanObserver {
    /// Return `false` to stop the scan before the next message.
    fn on_message(&mut self, done: usize, total: usize) -> bool;
}

/// Observer that reports nothing and never stops the scan
#[allow(dead_code)]
pub struct NullObserver;

impl ScanObserver for NullObserver {
    fn on_message(&mut self, _done: usize, _total: usize) -> bool {
        true
    }
}

/// Totals for one completed scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Messages whose headers were parsed and folded in
    pub processed: usize,
    /// Messages skipped after a fetch or parse failure
    pub skipped: usize,
    /// Whether the observer stopped the scan early
    pub aborted: bool,
}

/// Fold every message from `source` into `aggregator`.
///
/// For each message, the `To`, `Cc` and `Bcc` headers are parsed and
/// every extracted address is observed together with the message's raw
/// `Date` value. `own_address` is excluded. The observer runs after
/// each message and may stop the scan; partial results stay usable.
pub fn run_scan(
    source: &mut dyn MailSource,
    own_address: &str,
    aggregator: &mut ContactAggregator,
    observer: &mut dyn ScanObserver,
) -> ScanSummary {
    let total = source.total();
    let mut summary = ScanSummary::default();

    while let Some(message) = source.next_message() {
        match message {
            Ok(headers) => {
                let date = headers.date.as_deref();
                for raw in [&headers.to, &headers.cc, &headers.bcc].into_iter().flatten() {
                    for entry in extract_addresses(raw, own_address) {
                        aggregator.observe(&entry.email, entry.name.as_deref(), date);
                    }
                }
                summary.processed += 1;
            }
            Err(e) => {
                debug!("Skipping message: {e}");
                summary.skipped += 1;
            }
        }

        if !observer.on_message(summary.processed + summary.skipped, total) {
            summary.aborted = true;
            break;
        }
    }

    summary
}
