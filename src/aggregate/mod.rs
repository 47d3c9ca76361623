//! Contact aggregation: occurrence counting and ranked snapshots

use std::collections::HashMap;

/// A value that accepts the first write and ignores all later ones.
///
/// Used for the fields of [`ContactRecord`] that keep whatever was
/// observed first (display name, date) for the lifetime of a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetOnce<T>(Option<T>);

impl<T> SetOnce<T> {
    /// Store `value` if nothing has been stored yet. Returns whether
    /// the write took effect.
    pub fn set(&mut self, value: T) -> bool {
        if self.0.is_none() {
            self.0 = Some(value);
            true
        } else {
            false
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    #[allow(dead_code)]
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

/// Aggregated usage record for one email address
#[derive(Debug, Clone)]
pub struct ContactRecord {
    /// Normalized email address (lowercase, trimmed)
    pub email: String,
    /// Number of header occurrences seen
    pub count: u64,
    name: SetOnce<String>,
    first_seen_date: SetOnce<String>,
}

impl ContactRecord {
    fn new(email: String) -> Self {
        Self {
            email,
            count: 0,
            name: SetOnce::default(),
            first_seen_date: SetOnce::default(),
        }
    }

    /// First non-empty display name observed for this address
    pub fn name(&self) -> Option<&str> {
        self.name.get().map(String::as_str)
    }

    /// Raw `Date` header of the first message this address was seen in
    #[allow(dead_code)]
    pub fn first_seen_date(&self) -> Option<&str> {
        self.first_seen_date.get().map(String::as_str)
    }
}

/// Accumulates [`ContactRecord`]s across a scan and produces a ranked
/// snapshot.
///
/// Records keep their observation order; ranking is a stable sort by
/// count, so two addresses with equal counts stay in first-observed
/// order and the output is deterministic for a given input sequence.
#[derive(Debug, Default)]
pub struct ContactAggregator {
    records: Vec<ContactRecord>,
    index: HashMap<String, usize>,
}

impl ContactAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `email`.
    ///
    /// Creates the record on first sight. A non-empty `name` or
    /// `message_date` is stored only if the record does not already
    /// have one. Never fails.
    pub fn observe(&mut self, email: &str, name: Option<&str>, message_date: Option<&str>) {
        let key = email.trim().to_lowercase();
        if key.is_empty() {
            return;
        }

        let idx = match self.index.get(&key).copied() {
            Some(idx) => idx,
            None => {
                let idx = self.records.len();
                self.records.push(ContactRecord::new(key.clone()));
                self.index.insert(key, idx);
                idx
            }
        };

        let record = &mut self.records[idx];
        record.count += 1;
        if let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) {
            record.name.set(name.to_string());
        }
        if let Some(date) = message_date.map(str::trim).filter(|d| !d.is_empty()) {
            record.first_seen_date.set(date.to_string());
        }
    }

    /// Ranked view of all records: count descending, ties broken by
    /// observation order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ContactRecord> {
        let mut records = self.records.clone();
        // sort_by is stable, so equal counts keep insertion order
        records.sort_by(|a, b| b.count.cmp(&a.count));
        records
    }

    /// Number of distinct addresses observed
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(dead_code)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_once_keeps_first_value() {
        let mut cell = SetOnce::default();
        assert!(!cell.is_set());
        assert!(cell.set("first"));
        assert!(!cell.set("second"));
        assert_eq!(cell.get(), Some(&"first"));
    }

    #[test]
    fn test_count_matches_occurrences() {
        let mut agg = ContactAggregator::new();
        for _ in 0..3 {
            agg.observe("a@x.com", None, None);
        }
        agg.observe("b@x.com", None, None);

        let snapshot = agg.snapshot();
        assert_eq!(snapshot[0].email, "a@x.com");
        assert_eq!(snapshot[0].count, 3);
        assert_eq!(snapshot[1].email, "b@x.com");
        assert_eq!(snapshot[1].count, 1);
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let mut agg = ContactAggregator::new();
        agg.observe("BOB@Y.COM", None, None);
        agg.observe("bob@y.com", None, None);

        assert_eq!(agg.len(), 1);
        assert_eq!(agg.snapshot()[0].count, 2);
    }

    #[test]
    fn test_first_name_wins() {
        let mut agg = ContactAggregator::new();
        agg.observe("e@x.com", Some("Alice"), Some("d1"));
        agg.observe("e@x.com", Some(""), Some("d2"));
        agg.observe("e@x.com", Some("Bob"), Some("d3"));

        let snapshot = agg.snapshot();
        assert_eq!(snapshot[0].name(), Some("Alice"));
        assert_eq!(snapshot[0].first_seen_date(), Some("d1"));
        assert_eq!(snapshot[0].count, 3);
    }

    #[test]
    fn test_empty_name_then_late_name() {
        let mut agg = ContactAggregator::new();
        agg.observe("e@x.com", None, None);
        agg.observe("e@x.com", Some("Late Name"), Some("d2"));

        let snapshot = agg.snapshot();
        assert_eq!(snapshot[0].name(), Some("Late Name"));
        assert_eq!(snapshot[0].first_seen_date(), Some("d2"));
    }

    #[test]
    fn test_snapshot_ties_keep_observation_order() {
        let mut agg = ContactAggregator::new();
        agg.observe("b@x.com", None, None);
        agg.observe("a@x.com", None, None);
        agg.observe("c@x.com", None, None);
        agg.observe("c@x.com", None, None);

        let snapshot = agg.snapshot();
        let order: Vec<&str> = snapshot.iter().map(|r| r.email.as_str()).collect();
        assert_eq!(order, vec!["c@x.com", "b@x.com", "a@x.com"]);
    }

    #[test]
    fn test_empty_aggregator() {
        let agg = ContactAggregator::new();
        assert!(agg.is_empty());
        assert!(agg.snapshot().is_empty());
    }
}
