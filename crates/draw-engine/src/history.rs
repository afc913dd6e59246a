//! Draw history, CSV export and share text
//!
//! A history entry is the request that produced a draw plus its result.
//! The history keeps the newest entries first and forgets the oldest once
//! it holds [`MAX_HISTORY`] of them.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::request::DrawRequest;

/// Entries kept before the oldest are dropped
pub const MAX_HISTORY: usize = 50;

const CSV_HEADER: &str = "date,count,min,max,unique,sorted,exclude,seed,result";

/// One recorded draw
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Milliseconds since the Unix epoch
    pub at: i64,
    pub params: DrawRequest,
    pub results: Vec<i64>,
}

impl HistoryEntry {
    pub fn new(at: i64, params: DrawRequest, results: Vec<i64>) -> Self {
        Self { at, params, results }
    }

    /// RFC 3339 UTC timestamp with milliseconds, empty if `at` is out of range
    pub fn timestamp(&self) -> String {
        DateTime::<Utc>::from_timestamp_millis(self.at)
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            .unwrap_or_default()
    }

    /// One-line description of the parameters
    pub fn summary(&self) -> String {
        let p = &self.params;
        let mut line = format!(
            "{} numbers, {}-{}, {}",
            p.count,
            p.min,
            p.max,
            repetition_label(p.unique)
        );
        if p.sort_ascending {
            line.push_str(", sorted");
        }
        if !p.exclude.is_empty() {
            line.push_str(", excl.: ");
            line.push_str(&join(p.exclude.iter(), " "));
        }
        if let Some(seed) = p.seed.as_deref().filter(|s| !s.is_empty()) {
            line.push_str(", seed: ");
            line.push_str(seed);
        }
        line
    }

    fn csv_row(&self) -> String {
        let p = &self.params;
        [
            self.timestamp(),
            p.count.to_string(),
            p.min.to_string(),
            p.max.to_string(),
            p.unique.to_string(),
            p.sort_ascending.to_string(),
            join(p.exclude.iter(), " "),
            csv_field(p.seed.as_deref().unwrap_or("")),
            join(self.results.iter(), " "),
        ]
        .join(",")
    }
}

/// Newest-first list of recorded draws
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawHistory {
    entries: Vec<HistoryEntry>,
}

impl DrawHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `entry` first, dropping the oldest entries past [`MAX_HISTORY`]
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Header plus one row per entry, newest first
    pub fn to_csv(&self) -> String {
        let mut csv = String::from(CSV_HEADER);
        csv.push('\n');
        let rows: Vec<String> = self.entries.iter().map(HistoryEntry::csv_row).collect();
        csv.push_str(&rows.join("\n"));
        csv
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a history, keeping at most [`MAX_HISTORY`] entries
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        let mut history: Self = serde_json::from_str(s)?;
        history.entries.truncate(MAX_HISTORY);
        Ok(history)
    }
}

/// Results as they go on the clipboard
pub fn clipboard_text(results: &[i64]) -> String {
    join(results.iter(), ", ")
}

/// Human-readable message for sharing a result
pub fn share_text(request: &DrawRequest, results: &[i64]) -> String {
    format!(
        "Draw results: {} (between {} and {}, {})",
        clipboard_text(results),
        request.min,
        request.max,
        repetition_label(request.unique)
    )
}

fn repetition_label(unique: bool) -> &'static str {
    if unique {
        "without repetition"
    } else {
        "with repetition"
    }
}

fn join<'a>(values: impl Iterator<Item = &'a i64>, sep: &str) -> String {
    values.map(i64::to_string).collect::<Vec<_>>().join(sep)
}

/// Quote a field that would otherwise break the row
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-03-01T12:30:45.123Z
    const AT: i64 = 1_709_296_245_123;

    fn entry(at: i64) -> HistoryEntry {
        let params = DrawRequest::new(3, 1, 10).with_exclude([2, 7]).with_seed("abc");
        HistoryEntry::new(at, params, vec![1, 5, 9])
    }

    #[test]
    fn test_timestamp() {
        assert_eq!(entry(AT).timestamp(), "2024-03-01T12:30:45.123Z");
        assert_eq!(entry(0).timestamp(), "1970-01-01T00:00:00.000Z");
        assert_eq!(entry(i64::MAX).timestamp(), "");
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            entry(AT).summary(),
            "3 numbers, 1-10, without repetition, sorted, excl.: 2 7, seed: abc"
        );

        let plain = HistoryEntry::new(
            AT,
            DrawRequest::new(2, 1, 6).with_unique(false).with_sort_ascending(false),
            vec![4, 4],
        );
        assert_eq!(plain.summary(), "2 numbers, 1-6, with repetition");
    }

    #[test]
    fn test_record_newest_first_and_capped() {
        let mut history = DrawHistory::new();
        assert!(history.is_empty());

        for i in 0..(MAX_HISTORY as i64 + 5) {
            history.record(entry(i));
        }
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.entries()[0].at, MAX_HISTORY as i64 + 4);
        assert_eq!(history.entries()[MAX_HISTORY - 1].at, 5);

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_csv() {
        let mut history = DrawHistory::new();
        history.record(entry(0));
        history.record(entry(AT));

        let csv = history.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "date,count,min,max,unique,sorted,exclude,seed,result");
        assert_eq!(lines[1], "2024-03-01T12:30:45.123Z,3,1,10,true,true,2 7,abc,1 5 9");
        assert_eq!(lines[2], "1970-01-01T00:00:00.000Z,3,1,10,true,true,2 7,abc,1 5 9");
    }

    #[test]
    fn test_csv_empty_history() {
        assert_eq!(DrawHistory::new().to_csv(), format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_csv_missing_and_awkward_seed() {
        let mut history = DrawHistory::new();
        history.record(HistoryEntry::new(AT, DrawRequest::new(1, 1, 2), vec![2]));
        history.record(HistoryEntry::new(
            AT,
            DrawRequest::new(1, 1, 2).with_seed("a,\"b\""),
            vec![1],
        ));

        let csv = history.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], "2024-03-01T12:30:45.123Z,1,1,2,true,true,,\"a,\"\"b\"\"\",1");
        assert_eq!(lines[2], "2024-03-01T12:30:45.123Z,1,1,2,true,true,,,2");
    }

    #[test]
    fn test_json_round_trip() {
        let mut history = DrawHistory::new();
        history.record(entry(AT));
        let json = history.to_json().unwrap();
        assert!(json.starts_with(r#"[{"at":1709296245123,"params":{"count":3"#));
        assert_eq!(DrawHistory::from_json(&json).unwrap(), history);
    }

    #[test]
    fn test_from_json_truncates() {
        let entries: Vec<HistoryEntry> = (0..80).map(entry).collect();
        let json = serde_json::to_string(&entries).unwrap();
        let history = DrawHistory::from_json(&json).unwrap();
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.entries()[0].at, 0);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(DrawHistory::from_json("{not json").is_err());
    }

    #[test]
    fn test_clipboard_and_share_text() {
        assert_eq!(clipboard_text(&[3, 14, 15]), "3, 14, 15");
        assert_eq!(clipboard_text(&[]), "");

        let req = DrawRequest::new(3, 1, 60);
        assert_eq!(
            share_text(&req, &[3, 14, 15]),
            "Draw results: 3, 14, 15 (between 1 and 60, without repetition)"
        );
        assert_eq!(
            share_text(&req.with_unique(false), &[2, 2]),
            "Draw results: 2, 2 (between 1 and 60, with repetition)"
        );
    }
}
