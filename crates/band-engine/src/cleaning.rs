//! Weekend deduplication over raw rows.
//!
//! Data sources that republish an unchanged snapshot over the weekend
//! produce duplicate rows. Rows are grouped by ISO week; within a week,
//! a weekend row whose non-timestamp fields match an earlier weekend
//! row is dropped. Weekday rows are never deduplicated, identical or
//! not.

use std::collections::HashMap;

use band_charts_shared::{Row, Timestamp};
use chrono::{DateTime, Datelike, Weekday};

fn iso_week_key(ts: Timestamp) -> Option<(i32, u32)> {
    let date = DateTime::from_timestamp(ts, 0)?;
    let week = date.iso_week();
    Some((week.year(), week.week()))
}

fn is_weekend(ts: Timestamp) -> bool {
    DateTime::from_timestamp(ts, 0)
        .map(|date| matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
        .unwrap_or(false)
}

/// Equality key over the non-timestamp fields. Bit patterns make the
/// float comparison total and deterministic.
fn value_key(row: &Row) -> Vec<(String, u64)> {
    let mut entries: Vec<_> = row
        .values
        .iter()
        .map(|(key, value)| (key.clone(), value.to_bits()))
        .collect();
    entries.sort();
    entries
}

/// Removes repeated weekend rows, preserving input order otherwise.
pub fn dedup_weekends(rows: &[Row]) -> Vec<Row> {
    let mut seen: HashMap<(i32, u32), Vec<Vec<(String, u64)>>> = HashMap::new();
    let mut out = Vec::with_capacity(rows.len());

    for row in rows {
        if is_weekend(row.timestamp) {
            if let Some(week) = iso_week_key(row.timestamp) {
                let key = value_key(row);
                let week_entries = seen.entry(week).or_default();
                if week_entries.contains(&key) {
                    log::debug!("dropping duplicate weekend row at ts={}", row.timestamp);
                    continue;
                }
                week_entries.push(key);
            }
        }
        out.push(row.clone());
    }
    out
}
