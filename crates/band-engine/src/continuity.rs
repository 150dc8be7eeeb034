//! Missing-data reconstruction for a pair of series sharing one x-axis.

use band_charts_shared::{Row, Timestamp};
use serde::{Deserialize, Serialize};

/// Substitution rule for positions where a series has no reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContinuityPolicy {
    /// Linear interpolation between the nearest valid neighbors on
    /// either side. Positions before the first or after the last valid
    /// reading stay unresolved.
    Interpolate,
    /// Carry the most recent valid reading forward. Positions before
    /// the first valid reading stay unresolved.
    ForwardFill,
}

/// A position where both series produced a usable value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSample {
    pub timestamp: Timestamp,
    pub a: f64,
    pub b: f64,
}

/// Resolves both series over `rows` and emits a sample at every index
/// where the two resolutions both succeed. Emission follows row order;
/// indices where either side stays unresolved contribute nothing.
pub fn resolve(
    rows: &[Row],
    a_key: &str,
    b_key: &str,
    a_policy: ContinuityPolicy,
    b_policy: ContinuityPolicy,
) -> Vec<ResolvedSample> {
    let a = resolve_series(rows, a_key, a_policy);
    let b = resolve_series(rows, b_key, b_policy);

    rows.iter()
        .zip(a)
        .zip(b)
        .filter_map(|((row, a), b)| {
            Some(ResolvedSample {
                timestamp: row.timestamp,
                a: a?,
                b: b?,
            })
        })
        .collect()
}

fn resolve_series(rows: &[Row], key: &str, policy: ContinuityPolicy) -> Vec<Option<f64>> {
    let raw: Vec<Option<f64>> = rows.iter().map(|row| row.value(key)).collect();
    match policy {
        ContinuityPolicy::ForwardFill => forward_fill(&raw),
        ContinuityPolicy::Interpolate => interpolate(rows, &raw),
    }
}

fn forward_fill(raw: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut last = None;
    raw.iter()
        .map(|value| {
            if value.is_some() {
                last = *value;
            }
            last
        })
        .collect()
}

fn interpolate(rows: &[Row], raw: &[Option<f64>]) -> Vec<Option<f64>> {
    (0..raw.len())
        .map(|i| {
            // Identity at anchors: a present reading is never altered.
            if raw[i].is_some() {
                return raw[i];
            }
            let left = (0..i).rev().find(|&j| raw[j].is_some())?;
            let right = (i + 1..raw.len()).find(|&j| raw[j].is_some())?;

            let x = rows[i].timestamp as f64;
            let x0 = rows[left].timestamp as f64;
            let x1 = rows[right].timestamp as f64;
            if x0 == x1 {
                return None;
            }
            let y0 = raw[left]?;
            let y1 = raw[right]?;
            let t = (x - x0) / (x1 - x0);
            Some(y0 + (y1 - y0) * t)
        })
        .collect()
}
