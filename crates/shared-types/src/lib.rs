//! Shared types for the band-charts workspace.
//!
//! This crate contains the types that cross the boundary between the
//! segmentation engine and the host chart layer: input rows, dominance
//! classification, fill styling, and the renderable region output.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

mod errors;

pub use errors::{BandChartsError, BandChartsResult};

/// X-key for rows and samples, as Unix epoch seconds.
pub type Timestamp = i64;

/// One cleaned input row: a shared x-key plus per-metric readings.
///
/// A metric key that is absent from `values`, or mapped to a non-finite
/// number, counts as a missing reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub timestamp: Timestamp,
    pub values: HashMap<String, f64>,
}

impl Row {
    pub fn new(timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            values: HashMap::new(),
        }
    }

    pub fn with_value(mut self, key: &str, value: f64) -> Self {
        self.values.insert(key.to_string(), value);
        self
    }

    /// Reading for `key`, with absent and non-finite entries both
    /// reported as missing.
    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied().filter(|v| v.is_finite())
    }
}

/// Which of the two compared series is greater at a sample.
///
/// `Above` means the A series is strictly greater; ties classify as
/// `Below`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dominance {
    Above,
    Below,
}

impl Dominance {
    pub fn of(a: f64, b: f64) -> Self {
        if a > b {
            Dominance::Above
        } else {
            Dominance::Below
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dominance::Above => "above",
            Dominance::Below => "below",
        }
    }
}

/// Fill styling for the two dominance classes, RGBA in 0..1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandColors {
    pub above: [f32; 4],
    pub below: [f32; 4],
}

impl Default for BandColors {
    fn default() -> Self {
        Self {
            above: [0.2, 0.6, 1.0, 0.35],
            below: [1.0, 0.3, 0.2, 0.35],
        }
    }
}

impl BandColors {
    pub fn fill(&self, dominance: Dominance) -> [f32; 4] {
        match dominance {
            Dominance::Above => self.above,
            Dominance::Below => self.below,
        }
    }
}

/// One renderable filled polygon in render-space coordinates.
///
/// `outline` traces the top boundary left to right, the bottom boundary
/// right to left, and repeats the first point for explicit closure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub dominance: Dominance,
    pub outline: Vec<[f32; 2]>,
    pub color: [f32; 4],
}
