//! Multi-pair orchestration over routes and metric bases.

use std::collections::HashMap;

use band_charts_shared::{BandChartsError, BandChartsResult, BandColors, Region, Row};
use serde::{Deserialize, Serialize};

use crate::continuity::ContinuityPolicy;
use crate::pipeline::{BandPipeline, PairSelection};
use crate::projection::RenderScales;

/// Canonical metric key for one base on one route, in the row map's
/// naming convention.
pub fn metric_key(route: &str, base: &str) -> String {
    format!("{route}_{base}")
}

/// Spread-versus-cost overlay configuration for one chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    pub enabled: bool,
    pub routes: Vec<String>,
    pub spread_bases: Vec<String>,
    pub cost_bases: Vec<String>,
    /// Canonical metric key -> shown. Keys absent from the map count
    /// as shown.
    pub visibility: HashMap<String, bool>,
    pub colors: BandColors,
    pub spread_policy: ContinuityPolicy,
    pub cost_policy: ContinuityPolicy,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            routes: Vec::new(),
            spread_bases: Vec::new(),
            cost_bases: Vec::new(),
            visibility: HashMap::new(),
            colors: BandColors::default(),
            spread_policy: ContinuityPolicy::Interpolate,
            cost_policy: ContinuityPolicy::ForwardFill,
        }
    }
}

impl OverlayConfig {
    pub fn is_visible(&self, key: &str) -> bool {
        self.visibility.get(key).copied().unwrap_or(true)
    }

    /// Advisory validation for the host UI; the compute path stays
    /// total regardless and simply produces nothing for a config that
    /// selects nothing.
    pub fn validate(&self) -> BandChartsResult<()> {
        if self.enabled && self.routes.is_empty() {
            return Err(BandChartsError::MissingConfig {
                field: "routes".to_string(),
            });
        }
        for (name, bases) in [
            ("spread_bases", &self.spread_bases),
            ("cost_bases", &self.cost_bases),
        ] {
            let mut seen = bases.clone();
            seen.sort();
            seen.dedup();
            if seen.len() != bases.len() {
                return Err(BandChartsError::InvalidConfig {
                    message: format!("duplicate entries in {name}"),
                    field: Some(name.to_string()),
                });
            }
        }
        Ok(())
    }
}

/// Fans the single-pair pipeline out over every enabled
/// (route, spread base, cost base) combination.
///
/// Combinations are independent and order-insensitive; each reads only
/// its own slice of the immutable input, so results never interact.
pub struct BandOverlay {
    config: OverlayConfig,
}

impl BandOverlay {
    pub fn new(config: OverlayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Computes the merged region list for the rendering layer. A
    /// combination runs only when the overlay is enabled and both of
    /// its member metrics are visible.
    pub fn compute(&self, rows: &[Row], scales: Option<&RenderScales>) -> Vec<Region> {
        if !self.config.enabled {
            return Vec::new();
        }

        let pipeline = BandPipeline::new(self.config.colors.clone());
        let mut regions = Vec::new();
        for route in &self.config.routes {
            for spread in &self.config.spread_bases {
                for cost in &self.config.cost_bases {
                    let a_key = metric_key(route, spread);
                    let b_key = metric_key(route, cost);
                    if !self.config.is_visible(&a_key) || !self.config.is_visible(&b_key) {
                        continue;
                    }
                    let pair = PairSelection {
                        a_key: &a_key,
                        b_key: &b_key,
                        a_policy: self.config.spread_policy,
                        b_policy: self.config.cost_policy,
                    };
                    let id = format!("{route}:{spread}:{cost}");
                    regions.extend(pipeline.run(rows, &pair, scales, &id));
                }
            }
        }
        log::debug!(
            "band overlay produced {} regions across {} routes",
            regions.len(),
            self.config.routes.len()
        );
        regions
    }
}
