//! Single-pair segmentation pipeline: rows in, filled regions out.

use band_charts_shared::{BandColors, Dominance, Region, Row};

use crate::continuity::{self, ContinuityPolicy};
use crate::path;
use crate::projection::{self, RenderScales};
use crate::segment;
use crate::strip::{self, StripSet};

/// The metric pair one pipeline instantiation compares, with the
/// continuity policy for each series role chosen independently.
#[derive(Debug, Clone, Copy)]
pub struct PairSelection<'a> {
    pub a_key: &'a str,
    pub b_key: &'a str,
    pub a_policy: ContinuityPolicy,
    pub b_policy: ContinuityPolicy,
}

/// Pure, deterministic band computation for one metric pair. Every
/// invocation recomputes from scratch; callers memoize on the input
/// tuple if they want to, correctness never depends on it.
pub struct BandPipeline {
    colors: BandColors,
}

impl BandPipeline {
    pub fn new(colors: BandColors) -> Self {
        Self { colors }
    }

    /// Runs the full pipeline. Absent scales or fewer than two usable
    /// samples yield an empty list; no input makes this fail.
    pub fn run(
        &self,
        rows: &[Row],
        pair: &PairSelection,
        scales: Option<&RenderScales>,
        id: &str,
    ) -> Vec<Region> {
        let strips = self.strips(rows, pair, scales, id);

        let mut regions = Vec::with_capacity(strips.above.len() + strips.below.len());
        for (dominance, class) in [
            (Dominance::Above, &strips.above),
            (Dominance::Below, &strips.below),
        ] {
            for (i, s) in class.iter().enumerate() {
                let region_id = format!("{id}:{}:{i}", dominance.as_str());
                regions.extend(path::build_region(
                    s,
                    dominance,
                    region_id,
                    self.colors.fill(dominance),
                ));
            }
        }
        regions
    }

    /// The strip stage of [`run`](Self::run), exposed for callers that
    /// do their own path assembly.
    pub fn strips(
        &self,
        rows: &[Row],
        pair: &PairSelection,
        scales: Option<&RenderScales>,
        id: &str,
    ) -> StripSet {
        let Some(scales) = scales else {
            log::debug!("scales unavailable, skipping band computation for {id}");
            return StripSet::default();
        };

        let samples =
            continuity::resolve(rows, pair.a_key, pair.b_key, pair.a_policy, pair.b_policy);
        if samples.len() < 2 {
            log::debug!(
                "{} resolved samples for {id}, need at least 2",
                samples.len()
            );
            return StripSet::default();
        }

        let projected: Vec<_> = samples
            .iter()
            .map(|sample| projection::project(sample, scales))
            .collect();
        let segments = segment::build_segments(&projected);
        strip::extract(&segments)
    }
}

impl Default for BandPipeline {
    fn default() -> Self {
        Self::new(BandColors::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::RenderScales;

    fn pair<'a>() -> PairSelection<'a> {
        PairSelection {
            a_key: "a",
            b_key: "b",
            a_policy: ContinuityPolicy::Interpolate,
            b_policy: ContinuityPolicy::Interpolate,
        }
    }

    fn rows(points: &[(i64, f64, f64)]) -> Vec<Row> {
        points
            .iter()
            .map(|&(ts, a, b)| Row::new(ts).with_value("a", a).with_value("b", b))
            .collect()
    }

    #[test]
    fn absent_scales_short_circuit_to_empty() {
        let rows = rows(&[(0, 1.0, 0.0), (1, 2.0, 0.0)]);
        let regions = BandPipeline::default().run(&rows, &pair(), None, "p");
        assert!(regions.is_empty());
    }

    #[test]
    fn single_row_yields_empty() {
        let rows = rows(&[(0, 1.0, 0.0)]);
        let x_scale = |v: f64| v as f32;
        let y_scale = |v: f64| v as f32;
        let scales = RenderScales {
            x: &x_scale,
            y: &y_scale,
        };

        let regions = BandPipeline::default().run(&rows, &pair(), Some(&scales), "p");
        assert!(regions.is_empty());
    }

    #[test]
    fn region_ids_carry_class_and_index() {
        let rows = rows(&[(0, 1.0, 0.0), (1, -1.0, 0.0)]);
        let x_scale = |v: f64| v as f32;
        let y_scale = |v: f64| v as f32;
        let scales = RenderScales {
            x: &x_scale,
            y: &y_scale,
        };

        let regions = BandPipeline::default().run(&rows, &pair(), Some(&scales), "route:s:c");
        let ids: Vec<_> = regions.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["route:s:c:above:0", "route:s:c:below:0"]);
    }

    #[test]
    fn colors_follow_dominance_class() {
        let colors = BandColors {
            above: [0.1, 0.2, 0.3, 0.4],
            below: [0.5, 0.6, 0.7, 0.8],
        };
        let rows = rows(&[(0, 1.0, 0.0), (1, -1.0, 0.0)]);
        let x_scale = |v: f64| v as f32;
        let y_scale = |v: f64| v as f32;
        let scales = RenderScales {
            x: &x_scale,
            y: &y_scale,
        };

        let regions = BandPipeline::new(colors.clone()).run(&rows, &pair(), Some(&scales), "p");
        assert_eq!(regions[0].color, colors.above);
        assert_eq!(regions[1].color, colors.below);
    }
}
