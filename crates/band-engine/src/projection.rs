//! Domain-to-render-space projection through caller-supplied scales.

use band_charts_shared::Dominance;

use crate::continuity::ResolvedSample;

/// Caller-supplied mapping from a domain value to a render-space
/// number. The engine treats scales as opaque and never caches one
/// across invocations; the host chart recomputes them per draw.
pub trait Scale {
    fn project(&self, value: f64) -> f32;
}

impl<F> Scale for F
where
    F: Fn(f64) -> f32,
{
    fn project(&self, value: f64) -> f32 {
        self(value)
    }
}

/// The x/y scale pair for one draw pass.
pub struct RenderScales<'a> {
    pub x: &'a dyn Scale,
    pub y: &'a dyn Scale,
}

/// A resolved sample mapped into render space, tagged with the
/// dominance of its domain values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedSample {
    pub x: f32,
    pub y_a: f32,
    pub y_b: f32,
    pub dominance: Dominance,
}

pub fn project(sample: &ResolvedSample, scales: &RenderScales) -> ProjectedSample {
    ProjectedSample {
        x: scales.x.project(sample.timestamp as f64),
        y_a: scales.y.project(sample.a),
        y_b: scales.y.project(sample.b),
        dominance: Dominance::of(sample.a, sample.b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_through_both_scales() {
        let sample = ResolvedSample {
            timestamp: 10,
            a: 2.0,
            b: 1.0,
        };
        let x_scale = |v: f64| (v * 3.0) as f32;
        let y_scale = |v: f64| (100.0 - v * 10.0) as f32;
        let scales = RenderScales {
            x: &x_scale,
            y: &y_scale,
        };

        let projected = project(&sample, &scales);
        assert_eq!(projected.x, 30.0);
        assert_eq!(projected.y_a, 80.0);
        assert_eq!(projected.y_b, 90.0);
        assert_eq!(projected.dominance, Dominance::Above);
    }

    #[test]
    fn dominance_comes_from_domain_values_not_pixels() {
        // A y-flipped scale must not affect the dominance tag, and a
        // tie classifies as Below.
        let sample = ResolvedSample {
            timestamp: 0,
            a: 1.0,
            b: 1.0,
        };
        let x_scale = |v: f64| v as f32;
        let y_scale = |v: f64| -v as f32;
        let scales = RenderScales {
            x: &x_scale,
            y: &y_scale,
        };

        assert_eq!(project(&sample, &scales).dominance, Dominance::Below);
    }
}
