//! Adjacent-sample segment construction in render space.

use band_charts_shared::Dominance;

use crate::projection::ProjectedSample;
use crate::strip::BoundaryPoint;

/// One adjacent-sample span in render space. All six coordinates are
/// finite by construction; candidates failing that are dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x0: f32,
    pub x1: f32,
    pub y_a0: f32,
    pub y_a1: f32,
    pub y_b0: f32,
    pub y_b1: f32,
    pub sign0: Dominance,
    pub sign1: Dominance,
}

impl Segment {
    /// Strip boundary point at the segment start, with the dominant
    /// series on top.
    pub fn boundary0(&self) -> BoundaryPoint {
        boundary(self.x0, self.y_a0, self.y_b0, self.sign0)
    }

    /// Strip boundary point at the segment end.
    pub fn boundary1(&self) -> BoundaryPoint {
        boundary(self.x1, self.y_a1, self.y_b1, self.sign1)
    }
}

fn boundary(x: f32, y_a: f32, y_b: f32, sign: Dominance) -> BoundaryPoint {
    match sign {
        Dominance::Above => BoundaryPoint {
            x,
            y_top: y_a,
            y_bot: y_b,
        },
        Dominance::Below => BoundaryPoint {
            x,
            y_top: y_b,
            y_bot: y_a,
        },
    }
}

/// Builds one segment per adjacent sample pair. A segment with any
/// non-finite coordinate (scale-function edge cases) is skipped without
/// aborting the remaining sequence.
pub fn build_segments(samples: &[ProjectedSample]) -> Vec<Segment> {
    samples
        .windows(2)
        .filter_map(|pair| {
            let (p0, p1) = (pair[0], pair[1]);
            let coords = [p0.x, p1.x, p0.y_a, p1.y_a, p0.y_b, p1.y_b];
            if coords.iter().any(|c| !c.is_finite()) {
                log::debug!(
                    "dropping segment with non-finite coordinate near x={}",
                    if p0.x.is_finite() { p0.x } else { p1.x }
                );
                return None;
            }
            Some(Segment {
                x0: p0.x,
                x1: p1.x,
                y_a0: p0.y_a,
                y_a1: p1.y_a,
                y_b0: p0.y_b,
                y_b1: p1.y_b,
                sign0: p0.dominance,
                sign1: p1.dominance,
            })
        })
        .collect()
}
