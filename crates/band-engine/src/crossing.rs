//! Interior crossing solver for sign-change segments.

use crate::segment::Segment;

/// Render-space point where the two series coincide inside a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    pub x: f32,
    pub y: f32,
}

/// Solves the crossing of a segment whose endpoint signs differ, by
/// linear interpolation in render space.
///
/// Returns `None` when the endpoint differences are parallel
/// (`diff0 == diff1`) or when the implied parametric position falls
/// outside the strict interior `(0, 1)`; the strip extractor then
/// treats the transition as an abrupt break.
pub fn solve(seg: &Segment) -> Option<Crossing> {
    let diff0 = seg.y_b0 - seg.y_a0;
    let diff1 = seg.y_b1 - seg.y_a1;
    if diff0 == diff1 {
        return None;
    }
    let t = diff0 / (diff0 - diff1);
    if !(t > 0.0 && t < 1.0) {
        return None;
    }
    Some(Crossing {
        x: seg.x0 + (seg.x1 - seg.x0) * t,
        y: seg.y_a0 + (seg.y_a1 - seg.y_a0) * t,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use band_charts_shared::Dominance;

    fn seg(y_a0: f32, y_a1: f32, y_b0: f32, y_b1: f32) -> Segment {
        Segment {
            x0: 0.0,
            x1: 1.0,
            y_a0,
            y_a1,
            y_b0,
            y_b1,
            sign0: Dominance::of(y_a0 as f64, y_b0 as f64),
            sign1: Dominance::of(y_a1 as f64, y_b1 as f64),
        }
    }

    #[test]
    fn symmetric_flip_crosses_at_midpoint() {
        let crossing = solve(&seg(1.0, -1.0, 0.0, 0.0)).unwrap();
        assert_eq!(crossing.x, 0.5);
        assert_eq!(crossing.y, 0.0);
    }

    #[test]
    fn interpolates_both_coordinates() {
        // A falls from 3 to 0, B rises from 0 to 3: t = 0.5.
        let crossing = solve(&seg(3.0, 0.0, 0.0, 3.0)).unwrap();
        assert_eq!(crossing.x, 0.5);
        assert_eq!(crossing.y, 1.5);
    }

    #[test]
    fn parallel_differences_have_no_crossing() {
        assert_eq!(solve(&seg(1.0, 2.0, 0.0, 1.0)), None);
    }

    #[test]
    fn crossing_at_an_endpoint_is_rejected() {
        // diff0 == 0 puts t exactly at 0.
        assert_eq!(solve(&seg(1.0, 0.0, 1.0, 1.0)), None);
        // diff1 == 0 puts t exactly at 1.
        assert_eq!(solve(&seg(0.0, 1.0, 1.0, 1.0)), None);
    }

    #[test]
    fn solved_parameter_is_strictly_interior() {
        for (a0, a1) in [(5.0, -0.25), (0.1, -9.0), (2.0, -2.0)] {
            let seg = seg(a0, a1, 0.0, 0.0);
            let crossing = solve(&seg).unwrap();
            assert!(crossing.x > seg.x0 && crossing.x < seg.x1);
        }
    }
}
