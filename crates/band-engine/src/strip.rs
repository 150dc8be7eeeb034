//! Run-length grouping of segments into same-sign strips.

use band_charts_shared::Dominance;

use crate::crossing;
use crate::segment::Segment;

/// One point on a strip boundary: shared x, dominant-series y on top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryPoint {
    pub x: f32,
    pub y_top: f32,
    pub y_bot: f32,
}

/// A maximal run of boundary points sharing one dominance sign.
/// Always at least two points long.
#[derive(Debug, Clone, PartialEq)]
pub struct Strip {
    pub points: Vec<BoundaryPoint>,
}

/// Completed strips for one pipeline instantiation, split by class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StripSet {
    pub above: Vec<Strip>,
    pub below: Vec<Strip>,
}

impl StripSet {
    pub fn is_empty(&self) -> bool {
        self.above.is_empty() && self.below.is_empty()
    }
}

/// In-progress strip carried as fold state across the segment sequence.
#[derive(Default)]
struct Extractor {
    sign: Option<Dominance>,
    current: Vec<BoundaryPoint>,
    out: StripSet,
}

impl Extractor {
    /// Completes the open strip. Anything shorter than two points is
    /// discarded silently: it cannot form a polygon.
    fn flush(&mut self) {
        if self.current.len() >= 2 {
            let strip = Strip {
                points: std::mem::take(&mut self.current),
            };
            match self.sign {
                Some(Dominance::Above) => self.out.above.push(strip),
                Some(Dominance::Below) => self.out.below.push(strip),
                None => {}
            }
        }
        self.current.clear();
        self.sign = None;
    }

    fn push(&mut self, seg: &Segment) {
        let s0 = seg.sign0;
        let s1 = seg.sign1;

        // A run continues only when the sign matches and the segment
        // starts where the last point left off; a dropped segment
        // upstream leaves an x-gap that must not be bridged.
        let contiguous = self.current.last().is_some_and(|p| p.x == seg.x0);
        if self.sign != Some(s0) || !contiguous {
            self.flush();
            self.sign = Some(s0);
            self.current.push(seg.boundary0());
        }

        if s0 == s1 {
            self.current.push(seg.boundary1());
            return;
        }

        match crossing::solve(seg) {
            Some(cross) => {
                // A == B at the crossing, so the strip pinches closed
                // there and the next one opens at the same point.
                let pinch = BoundaryPoint {
                    x: cross.x,
                    y_top: cross.y,
                    y_bot: cross.y,
                };
                self.current.push(pinch);
                self.flush();
                self.sign = Some(s1);
                self.current.push(pinch);
                self.current.push(seg.boundary1());
            }
            None => {
                // Degenerate transition: no interior point is invented.
                // The pre-side ends at the segment start and the
                // post-side begins at the segment end.
                self.flush();
                self.sign = Some(s1);
                self.current.push(seg.boundary1());
            }
        }
    }
}

/// Folds the segment sequence into completed strips, one dominance sign
/// per strip, splitting exactly at solvable crossings.
pub fn extract(segments: &[Segment]) -> StripSet {
    let mut extractor = segments
        .iter()
        .fold(Extractor::default(), |mut extractor, seg| {
            extractor.push(seg);
            extractor
        });
    extractor.flush();
    extractor.out
}
