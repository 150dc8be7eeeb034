//! Closed-polygon assembly from strips.

use band_charts_shared::{Dominance, Region};

use crate::strip::Strip;

/// Builds the closed fill outline for one strip: top boundary left to
/// right, bottom boundary right to left, first point repeated so
/// consumers can render without implicit closure rules.
///
/// Returns `None` for strips shorter than two points; the extractor
/// never emits those, but the assembly stays total.
pub fn build_region(
    strip: &Strip,
    dominance: Dominance,
    id: String,
    color: [f32; 4],
) -> Option<Region> {
    if strip.points.len() < 2 {
        return None;
    }

    let mut outline = Vec::with_capacity(strip.points.len() * 2 + 1);
    for point in &strip.points {
        outline.push([point.x, point.y_top]);
    }
    for point in strip.points.iter().rev() {
        outline.push([point.x, point.y_bot]);
    }
    outline.push(outline[0]);

    Some(Region {
        id,
        dominance,
        outline,
        color,
    })
}
