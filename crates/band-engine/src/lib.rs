//! Dual-series band-segmentation engine.
//!
//! Given two numeric series sampled at a shared ordered set of
//! x-positions, the engine determines which series dominates at every
//! position, finds the points where dominance flips, and emits closed
//! polygons suitable for filled rendering, one color per dominance
//! class.
//!
//! The whole computation is a pure function of its inputs: rows, metric
//! selection, continuity policies, scale functions, and visibility
//! flags. Every failure mode degrades to an empty result rather than an
//! error.

pub mod cleaning;
pub mod continuity;
pub mod crossing;
pub mod overlay;
pub mod path;
pub mod pipeline;
pub mod projection;
pub mod segment;
pub mod strip;

pub use continuity::{ContinuityPolicy, ResolvedSample};
pub use crossing::Crossing;
pub use overlay::{metric_key, BandOverlay, OverlayConfig};
pub use pipeline::{BandPipeline, PairSelection};
pub use projection::{ProjectedSample, RenderScales, Scale};
pub use segment::Segment;
pub use strip::{BoundaryPoint, Strip, StripSet};
