//! Progress ring geometry.
//!
//! Pipeline for one ring:
//! - clamp progress to one lap and fold the excess into the phase
//! - split the lap with [`partition_once`] and lay the halves out with [`cumulate`]
//! - turn each non-empty segment into an arc, a mask and a fill
//! - sample colors through [`ColorSampler`]
//!
//! All of it is pure: the same [`RingSpec`] always yields the same
//! [`RingDescriptor`], so rings can be built independently or in parallel.

mod descriptor;
mod error;
mod ids;
mod partition;
mod sampler;
mod segments;
mod spec;
mod stack;
mod style;

pub use descriptor::{ArcPath, LeadingEdgeMarker, MaskSpec, PaintItem, RingDescriptor, RingFill};
pub use error::RingError;
pub use ids::IdAllocator;
pub use partition::partition_once;
pub use sampler::ColorSampler;
pub use segments::{cumulate, Segment};
pub use spec::{progress_to_angle, RingSpec};
pub use stack::{activity_palette, ConcentricLayout};
pub use style::{
    GradientAxis, LapThreshold, MarkerStyle, RestFill, RingStyle, SegmentOrder, StopLayout,
    StopPlacement,
};

/// One full revolution, in radians.
pub const LAP: f32 = std::f32::consts::TAU;
