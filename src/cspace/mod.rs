mod collection;
mod obstacle;
mod space;

/// Uniform sampling helpers backing [`CSpace::sample`] and [`CSpace::sample_neighborhood`]
pub mod sampling;

#[doc(inline)]
pub use collection::{CIRCLE_TESSELLATION, ObstacleCollection};
#[doc(inline)]
pub use obstacle::{Obstacle, ObstacleKind};
#[doc(inline)]
pub use space::{BOUNDARY_FACES, CSpace, CSpaceConfig, Metric};
