//! A two-dimensional configuration-space engine for sampling-based motion planning.
//!
//! The crate models a rectangular workspace populated with heterogeneous geometric
//! obstacles and answers the feasibility, distance and edge-visibility queries a
//! motion planner needs to decide whether straight-line motion between two
//! configurations is collision-free.

/// Geometric primitives and base algorithms
pub mod geometry;

/// Obstacle storage and the configuration space built on top of it
pub mod cspace;

/// Edge-visibility planning against a configuration space
pub mod planning;

/// Exporting a configuration space out of this library for rendering/debugging
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
