//! Spatial value types for a car-soccer playing agent: positions and
//! velocities as [`Vector`], orientations as [`Rotation`], and the arena box
//! they are clamped into as [`FieldBounds`].

mod bounds;
mod error;
mod rotation;
mod vector;

pub use bounds::FieldBounds;
pub use error::{Result, SpatialError};
pub use rotation::Rotation;
pub use vector::Vector;
