use serde::{Deserialize, Serialize};
use spatial::{Rotation, Vector};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
/// Represents a car's spatial state for a single game tick
///
/// # Fields
/// - `position`: Location in arena coordinates
/// - `velocity`: Velocity in units per second
/// - `rotation`: Orientation, with pitch and yaw in radians
pub struct CarState {
    pub position: Vector,
    #[serde(default)]
    pub velocity: Vector,
    #[serde(default)]
    pub rotation: Rotation,
}

impl CarState {
    /// Creates a new `CarState` instance
    ///
    /// # Arguments
    /// - `position`: The car's location
    /// - `velocity`: The car's velocity
    /// - `rotation`: The car's orientation
    pub fn new(position: Vector, velocity: Vector, rotation: Rotation) -> Self {
        Self {
            position,
            velocity,
            rotation,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
/// Raw game state handed to the probe: one car and the point it is steering to
pub struct Frame {
    pub car: CarState,
    pub target: Vector,
}
