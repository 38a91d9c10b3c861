use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{take_three, Result, SpatialError};
use crate::vector::Vector;

/// Number of angle units in a full turn.
const FULL_TURN: i64 = 0x10000;
/// Largest angle kept as-is by normalization; anything above wraps negative.
const MAX_ANGLE: f64 = 0x7FFF as f64;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
/// Represents a car's orientation in 3D space
///
/// Angles use the engine's 16-bit encoding, where 65536 units make a full
/// turn.
///
/// # Examples
/// ```rust
/// use spatial::Rotation;
///
/// let rot = Rotation::new(0.0, 40000.0, 0.0).normalized();
/// assert_eq!(rot, Rotation::new(0.0, -25536.0, 0.0));
/// ```
pub struct Rotation {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl Rotation {
    /// Creates a new `Rotation` instance with the given pitch, yaw, and roll.
    pub const fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Builds a `Rotation` from `[pitch, yaw, roll, ..]`.
    ///
    /// # Errors
    /// `SpatialError::TooFewComponents` when fewer than three values are given.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let [pitch, yaw, roll] = take_three(values)?;
        Ok(Self::new(pitch, yaw, roll))
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.pitch, self.yaw, self.roll]
    }

    /// Wraps every axis into the signed 16-bit range, keeping any fractional
    /// part of the angle.
    pub fn normalized(&self) -> Self {
        Self::new(
            normalize_axis(self.pitch),
            normalize_axis(self.yaw),
            normalize_axis(self.roll),
        )
    }

    /// Forward direction for this orientation. Roll has no effect.
    pub fn as_vector(&self) -> Vector {
        let cos_pitch = self.pitch.cos();
        Vector::new(
            self.yaw.cos() * cos_pitch,
            self.yaw.sin() * cos_pitch,
            self.pitch.sin(),
        )
    }
}

/// Rounds half up, wraps modulo 65536, adds the fraction back and shifts
/// values above 32767 down by a full turn.
///
/// NaN and infinities come out non-finite.
fn normalize_axis(angle: f64) -> f64 {
    let rounded = (angle + 0.5).floor();
    // Saturating cast; non-finite angles are carried by the fraction below.
    let wrapped = (rounded as i64).rem_euclid(FULL_TURN) as f64;
    let mut norm = wrapped + (angle - rounded);

    if norm > MAX_ANGLE {
        norm -= FULL_TURN as f64;
    }

    norm
}

impl Default for Rotation {
    /// Returns a default `Rotation` with all values set to 0.0.
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rotation({:?}, {:?}, {:?})",
            self.pitch, self.yaw, self.roll
        )
    }
}

impl From<[f64; 3]> for Rotation {
    fn from([pitch, yaw, roll]: [f64; 3]) -> Self {
        Self::new(pitch, yaw, roll)
    }
}

impl TryFrom<&[f64]> for Rotation {
    type Error = SpatialError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl TryFrom<Vec<f64>> for Rotation {
    type Error = SpatialError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::from_slice(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_zero_rotation_is_normalized() {
        assert_eq!(Rotation::default().normalized(), Rotation::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_normalize_wraps_into_signed_range() {
        let rot = Rotation::new(40000.0, 65536.0, -40000.0).normalized();

        assert_eq!(rot, Rotation::new(-25536.0, 0.0, 25536.0));

        let edges = Rotation::new(32767.0, -32768.0, 0.0);
        assert_eq!(edges.normalized(), edges);
    }

    #[test]
    fn test_normalize_keeps_fraction() {
        let rot = Rotation::new(100.25, -1.25, 65536.5).normalized();

        assert_eq!(rot.pitch, 100.25);
        assert_eq!(rot.yaw, -1.25);
        // 65536.5 rounds up to 65537 -> 1, fraction -0.5
        assert_eq!(rot.roll, 0.5);
    }

    #[test]
    fn test_normalize_rounds_half_up() {
        // -0.5 rounds to 0, not -1
        assert_eq!(Rotation::new(-0.5, 0.0, 0.0).normalized().pitch, -0.5);
        // Just past the top of the range the fraction pushes it over.
        assert_eq!(Rotation::new(32767.5, 0.0, 0.0).normalized().pitch, -32768.5);
    }

    #[test]
    fn test_normalize_negative_turns() {
        let rot = Rotation::new(-65536.0 * 3.0 - 10.0, 0.0, 0.0).normalized();
        assert_eq!(rot.pitch, -10.0);
    }

    #[test]
    fn test_normalize_non_finite() {
        let rot = Rotation::new(f64::NAN, f64::INFINITY, 0.0).normalized();

        assert!(rot.pitch.is_nan());
        assert!(!rot.yaw.is_finite());
        assert_eq!(rot.roll, 0.0);
    }

    #[test]
    fn test_as_vector() {
        assert_eq!(Rotation::new(0.0, 0.0, 0.0).as_vector(), Vector::new(1.0, 0.0, 0.0));

        let up = Rotation::new(FRAC_PI_2, 0.0, 0.0).as_vector();
        assert!(up.x.abs() < 1e-12);
        assert_eq!(up.z, 1.0);

        let side = Rotation::new(0.0, FRAC_PI_2, 1.0).as_vector();
        assert!(side.x.abs() < 1e-12);
        assert_eq!(side.y, 1.0);
        assert_eq!(side.z, 0.0);
    }

    #[test]
    fn test_roll_is_ignored() {
        let a = Rotation::new(0.3, 1.2, 0.0).as_vector();
        let b = Rotation::new(0.3, 1.2, 2.7).as_vector();
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_slice() {
        let rot = Rotation::from_slice(&[1.0, 2.0, 3.0]).unwrap();

        assert_eq!(rot, Rotation::new(1.0, 2.0, 3.0));
        assert_eq!(Rotation::from_slice(&rot.as_array()).unwrap(), rot);
        assert!(matches!(
            Rotation::try_from(Vec::<f64>::new()),
            Err(SpatialError::TooFewComponents { expected: 3, found: 0 })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Rotation::new(0.0, 1.5, -2.0).to_string(),
            "Rotation(0.0, 1.5, -2.0)"
        );
    }
}
