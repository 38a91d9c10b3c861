use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::bounds::FieldBounds;
use crate::error::{take_three, Result, SpatialError};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
/// Represents a point or direction in arena space
///
/// Equality is exact per component; there is no tolerance.
///
/// # Examples
/// ```rust
/// use spatial::Vector;
///
/// let pos = Vector::new(10.0, 5.0, 2.5);
/// assert_eq!(pos.as_array(), [10.0, 5.0, 2.5]);
/// ```
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    /// Creates a new `Vector` instance.
    ///
    /// # Arguments
    /// * `x` - The x-coordinate.
    /// * `y` - The y-coordinate.
    /// * `z` - The z-coordinate.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Builds a `Vector` from the first three elements of `values`.
    ///
    /// # Errors
    /// `SpatialError::TooFewComponents` when fewer than three values are given.
    ///
    /// # Examples
    /// ```rust
    /// use spatial::Vector;
    ///
    /// let v = Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(v, Vector::new(1.0, 2.0, 3.0));
    /// assert!(Vector::from_slice(&[1.0]).is_err());
    /// ```
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let [x, y, z] = take_three(values)?;
        Ok(Self::new(x, y, z))
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean norm.
    pub fn length(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    /// Returns the vector scaled to unit length.
    ///
    /// A zero-length vector yields `Vector(1, 1, 1)`, which is not a unit
    /// vector. Callers comparing against zero should check `length` first.
    pub fn normalized(&self) -> Self {
        let length = self.length();
        if length == 0.0 {
            Self::new(1.0, 1.0, 1.0)
        } else {
            *self / length
        }
    }

    /// Clamps every axis into the standard arena box.
    pub fn bounded(&self) -> Self {
        self.bounded_within(&FieldBounds::STANDARD)
    }

    /// Clamps every axis into `bounds`.
    pub fn bounded_within(&self, bounds: &FieldBounds) -> Self {
        bounds.clamp(self)
    }

    /// Projection onto the ground plane.
    pub fn flat(&self) -> Self {
        Self::new(self.x, self.y, 0.0)
    }

    pub fn distance(&self, other: &Vector) -> f64 {
        (*self - *other).length().abs()
    }

    /// Signed heading correction, in radians, that turns this vector's ground
    /// heading onto `other`'s.
    ///
    /// Headings are measured with `atan2(y, -x)` to follow the engine's
    /// mirrored x axis. The result is wrapped into `[-PI, PI]`.
    pub fn angle_2d(&self, other: &Vector) -> f64 {
        let current_radians = self.y.atan2(-self.x);
        let ideal_radians = other.y.atan2(-other.x);
        let mut correction = ideal_radians - current_radians;

        if correction.abs() > PI {
            if correction < 0.0 {
                correction += 2.0 * PI;
            } else {
                correction -= 2.0 * PI;
            }
        }

        correction
    }

    /// Divides every component by `divisor`.
    ///
    /// # Errors
    /// `SpatialError::DivisionByZero` when `divisor` is zero.
    pub fn try_div(&self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            return Err(SpatialError::DivisionByZero);
        }
        Ok(*self / divisor)
    }

    /// Divides component-wise by `divisor`.
    ///
    /// # Errors
    /// `SpatialError::DivisionByZero` when `divisor` has zero length or any
    /// zero component.
    pub fn try_div_components(&self, divisor: &Vector) -> Result<Self> {
        if divisor.length() == 0.0 || divisor.as_array().contains(&0.0) {
            return Err(SpatialError::DivisionByZero);
        }
        Ok(*self / *divisor)
    }
}

impl Default for Vector {
    /// Provides a default `Vector` instance with all coordinates set to `0.0`.
    fn default() -> Self {
        Self::new(0., 0., 0.)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({:?}, {:?}, {:?})", self.x, self.y, self.z)
    }
}

impl From<[f64; 3]> for Vector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f32; 3]> for Vector {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x.into(), y.into(), z.into())
    }
}

impl From<[i32; 3]> for Vector {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x.into(), y.into(), z.into())
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = SpatialError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = SpatialError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::from_slice(&values)
    }
}

#[cfg(feature = "bevy")]
impl From<bevy::math::Vec3> for Vector {
    fn from(vec: bevy::math::Vec3) -> Self {
        Self::new(vec.x.into(), vec.y.into(), vec.z.into())
    }
}

#[cfg(feature = "bevy")]
impl From<Vector> for bevy::math::Vec3 {
    fn from(vec: Vector) -> Self {
        bevy::math::Vec3::new(vec.x as f32, vec.y as f32, vec.z as f32)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        Vector::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: Vector) -> Vector {
        vector * self
    }
}

impl Mul for Vector {
    type Output = Vector;

    fn mul(self, other: Vector) -> Vector {
        Vector::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }
}

/// Plain IEEE division; a zero divisor gives infinities or NaN. Use
/// [`Vector::try_div`] to reject it instead.
impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, divisor: f64) -> Vector {
        Vector::new(self.x / divisor, self.y / divisor, self.z / divisor)
    }
}

impl Div for Vector {
    type Output = Vector;

    fn div(self, other: Vector) -> Vector {
        Vector::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self * -1.0
    }
}
