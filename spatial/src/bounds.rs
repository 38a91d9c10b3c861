use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpatialError};
use crate::vector::Vector;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
/// Axis-aligned box that positions are clamped into
///
/// # Examples
/// ```rust
/// use spatial::{FieldBounds, Vector};
///
/// let bounds = FieldBounds::default().with_z(0.0, 100.0);
/// assert_eq!(bounds.clamp(&Vector::new(0.0, 0.0, 500.0)), Vector::new(0.0, 0.0, 100.0));
/// ```
pub struct FieldBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl FieldBounds {
    /// The standard arena: side walls at x = ±4096, back walls at y = ±5120,
    /// floor at z = 0 and ceiling at z = 2044.
    pub const STANDARD: Self = Self {
        min_x: -4096.0,
        max_x: 4096.0,
        min_y: -5120.0,
        max_y: 5120.0,
        min_z: 0.0,
        max_z: 2044.0,
    };

    pub fn with_x(mut self, min: f64, max: f64) -> Self {
        self.min_x = min;
        self.max_x = max;
        self
    }

    pub fn with_y(mut self, min: f64, max: f64) -> Self {
        self.min_y = min;
        self.max_y = max;
        self
    }

    pub fn with_z(mut self, min: f64, max: f64) -> Self {
        self.min_z = min;
        self.max_z = max;
        self
    }

    /// Whether `position` lies inside the box, edges included.
    pub fn contains(&self, position: &Vector) -> bool {
        (self.min_x..=self.max_x).contains(&position.x)
            && (self.min_y..=self.max_y).contains(&position.y)
            && (self.min_z..=self.max_z).contains(&position.z)
    }

    /// Clamps each axis of `position` independently.
    pub fn clamp(&self, position: &Vector) -> Vector {
        let clamped = Vector::new(
            position.x.max(self.min_x).min(self.max_x),
            position.y.max(self.min_y).min(self.max_y),
            position.z.max(self.min_z).min(self.max_z),
        );

        if clamped != *position {
            log::trace!("Clamped {} to {}", position, clamped);
        }

        clamped
    }

    /// Checks that every axis has `min <= max` and no NaN bound.
    pub fn validate(&self) -> Result<()> {
        for (axis, min, max) in [
            ('x', self.min_x, self.max_x),
            ('y', self.min_y, self.max_y),
            ('z', self.min_z, self.max_z),
        ] {
            if min.is_nan() || max.is_nan() || min > max {
                return Err(SpatialError::InvalidBounds { axis, min, max });
            }
        }
        Ok(())
    }

    /// Parses and validates bounds from a JSON object with `min_x` .. `max_z`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let bounds: Self = serde_json::from_str(json)?;
        bounds.validate()?;
        Ok(bounds)
    }

    /// Reads and validates bounds from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading field bounds from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

impl Default for FieldBounds {
    /// Returns the standard arena bounds.
    fn default() -> Self {
        Self::STANDARD
    }
}
