//! Tube cross-section and length

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected tube dimensions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DimensionError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("wall thickness {thickness} leaves no hollow interior (must be below {limit})")]
    ThicknessTooLarge { thickness: f32, limit: f32 },
}

/// Validated dimensions of a rectangular tube, in millimeters
///
/// The wall thickness is always below half the smaller side, so the tube
/// keeps a hollow interior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDimensions")]
pub struct TubeDimensions {
    width: f32,
    height: f32,
    thickness: f32,
    length: f32,
}

impl TubeDimensions {
    pub fn new(width: f32, height: f32, thickness: f32, length: f32) -> Result<Self, DimensionError> {
        for (field, value) in [
            ("width", width),
            ("height", height),
            ("thickness", thickness),
            ("length", length),
        ] {
            if !value.is_finite() {
                return Err(DimensionError::NotFinite { field, value });
            }
            if value <= 0.0 {
                return Err(DimensionError::NonPositive { field, value });
            }
        }

        let limit = width.min(height) / 2.0;
        if thickness >= limit {
            return Err(DimensionError::ThicknessTooLarge { thickness, limit });
        }

        Ok(Self {
            width,
            height,
            thickness,
            length,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn half_length(&self) -> f32 {
        self.length / 2.0
    }

    /// A square tube has equal width and height
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

#[derive(Deserialize)]
struct RawDimensions {
    width: f32,
    height: f32,
    thickness: f32,
    length: f32,
}

impl TryFrom<RawDimensions> for TubeDimensions {
    type Error = DimensionError;

    fn try_from(raw: RawDimensions) -> Result<Self, Self::Error> {
        Self::new(raw.width, raw.height, raw.thickness, raw.length)
    }
}
