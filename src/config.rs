use crate::grid::{
    coord::{HexAxis, HexCoord},
    geometry::Orientation,
    shape::{
        HexagonalShape, MapShape, ParallelogramShape, RectangularShape,
        TriangularShape,
    },
};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration that defines a grid. Two grids built from the same config
/// are always identical, tile for tile.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Which way the hexagons point. This drives both the geometry's
    /// rotation offset and the row/column roles of a rectangular shape.
    pub orientation: Orientation,

    /// The circumradius of a single hexagon, in world units
    #[validate(range(min = 0.0))]
    pub size: f64,

    /// The coordinate the map shape is anchored to
    pub origin: HexCoord,

    /// The outline of the map, with its shape-specific extents
    #[validate(custom = "validate_shape")]
    pub shape: ShapeConfig,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::FlatTop,
            size: 1.0,
            origin: HexCoord::ORIGIN,
            shape: ShapeConfig::Hexagonal { size: 10 },
        }
    }
}

/// The parameters of one of the supported map outlines. This is the
/// serializable description of a shape; [ShapeConfig::to_shape] turns it
/// into the live generator.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeConfig {
    Hexagonal {
        size: i32,
    },
    Rectangular {
        top: i32,
        bottom: i32,
        left: i32,
        right: i32,
    },
    Parallelogram {
        size: i32,
        axis: HexAxis,
    },
    Triangular {
        size: i32,
        axis: HexAxis,
    },
}

impl ShapeConfig {
    /// Build the shape generator described by this config. The orientation
    /// only affects rectangular shapes, which lay out their rows and columns
    /// differently per orientation.
    pub fn to_shape(
        self,
        origin: HexCoord,
        orientation: Orientation,
    ) -> Box<dyn MapShape> {
        match self {
            Self::Hexagonal { size } => {
                Box::new(HexagonalShape::new(origin, size))
            }
            Self::Rectangular {
                top,
                bottom,
                left,
                right,
            } => Box::new(RectangularShape::new(
                origin,
                orientation,
                top,
                bottom,
                left,
                right,
            )),
            Self::Parallelogram { size, axis } => {
                Box::new(ParallelogramShape::new(origin, size, axis))
            }
            Self::Triangular { size, axis } => {
                Box::new(TriangularShape::new(origin, size, axis))
            }
        }
    }
}

/// Check that every extent in a shape config is non-negative. The shape
/// constructors enforce the same bounds with panics; validating here first
/// turns a bad config into a recoverable error instead.
fn validate_shape(shape: &ShapeConfig) -> Result<(), ValidationError> {
    let valid = match shape {
        ShapeConfig::Hexagonal { size }
        | ShapeConfig::Parallelogram { size, .. }
        | ShapeConfig::Triangular { size, .. } => *size >= 0,
        ShapeConfig::Rectangular {
            top,
            bottom,
            left,
            right,
        } => [*top, *bottom, *left, *right]
            .iter()
            .all(|extent| *extent >= 0),
    };
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("range"))
    }
}
