//! Screen-space geometry for hexagon grids. Everything in this module deals
//! with world-space positions (floats), as opposed to the abstract tile
//! coordinates in [crate::grid::coord]. The single bridge between the two
//! spaces is [HexGeometry::position].

use crate::grid::coord::FracHexCoord;
use derive_more::{Add, AddAssign, Display, Neg, Sub, SubAssign};
use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};
use std::ops;
use strum::EnumIter;

/// The two ways a hexagon can sit on the grid plane: with a flat edge facing
/// up, or with a vertex facing up. The orientations differ by a fixed
/// rotation offset; everything else about the geometry is shared.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    FlatTop,
    PointyTop,
}

impl Orientation {
    /// The rotation offset of this orientation, in degrees
    pub fn angle(self) -> f64 {
        match self {
            Self::FlatTop => HexGeometry::FLAT_TOP_ANGLE,
            Self::PointyTop => HexGeometry::POINTY_TOP_ANGLE,
        }
    }
}

/// A point in world space. The grid plane is the XZ plane; `y` is always 0
/// for anything this crate computes, and is carried so consumers can use the
/// vertical axis for their own purposes (elevation, layering, etc.).
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x", "self.y", "self.z")]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

// Scale a point by a constant
impl ops::Mul<f64> for Point3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<Vector3<f64>> for Point3 {
    fn from(other: Vector3<f64>) -> Self {
        Self::new(other.x, other.y, other.z)
    }
}

/// The measurements of a single hexagon: an orientation plus a size (the
/// circumradius, i.e. center-to-vertex distance). All other metrics (width,
/// height, the spacing between adjacent tile centers) are derived from
/// those two. Geometry values are immutable once constructed and compare
/// structurally.
#[derive(Copy, Clone, Debug, Display, PartialEq, Serialize, Deserialize)]
#[display(fmt = "{:?}[size: {}]", orientation, size)]
pub struct HexGeometry {
    orientation: Orientation,
    size: f64,
}

impl HexGeometry {
    /// The number of edges in a hexagon
    pub const EDGES: usize = 6;
    /// The number of vertices in a hexagon
    pub const VERTICES: usize = 6;
    /// The rotation offset of the flat-top orientation, in degrees
    pub const FLAT_TOP_ANGLE: f64 = 0.0;
    /// The rotation offset of the pointy-top orientation, in degrees
    pub const POINTY_TOP_ANGLE: f64 = -30.0;

    /// A flat-top hexagon with a size of 1
    pub const FLAT_TOP: Self = Self {
        orientation: Orientation::FlatTop,
        size: 1.0,
    };
    /// A pointy-top hexagon with a size of 1
    pub const POINTY_TOP: Self = Self {
        orientation: Orientation::PointyTop,
        size: 1.0,
    };

    /// Construct a new geometry with the given orientation and size. Panics
    /// if the size is negative.
    pub fn new(orientation: Orientation, size: f64) -> Self {
        assert!(size >= 0.0, "size must be at least 0, but was {size}");
        Self { orientation, size }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The circumradius of the hexagon
    pub fn size(&self) -> f64 {
        self.size
    }

    /// The rotation offset of the hexagon, in degrees
    pub fn angle(&self) -> f64 {
        self.orientation.angle()
    }

    /// The vertex-to-vertex width of the hexagon
    pub fn width(&self) -> f64 {
        self.size * 2.0
    }

    /// The edge-to-edge height of the hexagon
    pub fn height(&self) -> f64 {
        self.size * 3.0_f64.sqrt()
    }

    /// The horizontal distance between the centers of adjacent hexagons
    pub fn horizontal_spacing(&self) -> f64 {
        self.width() * 3.0 / 4.0
    }

    /// The vertical distance between the centers of adjacent hexagons
    pub fn vertical_spacing(&self) -> f64 {
        self.height()
    }

    /// Get the position of a single vertex of a hexagon with the given size
    /// and rotation offset. Panics if `index` is not in `[0, 6)`.
    pub fn vertex(size: f64, angle: f64, index: usize) -> Point3 {
        assert!(
            index < Self::VERTICES,
            "vertex index must be in [0, 6), but was {index}"
        );
        let degrees = (60 * index) as f64 - angle;
        let radians = degrees.to_radians();
        Point3::new(size * radians.cos(), 0.0, size * radians.sin())
    }

    /// Get an iterator of the six vertex positions of this hexagon, in
    /// ordinal order. The iterator is pure: re-evaluating it yields the
    /// same six points.
    pub fn vertices(&self) -> impl Iterator<Item = Point3> + '_ {
        (0..Self::VERTICES).map(move |i| Self::vertex(self.size, self.angle(), i))
    }

    /// Convert a coordinate to its position in world space. This is the one
    /// conversion point between coordinate space and world space; integer
    /// coordinates upcast to fractional on the way through.
    pub fn position(&self, coords: impl Into<FracHexCoord>) -> Point3 {
        let coords = coords.into();
        let x = coords.q() * self.horizontal_spacing();
        let z = (coords.r() + coords.s()) / 2.0 * self.vertical_spacing();
        let rotation = Rotation3::from_axis_angle(
            &Vector3::y_axis(),
            self.angle().to_radians(),
        );
        (rotation * Vector3::new(x, 0.0, z)).into()
    }
}
