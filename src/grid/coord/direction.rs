//! Direction and diagonal tables. The grid has six adjacent directions and
//! six diagonal directions, identified by orientation-agnostic ordinals.
//! Compass labels depend on which way the hexagons point, so each ordinal
//! enum has two label enums layered on top of it, one per orientation.
//! Ordinals and labels are mapped through exhaustive matches, never through
//! numeric casts.

use crate::grid::{coord::HexCoord, geometry::Orientation};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// The six adjacent directions of a hexagon, identified by ordinal. The
/// ordinals walk the compass clockwise; which compass label each ordinal
/// carries depends on the grid orientation (see [FlatTopDirection] and
/// [PointyTopDirection]).
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexDirection {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl HexDirection {
    /// Get the coordinate delta for one step in this direction, under the
    /// given orientation
    pub fn vec(self, orientation: Orientation) -> HexCoord {
        match orientation {
            Orientation::FlatTop => FlatTopDirection::from(self).vec(),
            Orientation::PointyTop => PointyTopDirection::from(self).vec(),
        }
    }
}

/// The six adjacent directions of a flat-top hexagon. This is the canonical
/// labeling: orientation-agnostic lookups default through this table.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FlatTopDirection {
    North,
    Northeast,
    Southeast,
    South,
    Southwest,
    Northwest,
}

impl FlatTopDirection {
    /// Get the coordinate delta for one step in this direction
    pub fn vec(self) -> HexCoord {
        match self {
            Self::North => HexCoord::new(0, 1),
            Self::Northeast => HexCoord::new(1, 1),
            Self::Southeast => HexCoord::new(1, 0),
            Self::South => HexCoord::new(0, -1),
            Self::Southwest => HexCoord::new(-1, -1),
            Self::Northwest => HexCoord::new(-1, 0),
        }
    }
}

impl From<HexDirection> for FlatTopDirection {
    fn from(direction: HexDirection) -> Self {
        match direction {
            HexDirection::One => Self::North,
            HexDirection::Two => Self::Northeast,
            HexDirection::Three => Self::Southeast,
            HexDirection::Four => Self::South,
            HexDirection::Five => Self::Southwest,
            HexDirection::Six => Self::Northwest,
        }
    }
}

impl From<FlatTopDirection> for HexDirection {
    fn from(direction: FlatTopDirection) -> Self {
        match direction {
            FlatTopDirection::North => Self::One,
            FlatTopDirection::Northeast => Self::Two,
            FlatTopDirection::Southeast => Self::Three,
            FlatTopDirection::South => Self::Four,
            FlatTopDirection::Southwest => Self::Five,
            FlatTopDirection::Northwest => Self::Six,
        }
    }
}

/// The six adjacent directions of a pointy-top hexagon
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PointyTopDirection {
    Northeast,
    East,
    Southeast,
    Southwest,
    West,
    Northwest,
}

impl PointyTopDirection {
    /// Get the coordinate delta for one step in this direction
    pub fn vec(self) -> HexCoord {
        match self {
            Self::Northeast => HexCoord::new(1, 1),
            Self::East => HexCoord::new(1, 0),
            Self::Southeast => HexCoord::new(0, -1),
            Self::Southwest => HexCoord::new(-1, -1),
            Self::West => HexCoord::new(-1, 0),
            Self::Northwest => HexCoord::new(0, 1),
        }
    }
}

impl From<HexDirection> for PointyTopDirection {
    fn from(direction: HexDirection) -> Self {
        match direction {
            HexDirection::One => Self::Northeast,
            HexDirection::Two => Self::East,
            HexDirection::Three => Self::Southeast,
            HexDirection::Four => Self::Southwest,
            HexDirection::Five => Self::West,
            HexDirection::Six => Self::Northwest,
        }
    }
}

impl From<PointyTopDirection> for HexDirection {
    fn from(direction: PointyTopDirection) -> Self {
        match direction {
            PointyTopDirection::Northeast => Self::One,
            PointyTopDirection::East => Self::Two,
            PointyTopDirection::Southeast => Self::Three,
            PointyTopDirection::Southwest => Self::Four,
            PointyTopDirection::West => Self::Five,
            PointyTopDirection::Northwest => Self::Six,
        }
    }
}

/// The six diagonals of a hexagon, identified by ordinal. A diagonal step
/// crosses a vertex instead of an edge, so its delta is two tiles long.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexDiagonal {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl HexDiagonal {
    /// Get the coordinate delta for one step along this diagonal, under the
    /// given orientation
    pub fn vec(self, orientation: Orientation) -> HexCoord {
        match orientation {
            Orientation::FlatTop => FlatTopDiagonal::from(self).vec(),
            Orientation::PointyTop => PointyTopDiagonal::from(self).vec(),
        }
    }
}

/// The six diagonals of a flat-top hexagon. Like [FlatTopDirection], this is
/// the canonical labeling.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FlatTopDiagonal {
    Northeast,
    East,
    Southeast,
    Southwest,
    West,
    Northwest,
}

impl FlatTopDiagonal {
    /// Get the coordinate delta for one step along this diagonal
    pub fn vec(self) -> HexCoord {
        match self {
            Self::Northeast => HexCoord::new(1, 2),
            Self::East => HexCoord::new(2, 1),
            Self::Southeast => HexCoord::new(1, -1),
            Self::Southwest => HexCoord::new(-1, -2),
            Self::West => HexCoord::new(-2, -1),
            Self::Northwest => HexCoord::new(-1, 1),
        }
    }
}

impl From<HexDiagonal> for FlatTopDiagonal {
    fn from(diagonal: HexDiagonal) -> Self {
        match diagonal {
            HexDiagonal::One => Self::Northeast,
            HexDiagonal::Two => Self::East,
            HexDiagonal::Three => Self::Southeast,
            HexDiagonal::Four => Self::Southwest,
            HexDiagonal::Five => Self::West,
            HexDiagonal::Six => Self::Northwest,
        }
    }
}

impl From<FlatTopDiagonal> for HexDiagonal {
    fn from(diagonal: FlatTopDiagonal) -> Self {
        match diagonal {
            FlatTopDiagonal::Northeast => Self::One,
            FlatTopDiagonal::East => Self::Two,
            FlatTopDiagonal::Southeast => Self::Three,
            FlatTopDiagonal::Southwest => Self::Four,
            FlatTopDiagonal::West => Self::Five,
            FlatTopDiagonal::Northwest => Self::Six,
        }
    }
}

/// The six diagonals of a pointy-top hexagon. The deltas coincide with the
/// flat-top table; only the compass labels shift.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PointyTopDiagonal {
    North,
    Northeast,
    Southeast,
    South,
    Southwest,
    Northwest,
}

impl PointyTopDiagonal {
    /// Get the coordinate delta for one step along this diagonal
    pub fn vec(self) -> HexCoord {
        match self {
            Self::North => HexCoord::new(1, 2),
            Self::Northeast => HexCoord::new(2, 1),
            Self::Southeast => HexCoord::new(1, -1),
            Self::South => HexCoord::new(-1, -2),
            Self::Southwest => HexCoord::new(-2, -1),
            Self::Northwest => HexCoord::new(-1, 1),
        }
    }
}

impl From<HexDiagonal> for PointyTopDiagonal {
    fn from(diagonal: HexDiagonal) -> Self {
        match diagonal {
            HexDiagonal::One => Self::North,
            HexDiagonal::Two => Self::Northeast,
            HexDiagonal::Three => Self::Southeast,
            HexDiagonal::Four => Self::South,
            HexDiagonal::Five => Self::Southwest,
            HexDiagonal::Six => Self::Northwest,
        }
    }
}

impl From<PointyTopDiagonal> for HexDiagonal {
    fn from(diagonal: PointyTopDiagonal) -> Self {
        match diagonal {
            PointyTopDiagonal::North => Self::One,
            PointyTopDiagonal::Northeast => Self::Two,
            PointyTopDiagonal::Southeast => Self::Three,
            PointyTopDiagonal::South => Self::Four,
            PointyTopDiagonal::Southwest => Self::Five,
            PointyTopDiagonal::Northwest => Self::Six,
        }
    }
}

impl HexCoord {
    /// Get the coordinate delta for one step in the given direction.
    /// Orientation-agnostic lookups go through the flat-top table; this is
    /// the canonical default, not an arbitrary one.
    pub fn adjacent(direction: HexDirection) -> HexCoord {
        FlatTopDirection::from(direction).vec()
    }

    /// Get the coordinate delta for one step along the given diagonal,
    /// defaulting through the flat-top table like [HexCoord::adjacent]
    pub fn diagonal(diagonal: HexDiagonal) -> HexCoord {
        FlatTopDiagonal::from(diagonal).vec()
    }

    /// Get an iterator of the six coordinates adjacent to this one, in
    /// ordinal order. The adjacents of [HexCoord::ORIGIN] are the raw
    /// direction deltas.
    pub fn adjacents(self) -> impl Iterator<Item = HexCoord> {
        HexDirection::iter().map(move |dir| self + Self::adjacent(dir))
    }

    /// Get an iterator of the six coordinates diagonal to this one, in
    /// ordinal order. The diagonals of [HexCoord::ORIGIN] are the raw
    /// diagonal deltas.
    pub fn diagonals(self) -> impl Iterator<Item = HexCoord> {
        HexDiagonal::iter().map(move |diag| self + Self::diagonal(diag))
    }
}
