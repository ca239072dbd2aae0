//! The cube coordinate system for hexagon grids.
//!
//! The system here is the [cube coordinate system defined by Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube),
//! with axes named `q`, `r`, and `s`. Each coordinate nominally has three
//! components, but the three are constrained so that only two are free:
//! for every coordinate in this crate, `s == -q + r`. We exploit that by
//! storing only `q` and `r` and deriving `s` on demand, which both saves a
//! third of the memory and makes the constraint impossible to violate —
//! arithmetic operates on the two stored components and `s` falls out
//! correctly every time.
//!
//! Two coordinate kinds share the same algebra:
//!
//! - [HexCoord] has integer components and refers to a whole tile (by its
//!   center). These are the keys of the crate's maps and the currency of
//!   all traversal algorithms.
//! - [FracHexCoord] has float components and can refer to any point in the
//!   grid plane. Fractional coordinates appear as intermediates during
//!   interpolation, and collapse back to tiles via [HexCoord::round].
//!
//! Directions around a tile are identified by orientation-agnostic ordinals
//! ([HexDirection], [HexDiagonal]) with per-orientation compass labelings
//! ([FlatTopDirection], [PointyTopDirection], and their diagonal
//! counterparts) layered on top.
//!
//! Converting a coordinate to a drawable world-space position is the
//! geometry module's job; see
//! [HexGeometry::position](crate::grid::geometry::HexGeometry::position).

mod direction;
mod traverse;
mod unit;

pub use self::{direction::*, unit::*};
