//! Basic value types of the cube coordinate system. See the parent module
//! documentation for a description of the coordinate system itself.

use derive_more::{Add, AddAssign, Display, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::{cmp, ops};
use strum::EnumIter;

/// The 3 axes of the cube coordinate system.
///
/// See this page for more info:
/// https://www.redblobgames.com/grids/hexagons/#coordinates-cube
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexAxis {
    Q,
    R,
    S,
}

/// A trait representing any cube coordinate value, integer or fractional.
/// Each coordinate has a `q`, `r`, and `s` component, where `s` is always
/// derived as `-q + r`. This trait captures the structure the two concrete
/// coordinate types share, so code that only reads components can be generic
/// over the numeric kind.
pub trait CubeCoords: Sized {
    /// The primitive type of each component. Must be convertible to `f64` so
    /// any coordinate can be mathematically converted to world space.
    type Component: Copy + Into<f64>;

    /// The `q` component of the coordinate
    fn q(&self) -> Self::Component;

    /// The `r` component of the coordinate
    fn r(&self) -> Self::Component;

    /// The `s` component of the coordinate, always `-q + r`
    fn s(&self) -> Self::Component;

    /// The hex-grid distance from the origin to this coordinate
    fn length(&self) -> Self::Component;

    /// Get the component on the given axis
    fn component(&self, axis: HexAxis) -> Self::Component {
        match axis {
            HexAxis::Q => self.q(),
            HexAxis::R => self.r(),
            HexAxis::S => self.s(),
        }
    }
}

/// A coordinate referring to a single tile in a hexagon grid, in the cube
/// coordinate system. See this page for info on how cube coordinates work:
/// https://www.redblobgames.com/grids/hexagons/#coordinates-cube
///
/// Since `s` is fully determined by the other two components, this struct
/// only stores `q` and `r` and derives `s` as needed. That keeps every
/// instance on the cube constraint by construction: there is no way to build
/// a coordinate whose components don't sum up correctly, and arithmetic only
/// ever touches the two stored components. Equality and hashing likewise
/// depend only on `(q, r)`.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct HexCoord {
    q: i32,
    r: i32,
}

impl HexCoord {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Construct a new coordinate with the given `q` and `r`. `s` is derived,
    /// so any input pair is valid.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The `q` component of the coordinate
    pub const fn q(self) -> i32 {
        self.q
    }

    /// The `r` component of the coordinate
    pub const fn r(self) -> i32 {
        self.r
    }

    /// The `s` component of the coordinate, derived from the two stored
    /// components
    pub const fn s(self) -> i32 {
        -self.q + self.r
    }

    /// Component-wise minimum of two coordinates
    pub fn min(a: Self, b: Self) -> Self {
        Self::new(cmp::min(a.q, b.q), cmp::min(a.r, b.r))
    }

    /// Component-wise maximum of two coordinates
    pub fn max(a: Self, b: Self) -> Self {
        Self::new(cmp::max(a.q, b.q), cmp::max(a.r, b.r))
    }

    /// Mirror this coordinate across one of the three axes
    pub fn reflect(self, axis: HexAxis) -> Self {
        match axis {
            HexAxis::Q => Self::new(self.q(), -self.s()),
            HexAxis::R => Self::new(self.s(), self.r()),
            HexAxis::S => Self::new(-self.r(), -self.q()),
        }
    }

    /// Rotate this coordinate by a single 60° step around the origin. The
    /// two directions are exact inverses of each other, so
    /// `c.rotate(true).rotate(false) == c` always holds.
    pub fn rotate(self, clockwise: bool) -> Self {
        if clockwise {
            Self::new(self.r(), self.s())
        } else {
            Self::new(-self.s(), self.q())
        }
    }

    /// Rotate this coordinate by the given number of 60° steps. Panics if
    /// `rotations` is less than 1.
    pub fn rotate_by(self, clockwise: bool, rotations: i32) -> Self {
        assert!(
            rotations >= 1,
            "rotations must be at least 1, but was {rotations}"
        );
        (0..rotations).fold(self, |coord, _| coord.rotate(clockwise))
    }

    /// The number of single-tile steps needed to reach this coordinate from
    /// the origin. Always a non-negative integer; the division is exact
    /// because the three components always sum to an even absolute total.
    pub fn length(self) -> i32 {
        (self.q().abs() + self.r().abs() + self.s().abs()) / 2
    }

    /// Calculate the path distance between two tiles, meaning the number of
    /// hops it takes to get from one to the other. 0 if the coordinates are
    /// equal, 1 if the tiles are adjacent, 2 if there is 1 tile between
    /// them, etc.
    pub fn distance_to(self, other: Self) -> i32 {
        (self - other).length()
    }

    /// Round a fractional coordinate to the nearest tile. Each axis is
    /// rounded independently first, then the axis that accumulated the
    /// largest rounding error is recomputed from the other two to restore
    /// the cube constraint. The tie-break is deliberately asymmetric: `q` is
    /// recomputed only when its error strictly exceeds *both* others, `r`
    /// only when its error strictly exceeds `s`'s, and `s` never — this
    /// determines which axis absorbs the error when two errors are equal,
    /// which is observable in line drawing.
    pub fn round(coords: FracHexCoord) -> Self {
        let mut q = coords.q().round() as i32;
        let mut r = coords.r().round() as i32;
        let s = coords.s().round() as i32;

        let q_diff = (q as f64 - coords.q()).abs();
        let r_diff = (r as f64 - coords.r()).abs();
        let s_diff = (s as f64 - coords.s()).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = r - s;
        } else if r_diff > s_diff {
            r = q + s;
        }

        Self::new(q, r)
    }

    /// Linearly interpolate between two tiles, rounding the result to the
    /// nearest tile
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        Self::round(FracHexCoord::lerp(a.into(), b.into(), t))
    }
}

impl CubeCoords for HexCoord {
    type Component = i32;

    fn q(&self) -> i32 {
        self.q
    }

    fn r(&self) -> i32 {
        self.r
    }

    fn s(&self) -> i32 {
        -self.q + self.r
    }

    fn length(&self) -> i32 {
        HexCoord::length(*self)
    }
}

// Scale a coordinate by an integer factor, in either operand order
impl ops::Mul<i32> for HexCoord {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self::new(self.q * rhs, self.r * rhs)
    }
}

impl ops::Mul<HexCoord> for i32 {
    type Output = HexCoord;

    fn mul(self, rhs: HexCoord) -> HexCoord {
        rhs * self
    }
}

/// A coordinate in the cube coordinate system with fractional components.
/// This has the same algebraic structure as [HexCoord], but can refer to any
/// point in the grid plane, not just tile centers. Fractional coordinates
/// only appear as computation intermediates (interpolation and rounding);
/// they are never used as map keys, which is why this type has no `Eq` or
/// `Hash` implementation.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Display,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct FracHexCoord {
    q: f64,
    r: f64,
}

impl FracHexCoord {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Construct a new fractional coordinate with the given `q` and `r`.
    /// `s` is derived, so any input pair is valid.
    pub const fn new(q: f64, r: f64) -> Self {
        Self { q, r }
    }

    /// The `q` component of the coordinate
    pub fn q(self) -> f64 {
        self.q
    }

    /// The `r` component of the coordinate
    pub fn r(self) -> f64 {
        self.r
    }

    /// The `s` component of the coordinate, derived from the two stored
    /// components
    pub fn s(self) -> f64 {
        -self.q + self.r
    }

    /// Component-wise minimum of two coordinates
    pub fn min(a: Self, b: Self) -> Self {
        Self::new(a.q.min(b.q), a.r.min(b.r))
    }

    /// Component-wise maximum of two coordinates
    pub fn max(a: Self, b: Self) -> Self {
        Self::new(a.q.max(b.q), a.r.max(b.r))
    }

    /// Mirror this coordinate across one of the three axes
    pub fn reflect(self, axis: HexAxis) -> Self {
        match axis {
            HexAxis::Q => Self::new(self.q(), -self.s()),
            HexAxis::R => Self::new(self.s(), self.r()),
            HexAxis::S => Self::new(-self.r(), -self.q()),
        }
    }

    /// Rotate this coordinate by a single 60° step around the origin
    pub fn rotate(self, clockwise: bool) -> Self {
        if clockwise {
            Self::new(self.r(), self.s())
        } else {
            Self::new(-self.s(), self.q())
        }
    }

    /// Rotate this coordinate by the given number of 60° steps. Panics if
    /// `rotations` is less than 1.
    pub fn rotate_by(self, clockwise: bool, rotations: i32) -> Self {
        assert!(
            rotations >= 1,
            "rotations must be at least 1, but was {rotations}"
        );
        (0..rotations).fold(self, |coords, _| coords.rotate(clockwise))
    }

    /// The hex-grid distance from the origin to this point
    pub fn length(self) -> f64 {
        (self.q().abs() + self.r().abs() + self.s().abs()) / 2.0
    }

    /// The hex-grid distance between two points
    pub fn distance_to(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Linearly interpolate the two stored components between `a` and `b`.
    /// `t` is not clamped; 0 yields `a` and 1 yields `b`.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        Self::new(a.q + (b.q - a.q) * t, a.r + (b.r - a.r) * t)
    }
}

impl CubeCoords for FracHexCoord {
    type Component = f64;

    fn q(&self) -> f64 {
        self.q
    }

    fn r(&self) -> f64 {
        self.r
    }

    fn s(&self) -> f64 {
        -self.q + self.r
    }

    fn length(&self) -> f64 {
        FracHexCoord::length(*self)
    }
}

impl ops::Mul<f64> for FracHexCoord {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.q * rhs, self.r * rhs)
    }
}

impl ops::Mul<FracHexCoord> for f64 {
    type Output = FracHexCoord;

    fn mul(self, rhs: FracHexCoord) -> FracHexCoord {
        rhs * self
    }
}

impl From<HexCoord> for FracHexCoord {
    fn from(coord: HexCoord) -> Self {
        Self::new(coord.q().into(), coord.r().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use serde_test::{assert_tokens, Token};
    use strum::IntoEnumIterator;

    #[test]
    fn test_cube_constraint() {
        // s == -q + r must hold for any input pair
        for q in -3..=3 {
            for r in -3..=3 {
                let coord = HexCoord::new(q, r);
                assert_eq!(coord.s(), -coord.q() + coord.r(), "{coord}");
            }
        }
    }

    #[test]
    fn test_component() {
        let coord = HexCoord::new(2, -1);
        assert_eq!(coord.component(HexAxis::Q), 2);
        assert_eq!(coord.component(HexAxis::R), -1);
        assert_eq!(coord.component(HexAxis::S), -3);
    }

    #[test]
    fn test_length() {
        assert_eq!(HexCoord::ORIGIN.length(), 0);
        assert_eq!(HexCoord::new(0, 1).length(), 1);
        assert_eq!(HexCoord::new(-1, -1).length(), 1);
        // Derive from the formula, not from Euclidean intuition:
        // (3, -3) => s = -6, so (3 + 3 + 6) / 2 = 6
        assert_eq!(HexCoord::new(3, -3).length(), 6);
        for q in -4..=4 {
            for r in -4..=4 {
                assert!(HexCoord::new(q, r).length() >= 0);
            }
        }
    }

    #[test]
    fn test_distance_to() {
        let p0 = HexCoord::ORIGIN;
        let p1 = HexCoord::new(-1, 0);
        let p2 = HexCoord::new(2, 1);
        let p3 = HexCoord::new(3, -3);

        assert_eq!(p0.distance_to(p0), 0);
        assert_eq!(p3.distance_to(p3), 0);

        assert_eq!(p0.distance_to(p1), 1);
        assert_eq!(p0.distance_to(p2), 2);
        assert_eq!(p0.distance_to(p3), 6);

        assert_eq!(p1.distance_to(p2), 3);
        assert_eq!(p2.distance_to(p3), 5);
        // Distance is symmetric
        assert_eq!(p3.distance_to(p2), 5);
    }

    #[test]
    fn test_arithmetic() {
        let a = HexCoord::new(1, 2);
        let b = HexCoord::new(-3, 1);
        assert_eq!(a + b, HexCoord::new(-2, 3));
        assert_eq!(a - b, HexCoord::new(4, 1));
        assert_eq!(-a, HexCoord::new(-1, -2));
        assert_eq!(a * 3, HexCoord::new(3, 6));
        assert_eq!(3 * a, HexCoord::new(3, 6));
        assert_eq!(HexCoord::min(a, b), HexCoord::new(-3, 1));
        assert_eq!(HexCoord::max(a, b), HexCoord::new(1, 2));
    }

    #[test]
    fn test_reflect_is_involution() {
        for q in -3..=3 {
            for r in -3..=3 {
                let coord = HexCoord::new(q, r);
                for axis in HexAxis::iter() {
                    assert_eq!(
                        coord.reflect(axis).reflect(axis),
                        coord,
                        "reflecting {coord} across {axis:?} twice"
                    );
                }
            }
        }
    }

    #[test]
    fn test_reflect() {
        let coord = HexCoord::new(2, -1);
        // s = -3
        assert_eq!(coord.reflect(HexAxis::Q), HexCoord::new(2, 3));
        assert_eq!(coord.reflect(HexAxis::R), HexCoord::new(-3, -1));
        assert_eq!(coord.reflect(HexAxis::S), HexCoord::new(1, -2));
    }

    #[test]
    fn test_rotate() {
        // One clockwise step walks the neighbor cycle forward
        let north = HexCoord::new(0, 1);
        let northeast = HexCoord::new(1, 1);
        let southeast = HexCoord::new(1, 0);
        assert_eq!(north.rotate(true), northeast);
        assert_eq!(northeast.rotate(true), southeast);
        assert_eq!(northeast.rotate(false), north);

        for q in -3..=3 {
            for r in -3..=3 {
                let coord = HexCoord::new(q, r);
                // Opposite rotations cancel
                assert_eq!(coord.rotate(true).rotate(false), coord);
                assert_eq!(coord.rotate(false).rotate(true), coord);
                // Rotation preserves length
                assert_eq!(coord.rotate(true).length(), coord.length());
                // Six steps form a full turn
                assert_eq!(coord.rotate_by(true, 6), coord);
                assert_eq!(coord.rotate_by(false, 6), coord);
            }
        }
    }

    #[test]
    #[should_panic(expected = "rotations must be at least 1")]
    fn test_rotate_by_invalid() {
        HexCoord::new(1, 0).rotate_by(true, 0);
    }

    #[test]
    fn test_round() {
        // Unambiguous values round per-axis
        assert_eq!(
            HexCoord::round(FracHexCoord::new(1.1, 2.9)),
            HexCoord::new(1, 3)
        );
        // q absorbs the error only when its error strictly dominates both
        // others: q=0.5 rounds to 1 (error 0.5), r=0.1 (error 0.1),
        // s = -0.4 (error 0.4 after rounding to 0), so q is recomputed as
        // r - s = 0 - 0 = 0
        assert_eq!(
            HexCoord::round(FracHexCoord::new(0.5, 0.1)),
            HexCoord::new(0, 0)
        );
        // When r's error only *ties* s's, r keeps its naive rounding: for
        // (0.0, 0.5) both r and s have error 0.5, so no axis is recomputed
        // and the result is (0, 1). The strict comparison is the observable
        // part of the tie-break.
        assert_eq!(
            HexCoord::round(FracHexCoord::new(0.0, 0.5)),
            HexCoord::new(0, 1)
        );
        // Rounding an exact tile is the identity
        for q in -2..=2 {
            for r in -2..=2 {
                let coord = HexCoord::new(q, r);
                assert_eq!(HexCoord::round(coord.into()), coord);
            }
        }
    }

    #[test]
    fn test_round_tie_break() {
        // Half-integer and near-tie inputs, worked through the tie-break by
        // hand. In each case q's error does not strictly dominate, so r
        // absorbs the correction (r = q + s)
        for &(input, expected) in &[
            ((0.5, 0.5), (1, 1)),
            ((-0.5, 0.5), (-1, 0)),
            ((1.5, -2.5), (2, -2)),
            ((0.49, 0.51), (0, 0)),
            ((2.4, 2.6), (2, 2)),
        ] {
            assert_eq!(
                HexCoord::round(FracHexCoord::new(input.0, input.1)),
                HexCoord::new(expected.0, expected.1),
                "rounding {input:?}"
            );
        }
    }

    #[test]
    fn test_lerp() {
        let a = HexCoord::new(0, 0);
        let b = HexCoord::new(4, -2);
        assert_eq!(HexCoord::lerp(a, b, 0.0), a);
        assert_eq!(HexCoord::lerp(a, b, 1.0), b);
        assert_eq!(HexCoord::lerp(a, b, 0.5), HexCoord::new(2, -1));

        let fa = FracHexCoord::new(1.0, 1.0);
        let fb = FracHexCoord::new(3.0, -1.0);
        let mid = FracHexCoord::lerp(fa, fb, 0.25);
        assert_approx_eq!(mid.q(), 1.5);
        assert_approx_eq!(mid.r(), 0.5);
    }

    #[test]
    fn test_frac_algebra() {
        let a = FracHexCoord::new(1.5, -0.5);
        assert_approx_eq!(a.s(), -2.0);
        assert_approx_eq!(a.length(), 2.0);
        assert_approx_eq!((a * 2.0).q(), 3.0);
        assert_approx_eq!((2.0 * a).q(), 3.0);
        assert_eq!(a.rotate(true).rotate(false), a);
        assert_eq!(a.reflect(HexAxis::R).reflect(HexAxis::R), a);
        assert_approx_eq!(a.distance_to(a), 0.0);
    }

    #[test]
    fn test_serde_layout() {
        // The persisted form is exactly the two stored integers
        assert_tokens(
            &HexCoord::new(3, -2),
            &[
                Token::Struct {
                    name: "HexCoord",
                    len: 2,
                },
                Token::Str("q"),
                Token::I32(3),
                Token::Str("r"),
                Token::I32(-2),
                Token::StructEnd,
            ],
        );
    }
}
