//! Traversal algorithms over the coordinate system: lines, ranges, rings,
//! spirals, and rotation walks. Every function here is a pure function of
//! its inputs that returns a finite iterator; re-evaluating the iterator
//! yields the same sequence. Argument contracts are checked eagerly when the
//! function is called, not when the iterator is first polled.

use crate::grid::coord::{FracHexCoord, HexCoord, HexDirection};
use std::iter;
use strum::IntoEnumIterator;

/// Offset added to both endpoints of a line before interpolating. This
/// pushes sample points off the exact edges between tiles, where the
/// rounding tie-break would otherwise pick sides inconsistently along the
/// line. Both endpoints must get the identical nudge.
const LINE_NUDGE: f64 = 1e-6;

impl HexCoord {
    /// Get an iterator of the coordinates forming a contiguous line from `a`
    /// to `b`, inclusive on both ends. The line always contains exactly
    /// `a.distance_to(b) + 1` coordinates.
    pub fn line(a: Self, b: Self) -> impl Iterator<Item = HexCoord> {
        let distance = a.distance_to(b);
        let step = 1.0 / f64::from(distance.max(1));
        let nudge = FracHexCoord::new(LINE_NUDGE, LINE_NUDGE);
        let a = FracHexCoord::from(a) + nudge;
        let b = FracHexCoord::from(b) + nudge;

        (0..=distance).map(move |i| {
            Self::round(FracHexCoord::lerp(a, b, f64::from(i) * step))
        })
    }

    /// Get an iterator of the coordinates forming a line from `origin`:
    /// the origin itself, then `length` further coordinates, each one more
    /// `step` away. Panics if `length` is negative; a length of 0 yields
    /// only the origin.
    pub fn ray(
        origin: Self,
        length: i32,
        step: Self,
    ) -> impl Iterator<Item = HexCoord> {
        assert!(length >= 0, "length must be at least 0, but was {length}");
        (0..=length).map(move |i| origin + step * i)
    }

    /// Get an iterator of every coordinate within `range` steps of `center`,
    /// including the center itself. Panics if `range` is negative.
    pub fn range(
        center: Self,
        range: i32,
    ) -> impl Iterator<Item = HexCoord> {
        assert!(range >= 0, "range must be at least 0, but was {range}");
        (-range..=range).flat_map(move |q| {
            // Clamping r to the overlap of the two axes' bounds cuts the
            // rhombus down to a hexagon
            ((-range).max(q - range)..=range.min(q + range))
                .map(move |r| center + Self::new(q, r))
        })
    }

    /// Get an iterator of the coordinates at exactly `radius` steps from
    /// `center`, walking the ring boundary. The walk starts one radius out
    /// along ordinal Five and takes `radius` steps in each of the six
    /// directions in ordinal order, so the ring always contains exactly
    /// `6 * radius` coordinates. Panics if `radius` is less than 1.
    pub fn ring(
        center: Self,
        radius: i32,
    ) -> impl Iterator<Item = HexCoord> {
        assert!(radius >= 1, "radius must be at least 1, but was {radius}");
        let start = center + Self::adjacent(HexDirection::Five) * radius;
        HexDirection::iter()
            .flat_map(move |dir| iter::repeat(dir).take(radius as usize))
            .scan(start, |coord, dir| {
                *coord += Self::adjacent(dir);
                Some(*coord)
            })
    }

    /// Get an iterator of every coordinate within `radius` steps of
    /// `center`, ordered as a spiral: the center first, then each full ring
    /// outward. Contains exactly `1 + 3*radius*(radius+1)` coordinates with
    /// no duplicates. Panics if `radius` is negative; a radius of 0 yields
    /// only the center.
    pub fn spiral(
        center: Self,
        radius: i32,
    ) -> impl Iterator<Item = HexCoord> {
        assert!(radius >= 0, "radius must be at least 0, but was {radius}");
        iter::once(center)
            .chain((1..=radius).flat_map(move |i| Self::ring(center, i)))
    }

    /// Get an iterator of `count` successive single-step rotations of
    /// `origin`: the first element is `origin` rotated once, and each
    /// subsequent element is the rotation of the previous one. Panics if
    /// `count` is less than 1.
    pub fn rotations(
        origin: Self,
        clockwise: bool,
        count: i32,
    ) -> impl Iterator<Item = HexCoord> {
        assert!(count >= 1, "count must be at least 1, but was {count}");
        (0..count).scan(origin, move |coord, _| {
            *coord = coord.rotate(clockwise);
            Some(*coord)
        })
    }
}

impl FracHexCoord {
    /// Get an iterator of `count` successive single-step rotations of
    /// `origin`, like [HexCoord::rotations]. Panics if `count` is less
    /// than 1.
    pub fn rotations(
        origin: Self,
        clockwise: bool,
        count: i32,
    ) -> impl Iterator<Item = FracHexCoord> {
        assert!(count >= 1, "count must be at least 1, but was {count}");
        (0..count).scan(origin, move |coords, _| {
            *coords = coords.rotate(clockwise);
            Some(*coords)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnv::FnvBuildHasher;
    use std::collections::HashSet;

    type CoordSet = HashSet<HexCoord, FnvBuildHasher>;

    #[test]
    fn test_line() {
        let a = HexCoord::new(0, 0);
        let b = HexCoord::new(3, -3);
        let line: Vec<HexCoord> = HexCoord::line(a, b).collect();

        // distance(a, b) is 6 by the length formula, so 7 elements
        assert_eq!(line.len(), (a.distance_to(b) + 1) as usize);
        assert_eq!(*line.first().unwrap(), a);
        assert_eq!(*line.last().unwrap(), b);
        // Each consecutive pair is adjacent
        for pair in line.windows(2) {
            assert_eq!(pair[0].distance_to(pair[1]), 1);
        }
    }

    #[test]
    fn test_line_degenerate() {
        let a = HexCoord::new(2, 2);
        assert_eq!(HexCoord::line(a, a).collect::<Vec<_>>(), vec![a]);
    }

    #[test]
    fn test_line_is_restartable() {
        let a = HexCoord::new(-2, 1);
        let b = HexCoord::new(4, 0);
        assert_eq!(
            HexCoord::line(a, b).collect::<Vec<_>>(),
            HexCoord::line(a, b).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_ray() {
        let origin = HexCoord::new(1, 1);
        let step = HexCoord::adjacent(HexDirection::Three);
        let ray: Vec<HexCoord> = HexCoord::ray(origin, 3, step).collect();
        assert_eq!(
            ray,
            vec![
                origin,
                HexCoord::new(2, 1),
                HexCoord::new(3, 1),
                HexCoord::new(4, 1),
            ]
        );

        // Zero length yields only the origin
        assert_eq!(
            HexCoord::ray(origin, 0, step).collect::<Vec<_>>(),
            vec![origin]
        );
    }

    #[test]
    #[should_panic(expected = "length must be at least 0")]
    fn test_ray_invalid() {
        HexCoord::ray(HexCoord::ORIGIN, -1, HexCoord::new(0, 1));
    }

    #[test]
    fn test_range() {
        // 0 => just the center, 1 => 7, 2 => 19 (3r²+3r+1)
        let center = HexCoord::new(-2, 3);
        assert_eq!(
            HexCoord::range(center, 0).collect::<Vec<_>>(),
            vec![center]
        );
        for radius in 1..=3 {
            let coords: CoordSet = HexCoord::range(center, radius).collect();
            let r = radius as usize;
            assert_eq!(coords.len(), 3 * r * r + 3 * r + 1);
            assert!(coords
                .iter()
                .all(|coord| center.distance_to(*coord) <= radius));
            assert!(coords.contains(&center));
        }
    }

    #[test]
    #[should_panic(expected = "range must be at least 0")]
    fn test_range_invalid() {
        HexCoord::range(HexCoord::ORIGIN, -1);
    }

    #[test]
    fn test_ring() {
        let center = HexCoord::new(1, -1);
        for radius in 1..=4 {
            let ring: Vec<HexCoord> = HexCoord::ring(center, radius).collect();
            assert_eq!(ring.len(), 6 * radius as usize);
            // Every element is exactly `radius` away, so none is the center
            for coord in &ring {
                assert_eq!(center.distance_to(*coord), radius);
            }
            // No duplicates
            let unique: CoordSet = ring.iter().copied().collect();
            assert_eq!(unique.len(), ring.len());
        }
    }

    #[test]
    #[should_panic(expected = "radius must be at least 1")]
    fn test_ring_invalid() {
        HexCoord::ring(HexCoord::ORIGIN, 0);
    }

    #[test]
    fn test_spiral() {
        let center = HexCoord::new(0, 2);
        assert_eq!(
            HexCoord::spiral(center, 0).collect::<Vec<_>>(),
            vec![center]
        );
        for radius in 1..=3 {
            let spiral: Vec<HexCoord> =
                HexCoord::spiral(center, radius).collect();
            let r = radius as usize;
            assert_eq!(spiral.len(), 1 + 3 * r * (r + 1));
            assert_eq!(spiral[0], center);
            // No duplicates, and the spiral covers the same set as the range
            let unique: CoordSet = spiral.iter().copied().collect();
            assert_eq!(unique.len(), spiral.len());
            let range: CoordSet = HexCoord::range(center, radius).collect();
            assert_eq!(unique, range);
        }
    }

    #[test]
    #[should_panic(expected = "radius must be at least 0")]
    fn test_spiral_invalid() {
        HexCoord::spiral(HexCoord::ORIGIN, -1);
    }

    #[test]
    fn test_rotations() {
        let origin = HexCoord::new(0, 1);
        let walk: Vec<HexCoord> =
            HexCoord::rotations(origin, true, 6).collect();
        // Sequential walk: each element is the rotation of the previous one
        let mut expected = origin;
        for coord in &walk {
            expected = expected.rotate(true);
            assert_eq!(*coord, expected);
        }
        // Six steps return to the start
        assert_eq!(*walk.last().unwrap(), origin);
        // All six intermediate positions are distinct
        let unique: CoordSet = walk.iter().copied().collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn test_frac_rotations() {
        let origin = FracHexCoord::new(0.5, 1.5);
        let walk: Vec<FracHexCoord> =
            FracHexCoord::rotations(origin, false, 6).collect();
        assert_eq!(walk.len(), 6);
        let last = *walk.last().unwrap();
        assert!((last.q() - origin.q()).abs() < 1e-9);
        assert!((last.r() - origin.r()).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "count must be at least 1")]
    fn test_rotations_invalid() {
        HexCoord::rotations(HexCoord::ORIGIN, false, 0);
    }
}
