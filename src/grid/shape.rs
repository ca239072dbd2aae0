//! Map shapes: rules that generate the set of coordinates covered by a grid
//! outline. A shape owns an origin plus its own parameters, and enumerates a
//! de-duplicated coordinate set, computed lazily on first read and memoized
//! until something invalidates it.

use crate::{
    grid::{
        coord::{HexAxis, HexCoord},
        geometry::Orientation,
    },
    util::hexagon_len,
};
use fnv::FnvBuildHasher;
use log::debug;
use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};

/// A set of coordinates
pub type HexCoordSet = std::collections::HashSet<HexCoord, FnvBuildHasher>;

/// A two-state (empty/populated) memo for a shape's coordinate set.
///
/// The cache is intentionally **not** thread-safe: shapes are single-owner
/// values, and the empty→populated transition must not race. Hosts that
/// share a shape across threads have to either force the computation up
/// front under single ownership or add their own lock. `RefCell` encodes
/// that contract in the type system (the cache is `!Sync`).
///
/// Serialization skips the cache, so a freshly deserialized shape is always
/// back in the empty state and recomputes from its loaded parameters.
#[derive(Clone, Debug, Default)]
pub struct ShapeCache(RefCell<Option<HexCoordSet>>);

impl ShapeCache {
    /// Get the cached set, populating it with `compute` if this is the
    /// first read since construction or invalidation
    fn get_or_compute(
        &self,
        compute: impl FnOnce() -> HexCoordSet,
    ) -> Ref<'_, HexCoordSet> {
        if self.0.borrow().is_none() {
            let coords = compute();
            debug!("populated shape cache with {} coordinates", coords.len());
            *self.0.borrow_mut() = Some(coords);
        }
        // Populated above if it was empty
        Ref::map(self.0.borrow(), |cache| cache.as_ref().unwrap())
    }

    /// Drop the cached set, returning to the empty state. The next read
    /// recomputes from the shape's current parameters.
    fn invalidate(&self) {
        *self.0.borrow_mut() = None;
    }
}

/// A rule generating a finite set of coordinates relative to an origin, used
/// to seed a map's key space. Implementors define [MapShape::base_shape] (the
/// origin-relative outline); enumeration, origin translation, and memoization
/// are provided.
pub trait MapShape {
    /// The coordinate the shape is centered on/anchored to
    fn origin(&self) -> HexCoord;

    /// Compute the origin-relative coordinate set for this shape. This is
    /// the raw outline rule; callers should go through
    /// [MapShape::coordinates], which translates by the origin and caches.
    fn base_shape(&self) -> HexCoordSet;

    /// The shape's memoized coordinate set
    fn cache(&self) -> &ShapeCache;

    /// Enumerate the coordinates covered by this shape: the base outline
    /// translated by the origin. Computed once, lazily, then served from the
    /// cache until the shape is mutated or [MapShape::invalidate]d.
    fn coordinates(&self) -> Ref<'_, HexCoordSet> {
        self.cache().get_or_compute(|| {
            self.base_shape()
                .into_iter()
                .map(|coord| self.origin() + coord)
                .collect()
        })
    }

    /// Whether the given coordinate is covered by this shape
    fn contains(&self, coord: HexCoord) -> bool {
        self.coordinates().contains(&coord)
    }

    /// Force the cached coordinate set to be recomputed on the next read.
    /// Setters call this internally; external callers only need it after
    /// mutating parameters through some channel the shape can't see (e.g.
    /// deserializing in place).
    fn invalidate(&self) {
        self.cache().invalidate();
    }
}

/// A hexagonal outline: every coordinate within `size` steps of the origin.
/// A size of 0 is a single tile, 1 is 7 tiles, 2 is 19, etc.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HexagonalShape {
    origin: HexCoord,
    size: i32,
    #[serde(skip)]
    cache: ShapeCache,
}

impl HexagonalShape {
    /// Construct a new hexagonal shape. Panics if `size` is negative.
    pub fn new(origin: HexCoord, size: i32) -> Self {
        assert!(size >= 0, "size must be at least 0, but was {size}");
        Self {
            origin,
            size,
            cache: ShapeCache::default(),
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Change the shape's size, invalidating the cached coordinate set.
    /// Panics if `size` is negative.
    pub fn set_size(&mut self, size: i32) {
        assert!(size >= 0, "size must be at least 0, but was {size}");
        self.invalidate();
        self.size = size;
    }

    /// Change the shape's origin, invalidating the cached coordinate set
    pub fn set_origin(&mut self, origin: HexCoord) {
        self.invalidate();
        self.origin = origin;
    }
}

impl MapShape for HexagonalShape {
    fn origin(&self) -> HexCoord {
        self.origin
    }

    fn base_shape(&self) -> HexCoordSet {
        let mut shape = HexCoordSet::with_capacity_and_hasher(
            hexagon_len(self.size),
            FnvBuildHasher::default(),
        );
        shape.extend(HexCoord::range(HexCoord::ORIGIN, self.size));
        shape
    }

    fn cache(&self) -> &ShapeCache {
        &self.cache
    }
}

/// A parallelogram outline spanning `[-size, size]` on two axes, reflected
/// across the given axis
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParallelogramShape {
    origin: HexCoord,
    size: i32,
    axis: HexAxis,
    #[serde(skip)]
    cache: ShapeCache,
}

impl ParallelogramShape {
    /// Construct a new parallelogram shape. Panics if `size` is negative.
    pub fn new(origin: HexCoord, size: i32, axis: HexAxis) -> Self {
        assert!(size >= 0, "size must be at least 0, but was {size}");
        Self {
            origin,
            size,
            axis,
            cache: ShapeCache::default(),
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn axis(&self) -> HexAxis {
        self.axis
    }

    /// Change the shape's size, invalidating the cached coordinate set.
    /// Panics if `size` is negative.
    pub fn set_size(&mut self, size: i32) {
        assert!(size >= 0, "size must be at least 0, but was {size}");
        self.invalidate();
        self.size = size;
    }

    /// Change the reflection axis, invalidating the cached coordinate set
    pub fn set_axis(&mut self, axis: HexAxis) {
        self.invalidate();
        self.axis = axis;
    }

    /// Change the shape's origin, invalidating the cached coordinate set
    pub fn set_origin(&mut self, origin: HexCoord) {
        self.invalidate();
        self.origin = origin;
    }
}

impl MapShape for ParallelogramShape {
    fn origin(&self) -> HexCoord {
        self.origin
    }

    fn base_shape(&self) -> HexCoordSet {
        let mut shape = HexCoordSet::default();
        for q in -self.size..=self.size {
            for r in -self.size..=self.size {
                shape.insert(HexCoord::new(q, r).reflect(self.axis));
            }
        }
        shape
    }

    fn cache(&self) -> &ShapeCache {
        &self.cache
    }
}

/// A rectangle outline in offset coordinates. The four extents measure
/// outward from the origin, so the rectangle covers
/// `left + right + 1` columns by `top + bottom + 1` rows (columns and rows
/// swap roles between the two orientations).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RectangularShape {
    origin: HexCoord,
    orientation: Orientation,
    top: i32,
    bottom: i32,
    left: i32,
    right: i32,
    #[serde(skip)]
    cache: ShapeCache,
}

impl RectangularShape {
    /// Construct a new rectangular shape. Panics if any extent is negative.
    pub fn new(
        origin: HexCoord,
        orientation: Orientation,
        top: i32,
        bottom: i32,
        left: i32,
        right: i32,
    ) -> Self {
        for (name, extent) in
            [("top", top), ("bottom", bottom), ("left", left), ("right", right)]
        {
            assert!(extent >= 0, "{name} must be at least 0, but was {extent}");
        }
        Self {
            origin,
            orientation,
            top,
            bottom,
            left,
            right,
            cache: ShapeCache::default(),
        }
    }

    /// Construct a rectangle with the same extent on all four sides. Panics
    /// if `size` is negative.
    pub fn square(
        origin: HexCoord,
        orientation: Orientation,
        size: i32,
    ) -> Self {
        Self::new(origin, orientation, size, size, size, size)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn right(&self) -> i32 {
        self.right
    }

    /// Change all four extents at once, invalidating the cached coordinate
    /// set. Panics if any extent is negative.
    pub fn set_extents(&mut self, top: i32, bottom: i32, left: i32, right: i32) {
        for (name, extent) in
            [("top", top), ("bottom", bottom), ("left", left), ("right", right)]
        {
            assert!(extent >= 0, "{name} must be at least 0, but was {extent}");
        }
        self.invalidate();
        self.top = top;
        self.bottom = bottom;
        self.left = left;
        self.right = right;
    }

    /// Change the shape's origin, invalidating the cached coordinate set
    pub fn set_origin(&mut self, origin: HexCoord) {
        self.invalidate();
        self.origin = origin;
    }

    fn flat_top_shape(&self) -> HexCoordSet {
        let mut shape = HexCoordSet::default();
        for q in -self.left..=self.right {
            // Each column shifts vertically by half a tile; flooring the
            // offset keeps the outline a rectangle in offset coordinates
            let offset = q.div_euclid(2);
            for r in (-self.bottom + offset)..=(self.top + offset) {
                shape.insert(HexCoord::new(q, r));
            }
        }
        shape
    }

    fn pointy_top_shape(&self) -> HexCoordSet {
        let mut shape = HexCoordSet::default();
        for r in -self.bottom..=self.top {
            let offset = r.div_euclid(2);
            for q in (-self.left + offset)..=(self.right + offset) {
                shape.insert(HexCoord::new(q, r));
            }
        }
        shape
    }
}

impl MapShape for RectangularShape {
    fn origin(&self) -> HexCoord {
        self.origin
    }

    fn base_shape(&self) -> HexCoordSet {
        match self.orientation {
            Orientation::FlatTop => self.flat_top_shape(),
            Orientation::PointyTop => self.pointy_top_shape(),
        }
    }

    fn cache(&self) -> &ShapeCache {
        &self.cache
    }
}

/// A triangular outline with `size + 1` tiles on each edge, reflected across
/// the given axis
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TriangularShape {
    origin: HexCoord,
    size: i32,
    axis: HexAxis,
    #[serde(skip)]
    cache: ShapeCache,
}

impl TriangularShape {
    /// Construct a new triangular shape. Panics if `size` is negative.
    pub fn new(origin: HexCoord, size: i32, axis: HexAxis) -> Self {
        assert!(size >= 0, "size must be at least 0, but was {size}");
        Self {
            origin,
            size,
            axis,
            cache: ShapeCache::default(),
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn axis(&self) -> HexAxis {
        self.axis
    }

    /// Change the shape's size, invalidating the cached coordinate set.
    /// Panics if `size` is negative.
    pub fn set_size(&mut self, size: i32) {
        assert!(size >= 0, "size must be at least 0, but was {size}");
        self.invalidate();
        self.size = size;
    }

    /// Change the reflection axis, invalidating the cached coordinate set
    pub fn set_axis(&mut self, axis: HexAxis) {
        self.invalidate();
        self.axis = axis;
    }

    /// Change the shape's origin, invalidating the cached coordinate set
    pub fn set_origin(&mut self, origin: HexCoord) {
        self.invalidate();
        self.origin = origin;
    }
}

impl MapShape for TriangularShape {
    fn origin(&self) -> HexCoord {
        self.origin
    }

    fn base_shape(&self) -> HexCoordSet {
        let mut shape = HexCoordSet::default();
        for q in 0..=self.size {
            for r in 0..=(self.size - q) {
                shape.insert(HexCoord::new(q, -r).reflect(self.axis));
            }
        }
        shape
    }

    fn cache(&self) -> &ShapeCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hexagonal_shape() {
        // Size 1 around the origin: the origin and its six adjacents
        let shape = HexagonalShape::new(HexCoord::ORIGIN, 1);
        let coords = shape.coordinates();
        assert_eq!(coords.len(), 7);
        assert!(coords.contains(&HexCoord::ORIGIN));
        for adjacent in HexCoord::ORIGIN.adjacents() {
            assert!(coords.contains(&adjacent), "missing {adjacent}");
        }
    }

    #[test]
    fn test_hexagonal_shape_sizes() {
        for size in 0..=3 {
            let shape = HexagonalShape::new(HexCoord::ORIGIN, size);
            assert_eq!(shape.coordinates().len(), hexagon_len(size));
        }
    }

    #[test]
    fn test_origin_translation() {
        let origin = HexCoord::new(5, -2);
        let shape = HexagonalShape::new(origin, 1);
        assert!(shape.contains(origin));
        assert!(shape.contains(origin + HexCoord::new(0, 1)));
        assert!(!shape.contains(HexCoord::ORIGIN));
    }

    #[test]
    fn test_parallelogram_shape() {
        for size in 0..=2 {
            for axis in [HexAxis::Q, HexAxis::R, HexAxis::S] {
                let shape =
                    ParallelogramShape::new(HexCoord::ORIGIN, size, axis);
                let expected = (2 * size as usize + 1).pow(2);
                assert_eq!(
                    shape.coordinates().len(),
                    expected,
                    "size {size}, axis {axis:?}"
                );
            }
        }
    }

    #[test]
    fn test_rectangular_shape_flat_top() {
        let shape = RectangularShape::new(
            HexCoord::ORIGIN,
            Orientation::FlatTop,
            2, // top
            1, // bottom
            1, // left
            3, // right
        );
        // (left + right + 1) columns * (top + bottom + 1) rows
        assert_eq!(shape.coordinates().len(), 5 * 4);
        // The origin column spans [-bottom, top] directly
        assert!(shape.contains(HexCoord::new(0, 2)));
        assert!(shape.contains(HexCoord::new(0, -1)));
        assert!(!shape.contains(HexCoord::new(0, 3)));
        // Negative columns shift down via floored halving
        assert!(shape.contains(HexCoord::new(-1, -2)));
        assert!(!shape.contains(HexCoord::new(-1, 2)));
    }

    #[test]
    fn test_rectangular_shape_pointy_top() {
        let shape = RectangularShape::square(
            HexCoord::ORIGIN,
            Orientation::PointyTop,
            1,
        );
        assert_eq!(shape.coordinates().len(), 9);
        // Rows shift horizontally instead of columns shifting vertically
        assert!(shape.contains(HexCoord::new(-2, -1)));
        assert!(!shape.contains(HexCoord::new(1, -1)));
    }

    #[test]
    fn test_triangular_shape() {
        for size in 0..=3 {
            let shape =
                TriangularShape::new(HexCoord::ORIGIN, size, HexAxis::Q);
            let n = size as usize;
            assert_eq!(shape.coordinates().len(), (n + 1) * (n + 2) / 2);
        }
    }

    #[test]
    fn test_cache_invalidation_on_mutation() {
        let mut shape = HexagonalShape::new(HexCoord::ORIGIN, 1);
        assert_eq!(shape.coordinates().len(), 7);

        // Growing the shape must not serve the stale set
        shape.set_size(2);
        assert_eq!(shape.coordinates().len(), 19);

        shape.set_origin(HexCoord::new(3, 3));
        assert!(shape.contains(HexCoord::new(3, 3)));
        assert!(!shape.contains(HexCoord::ORIGIN));
    }

    #[test]
    fn test_cache_reset_by_deserialization() {
        let shape = HexagonalShape::new(HexCoord::ORIGIN, 2);
        // Populate the cache, then round-trip the shape through serde
        assert_eq!(shape.coordinates().len(), 19);
        let json = serde_json::to_string(&shape).unwrap();
        let loaded: HexagonalShape = serde_json::from_str(&json).unwrap();
        // The loaded shape starts empty and recomputes on read
        assert_eq!(loaded.coordinates().len(), 19);
        assert_eq!(loaded.size(), 2);
    }

    #[test]
    #[should_panic(expected = "size must be at least 0")]
    fn test_negative_size() {
        HexagonalShape::new(HexCoord::ORIGIN, -1);
    }

    #[test]
    #[should_panic(expected = "bottom must be at least 0")]
    fn test_negative_extent() {
        RectangularShape::new(
            HexCoord::ORIGIN,
            Orientation::FlatTop,
            1,
            -1,
            1,
            1,
        );
    }
}
