//! The tile map: a sparse dictionary keyed by coordinate, with its key set
//! fixed at construction from a map shape.

use crate::grid::{coord::HexCoord, shape::MapShape};
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::ops;

/// An ORDERED map of coordinates to some `T`. This has some extra memory
/// overhead over a plain hash map, so we only use it where the ordering
/// actually matters — here, so that iteration and serialization are
/// deterministic.
pub type HexCoordIndexMap<T> = IndexMap<HexCoord, T, FnvBuildHasher>;

/// A map of tiles keyed by coordinate. The key set is fixed when the map is
/// constructed from a shape and never grows or shrinks afterwards: values
/// are mutated in place, keys are not. That gives a "no partial maps"
/// guarantee — a coordinate is either a full member with a tile value, or
/// not a member at all.
///
/// Indexing with `map[coord]` panics for coordinates outside the shape. Code
/// that expects to probe coordinates which may fall outside the map should
/// use [HexMap::get] instead.
///
/// ## Serialization
///
/// The map serializes as a list of `(coordinate, tile)` pairs, since
/// coordinates don't make good keys in formats like JSON. Loading a map does
/// **not** re-check the key set against any shape; if the shape's parameters
/// changed since the tiles were saved, reconciling the two is the caller's
/// concern.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HexMap<T> {
    #[serde(with = "crate::util::coord_map_to_pairs_serde")]
    #[serde(bound(
        serialize = "T: Serialize",
        deserialize = "T: Deserialize<'de>"
    ))]
    tiles: HexCoordIndexMap<T>,
}

impl<T: Default> HexMap<T> {
    /// Construct a new map covering the given shape, with every tile set to
    /// the default value
    pub fn new<S: MapShape + ?Sized>(shape: &S) -> Self {
        let coords = shape.coordinates();
        let mut tiles = HexCoordIndexMap::with_capacity_and_hasher(
            coords.len(),
            FnvBuildHasher::default(),
        );
        for coord in coords.iter() {
            tiles.insert(*coord, T::default());
        }
        Self { tiles }
    }

    /// Reset every tile to the default value. The key set is untouched.
    pub fn clear(&mut self) {
        for tile in self.tiles.values_mut() {
            *tile = T::default();
        }
    }
}

impl<T> HexMap<T> {
    /// Whether the given coordinate is a member of this map
    pub fn contains(&self, coord: HexCoord) -> bool {
        self.tiles.contains_key(&coord)
    }

    /// Get the tile at the given coordinate, or `None` if the coordinate is
    /// not a member of this map. This is the accessor to use when probing
    /// coordinates that may fall outside the shape.
    pub fn get(&self, coord: HexCoord) -> Option<&T> {
        self.tiles.get(&coord)
    }

    /// Get a mutable reference to the tile at the given coordinate, or
    /// `None` if the coordinate is not a member of this map
    pub fn get_mut(&mut self, coord: HexCoord) -> Option<&mut T> {
        self.tiles.get_mut(&coord)
    }

    /// Get an iterator of the coordinates in this map
    pub fn coordinates(&self) -> impl Iterator<Item = HexCoord> + '_ {
        self.tiles.keys().copied()
    }

    /// Get an iterator of the tile values in this map
    pub fn tiles(&self) -> impl Iterator<Item = &T> {
        self.tiles.values()
    }

    /// Get an iterator of mutable references to the tile values in this map
    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.tiles.values_mut()
    }

    /// Get an iterator of (coordinate, tile) entries in this map
    pub fn iter(&self) -> impl Iterator<Item = (HexCoord, &T)> {
        self.tiles.iter().map(|(coord, tile)| (*coord, tile))
    }

    /// Get the number of tiles in the map
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl<T> ops::Index<HexCoord> for HexMap<T> {
    type Output = T;

    fn index(&self, coord: HexCoord) -> &T {
        match self.tiles.get(&coord) {
            Some(tile) => tile,
            None => panic!("no tile at coordinate {coord}"),
        }
    }
}

impl<T> ops::IndexMut<HexCoord> for HexMap<T> {
    fn index_mut(&mut self, coord: HexCoord) -> &mut T {
        match self.tiles.get_mut(&coord) {
            Some(tile) => tile,
            None => panic!("no tile at coordinate {coord}"),
        }
    }
}
