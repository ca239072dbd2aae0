pub mod coord;
pub mod geometry;
pub mod map;
pub mod shape;

use crate::{
    grid::{
        coord::HexCoord,
        geometry::{HexGeometry, Point3},
        map::HexMap,
    },
    GridConfig,
};
use anyhow::Context;
use log::info;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A fully built hexagon grid: the config that defines it plus a tile map
/// covering the configured shape. This is the top-level type a host
/// application holds on to — it answers the three questions gameplay and
/// rendering code ask: where does a coordinate land in world space
/// ([HexGrid::position]), which coordinates exist
/// ([HexMap::coordinates]), and what's stored at one of them (indexing into
/// [HexGrid::tiles]).
///
/// ## Serialization
///
/// A grid serializes as its config plus the list of (coordinate, tile)
/// pairs. Building a grid from a config is deterministic, so the config
/// doubles as a compact description of the expected key set; if a loaded
/// grid's tiles don't match what its config generates (because the config
/// was edited by hand), reconciling them is the loader's concern.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HexGrid<T> {
    /// The config this grid was built from. Construction is deterministic
    /// in the config, and once built, the config never changes.
    config: GridConfig,

    /// The tiles of the grid, keyed by coordinate. The key set comes from
    /// the config's shape and is fixed for the life of the grid.
    tiles: HexMap<T>,
}

impl<T: Default> HexGrid<T> {
    /// Build a new grid from the given config, with every tile set to the
    /// default value. Returns an error if the config is invalid.
    pub fn new(config: GridConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid config")?;

        let shape = config.shape.to_shape(config.origin, config.orientation);
        let tiles = HexMap::new(shape.as_ref());
        info!("Built grid with {} tiles from {:?}", tiles.len(), config);

        Ok(Self { config, tiles })
    }
}

impl<T> HexGrid<T> {
    /// Get a reference to the config that defines this grid
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Get the geometry of a single hexagon in this grid. Geometry is
    /// derived from the config, so this is a pure lookup.
    pub fn geometry(&self) -> HexGeometry {
        HexGeometry::new(self.config.orientation, self.config.size)
    }

    /// Get a reference to the map of tiles that make up this grid
    pub fn tiles(&self) -> &HexMap<T> {
        &self.tiles
    }

    /// Get a mutable reference to the map of tiles that make up this grid
    pub fn tiles_mut(&mut self) -> &mut HexMap<T> {
        &mut self.tiles
    }

    /// Get the owned tile map for this grid
    pub fn into_tiles(self) -> HexMap<T> {
        self.tiles
    }

    /// Get the world-space position of a coordinate under this grid's
    /// geometry
    pub fn position(&self, coord: HexCoord) -> Point3 {
        self.geometry().position(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::ShapeConfig, grid::geometry::Orientation};

    #[test]
    fn test_new() {
        let config = GridConfig {
            shape: ShapeConfig::Hexagonal { size: 2 },
            ..GridConfig::default()
        };
        let grid: HexGrid<u8> = HexGrid::new(config).unwrap();
        assert_eq!(grid.tiles().len(), 19);
        assert_eq!(grid.geometry(), HexGeometry::FLAT_TOP);
    }

    #[test]
    fn test_new_invalid_config() {
        let config = GridConfig {
            size: -1.0,
            ..GridConfig::default()
        };
        assert!(HexGrid::<u8>::new(config).is_err());
    }

    #[test]
    fn test_position() {
        let config = GridConfig {
            orientation: Orientation::PointyTop,
            ..GridConfig::default()
        };
        let grid: HexGrid<u8> = HexGrid::new(config).unwrap();
        assert_eq!(
            grid.position(HexCoord::new(1, 0)),
            grid.geometry().position(HexCoord::new(1, 0))
        );
    }
}
