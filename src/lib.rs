//! Hexgrid is a coordinate and geometry algebra for hexagonal grids: exact
//! cube-coordinate arithmetic, rotation/reflection transforms, distance and
//! line/ring/spiral traversals, orientation-aware screen-space geometry, and
//! a family of map shapes that enumerate the coordinate sets of common grid
//! outlines. Rendering is deliberately out of scope — this crate computes
//! coordinates and positions, and presentation layers consume them.
//!
//! ```
//! use hexgrid::{GridConfig, HexCoord, HexGrid};
//!
//! let config = GridConfig::default();
//! let mut grid: HexGrid<u32> = HexGrid::new(config).unwrap();
//! grid.tiles_mut()[HexCoord::ORIGIN] = 1;
//! println!("{}", grid.position(HexCoord::ORIGIN));
//! ```
//!
//! See [GridConfig] for the knobs: hexagon orientation and size, plus the
//! map outline (hexagonal, rectangular, parallelogram, or triangular).

mod config;
mod grid;
mod util;

pub use crate::{
    config::{GridConfig, ShapeConfig},
    grid::{
        coord::{
            CubeCoords, FlatTopDiagonal, FlatTopDirection, FracHexCoord,
            HexAxis, HexCoord, HexDiagonal, HexDirection, PointyTopDiagonal,
            PointyTopDirection,
        },
        geometry::{HexGeometry, Orientation, Point3},
        map::{HexCoordIndexMap, HexMap},
        shape::{
            HexCoordSet, HexagonalShape, MapShape, ParallelogramShape,
            RectangularShape, ShapeCache, TriangularShape,
        },
        HexGrid,
    },
    util::hexagon_len,
};
