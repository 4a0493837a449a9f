use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use voxmap_flood::{FloodMode, flood_replace};
use voxmap_geom::{Bounds, Coord};
use voxmap_grid::{Cell, Grid, GridError};
use voxmap_raster::{draw_line, draw_plane};

/// A box of character cells and the edits applied to it, in file order.
#[derive(Clone, Debug, Deserialize)]
pub struct Scene {
    pub bounds: Bounds,
    #[serde(default)]
    pub ops: Vec<SceneOp>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SceneOp {
    Set {
        at: Coord,
        value: char,
    },
    Line {
        from: Coord,
        to: Coord,
        value: char,
    },
    /// Corners in perimeter order.
    Plane {
        corners: [Coord; 4],
        value: char,
    },
    /// Fill the whole box, or only `region` when given.
    Fill {
        #[serde(default)]
        region: Option<Bounds>,
        value: char,
    },
    /// Rewrite every cell equal to `old`; a missing `old` targets absent cells.
    Replace {
        #[serde(default)]
        old: Option<char>,
        value: char,
    },
    Flood {
        mode: FloodMode,
        at: Coord,
        value: char,
    },
}

impl SceneOp {
    pub fn kind(&self) -> &'static str {
        match self {
            SceneOp::Set { .. } => "set",
            SceneOp::Line { .. } => "line",
            SceneOp::Plane { .. } => "plane",
            SceneOp::Fill { .. } => "fill",
            SceneOp::Replace { .. } => "replace",
            SceneOp::Flood { .. } => "flood",
        }
    }

    /// Apply to `grid`, returning the number of cells written.
    pub fn apply(&self, grid: &mut Grid<char>) -> Result<usize, GridError> {
        match self {
            SceneOp::Set { at, value } => grid.set_at(*at, *value).map(|_| 1),
            SceneOp::Line { from, to, value } => draw_line(grid, *from, *to, *value),
            SceneOp::Plane { corners, value } => {
                let [c1, c2, c3, c4] = *corners;
                draw_plane(grid, c1, c2, c3, c4, *value)
            }
            SceneOp::Fill { region: None, value } => grid.fill(*value),
            SceneOp::Fill {
                region: Some(region),
                value,
            } => grid.sub_map(*region)?.fill(*value),
            SceneOp::Replace { old, value } => grid.replace(&Cell::from(*old), *value),
            SceneOp::Flood { mode, at, value } => {
                flood_replace(grid, *mode, *at, *value).map(|report| report.painted)
            }
        }
    }
}

impl Scene {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Build a fresh grid and run every op against it. The first failing op
    /// stops the build.
    pub fn build(&self) -> Result<Grid<char>, GridError> {
        let mut grid = Grid::new(self.bounds)?;
        for (i, op) in self.ops.iter().enumerate() {
            match op.apply(&mut grid) {
                Ok(n) => log::debug!(target: "scene", "op {} ({}): {} cells", i, op.kind(), n),
                Err(e) => {
                    log::warn!(target: "scene", "op {} ({}) failed: {}", i, op.kind(), e);
                    return Err(e);
                }
            }
        }
        log::info!(target: "scene", "built {} with {} ops", self.bounds, self.ops.len());
        Ok(grid)
    }
}
