use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use voxmap_geom::{Axis, Direction};

/// Which neighbours a flood may spread to.
///
/// Planar modes stay inside the plane through the seed; `Xyz` spreads along
/// all three axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloodMode {
    Xy,
    Yz,
    Zx,
    #[serde(alias = "3d")]
    Xyz,
}

const SPREAD_XY: [Direction; 2] = [Direction::POS_Y, Direction::NEG_Y];
const SPREAD_YZ: [Direction; 2] = [Direction::POS_Z, Direction::NEG_Z];
const SPREAD_ZX: [Direction; 2] = [Direction::POS_X, Direction::NEG_X];
const SPREAD_XYZ: [Direction; 4] = [
    Direction::POS_Y,
    Direction::NEG_Y,
    Direction::POS_Z,
    Direction::NEG_Z,
];

impl FloodMode {
    pub const ALL: [FloodMode; 4] = [FloodMode::Xy, FloodMode::Yz, FloodMode::Zx, FloodMode::Xyz];

    /// Axis along which runs are scanned and painted.
    #[inline]
    pub const fn forward(self) -> Axis {
        match self {
            FloodMode::Xy | FloodMode::Xyz => Axis::X,
            FloodMode::Yz => Axis::Y,
            FloodMode::Zx => Axis::Z,
        }
    }

    /// Directions perpendicular to [`forward`](Self::forward) that a run may
    /// spawn new runs in.
    #[inline]
    pub fn spread(self) -> &'static [Direction] {
        match self {
            FloodMode::Xy => &SPREAD_XY,
            FloodMode::Yz => &SPREAD_YZ,
            FloodMode::Zx => &SPREAD_ZX,
            FloodMode::Xyz => &SPREAD_XYZ,
        }
    }
}

impl fmt::Display for FloodMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FloodMode::Xy => "xy",
            FloodMode::Yz => "yz",
            FloodMode::Zx => "zx",
            FloodMode::Xyz => "xyz",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFloodModeError(String);

impl fmt::Display for ParseFloodModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown flood mode '{}' (expected xy, yz, zx or xyz)", self.0)
    }
}

impl std::error::Error for ParseFloodModeError {}

impl FromStr for FloodMode {
    type Err = ParseFloodModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xy" => Ok(FloodMode::Xy),
            "yz" => Ok(FloodMode::Yz),
            "zx" => Ok(FloodMode::Zx),
            "xyz" | "3d" => Ok(FloodMode::Xyz),
            _ => Err(ParseFloodModeError(s.to_string())),
        }
    }
}
