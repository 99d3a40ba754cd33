use serde::{Deserialize, Serialize};

/// Geographic bounding box in degrees.
///
/// Serialized with the short edge names `n`, `e`, `s`, `w`. The long names
/// are accepted when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bbox {
    #[serde(rename = "n", alias = "north")]
    pub north: f64,

    #[serde(rename = "e", alias = "east")]
    pub east: f64,

    #[serde(rename = "s", alias = "south")]
    pub south: f64,

    #[serde(rename = "w", alias = "west")]
    pub west: f64,
}

impl Bbox {
    pub fn new(north: f64, east: f64, south: f64, west: f64) -> Self {
        Self { north, east, south, west }
    }

    /// Planar, edge-exclusive containment test.
    ///
    /// A point is inside when `north > lat > south` and `west > lon > east`.
    /// Boxes crossing the antimeridian or a pole are not handled; a proper
    /// spherical test will replace this.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.north > lat && lat > self.south && self.west > lon && lon > self.east
    }

    /// True when no point can satisfy [`Bbox::contains`].
    pub fn is_degenerate(&self) -> bool {
        !(self.north > self.south && self.west > self.east)
    }
}
