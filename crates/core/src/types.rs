use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn scale(self, factor: f64) -> Self {
        Self { x: self.x * factor, y: self.y * factor }
    }

    pub fn add(self, other: Self) -> Self {
        Self { x: self.x + other.x, y: self.y + other.y }
    }

    pub fn clamp_length(self, max_length: f64) -> Self {
        let length = self.length();
        if length > max_length && length > 0.0 { self.scale(max_length / length) } else { self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TilePos {
    pub y: i32,
    pub x: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Avatar,
    Command,
}

/// Input snapshot for one tick. Hosts build this from whatever they capture;
/// the core never reads ambient input state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimInput {
    /// Avatar tile step in Avatar mode, ship thrust in Command mode. Each axis in `[-1, 1]`.
    pub move_x: f64,
    pub move_y: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    /// Positive zooms in.
    pub zoom_delta: f64,
    pub reset_camera: bool,
    pub interact: bool,
    pub exit_command: bool,
}

impl SimInput {
    pub fn idle() -> Self {
        Self::default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FactionId {
    HelixGuild,
    FreeHaulers,
    OrbitalUnion,
}

impl FactionId {
    pub const ALL: [FactionId; 3] =
        [FactionId::HelixGuild, FactionId::FreeHaulers, FactionId::OrbitalUnion];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::HelixGuild => "Helix Guild",
            Self::FreeHaulers => "Free Haulers",
            Self::OrbitalUnion => "Orbital Union",
        }
    }
}

impl fmt::Display for FactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Station,
    Outpost,
    Field,
}
