//! The tug's interior deck: a fixed tile grid the avatar walks around.

use crate::balance::{
    BUNK_FATIGUE_RELIEF, GALLEY_HUNGER_RELIEF, GALLEY_THIRST_RELIEF, LOUNGE_MORALE_GAIN,
    LOUNGE_STRESS_RELIEF,
};
use crate::needs::AvatarNeedsDelta;
use crate::state::GameState;
use crate::types::{Mode, TilePos};

pub const INTERIOR_WIDTH: i32 = 16;
pub const INTERIOR_HEIGHT: i32 = 12;

pub const HELM_TILE: TilePos = TilePos { y: 2, x: 8 };
pub const GALLEY_TILE: TilePos = TilePos { y: 5, x: 3 };
pub const BUNK_TILE: TilePos = TilePos { y: 9, x: 3 };
pub const LOUNGE_TILE: TilePos = TilePos { y: 9, x: 12 };
pub const SPAWN_TILE: TilePos = TilePos { y: INTERIOR_HEIGHT / 2, x: INTERIOR_WIDTH / 2 };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Floor,
    Helm,
    Galley,
    Bunk,
    Lounge,
}

impl Tile {
    pub fn is_walkable(self) -> bool {
        self != Self::Wall
    }
}

pub fn tile_at(pos: TilePos) -> Tile {
    if pos.x <= 0 || pos.y <= 0 || pos.x >= INTERIOR_WIDTH - 1 || pos.y >= INTERIOR_HEIGHT - 1 {
        return Tile::Wall;
    }
    match pos {
        HELM_TILE => Tile::Helm,
        GALLEY_TILE => Tile::Galley,
        BUNK_TILE => Tile::Bunk,
        LOUNGE_TILE => Tile::Lounge,
        _ => Tile::Floor,
    }
}

/// Collapses analog input to one orthogonal step, horizontal first.
pub fn step_for_input(move_x: f64, move_y: f64) -> Option<(i32, i32)> {
    fn axis(value: f64) -> i32 {
        if value > 0.0 {
            1
        } else if value < 0.0 {
            -1
        } else {
            0
        }
    }
    match (axis(move_x), axis(move_y)) {
        (0, 0) => None,
        (0, dy) => Some((0, dy)),
        (dx, _) => Some((dx, 0)),
    }
}

/// Uses whatever the avatar is standing on.
pub fn interact(mut state: GameState) -> GameState {
    match tile_at(state.player.tile) {
        Tile::Helm => {
            state.mode = Mode::Command;
            state.push_log("You take the helm.");
        }
        Tile::Galley => {
            state.needs = state.needs.apply(&AvatarNeedsDelta {
                hunger: -GALLEY_HUNGER_RELIEF,
                thirst: -GALLEY_THIRST_RELIEF,
                ..AvatarNeedsDelta::default()
            });
            state.push_log("You grab a ration pack and a bulb of water.");
        }
        Tile::Bunk => {
            state.needs = state.needs.apply(&AvatarNeedsDelta {
                fatigue: -BUNK_FATIGUE_RELIEF,
                ..AvatarNeedsDelta::default()
            });
            state.push_log("You catch a short nap.");
        }
        Tile::Lounge => {
            state.needs = state.needs.apply(&AvatarNeedsDelta {
                stress: -LOUNGE_STRESS_RELIEF,
                morale: LOUNGE_MORALE_GAIN,
                ..AvatarNeedsDelta::default()
            });
            state.push_log("You unwind in the lounge.");
        }
        Tile::Floor | Tile::Wall => state.push_log("Nothing to interact with here."),
    }
    state
}
