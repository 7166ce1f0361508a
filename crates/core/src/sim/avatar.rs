use crate::balance::MOVE_COOLDOWN_SECONDS;
use crate::interior::{interact, step_for_input, tile_at};
use crate::state::GameState;
use crate::types::{Mode, SimInput, TilePos};

pub(super) fn handle_mode_input(state: GameState, input: &SimInput, dt: f64) -> GameState {
    match state.mode {
        Mode::Avatar => {
            let state = walk(state, input, dt);
            if input.interact { interact(state) } else { state }
        }
        Mode::Command => {
            let mut state = state;
            if input.exit_command {
                state.mode = Mode::Avatar;
                state.push_log("You step away from the helm.");
            }
            state
        }
    }
}

/// One orthogonal step per cooldown window; walls swallow the step but still
/// start the cooldown.
fn walk(mut state: GameState, input: &SimInput, dt: f64) -> GameState {
    state.player.move_cooldown = (state.player.move_cooldown - dt).max(0.0);
    if state.player.move_cooldown > 0.0 {
        return state;
    }
    let Some((dx, dy)) = step_for_input(input.move_x, input.move_y) else {
        return state;
    };
    let from = state.player.tile;
    let to = TilePos { y: from.y + dy, x: from.x + dx };
    if tile_at(to).is_walkable() {
        state.player.tile = to;
    }
    state.player.move_cooldown = MOVE_COOLDOWN_SECONDS;
    state
}
