//! Discrete player commands as data, so UI handlers and journals share one
//! dispatch path. Every variant maps onto a total `GameState -> GameState`
//! transition.

use serde::{Deserialize, Serialize};

use crate::contracts::{accept_contract, start_contract_operation};
use crate::crew::{fire_crew, hire_candidate, regenerate_candidates};
use crate::events::resolve_event;
use crate::state::GameState;
use crate::station::{buy_scanner_kit, refuel, repair_hull};
use crate::travel::start_travel;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerAction {
    Hire { candidate_id: String },
    Fire { crew_id: String },
    RegenerateCandidates,
    ResolveEvent { choice_id: String },
    StartTravel { destination: String },
    AcceptContract { contract_id: String },
    StartOperation { contract_id: String },
    Refuel,
    RepairHull,
    BuyScannerKit,
    RegenerateVisuals { render_seed: String },
}

/// Swaps the cosmetic seed. Simulation streams are keyed off `seed` and stay put.
pub fn regenerate_visuals(mut state: GameState, render_seed: &str) -> GameState {
    state.render_seed = render_seed.to_string();
    state
}

pub fn apply_action(state: GameState, action: &PlayerAction) -> GameState {
    tracing::debug!(tick = state.tick, ?action, "applying action");
    match action {
        PlayerAction::Hire { candidate_id } => hire_candidate(state, candidate_id),
        PlayerAction::Fire { crew_id } => fire_crew(state, crew_id),
        PlayerAction::RegenerateCandidates => regenerate_candidates(state),
        PlayerAction::ResolveEvent { choice_id } => resolve_event(state, choice_id),
        PlayerAction::StartTravel { destination } => start_travel(state, destination),
        PlayerAction::AcceptContract { contract_id } => accept_contract(state, contract_id),
        PlayerAction::StartOperation { contract_id } => {
            start_contract_operation(state, contract_id)
        }
        PlayerAction::Refuel => refuel(state),
        PlayerAction::RepairHull => repair_hull(state),
        PlayerAction::BuyScannerKit => buy_scanner_kit(state),
        PlayerAction::RegenerateVisuals { render_seed } => regenerate_visuals(state, render_seed),
    }
}
