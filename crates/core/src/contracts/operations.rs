//! Per-tick resolution of running tows and salvage jobs.

use super::{ContractKind, ContractStatus, mark_contract_completed, mark_contract_failed};
use crate::balance::{
    SALVAGE_HULL_DAMAGE, SALVAGE_RISK_BASE, SALVAGE_RISK_EFFICIENCY_FACTOR,
    SALVAGE_RISK_HULL_FACTOR, SALVAGE_RISK_INTERVAL_TICKS, TOW_RISK_BASE,
    TOW_RISK_EFFICIENCY_FACTOR, TOW_RISK_HULL_FACTOR,
};
use crate::rng::roll_for_key;
use crate::state::{GameState, ShipStats};

pub fn tow_risk_threshold(efficiency: f64, stats: &ShipStats) -> f64 {
    TOW_RISK_BASE
        + (1.0 - efficiency) * TOW_RISK_EFFICIENCY_FACTOR
        + stats.hull_factor() * TOW_RISK_HULL_FACTOR
}

pub fn salvage_risk_threshold(efficiency: f64, stats: &ShipStats) -> f64 {
    SALVAGE_RISK_BASE
        + (1.0 - efficiency) * SALVAGE_RISK_EFFICIENCY_FACTOR
        + stats.hull_factor() * SALVAGE_RISK_HULL_FACTOR
}

/// Roll for the tick that follows `prior_tick`.
pub fn tow_risk_roll(seed: &str, contract_id: &str, prior_tick: u64) -> f64 {
    roll_for_key(&format!("{seed}|tow|{contract_id}|{}", prior_tick + 1))
}

pub fn salvage_risk_roll(seed: &str, contract_id: &str, tick: u64) -> f64 {
    roll_for_key(&format!("{seed}|salvage|{contract_id}|{tick}"))
}

/// A roll under the threshold parts the tow line and fails the contract.
pub fn tick_tow_risk(mut state: GameState, prior_tick: u64) -> GameState {
    let Some(contract_id) = state.sector_ship.towing_contract_id.clone() else {
        return state;
    };
    let in_progress = state
        .contracts
        .get(&contract_id)
        .is_some_and(|contract| contract.status == ContractStatus::InProgress);
    if !in_progress {
        state.sector_ship.towing_contract_id = None;
        return state;
    }

    let threshold = tow_risk_threshold(state.company.ops_efficiency, &state.ship_stats);
    let roll = tow_risk_roll(&state.seed, &contract_id, prior_tick);
    if roll < threshold {
        tracing::info!(contract_id = %contract_id, roll, threshold, "tow line parted");
        return mark_contract_failed(state, &contract_id, "the tow line parted");
    }
    state
}

/// Counts the salvage timer down, rolls for hull damage every
/// `SALVAGE_RISK_INTERVAL_TICKS`, and pays out when the timer hits zero.
pub fn tick_salvage_operation(mut state: GameState) -> GameState {
    let Some(mut operation) = state.contracts.active_operation.clone() else {
        return state;
    };
    operation.remaining_ticks = operation.remaining_ticks.saturating_sub(1);
    let contract_id = operation.contract_id.clone();
    let remaining = operation.remaining_ticks;
    state.contracts.active_operation = Some(operation);

    if state.tick % SALVAGE_RISK_INTERVAL_TICKS == 0 {
        let threshold = salvage_risk_threshold(state.company.ops_efficiency, &state.ship_stats);
        let roll = salvage_risk_roll(&state.seed, &contract_id, state.tick);
        if roll < threshold {
            state.ship_stats.hull = (state.ship_stats.hull - SALVAGE_HULL_DAMAGE).max(0.0);
            state.push_log(format!(
                "Debris strike during salvage. Hull at {:.0}.",
                state.ship_stats.hull
            ));
        }
    }

    if remaining > 0 {
        return state;
    }
    let parts = match state.contracts.get(&contract_id).map(|contract| &contract.kind) {
        Some(ContractKind::Salvage(payload)) => payload.parts,
        _ => 0,
    };
    state.ship_stats.salvage_parts += parts;
    let state = mark_contract_completed(state, &contract_id);
    clear_operation(state, &contract_id)
}

fn clear_operation(mut state: GameState, contract_id: &str) -> GameState {
    if state
        .contracts
        .active_operation
        .as_ref()
        .is_some_and(|operation| operation.contract_id == contract_id)
    {
        state.contracts.active_operation = None;
    }
    state
}

/// Delivering the derelict to its destination completes the tow.
pub fn complete_tow_on_arrival(state: GameState) -> GameState {
    let Some(contract_id) = state.sector_ship.towing_contract_id.clone() else {
        return state;
    };
    let delivered = match state.contracts.get(&contract_id).map(|contract| &contract.kind) {
        Some(ContractKind::Tug(payload)) => {
            payload.destination_node == state.sector_ship.current_node
        }
        _ => false,
    };
    if delivered { mark_contract_completed(state, &contract_id) } else { state }
}
