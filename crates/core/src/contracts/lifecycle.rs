//! Guarded status transitions: `Available -> Accepted -> InProgress ->
//! {Completed | Failed}`. A failed precondition leaves the state as it was
//! and logs the reason.

use super::{ActiveOperation, Contract, ContractKind, ContractStatus};
use crate::balance::{REPUTATION_FAILURE_PENALTY, TUG_MIN_HULL_FRACTION};
use crate::state::GameState;

fn find_contract(state: &mut GameState, contract_id: &str) -> Option<Contract> {
    let found = state.contracts.get(contract_id).cloned();
    if found.is_none() {
        state.push_log(format!("Unknown contract {contract_id}."));
    }
    found
}

pub fn accept_contract(mut state: GameState, contract_id: &str) -> GameState {
    let Some(contract) = find_contract(&mut state, contract_id) else {
        return state;
    };
    if contract.status != ContractStatus::Available {
        state.push_log(format!("Contract {contract_id} is no longer on offer."));
        return state;
    }
    state.push_log(format!(
        "Accepted {} contract for {} ({} cr).",
        contract.kind.label(),
        contract.faction,
        contract.reward
    ));
    state.contracts.replace(contract.with_status(ContractStatus::Accepted));
    state
}

pub fn start_contract_operation(mut state: GameState, contract_id: &str) -> GameState {
    let Some(contract) = find_contract(&mut state, contract_id) else {
        return state;
    };
    if contract.status != ContractStatus::Accepted {
        state.push_log(format!("Contract {contract_id} must be accepted before starting."));
        return state;
    }
    let target = contract.kind.target_node().to_string();
    if state.docked_node() != Some(target.as_str()) {
        let name = state.sector.node(&target).map_or(target.as_str(), |node| node.name.as_str());
        let message = format!("Dock at {name} to start this job.");
        state.push_log(message);
        return state;
    }

    match &contract.kind {
        ContractKind::Tug(payload) => {
            if state.sector_ship.towing_contract_id.is_some() {
                state.push_log("Tow clamps are already engaged.");
                return state;
            }
            if state.ship_stats.tow_capacity < payload.mass {
                state.push_log(format!(
                    "Derelict masses {:.0}t; tow rating is {:.0}t.",
                    payload.mass, state.ship_stats.tow_capacity
                ));
                return state;
            }
            if state.ship_stats.hull < state.ship_stats.hull_max * TUG_MIN_HULL_FRACTION {
                state.push_log("Hull integrity too low to take a tow.");
                return state;
            }
            state.sector_ship.towing_contract_id = Some(contract.id.clone());
            state.contracts.replace(contract.with_status(ContractStatus::InProgress));
            state.push_log("Tow line secured. Haul it home.");
            state
        }
        ContractKind::Salvage(payload) => {
            if state.contracts.active_operation.is_some() {
                state.push_log("Another operation is already running.");
                return state;
            }
            if state.ship_stats.salvage_rig_level < 1 {
                state.push_log("No salvage rig fitted.");
                return state;
            }
            state.contracts.active_operation = Some(ActiveOperation {
                contract_id: contract.id.clone(),
                remaining_ticks: payload.duration_ticks,
                started_tick: state.tick,
            });
            state.contracts.replace(contract.with_status(ContractStatus::InProgress));
            state.push_log(format!("Salvage crews deployed, {} ticks to strip the wreck.", payload.duration_ticks));
            state
        }
        ContractKind::InstallScanner(payload) => {
            if state.ship_stats.scanner_kits == 0 {
                state.push_log("No scanner kits in the hold.");
                return state;
            }
            state.ship_stats.scanner_kits -= 1;
            state.ship_stats.survey_data += payload.survey_yield;
            state.contracts.replace(contract.with_status(ContractStatus::InProgress));
            mark_contract_completed(state, contract_id)
        }
    }
}

/// Pays out an in-progress contract and releases whatever it occupied.
pub fn mark_contract_completed(mut state: GameState, contract_id: &str) -> GameState {
    let Some(contract) = find_contract(&mut state, contract_id) else {
        return state;
    };
    if contract.status != ContractStatus::InProgress {
        state.push_log(format!("Contract {contract_id} is not in progress."));
        return state;
    }
    state.company.credits += contract.reward;
    state.adjust_reputation(contract.faction, contract.reputation_delta);
    release_contract_hold(&mut state, contract_id);
    tracing::info!(contract_id, reward = contract.reward, "contract completed");
    state.push_log(format!(
        "Completed {} contract: +{} cr, {} +{}.",
        contract.kind.label(),
        contract.reward,
        contract.faction,
        contract.reputation_delta
    ));
    state.contracts.replace(contract.with_status(ContractStatus::Completed));
    state
}

pub fn mark_contract_failed(mut state: GameState, contract_id: &str, reason: &str) -> GameState {
    let Some(contract) = find_contract(&mut state, contract_id) else {
        return state;
    };
    if !matches!(contract.status, ContractStatus::Accepted | ContractStatus::InProgress) {
        state.push_log(format!("Contract {contract_id} cannot fail from {:?}.", contract.status));
        return state;
    }
    state.adjust_reputation(contract.faction, -REPUTATION_FAILURE_PENALTY);
    release_contract_hold(&mut state, contract_id);
    tracing::info!(contract_id, reason, "contract failed");
    state.push_log(format!("{} contract failed: {reason}.", contract.kind.label()));
    state.contracts.replace(contract.with_status(ContractStatus::Failed));
    state
}

/// Accepted contracts that were never started fail once their deadline passes.
pub fn expire_contracts(mut state: GameState) -> GameState {
    let lapsed: Vec<String> = state
        .contracts
        .with_status(ContractStatus::Accepted)
        .filter(|contract| state.tick > contract.deadline_tick)
        .map(|contract| contract.id.clone())
        .collect();
    for contract_id in lapsed {
        state = mark_contract_failed(state, &contract_id, "deadline lapsed");
    }
    state
}

fn release_contract_hold(state: &mut GameState, contract_id: &str) {
    if state.sector_ship.towing_contract_id.as_deref() == Some(contract_id) {
        state.sector_ship.towing_contract_id = None;
    }
    if state
        .contracts
        .active_operation
        .as_ref()
        .is_some_and(|operation| operation.contract_id == contract_id)
    {
        state.contracts.active_operation = None;
    }
}
