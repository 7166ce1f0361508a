//! Hiring and firing. Rejections leave the roster untouched and log why.

use super::generate_candidates;
use crate::balance::{CANDIDATE_POOL_SIZE, FIRING_MORALE_PENALTY, MAX_CREW};
use crate::state::GameState;

pub fn candidate_pool_key(seed: &str, generation: u32) -> String {
    format!("{seed}|hire|{generation}")
}

pub fn hire_candidate(mut state: GameState, candidate_id: &str) -> GameState {
    let Some(index) =
        state.company.candidates.iter().position(|candidate| candidate.member.id == candidate_id)
    else {
        state.push_log(format!("No candidate {candidate_id} on the board."));
        return state;
    };
    if state.company.crew.len() >= MAX_CREW {
        state.push_log(format!("Crew quarters are full ({MAX_CREW} berths)."));
        return state;
    }
    let bonus = state.company.candidates[index].sign_on_bonus;
    if state.company.credits < bonus {
        let name = &state.company.candidates[index].member.name;
        let message = format!("Cannot afford {name}'s sign-on bonus of {bonus} cr.");
        state.push_log(message);
        return state;
    }

    let candidate = state.company.candidates.remove(index);
    state.company.credits -= bonus;
    let message = format!("Hired {} as {:?} for {bonus} cr.", candidate.member.name, candidate.member.role);
    tracing::info!(crew_id = %candidate.member.id, bonus, "crew hired");
    state.company.crew.push(candidate.member);
    state.push_log(message);
    state
}

pub fn fire_crew(mut state: GameState, crew_id: &str) -> GameState {
    let Some(index) = state.company.crew.iter().position(|member| member.id == crew_id) else {
        state.push_log(format!("No crew member {crew_id} aboard."));
        return state;
    };
    let member = state.company.crew.remove(index);
    for remaining in &mut state.company.crew {
        remaining.needs = remaining.needs.adjust(0.0, 0.0, -FIRING_MORALE_PENALTY, 0.0);
    }
    state.push_log(format!("{} has been let go.", member.name));
    state
}

/// Replaces the candidate board with the next deterministic pool.
pub fn regenerate_candidates(mut state: GameState) -> GameState {
    state.company.candidate_generation += 1;
    let key = candidate_pool_key(&state.seed, state.company.candidate_generation);
    state.company.candidates = generate_candidates(&key, CANDIDATE_POOL_SIZE);
    state.push_log("New applicants posted to the hiring board.");
    state
}
