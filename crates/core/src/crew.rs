//! Crew roster: procedural candidates, hiring, payroll, and the ops-efficiency
//! summary that other subsystems read.

mod generation;
mod payroll;
mod roster;

pub use generation::generate_candidates;
pub use payroll::{process_payroll, total_payroll};
pub use roster::{candidate_pool_key, fire_crew, hire_candidate, regenerate_candidates};

use crate::balance::{OPS_EFFICIENCY_EMPTY, OPS_EFFICIENCY_MAX, OPS_EFFICIENCY_MIN};
use crate::needs::tick_crew_needs;
use crate::state::{CrewMember, GameState};

/// `0.6 + avg_skill * 0.05 + avg_morale * 0.005 - avg_stress * 0.004`, clamped
/// to `[0.5, 1.5]`. An empty roster scores the flat baseline.
pub fn compute_ops_efficiency(crew: &[CrewMember]) -> f64 {
    if crew.is_empty() {
        return OPS_EFFICIENCY_EMPTY;
    }
    let count = crew.len() as f64;
    let avg_skill = crew.iter().map(|member| member.skills.operational_average()).sum::<f64>() / count;
    let avg_morale = crew.iter().map(|member| member.needs.morale).sum::<f64>() / count;
    let avg_stress = crew.iter().map(|member| member.needs.stress).sum::<f64>() / count;
    (OPS_EFFICIENCY_EMPTY + avg_skill * 0.05 + avg_morale * 0.005 - avg_stress * 0.004)
        .clamp(OPS_EFFICIENCY_MIN, OPS_EFFICIENCY_MAX)
}

pub fn tick_crew(mut state: GameState, dt: f64) -> GameState {
    for member in &mut state.company.crew {
        member.needs = tick_crew_needs(member.needs, dt);
    }
    state
}
