use super::*;
use crate::balance::{
    CAMERA_PAN_SPEED, EVENT_INTERVAL_TICKS, FIXED_DT, NEED_MAX, NEED_MIN, OPS_EFFICIENCY_EMPTY,
    OPS_EFFICIENCY_MAX, SKILL_MAX,
};
use crate::crew::hire_candidate;
use crate::interior::HELM_TILE;
use crate::types::Vec2;

fn run(mut state: GameState, ticks: u64, input: &SimInput) -> GameState {
    for _ in 0..ticks {
        state = advance_state(state, FIXED_DT, input);
    }
    state
}

#[test]
fn initial_state_is_docked_at_a_station_with_offers() {
    let state = create_initial_state("sim-initial");
    assert_eq!(state.tick, 0);
    assert_eq!(state.company.credits, STARTING_CREDITS);
    assert_eq!(state.company.candidates.len(), CANDIDATE_POOL_SIZE);
    assert_eq!(state.company.ops_efficiency, OPS_EFFICIENCY_EMPTY);
    let home = state.sector.node(&state.sector_ship.current_node).map(|node| node.kind);
    assert_eq!(home, Some(NodeKind::Station));
    assert!(!state.contracts.contracts.is_empty());
    assert_eq!(state.contracts.last_refresh_day, Some(0));
    assert_eq!(state.factions.len(), FactionId::ALL.len());
}

#[test]
fn initial_state_is_a_pure_function_of_seed() {
    assert_eq!(create_initial_state("sim-pure"), create_initial_state("sim-pure"));
    assert_ne!(
        create_initial_state("sim-pure").sector,
        create_initial_state("sim-other").sector
    );
}

#[test]
fn each_tick_advances_clocks_and_physics_stream() {
    let state = create_initial_state("sim-clock");
    let rng = state.rng_state;
    let state = advance_state(state, FIXED_DT, &SimInput::idle());
    assert_eq!(state.tick, 1);
    assert!((state.time - FIXED_DT).abs() < 1e-12);
    assert_ne!(state.rng_state, rng);
    assert_ne!(state.ship.velocity, Vec2::ZERO);
}

#[test]
fn input_is_not_retained_between_ticks() {
    let state = create_initial_state("sim-input");
    let panned = advance_state(state, FIXED_DT, &SimInput { pan_x: 1.0, ..SimInput::idle() });
    let pan = panned.camera.pan;
    let idle = advance_state(panned, FIXED_DT, &SimInput::idle());
    assert_eq!(idle.camera.pan, pan);
}

#[test]
fn helm_interaction_enters_command_mode() {
    let mut state = create_initial_state("sim-helm");
    state.player.tile = HELM_TILE;
    let state = advance_state(state, FIXED_DT, &SimInput { interact: true, ..SimInput::idle() });
    assert_eq!(state.mode, Mode::Command);

    let tile = state.player.tile;
    let state = advance_state(state, FIXED_DT, &SimInput { move_x: 1.0, ..SimInput::idle() });
    assert_eq!(state.player.tile, tile, "helm input steers the ship, not the avatar");
}

#[test]
fn events_queue_on_cadence() {
    let state = create_initial_state("sim-events");
    let state = run(state, EVENT_INTERVAL_TICKS - 1, &SimInput::idle());
    assert!(state.company.pending_event.is_none());
    let state = advance_state(state, FIXED_DT, &SimInput::idle());
    assert_eq!(state.tick, EVENT_INTERVAL_TICKS);
    assert!(state.company.pending_event.is_some());
}

#[test]
fn payroll_comes_due_once_per_day() {
    let mut state = create_initial_state("sim-payroll");
    let candidate_id = state.company.candidates[0].member.id.clone();
    state = hire_candidate(state, &candidate_id);
    let pay = state.company.crew[0].pay_rate;
    let credits = state.company.credits;

    let state = run(state, 1_210, &SimInput::idle());
    assert_eq!(state.company.credits, credits - pay);
    assert!(state.company.payroll_due_time > state.time);
}

#[test]
fn efficiency_snapshot_tracks_crew() {
    let mut state = create_initial_state("sim-efficiency");
    let candidate_id = state.company.candidates[0].member.id.clone();
    state = hire_candidate(state, &candidate_id);
    let state = advance_state(state, FIXED_DT, &SimInput::idle());
    assert_eq!(state.company.ops_efficiency, compute_ops_efficiency(&state.company.crew));
}

#[test]
fn snapshots_do_not_alias() {
    let before = create_initial_state("sim-alias");
    let kept = before.clone();
    let after = advance_state(before, FIXED_DT, &SimInput::idle());
    assert_eq!(kept.tick, 0);
    assert_ne!(kept, after);
}

#[test]
fn seasoned_crew_pans_the_helm_view_faster() {
    let pan_right = SimInput { pan_x: 1.0, ..SimInput::idle() };
    let mut empty = create_initial_state("sim-pan");
    empty.mode = Mode::Command;

    let mut crewed = empty.clone();
    for _ in 0..3 {
        let candidate_id = crewed.company.candidates[0].member.id.clone();
        crewed = hire_candidate(crewed, &candidate_id);
    }
    for member in &mut crewed.company.crew {
        member.skills.ops = SKILL_MAX;
        member.skills.engineering = SKILL_MAX;
        member.skills.piloting = SKILL_MAX;
        member.needs.morale = NEED_MAX;
        member.needs.stress = NEED_MIN;
    }
    assert_eq!(compute_ops_efficiency(&crewed.company.crew), OPS_EFFICIENCY_MAX);

    let slow = advance_state(empty.clone(), FIXED_DT, &pan_right);
    let fast = advance_state(crewed, FIXED_DT, &pan_right);
    assert!(fast.camera.pan.x > slow.camera.pan.x);

    let mut on_foot = empty;
    on_foot.mode = Mode::Avatar;
    let on_foot = advance_state(on_foot, FIXED_DT, &pan_right);
    assert!((on_foot.camera.pan.x - CAMERA_PAN_SPEED * FIXED_DT).abs() < 1e-9);
}
