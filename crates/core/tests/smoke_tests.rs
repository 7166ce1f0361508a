use tugline_core::balance::{FIXED_DT, TICKS_PER_DAY, TUG_MASS_MIN, TUG_MASS_SPREAD};
use tugline_core::contracts::{
    ContractKind, ContractStatus, refresh_contracts, tow_risk_roll, tow_risk_threshold,
};
use tugline_core::crew::process_payroll;
use tugline_core::{
    GameState, SimInput, accept_contract, advance_state, create_initial_state,
    deserialize_save_state, hire_candidate, serialize_save_state, start_contract_operation,
    start_travel,
};

fn tick(state: GameState) -> GameState {
    advance_state(state, FIXED_DT, &SimInput::idle())
}

/// Tows a derelict for the first tug contract the seed offers.
fn towing_state(seed: &str) -> (GameState, String) {
    let mut state = create_initial_state(seed);
    for day in 1..50 {
        let offer = state.contracts.contracts.iter().find_map(|contract| match &contract.kind {
            ContractKind::Tug(payload) if contract.status == ContractStatus::Available => {
                Some((contract.id.clone(), payload.target_node.clone()))
            }
            _ => None,
        });
        if let Some((contract_id, target)) = offer {
            let mut state = accept_contract(state, &contract_id);
            state.sector_ship.current_node = target;
            state.ship_stats.tow_capacity = TUG_MASS_MIN + TUG_MASS_SPREAD;
            let state = start_contract_operation(state, &contract_id);
            assert_eq!(state.sector_ship.towing_contract_id.as_deref(), Some(contract_id.as_str()));
            return (state, contract_id);
        }
        state.tick = day * TICKS_PER_DAY;
        state = refresh_contracts(state);
    }
    panic!("seed {seed} never offered a tug contract");
}

#[test]
fn test_travel_to_adjacent_node_arrives_and_burns_fuel() {
    let state = create_initial_state("travel-seed");
    let origin = state.sector_ship.current_node.clone();
    let destination = state
        .sector
        .neighbors(&origin)
        .next()
        .map(str::to_string)
        .expect("home node has at least one lane");
    let fuel_before = state.ship_stats.fuel;

    let mut state = start_travel(state, &destination);
    let eta = state.sector_ship.in_transit.as_ref().map(|transit| transit.eta_ticks).expect("departed");
    for _ in 0..eta {
        state = tick(state);
    }

    assert_eq!(state.sector_ship.current_node, destination);
    assert!(state.sector_ship.in_transit.is_none());
    assert!(state.ship_stats.fuel < fuel_before);
}

#[test]
fn test_tow_risk_roll_predicts_single_tick_outcome() {
    let (state, contract_id) = towing_state("tow-seed");
    let threshold = tow_risk_threshold(state.company.ops_efficiency, &state.ship_stats);
    let roll = tow_risk_roll(&state.seed, &contract_id, state.tick);
    let expect_failure = roll < threshold;

    let state = tick(state);
    let status = state.contracts.get(&contract_id).map(|contract| contract.status);
    if expect_failure {
        assert_eq!(status, Some(ContractStatus::Failed));
        assert!(state.sector_ship.towing_contract_id.is_none());
    } else {
        assert_eq!(status, Some(ContractStatus::InProgress));
        assert_eq!(state.sector_ship.towing_contract_id.as_deref(), Some(contract_id.as_str()));
    }
}

#[test]
fn test_tow_fails_on_a_losing_roll() {
    let (mut state, contract_id) = towing_state("tow-seed");
    let threshold = tow_risk_threshold(state.company.ops_efficiency, &state.ship_stats);
    let losing_tick = (state.tick..state.tick + 200_000)
        .find(|prior| tow_risk_roll(&state.seed, &contract_id, *prior) < threshold)
        .expect("some tick rolls under the threshold");

    state.tick = losing_tick;
    let reputation_before = state.factions.clone();
    let state = tick(state);
    assert_eq!(
        state.contracts.get(&contract_id).map(|contract| contract.status),
        Some(ContractStatus::Failed)
    );
    assert!(state.sector_ship.towing_contract_id.is_none());
    assert_ne!(state.factions, reputation_before);
}

#[test]
fn test_hiring_first_candidate() {
    let state = create_initial_state("hire-seed");
    let candidate = state.company.candidates[0].clone();
    let credits = state.company.credits;
    let pool = state.company.candidates.len();

    let state = hire_candidate(state, &candidate.member.id);
    assert_eq!(state.company.credits, credits - candidate.sign_on_bonus);
    assert_eq!(state.company.crew.len(), 1);
    assert_eq!(state.company.crew[0].id, candidate.member.id);
    assert_eq!(state.company.candidates.len(), pool - 1);
    assert!(state.company.candidates.iter().all(|c| c.member.id != candidate.member.id));
}

#[test]
fn test_payroll_paid_and_missed_diverge() {
    let mut state = create_initial_state("pay-seed");
    for _ in 0..2 {
        let candidate_id = state.company.candidates[0].member.id.clone();
        state = hire_candidate(state, &candidate_id);
    }
    state.time = state.company.payroll_due_time;

    let mut broke = state.clone();
    broke.company.credits = 0;

    let paid = process_payroll(state);
    let missed = process_payroll(broke);
    assert_eq!(paid.company.payroll_due_time, missed.company.payroll_due_time);
    for (paid, missed) in paid.company.crew.iter().zip(&missed.company.crew) {
        assert!(paid.needs.morale - missed.needs.morale > 4.0);
    }
}

#[test]
fn test_save_round_trip_after_ticks() {
    let mut state = create_initial_state("save-seed");
    let candidate_id = state.company.candidates[1].member.id.clone();
    state = hire_candidate(state, &candidate_id);
    for _ in 0..75 {
        state = advance_state(state, FIXED_DT, &SimInput { move_x: 1.0, pan_y: 0.3, ..SimInput::idle() });
    }

    let raw = serialize_save_state(&state).expect("encode");
    let restored = deserialize_save_state(&raw).expect("decode");
    assert_eq!(restored.seed, state.seed);
    assert_eq!(restored.tick, state.tick);
    assert!((restored.time - state.time).abs() < 1e-6);
    assert!((restored.ship.position.x - state.ship.position.x).abs() < 1e-6);
    assert!((restored.ship.position.y - state.ship.position.y).abs() < 1e-6);
    assert_eq!(restored, state);
}
