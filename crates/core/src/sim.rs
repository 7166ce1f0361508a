//! Tick orchestration. `advance_state` is the only per-tick entry point; each
//! subsystem transition runs in a fixed order over the owned snapshot.

mod avatar;
mod physics;
mod session;

pub use physics::{step_camera, step_ship};
pub use session::Session;

use std::collections::BTreeMap;
use std::collections::VecDeque;

use crate::balance::{CANDIDATE_POOL_SIZE, PAYROLL_INTERVAL_SECONDS, STARTING_CREDITS};
use crate::contracts::{
    ContractBoard, expire_contracts, refresh_contracts, tick_salvage_operation, tick_tow_risk,
};
use crate::crew::{
    candidate_pool_key, compute_ops_efficiency, generate_candidates, process_payroll, tick_crew,
};
use crate::events::maybe_queue_event;
use crate::interior::SPAWN_TILE;
use crate::needs::{AvatarNeeds, tick_avatar_needs};
use crate::rng::hash_seed_to_u32;
use crate::sector::generate_sector;
use crate::state::{Camera, Company, GameState, Player, SectorShip, Ship, ShipStats};
use crate::travel::advance_travel;
use crate::types::{FactionId, Mode, NodeKind, SimInput};

pub fn physics_seed_key(seed: &str) -> String {
    format!("{seed}|physics")
}

pub fn create_initial_state(seed: &str) -> GameState {
    let sector = generate_sector(seed);
    let home = sector
        .nodes_of_kind(NodeKind::Station)
        .next()
        .or_else(|| sector.nodes.first())
        .map(|node| node.id.clone())
        .unwrap_or_default();
    let candidates = generate_candidates(&candidate_pool_key(seed, 0), CANDIDATE_POOL_SIZE);

    let state = GameState {
        seed: seed.to_string(),
        render_seed: seed.to_string(),
        rng_state: hash_seed_to_u32(&physics_seed_key(seed)),
        tick: 0,
        time: 0.0,
        mode: Mode::Avatar,
        player: Player { tile: SPAWN_TILE, move_cooldown: 0.0 },
        needs: AvatarNeeds::default(),
        company: Company {
            credits: STARTING_CREDITS,
            payroll_due_time: PAYROLL_INTERVAL_SECONDS,
            crew: Vec::new(),
            candidates,
            candidate_generation: 0,
            ops_efficiency: compute_ops_efficiency(&[]),
            pending_event: None,
        },
        sector,
        sector_ship: SectorShip { current_node: home, in_transit: None, towing_contract_id: None },
        ship_stats: ShipStats::default(),
        factions: FactionId::ALL.iter().map(|faction| (*faction, 0)).collect::<BTreeMap<_, _>>(),
        contracts: ContractBoard::default(),
        ship: Ship::default(),
        camera: Camera::default(),
        log: VecDeque::new(),
    };
    tracing::debug!(seed, "initial state created");
    refresh_contracts(state)
}

pub fn advance_state(state: GameState, dt: f64, input: &SimInput) -> GameState {
    let prior_tick = state.tick;

    // 1. Efficiency as the crew stood when the tick began.
    let efficiency = compute_ops_efficiency(&state.company.crew);

    // 2-3. Drift and thrust, then camera.
    let (ship, rng_state) = step_ship(state.ship, state.rng_state, state.mode, input, efficiency, dt);
    let camera = step_camera(state.camera, state.mode, input, efficiency, dt);

    // 4. Clocks, personal needs, snapshot of the pre-tick efficiency.
    let mut state = GameState {
        tick: prior_tick + 1,
        time: state.time + dt,
        needs: tick_avatar_needs(state.needs, dt, state.mode),
        rng_state,
        ship,
        camera,
        ..state
    };
    state.company.ops_efficiency = efficiency;

    // 5-7. Crew, payroll, events.
    let state = tick_crew(state, dt);
    let state = process_payroll(state);
    let mut state = maybe_queue_event(state);

    // 8. Post-tick efficiency.
    let recomputed = compute_ops_efficiency(&state.company.crew);
    if recomputed != state.company.ops_efficiency {
        state.company.ops_efficiency = recomputed;
    }

    // 9. Mode-specific input.
    let state = avatar::handle_mode_input(state, input, dt);

    // Sector travel and contracts run every tick regardless of mode.
    let state = advance_travel(state);
    let state = refresh_contracts(state);
    let state = expire_contracts(state);
    let state = tick_tow_risk(state, prior_tick);
    tick_salvage_operation(state)
}

#[cfg(test)]
mod tests;
