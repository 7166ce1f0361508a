//! Point-to-point travel along sector edges.
//!
//! The ship is either docked or in transit. Departure fixes `eta_ticks` from
//! edge distance and route speed; after that, progress is elapsed ticks over
//! eta, not integrated distance. Distance only seeds eta and risk.

use crate::balance::{
    FUEL_BURN_PER_TICK, SECTOR_RADIUS, TOW_BURN_MULTIPLIER, TOW_SPEED_MULTIPLIER,
    TRAVEL_FUEL_RESERVE_FRACTION, TRAVEL_SPEED,
};
use crate::contracts::complete_tow_on_arrival;
use crate::state::{GameState, InTransit};

/// Speed and burn for the current loadout; towing halves speed and raises burn.
pub fn route_profile(towing: bool) -> (f64, f64) {
    if towing {
        (TRAVEL_SPEED * TOW_SPEED_MULTIPLIER, FUEL_BURN_PER_TICK * TOW_BURN_MULTIPLIER)
    } else {
        (TRAVEL_SPEED, FUEL_BURN_PER_TICK)
    }
}

pub fn eta_ticks(distance: f64, speed: f64) -> u64 {
    (distance / speed).ceil().max(1.0) as u64
}

pub fn start_travel(mut state: GameState, destination_id: &str) -> GameState {
    if state.sector_ship.in_transit.is_some() {
        state.push_log("Already under way.");
        return state;
    }
    if state.contracts.active_operation.is_some() {
        state.push_log("Salvage crews are still outside. Finish the operation first.");
        return state;
    }
    let current = state.sector_ship.current_node.clone();
    let Some(edge) = state.sector.edge_between(&current, destination_id) else {
        state.push_log(format!("No charted lane from {current} to {destination_id}."));
        return state;
    };
    let distance = edge.distance;
    if state.ship_stats.fuel <= 0.0 {
        state.push_log("Tanks are dry.");
        return state;
    }

    let (speed, burn_per_tick) = route_profile(state.sector_ship.towing_contract_id.is_some());
    let eta = eta_ticks(distance, speed);
    let projected_fuel = eta as f64 * burn_per_tick;
    if projected_fuel > state.ship_stats.fuel * TRAVEL_FUEL_RESERVE_FRACTION {
        state.push_log(format!(
            "Route needs {projected_fuel:.1} fuel; reserve rules allow {:.1}.",
            state.ship_stats.fuel * TRAVEL_FUEL_RESERVE_FRACTION
        ));
        return state;
    }

    let destination_name = state
        .sector
        .node(destination_id)
        .map_or_else(|| destination_id.to_string(), |node| node.name.clone());
    state.sector_ship.in_transit = Some(InTransit {
        from: current,
        to: destination_id.to_string(),
        start_tick: state.tick,
        eta_ticks: eta,
        progress: 0.0,
        distance,
        risk: (distance / (2.0 * SECTOR_RADIUS)).min(1.0),
        burn_per_tick,
        stalled: false,
    });
    state.push_log(format!("Departing for {destination_name}, ETA {eta} ticks."));
    state
}

/// Burns fuel, advances progress, and docks on arrival. Runs every tick in
/// either mode; a no-op while docked.
pub fn advance_travel(mut state: GameState) -> GameState {
    let Some(mut transit) = state.sector_ship.in_transit.take() else {
        return state;
    };

    let fuel_before = state.ship_stats.fuel;
    state.ship_stats.fuel = (fuel_before - transit.burn_per_tick).max(0.0);
    let depleted = state.ship_stats.fuel <= 0.0;

    if depleted {
        if !transit.stalled {
            transit.stalled = true;
            state.push_log(format!(
                "Fuel exhausted {:.0}% of the way to {}. Drifting.",
                transit.progress * 100.0,
                transit.to
            ));
        }
        state.sector_ship.in_transit = Some(transit);
        return state;
    }

    let elapsed = state.tick.saturating_sub(transit.start_tick) as f64;
    transit.progress = (elapsed / transit.eta_ticks as f64).min(1.0);
    if transit.progress < 1.0 {
        state.sector_ship.in_transit = Some(transit);
        return state;
    }

    let arrived_name = state
        .sector
        .node(&transit.to)
        .map_or_else(|| transit.to.clone(), |node| node.name.clone());
    tracing::info!(node = %transit.to, tick = state.tick, fuel = state.ship_stats.fuel, "arrived");
    state.sector_ship.current_node = transit.to;
    state.push_log(format!("Arrived at {arrived_name}."));
    complete_tow_on_arrival(state)
}
