//! Paid services at docked nodes. Purchases are partial when credits run
//! short; anything that cannot be bought is a logged no-op.

use crate::balance::{FUEL_PRICE_PER_UNIT, HULL_REPAIR_PRICE_PER_POINT, SCANNER_KIT_PRICE};
use crate::state::GameState;
use crate::types::NodeKind;

fn docked_kind(state: &GameState) -> Option<NodeKind> {
    let node_id = state.docked_node()?;
    state.sector.node(node_id).map(|node| node.kind)
}

fn has_dockyard(state: &mut GameState) -> bool {
    match docked_kind(state) {
        Some(NodeKind::Station | NodeKind::Outpost) => true,
        Some(NodeKind::Field) => {
            state.push_log("No services out here.");
            false
        }
        None => {
            state.push_log("Dock somewhere first.");
            false
        }
    }
}

/// Whole units affordable at `price`, capped at `wanted`.
fn affordable_units(credits: i64, price: i64, wanted: f64) -> f64 {
    if price <= 0 || credits <= 0 {
        return 0.0;
    }
    ((credits / price) as f64).min(wanted.floor())
}

pub fn refuel(mut state: GameState) -> GameState {
    if !has_dockyard(&mut state) {
        return state;
    }
    let missing = state.ship_stats.fuel_max - state.ship_stats.fuel;
    if missing < 1.0 {
        state.push_log("Tanks are already full.");
        return state;
    }
    let units = affordable_units(state.company.credits, FUEL_PRICE_PER_UNIT, missing);
    if units < 1.0 {
        state.push_log("Not enough credits for fuel.");
        return state;
    }
    let cost = units as i64 * FUEL_PRICE_PER_UNIT;
    state.company.credits -= cost;
    state.ship_stats.fuel = (state.ship_stats.fuel + units).min(state.ship_stats.fuel_max);
    state.push_log(format!("Took on {units:.0} units of fuel for {cost} cr."));
    state
}

pub fn repair_hull(mut state: GameState) -> GameState {
    if !has_dockyard(&mut state) {
        return state;
    }
    let damage = state.ship_stats.hull_max - state.ship_stats.hull;
    if damage < 1.0 {
        state.push_log("Hull needs no work.");
        return state;
    }
    let points = affordable_units(state.company.credits, HULL_REPAIR_PRICE_PER_POINT, damage);
    if points < 1.0 {
        state.push_log("Not enough credits for repairs.");
        return state;
    }
    let cost = points as i64 * HULL_REPAIR_PRICE_PER_POINT;
    state.company.credits -= cost;
    state.ship_stats.hull = (state.ship_stats.hull + points).min(state.ship_stats.hull_max);
    state.push_log(format!("Patched {points:.0} hull points for {cost} cr."));
    state
}

pub fn buy_scanner_kit(mut state: GameState) -> GameState {
    if docked_kind(&state) != Some(NodeKind::Station) {
        state.push_log("Scanner kits are only sold at stations.");
        return state;
    }
    if state.company.credits < SCANNER_KIT_PRICE {
        state.push_log(format!("A scanner kit costs {SCANNER_KIT_PRICE} cr."));
        return state;
    }
    state.company.credits -= SCANNER_KIT_PRICE;
    state.ship_stats.scanner_kits += 1;
    state.push_log("Scanner kit stowed.");
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::create_initial_state;
    use crate::travel::start_travel;

    #[test]
    fn refuel_buys_what_credits_allow() {
        let mut state = create_initial_state("station-fuel");
        state.ship_stats.fuel = 10.0;
        state.company.credits = 30;
        let state = refuel(state);
        assert_eq!(state.company.credits, 0);
        assert_eq!(state.ship_stats.fuel, 20.0);
    }

    #[test]
    fn full_tanks_cost_nothing() {
        let state = create_initial_state("station-full");
        let credits = state.company.credits;
        let state = refuel(state);
        assert_eq!(state.company.credits, credits);
    }

    #[test]
    fn repair_caps_at_hull_max() {
        let mut state = create_initial_state("station-repair");
        state.ship_stats.hull = 90.0;
        let credits = state.company.credits;
        let state = repair_hull(state);
        assert_eq!(state.ship_stats.hull, state.ship_stats.hull_max);
        assert_eq!(state.company.credits, credits - 10 * HULL_REPAIR_PRICE_PER_POINT);
    }

    #[test]
    fn no_services_in_transit() {
        let mut state = create_initial_state("station-transit");
        let neighbor = state
            .sector
            .neighbors(&state.sector_ship.current_node.clone())
            .next()
            .map(str::to_string)
            .expect("start node has a lane");
        state = start_travel(state, &neighbor);
        state.ship_stats.fuel -= 5.0;
        let fuel = state.ship_stats.fuel;
        let state = refuel(state);
        assert_eq!(state.ship_stats.fuel, fuel);
    }

    #[test]
    fn scanner_kits_need_a_station() {
        let mut state = create_initial_state("station-kit");
        let kits = state.ship_stats.scanner_kits;
        let state_kit = buy_scanner_kit(state.clone());
        assert_eq!(state_kit.ship_stats.scanner_kits, kits + 1);

        let field = state
            .sector
            .nodes_of_kind(NodeKind::Field)
            .next()
            .map(|node| node.id.clone())
            .expect("sector has fields");
        state.sector_ship.current_node = field;
        let state = buy_scanner_kit(state);
        assert_eq!(state.ship_stats.scanner_kits, kits);
    }
}
