use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::balance::{
    FUEL_MAX, HULL_MAX, LOG_CAPACITY, REPUTATION_MAX, REPUTATION_MIN, STARTING_SCANNER_KITS,
    STARTING_TOW_CAPACITY,
};
use crate::contracts::ContractBoard;
use crate::needs::{AvatarNeeds, CrewNeeds};
use crate::sector::Sector;
use crate::types::{FactionId, Mode, TilePos, Vec2};

/// The authoritative simulation snapshot. Transitions take it by value and
/// return the successor, so no two snapshots share mutable structure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub seed: String,
    pub render_seed: String,
    pub rng_state: u32,
    pub tick: u64,
    pub time: f64,
    pub mode: Mode,
    pub player: Player,
    pub needs: AvatarNeeds,
    pub company: Company,
    pub sector: Sector,
    pub sector_ship: SectorShip,
    pub ship_stats: ShipStats,
    pub factions: BTreeMap<FactionId, i32>,
    pub contracts: ContractBoard,
    pub ship: Ship,
    pub camera: Camera,
    pub log: VecDeque<String>,
}

impl GameState {
    /// Appends a player-facing line, dropping the oldest past capacity.
    pub fn push_log(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(target: "tugline::log", tick = self.tick, "{message}");
        self.log.push_back(message);
        while self.log.len() > LOG_CAPACITY {
            self.log.pop_front();
        }
    }

    pub fn reputation(&self, faction: FactionId) -> i32 {
        self.factions.get(&faction).copied().unwrap_or(0)
    }

    pub fn adjust_reputation(&mut self, faction: FactionId, delta: i32) {
        let entry = self.factions.entry(faction).or_insert(0);
        *entry = (*entry + delta).clamp(REPUTATION_MIN, REPUTATION_MAX);
    }

    /// Docked node id, or `None` while in transit.
    pub fn docked_node(&self) -> Option<&str> {
        match self.sector_ship.in_transit {
            Some(_) => None,
            None => Some(self.sector_ship.current_node.as_str()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub tile: TilePos,
    /// Seconds until the next tile step is allowed.
    pub move_cooldown: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub credits: i64,
    pub payroll_due_time: f64,
    pub crew: Vec<CrewMember>,
    pub candidates: Vec<Candidate>,
    /// Bumped on every candidate regeneration to namespace the next pool.
    pub candidate_generation: u32,
    pub ops_efficiency: f64,
    pub pending_event: Option<PendingEvent>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrewRole {
    Pilot,
    Engineer,
    Operator,
    Medic,
    Rigger,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    pub ops: i32,
    pub engineering: i32,
    pub piloting: i32,
    pub medical: i32,
    pub social: i32,
}

impl Skills {
    pub fn total(&self) -> i32 {
        self.ops + self.engineering + self.piloting + self.medical + self.social
    }

    /// Mean of the three skills that drive ship operations.
    pub fn operational_average(&self) -> f64 {
        f64::from(self.ops + self.engineering + self.piloting) / 3.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub name: String,
    pub relation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    pub origin: String,
    pub employer: String,
    pub incident: String,
    pub goal: String,
    pub reason: String,
    pub contact: Option<Contact>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewMember {
    pub id: String,
    pub name: String,
    pub role: CrewRole,
    pub age: u32,
    pub traits: Vec<String>,
    pub skills: Skills,
    pub needs: CrewNeeds,
    pub background: Background,
    /// Credits per payroll cycle.
    pub pay_rate: i64,
}

/// A hireable person: the crew record plus a one-off sign-on bonus.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(flatten)]
    pub member: CrewMember,
    pub sign_on_bonus: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingEvent {
    pub event_id: String,
    pub title: String,
    pub prompt: String,
    pub choices: Vec<EventChoiceView>,
    pub raised_tick: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventChoiceView {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorShip {
    pub current_node: String,
    pub in_transit: Option<InTransit>,
    pub towing_contract_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InTransit {
    pub from: String,
    pub to: String,
    pub start_tick: u64,
    pub eta_ticks: u64,
    pub progress: f64,
    pub distance: f64,
    pub risk: f64,
    pub burn_per_tick: f64,
    pub stalled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipStats {
    pub fuel: f64,
    pub fuel_max: f64,
    pub hull: f64,
    pub hull_max: f64,
    pub tow_capacity: f64,
    pub salvage_rig_level: u32,
    pub scanner_kits: u32,
    pub salvage_parts: u32,
    pub survey_data: u32,
}

impl Default for ShipStats {
    fn default() -> Self {
        Self {
            fuel: FUEL_MAX,
            fuel_max: FUEL_MAX,
            hull: HULL_MAX,
            hull_max: HULL_MAX,
            tow_capacity: STARTING_TOW_CAPACITY,
            salvage_rig_level: 1,
            scanner_kits: STARTING_SCANNER_KITS,
            salvage_parts: 0,
            survey_data: 0,
        }
    }
}

impl ShipStats {
    /// `1 - hull / hull_max`, zero for a pristine hull.
    pub fn hull_factor(&self) -> f64 {
        if self.hull_max <= 0.0 { 1.0 } else { (1.0 - self.hull / self.hull_max).clamp(0.0, 1.0) }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub position: Vec2,
    pub velocity: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub pan: Vec2,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan: Vec2::ZERO, zoom: 1.0 }
    }
}
