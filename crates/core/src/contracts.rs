//! Procedural contracts issued by station nodes.
//!
//! Generation is deterministic per `(seed, node, tick)`. Contracts from
//! factions that dislike the player are dropped outright rather than redrawn,
//! so a node may offer fewer contracts than it rolled for.

mod lifecycle;
mod operations;

pub use lifecycle::{
    accept_contract, expire_contracts, mark_contract_completed, mark_contract_failed,
    start_contract_operation,
};
pub use operations::{
    complete_tow_on_arrival, salvage_risk_roll, salvage_risk_threshold, tick_salvage_operation,
    tick_tow_risk, tow_risk_roll, tow_risk_threshold,
};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::balance::{
    CONTRACT_DEADLINE_DAYS, CONTRACT_REPUTATION_FLOOR, CONTRACT_REWARD_BASE,
    CONTRACT_REWARD_SPREAD, CONTRACTS_PER_NODE_MAX, CONTRACTS_PER_NODE_MIN,
    FRIENDLY_REPUTATION, FRIENDLY_REWARD_MULTIPLIER, HOSTILE_REWARD_MULTIPLIER,
    REPUTATION_GAIN, REPUTATION_GAIN_WHILE_NEGATIVE, SALVAGE_DURATION_MIN_TICKS,
    SALVAGE_DURATION_SPREAD_TICKS, SALVAGE_PARTS_MIN, SALVAGE_PARTS_SPREAD,
    SALVAGE_REWARD_BONUS, SCANNER_REWARD_BONUS, SURVEY_YIELD_MIN, SURVEY_YIELD_SPREAD,
    TICKS_PER_DAY, TUG_MASS_MIN, TUG_MASS_SPREAD, TUG_REWARD_BONUS,
};
use crate::rng::SeededStream;
use crate::sector::Sector;
use crate::state::GameState;
use crate::types::{FactionId, NodeKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractStatus {
    Available,
    Accepted,
    InProgress,
    Completed,
    Failed,
}

impl ContractStatus {
    pub fn is_resolved(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TugPayload {
    /// Field node holding the derelict.
    pub target_node: String,
    /// Where the derelict must be delivered.
    pub destination_node: String,
    pub mass: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalvagePayload {
    pub target_node: String,
    pub duration_ticks: u32,
    pub parts: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannerPayload {
    pub target_node: String,
    pub survey_yield: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ContractKind {
    Tug(TugPayload),
    Salvage(SalvagePayload),
    InstallScanner(ScannerPayload),
}

impl ContractKind {
    pub fn target_node(&self) -> &str {
        match self {
            Self::Tug(payload) => &payload.target_node,
            Self::Salvage(payload) => &payload.target_node,
            Self::InstallScanner(payload) => &payload.target_node,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Tug(_) => "tug",
            Self::Salvage(_) => "salvage",
            Self::InstallScanner(_) => "scanner install",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub kind: ContractKind,
    pub faction: FactionId,
    pub issuer_node: String,
    pub reward: i64,
    pub reputation_delta: i32,
    pub status: ContractStatus,
    /// Day bucket the offer was issued in.
    pub issued_day: u64,
    pub deadline_tick: u64,
}

impl Contract {
    /// Transitions produce a fresh value; the original is left intact.
    pub fn with_status(&self, status: ContractStatus) -> Self {
        Self { status, ..self.clone() }
    }
}

/// Timed salvage job occupying the ship.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveOperation {
    pub contract_id: String,
    pub remaining_ticks: u32,
    pub started_tick: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractBoard {
    pub contracts: Vec<Contract>,
    pub active_operation: Option<ActiveOperation>,
    pub last_refresh_day: Option<u64>,
}

impl ContractBoard {
    pub fn get(&self, id: &str) -> Option<&Contract> {
        self.contracts.iter().find(|contract| contract.id == id)
    }

    pub fn replace(&mut self, updated: Contract) {
        if let Some(slot) = self.contracts.iter_mut().find(|contract| contract.id == updated.id) {
            *slot = updated;
        }
    }

    pub fn with_status(&self, status: ContractStatus) -> impl Iterator<Item = &Contract> {
        self.contracts.iter().filter(move |contract| contract.status == status)
    }
}

pub fn day_bucket(tick: u64) -> u64 {
    tick / TICKS_PER_DAY
}

pub fn reward_for(base: i64, reputation: i32, kind: &ContractKind) -> i64 {
    let multiplier = if reputation > FRIENDLY_REPUTATION {
        FRIENDLY_REWARD_MULTIPLIER
    } else if reputation < 0 {
        HOSTILE_REWARD_MULTIPLIER
    } else {
        1.0
    };
    let bonus = match kind {
        ContractKind::Tug(_) => TUG_REWARD_BONUS,
        ContractKind::Salvage(_) => SALVAGE_REWARD_BONUS,
        ContractKind::InstallScanner(_) => SCANNER_REWARD_BONUS,
    };
    (base as f64 * multiplier).floor() as i64 + bonus
}

pub fn reputation_gain_for(reputation: i32) -> i32 {
    if reputation < 0 { REPUTATION_GAIN_WHILE_NEGATIVE } else { REPUTATION_GAIN }
}

/// `day` is a day bucket (see [`day_bucket`]), not a raw tick. Ids embed
/// node, day, and slot index, so skipped slots leave gaps in the numbering.
pub fn generate_contracts_for_node(
    seed: &str,
    day: u64,
    node_id: &str,
    sector: &Sector,
    factions: &BTreeMap<FactionId, i32>,
) -> Vec<Contract> {
    let Some(node) = sector.node(node_id) else {
        return Vec::new();
    };
    let fields: Vec<&str> =
        sector.nodes_of_kind(NodeKind::Field).map(|field| field.id.as_str()).collect();
    if fields.is_empty() {
        return Vec::new();
    }

    let mut stream = SeededStream::from_key(&format!("{seed}|contracts|{node_id}|{day}"));
    let count = stream.range_usize(CONTRACTS_PER_NODE_MIN, CONTRACTS_PER_NODE_MAX);
    let deadline_tick =
        day.saturating_add(CONTRACT_DEADLINE_DAYS).saturating_mul(TICKS_PER_DAY);
    let mut contracts = Vec::with_capacity(count);

    for index in 0..count {
        let kind_roll = stream.range_usize(0, 2);
        let faction = match node.faction {
            Some(faction) => faction,
            None => stream.pick(&FactionId::ALL).copied().unwrap_or(FactionId::FreeHaulers),
        };
        let reputation = factions.get(&faction).copied().unwrap_or(0);
        if reputation < CONTRACT_REPUTATION_FLOOR {
            continue;
        }

        let base = CONTRACT_REWARD_BASE + (stream.next_f64() * CONTRACT_REWARD_SPREAD).floor() as i64;
        let target_node = stream.pick(&fields).map_or(fields[0], |field| *field).to_string();
        let kind = match kind_roll {
            0 => ContractKind::Tug(TugPayload {
                target_node,
                destination_node: node_id.to_string(),
                mass: (TUG_MASS_MIN + stream.next_f64() * TUG_MASS_SPREAD).round(),
            }),
            1 => ContractKind::Salvage(SalvagePayload {
                target_node,
                duration_ticks: SALVAGE_DURATION_MIN_TICKS
                    + (stream.next_f64() * f64::from(SALVAGE_DURATION_SPREAD_TICKS)) as u32,
                parts: SALVAGE_PARTS_MIN
                    + (stream.next_f64() * f64::from(SALVAGE_PARTS_SPREAD)) as u32,
            }),
            _ => ContractKind::InstallScanner(ScannerPayload {
                target_node,
                survey_yield: SURVEY_YIELD_MIN
                    + (stream.next_f64() * f64::from(SURVEY_YIELD_SPREAD)) as u32,
            }),
        };

        contracts.push(Contract {
            id: format!("{node_id}-{day}-{index}"),
            reward: reward_for(base, reputation, &kind),
            reputation_delta: reputation_gain_for(reputation),
            kind,
            faction,
            issuer_node: node_id.to_string(),
            status: ContractStatus::Available,
            issued_day: day,
            deadline_tick,
        });
    }
    contracts
}

/// Runs at most once per day bucket. Stale `Available` offers are replaced by
/// a fresh batch from every station; anything already taken up is kept.
pub fn refresh_contracts(mut state: GameState) -> GameState {
    let day = day_bucket(state.tick);
    if state.contracts.last_refresh_day == Some(day) {
        return state;
    }

    let fresh: Vec<Contract> = state
        .sector
        .nodes_of_kind(NodeKind::Station)
        .flat_map(|station| {
            generate_contracts_for_node(&state.seed, day, &station.id, &state.sector, &state.factions)
        })
        .collect();

    state.contracts.contracts.retain(|contract| contract.status != ContractStatus::Available);
    tracing::info!(day, offered = fresh.len(), "contract board refreshed");
    state.contracts.contracts.extend(fresh);
    state.contracts.last_refresh_day = Some(day);
    state
}
