use serde::{Deserialize, Serialize};

use crate::actions::PlayerAction;
use crate::types::SimInput;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub build_id: String,
    pub seed: String,
    pub records: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputPayload {
    /// One fixed-step advance with the input snapshot the host captured.
    Tick { dt: f64, input: SimInput },
    /// A discrete command applied between ticks, at state tick `tick`.
    Action { tick: u64, action: PlayerAction },
}

impl InputJournal {
    pub fn new(seed: &str) -> Self {
        Self {
            format_version: JOURNAL_FORMAT_VERSION,
            build_id: env!("CARGO_PKG_VERSION").to_string(),
            seed: seed.to_string(),
            records: Vec::new(),
        }
    }

    fn next_seq(&self) -> u64 {
        self.records.last().map_or(0, |record| record.seq + 1)
    }

    pub fn append_tick(&mut self, dt: f64, input: SimInput) {
        let seq = self.next_seq();
        self.records.push(InputRecord { seq, payload: InputPayload::Tick { dt, input } });
    }

    pub fn append_action(&mut self, tick: u64, action: PlayerAction) {
        let seq = self.next_seq();
        self.records.push(InputRecord { seq, payload: InputPayload::Action { tick, action } });
    }
}
