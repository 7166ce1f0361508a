use thiserror::Error;

use crate::actions::apply_action;
use crate::hash::hash_state;
use crate::journal::{InputJournal, InputPayload};
use crate::sim::{advance_state, create_initial_state};
use crate::state::GameState;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("record {seq} expects tick {expected}, replay is at tick {actual}")]
    TickMismatch { seq: u64, expected: u64, actual: u64 },
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_hash: String,
    pub final_tick: u64,
    pub records_applied: usize,
}

/// Rebuilds the run from its seed, returning the final state alongside the
/// summary.
pub fn replay_state(journal: &InputJournal) -> Result<(GameState, ReplayResult), ReplayError> {
    let mut state = create_initial_state(&journal.seed);
    for record in &journal.records {
        state = match &record.payload {
            InputPayload::Tick { dt, input } => advance_state(state, *dt, input),
            InputPayload::Action { tick, action } => {
                if *tick != state.tick {
                    return Err(ReplayError::TickMismatch {
                        seq: record.seq,
                        expected: *tick,
                        actual: state.tick,
                    });
                }
                apply_action(state, action)
            }
        };
    }
    let result = ReplayResult {
        final_hash: hash_state(&state),
        final_tick: state.tick,
        records_applied: journal.records.len(),
    };
    tracing::debug!(final_tick = result.final_tick, hash = %result.final_hash, "replay finished");
    Ok((state, result))
}

pub fn replay_journal(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    replay_state(journal).map(|(_, result)| result)
}
