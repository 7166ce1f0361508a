pub mod actions;
pub mod balance;
pub mod content;
pub mod contracts;
pub mod crew;
pub mod events;
pub mod hash;
pub mod interior;
pub mod journal;
pub mod journal_file;
pub mod needs;
pub mod replay;
pub mod rng;
pub mod save;
pub mod sector;
pub mod sim;
pub mod state;
pub mod station;
pub mod travel;
pub mod types;

pub use actions::{PlayerAction, apply_action, regenerate_visuals};
pub use contracts::{accept_contract, start_contract_operation};
pub use crew::{hire_candidate, regenerate_candidates};
pub use events::resolve_event;
pub use hash::hash_state;
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use replay::{ReplayError, ReplayResult, replay_journal};
pub use save::{SaveError, deserialize_save_state, serialize_save_state};
pub use sim::{Session, advance_state, create_initial_state};
pub use state::GameState;
pub use travel::start_travel;
pub use types::*;
