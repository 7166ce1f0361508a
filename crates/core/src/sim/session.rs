use crate::actions::{PlayerAction, apply_action};
use crate::journal::InputJournal;
use crate::sim::{advance_state, create_initial_state};
use crate::state::GameState;
use crate::types::SimInput;

/// A live run that journals every tick and action it applies, so the run can
/// be replayed from its seed.
#[derive(Clone, Debug)]
pub struct Session {
    state: GameState,
    journal: InputJournal,
}

impl Session {
    pub fn new(seed: &str) -> Self {
        Self { state: create_initial_state(seed), journal: InputJournal::new(seed) }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn journal(&self) -> &InputJournal {
        &self.journal
    }

    pub fn tick(&mut self, dt: f64, input: SimInput) {
        self.journal.append_tick(dt, input);
        let state = self.state.clone();
        self.state = advance_state(state, dt, &input);
    }

    pub fn act(&mut self, action: PlayerAction) {
        self.journal.append_action(self.state.tick, action.clone());
        let state = self.state.clone();
        self.state = apply_action(state, &action);
    }

    pub fn into_parts(self) -> (GameState, InputJournal) {
        (self.state, self.journal)
    }
}
