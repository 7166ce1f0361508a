//! Narrative events raised on a fixed cadence.
//!
//! Selection is a weighted draw over the catalog entries whose predicate
//! accepts the current crew, rolled from `seed|event|tick|crew-ids`. At most
//! one event is pending; it stays until the player picks a choice.

use crate::balance::EVENT_INTERVAL_TICKS;
use crate::needs::AvatarNeedsDelta;
use crate::rng::roll_for_key;
use crate::state::{CrewMember, EventChoiceView, GameState, PendingEvent};

/// Flat deltas applied when a choice is taken. Crew deltas hit every member.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EventEffect {
    pub crew_stress: f64,
    pub crew_fatigue: f64,
    pub crew_morale: f64,
    pub crew_loyalty: f64,
    pub avatar_stress: f64,
    pub avatar_morale: f64,
    pub credits: i64,
}

#[derive(Clone, Copy, Debug)]
pub struct EventChoice {
    pub id: &'static str,
    pub label: &'static str,
    pub effect: EventEffect,
}

#[derive(Clone, Copy, Debug)]
pub struct EventDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub prompt: &'static str,
    pub weight: f64,
    pub applies: fn(&[CrewMember]) -> bool,
    pub choices: [EventChoice; 2],
}

impl EventDefinition {
    fn build(&self, tick: u64) -> PendingEvent {
        PendingEvent {
            event_id: self.id.to_string(),
            title: self.title.to_string(),
            prompt: self.prompt.to_string(),
            choices: self
                .choices
                .iter()
                .map(|choice| EventChoiceView {
                    id: choice.id.to_string(),
                    label: choice.label.to_string(),
                })
                .collect(),
            raised_tick: tick,
        }
    }

    fn choice(&self, choice_id: &str) -> Option<&EventChoice> {
        self.choices.iter().find(|choice| choice.id == choice_id)
    }
}

const NO_EFFECT: EventEffect = EventEffect {
    crew_stress: 0.0,
    crew_fatigue: 0.0,
    crew_morale: 0.0,
    crew_loyalty: 0.0,
    avatar_stress: 0.0,
    avatar_morale: 0.0,
    credits: 0,
};

pub const EVENT_CATALOG: [EventDefinition; 4] = [
    EventDefinition {
        id: "crew-dispute",
        title: "Galley Dispute",
        prompt: "Two of the crew are shouting over watch rotations.",
        weight: 3.0,
        applies: |crew| crew.len() >= 2,
        choices: [
            EventChoice {
                id: "a",
                label: "Mediate personally",
                effect: EventEffect {
                    crew_stress: -6.0,
                    crew_morale: 3.0,
                    avatar_stress: 5.0,
                    ..NO_EFFECT
                },
            },
            EventChoice {
                id: "b",
                label: "Let them sort it out",
                effect: EventEffect {
                    crew_stress: 4.0,
                    crew_morale: -4.0,
                    crew_loyalty: -2.0,
                    ..NO_EFFECT
                },
            },
        ],
    },
    EventDefinition {
        id: "supply-windfall",
        title: "Drifting Cargo Pod",
        prompt: "Sensors pick up an unclaimed cargo pod on an intercept course.",
        weight: 2.0,
        applies: |_| true,
        choices: [
            EventChoice {
                id: "a",
                label: "Sell the contents",
                effect: EventEffect { credits: 150, ..NO_EFFECT },
            },
            EventChoice {
                id: "b",
                label: "Share it with the crew",
                effect: EventEffect {
                    crew_morale: 5.0,
                    avatar_morale: 4.0,
                    ..NO_EFFECT
                },
            },
        ],
    },
    EventDefinition {
        id: "homesick",
        title: "Letters From Home",
        prompt: "A relay burst brings long-delayed mail. Some of the crew take it hard.",
        weight: 2.0,
        applies: |crew| !crew.is_empty(),
        choices: [
            EventChoice {
                id: "a",
                label: "Grant a rest shift",
                effect: EventEffect {
                    crew_fatigue: -8.0,
                    crew_morale: 4.0,
                    credits: -60,
                    ..NO_EFFECT
                },
            },
            EventChoice {
                id: "b",
                label: "Keep to the schedule",
                effect: EventEffect {
                    crew_stress: 3.0,
                    crew_morale: -3.0,
                    ..NO_EFFECT
                },
            },
        ],
    },
    EventDefinition {
        id: "engine-scare",
        title: "Engine Scare",
        prompt: "The main drive coughs and the deck shudders. Nothing breaks, this time.",
        weight: 1.0,
        applies: |crew| !crew.is_empty(),
        choices: [
            EventChoice {
                id: "a",
                label: "Full diagnostic",
                effect: EventEffect {
                    crew_fatigue: 6.0,
                    crew_stress: -4.0,
                    credits: -80,
                    ..NO_EFFECT
                },
            },
            EventChoice {
                id: "b",
                label: "Press on",
                effect: EventEffect {
                    crew_stress: 6.0,
                    avatar_stress: 4.0,
                    crew_loyalty: -1.0,
                    ..NO_EFFECT
                },
            },
        ],
    },
];

pub fn event_definition(event_id: &str) -> Option<&'static EventDefinition> {
    EVENT_CATALOG.iter().find(|definition| definition.id == event_id)
}

pub fn should_roll_event(state: &GameState) -> bool {
    state.tick > 0 && state.tick % EVENT_INTERVAL_TICKS == 0
}

pub fn event_roll_key(state: &GameState) -> String {
    let mut crew_ids: Vec<&str> = state.company.crew.iter().map(|member| member.id.as_str()).collect();
    crew_ids.sort_unstable();
    format!("{}|event|{}|{}", state.seed, state.tick, crew_ids.join(","))
}

pub fn pick_event(state: &GameState) -> Option<PendingEvent> {
    let picks: Vec<&EventDefinition> = EVENT_CATALOG
        .iter()
        .filter(|definition| (definition.applies)(&state.company.crew))
        .collect();
    let first = *picks.first()?;
    let total: f64 = picks.iter().map(|definition| definition.weight).sum();
    let mut remaining = roll_for_key(&event_roll_key(state)) * total;
    let chosen = picks
        .iter()
        .copied()
        .find(|definition| {
            remaining -= definition.weight;
            remaining <= 0.0
        })
        .unwrap_or(first);
    Some(chosen.build(state.tick))
}

/// Queues a new event when the cadence fires and nothing is pending.
pub fn maybe_queue_event(mut state: GameState) -> GameState {
    if state.company.pending_event.is_some() || !should_roll_event(&state) {
        return state;
    }
    if let Some(event) = pick_event(&state) {
        tracing::info!(event_id = %event.event_id, tick = state.tick, "event queued");
        state.push_log(format!("Event: {}", event.title));
        state.company.pending_event = Some(event);
    }
    state
}

pub fn resolve_event(mut state: GameState, choice_id: &str) -> GameState {
    let Some(pending) = state.company.pending_event.clone() else {
        state.push_log("No event awaiting a decision.");
        return state;
    };
    let Some(definition) = event_definition(&pending.event_id) else {
        state.push_log(format!("Unknown event {}.", pending.event_id));
        state.company.pending_event = None;
        return state;
    };
    let Some(choice) = definition.choice(choice_id) else {
        state.push_log(format!("'{choice_id}' is not an option here."));
        return state;
    };

    let effect = choice.effect;
    for member in &mut state.company.crew {
        member.needs = member.needs.adjust(
            effect.crew_stress,
            effect.crew_fatigue,
            effect.crew_morale,
            effect.crew_loyalty,
        );
    }
    state.needs = state.needs.apply(&AvatarNeedsDelta {
        stress: effect.avatar_stress,
        morale: effect.avatar_morale,
        ..AvatarNeedsDelta::default()
    });
    state.company.credits = (state.company.credits + effect.credits).max(0);
    state.company.pending_event = None;
    tracing::info!(event_id = definition.id, choice_id, "event resolved");
    state.push_log(format!("{}: {}.", definition.title, choice.label));
    state
}
