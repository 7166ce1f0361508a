//! Versioned JSON save envelope: `{ "version": 1, "state": GameState }`.
//!
//! Decoding validates version and required fields on the raw JSON tree
//! before the typed decode, so a broken save yields a specific error.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::state::GameState;

pub const SAVE_VERSION: u32 = 1;

pub const REQUIRED_STATE_FIELDS: [&str; 17] = [
    "seed",
    "renderSeed",
    "rngState",
    "tick",
    "time",
    "mode",
    "player",
    "needs",
    "company",
    "sector",
    "sectorShip",
    "shipStats",
    "factions",
    "contracts",
    "ship",
    "camera",
    "log",
];

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to encode save: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("save is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("unsupported save version {0}")]
    UnsupportedVersion(u64),
    #[error("save has no state object")]
    MissingState,
    #[error("save state is missing required field `{0}`")]
    MissingField(&'static str),
    #[error("save state does not match the schema: {0}")]
    Schema(#[source] serde_json::Error),
}

#[derive(Serialize)]
struct SaveEnvelope<'a> {
    version: u32,
    state: &'a GameState,
}

pub fn serialize_save_state(state: &GameState) -> Result<String, SaveError> {
    serde_json::to_string(&SaveEnvelope { version: SAVE_VERSION, state })
        .map_err(SaveError::Encode)
}

pub fn deserialize_save_state(raw: &str) -> Result<GameState, SaveError> {
    let mut envelope: Value = serde_json::from_str(raw).map_err(SaveError::Malformed)?;
    let version = envelope.get("version").and_then(Value::as_u64).unwrap_or(0);
    if version != u64::from(SAVE_VERSION) {
        return Err(SaveError::UnsupportedVersion(version));
    }

    let state = match envelope.get_mut("state").map(Value::take) {
        Some(state @ Value::Object(_)) => state,
        _ => return Err(SaveError::MissingState),
    };
    if let Some(missing) = REQUIRED_STATE_FIELDS.iter().find(|field| state.get(**field).is_none()) {
        return Err(SaveError::MissingField(missing));
    }
    serde_json::from_value(state).map_err(SaveError::Schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{advance_state, create_initial_state};
    use crate::types::SimInput;

    fn ticked(seed: &str, ticks: usize) -> GameState {
        let mut state = create_initial_state(seed);
        for _ in 0..ticks {
            state = advance_state(state, 0.05, &SimInput::idle());
        }
        state
    }

    #[test]
    fn round_trip_is_lossless() {
        let state = ticked("save-round-trip", 25);
        let raw = serialize_save_state(&state).expect("encode");
        let restored = deserialize_save_state(&raw).expect("decode");
        assert_eq!(restored, state);
    }

    #[test]
    fn envelope_uses_camel_case_fields() {
        let raw = serialize_save_state(&ticked("save-shape", 1)).expect("encode");
        let value: Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(value["version"], 1);
        for field in REQUIRED_STATE_FIELDS {
            assert!(value["state"].get(field).is_some(), "missing {field}");
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(deserialize_save_state("{not json"), Err(SaveError::Malformed(_))));
    }

    #[test]
    fn rejects_other_versions() {
        let raw = r#"{"version": 2, "state": {}}"#;
        assert!(matches!(deserialize_save_state(raw), Err(SaveError::UnsupportedVersion(2))));
        let raw = r#"{"state": {}}"#;
        assert!(matches!(deserialize_save_state(raw), Err(SaveError::UnsupportedVersion(0))));
    }

    #[test]
    fn rejects_missing_state_and_fields() {
        assert!(matches!(deserialize_save_state(r#"{"version": 1}"#), Err(SaveError::MissingState)));

        let raw = serialize_save_state(&ticked("save-missing", 1)).expect("encode");
        let mut value: Value = serde_json::from_str(&raw).expect("json");
        if let Some(state) = value["state"].as_object_mut() {
            state.remove("shipStats");
        }
        let result = deserialize_save_state(&value.to_string());
        assert!(matches!(result, Err(SaveError::MissingField("shipStats"))));
    }

    #[test]
    fn schema_mismatch_is_reported() {
        let raw = serialize_save_state(&ticked("save-schema", 1)).expect("encode");
        let mut value: Value = serde_json::from_str(&raw).expect("json");
        value["state"]["tick"] = Value::String("soon".into());
        assert!(matches!(deserialize_save_state(&value.to_string()), Err(SaveError::Schema(_))));
    }
}
