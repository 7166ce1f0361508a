//! Stable state fingerprint for determinism checks. Not persisted.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use crate::state::GameState;

fn write_str(hasher: &mut Xxh3, value: &str) {
    hasher.write_u64(value.len() as u64);
    hasher.write(value.as_bytes());
}

/// Ordered fold of seed, render seed, rng state, tick, time, ship kinematics
/// and camera, rendered as 16 hex digits.
pub fn hash_state(state: &GameState) -> String {
    let mut hasher = Xxh3::new();
    write_str(&mut hasher, &state.seed);
    write_str(&mut hasher, &state.render_seed);
    hasher.write_u32(state.rng_state);
    hasher.write_u64(state.tick);
    hasher.write_u64(state.time.to_bits());
    for value in [
        state.ship.position.x,
        state.ship.position.y,
        state.ship.velocity.x,
        state.ship.velocity.y,
        state.camera.pan.x,
        state.camera.pan.y,
        state.camera.zoom,
    ] {
        hasher.write_u64(value.to_bits());
    }
    format!("{:016x}", hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::create_initial_state;

    #[test]
    fn fingerprint_is_sixteen_hex_digits() {
        let hash = hash_state(&create_initial_state("hash-shape"));
        assert_eq!(hash.len(), 16);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn seed_and_tick_change_the_fingerprint() {
        let base = create_initial_state("hash-a");
        let other = create_initial_state("hash-b");
        assert_ne!(hash_state(&base), hash_state(&other));

        let mut later = base.clone();
        later.tick += 1;
        assert_ne!(hash_state(&base), hash_state(&later));
    }

    #[test]
    fn render_seed_is_part_of_the_fingerprint() {
        let base = create_initial_state("hash-render");
        let mut repainted = base.clone();
        repainted.render_seed = "other".into();
        assert_ne!(hash_state(&base), hash_state(&repainted));
    }
}
