//! Continuous need decay for the avatar and for each crew member.
//!
//! Every mutation goes through a clamp so values stay inside
//! `[NEED_MIN, NEED_MAX]` and never carry a NaN forward.

use serde::{Deserialize, Serialize};

use crate::balance::{
    COMMAND_STRESS_RELIEF, CREW_FATIGUE_RATE, CREW_LOYALTY_DRIFT, CREW_MORALE_DECAY,
    CREW_MORALE_PIVOT, CREW_MORALE_STRESS_COUPLING, CREW_STRESS_RATE, FATIGUE_RATE, HUNGER_RATE,
    LOYALTY_HIGH_TARGET, LOYALTY_LOW_TARGET, MORALE_DECAY_RATE, NEED_MAX, NEED_MIN, STRESS_RATE,
    THIRST_RATE,
};
use crate::types::Mode;

pub fn clamp_need(value: f64) -> f64 {
    if value.is_nan() { NEED_MIN } else { value.clamp(NEED_MIN, NEED_MAX) }
}

fn approach(value: f64, target: f64, step: f64) -> f64 {
    if value < target { (value + step).min(target) } else { (value - step).max(target) }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarNeeds {
    pub hunger: f64,
    pub thirst: f64,
    pub fatigue: f64,
    pub stress: f64,
    pub morale: f64,
}

impl Default for AvatarNeeds {
    fn default() -> Self {
        Self { hunger: 20.0, thirst: 20.0, fatigue: 10.0, stress: 10.0, morale: 70.0 }
    }
}

impl AvatarNeeds {
    pub fn clamped(self) -> Self {
        Self {
            hunger: clamp_need(self.hunger),
            thirst: clamp_need(self.thirst),
            fatigue: clamp_need(self.fatigue),
            stress: clamp_need(self.stress),
            morale: clamp_need(self.morale),
        }
    }

    pub fn apply(self, delta: &AvatarNeedsDelta) -> Self {
        Self {
            hunger: self.hunger + delta.hunger,
            thirst: self.thirst + delta.thirst,
            fatigue: self.fatigue + delta.fatigue,
            stress: self.stress + delta.stress,
            morale: self.morale + delta.morale,
        }
        .clamped()
    }

    pub fn in_bounds(&self) -> bool {
        [self.hunger, self.thirst, self.fatigue, self.stress, self.morale]
            .iter()
            .all(|value| (NEED_MIN..=NEED_MAX).contains(value))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AvatarNeedsDelta {
    pub hunger: f64,
    pub thirst: f64,
    pub fatigue: f64,
    pub stress: f64,
    pub morale: f64,
}

pub fn tick_avatar_needs(needs: AvatarNeeds, dt: f64, mode: Mode) -> AvatarNeeds {
    let stress_rate = match mode {
        Mode::Avatar => STRESS_RATE,
        Mode::Command => STRESS_RATE * COMMAND_STRESS_RELIEF,
    };
    needs.apply(&AvatarNeedsDelta {
        hunger: HUNGER_RATE * dt,
        thirst: THIRST_RATE * dt,
        fatigue: FATIGUE_RATE * dt,
        stress: stress_rate * dt,
        morale: -MORALE_DECAY_RATE * dt,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewNeeds {
    pub stress: f64,
    pub fatigue: f64,
    pub morale: f64,
    pub loyalty: f64,
}

impl Default for CrewNeeds {
    fn default() -> Self {
        Self { stress: 20.0, fatigue: 10.0, morale: 65.0, loyalty: 50.0 }
    }
}

impl CrewNeeds {
    pub fn clamped(self) -> Self {
        Self {
            stress: clamp_need(self.stress),
            fatigue: clamp_need(self.fatigue),
            morale: clamp_need(self.morale),
            loyalty: clamp_need(self.loyalty),
        }
    }

    pub fn adjust(self, stress: f64, fatigue: f64, morale: f64, loyalty: f64) -> Self {
        Self {
            stress: self.stress + stress,
            fatigue: self.fatigue + fatigue,
            morale: self.morale + morale,
            loyalty: self.loyalty + loyalty,
        }
        .clamped()
    }

    pub fn in_bounds(&self) -> bool {
        [self.stress, self.fatigue, self.morale, self.loyalty]
            .iter()
            .all(|value| (NEED_MIN..=NEED_MAX).contains(value))
    }
}

/// Morale sags faster under stress; loyalty drifts toward the high or low
/// target depending on which side of the morale pivot the member sits.
pub fn tick_crew_needs(needs: CrewNeeds, dt: f64) -> CrewNeeds {
    let stressed = needs.adjust(CREW_STRESS_RATE * dt, CREW_FATIGUE_RATE * dt, 0.0, 0.0);
    let morale_decay = (CREW_MORALE_DECAY + stressed.stress * CREW_MORALE_STRESS_COUPLING) * dt;
    let with_morale = stressed.adjust(0.0, 0.0, -morale_decay, 0.0);
    let loyalty_target = if with_morale.morale >= CREW_MORALE_PIVOT {
        LOYALTY_HIGH_TARGET
    } else {
        LOYALTY_LOW_TARGET
    };
    CrewNeeds {
        loyalty: approach(with_morale.loyalty, loyalty_target, CREW_LOYALTY_DRIFT * dt),
        ..with_morale
    }
    .clamped()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_needs_rise_and_morale_falls() {
        let before = AvatarNeeds::default();
        let after = tick_avatar_needs(before, 1.0, Mode::Avatar);
        assert!(after.hunger > before.hunger);
        assert!(after.thirst > before.thirst);
        assert!(after.fatigue > before.fatigue);
        assert!(after.stress > before.stress);
        assert!(after.morale < before.morale);
    }

    #[test]
    fn command_mode_relieves_stress_growth() {
        let before = AvatarNeeds::default();
        let avatar = tick_avatar_needs(before, 10.0, Mode::Avatar);
        let command = tick_avatar_needs(before, 10.0, Mode::Command);
        assert!(command.stress < avatar.stress);
        assert_eq!(command.hunger, avatar.hunger);
    }

    #[test]
    fn clamping_is_idempotent_and_rejects_nan() {
        let wild = AvatarNeeds { hunger: 250.0, thirst: -4.0, fatigue: f64::NAN, ..Default::default() };
        let once = wild.clamped();
        assert_eq!(once, once.clamped());
        assert!(once.in_bounds());
        assert_eq!(once.hunger, NEED_MAX);
        assert_eq!(once.thirst, NEED_MIN);
        assert_eq!(once.fatigue, NEED_MIN);
    }

    #[test]
    fn loyalty_follows_morale_side() {
        let content = CrewNeeds { morale: 90.0, stress: 0.0, ..Default::default() };
        let unhappy = CrewNeeds { morale: 10.0, ..Default::default() };
        assert!(tick_crew_needs(content, 10.0).loyalty > content.loyalty);
        assert!(tick_crew_needs(unhappy, 10.0).loyalty < unhappy.loyalty);
    }

    #[test]
    fn loyalty_does_not_overshoot_target() {
        let near = CrewNeeds { morale: 90.0, loyalty: LOYALTY_HIGH_TARGET - 0.01, ..Default::default() };
        let after = tick_crew_needs(near, 100.0);
        assert_eq!(after.loyalty, LOYALTY_HIGH_TARGET);
    }

    #[test]
    fn high_stress_drains_morale_faster() {
        let calm = CrewNeeds { stress: 0.0, ..Default::default() };
        let tense = CrewNeeds { stress: 95.0, ..Default::default() };
        let calm_loss = calm.morale - tick_crew_needs(calm, 5.0).morale;
        let tense_loss = tense.morale - tick_crew_needs(tense, 5.0).morale;
        assert!(tense_loss > calm_loss);
    }

    #[test]
    fn long_ticks_stay_bounded() {
        let mut needs = CrewNeeds::default();
        for _ in 0..10_000 {
            needs = tick_crew_needs(needs, 1.0);
        }
        assert!(needs.in_bounds());
    }
}
