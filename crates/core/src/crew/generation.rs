//! Deterministic candidate generation.

use crate::balance::{
    PAY_RATE_BASE, PAY_RATE_PER_SKILL_POINT, SIGN_ON_BONUS_BASE, SIGN_ON_BONUS_PER_INDEX,
    SKILL_JITTER, SKILL_MAX,
};
use crate::content::{
    CONTACT_RELATIONS, EMPLOYERS, FIRST_NAMES, GOALS, INCIDENTS, LAST_NAMES, LEAVING_REASONS,
    ORIGINS, ROLES, TRAITS, role_archetype,
};
use crate::needs::CrewNeeds;
use crate::rng::{SeededStream, hash_seed_to_u32};
use crate::state::{Background, Candidate, Contact, CrewMember, CrewRole, Skills};

/// Same `seed` and `count` always produce the same pool, ids included.
pub fn generate_candidates(seed: &str, count: usize) -> Vec<Candidate> {
    let mut stream = SeededStream::from_key(seed);
    let pool_tag = hash_seed_to_u32(seed);
    (0..count).map(|index| generate_candidate(&mut stream, pool_tag, index)).collect()
}

fn generate_candidate(stream: &mut SeededStream, pool_tag: u32, index: usize) -> Candidate {
    let role = pick_or(stream, &ROLES, CrewRole::Operator);
    let name = format!("{} {}", pick_str(stream, FIRST_NAMES), pick_str(stream, LAST_NAMES));
    let age = 22 + stream.range_usize(0, 38) as u32;
    let traits = draw_traits(stream);
    let skills = jitter_skills(stream, role_archetype(role));
    let background = draw_background(stream);
    let pay_rate = PAY_RATE_BASE + i64::from(skills.total()) * PAY_RATE_PER_SKILL_POINT;
    let sign_on_bonus = SIGN_ON_BONUS_BASE + index as i64 * SIGN_ON_BONUS_PER_INDEX;

    Candidate {
        member: CrewMember {
            id: format!("crew-{pool_tag:08x}-{index}"),
            name,
            role,
            age,
            traits,
            skills,
            needs: CrewNeeds::default(),
            background,
            pay_rate,
        },
        sign_on_bonus,
    }
}

fn pick_str(stream: &mut SeededStream, items: &[&str]) -> String {
    stream.pick(items).map_or_else(String::new, |item| (*item).to_string())
}

fn pick_or<T: Copy>(stream: &mut SeededStream, items: &[T], fallback: T) -> T {
    stream.pick(items).copied().unwrap_or(fallback)
}

/// Two to four distinct traits, in draw order.
fn draw_traits(stream: &mut SeededStream) -> Vec<String> {
    let wanted = stream.range_usize(2, 4);
    let mut remaining: Vec<&str> = TRAITS.to_vec();
    let mut traits = Vec::with_capacity(wanted);
    while traits.len() < wanted && !remaining.is_empty() {
        let index = stream.range_usize(0, remaining.len() - 1);
        traits.push(remaining.remove(index).to_string());
    }
    traits
}

fn jitter_skills(stream: &mut SeededStream, base: Skills) -> Skills {
    let mut jitter =
        |value: i32| (value + stream.range_i32(-SKILL_JITTER, SKILL_JITTER)).clamp(0, SKILL_MAX);
    Skills {
        ops: jitter(base.ops),
        engineering: jitter(base.engineering),
        piloting: jitter(base.piloting),
        medical: jitter(base.medical),
        social: jitter(base.social),
    }
}

fn draw_background(stream: &mut SeededStream) -> Background {
    let origin = pick_str(stream, ORIGINS);
    let employer = pick_str(stream, EMPLOYERS);
    let incident = pick_str(stream, INCIDENTS);
    let goal = pick_str(stream, GOALS);
    let reason = pick_str(stream, LEAVING_REASONS);
    let contact = if stream.next_f64() < 0.5 {
        Some(Contact {
            name: format!("{} {}", pick_str(stream, FIRST_NAMES), pick_str(stream, LAST_NAMES)),
            relation: pick_str(stream, CONTACT_RELATIONS),
        })
    } else {
        None
    };
    Background { origin, employer, incident, goal, reason, contact }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_pool() {
        assert_eq!(generate_candidates("pool", 4), generate_candidates("pool", 4));
        assert_ne!(generate_candidates("pool", 4), generate_candidates("pool-2", 4));
    }

    #[test]
    fn candidates_respect_generation_bounds() {
        for candidate in generate_candidates("bounds|hire|0", 24) {
            let member = &candidate.member;
            assert!((2..=4).contains(&member.traits.len()));
            let mut unique = member.traits.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), member.traits.len(), "traits must be unique");

            let base = role_archetype(member.role);
            for (value, anchor) in [
                (member.skills.ops, base.ops),
                (member.skills.engineering, base.engineering),
                (member.skills.piloting, base.piloting),
                (member.skills.medical, base.medical),
                (member.skills.social, base.social),
            ] {
                assert!((0..=SKILL_MAX).contains(&value));
                assert!((value - anchor).abs() <= SKILL_JITTER);
            }
            assert!((22..=60).contains(&member.age));
            assert_eq!(
                member.pay_rate,
                PAY_RATE_BASE + i64::from(member.skills.total()) * PAY_RATE_PER_SKILL_POINT
            );
        }
    }

    #[test]
    fn sign_on_bonus_scales_with_index() {
        let pool = generate_candidates("bonus", 3);
        assert!(pool[0].sign_on_bonus < pool[1].sign_on_bonus);
        assert!(pool[1].sign_on_bonus < pool[2].sign_on_bonus);
    }

    #[test]
    fn ids_are_unique_within_and_across_pools() {
        let mut ids: Vec<String> = generate_candidates("ids|hire|0", 4)
            .into_iter()
            .chain(generate_candidates("ids|hire|1", 4))
            .map(|candidate| candidate.member.id)
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }
}
