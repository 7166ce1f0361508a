//! Authored tables used by the procedural generators.

use crate::state::{CrewRole, Skills};

pub const FIRST_NAMES: &[&str] = &[
    "Ada", "Bex", "Cato", "Dara", "Emeka", "Farah", "Goran", "Hana", "Ilya", "Juno", "Kofi",
    "Lior", "Mira", "Nadim", "Oksana", "Pax", "Quill", "Rosa", "Soren", "Tamsin", "Uma", "Vik",
    "Wren", "Yusuf", "Zel",
];

pub const LAST_NAMES: &[&str] = &[
    "Abara", "Brandt", "Castellan", "Drozd", "Eze", "Fujimori", "Grell", "Halloran", "Iwu",
    "Jarvik", "Kasprzak", "Lindqvist", "Moreau", "Nakata", "Okonkwo", "Petrov", "Quade", "Rask",
    "Saavedra", "Toivonen", "Vance", "Whitlock",
];

pub const TRAITS: &[&str] = &[
    "steady hands",
    "night owl",
    "chatterbox",
    "superstitious",
    "by-the-book",
    "thrill seeker",
    "penny pincher",
    "green thumb",
    "insomniac",
    "old soul",
    "hot-headed",
    "meticulous",
];

pub const ORIGINS: &[&str] = &[
    "a drydock ring over Tessa IV",
    "the ice mines of Calder",
    "a generation hauler that never landed",
    "the Perihelion orphan rolls",
    "a corporate arcology on Vesh",
];

pub const EMPLOYERS: &[&str] = &[
    "Helix Guild survey wing",
    "an independent ore barge",
    "Orbital Union customs",
    "a salvage cooperative",
    "a long-haul courier outfit",
];

pub const INCIDENTS: &[&str] = &[
    "walked away from a reactor scram",
    "lost a ship to a debris storm",
    "testified against a former captain",
    "went missing for a season",
    "won a smuggling bet they still won't explain",
];

pub const GOALS: &[&str] = &[
    "buy out a family debt",
    "command their own tug",
    "find a sibling last seen in the fields",
    "retire somewhere with weather",
    "map the outer drift",
];

pub const LEAVING_REASONS: &[&str] = &[
    "the pay stopped arriving",
    "the captain got reckless",
    "the contract simply ended",
    "they needed a fresh start",
    "their old crew split up",
];

pub const CONTACT_RELATIONS: &[&str] =
    &["old shipmate", "estranged sister", "fixer", "former instructor", "debt collector"];

pub const NODE_NAMES: &[&str] = &[
    "Kestrel Station",
    "Ashfall Drift",
    "Marrow Outpost",
    "Cinder Belt",
    "Halcyon Station",
    "Greywater Field",
    "Tollgate Outpost",
    "Lantern Shoals",
    "Meridian Station",
    "Rustveil Expanse",
    "Copperline Outpost",
    "Silt Reach",
];

pub const ROLES: [CrewRole; 5] =
    [CrewRole::Pilot, CrewRole::Engineer, CrewRole::Operator, CrewRole::Medic, CrewRole::Rigger];

/// Skill baseline each role jitters around.
pub fn role_archetype(role: CrewRole) -> Skills {
    match role {
        CrewRole::Pilot => Skills { ops: 4, engineering: 3, piloting: 8, medical: 2, social: 4 },
        CrewRole::Engineer => Skills { ops: 4, engineering: 8, piloting: 3, medical: 2, social: 3 },
        CrewRole::Operator => Skills { ops: 8, engineering: 4, piloting: 4, medical: 2, social: 5 },
        CrewRole::Medic => Skills { ops: 3, engineering: 2, piloting: 2, medical: 8, social: 6 },
        CrewRole::Rigger => Skills { ops: 5, engineering: 6, piloting: 4, medical: 3, social: 3 },
    }
}
