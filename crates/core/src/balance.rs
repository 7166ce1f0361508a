//! Simulation tunables. Everything here is compile-time configuration; the core
//! reads no environment or files.

// Clocks
pub const FIXED_DT: f64 = 0.05;
pub const TICKS_PER_DAY: u64 = 1_200;
pub const PAYROLL_INTERVAL_SECONDS: f64 = TICKS_PER_DAY as f64 * FIXED_DT;
pub const EVENT_INTERVAL_TICKS: u64 = 600;

pub const LOG_CAPACITY: usize = 8;

// Interior avatar
pub const MOVE_COOLDOWN_SECONDS: f64 = 0.15;

// Avatar needs, per second. Hunger, thirst, fatigue and stress rise; morale falls.
pub const NEED_MIN: f64 = 0.0;
pub const NEED_MAX: f64 = 100.0;
pub const HUNGER_RATE: f64 = 0.25;
pub const THIRST_RATE: f64 = 0.4;
pub const FATIGUE_RATE: f64 = 0.15;
pub const STRESS_RATE: f64 = 0.1;
pub const MORALE_DECAY_RATE: f64 = 0.05;
/// Stress rate multiplier while seated at the helm.
pub const COMMAND_STRESS_RELIEF: f64 = 0.5;

// Crew needs, per second
pub const CREW_STRESS_RATE: f64 = 0.04;
pub const CREW_FATIGUE_RATE: f64 = 0.06;
pub const CREW_MORALE_DECAY: f64 = 0.02;
pub const CREW_MORALE_STRESS_COUPLING: f64 = 0.0006;
pub const CREW_LOYALTY_DRIFT: f64 = 0.03;
pub const CREW_MORALE_PIVOT: f64 = 50.0;
pub const LOYALTY_HIGH_TARGET: f64 = 80.0;
pub const LOYALTY_LOW_TARGET: f64 = 20.0;

// Crew and hiring
pub const MAX_CREW: usize = 6;
pub const CANDIDATE_POOL_SIZE: usize = 4;
pub const STARTING_CREDITS: i64 = 2_000;
pub const PAY_RATE_BASE: i64 = 40;
pub const PAY_RATE_PER_SKILL_POINT: i64 = 3;
pub const SIGN_ON_BONUS_BASE: i64 = 120;
pub const SIGN_ON_BONUS_PER_INDEX: i64 = 40;
pub const SKILL_MAX: i32 = 10;
pub const SKILL_JITTER: i32 = 2;

// Payroll outcomes
pub const PAYROLL_MORALE_BONUS: f64 = 4.0;
pub const PAYROLL_STRESS_RELIEF: f64 = 3.0;
pub const MISSED_PAYROLL_MORALE_PENALTY: f64 = 8.0;
pub const MISSED_PAYROLL_STRESS_PENALTY: f64 = 6.0;
pub const MISSED_PAYROLL_LOYALTY_PENALTY: f64 = 5.0;
pub const FIRING_MORALE_PENALTY: f64 = 3.0;

// Ops efficiency
pub const OPS_EFFICIENCY_EMPTY: f64 = 0.6;
pub const OPS_EFFICIENCY_MIN: f64 = 0.5;
pub const OPS_EFFICIENCY_MAX: f64 = 1.5;

// Free-flight ship and camera
pub const SHIP_DRIFT_STRENGTH: f64 = 0.6;
pub const SHIP_IMPULSE: f64 = 40.0;
pub const SHIP_MAX_SPEED: f64 = 60.0;
pub const CAMERA_PAN_SPEED: f64 = 240.0;
pub const CAMERA_ZOOM_RATE: f64 = 0.1;
pub const CAMERA_ZOOM_MIN: f64 = 0.5;
pub const CAMERA_ZOOM_MAX: f64 = 3.0;

// Sector
pub const NODE_COUNT: usize = 10;
pub const SECTOR_RADIUS: f64 = 480.0;
pub const SECTOR_INNER_RADIUS: f64 = 60.0;
pub const EXTRA_EDGE_ATTEMPTS: usize = 5;
pub const MIN_EDGE_DISTANCE: f64 = 40.0;

// Travel, per tick
pub const TRAVEL_SPEED: f64 = 4.0;
pub const FUEL_BURN_PER_TICK: f64 = 0.02;
pub const TOW_SPEED_MULTIPLIER: f64 = 0.5;
pub const TOW_BURN_MULTIPLIER: f64 = 1.5;
pub const TRAVEL_FUEL_RESERVE_FRACTION: f64 = 0.6;

// Ship stats at creation
pub const FUEL_MAX: f64 = 100.0;
pub const HULL_MAX: f64 = 100.0;
pub const STARTING_TOW_CAPACITY: f64 = 120.0;
pub const STARTING_SCANNER_KITS: u32 = 2;

// Station services
pub const FUEL_PRICE_PER_UNIT: i64 = 3;
pub const HULL_REPAIR_PRICE_PER_POINT: i64 = 5;
pub const SCANNER_KIT_PRICE: i64 = 180;

// Contracts
pub const CONTRACTS_PER_NODE_MIN: usize = 2;
pub const CONTRACTS_PER_NODE_MAX: usize = 4;
pub const CONTRACT_REPUTATION_FLOOR: i32 = -20;
pub const CONTRACT_REWARD_BASE: i64 = 250;
pub const CONTRACT_REWARD_SPREAD: f64 = 200.0;
pub const FRIENDLY_REPUTATION: i32 = 25;
pub const FRIENDLY_REWARD_MULTIPLIER: f64 = 1.2;
pub const HOSTILE_REWARD_MULTIPLIER: f64 = 0.9;
pub const TUG_REWARD_BONUS: i64 = 150;
pub const SALVAGE_REWARD_BONUS: i64 = 100;
pub const SCANNER_REWARD_BONUS: i64 = 0;
pub const REPUTATION_GAIN: i32 = 5;
pub const REPUTATION_GAIN_WHILE_NEGATIVE: i32 = 3;
pub const REPUTATION_FAILURE_PENALTY: i32 = 4;
pub const REPUTATION_MIN: i32 = -100;
pub const REPUTATION_MAX: i32 = 100;
pub const CONTRACT_DEADLINE_DAYS: u64 = 3;
pub const TUG_MASS_MIN: f64 = 40.0;
pub const TUG_MASS_SPREAD: f64 = 100.0;
pub const TUG_MIN_HULL_FRACTION: f64 = 0.3;
pub const SALVAGE_DURATION_MIN_TICKS: u32 = 200;
pub const SALVAGE_DURATION_SPREAD_TICKS: u32 = 200;
pub const SALVAGE_PARTS_MIN: u32 = 2;
pub const SALVAGE_PARTS_SPREAD: u32 = 5;
pub const SURVEY_YIELD_MIN: u32 = 1;
pub const SURVEY_YIELD_SPREAD: u32 = 3;

// Operation risk
pub const TOW_RISK_BASE: f64 = 0.0005;
pub const TOW_RISK_EFFICIENCY_FACTOR: f64 = 0.002;
pub const TOW_RISK_HULL_FACTOR: f64 = 0.004;
pub const SALVAGE_RISK_INTERVAL_TICKS: u64 = 40;
pub const SALVAGE_RISK_BASE: f64 = 0.05;
pub const SALVAGE_RISK_EFFICIENCY_FACTOR: f64 = 0.1;
pub const SALVAGE_RISK_HULL_FACTOR: f64 = 0.1;
pub const SALVAGE_HULL_DAMAGE: f64 = 8.0;

// Interior interactions
pub const GALLEY_HUNGER_RELIEF: f64 = 30.0;
pub const GALLEY_THIRST_RELIEF: f64 = 40.0;
pub const BUNK_FATIGUE_RELIEF: f64 = 40.0;
pub const LOUNGE_STRESS_RELIEF: f64 = 15.0;
pub const LOUNGE_MORALE_GAIN: f64 = 8.0;
