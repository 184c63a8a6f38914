// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const GAUGE_THRESHOLD: f64 = 100.0;
pub const TICK_FACTOR: f64 = 0.1;
pub const RAID_TICK_FACTOR: f64 = 0.1;

// Raid mode
pub const RAID_TURN_CAP: u32 = 10;
pub const RAID_TOKEN_DAMAGE_DIVISOR: u64 = 100;

// Battle log
pub const BATTLE_LOG_CAPACITY: usize = 5;

// Damage
pub const DEFENSE_FACTOR: f64 = 0.5;
pub const MIN_RAW_DAMAGE: f64 = 1.0;
pub const SUPER_EFFECTIVE_MULTIPLIER: f64 = 1.5;
pub const NOT_VERY_EFFECTIVE_MULTIPLIER: f64 = 0.5;
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

// Encounter scaling: factor = 1 + (level - 1) * LEVEL_SCALING_STEP
pub const LEVEL_SCALING_STEP: f64 = 0.1;
pub const ARENA_LEVEL_SPREAD: u32 = 1;

// Exploration: steps 0..=2 minions, 3 mini-boss, 4+ boss
pub const MINION_SLOTS: usize = 3;
pub const MINI_BOSS_STEP: u32 = 3;
pub const BOSS_STEP: u32 = 4;
pub const ROUTE_STAGES: u32 = 5;

// Rewards and leveling
pub const GOLD_PER_LEVEL: u64 = 10;
pub const EXP_PER_LEVEL: u64 = 20;
pub const EXP_THRESHOLD_GROWTH: f64 = 1.2;
pub const STAT_GROWTH: f64 = 1.1;

// Vitals costs (hunger, mood, energy)
pub const VITALS_MAX: i32 = 100;
pub const WIN_VITALS_COST: (i32, i32, i32) = (-2, 0, -5);
pub const LOSE_VITALS_COST: (i32, i32, i32) = (0, -20, -10);
pub const FLEE_VITALS_COST: (i32, i32, i32) = (0, 0, -5);
pub const RAID_LOSE_VITALS_COST: (i32, i32, i32) = (0, 0, -10);

/// HP a creature is left with after losing, so it is never "dead" outside battle.
pub const DEFEAT_HP: u32 = 1;
