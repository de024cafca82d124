// Roster constants
pub const MAX_PLAYERS: usize = 3;
pub const MAX_NAME_LEN: usize = 16;

// Starting player stats
pub const MAX_HEALTH: i32 = 100;
pub const STARTING_GOLD: i32 = 0;
pub const STARTING_TIME: i32 = 100;

// Event log
pub const EVENT_LOG_CAPACITY: usize = 15;

// Stage 1: path damage
pub const SWAMP_TRAIL_DAMAGE: i32 = 5;
pub const ROCKY_PASS_DAMAGE: i32 = 10;
pub const DENSE_VINES_DAMAGE: i32 = 15;

// Stage 2: first riddle
pub const RIDDLE_ONE_SOLUTION: &str = "egg";
pub const RIDDLE_ONE_HEALTH_GAIN: i32 = 5;
pub const RIDDLE_ONE_GOLD_GAIN: i32 = 1;
pub const RIDDLE_ONE_TIME_GAIN: i32 = 10;
pub const RIDDLE_ONE_HEALTH_PENALTIES: [i32; 2] = [5, 10];
pub const RIDDLE_ONE_TIME_PENALTY: i32 = 10;

// Stage 3: second riddle
pub const RIDDLE_TWO_SOLUTION: &str = "echo";
pub const RIDDLE_TWO_HEALTH_GAIN: i32 = 5;
pub const RIDDLE_TWO_GOLD_GAIN: i32 = 2;
pub const RIDDLE_TWO_TIME_GAIN: i32 = 10;
pub const RIDDLE_TWO_LANTERN_PENALTY: i32 = 5;
pub const RIDDLE_TWO_LANTERN_GOLD: i32 = 1;
pub const RIDDLE_TWO_MIN_PENALTY: i32 = 5;
pub const RIDDLE_TWO_MAX_PENALTY: i32 = 15;

// Stage 4: bridge
pub const BRIDGE_INJURY_DAMAGE: i32 = 10;
pub const BRIDGE_WAIT_TIME_COST: i32 = 15;
pub const BRIDGE_CACHE_GOLD: i32 = 2;

// Stage 5: vault
pub const VAULT_RIDDLE_SOLUTION: &str = "future";
pub const VAULT_RIDDLE_TIME_GAIN: i32 = 10;
pub const VAULT_DIAL_MIN: u8 = 1;
pub const VAULT_DIAL_MAX: u8 = 5;
pub const VAULT_TREASURE_GOLD: i32 = 5;
pub const VAULT_WRONG_DIAL_TIME_COST: i32 = 10;

// Return journey scoring thresholds
pub const STRONG_HEALTH_THRESHOLD: i32 = 50;
pub const QUICK_TIME_THRESHOLD: i32 = 50;
pub const SURVIVAL_HEALTH_THRESHOLD: i32 = 25;
pub const TIERED_STRONG_BONUS: i32 = 3;
pub const TIERED_SURVIVED_BONUS: i32 = 1;
pub const FLAT_HEALTHY_BONUS: i32 = 2;
pub const FLAT_BASE_BONUS: i32 = 1;

// Terminal loop
pub const INPUT_POLL_MS: u64 = 50;
