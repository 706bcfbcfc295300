// Sliding puzzle
pub const PUZZLE_SIZE: usize = 3;
pub const SHUFFLE_MOVES: usize = 70;
pub const PUZZLE_TIME_LIMIT_SECS: u32 = 150;
pub const PUZZLE_TICK_MS: u32 = 1000;
pub const PUZZLE_REVEAL_DELAY_MS: u32 = 800;

// Prize wheel
pub const MAX_SPINS: usize = 3;
pub const MIN_EXTRA_TURNS: u32 = 4;
pub const MAX_EXTRA_TURNS: u32 = 6; // exclusive
pub const SPIN_DURATION_MS: u32 = 3200; // must match the wheel's CSS transition
pub const FULL_TURN_DEGREES: f64 = 360.0;

// Cuteness scanner
pub const SCAN_STEP: u8 = 2;
pub const SCAN_TICK_MS: u32 = 45;
pub const SCAN_SETTLE_MS: u32 = 600;

// Splash story
pub const STORY_LINE_MS: u32 = 2000;

// Bucket list
pub const MIN_BUCKET_SELECTIONS: usize = 5;

// Media fades
pub const FADE_STEP: f64 = 0.05;
pub const FADE_TICK_MS: u32 = 50;

// Time since we met
pub const ELAPSED_TICK_MS: u32 = 1000;

// localStorage keys
pub const WHEEL_RESULTS_KEY: &str = "spinWheelResults_v2";
pub const BUCKET_LIST_KEY: &str = "herBucketListChoices";
