// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://adventofcode.com";
pub const YEAR: u32 = 2023;
pub const USER_AGENT: &str = "aoc2023-day-generator/0.4";
pub const TIMEOUT_SECS: u64 = 15;
pub const SESSION_ENV: &str = "AOC_SESSION";

// Puzzle inputs
pub const INPUTS_DIR: &str = "inputs";
pub const INPUTS_ENV: &str = "AOC_INPUTS";
pub const FIRST_DAY: u32 = 1;
pub const LAST_DAY: u32 = 25;

// Local store (logs)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";

// Generator
pub const DAYS_DIR: &str = "src/days";
pub const DAYS_MOD_FILE: &str = "src/days/mod.rs";
pub const TESTS_DIR: &str = "tests";
pub const REGISTRY_OPEN: &str = "days! {";
pub const MAX_LINE_LENGTH: usize = 100;
pub const INDENT: usize = 4;

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 500; // be polite to the puzzle server
