// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://conjugaison.bescherelle.com/verbes/";
pub const USER_AGENT: &str = concat!("conjugaison/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Local store (logs, GUI state)
pub const STORE_DIR: &str = ".store";
pub const LOG_BASENAME: &str = "debug";
pub const STATE_FILE: &str = "gui.cfg";

// Input / export
pub const DEFAULT_INPUT_FILE: &str = "input.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

// Pacing
pub const REQUEST_PAUSE_MS: u64 = 500; // be polite
