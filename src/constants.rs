//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and matcher limits so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "taskscout";

/// Crate version, baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.taskscout.toml` in repo root).
pub const CONFIG_FILENAME: &str = ".taskscout.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "taskscout";

// ── Matcher limits ──────────────────────────────────────────────────

/// Maximum number of commits read from the log per scan.
pub const DEFAULT_MAX_COMMITS: usize = 50;

/// Default poll interval for `taskscout watch`, in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

/// Default task list location, relative to the repository root.
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_LOG: &str = "TASKSCOUT_LOG";
pub const ENV_TASKS: &str = "TASKSCOUT_TASKS";
pub const ENV_POLL_INTERVAL: &str = "TASKSCOUT_POLL_INTERVAL";
pub const ENV_MAX_COMMITS: &str = "TASKSCOUT_MAX_COMMITS";
pub const ENV_FORMAT: &str = "TASKSCOUT_FORMAT";
