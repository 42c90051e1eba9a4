//! Application-wide constants.

use std::time::Duration;

/// Application name, used for data and log directories.
pub const APP_NAME: &str = "lazydash";

/// File name of the persisted dashboard inside the data directory.
pub const STORAGE_FILE: &str = "dashboard.json";

/// File name of the application log inside the data directory.
pub const LOG_FILE: &str = "lazydash.log";

/// How often the UI redraws when no input arrives.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Default description applied to a stat widget committed without one.
pub const DEFAULT_STAT_DESCRIPTION: &str = "No description provided.";

/// Default message applied to an empty widget committed without one.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available.";
