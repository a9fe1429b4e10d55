//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "knitout";

/// Name of the per-user configuration directory.
pub const CONFIG_DIR_NAME: &str = "knitout";

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "KNITOUT_CONFIG_DIR";

/// Knitout version written in the magic line when none is given.
pub const DEFAULT_KNITOUT_VERSION: &str = "2";

/// Lowest accepted `x-speed-number`.
pub const MIN_SPEED_NUMBER: i64 = 0;

/// Highest accepted `x-speed-number`.
pub const MAX_SPEED_NUMBER: i64 = 15;
