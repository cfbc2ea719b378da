/// Dataset read when neither configuration nor the command line names one.
pub const DEFAULT_DATASET_PATH: &str = "./restaurant_reservation_hours.csv";

/// Optional TOML file consulted after the environment.
pub const CONFIG_FILE_NAME: &str = "tablebook.toml";

/// Prefix for environment overrides, e.g. `TABLEBOOK_DATASET__PATH`.
pub const ENV_PREFIX: &str = "TABLEBOOK";

/// Separator between nested keys in environment overrides.
pub const ENV_SEPARATOR: &str = "__";

pub const DEFAULT_LOG_LEVEL: &str = "warn";
