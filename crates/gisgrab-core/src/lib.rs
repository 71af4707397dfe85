pub mod app_config;
pub mod config;
pub mod listing;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use listing::{canonical_link, Listing, NO_RATING, UNKNOWN};

/// Every tunable has a default, so the only way configuration fails is an
/// unparseable value.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
