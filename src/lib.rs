//! Kalshi Market Maker Bot - Main Library
//!
//! Exploratory tooling for the Kalshi prediction-market exchange. The actual
//! market-making strategy is not implemented yet; what lives here today is
//! the read-side plumbing the binaries use to poll and print exchange data.
//!
//! - **bin_common**: shared utilities for the binary executables
//! - **kalshi_client**: the exchange data client (workspace library)

// Re-export the workspace library for convenience
pub use kalshi_client;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;

    pub use cli::{load_config_from_env, parse_args, ConfigType};
}
