//! Kitchen Shell - fridge command interface
//!
//! A small line-oriented shell driving one [`kitchen_fridge::Fridge`].
//!
//! ```text
//! fridge> put apple 3
//! Stored 3 apple (97 free)
//! fridge> take apple 1
//! Took apple x1
//! fridge> list
//! apple
//! ```

pub mod command;
pub mod parser;
pub mod session;

pub use command::{Command, CommandError, CommandResult};
pub use parser::{ParseError, Parser};
pub use session::Session;

use kitchen_fridge::{ConfigError, FridgeConfig};

/// Environment variable naming a JSON config file
pub const CONFIG_PATH_ENV: &str = "FRIDGE_CONFIG";

/// Resolve the fridge configuration
///
/// `FRIDGE_CONFIG` (a JSON file) wins over `FRIDGE_CAPACITY`; with neither
/// set the default capacity is used.
pub fn load_config() -> Result<FridgeConfig, ConfigError> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.is_empty() => {
            log::info!("Fridge config from {}", path);
            FridgeConfig::from_file(path)
        }
        _ => FridgeConfig::from_env(),
    }
}
