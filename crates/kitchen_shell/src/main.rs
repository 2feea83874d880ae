//! Fridge shell
//!
//! Run with: cargo run -p kitchen_shell
//!       or: FRIDGE_CAPACITY=250 cargo run --bin fridge

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use kitchen_fridge::Fridge;
use kitchen_shell::{load_config, Session};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Fridge capacity: {}", config.capacity);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut session = Session::new(Fridge::with_config(&config));

    if let Err(e) = session.run(stdin.lock(), io::stdout().lock(), interactive) {
        log::error!("Shell stopped: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
