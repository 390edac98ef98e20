// SPDX-License-Identifier: MPL-2.0
use iced_banner::app::{self, paths};
use iced_banner::cli::{self, Command};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "iced_banner=info";

fn main() -> iced::Result {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let flags = match cli::parse_env() {
        Ok(Command::Run(flags)) => flags,
        Ok(Command::Help) => {
            print!("{}", cli::HELP);
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{}", cli::HELP);
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::info!(lang = ?flags.lang, duration = ?flags.duration_secs, "starting");

    app::run(flags)
}
