use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use rulemt::cli::{Cli, Commands, ConfigCommands};

mod commands;

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert(args) => {
            let config = commands::load_config(cli.config.as_deref())?;
            commands::convert::handle(&args, config)
        }
        Commands::Config(ConfigCommands::Show) => {
            let config = commands::load_config(cli.config.as_deref())?;
            commands::config::handle_show(&config)
        }
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(),
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
