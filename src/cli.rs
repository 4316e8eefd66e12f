//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can render the man page from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ")\nbuilt: ",
    env!("RULEMT_BUILD_DATE"),
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nbuilt: ",
    env!("RULEMT_BUILD_DATE"),
);

/// Rule Migration Tool - convert legacy Quark WPR rules to RuleInfo records
#[derive(Parser, Debug)]
#[command(name = "rulemt")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Convert legacy Quark WPR rule configs to RuleInfo records")]
pub struct Cli {
    /// Config file (default: <config dir>/rulemt/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a legacy rules file
    #[command(long_about = "Convert a legacy rules file.\n\n\
        Every record starting at the sentinel is migrated to a RuleInfo record. \
        Experimental and limited-discoverable records are skipped unless \
        --keep-experimental is given. One `<symbol>,` line is printed per \
        distinct filter expression so an import list can be built from it.\n\n\
        The output file is written only if every record migrates.")]
    Convert(ConvertArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Print shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// Legacy rules file
    pub input: PathBuf,

    /// Where to write the migrated records
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Write expression symbols to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub symbols: Option<PathBuf>,

    /// Migrate experimental and limited-discoverable records too
    #[arg(long)]
    pub keep_experimental: bool,

    /// Override the record start sentinel
    #[arg(long, value_name = "TEXT")]
    pub sentinel: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the default config file location
    Path,
}
