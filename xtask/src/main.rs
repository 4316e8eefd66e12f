//! Development tasks for rulemt (`cargo xtask <task>`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

#[derive(Parser)]
#[command(name = "xtask")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages into target/man
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn generate_man(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let cmd = rulemt::cli::Cli::command();
    let name = cmd.get_name().to_string();

    let mut pages = vec![(name.clone(), cmd.clone())];
    for sub in cmd.get_subcommands() {
        pages.push((format!("{}-{}", name, sub.get_name()), sub.clone()));
    }

    for (page, command) in pages {
        let path = out_dir.join(format!("{}.1", page));
        let mut buffer = Vec::new();
        Man::new(command).render(&mut buffer)?;
        fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("wrote {}", path.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man(&out_dir),
    }
}
