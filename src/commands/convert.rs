//! Convert command handler

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use rulemt::cli::ConvertArgs;
use rulemt::{Config, Migrator};

fn write_symbols(path: &Path, symbols: &[String]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for symbol in symbols {
        writeln!(out, "{},", symbol)?;
    }
    out.flush()
}

/// Apply command-line overrides on top of the loaded config.
fn effective_config(args: &ConvertArgs, mut config: Config) -> Result<Config> {
    if args.keep_experimental {
        config.segmenter.skip_experimental = false;
    }
    if let Some(sentinel) = &args.sentinel {
        config.segmenter.sentinel = sentinel.clone();
    }
    config.validate()?;
    Ok(config)
}

/// Read the legacy file, migrate every record, write the output once.
///
/// The output and symbols files are left untouched if any record fails to
/// migrate.
pub fn handle(args: &ConvertArgs, config: Config) -> Result<()> {
    let config = effective_config(args, config)?;

    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    // Symbols stream to stdout; a symbols file is only written on success.
    let mut migrator = match &args.symbols {
        Some(_) => Migrator::new(config),
        None => Migrator::new(config).with_symbol_sink(Box::new(io::stdout())),
    };
    let conversion = migrator
        .convert(&input)
        .with_context(|| format!("Failed to migrate {}", args.input.display()))?;

    fs::write(&args.output, &conversion.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if let Some(path) = &args.symbols {
        write_symbols(path, migrator.import_refs().symbols())
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    info!(output = %args.output.display(), "wrote migrated rules");
    eprintln!(
        "Migrated {} rule(s), skipped {}, to {}",
        conversion.stats.migrated,
        conversion.stats.skipped,
        args.output.display()
    );
    Ok(())
}
