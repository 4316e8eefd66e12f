//! Config subcommands handler

use anyhow::Result;

use rulemt::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    print!("{}", toml_str);
    Ok(())
}

/// Print where the default config file is looked up.
///
/// Reports whether the file exists, since a missing file means defaults.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    let config_path = Config::config_path()?;
    if config_path.exists() {
        println!("{}", config_path.display());
    } else {
        println!("{} (not found, using defaults)", config_path.display());
    }
    Ok(())
}
