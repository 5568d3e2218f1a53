//! AFL Dictionary Generator Binary
//!
//! Run with: `generate_afl_dict <bison_file>`

use std::env;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use afl_dict::{Config, Generator};

/// Environment variable naming a JSON file that overrides the directive policy.
const CONFIG_ENV: &str = "AFL_DICT_CONFIG";

#[derive(Parser)]
#[command(name = "generate_afl_dict")]
#[command(about = "Generate an AFL compatible dictionary from a Bison grammar")]
struct Cli {
    /// Bison grammar file to extract tokens from
    #[arg(value_name = "BISON_FILE")]
    bison_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the dictionary
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = load_config()?;
    let dictionary = Generator::new(config).generate_file(&cli.bison_file)?;

    let stats = dictionary.stats();
    info!(
        "Extracted {} entries from {} directives ({} excluded, {} suppressed{})",
        dictionary.entries().len(),
        stats.directives,
        stats.excluded,
        stats.suppressed,
        if stats.terminated { ", stopped at terminator" } else { "" }
    );

    dictionary
        .write_to(BufWriter::new(io::stdout().lock()))
        .context("Failed to write dictionary to stdout")?;

    Ok(())
}

fn load_config() -> Result<Config> {
    match env::var_os(CONFIG_ENV) {
        Some(path) => {
            debug!("Loading config from {}", PathBuf::from(&path).display());
            Ok(Config::from_file(&path)?)
        }
        None => Ok(Config::default()),
    }
}
