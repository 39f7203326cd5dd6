//! recolor - replace CSS color variable references with literal hex colors
//!
//! Command line entry point.
//!
//! # Execution Flow
//!
//! 1. Parse arguments
//! 2. Initialize logging (stderr, plus a rotating file with `--log-dir`)
//! 3. Load `recolor.yaml` (or built-in defaults) and apply `--dir` / `--extension`
//! 4. Scan the target directory, rewrite every file whose text changes and
//!    print `✓ <file>` per rewrite followed by `Updated <n> chart files`
//!
//! Any scan, read or write failure stops the run with a non-zero exit status.
//! Files rewritten before the failure keep their new content.

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use recolor::config::DEFAULT_CONFIG_FILE;
use recolor::{APP_NAME, ConfigManager, VERSION};

#[derive(Parser)]
#[command(name = "recolor")]
#[command(version = VERSION)]
#[command(about = "Replace CSS color variables with literal hex colors in component files")]
struct Cli {
    /// Directory containing the component files (overrides the config file)
    #[arg(long)]
    dir: Option<String>,

    /// Candidate file suffix, e.g. ".tsx" (overrides the config file)
    #[arg(long)]
    extension: Option<String>,

    /// YAML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: Utf8PathBuf,

    /// Write the effective configuration to --config and exit
    #[arg(long)]
    init_config: bool,

    /// Also write logs to a daily rotating file in this directory
    #[arg(long)]
    log_dir: Option<Utf8PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = match &cli.log_dir {
        Some(log_dir) => Some(recolor::logging::setup_logging(log_dir, APP_NAME, cli.debug)?),
        None => {
            recolor::logging::setup_console_logging(cli.debug)?;
            None
        }
    };

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let config_manager = ConfigManager::new(&cli.config);
    let config = config_manager
        .load_config()?
        .apply_overrides(cli.dir, cli.extension);

    if cli.init_config {
        config_manager.save_config(&config)?;
        println!("Wrote {}", config_manager.config_path());
        return Ok(());
    }

    let stdout = std::io::stdout();
    recolor::run(&config, stdout.lock())
        .with_context(|| format!("Recolor run over {} failed", config.settings.target_dir))?;

    Ok(())
}
