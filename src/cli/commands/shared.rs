//! Shared components for CLI commands
//!
//! Logging setup and layered configuration loading used by every command.

use crate::Result;
use crate::app::services::reporter::ReportFormat;
use crate::config::Config;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Set up structured logging on stderr at the given level
///
/// `RUST_LOG` takes precedence over the CLI verbosity flags.
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("catalog_report={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// CLI values that override the loaded configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input_path: Option<PathBuf>,
    pub currency: Option<String>,
    pub output_format: Option<ReportFormat>,
    pub no_color: bool,
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(
    config_file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<Config> {
    // Fall back to the default config location only when a file exists there
    let default_config_path = if config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = config_file.or_else(|| {
        default_config_path
            .as_deref()
            .filter(|path| path.exists())
    });

    match config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => info!("No config file found, using defaults and environment variables"),
    }

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, overrides);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, overrides: &ConfigOverrides) {
    if let Some(input_path) = &overrides.input_path {
        config.input_path = input_path.clone();
    }
    if let Some(currency) = &overrides.currency {
        config.currency = currency.clone();
    }
    if let Some(output_format) = overrides.output_format {
        config.output_format = output_format;
    }
    if overrides.no_color {
        config.color = false;
    }
}
