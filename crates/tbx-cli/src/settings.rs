//! Loading of the optional TOML configuration file.
//!
//! ```toml
//! [options]
//! ignore_whitespace = true
//! case_sensitive = false
//!
//! [limits]
//! max_chars = 500000
//! max_cells = 16000000
//! ```

use std::path::Path;

use anyhow::Context;
use tbx_diff::DiffConfig;
use tracing::debug;

use crate::cli::DiffArgs;

/// Read a config file, falling back to defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<DiffConfig> {
    let Some(path) = path else {
        return Ok(DiffConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: DiffConfig = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Apply command-line flags on top of a loaded config.
pub fn apply_overrides(mut config: DiffConfig, args: &DiffArgs) -> DiffConfig {
    if args.ignore_whitespace {
        config.options.ignore_whitespace = true;
    }
    if args.ignore_case {
        config.options.case_sensitive = false;
    }
    if let Some(max_chars) = args.max_chars {
        config.limits.max_chars = max_chars;
    }
    if let Some(max_cells) = args.max_cells {
        config.limits.max_cells = max_cells;
    }
    config
}

/// Resolve the effective config for a `diff` invocation.
pub fn resolve(args: &DiffArgs) -> anyhow::Result<DiffConfig> {
    let config = apply_overrides(load_config(args.config.as_deref())?, args);
    config.validate()?;
    Ok(config)
}
