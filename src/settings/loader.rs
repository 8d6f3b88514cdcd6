use anyhow::{Context, Result, anyhow};
use tracing::debug;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::{build_config, select_config_file};
use crate::cli::CliArgs;

/// Load configuration by combining one config file with environment
/// variables and CLI arguments.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let file = select_config_file(cli);
    debug!(file = ?file, "loading configuration");

    let builder = build_config(file.as_deref())?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    let sources = raw.apply_cli_overrides(cli);
    raw.resolve(sources, file)
        .context("configuration is invalid")
}
