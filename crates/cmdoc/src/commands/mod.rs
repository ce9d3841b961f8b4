//! CLI command implementations.

pub(crate) mod generate;
pub(crate) mod list;

pub(crate) use generate::GenerateArgs;
pub(crate) use list::ListArgs;

use cmdoc_config::Config;
use cmdoc_help::CommandRegistry;

use crate::error::CliError;

/// Load phase: register every command from the configured module paths.
fn load_registry(config: &Config) -> Result<CommandRegistry, CliError> {
    let mut registry = CommandRegistry::new();
    registry.load_modules(&config.modules_resolved)?;
    Ok(registry)
}
