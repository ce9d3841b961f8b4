//! `cmdoc list` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use cmdoc_config::{CliSettings, Config};
use cmdoc_help::CommandRegistry;

use super::load_registry;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Module file, directory or glob to load commands from (repeatable).
    #[arg(short, long = "module", value_name = "PATH")]
    modules: Vec<PathBuf>,

    /// Path to configuration file (default: auto-discover cmdoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ListArgs {
    /// Execute the list command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            modules: self.modules,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let registry = load_registry(&config)?;

        if registry.is_empty() {
            output.status("No commands loaded");
            return Ok(());
        }
        output.command_count(registry.len());

        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(format_listing(&registry).as_bytes())
            .map_err(|source| CliError::OutputWrite {
                path: PathBuf::from("<stdout>"),
                source,
            })
    }
}

/// One line per command: qualified name, a tab, then the synopsis.
fn format_listing(registry: &CommandRegistry) -> String {
    registry
        .commands()
        .iter()
        .map(|command| {
            format!(
                "{}\t{}\n",
                command.qualified_name(),
                command.record.synopsis.trim()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdoc_help::HelpRecord;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_listing_sorted() {
        let mut registry = CommandRegistry::new();
        registry.register("Widgets", HelpRecord::new("Set-Widget").with_synopsis("Sets."));
        registry.register("Widgets", HelpRecord::new("Get-Widget").with_synopsis(" Gets. "));

        assert_eq!(
            format_listing(&registry),
            "Widgets\\Get-Widget\tGets.\nWidgets\\Set-Widget\tSets.\n"
        );
    }

    #[test]
    fn test_format_listing_empty() {
        assert_eq!(format_listing(&CommandRegistry::new()), "");
    }
}
