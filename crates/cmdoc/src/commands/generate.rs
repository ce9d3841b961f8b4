//! `cmdoc generate` command implementation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use cmdoc_config::{CliSettings, Config, LineEnding};
use cmdoc_render::{DocConverter, TemplateEngine};

use super::load_registry;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Template file containing `{% CommandName %}` tags.
    template: PathBuf,

    /// Output file (default: standard output).
    output: Option<PathBuf>,

    /// Module file, directory or glob to load commands from (repeatable).
    #[arg(short, long = "module", value_name = "PATH")]
    modules: Vec<PathBuf>,

    /// Path to configuration file (default: auto-discover cmdoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Line ending for the generated document: crlf or lf (overrides config).
    #[arg(long)]
    line_ending: Option<LineEnding>,

    /// Fence language for syntax blocks (overrides config).
    #[arg(long)]
    code_language: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateArgs {
    /// Execute the generate command.
    ///
    /// Nothing is written unless the whole template renders.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            modules: self.modules,
            line_ending: self.line_ending,
            code_language: self.code_language,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let template =
            std::fs::read_to_string(&self.template).map_err(|source| CliError::TemplateNotFound {
                path: self.template.clone(),
                source,
            })?;

        let registry = load_registry(&config)?;
        if self.verbose {
            output.status(&format!("Loaded {} commands", registry.len()));
        }

        let converter = DocConverter::new()
            .with_line_ending(config.output.line_ending)
            .with_code_language(config.output.code_language.clone());
        let engine = TemplateEngine::new(&registry, converter);
        let lines = engine.render(&template)?;
        tracing::debug!(
            template = %self.template.display(),
            lines = lines.len(),
            "Rendered template"
        );
        let document = join_lines(&lines, config.output.line_ending);

        match &self.output {
            Some(path) => {
                write_file(path, &document)?;
                output.written(path);
            }
            None => write_stdout(&document)?,
        }
        Ok(())
    }
}

/// Join output lines, terminating each with the line ending.
fn join_lines(lines: &[String], line_ending: LineEnding) -> String {
    let eol = line_ending.as_str();
    let mut document = String::with_capacity(lines.iter().map(|l| l.len() + eol.len()).sum());
    for line in lines {
        document.push_str(line);
        document.push_str(eol);
    }
    document
}

fn write_file(path: &Path, document: &str) -> Result<(), CliError> {
    let to_error = |source| CliError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(to_error)?);
    writer.write_all(document.as_bytes()).map_err(to_error)?;
    writer.flush().map_err(to_error)
}

fn write_stdout(document: &str) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(document.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|source| CliError::OutputWrite {
            path: PathBuf::from("<stdout>"),
            source,
        })
}
