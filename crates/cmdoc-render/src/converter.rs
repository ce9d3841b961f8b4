//! Help record to Markdown fragment conversion.

use std::borrow::Cow;
use std::sync::LazyLock;

use cmdoc_help::{HelpRecord, ParameterInfo};
use cmdoc_table::{Alignment, Column, Table, TableError, render_table};
use regex::Regex;

use crate::line_ending::LineEnding;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

/// Extensions that mark a command name as a script file.
const SCRIPT_EXTENSIONS: &[&str] = &["ps1", "psm1", "sh", "bash", "py", "rb", "pl", "cmd", "bat"];

/// Parameter type names shown as `Switch`.
const SWITCH_TYPES: &[&str] = &[
    "SwitchParameter",
    "System.Management.Automation.SwitchParameter",
];

const SWITCH_LABEL: &str = "Switch";

/// Name shown in headings for a command.
///
/// Script paths (anything with a `/` or `\`, or a script extension) are
/// reduced to their file name. Other names are returned unchanged.
///
/// ```
/// use cmdoc_render::display_name;
///
/// assert_eq!(display_name(r"C:\scripts\Backup.ps1"), "Backup.ps1");
/// assert_eq!(display_name("Get-Widget"), "Get-Widget");
/// ```
#[must_use]
pub fn display_name(name: &str) -> &str {
    if looks_like_path(name) {
        name.rsplit(['/', '\\']).next().unwrap_or(name)
    } else {
        name
    }
}

fn looks_like_path(name: &str) -> bool {
    name.contains(['/', '\\'])
        || name.rsplit_once('.').is_some_and(|(_, ext)| {
            SCRIPT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
        })
}

/// Anchor id for a display name: each run of non-word characters becomes `-`.
///
/// ```
/// use cmdoc_render::slugify;
///
/// assert_eq!(slugify("Backup.ps1"), "Backup-ps1");
/// assert_eq!(slugify("Get-Widget"), "Get-Widget");
/// ```
#[must_use]
pub fn slugify(name: &str) -> Cow<'_, str> {
    NON_WORD.replace_all(name, "-")
}

/// Converts help records into Markdown fragments.
///
/// Output is deterministic: the same record always yields the same bytes.
#[derive(Debug, Clone, Default)]
pub struct DocConverter {
    line_ending: LineEnding,
    code_language: String,
}

impl DocConverter {
    /// Converter with CRLF line endings and a bare code fence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Info string placed after the opening fence of the syntax block.
    #[must_use]
    pub fn with_code_language(mut self, language: impl Into<String>) -> Self {
        self.code_language = language.into();
        self
    }

    /// Render one record as a Markdown fragment.
    ///
    /// The fragment has no trailing line ending. A `### Parameters` section is
    /// added only when at least one parameter has a description.
    pub fn convert(&self, record: &HelpRecord) -> Result<String, TableError> {
        let eol = self.line_ending.as_str();
        let name = display_name(&record.name);

        let syntax = if name == record.name {
            Cow::Borrowed(record.syntax.as_str())
        } else {
            Cow::Owned(record.syntax.replace(&record.name, name))
        };
        let syntax = syntax.replace(['\r', '\n'], "");
        let description = record.description.trim().lines().collect::<Vec<_>>().join(eol);

        let mut lines = vec![
            format!("<a id=\"{}\"></a>", slugify(name)),
            format!("## {name}"),
            format!("```{}", self.code_language),
            syntax,
            "```".to_owned(),
            String::new(),
            record.synopsis.trim().to_owned(),
            String::new(),
            "### Description".to_owned(),
            description,
        ];

        if let Some(table) = parameter_table(&record.parameters)? {
            lines.push(String::new());
            lines.push("### Parameters".to_owned());
            lines.push(String::new());
            lines.extend(render_table(&table));
        }

        Ok(lines.join(eol))
    }
}

/// Build the parameter table, or `None` when no parameter has a description.
fn parameter_table(parameters: &[ParameterInfo]) -> Result<Option<Table>, TableError> {
    let mut table = Table::new(vec![
        Column::new("Parameter", Alignment::Left),
        Column::new("Type", Alignment::Centre),
        Column::new("Description", Alignment::Left),
    ])?;

    for parameter in parameters {
        let description = collapse_lines(&parameter.description);
        if description.is_empty() {
            continue;
        }
        table.add_row(vec![
            escape_cell(parameter.name.trim()),
            escape_cell(type_label(&parameter.type_name)),
            escape_cell(&description),
        ])?;
    }

    Ok((!table.is_empty()).then_some(table))
}

fn type_label(type_name: &str) -> &str {
    let trimmed = type_name.trim();
    if SWITCH_TYPES.contains(&trimmed) {
        SWITCH_LABEL
    } else {
        trimmed
    }
}

/// Join non-blank trimmed lines with single spaces.
fn collapse_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
