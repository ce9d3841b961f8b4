//! Placeholder template engine.
//!
//! Each template line is tokenized into literal text and tags, then folded
//! back into a string with every unescaped tag replaced by the generated
//! fragment for its command. Lines are independent; generated text is never
//! rescanned.

use std::borrow::Cow;
use std::sync::LazyLock;

use cmdoc_help::{HelpProvider, LookupError};
use cmdoc_table::TableError;
use rayon::prelude::*;
use regex::Regex;

use crate::converter::DocConverter;

/// `{% Name %}`, optionally escaped with a leading backslash.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\\)?\{%\s*(.*?)\s*%\}").unwrap());

/// A placeholder found in a template line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Full matched text, including the escape backslash if present.
    pub raw_match: &'a str,
    /// Whether the tag was written as `\{% ... %}`.
    pub escaped: bool,
    /// Command name with surrounding whitespace removed.
    pub command_name: &'a str,
}

impl<'a> Tag<'a> {
    /// Text emitted for an escaped tag: the match without its backslash.
    #[must_use]
    pub fn literal(&self) -> &'a str {
        self.raw_match.strip_prefix('\\').unwrap_or(self.raw_match)
    }
}

/// Piece of a tokenized template line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Tag(Tag<'a>),
}

/// Split a line into literal text and tags, in order.
///
/// Empty literals between adjacent tags are omitted.
///
/// ```
/// use cmdoc_render::{Segment, tokenize};
///
/// let segments = tokenize("See {% Get-Widget %}.");
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[0], Segment::Literal("See "));
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in TAG_PATTERN.captures_iter(line) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            segments.push(Segment::Literal(&line[last..whole.start()]));
        }
        segments.push(Segment::Tag(Tag {
            raw_match: whole.as_str(),
            escaped: caps.get(1).is_some(),
            command_name: caps.get(2).map_or("", |m| m.as_str()),
        }));
        last = whole.end();
    }

    if last < line.len() {
        segments.push(Segment::Literal(&line[last..]));
    }
    segments
}

/// Failure resolving a single tag.
#[derive(Debug, thiserror::Error)]
pub enum TagError {
    /// `{% %}` with no command name.
    #[error("Empty placeholder tag")]
    EmptyTag,
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Template rendering failure, with the 1-based template line number.
#[derive(Debug, thiserror::Error)]
#[error("Template line {line}: {source}")]
pub struct RenderError {
    pub line: usize,
    #[source]
    pub source: TagError,
}

/// Substitutes `{% CommandName %}` tags with generated documentation.
pub struct TemplateEngine<P> {
    provider: P,
    converter: DocConverter,
}

impl<P: HelpProvider> TemplateEngine<P> {
    #[must_use]
    pub fn new(provider: P, converter: DocConverter) -> Self {
        Self {
            provider,
            converter,
        }
    }

    /// Render one template line.
    ///
    /// # Errors
    ///
    /// Fails on the first tag whose command cannot be resolved.
    pub fn render_line(&self, line: &str) -> Result<String, TagError> {
        tokenize(line)
            .into_iter()
            .try_fold(String::with_capacity(line.len()), |mut out, segment| {
                match segment {
                    Segment::Literal(text) => out.push_str(text),
                    Segment::Tag(tag) => out.push_str(&self.resolve(&tag)?),
                }
                Ok::<_, TagError>(out)
            })
    }

    /// Render a whole template into output lines.
    ///
    /// Lines are rendered in parallel. Any failure aborts the document; the
    /// reported error is the first failing line in template order.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] naming the failing line.
    pub fn render(&self, template: &str) -> Result<Vec<String>, RenderError> {
        let lines: Vec<&str> = template.lines().collect();
        let rendered: Vec<Result<String, TagError>> =
            lines.par_iter().map(|line| self.render_line(line)).collect();

        rendered
            .into_iter()
            .enumerate()
            .map(|(i, result)| result.map_err(|source| RenderError { line: i + 1, source }))
            .collect()
    }

    fn resolve<'a>(&self, tag: &Tag<'a>) -> Result<Cow<'a, str>, TagError> {
        if tag.escaped {
            return Ok(Cow::Borrowed(tag.literal()));
        }
        if tag.command_name.is_empty() {
            return Err(TagError::EmptyTag);
        }

        let record = self.provider.lookup(tag.command_name)?;
        tracing::debug!(command = tag.command_name, "Resolved placeholder");
        Ok(Cow::Owned(self.converter.convert(&record)?))
    }
}
