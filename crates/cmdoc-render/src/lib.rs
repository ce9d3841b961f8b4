//! Markdown generation from command help.
//!
//! Two pieces:
//! - [`DocConverter`] turns one [`HelpRecord`](cmdoc_help::HelpRecord) into a
//!   Markdown fragment (anchor, heading, syntax block, synopsis, description
//!   and parameter table).
//! - [`TemplateEngine`] scans template lines for `{% CommandName %}` tags and
//!   replaces each with the converted fragment. `\{% ... %}` is a literal.
//!
//! # Example
//!
//! ```
//! use cmdoc_help::{CommandRegistry, HelpRecord};
//! use cmdoc_render::{DocConverter, LineEnding, TemplateEngine};
//!
//! let mut registry = CommandRegistry::new();
//! registry.register("Widgets", HelpRecord::new("Get-Widget").with_synopsis("Gets a widget."));
//!
//! let converter = DocConverter::new().with_line_ending(LineEnding::Lf);
//! let engine = TemplateEngine::new(&registry, converter);
//! let lines = engine.render("# Reference\n{% Get-Widget %}").unwrap();
//!
//! assert_eq!(lines[0], "# Reference");
//! assert!(lines[1].contains("## Get-Widget"));
//! ```

mod converter;
mod line_ending;
mod template;

pub use converter::{DocConverter, display_name, slugify};
pub use line_ending::LineEnding;
pub use template::{RenderError, Segment, Tag, TagError, TemplateEngine, tokenize};
