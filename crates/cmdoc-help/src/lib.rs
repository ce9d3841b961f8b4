//! Command help records and where they come from.
//!
//! The documentation core only needs a [`HelpProvider`]: something that turns
//! a command name into a [`HelpRecord`]. This crate defines that contract and
//! ships [`CommandRegistry`], a provider backed by module files.
//!
//! Loading is split into two phases:
//!
//! 1. **Load** — [`CommandRegistry::load_modules`] reads module files (YAML,
//!    JSON or TOML) and registers every command they declare.
//! 2. **Resolve** — [`HelpProvider::lookup`] is a pure query against the
//!    registry. Nothing is loaded lazily.
//!
//! # Module file shape
//!
//! ```yaml
//! module: WidgetTools
//! commands:
//!   - name: Get-Widget
//!     syntax: Get-Widget [-Name] <String>
//!     synopsis: Gets a widget.
//!     description: |
//!       Gets one widget by name.
//!     parameters:
//!       - name: Name
//!         type: String
//!         description: The widget name.
//! ```

mod loader;
mod provider;
mod record;
mod registry;

pub use loader::{LoadError, ModuleFile, SUPPORTED_EXTENSIONS};
pub use provider::{HelpProvider, LookupError};
pub use record::{HelpRecord, ParameterInfo};
pub use registry::{CommandRegistry, RegisteredCommand};
