//! The lookup contract used by the documentation core.

use crate::record::HelpRecord;

/// Resolves command names to help records.
///
/// Implementations must be shareable across threads: template lines are
/// rendered in parallel against one provider.
pub trait HelpProvider: Send + Sync {
    /// Look up help for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] if nothing matches and
    /// [`LookupError::Ambiguous`] if more than one command matches.
    fn lookup(&self, name: &str) -> Result<HelpRecord, LookupError>;
}

/// Command lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No loaded command has this name.
    #[error("Command not found: {0}")]
    NotFound(String),
    /// Several loaded commands match this name.
    #[error("Ambiguous command '{name}': matches {}", .candidates.join(", "))]
    Ambiguous {
        /// Name as written in the template.
        name: String,
        /// Qualified names of every match (`module\command`).
        candidates: Vec<String>,
    },
}

impl<P: HelpProvider + ?Sized> HelpProvider for &P {
    fn lookup(&self, name: &str) -> Result<HelpRecord, LookupError> {
        (**self).lookup(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_message_lists_candidates() {
        let err = LookupError::Ambiguous {
            name: "Get-Widget".to_owned(),
            candidates: vec!["A\\Get-Widget".to_owned(), "B\\Get-Widget".to_owned()],
        };
        assert_eq!(
            err.to_string(),
            "Ambiguous command 'Get-Widget': matches A\\Get-Widget, B\\Get-Widget"
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = LookupError::NotFound("Nope".to_owned());
        assert_eq!(err.to_string(), "Command not found: Nope");
    }
}
