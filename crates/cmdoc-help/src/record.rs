//! Help record data model.

use serde::Deserialize;

/// Structured help for one command.
///
/// Every field except `name` may be omitted in a module file and defaults to
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct HelpRecord {
    /// Command name. May be a script path such as `scripts/Backup.ps1`.
    pub name: String,
    /// Usage syntax, possibly spanning several lines.
    pub syntax: String,
    /// One-line summary.
    pub synopsis: String,
    /// Long description.
    pub description: String,
    /// Parameters in declaration order.
    pub parameters: Vec<ParameterInfo>,
}

/// One command parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ParameterInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
}

impl HelpRecord {
    /// Create a record with only a name set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_syntax(mut self, syntax: impl Into<String>) -> Self {
        self.syntax = syntax.into();
        self
    }

    #[must_use]
    pub fn with_synopsis(mut self, synopsis: impl Into<String>) -> Self {
        self.synopsis = synopsis.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a parameter.
    #[must_use]
    pub fn with_parameter(
        mut self,
        name: impl Into<String>,
        type_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.parameters.push(ParameterInfo {
            name: name.into(),
            type_name: type_name.into(),
            description: description.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let record = HelpRecord::new("Get-Widget")
            .with_syntax("Get-Widget [-Name] <String>")
            .with_synopsis("Gets a widget.")
            .with_parameter("Name", "String", "The widget name.");

        assert_eq!(record.name, "Get-Widget");
        assert_eq!(record.synopsis, "Gets a widget.");
        assert!(record.description.is_empty());
        assert_eq!(record.parameters.len(), 1);
        assert_eq!(record.parameters[0].type_name, "String");
    }

    #[test]
    fn test_deserialize_defaults_missing_fields() {
        let record: HelpRecord = serde_yaml::from_str("name: Get-Widget").unwrap();
        assert_eq!(record, HelpRecord::new("Get-Widget"));
    }

    #[test]
    fn test_deserialize_parameter_type_key() {
        let yaml = "name: X\nparameters:\n  - name: Force\n    type: SwitchParameter\n";
        let record: HelpRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.parameters[0].type_name, "SwitchParameter");
        assert!(record.parameters[0].description.is_empty());
    }
}
