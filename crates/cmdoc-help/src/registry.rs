//! In-memory command registry populated from module files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::loader::{LoadError, ModuleFile, expand_module_path};
use crate::provider::{HelpProvider, LookupError};
use crate::record::HelpRecord;

/// A command together with the module that declared it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredCommand {
    pub module: String,
    pub record: HelpRecord,
}

impl RegisteredCommand {
    /// `module\name`, or just the name for commands without a module.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.module.is_empty() {
            self.record.name.clone()
        } else {
            format!("{}\\{}", self.module, self.record.name)
        }
    }
}

/// Help provider backed by explicitly loaded modules.
///
/// Registration never rejects duplicates. A name declared by more than one
/// module resolves to [`LookupError::Ambiguous`] instead of picking one.
/// Loading the same module file again, through any path, is a no-op.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<RegisteredCommand>,
    loaded_files: HashSet<PathBuf>,
}

impl CommandRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one command under `module`.
    pub fn register(&mut self, module: impl Into<String>, record: HelpRecord) {
        self.commands.push(RegisteredCommand {
            module: module.into(),
            record,
        });
    }

    /// Register every command of a parsed module file.
    pub fn register_module(&mut self, module: ModuleFile) {
        let name = module.name().to_owned();
        for record in module.commands {
            self.register(name.clone(), record);
        }
    }

    /// Load every module file named by `paths`.
    ///
    /// Each path may be a file, a directory or a glob pattern. Files already
    /// loaded (compared by canonical path) are skipped. Returns the number of
    /// commands registered by this call.
    ///
    /// # Errors
    ///
    /// Stops at the first path that cannot be expanded, read or parsed.
    pub fn load_modules<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<usize, LoadError> {
        let before = self.commands.len();
        for path in paths {
            for file in expand_module_path(path.as_ref())? {
                let canonical = fs::canonicalize(&file).map_err(|source| LoadError::Io {
                    path: file.clone(),
                    source,
                })?;
                if !self.loaded_files.insert(canonical) {
                    tracing::debug!(path = %file.display(), "Module already loaded");
                    continue;
                }
                let module = ModuleFile::from_path(&file)?;
                tracing::debug!(
                    path = %file.display(),
                    module = module.name(),
                    commands = module.commands.len(),
                    "Loaded module"
                );
                self.register_module(module);
            }
        }
        let loaded = self.commands.len() - before;
        tracing::info!(commands = loaded, "Module loading completed");
        Ok(loaded)
    }

    /// Registered commands sorted by module, then name.
    #[must_use]
    pub fn commands(&self) -> Vec<&RegisteredCommand> {
        let mut commands: Vec<_> = self.commands.iter().collect();
        commands.sort_by(|a, b| {
            (a.module.as_str(), a.record.name.as_str())
                .cmp(&(b.module.as_str(), b.record.name.as_str()))
        });
        commands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl HelpProvider for CommandRegistry {
    /// Exact name matches win; otherwise names are compared case-insensitively.
    fn lookup(&self, name: &str) -> Result<HelpRecord, LookupError> {
        let mut matches: Vec<&RegisteredCommand> = self
            .commands
            .iter()
            .filter(|c| c.record.name == name)
            .collect();

        if matches.is_empty() {
            let folded = name.to_lowercase();
            matches = self
                .commands
                .iter()
                .filter(|c| c.record.name.to_lowercase() == folded)
                .collect();
        }

        match matches.as_slice() {
            [] => Err(LookupError::NotFound(name.to_owned())),
            [single] => Ok(single.record.clone()),
            many => Err(LookupError::Ambiguous {
                name: name.to_owned(),
                candidates: many.iter().map(|c| c.qualified_name()).collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry.register("Widgets", HelpRecord::new("Get-Widget").with_synopsis("Gets."));
        registry.register("Widgets", HelpRecord::new("Set-Widget"));
        registry
    }

    #[test]
    fn test_lookup_exact() {
        let record = registry().lookup("Get-Widget").unwrap();
        assert_eq!(record.synopsis, "Gets.");
    }

    #[test]
    fn test_lookup_case_insensitive_fallback() {
        let record = registry().lookup("get-widget").unwrap();
        assert_eq!(record.name, "Get-Widget");
    }

    #[test]
    fn test_lookup_exact_beats_case_insensitive() {
        let mut registry = registry();
        registry.register("Other", HelpRecord::new("get-widget").with_synopsis("lower"));
        assert_eq!(registry.lookup("get-widget").unwrap().synopsis, "lower");
        assert_eq!(registry.lookup("Get-Widget").unwrap().synopsis, "Gets.");
    }

    #[test]
    fn test_lookup_not_found() {
        assert_eq!(
            registry().lookup("Remove-Widget"),
            Err(LookupError::NotFound("Remove-Widget".to_owned()))
        );
    }

    #[test]
    fn test_lookup_ambiguous_across_modules() {
        let mut registry = registry();
        registry.register("Legacy", HelpRecord::new("Get-Widget"));
        assert_eq!(
            registry.lookup("Get-Widget"),
            Err(LookupError::Ambiguous {
                name: "Get-Widget".to_owned(),
                candidates: vec![
                    "Widgets\\Get-Widget".to_owned(),
                    "Legacy\\Get-Widget".to_owned(),
                ],
            })
        );
    }

    #[test]
    fn test_lookup_ambiguous_case_insensitive() {
        let mut registry = CommandRegistry::new();
        registry.register("A", HelpRecord::new("Get-Widget"));
        registry.register("B", HelpRecord::new("GET-WIDGET"));
        assert!(matches!(
            registry.lookup("get-widget"),
            Err(LookupError::Ambiguous { .. })
        ));
    }

    #[test]
    fn test_commands_sorted() {
        let mut registry = registry();
        registry.register("Alpha", HelpRecord::new("Zed"));
        let names: Vec<String> = registry
            .commands()
            .iter()
            .map(|c| c.qualified_name())
            .collect();
        assert_eq!(
            names,
            vec!["Alpha\\Zed", "Widgets\\Get-Widget", "Widgets\\Set-Widget"]
        );
    }

    #[test]
    fn test_qualified_name_without_module() {
        let command = RegisteredCommand {
            module: String::new(),
            record: HelpRecord::new("Solo"),
        };
        assert_eq!(command.qualified_name(), "Solo");
    }

    #[test]
    fn test_load_modules_from_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("widgets.yaml"),
            "commands:\n  - name: Get-Widget\n  - name: Set-Widget\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("scripts.json"),
            r#"{"module": "Scripts", "commands": [{"name": "scripts/Backup.ps1"}]}"#,
        )
        .unwrap();

        let mut registry = CommandRegistry::new();
        let loaded = registry.load_modules(&[dir.path()]).unwrap();

        assert_eq!(loaded, 3);
        assert_eq!(registry.len(), 3);
        assert!(registry.lookup("Get-Widget").is_ok());
        assert!(registry.lookup("scripts/Backup.ps1").is_ok());
    }

    #[test]
    fn test_load_same_module_twice_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("widgets.yaml");
        fs::write(&path, "commands:\n  - name: Get-Widget\n").unwrap();

        let mut registry = CommandRegistry::new();
        assert_eq!(registry.load_modules(&[&path]).unwrap(), 1);
        assert_eq!(registry.load_modules(&[&path]).unwrap(), 0);
        assert_eq!(registry.len(), 1);
        assert!(registry.lookup("Get-Widget").is_ok());
    }

    #[test]
    fn test_load_overlapping_paths_registers_once() {
        let dir = TempDir::new().unwrap();
        let modules = dir.path().join("modules");
        fs::create_dir(&modules).unwrap();
        fs::write(modules.join("widgets.yaml"), "commands:\n  - name: Get-Widget\n").unwrap();

        let mut registry = CommandRegistry::new();
        let loaded = registry
            .load_modules(&[
                modules.clone(),
                modules.join("widgets.yaml"),
                modules.join("*.yaml"),
                modules.join(".").join("widgets.yaml"),
            ])
            .unwrap();

        assert_eq!(loaded, 1);
        assert_eq!(registry.lookup("Get-Widget").unwrap().name, "Get-Widget");
    }

    #[test]
    fn test_distinct_files_with_same_command_stay_ambiguous() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.yaml"), "commands:\n  - name: Get-Widget\n").unwrap();
        fs::write(dir.path().join("b.yaml"), "commands:\n  - name: Get-Widget\n").unwrap();

        let mut registry = CommandRegistry::new();
        registry.load_modules(&[dir.path()]).unwrap();
        assert!(matches!(
            registry.lookup("Get-Widget"),
            Err(LookupError::Ambiguous { .. })
        ));
    }

    #[test]
    fn test_load_modules_missing_path() {
        let dir = TempDir::new().unwrap();
        let mut registry = CommandRegistry::new();
        let err = registry
            .load_modules(&[dir.path().join("nope.yaml")])
            .unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
        assert!(registry.is_empty());
    }
}
