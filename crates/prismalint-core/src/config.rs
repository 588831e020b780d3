//! Configuration schema (prismalint.toml)

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::diagnostic::{DiagnosticCode, Severity};
use crate::naming::UnknownStyleError;

/// Options shared by all naming rules
///
/// Every field is optional in the TOML; the rule supplies its own default
/// style. The `style` string is resolved when the rule is constructed, and
/// an unresolvable style aborts setup rather than falling back silently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleOptions {
    /// Style name, case- and separator-insensitive
    /// (snake_case, camel_case, pascal_case, screaming_snake_case)
    pub style: Option<String>,

    /// Identifier names allowed to keep their current form
    pub allowlist: Vec<String>,

    /// Model names to skip entirely
    pub ignore_models: Vec<String>,

    /// Enum names to skip entirely
    pub ignore_enums: Vec<String>,
}

/// Per-rule option tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Rule names to disable
    pub disabled: Vec<String>,

    pub schema_model_name_style: RuleOptions,
    pub schema_field_name_style: RuleOptions,
    pub schema_enum_name_style: RuleOptions,
    pub schema_enum_value_style: RuleOptions,
    pub db_table_name_style: RuleOptions,
    pub db_column_name_style: RuleOptions,
    pub db_enum_name_style: RuleOptions,
    pub db_enum_value_style: RuleOptions,
}

/// Severity threshold overrides for specific diagnostic codes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeverityThreshold {
    /// Map of diagnostic code to severity override
    pub overrides: HashMap<String, Severity>,
}

impl SeverityThreshold {
    /// Get severity for a diagnostic code, or default
    pub fn get_severity(&self, code: DiagnosticCode, default: Severity) -> Severity {
        self.overrides
            .get(code.as_str())
            .copied()
            .unwrap_or(default)
    }

    /// Set severity override for a code
    pub fn set_override(&mut self, code: DiagnosticCode, severity: Severity) {
        self.overrides.insert(code.as_str().to_string(), severity);
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Per-rule options
    #[serde(default)]
    pub rules: RulesConfig,

    /// Severity thresholds
    #[serde(default)]
    pub severity: SeverityThreshold,

    /// Project root path (for resolving relative paths)
    #[serde(skip)]
    pub project_root: std::path::PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: RulesConfig::default(),
            severity: SeverityThreshold::default(),
            project_root: std::env::current_dir().unwrap_or_default(),
        }
    }
}

impl Config {
    /// Load config from TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        let mut config: Config =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        // Set project root to parent of config file
        if let Some(parent) = path.parent() {
            config.project_root = parent.to_path_buf();
        }

        Ok(config)
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save config to TOML file
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let toml = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, toml).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error(transparent)]
    UnknownStyle(#[from] UnknownStyleError),
}
