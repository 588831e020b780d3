//! Diagnostic codes and error reporting
//!
//! IMPORTANT: Diagnostic codes are versioned and stable.
//! NEVER rename or remove codes - they are part of the public API.
//! Add new codes with new names only.

use serde::{Deserialize, Serialize};

/// Diagnostic code registry (v1)
///
/// These codes are STABLE and VERSIONED.
/// Do NOT rename or remove codes - only add new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticCode {
    // Schema-side naming
    /// A model's declared name does not follow the configured style
    InvalidModelName,

    /// A field's declared name does not follow the configured style
    InvalidFieldName,

    /// An enum's declared name does not follow the configured style
    InvalidEnumName,

    /// An enum value's declared name does not follow the configured style
    InvalidEnumValueName,

    // Database-side naming
    /// The effective table name (`@@map` value or model name) does not
    /// follow the configured style
    InvalidTableName,

    /// The effective column name (`@map` value or field name) does not
    /// follow the configured style
    InvalidColumnName,

    /// The effective database enum name does not follow the configured style
    InvalidDbEnumName,

    /// The effective database enum value does not follow the configured style
    InvalidDbEnumValueName,
}

impl DiagnosticCode {
    /// Get the diagnostic code as a stable string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidModelName => "INVALID_MODEL_NAME",
            Self::InvalidFieldName => "INVALID_FIELD_NAME",
            Self::InvalidEnumName => "INVALID_ENUM_NAME",
            Self::InvalidEnumValueName => "INVALID_ENUM_VALUE_NAME",
            Self::InvalidTableName => "INVALID_TABLE_NAME",
            Self::InvalidColumnName => "INVALID_COLUMN_NAME",
            Self::InvalidDbEnumName => "INVALID_DB_ENUM_NAME",
            Self::InvalidDbEnumValueName => "INVALID_DB_ENUM_VALUE_NAME",
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message
    Info,

    /// Warning - should be reviewed but not blocking
    Warn,

    /// Error - blocking issue that should fail CI
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source location in a file
///
/// Lines are 1-indexed; columns are 0-indexed byte offsets within the line,
/// matching the locator's coordinate system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to project root
    pub file: String,

    /// Optional line number (1-indexed)
    pub line: Option<usize>,

    /// Optional column number (0-indexed)
    pub column: Option<usize>,

    /// Optional end line (for ranges)
    pub end_line: Option<usize>,

    /// Optional end column (for ranges)
    pub end_column: Option<usize>,
}

impl Location {
    /// Create a new location with just a file path
    ///
    /// Used as the document-root fallback anchor when an entity has no
    /// known position.
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line: None,
            column: None,
            end_line: None,
            end_column: None,
        }
    }

    /// Create a location with file, line, and column
    pub fn with_position(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line: Some(line),
            column: Some(column),
            end_line: None,
            end_column: None,
        }
    }

    /// Create a location spanning `length` columns on a single line
    pub fn with_span(file: impl Into<String>, line: usize, column: usize, length: usize) -> Self {
        Self {
            file: file.into(),
            line: Some(line),
            column: Some(column),
            end_line: Some(line),
            end_column: Some(column + length),
        }
    }
}

/// A suggested rename fix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Replacement text for the range
    pub replacement: String,

    /// Byte range in the schema text: start inclusive, end exclusive
    pub range: (usize, usize),
}

/// A diagnostic message with structured metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable diagnostic code
    pub code: DiagnosticCode,

    /// Severity level
    pub severity: Severity,

    /// Human-readable message
    pub message: String,

    /// Source location (best-effort)
    pub location: Option<Location>,

    /// Style the identifier was expected to follow
    pub expected_style: Option<String>,

    /// The offending identifier as written
    pub actual: Option<String>,

    /// Optional rename suggestion
    pub suggestion: Option<Suggestion>,
}

impl Diagnostic {
    /// Create a new diagnostic with minimal fields
    pub fn new(code: DiagnosticCode, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            code,
            severity,
            message: message.into(),
            location: None,
            expected_style: None,
            actual: None,
            suggestion: None,
        }
    }

    /// Set the location
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the expected style and offending identifier
    pub fn with_identifier(mut self, style: impl Into<String>, actual: impl Into<String>) -> Self {
        self.expected_style = Some(style.into());
        self.actual = Some(actual.into());
        self
    }

    /// Attach a rename suggestion
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }
}
