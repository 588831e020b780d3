//! PrismaLint Core
//!
//! Core domain model with stable, versioned types.
//! Never rename diagnostic codes - they are part of the public API.

pub mod config;
pub mod diagnostic;
pub mod naming;
pub mod report;

pub use config::{Config, ConfigError, RuleOptions, RulesConfig, SeverityThreshold};
pub use diagnostic::{Diagnostic, DiagnosticCode, Location, Severity, Suggestion};
pub use naming::{NamingStyle, UnknownStyleError};
pub use report::{Report, ReportVersion};
