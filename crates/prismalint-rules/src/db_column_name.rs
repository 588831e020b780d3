//! db-column-name-style: effective column names follow the configured style
//!
//! The effective column name is the field's `@map` value when present and
//! the field name otherwise. Only scalar and enum fields map to columns;
//! relation fields do not exist in the database.

use prismalint_core::{Diagnostic, DiagnosticCode, NamingStyle, RuleOptions, Severity, UnknownStyleError};
use prismalint_schema::{FieldKind, SchemaContext};

use crate::rule::Rule;
use crate::support::{preferred_position, rename_suggestion, report_location};

#[derive(Debug)]
pub struct DbColumnNameStyle {
    style: NamingStyle,
    allowlist: Vec<String>,
    ignore_models: Vec<String>,
}

impl DbColumnNameStyle {
    pub const DEFAULT_STYLE: NamingStyle = NamingStyle::SnakeCase;

    pub fn from_options(options: &RuleOptions) -> Result<Self, UnknownStyleError> {
        Ok(Self {
            style: NamingStyle::resolve(options.style.as_deref(), Self::DEFAULT_STYLE)?,
            allowlist: options.allowlist.clone(),
            ignore_models: options.ignore_models.clone(),
        })
    }
}

impl Rule for DbColumnNameStyle {
    fn name(&self) -> &'static str {
        "db-column-name-style"
    }

    fn check(&self, ctx: &SchemaContext, file: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for model in &ctx.datamodel.models {
            if model.is_generated || self.ignore_models.contains(&model.name) {
                continue;
            }
            for field in &model.fields {
                if !matches!(field.kind, FieldKind::Scalar | FieldKind::Enum) {
                    continue;
                }
                if self.allowlist.contains(&field.name) {
                    continue;
                }

                let record = ctx.locator.field(&model.name, &field.name);
                let map_value = record.and_then(|r| r.map_value.clone());
                let effective = map_value.as_deref().unwrap_or(&field.name);
                if self.style.matches(effective) {
                    continue;
                }

                let prefer_map = map_value.is_some();
                let mut diag = Diagnostic::new(
                    DiagnosticCode::InvalidColumnName,
                    Severity::Error,
                    format!("Database column names must follow the {} style.", self.style),
                )
                .with_identifier(self.style.label(), effective)
                .with_location(report_location(
                    file,
                    ctx,
                    record.and_then(|r| preferred_position(r, prefer_map)),
                    None,
                ));

                if let Some(record) = record {
                    if let Some(suggestion) =
                        rename_suggestion(ctx, record, &field.name, self.style, prefer_map)
                    {
                        diag = diag.with_suggestion(suggestion);
                    }
                }

                diagnostics.push(diag);
            }
        }

        diagnostics
    }
}
