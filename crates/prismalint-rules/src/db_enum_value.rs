//! db-enum-value-style: effective database enum values follow the
//! configured style
//!
//! The effective value is the enum value's own `@map` value when present
//! and the declared value name otherwise.

use prismalint_core::{Diagnostic, DiagnosticCode, NamingStyle, RuleOptions, Severity, UnknownStyleError};
use prismalint_schema::SchemaContext;

use crate::rule::Rule;
use crate::support::{preferred_position, rename_suggestion, report_location};

#[derive(Debug)]
pub struct DbEnumValueStyle {
    style: NamingStyle,
    ignore_enums: Vec<String>,
}

impl DbEnumValueStyle {
    pub const DEFAULT_STYLE: NamingStyle = NamingStyle::SnakeCase;

    pub fn from_options(options: &RuleOptions) -> Result<Self, UnknownStyleError> {
        Ok(Self {
            style: NamingStyle::resolve(options.style.as_deref(), Self::DEFAULT_STYLE)?,
            ignore_enums: options.ignore_enums.clone(),
        })
    }
}

impl Rule for DbEnumValueStyle {
    fn name(&self) -> &'static str {
        "db-enum-value-style"
    }

    fn check(&self, ctx: &SchemaContext, file: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for enum_def in &ctx.datamodel.enums {
            if self.ignore_enums.contains(&enum_def.name) {
                continue;
            }
            for value in &enum_def.values {
                let record = ctx.locator.enum_value(&enum_def.name, &value.name);
                let map_value = record.and_then(|r| r.map_value.clone());
                let effective = map_value.as_deref().unwrap_or(&value.name);
                if self.style.matches(effective) {
                    continue;
                }

                let prefer_map = map_value.is_some();
                let mut diag = Diagnostic::new(
                    DiagnosticCode::InvalidDbEnumValueName,
                    Severity::Error,
                    format!("Database enum values must follow the {} style.", self.style),
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
                        rename_suggestion(ctx, record, &value.name, self.style, prefer_map)
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
