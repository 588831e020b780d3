//! schema-enum-value-style: declared enum values follow the configured style

use prismalint_core::{Diagnostic, DiagnosticCode, NamingStyle, RuleOptions, Severity, UnknownStyleError};
use prismalint_schema::SchemaContext;

use crate::rule::Rule;
use crate::support::{rename_suggestion, report_location};

#[derive(Debug)]
pub struct SchemaEnumValueStyle {
    style: NamingStyle,
    ignore_enums: Vec<String>,
}

impl SchemaEnumValueStyle {
    pub const DEFAULT_STYLE: NamingStyle = NamingStyle::ScreamingSnakeCase;

    pub fn from_options(options: &RuleOptions) -> Result<Self, UnknownStyleError> {
        Ok(Self {
            style: NamingStyle::resolve(options.style.as_deref(), Self::DEFAULT_STYLE)?,
            ignore_enums: options.ignore_enums.clone(),
        })
    }
}

impl Rule for SchemaEnumValueStyle {
    fn name(&self) -> &'static str {
        "schema-enum-value-style"
    }

    fn check(&self, ctx: &SchemaContext, file: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for enum_def in &ctx.datamodel.enums {
            if self.ignore_enums.contains(&enum_def.name) {
                continue;
            }
            for value in &enum_def.values {
                if self.style.matches(&value.name) {
                    continue;
                }

                let record = ctx.locator.enum_value(&enum_def.name, &value.name);
                let mut diag = Diagnostic::new(
                    DiagnosticCode::InvalidEnumValueName,
                    Severity::Error,
                    format!("Schema enum values must follow the {} style.", self.style),
                )
                .with_identifier(self.style.label(), &value.name)
                .with_location(report_location(
                    file,
                    ctx,
                    record.and_then(|r| r.name_position),
                    Some(value.name.len()),
                ));

                if let Some(record) = record {
                    if let Some(suggestion) =
                        rename_suggestion(ctx, record, &value.name, self.style, false)
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
