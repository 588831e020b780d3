//! schema-field-name-style: declared field names follow the configured style

use prismalint_core::{Diagnostic, DiagnosticCode, NamingStyle, RuleOptions, Severity, UnknownStyleError};
use prismalint_schema::{FieldKind, SchemaContext};

use crate::rule::Rule;
use crate::support::{rename_suggestion, report_location};

#[derive(Debug)]
pub struct SchemaFieldNameStyle {
    style: NamingStyle,
    allowlist: Vec<String>,
    ignore_models: Vec<String>,
}

impl SchemaFieldNameStyle {
    pub const DEFAULT_STYLE: NamingStyle = NamingStyle::CamelCase;

    pub fn from_options(options: &RuleOptions) -> Result<Self, UnknownStyleError> {
        Ok(Self {
            style: NamingStyle::resolve(options.style.as_deref(), Self::DEFAULT_STYLE)?,
            allowlist: options.allowlist.clone(),
            ignore_models: options.ignore_models.clone(),
        })
    }
}

impl Rule for SchemaFieldNameStyle {
    fn name(&self) -> &'static str {
        "schema-field-name-style"
    }

    fn check(&self, ctx: &SchemaContext, file: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for model in &ctx.datamodel.models {
            if model.is_generated || self.ignore_models.contains(&model.name) {
                continue;
            }
            for field in &model.fields {
                if field.kind == FieldKind::Unsupported {
                    continue;
                }
                if self.allowlist.contains(&field.name) {
                    continue;
                }
                if self.style.matches(&field.name) {
                    continue;
                }

                let record = ctx.locator.field(&model.name, &field.name);
                let mut diag = Diagnostic::new(
                    DiagnosticCode::InvalidFieldName,
                    Severity::Error,
                    format!("Schema field names must follow the {} style.", self.style),
                )
                .with_identifier(self.style.label(), &field.name)
                .with_location(report_location(
                    file,
                    ctx,
                    record.and_then(|r| r.name_position),
                    Some(field.name.len()),
                ));

                if let Some(record) = record {
                    if let Some(suggestion) =
                        rename_suggestion(ctx, record, &field.name, self.style, false)
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
