//! schema-model-name-style: declared model names follow the configured style

use prismalint_core::{Diagnostic, DiagnosticCode, NamingStyle, RuleOptions, Severity, UnknownStyleError};
use prismalint_schema::SchemaContext;

use crate::rule::Rule;
use crate::support::{rename_suggestion, report_location};

#[derive(Debug)]
pub struct SchemaModelNameStyle {
    style: NamingStyle,
    ignore_models: Vec<String>,
}

impl SchemaModelNameStyle {
    pub const DEFAULT_STYLE: NamingStyle = NamingStyle::PascalCase;

    pub fn from_options(options: &RuleOptions) -> Result<Self, UnknownStyleError> {
        Ok(Self {
            style: NamingStyle::resolve(options.style.as_deref(), Self::DEFAULT_STYLE)?,
            ignore_models: options.ignore_models.clone(),
        })
    }
}

impl Rule for SchemaModelNameStyle {
    fn name(&self) -> &'static str {
        "schema-model-name-style"
    }

    fn check(&self, ctx: &SchemaContext, file: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for model in &ctx.datamodel.models {
            if model.is_generated || self.ignore_models.contains(&model.name) {
                continue;
            }
            if self.style.matches(&model.name) {
                continue;
            }

            let record = ctx.locator.model(&model.name);
            let mut diag = Diagnostic::new(
                DiagnosticCode::InvalidModelName,
                Severity::Error,
                format!("Schema model names must follow the {} style.", self.style),
            )
            .with_identifier(self.style.label(), &model.name)
            .with_location(report_location(
                file,
                ctx,
                record.and_then(|r| r.name_position),
                Some(model.name.len()),
            ));

            if let Some(record) = record {
                if let Some(suggestion) =
                    rename_suggestion(ctx, record, &model.name, self.style, false)
                {
                    diag = diag.with_suggestion(suggestion);
                }
            }

            diagnostics.push(diag);
        }

        diagnostics
    }
}
