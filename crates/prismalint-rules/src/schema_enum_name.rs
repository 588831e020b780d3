//! schema-enum-name-style: declared enum names follow the configured style

use prismalint_core::{Diagnostic, DiagnosticCode, NamingStyle, RuleOptions, Severity, UnknownStyleError};
use prismalint_schema::SchemaContext;

use crate::rule::Rule;
use crate::support::{rename_suggestion, report_location};

#[derive(Debug)]
pub struct SchemaEnumNameStyle {
    style: NamingStyle,
    ignore_enums: Vec<String>,
}

impl SchemaEnumNameStyle {
    pub const DEFAULT_STYLE: NamingStyle = NamingStyle::PascalCase;

    pub fn from_options(options: &RuleOptions) -> Result<Self, UnknownStyleError> {
        Ok(Self {
            style: NamingStyle::resolve(options.style.as_deref(), Self::DEFAULT_STYLE)?,
            ignore_enums: options.ignore_enums.clone(),
        })
    }
}

impl Rule for SchemaEnumNameStyle {
    fn name(&self) -> &'static str {
        "schema-enum-name-style"
    }

    fn check(&self, ctx: &SchemaContext, file: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for enum_def in &ctx.datamodel.enums {
            if self.ignore_enums.contains(&enum_def.name) {
                continue;
            }
            if self.style.matches(&enum_def.name) {
                continue;
            }

            let record = ctx.locator.enum_def(&enum_def.name);
            let mut diag = Diagnostic::new(
                DiagnosticCode::InvalidEnumName,
                Severity::Error,
                format!("Schema enum names must follow the {} style.", self.style),
            )
            .with_identifier(self.style.label(), &enum_def.name)
            .with_location(report_location(
                file,
                ctx,
                record.and_then(|r| r.name_position),
                Some(enum_def.name.len()),
            ));

            if let Some(record) = record {
                if let Some(suggestion) =
                    rename_suggestion(ctx, record, &enum_def.name, self.style, false)
                {
                    diag = diag.with_suggestion(suggestion);
                }
            }

            diagnostics.push(diag);
        }

        diagnostics
    }
}
