//! db-enum-name-style: effective database enum names follow the configured
//! style
//!
//! The effective name is the enum's `@@map` value when present and the
//! declared enum name otherwise.

use prismalint_core::{Diagnostic, DiagnosticCode, NamingStyle, RuleOptions, Severity, UnknownStyleError};
use prismalint_schema::SchemaContext;

use crate::rule::Rule;
use crate::support::{preferred_position, rename_suggestion, report_location};

#[derive(Debug)]
pub struct DbEnumNameStyle {
    style: NamingStyle,
    ignore_enums: Vec<String>,
}

impl DbEnumNameStyle {
    pub const DEFAULT_STYLE: NamingStyle = NamingStyle::SnakeCase;

    pub fn from_options(options: &RuleOptions) -> Result<Self, UnknownStyleError> {
        Ok(Self {
            style: NamingStyle::resolve(options.style.as_deref(), Self::DEFAULT_STYLE)?,
            ignore_enums: options.ignore_enums.clone(),
        })
    }
}

impl Rule for DbEnumNameStyle {
    fn name(&self) -> &'static str {
        "db-enum-name-style"
    }

    fn check(&self, ctx: &SchemaContext, file: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for enum_def in &ctx.datamodel.enums {
            if self.ignore_enums.contains(&enum_def.name) {
                continue;
            }

            let record = ctx.locator.enum_def(&enum_def.name);
            let map_value = record.and_then(|r| r.map_value.clone());
            let effective = map_value.as_deref().unwrap_or(&enum_def.name);
            if self.style.matches(effective) {
                continue;
            }

            let prefer_map = map_value.is_some();
            let mut diag = Diagnostic::new(
                DiagnosticCode::InvalidDbEnumName,
                Severity::Error,
                format!("Database enum names must follow the {} style.", self.style),
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
                    rename_suggestion(ctx, record, &enum_def.name, self.style, prefer_map)
                {
                    diag = diag.with_suggestion(suggestion);
                }
            }

            diagnostics.push(diag);
        }

        diagnostics
    }
}
