//! db-table-name-style: effective table names follow the configured style
//!
//! The effective table name is the `@@map` value when present and the model
//! name otherwise.

use prismalint_core::{Diagnostic, DiagnosticCode, NamingStyle, RuleOptions, Severity, UnknownStyleError};
use prismalint_schema::SchemaContext;

use crate::rule::Rule;
use crate::support::{preferred_position, rename_suggestion, report_location};

#[derive(Debug)]
pub struct DbTableNameStyle {
    style: NamingStyle,
    ignore_models: Vec<String>,
}

impl DbTableNameStyle {
    pub const DEFAULT_STYLE: NamingStyle = NamingStyle::SnakeCase;

    pub fn from_options(options: &RuleOptions) -> Result<Self, UnknownStyleError> {
        Ok(Self {
            style: NamingStyle::resolve(options.style.as_deref(), Self::DEFAULT_STYLE)?,
            ignore_models: options.ignore_models.clone(),
        })
    }
}

impl Rule for DbTableNameStyle {
    fn name(&self) -> &'static str {
        "db-table-name-style"
    }

    fn check(&self, ctx: &SchemaContext, file: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for model in &ctx.datamodel.models {
            if model.is_generated || self.ignore_models.contains(&model.name) {
                continue;
            }

            let record = ctx.locator.model(&model.name);
            let map_value = record.and_then(|r| r.map_value.clone());
            let effective = map_value.as_deref().unwrap_or(&model.name);
            if self.style.matches(effective) {
                continue;
            }

            let prefer_map = map_value.is_some();
            let mut diag = Diagnostic::new(
                DiagnosticCode::InvalidTableName,
                Severity::Error,
                format!("Database table names must follow the {} style.", self.style),
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
                    rename_suggestion(ctx, record, &model.name, self.style, prefer_map)
                {
                    diag = diag.with_suggestion(suggestion);
                }
            }

            diagnostics.push(diag);
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prismalint_schema::StructuralParser;
    use pretty_assertions::assert_eq;

    fn check(schema: &str, options: &RuleOptions) -> Vec<Diagnostic> {
        let ctx = SchemaContext::build(schema, &StructuralParser).unwrap();
        DbTableNameStyle::from_options(options)
            .unwrap()
            .check(&ctx, "schema.prisma")
    }

    #[test]
    fn mapped_snake_case_table_is_accepted() {
        let diags = check(
            "model UserAccount {\n  id String @id\n  @@map(\"user_accounts\")\n}",
            &RuleOptions::default(),
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn unmapped_pascal_model_reports_against_model_name() {
        let schema = "model UserAccount {\n  id String @id\n}";
        let diags = check(schema, &RuleOptions::default());

        assert_eq!(diags.len(), 1);
        let diag = &diags[0];
        assert_eq!(diag.actual.as_deref(), Some("UserAccount"));
        assert_eq!(diag.location.as_ref().unwrap().line, Some(1));

        let suggestion = diag.suggestion.as_ref().unwrap();
        assert_eq!(suggestion.replacement, "user_account");
        assert_eq!(&schema[suggestion.range.0..suggestion.range.1], "UserAccount");
    }

    #[test]
    fn invalid_map_value_reports_at_attribute_and_fixes_the_value() {
        let schema = "model UserAccount {\n  id String @id\n  @@map(\"UserAccounts\")\n}";
        let diags = check(schema, &RuleOptions::default());

        assert_eq!(diags.len(), 1);
        let diag = &diags[0];
        // Alias position takes precedence when an alias value exists.
        assert_eq!(diag.location.as_ref().unwrap().line, Some(3));
        assert_eq!(diag.location.as_ref().unwrap().column, Some(2));

        let suggestion = diag.suggestion.as_ref().unwrap();
        assert_eq!(suggestion.replacement, "user_accounts");
        assert_eq!(&schema[suggestion.range.0..suggestion.range.1], "UserAccounts");
    }

    #[test]
    fn ignored_models_are_skipped() {
        let options = RuleOptions {
            ignore_models: vec!["UserAccount".to_string()],
            ..RuleOptions::default()
        };
        assert!(check("model UserAccount {\n  id String @id\n}", &options).is_empty());
    }
}
