//! End-to-end rule tests over small schemas
//!
//! These exercise the full pipeline the CLI uses: carrier extraction,
//! structural parse, locator scan, rule checks, and suggestion ranges
//! applied back to the schema text.

use prismalint_core::{Config, RuleOptions};
use prismalint_rules::{default_rules, DbEnumNameStyle, Rule, SchemaFieldNameStyle};
use prismalint_schema::{
    wrap, Datamodel, DatamodelParser, ParseError, SchemaContext, SchemaLocator, StructuralParser,
};
use pretty_assertions::assert_eq;

fn apply_suggestion(text: &str, range: (usize, usize), replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..range.0]);
    out.push_str(replacement);
    out.push_str(&text[range.1..]);
    out
}

#[test]
fn field_rename_suggestion_applies_cleanly() {
    let schema = "model ExampleModel {\n  id String @id\n  exampleFieldId String\n}";
    let ctx = SchemaContext::build(schema, &StructuralParser).unwrap();

    let rule = SchemaFieldNameStyle::from_options(&RuleOptions {
        style: Some("snake_case".to_string()),
        ..RuleOptions::default()
    })
    .unwrap();

    let diags = rule.check(&ctx, "schema.prisma");
    assert_eq!(diags.len(), 1);

    let location = diags[0].location.as_ref().unwrap();
    assert_eq!((location.line, location.column), (Some(3), Some(2)));

    let suggestion = diags[0].suggestion.as_ref().unwrap();
    let fixed = apply_suggestion(schema, suggestion.range, &suggestion.replacement);
    assert_eq!(
        fixed,
        "model ExampleModel {\n  id String @id\n  example_field_id String\n}"
    );
}

#[test]
fn enum_map_value_violation_reports_attribute_position() {
    let schema = "enum ExampleEnum {\n  VALUE\n  @@map(\"ExampleEnum\")\n}";
    let ctx = SchemaContext::build(schema, &StructuralParser).unwrap();

    let rule = DbEnumNameStyle::from_options(&RuleOptions::default()).unwrap();
    let diags = rule.check(&ctx, "schema.prisma");

    assert_eq!(diags.len(), 1);
    let location = diags[0].location.as_ref().unwrap();
    assert_eq!((location.line, location.column), (Some(3), Some(2)));
    assert_eq!(diags[0].actual.as_deref(), Some("ExampleEnum"));
}

#[test]
fn carrier_wrapped_document_shifts_report_lines() {
    let schema = "model ExampleModel {\n  id String @id\n  exampleFieldId String\n}";
    let ctx = SchemaContext::build(&wrap(schema), &StructuralParser).unwrap();
    assert_eq!(ctx.line_offset, 1);

    let rule = SchemaFieldNameStyle::from_options(&RuleOptions {
        style: Some("snake_case".to_string()),
        ..RuleOptions::default()
    })
    .unwrap();

    let diags = rule.check(&ctx, "schema.prisma");
    let location = diags[0].location.as_ref().unwrap();
    // Line 3 in the schema is line 4 in the carrier document.
    assert_eq!(location.line, Some(4));
    assert_eq!(location.column, Some(2));

    // Suggestion ranges stay schema-relative, so the fix still applies.
    let suggestion = diags[0].suggestion.as_ref().unwrap();
    assert_eq!(
        &ctx.schema[suggestion.range.0..suggestion.range.1],
        "exampleFieldId"
    );
}

struct CannedParser(Datamodel);

impl DatamodelParser for CannedParser {
    fn parse(&self, _schema: &str) -> Result<Datamodel, ParseError> {
        Ok(self.0.clone())
    }
}

#[test]
fn locator_miss_degrades_to_document_anchor() {
    // The collaborator reports a model the locator cannot find in the text.
    let datamodel: Datamodel = serde_json::from_str(
        r#"{"models": [{"name": "Phantom_Model", "fields": []}], "enums": []}"#,
    )
    .unwrap();

    let schema = "model RealModel {\n  id String @id\n}";
    let ctx = SchemaContext {
        locator: SchemaLocator::scan(schema),
        schema: schema.to_string(),
        datamodel,
        line_offset: 0,
    };

    let rules = default_rules(&Config::default()).unwrap();
    let diags: Vec<_> = rules
        .iter()
        .flat_map(|rule| rule.check(&ctx, "schema.prisma"))
        .collect();

    // schema-model-name-style and db-table-name-style both flag the name;
    // neither has a position or a suggestion, and neither panics.
    assert_eq!(diags.len(), 1 + 1);
    for diag in &diags {
        let location = diag.location.as_ref().unwrap();
        assert_eq!(location.file, "schema.prisma");
        assert_eq!(location.line, None);
        assert!(diag.suggestion.is_none());
    }
}

#[test]
fn clean_schema_produces_no_diagnostics() {
    let schema = concat!(
        "model UserAccount {\n",
        "  id String @id\n",
        "  createdAt DateTime @map(\"created_at\")\n",
        "  role UserRole\n",
        "  @@map(\"user_accounts\")\n",
        "}\n",
        "\n",
        "enum UserRole {\n",
        "  ADMIN @map(\"admin\")\n",
        "  MEMBER @map(\"member\")\n",
        "  @@map(\"user_role\")\n",
        "}\n",
    );
    let ctx = SchemaContext::build(schema, &StructuralParser).unwrap();

    let rules = default_rules(&Config::default()).unwrap();
    let diags: Vec<_> = rules
        .iter()
        .flat_map(|rule| rule.check(&ctx, "schema.prisma"))
        .collect();

    assert_eq!(diags, vec![]);
}

#[test]
fn unparsable_schema_yields_no_context() {
    assert!(SchemaContext::build("model Broken {\n  id String", &StructuralParser).is_none());
}
