//! Analysis context assembly
//!
//! Glues extraction, the semantic parse, and the locator scan into one
//! context object that rule logic queries. The context is rebuilt from
//! scratch per document and carries no state between analyses; a host
//! running several rules over the same document builds it once and shares
//! it read-only.

use crate::carrier::{self, Extracted};
use crate::datamodel::Datamodel;
use crate::locator::SchemaLocator;
use crate::parser::DatamodelParser;

/// Everything a rule needs to check one schema document.
#[derive(Debug, Clone)]
pub struct SchemaContext {
    /// Raw schema text after carrier extraction
    pub schema: String,

    /// Semantic parse result from the collaborator
    pub datamodel: Datamodel,

    /// Position index built independently of the parser
    pub locator: SchemaLocator,

    /// Line offset introduced by carrier wrapping; 0 for raw schema files
    pub line_offset: usize,
}

impl SchemaContext {
    /// Build a context from host-document text.
    ///
    /// Returns `None` when the collaborator rejects the schema. A schema
    /// mid-edit is routinely invalid, so parse failure means "nothing to
    /// check", never an error to propagate.
    pub fn build(source_text: &str, parser: &dyn DatamodelParser) -> Option<Self> {
        let Extracted {
            schema,
            line_offset,
        } = carrier::extract(source_text);

        match parser.parse(&schema) {
            Ok(datamodel) => Some(Self {
                locator: SchemaLocator::scan(&schema),
                schema,
                datamodel,
                line_offset,
            }),
            Err(err) => {
                tracing::debug!(error = %err, "schema did not parse, skipping analysis");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ParseError, StructuralParser};
    use pretty_assertions::assert_eq;

    struct FailingParser;

    impl DatamodelParser for FailingParser {
        fn parse(&self, _schema: &str) -> Result<Datamodel, ParseError> {
            Err(ParseError::StrayDeclaration(1))
        }
    }

    struct CannedParser(Datamodel);

    impl DatamodelParser for CannedParser {
        fn parse(&self, _schema: &str) -> Result<Datamodel, ParseError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn builds_context_from_raw_schema() {
        let schema = "model User {\n  id String @id\n}";
        let ctx = SchemaContext::build(schema, &StructuralParser).unwrap();

        assert_eq!(ctx.schema, schema);
        assert_eq!(ctx.line_offset, 0);
        assert_eq!(ctx.datamodel.models[0].name, "User");
        assert!(ctx.locator.model("User").is_some());
    }

    #[test]
    fn builds_context_from_carrier_document() {
        let schema = "model User {\n  id String @id\n}";
        let ctx = SchemaContext::build(&crate::carrier::wrap(schema), &StructuralParser).unwrap();

        assert_eq!(ctx.schema, schema);
        assert_eq!(ctx.line_offset, 1);
        assert!(ctx.locator.model("User").is_some());
    }

    #[test]
    fn parse_failure_yields_no_context() {
        assert!(SchemaContext::build("model User {\n}", &FailingParser).is_none());
    }

    #[test]
    fn invalid_schema_yields_no_context() {
        assert!(SchemaContext::build("model User {\n  id String", &StructuralParser).is_none());
    }

    #[test]
    fn injected_collaborator_supplies_the_datamodel() {
        let canned: Datamodel = serde_json::from_str(
            r#"{"models": [{"name": "Ghost", "fields": [{"name": "id", "kind": "scalar"}]}], "enums": []}"#,
        )
        .unwrap();

        let ctx = SchemaContext::build("model User {\n}", &CannedParser(canned)).unwrap();
        assert_eq!(ctx.datamodel.models[0].name, "Ghost");
        // The locator still reflects the actual text: this is the
        // locator-miss shape rules must tolerate.
        assert!(ctx.locator.model("Ghost").is_none());
    }
}
