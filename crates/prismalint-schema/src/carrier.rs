//! Carrier document wrapping and extraction
//!
//! A host tool that only understands one source format can still process
//! schema text if that text is embedded verbatim inside a syntactically
//! valid carrier document. `wrap` produces the carrier; `extract` recovers
//! the schema along with the line offset the prologue introduced, so that
//! locator positions can later be translated back into carrier coordinates.

use std::sync::LazyLock;

use regex::Regex;

/// Binding name holding the embedded schema literal.
///
/// This is the only token `extract` searches for; it has to be unlikely to
/// collide with ordinary schema content.
pub const CARRIER_BINDING: &str = "__PRISMA_SCHEMA__";

// The literal body matches escape pairs as units so that an escaped
// backtick inside the schema does not terminate the literal early.
static CARRIER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)__PRISMA_SCHEMA__\s*=\s*String\.raw`((?:\\.|[^`\\])*)`\s*;?")
        .expect("valid pattern")
});

/// Result of extracting schema text from a (possibly wrapped) document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// The raw schema text, unescaped
    pub schema: String,

    /// Number of newline characters between the start of the carrier text
    /// and the first character of the embedded schema content; 0 when the
    /// input was not wrapped
    pub line_offset: usize,
}

/// Embed schema text in a carrier document.
///
/// Backticks and interpolation markers are escaped so the schema survives as
/// a raw-string literal. The epilogue references the binding to keep the
/// host tool from flagging it as unused. The prologue and epilogue are
/// line-count-stable across calls.
pub fn wrap(schema: &str) -> String {
    let escaped = schema.replace('`', "\\`").replace("${", "\\${");
    format!(
        "const {CARRIER_BINDING} = String.raw`\n{escaped}\n`\n;\nvoid {CARRIER_BINDING};\n"
    )
}

/// Recover schema text from a carrier document.
///
/// When the carrier pattern is absent the input is treated as already being
/// raw schema text with a zero line offset; this is the common case where
/// the host invokes analysis directly on a schema file. Exactly one leading
/// and one trailing newline introduced by the literal-block formatting are
/// stripped, and the escaping applied by [`wrap`] is reversed.
pub fn extract(source: &str) -> Extracted {
    let literal = match CARRIER_PATTERN.captures(source).and_then(|c| c.get(1)) {
        Some(m) => m,
        None => {
            return Extracted {
                schema: source.to_string(),
                line_offset: 0,
            }
        }
    };

    let mut body = literal.as_str();
    let mut content_start = literal.start();
    if let Some(stripped) = body.strip_prefix('\n') {
        body = stripped;
        content_start += 1;
    }
    if let Some(stripped) = body.strip_suffix('\n') {
        body = stripped;
    }

    let line_offset = source[..content_start].matches('\n').count();

    Extracted {
        schema: body.replace("\\`", "`").replace("\\${", "${"),
        line_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn round_trip_is_identity() {
        let schema = "model User {\n  id String @id\n}";
        let extracted = extract(&wrap(schema));
        assert_eq!(extracted.schema, schema);
    }

    #[test]
    fn round_trip_preserves_backticks_and_interpolation() {
        let schema = "model User {\n  /// default `${now}` docs\n  id String\n}";
        let extracted = extract(&wrap(schema));
        assert_eq!(extracted.schema, schema);
    }

    #[test]
    fn line_offset_matches_prologue() {
        let extracted = extract(&wrap("model User {\n}"));
        assert_eq!(extracted.line_offset, 1);
    }

    #[test]
    fn unwrapped_input_passes_through() {
        let schema = "enum Role {\n  ADMIN\n}";
        let extracted = extract(schema);
        assert_eq!(extracted.schema, schema);
        assert_eq!(extracted.line_offset, 0);
    }

    #[test]
    fn wrapped_document_keeps_binding_reference() {
        let carrier = wrap("model User {\n}");
        assert!(carrier.contains("void __PRISMA_SCHEMA__;"));
    }

    #[test]
    fn empty_schema_round_trips() {
        let extracted = extract(&wrap(""));
        assert_eq!(extracted.schema, "");
    }

    #[test]
    fn trailing_newline_in_schema_survives() {
        let schema = "model User {\n}\n";
        let extracted = extract(&wrap(schema));
        assert_eq!(extracted.schema, schema);
    }
}
