//! Semantic parser collaborator
//!
//! The semantic parser is an injected dependency so the rest of the crate
//! can be exercised with a fake returning canned results. The built-in
//! [`StructuralParser`] is the default collaborator: unlike the locator's
//! positional scan it validates block structure and rejects malformed
//! schemas, making it the authority on whether there is anything to check.

use std::sync::LazyLock;

use regex::Regex;

use crate::datamodel::{Datamodel, EnumDef, EnumValue, Field, FieldKind, Model};

/// Turns schema text into a structured [`Datamodel`].
pub trait DatamodelParser {
    fn parse(&self, schema: &str) -> Result<Datamodel, ParseError>;
}

/// The schema text is not structurally valid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("malformed {kind} header at line {line}")]
    MalformedHeader { kind: &'static str, line: usize },

    #[error("unexpected closing brace at line {0}")]
    UnexpectedClosingBrace(usize),

    #[error("unclosed block starting at line {0}")]
    UnclosedBlock(usize),

    #[error("declaration outside of a block at line {0}")]
    StrayDeclaration(usize),
}

const SCALAR_TYPES: &[&str] = &[
    "String", "Int", "BigInt", "Float", "Decimal", "Boolean", "DateTime", "Json", "Bytes",
];

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(model|enum|datasource|generator|type|view)\b(?:\s+(\w+))?\s*(\{)?")
        .expect("valid pattern")
});
static MEMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(\w+)(?:\s+([\w\.]+(?:\(.*?\))?))?"#).expect("valid pattern")
});

/// A model block under construction, with the raw base type token of each
/// field kept alongside for the enum-resolution pass.
#[derive(Debug)]
struct ModelDraft {
    model: Model,
    field_types: Vec<String>,
}

#[derive(Debug)]
enum Block {
    Model(ModelDraft),
    Enum(EnumDef),
    Other,
}

/// Built-in structural parser.
///
/// Recognizes top-level `model`, `enum`, `datasource`, `generator`, `type`,
/// and `view` blocks, classifies field kinds by type token, and errors on
/// unbalanced braces or malformed headers. Fields whose type token names a
/// declared enum are reclassified in a fix-up pass once all enums are known.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralParser;

impl DatamodelParser for StructuralParser {
    fn parse(&self, schema: &str) -> Result<Datamodel, ParseError> {
        let mut drafts: Vec<ModelDraft> = Vec::new();
        let mut enums: Vec<EnumDef> = Vec::new();
        let mut current: Option<Block> = None;
        let mut block_start = 0;

        for (index, line) in schema.lines().enumerate() {
            let line_number = index + 1;
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }

            if trimmed.starts_with('}') {
                match current.take() {
                    Some(Block::Model(draft)) => drafts.push(draft),
                    Some(Block::Enum(enum_def)) => enums.push(enum_def),
                    Some(Block::Other) => {}
                    None => return Err(ParseError::UnexpectedClosingBrace(line_number)),
                }
                continue;
            }

            match current.as_mut() {
                None => {
                    let caps = HEADER
                        .captures(line)
                        .ok_or(ParseError::StrayDeclaration(line_number))?;
                    let name = caps.get(2).map(|m| m.as_str().to_string());
                    let has_brace = caps.get(3).is_some();

                    current = Some(match &caps[1] {
                        kind @ ("model" | "view") => {
                            let name = require_header(name, has_brace, "model", line_number)?;
                            Block::Model(ModelDraft {
                                model: Model {
                                    name,
                                    fields: Vec::new(),
                                    is_generated: kind == "view",
                                },
                                field_types: Vec::new(),
                            })
                        }
                        "enum" => {
                            let name = require_header(name, has_brace, "enum", line_number)?;
                            Block::Enum(EnumDef {
                                name,
                                values: Vec::new(),
                            })
                        }
                        _ => Block::Other,
                    });
                    block_start = line_number;
                }
                Some(Block::Model(draft)) => {
                    if trimmed.starts_with('@') {
                        continue;
                    }
                    if let Some(caps) = MEMBER.captures(line) {
                        if let Some(type_token) = caps.get(2) {
                            draft.model.fields.push(Field {
                                name: caps[1].to_string(),
                                kind: classify_type(type_token.as_str()),
                            });
                            draft.field_types.push(base_type(type_token.as_str()));
                        }
                    }
                }
                Some(Block::Enum(enum_def)) => {
                    if trimmed.starts_with('@') {
                        continue;
                    }
                    if let Some(caps) = MEMBER.captures(line) {
                        enum_def.values.push(EnumValue {
                            name: caps[1].to_string(),
                        });
                    }
                }
                Some(Block::Other) => {}
            }
        }

        if current.is_some() {
            return Err(ParseError::UnclosedBlock(block_start));
        }

        Ok(assemble(drafts, enums))
    }
}

fn require_header(
    name: Option<String>,
    has_brace: bool,
    kind: &'static str,
    line: usize,
) -> Result<String, ParseError> {
    match name {
        Some(name) if has_brace => Ok(name),
        _ => Err(ParseError::MalformedHeader { kind, line }),
    }
}

/// Strip optional/list modifiers and any `(...)` argument from a type token.
fn base_type(type_token: &str) -> String {
    let token = type_token
        .split('(')
        .next()
        .unwrap_or(type_token)
        .trim_end_matches("[]")
        .trim_end_matches('?');
    token.to_string()
}

fn classify_type(type_token: &str) -> FieldKind {
    let base = base_type(type_token);
    if base == "Unsupported" {
        FieldKind::Unsupported
    } else if SCALAR_TYPES.contains(&base.as_str()) {
        FieldKind::Scalar
    } else {
        // Relation or enum reference; disambiguated once all enums are known.
        FieldKind::Object
    }
}

fn assemble(drafts: Vec<ModelDraft>, enums: Vec<EnumDef>) -> Datamodel {
    let mut datamodel = Datamodel {
        models: Vec::with_capacity(drafts.len()),
        enums,
    };

    for draft in drafts {
        let ModelDraft {
            mut model,
            field_types,
        } = draft;
        for (field, base) in model.fields.iter_mut().zip(field_types) {
            if field.kind == FieldKind::Object
                && datamodel.enums.iter().any(|e| e.name == base)
            {
                field.kind = FieldKind::Enum;
            }
        }
        datamodel.models.push(model);
    }

    datamodel
}
