//! Entity location index
//!
//! A single forward pass over the schema text records where every model,
//! field, enum, and enum value is declared, along with the position and
//! quoted value of its `@map`/`@@map` alias attribute when present. The
//! scan is deliberately independent of the semantic parser: it re-derives
//! positions from the raw text so the parser's own position info is never
//! needed. Only the grammar subset required for positional lookup is
//! recognized (top-level `model`/`enum` blocks, member lines, single-line
//! map attributes); the semantic parser stays the authority on structural
//! validity.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Position within the raw schema text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    /// 1-based line number
    pub line: usize,

    /// 0-based byte column within the line
    pub column: usize,
}

/// Everything the locator knows about one named entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityRecord {
    /// Position of the declared name
    pub name_position: Option<SourcePosition>,

    /// Position of the `@map`/`@@map` attribute keyword, if present
    pub map_position: Option<SourcePosition>,

    /// Quoted value of the map attribute, if present
    pub map_value: Option<String>,
}

impl EntityRecord {
    fn at(position: SourcePosition) -> Self {
        Self {
            name_position: Some(position),
            map_position: None,
            map_value: None,
        }
    }
}

/// Index from entity names to their declaration and alias positions.
///
/// Member-level entities (fields, enum values) are keyed by the composite
/// `(owner, member)` name pair. An entity present in the semantic parse
/// result but absent here is a locator miss; callers degrade to a
/// document-level anchor rather than failing.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SchemaLocator {
    models: HashMap<String, EntityRecord>,
    enums: HashMap<String, EntityRecord>,
    fields: HashMap<(String, String), EntityRecord>,
    enum_values: HashMap<(String, String), EntityRecord>,
}

// Header patterns are anchored so member lines never open a block: a field
// named `model` or `enum` lacks the trailing `{` and falls through to the
// member-line patterns.
static MODEL_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*model\s+(\w+)\s*\{").expect("valid pattern"));
static ENUM_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*enum\s+(\w+)\s*\{").expect("valid pattern"));
static FIELD_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\w+)\s+\S+").expect("valid pattern"));
static VALUE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\w+)").expect("valid pattern"));
static BLOCK_MAP_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"@@map\("([^"]+)"\)"#).expect("valid pattern"));
static MEMBER_MAP_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"@map\("([^"]+)"\)"#).expect("valid pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
enum BlockState {
    Outside,
    InModel(String),
    InEnum(String),
}

impl SchemaLocator {
    /// Build the index from schema text.
    pub fn scan(schema: &str) -> Self {
        let mut locator = Self::default();
        let mut state = BlockState::Outside;

        for (index, line) in schema.lines().enumerate() {
            let line_number = index + 1;
            let trimmed = line.trim();

            if trimmed.starts_with("//") {
                continue;
            }

            if let Some(caps) = MODEL_HEADER.captures(line) {
                let name = caps[1].to_string();
                locator
                    .models
                    .insert(name.clone(), EntityRecord::at(position_of(line, line_number, &name)));
                state = BlockState::InModel(name);
                continue;
            }

            if let Some(caps) = ENUM_HEADER.captures(line) {
                let name = caps[1].to_string();
                locator
                    .enums
                    .insert(name.clone(), EntityRecord::at(position_of(line, line_number, &name)));
                state = BlockState::InEnum(name);
                continue;
            }

            if trimmed.starts_with('}') {
                state = BlockState::Outside;
                continue;
            }

            match &state {
                BlockState::Outside => {}
                BlockState::InModel(model) => {
                    if trimmed.starts_with("@@map") {
                        let record = locator.models.entry(model.clone()).or_default();
                        record.map_position = Some(position_of(line, line_number, "@@map"));
                        if let Some(caps) = BLOCK_MAP_VALUE.captures(trimmed) {
                            record.map_value = Some(caps[1].to_string());
                        }
                    } else if trimmed.starts_with("@@") || trimmed.starts_with('@') {
                        // other block and field attributes carry no names we index
                    } else if let Some(caps) = FIELD_LINE.captures(line) {
                        let field = caps[1].to_string();
                        let key = (model.clone(), field.clone());
                        let record = locator
                            .fields
                            .entry(key)
                            .or_insert_with(|| EntityRecord::at(position_of(line, line_number, &field)));
                        if let Some(caps) = MEMBER_MAP_VALUE.captures(trimmed) {
                            record.map_value = Some(caps[1].to_string());
                            record.map_position = Some(position_of(line, line_number, "@map"));
                        }
                    }
                }
                BlockState::InEnum(enum_name) => {
                    if trimmed.starts_with("@@map") {
                        let record = locator.enums.entry(enum_name.clone()).or_default();
                        record.map_position = Some(position_of(line, line_number, "@@map"));
                        if let Some(caps) = BLOCK_MAP_VALUE.captures(trimmed) {
                            record.map_value = Some(caps[1].to_string());
                        }
                    } else if trimmed.starts_with("@@") || trimmed.starts_with('@') || trimmed.is_empty()
                    {
                        // attribute or blank line, nothing to index
                    } else if let Some(caps) = VALUE_LINE.captures(line) {
                        let value = caps[1].to_string();
                        let key = (enum_name.clone(), value.clone());
                        let record = locator
                            .enum_values
                            .entry(key)
                            .or_insert_with(|| EntityRecord::at(position_of(line, line_number, &value)));
                        if let Some(caps) = MEMBER_MAP_VALUE.captures(trimmed) {
                            record.map_value = Some(caps[1].to_string());
                            record.map_position = Some(position_of(line, line_number, "@map"));
                        }
                    }
                }
            }
        }

        // Residual InModel/InEnum state from an unterminated block is
        // discarded; brace balance is the semantic parser's concern.
        locator
    }

    /// Look up a model by declared name.
    pub fn model(&self, name: &str) -> Option<&EntityRecord> {
        self.models.get(name)
    }

    /// Look up a field by owning model and declared name.
    pub fn field(&self, model: &str, field: &str) -> Option<&EntityRecord> {
        self.fields.get(&(model.to_string(), field.to_string()))
    }

    /// Look up an enum by declared name.
    pub fn enum_def(&self, name: &str) -> Option<&EntityRecord> {
        self.enums.get(name)
    }

    /// Look up an enum value by owning enum and declared name.
    pub fn enum_value(&self, enum_name: &str, value: &str) -> Option<&EntityRecord> {
        self.enum_values
            .get(&(enum_name.to_string(), value.to_string()))
    }
}

/// Column of the first occurrence of `needle` in the line, 0 on miss.
///
/// The match that produced `needle` came from this line, so the miss case
/// should not happen; 0 keeps the scan total instead of panicking.
fn position_of(line: &str, line_number: usize, needle: &str) -> SourcePosition {
    SourcePosition {
        line: line_number,
        column: line.find(needle).unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCHEMA: &str = "model ExampleModel {\n  id String @id\n  exampleFieldId String\n}";

    #[test]
    fn locates_model_and_fields() {
        let locator = SchemaLocator::scan(SCHEMA);

        let model = locator.model("ExampleModel").unwrap();
        assert_eq!(model.name_position, Some(SourcePosition { line: 1, column: 6 }));

        let id = locator.field("ExampleModel", "id").unwrap();
        assert_eq!(id.name_position, Some(SourcePosition { line: 2, column: 2 }));

        let field = locator.field("ExampleModel", "exampleFieldId").unwrap();
        assert_eq!(field.name_position, Some(SourcePosition { line: 3, column: 2 }));
    }

    #[test]
    fn records_field_map_value_and_position() {
        let schema = "model User {\n  id String @id\n  createdAt DateTime @map(\"created_at\")\n}";
        let locator = SchemaLocator::scan(schema);

        let field = locator.field("User", "createdAt").unwrap();
        assert_eq!(field.map_value.as_deref(), Some("created_at"));
        assert_eq!(field.map_position, Some(SourcePosition { line: 3, column: 21 }));
    }

    #[test]
    fn records_model_map() {
        let schema = "model User {\n  id String @id\n  @@map(\"users\")\n}";
        let locator = SchemaLocator::scan(schema);

        let model = locator.model("User").unwrap();
        assert_eq!(model.map_value.as_deref(), Some("users"));
        assert_eq!(model.map_position, Some(SourcePosition { line: 3, column: 2 }));
    }

    #[test]
    fn locates_enum_and_values() {
        let schema = "enum ExampleEnum {\n  VALUE\n  @@map(\"ExampleEnum\")\n}";
        let locator = SchemaLocator::scan(schema);

        let enum_record = locator.enum_def("ExampleEnum").unwrap();
        assert_eq!(enum_record.name_position, Some(SourcePosition { line: 1, column: 5 }));
        assert_eq!(enum_record.map_value.as_deref(), Some("ExampleEnum"));
        assert_eq!(enum_record.map_position, Some(SourcePosition { line: 3, column: 2 }));

        let value = locator.enum_value("ExampleEnum", "VALUE").unwrap();
        assert_eq!(value.name_position, Some(SourcePosition { line: 2, column: 2 }));
    }

    #[test]
    fn enum_value_with_own_map() {
        let schema = "enum Role {\n  ADMIN @map(\"admin\")\n}";
        let locator = SchemaLocator::scan(schema);

        let value = locator.enum_value("Role", "ADMIN").unwrap();
        assert_eq!(value.map_value.as_deref(), Some("admin"));
        assert_eq!(value.map_position, Some(SourcePosition { line: 2, column: 8 }));
    }

    #[test]
    fn member_named_model_does_not_open_block() {
        let schema =
            "model Container {\n  model String\n  next String\n}\nmodel Other {\n  id String @id\n}";
        let locator = SchemaLocator::scan(schema);

        // `model String` stays a member of Container; the following field is
        // still attributed to the enclosing model.
        assert!(locator.field("Container", "model").is_some());
        assert_eq!(
            locator.field("Container", "next").unwrap().name_position,
            Some(SourcePosition { line: 3, column: 2 })
        );
        assert!(locator.model("String").is_none());
    }

    #[test]
    fn member_named_enum_does_not_open_block() {
        let schema = "model Container {\n  enum String\n  after String\n}";
        let locator = SchemaLocator::scan(schema);

        assert!(locator.field("Container", "enum").is_some());
        assert!(locator.field("Container", "after").is_some());
        assert!(locator.enum_def("String").is_none());
    }

    #[test]
    fn comments_and_attributes_are_skipped() {
        let schema = "model User {\n  // id String @id\n  @@index([name])\n  name String\n}";
        let locator = SchemaLocator::scan(schema);

        assert!(locator.field("User", "id").is_none());
        assert!(locator.field("User", "name").is_some());
    }

    #[test]
    fn closing_brace_resets_state() {
        let schema = "model A {\n  x String\n}\nstray String\nmodel B {\n  y String\n}";
        let locator = SchemaLocator::scan(schema);

        // `stray` sits outside any block and is not indexed anywhere.
        assert!(locator.field("A", "stray").is_none());
        assert!(locator.field("B", "stray").is_none());
        assert!(locator.field("B", "y").is_some());
    }

    #[test]
    fn unterminated_block_is_discarded_quietly() {
        let schema = "model A {\n  x String";
        let locator = SchemaLocator::scan(schema);

        assert!(locator.model("A").is_some());
        assert!(locator.field("A", "x").is_some());
    }

    #[test]
    fn entering_enum_clears_model_state() {
        let schema = "model A {\n  x String\nenum E {\n  V\n}";
        let locator = SchemaLocator::scan(schema);

        // The unterminated model block ends the moment the enum header is
        // seen; V belongs to E, not A.
        assert!(locator.enum_value("E", "V").is_some());
        assert!(locator.field("A", "V").is_none());
    }
}
