//! Semantic parse result types
//!
//! Mirrors the structured document the external semantic parser returns:
//! models with fields, enums with values, each member tagged with a kind
//! discriminator. The types deserialize from JSON so a canned collaborator
//! response can stand in during tests.

use serde::{Deserialize, Serialize};

/// A parsed schema document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datamodel {
    #[serde(default)]
    pub models: Vec<Model>,

    #[serde(default)]
    pub enums: Vec<EnumDef>,
}

/// A model block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,

    #[serde(default)]
    pub fields: Vec<Field>,

    /// Set by the parser for implicit relation models; generated models are
    /// never checked by naming rules.
    #[serde(default)]
    pub is_generated: bool,
}

/// A field member of a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,

    pub kind: FieldKind,
}

/// Kind discriminator for fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Built-in scalar type
    Scalar,

    /// Relation to another model
    Object,

    /// Reference to a declared enum
    Enum,

    /// `Unsupported("...")` database type
    Unsupported,
}

/// An enum block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDef {
    pub name: String,

    #[serde(default)]
    pub values: Vec<EnumValue>,
}

/// A value member of an enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
}
