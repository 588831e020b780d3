//! Schema location and coordinate mapping
//!
//! This crate handles:
//! - Wrapping schema text into a carrier document and extracting it back
//! - Locating every named schema entity with a line-oriented scan
//! - Translating locator positions into host-document report spans and
//!   byte ranges for rename suggestions
//! - Building one cohesive [`SchemaContext`] for rule logic

pub mod carrier;
pub mod context;
pub mod datamodel;
pub mod locator;
pub mod parser;
pub mod position;

pub use carrier::{extract, wrap, Extracted};
pub use context::SchemaContext;
pub use datamodel::{Datamodel, EnumDef, EnumValue, Field, FieldKind, Model};
pub use locator::{EntityRecord, SchemaLocator, SourcePosition};
pub use parser::{DatamodelParser, ParseError, StructuralParser};
pub use position::{apply_line_offset, map_value_range, source_range, LineIndex, ReportSpan};
