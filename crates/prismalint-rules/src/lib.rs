//! Naming rules for Prisma schemas
//!
//! Each rule checks one class of identifier against a configured case
//! convention. Schema-side rules validate declared names; database-side
//! rules validate the effective storage name, which is the `@map`/`@@map`
//! value when present and the declared name otherwise.

pub mod db_column_name;
pub mod db_enum_name;
pub mod db_enum_value;
pub mod db_table_name;
pub mod rule;
pub mod schema_enum_name;
pub mod schema_enum_value;
pub mod schema_field_name;
pub mod schema_model_name;

mod support;

pub use db_column_name::DbColumnNameStyle;
pub use db_enum_name::DbEnumNameStyle;
pub use db_enum_value::DbEnumValueStyle;
pub use db_table_name::DbTableNameStyle;
pub use rule::{default_rules, Rule};
pub use schema_enum_name::SchemaEnumNameStyle;
pub use schema_enum_value::SchemaEnumValueStyle;
pub use schema_field_name::SchemaFieldNameStyle;
pub use schema_model_name::SchemaModelNameStyle;
