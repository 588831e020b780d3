//! Rule trait and registry

use prismalint_core::{Config, ConfigError, Diagnostic};
use prismalint_schema::SchemaContext;

use crate::{
    DbColumnNameStyle, DbEnumNameStyle, DbEnumValueStyle, DbTableNameStyle, SchemaEnumNameStyle,
    SchemaEnumValueStyle, SchemaFieldNameStyle, SchemaModelNameStyle,
};

/// A naming rule over one analyzed schema document.
///
/// Rules are stateless between documents; the context is built once per
/// document and shared read-only across the whole batch.
pub trait Rule: std::fmt::Debug {
    /// Stable rule name, as used in configuration.
    fn name(&self) -> &'static str;

    /// Check the document and return zero or more diagnostics.
    fn check(&self, ctx: &SchemaContext, file: &str) -> Vec<Diagnostic>;
}

/// Construct the full rule catalog from configuration.
///
/// Style strings are resolved here; an unresolvable style aborts setup with
/// a configuration error rather than falling back to a default. Rules named
/// in `rules.disabled` are dropped after construction so their options are
/// still validated.
pub fn default_rules(config: &Config) -> Result<Vec<Box<dyn Rule>>, ConfigError> {
    let options = &config.rules;

    let mut rules: Vec<Box<dyn Rule>> = vec![
        Box::new(SchemaModelNameStyle::from_options(&options.schema_model_name_style)?),
        Box::new(SchemaFieldNameStyle::from_options(&options.schema_field_name_style)?),
        Box::new(SchemaEnumNameStyle::from_options(&options.schema_enum_name_style)?),
        Box::new(SchemaEnumValueStyle::from_options(&options.schema_enum_value_style)?),
        Box::new(DbTableNameStyle::from_options(&options.db_table_name_style)?),
        Box::new(DbColumnNameStyle::from_options(&options.db_column_name_style)?),
        Box::new(DbEnumNameStyle::from_options(&options.db_enum_name_style)?),
        Box::new(DbEnumValueStyle::from_options(&options.db_enum_value_style)?),
    ];

    rules.retain(|rule| !options.disabled.iter().any(|name| name == rule.name()));
    Ok(rules)
}
