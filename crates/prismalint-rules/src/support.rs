//! Location and suggestion helpers shared by the rules

use prismalint_core::{Location, NamingStyle, Suggestion};
use prismalint_schema::{
    apply_line_offset, map_value_range, source_range, EntityRecord, ReportSpan, SchemaContext,
    SourcePosition,
};

/// Pick the position to anchor a diagnostic at.
///
/// The alias-attribute position takes precedence when an alias value exists,
/// falling back to the declared-name position; without an alias the order
/// reverses. This priority is deliberate: when both the declared name and
/// its alias are invalid, the single reported location is the alias.
pub(crate) fn preferred_position(
    record: &EntityRecord,
    prefer_map: bool,
) -> Option<SourcePosition> {
    if prefer_map {
        record.map_position.or(record.name_position)
    } else {
        record.name_position.or(record.map_position)
    }
}

/// Translate a locator position into a host report location.
///
/// `None` (a locator miss) degrades to a document-level anchor so the
/// diagnostic still surfaces; `length` widens the span over the identifier
/// when the token length is known, defaulting to a single character.
pub(crate) fn report_location(
    file: &str,
    ctx: &SchemaContext,
    position: Option<SourcePosition>,
    length: Option<usize>,
) -> Location {
    match position {
        Some(position) => {
            let start = apply_line_offset(position, ctx.line_offset);
            let span = match length {
                Some(length) => ReportSpan::with_length(start, length),
                None => ReportSpan::single(start),
            };
            Location::with_span(
                file,
                span.start.line,
                span.start.column,
                span.end.column - span.start.column,
            )
        }
        None => Location::new(file),
    }
}

/// Build the rename suggestion for an entity, or `None` when the
/// replacement range cannot be computed.
///
/// When `use_map` is set the suggestion rewrites the alias value in place
/// (re-scanning the attribute line; a stale line yields `None` and the
/// diagnostic goes out without a fix). Otherwise it rewrites the declared
/// name. Ranges are byte offsets into the raw schema text.
pub(crate) fn rename_suggestion(
    ctx: &SchemaContext,
    record: &EntityRecord,
    declared: &str,
    style: NamingStyle,
    use_map: bool,
) -> Option<Suggestion> {
    if use_map {
        let map_position = record.map_position?;
        let range = map_value_range(&ctx.schema, map_position.line)?;
        let value = record.map_value.as_deref()?;
        Some(Suggestion {
            replacement: style.convert(value),
            range,
        })
    } else {
        let name_position = record.name_position?;
        Some(Suggestion {
            replacement: style.convert(declared),
            range: source_range(&ctx.schema, name_position, declared.len()),
        })
    }
}
