//! Naming-style classification and conversion
//!
//! Identifiers are validated against one of four case conventions and, when
//! they fail, rewritten into the configured convention to build rename
//! suggestions. Classification and conversion are independent: conversion is
//! only ever used to generate suggestion text, never to validate.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// One of the four supported case conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingStyle {
    /// lowercase words joined by underscores (`example_field_id`)
    SnakeCase,

    /// first word lowercase, subsequent words capitalized (`exampleFieldId`)
    CamelCase,

    /// every word capitalized, no separators (`ExampleFieldId`)
    PascalCase,

    /// uppercase words joined by underscores (`EXAMPLE_FIELD_ID`)
    ScreamingSnakeCase,
}

/// Per-style predicate and word-join function.
///
/// Adding a style means adding one entry here plus one enum variant; no
/// scattered `match` arms need to change.
struct StyleEntry {
    label: &'static str,
    matches: fn(&str) -> bool,
    join: fn(&[String]) -> String,
}

static STYLE_TABLE: [StyleEntry; 4] = [
    StyleEntry {
        label: "snake_case",
        matches: is_snake_case,
        join: |words| {
            words
                .iter()
                .map(|w| w.to_lowercase())
                .collect::<Vec<_>>()
                .join("_")
        },
    },
    StyleEntry {
        label: "camelCase",
        matches: is_camel_case,
        join: |words| {
            words
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    if i == 0 {
                        w.to_lowercase()
                    } else {
                        capitalize(w)
                    }
                })
                .collect()
        },
    },
    StyleEntry {
        label: "PascalCase",
        matches: is_pascal_case,
        join: |words| words.iter().map(|w| capitalize(w)).collect(),
    },
    StyleEntry {
        label: "SCREAMING_SNAKE_CASE",
        matches: is_screaming_snake_case,
        join: |words| {
            words
                .iter()
                .map(|w| w.to_uppercase())
                .collect::<Vec<_>>()
                .join("_")
        },
    },
];

static SNAKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]*(_[a-z0-9]+)*$").expect("valid pattern"));
static CAMEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-zA-Z0-9]*$").expect("valid pattern"));
static PASCAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9]*$").expect("valid pattern"));
static SCREAMING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9]*(_[A-Z0-9]+)*$").expect("valid pattern"));

/// `lowercase_words_with_underscores`, starting with a letter.
pub fn is_snake_case(value: &str) -> bool {
    SNAKE.is_match(value)
}

/// No underscores, starts with a lowercase letter.
///
/// A single lowercase word such as `id` is simultaneously valid snake_case
/// and camelCase; that overlap is intentional.
pub fn is_camel_case(value: &str) -> bool {
    CAMEL.is_match(value)
}

/// No underscores, starts with an uppercase letter.
pub fn is_pascal_case(value: &str) -> bool {
    PASCAL.is_match(value)
}

/// `UPPERCASE_WORDS_WITH_UNDERSCORES`, starting with a letter.
pub fn is_screaming_snake_case(value: &str) -> bool {
    SCREAMING.is_match(value)
}

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_\s]+").expect("valid pattern"));
static LOWER_TO_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid pattern"));
static ACRONYM_TO_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z0-9]+)").expect("valid pattern"));

/// Segment an identifier into words.
///
/// Underscores and whitespace collapse to separators, then the identifier is
/// split at lowercase-to-uppercase boundaries and at acronym-to-titlecase
/// boundaries (`HTTPServer` segments as `HTTP`, `Server`). Digits stay
/// attached to the preceding letter run.
fn split_words(value: &str) -> Vec<String> {
    let spaced = SEPARATORS.replace_all(value, " ");
    let spaced = LOWER_TO_UPPER.replace_all(&spaced, "${1} ${2}");
    let spaced = ACRONYM_TO_TITLE.replace_all(&spaced, "${1} ${2}");
    spaced
        .split_whitespace()
        .map(|w| w.to_string())
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

impl NamingStyle {
    fn entry(self) -> &'static StyleEntry {
        &STYLE_TABLE[self as usize]
    }

    /// Human-facing label used in diagnostic messages.
    pub fn label(self) -> &'static str {
        self.entry().label
    }

    /// Check whether `identifier` already satisfies this style.
    pub fn matches(self, identifier: &str) -> bool {
        (self.entry().matches)(identifier)
    }

    /// Rewrite `identifier` into this style.
    ///
    /// Lossy only with respect to the segmentation of the original
    /// identifier into words, never with respect to meaning. Idempotent:
    /// converting an already-converted identifier is a no-op.
    pub fn convert(self, identifier: &str) -> String {
        (self.entry().join)(&split_words(identifier))
    }

    /// Resolve a configured style string, falling back to `default` when the
    /// input is absent.
    ///
    /// Matching is case- and separator-insensitive: `SnakeCase`,
    /// `snakecase`, and `snake_case` all resolve to [`NamingStyle::SnakeCase`].
    /// An unresolvable input is a configuration error and fails fast.
    pub fn resolve(input: Option<&str>, default: NamingStyle) -> Result<Self, UnknownStyleError> {
        let Some(raw) = input else {
            return Ok(default);
        };
        let key: String = raw
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "snakecase" => Ok(Self::SnakeCase),
            "camelcase" => Ok(Self::CamelCase),
            "pascalcase" => Ok(Self::PascalCase),
            "screamingsnakecase" => Ok(Self::ScreamingSnakeCase),
            _ => Err(UnknownStyleError {
                input: raw.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A style string in the configuration did not resolve to a known style.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "invalid style \"{input}\". Expected snake_case, camel_case, pascal_case, or screaming_snake_case"
)]
pub struct UnknownStyleError {
    /// The configured string as written.
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn snake_case_predicate() {
        assert!(is_snake_case("example_field_id"));
        assert!(is_snake_case("id"));
        assert!(is_snake_case("field2_name"));
        assert!(!is_snake_case("ExampleModel"));
        assert!(!is_snake_case("_leading"));
        assert!(!is_snake_case("double__underscore"));
        assert!(!is_snake_case("2fast"));
        assert!(!is_snake_case(""));
    }

    #[test]
    fn camel_case_predicate() {
        assert!(is_camel_case("exampleFieldId"));
        assert!(is_camel_case("id"));
        assert!(!is_camel_case("ExampleModel"));
        assert!(!is_camel_case("example_field"));
    }

    #[test]
    fn pascal_case_predicate() {
        assert!(is_pascal_case("ExampleModel"));
        assert!(is_pascal_case("HTTPServer"));
        assert!(!is_pascal_case("exampleModel"));
        assert!(!is_pascal_case("Example_Model"));
    }

    #[test]
    fn screaming_snake_case_predicate() {
        assert!(is_screaming_snake_case("VALUE"));
        assert!(is_screaming_snake_case("SOME_VALUE_2"));
        assert!(!is_screaming_snake_case("Some_Value"));
        assert!(!is_screaming_snake_case("VALUE__TWO"));
    }

    #[test]
    fn lowercase_word_satisfies_two_styles() {
        assert!(is_snake_case("id"));
        assert!(is_camel_case("id"));
    }

    #[test]
    fn convert_between_styles() {
        assert_eq!(NamingStyle::SnakeCase.convert("exampleFieldId"), "example_field_id");
        assert_eq!(NamingStyle::CamelCase.convert("example_field_id"), "exampleFieldId");
        assert_eq!(NamingStyle::PascalCase.convert("example_field_id"), "ExampleFieldId");
        assert_eq!(
            NamingStyle::ScreamingSnakeCase.convert("exampleFieldId"),
            "EXAMPLE_FIELD_ID"
        );
    }

    #[test]
    fn convert_splits_acronyms() {
        assert_eq!(NamingStyle::SnakeCase.convert("HTTPServer"), "http_server");
        assert_eq!(NamingStyle::CamelCase.convert("HTTPServer"), "httpServer");
    }

    #[test]
    fn convert_keeps_digits_with_preceding_run() {
        assert_eq!(NamingStyle::SnakeCase.convert("userV2Token"), "user_v2_token");
    }

    #[test]
    fn convert_is_idempotent() {
        for style in [
            NamingStyle::SnakeCase,
            NamingStyle::CamelCase,
            NamingStyle::PascalCase,
            NamingStyle::ScreamingSnakeCase,
        ] {
            let once = style.convert("ExampleHTTPFieldId");
            assert_eq!(style.convert(&once), once);
        }
    }

    #[test]
    fn resolve_accepts_separator_insensitive_aliases() {
        for input in ["snake_case", "snakecase", "SnakeCase", "SNAKE-CASE"] {
            assert_eq!(
                NamingStyle::resolve(Some(input), NamingStyle::CamelCase).unwrap(),
                NamingStyle::SnakeCase
            );
        }
    }

    #[test]
    fn resolve_falls_back_to_default_when_absent() {
        assert_eq!(
            NamingStyle::resolve(None, NamingStyle::PascalCase).unwrap(),
            NamingStyle::PascalCase
        );
    }

    #[test]
    fn resolve_rejects_unknown_style() {
        let err = NamingStyle::resolve(Some("kebab-case"), NamingStyle::SnakeCase).unwrap_err();
        assert!(err.to_string().contains("kebab-case"));
    }

    #[test]
    fn labels_are_human_facing() {
        assert_eq!(NamingStyle::SnakeCase.label(), "snake_case");
        assert_eq!(NamingStyle::CamelCase.label(), "camelCase");
        assert_eq!(NamingStyle::PascalCase.label(), "PascalCase");
        assert_eq!(NamingStyle::ScreamingSnakeCase.label(), "SCREAMING_SNAKE_CASE");
    }
}
