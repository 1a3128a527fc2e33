//! Variant runners: one pure function per concatenation strategy.
//!
//! Every variant produces byte-identical output for identical input; the
//! only thing that differs is the API driving the concatenation. The
//! registries below map variant names to runners so the bench targets
//! (and anything else enumerating strategies) never hard-code the set.
//!
//! Cached-template runners need per-iteration state and take a
//! [`CachedTemplate`](crate::template::CachedTemplate) as a second
//! argument; the driver calls `refresh()` on it before each measurement
//! and is responsible for keeping that cost out of the timed region.

pub mod string_number;
pub mod two_strings;

use crate::fixture::{StringAndNumber, TwoStrings};

/// Runner for the two-string pattern `a + "-" + b`.
pub type TwoStringsVariant = fn(&TwoStrings) -> String;

/// Runner for the string/number pattern `a + "-" + n`.
pub type StringNumberVariant = fn(&StringAndNumber) -> String;

/// Self-contained two-string variants, by name.
pub const TWO_STRINGS_VARIANTS: &[(&str, TwoStringsVariant)] = &[
    ("plus_operator", two_strings::plus_operator),
    ("array_concat", two_strings::array_concat),
    ("slice_join", two_strings::slice_join),
    ("push_str_buffer", two_strings::push_str_buffer),
    ("locked_buffer", two_strings::locked_buffer),
    ("format_macro", two_strings::format_macro),
    ("fmt_write", two_strings::fmt_write),
    ("positional_template", two_strings::positional_template),
    ("named_substitution", two_strings::named_substitution),
    ("template_engine", two_strings::template_engine),
    ("brace_placeholder", two_strings::brace_placeholder),
];

/// Self-contained string/number variants, by name.
pub const STRING_NUMBER_VARIANTS: &[(&str, StringNumberVariant)] = &[
    ("plus_operator", string_number::plus_operator),
    ("array_concat", string_number::array_concat),
    ("slice_join", string_number::slice_join),
    ("push_str_buffer", string_number::push_str_buffer),
    ("locked_buffer", string_number::locked_buffer),
    ("format_macro", string_number::format_macro),
    ("fmt_write", string_number::fmt_write),
    ("positional_template", string_number::positional_template),
    ("named_substitution", string_number::named_substitution),
    ("template_engine", string_number::template_engine),
    ("brace_placeholder", string_number::brace_placeholder),
];
