//! Two-string concatenation variants: the `a + "-" + b` pattern.
//!
//! Each runner is a pure `fn(&TwoStrings) -> String`. All patterns and
//! templates here are fixed literals, so the `expect`s encode programmer
//! errors only, never input-dependent failures.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Mutex;

use serde::Serialize;
use tinytemplate::{TinyTemplate, format_unescaped};

use crate::fixture::TwoStrings;
use crate::template::{CachedTemplate, PositionalTemplate, brace_format};

/// `String + &str` operator chain.
pub fn plus_operator(data: &TwoStrings) -> String {
    data.first().to_owned() + "-" + data.second()
}

/// Eager immutable concatenation of a slice of pieces.
pub fn array_concat(data: &TwoStrings) -> String {
    [data.first(), "-", data.second()].concat()
}

/// Separator-aware join over the two operands.
pub fn slice_join(data: &TwoStrings) -> String {
    [data.first(), data.second()].join("-")
}

/// Mutable buffer, pre-sized, appended piecewise, then materialized.
pub fn push_str_buffer(data: &TwoStrings) -> String {
    let mut out = String::with_capacity(data.first().len() + 1 + data.second().len());
    out.push_str(data.first());
    out.push('-');
    out.push_str(data.second());
    out
}

/// Legacy synchronized-buffer strategy: every append takes a lock.
///
/// The buffer is local, so the lock is always uncontended; what this
/// measures is the overhead of the lock itself.
pub fn locked_buffer(data: &TwoStrings) -> String {
    let buffer = Mutex::new(String::new());
    {
        let mut guard = buffer.lock().expect("local lock is never poisoned");
        guard.push_str(data.first());
        guard.push('-');
        guard.push_str(data.second());
    }
    buffer.into_inner().expect("local lock is never poisoned")
}

/// The `format!` macro (pattern resolved at compile time).
pub fn format_macro(data: &TwoStrings) -> String {
    format!("{}-{}", data.first(), data.second())
}

/// `write!` into a `String` through the `fmt::Write` machinery.
pub fn fmt_write(data: &TwoStrings) -> String {
    let mut out = String::new();
    // Writing to a String is infallible.
    let _ = write!(out, "{}-{}", data.first(), data.second());
    out
}

/// Positional template compiled freshly on every call.
pub fn positional_template(data: &TwoStrings) -> String {
    PositionalTemplate::compile("{0}-{1}")
        .expect("literal pattern is well-formed")
        .render(&[&data.first(), &data.second()])
        .expect("two placeholders, two arguments")
}

/// Positional template compiled once per iteration, reused here.
pub fn cached_template(data: &TwoStrings, cache: &CachedTemplate) -> String {
    cache
        .get()
        .render(&[&data.first(), &data.second()])
        .expect("two placeholders, two arguments")
}

/// `${key}` substitution from a name/value map.
pub fn named_substitution(data: &TwoStrings) -> String {
    let mut values = HashMap::new();
    values.insert("first".to_string(), data.first().to_string());
    values.insert("second".to_string(), data.second().to_string());
    subst::substitute("${first}-${second}", &values).expect("every placeholder has a value")
}

#[derive(Serialize)]
struct PairContext<'a> {
    first: &'a str,
    second: &'a str,
}

/// General-purpose templating engine, template registered per call.
pub fn template_engine(data: &TwoStrings) -> String {
    let mut engine = TinyTemplate::new();
    // The default formatter HTML-escapes values; operands must pass
    // through byte-identical.
    engine.set_default_formatter(&format_unescaped);
    engine
        .add_template("hyphen", "{first}-{second}")
        .expect("literal template is well-formed");
    engine
        .render(
            "hyphen",
            &PairContext {
                first: data.first(),
                second: data.second(),
            },
        )
        .expect("context provides every field")
}

/// Logging-style `{}` placeholder substitution.
pub fn brace_placeholder(data: &TwoStrings) -> String {
    brace_format("{}-{}", &[&data.first(), &data.second()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::TWO_STRINGS_VARIANTS;

    #[test]
    fn all_variants_agree_on_default_fixture() {
        let fixture = TwoStrings::default();
        for (name, run) in TWO_STRINGS_VARIANTS {
            assert_eq!(run(&fixture), "first-second", "variant {name}");
        }
    }

    #[test]
    fn all_variants_handle_empty_operands() {
        let fixture = TwoStrings::new("", "");
        for (name, run) in TWO_STRINGS_VARIANTS {
            assert_eq!(run(&fixture), "-", "variant {name}");
        }
    }

    #[test]
    fn variants_are_idempotent() {
        let fixture = TwoStrings::new("alpha", "omega");
        for (name, run) in TWO_STRINGS_VARIANTS {
            assert_eq!(run(&fixture), run(&fixture), "variant {name}");
        }
    }

    #[test]
    fn cached_template_matches_fresh_compile() {
        let fixture = TwoStrings::default();
        let mut cache = CachedTemplate::new("{0}-{1}");
        cache.refresh().unwrap();
        assert_eq!(
            cached_template(&fixture, &cache),
            positional_template(&fixture)
        );
    }

    #[test]
    fn template_engine_does_not_escape_operands() {
        let fixture = TwoStrings::new("a&b", "<c>");
        assert_eq!(template_engine(&fixture), "a&b-<c>");
    }

    #[test]
    fn substitution_values_are_inserted_verbatim() {
        // Operands that look like placeholders must not be expanded again.
        let fixture = TwoStrings::new("${second}", "x");
        assert_eq!(named_substitution(&fixture), "${second}-x");
    }
}
