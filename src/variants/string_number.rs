//! String/number concatenation variants: the `a + "-" + n` pattern.
//!
//! Mirrors [`two_strings`](super::two_strings) with an `i64` second
//! operand. The number must come out without grouping separators, which
//! every strategy here inherits from `i64`'s `Display`.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Mutex;

use serde::Serialize;
use tinytemplate::{TinyTemplate, format_unescaped};

use crate::fixture::StringAndNumber;
use crate::template::{CachedTemplate, PositionalTemplate, brace_format};

// i64::MIN is 20 bytes rendered, sign included.
const MAX_I64_DIGITS: usize = 20;

/// `String + &str` operator chain over a stringified number.
pub fn plus_operator(data: &StringAndNumber) -> String {
    data.value().to_owned() + "-" + &data.number().to_string()
}

/// Eager immutable concatenation of a slice of pieces.
pub fn array_concat(data: &StringAndNumber) -> String {
    let number = data.number().to_string();
    [data.value(), "-", &number].concat()
}

/// Separator-aware join over the two operands.
pub fn slice_join(data: &StringAndNumber) -> String {
    let number = data.number().to_string();
    [data.value(), &number].join("-")
}

/// Mutable buffer, pre-sized, the number written in place.
pub fn push_str_buffer(data: &StringAndNumber) -> String {
    let mut out = String::with_capacity(data.value().len() + 1 + MAX_I64_DIGITS);
    out.push_str(data.value());
    out.push('-');
    // Writing to a String is infallible.
    let _ = write!(out, "{}", data.number());
    out
}

/// Legacy synchronized-buffer strategy: every append takes a lock.
pub fn locked_buffer(data: &StringAndNumber) -> String {
    let buffer = Mutex::new(String::new());
    {
        let mut guard = buffer.lock().expect("local lock is never poisoned");
        guard.push_str(data.value());
        guard.push('-');
        let _ = write!(guard, "{}", data.number());
    }
    buffer.into_inner().expect("local lock is never poisoned")
}

/// The `format!` macro (pattern resolved at compile time).
pub fn format_macro(data: &StringAndNumber) -> String {
    format!("{}-{}", data.value(), data.number())
}

/// `write!` into a `String` through the `fmt::Write` machinery.
pub fn fmt_write(data: &StringAndNumber) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}-{}", data.value(), data.number());
    out
}

/// Positional template compiled freshly on every call.
pub fn positional_template(data: &StringAndNumber) -> String {
    PositionalTemplate::compile("{0}-{1}")
        .expect("literal pattern is well-formed")
        .render(&[&data.value(), &data.number()])
        .expect("two placeholders, two arguments")
}

/// Positional template compiled once per iteration, reused here.
pub fn cached_template(data: &StringAndNumber, cache: &CachedTemplate) -> String {
    cache
        .get()
        .render(&[&data.value(), &data.number()])
        .expect("two placeholders, two arguments")
}

/// `${key}` substitution from a name/value map.
pub fn named_substitution(data: &StringAndNumber) -> String {
    let mut values = HashMap::new();
    values.insert("value".to_string(), data.value().to_string());
    values.insert("number".to_string(), data.number().to_string());
    subst::substitute("${value}-${number}", &values).expect("every placeholder has a value")
}

#[derive(Serialize)]
struct NumberContext<'a> {
    value: &'a str,
    number: i64,
}

/// General-purpose templating engine, template registered per call.
pub fn template_engine(data: &StringAndNumber) -> String {
    let mut engine = TinyTemplate::new();
    engine.set_default_formatter(&format_unescaped);
    engine
        .add_template("hyphen", "{value}-{number}")
        .expect("literal template is well-formed");
    engine
        .render(
            "hyphen",
            &NumberContext {
                value: data.value(),
                number: data.number(),
            },
        )
        .expect("context provides every field")
}

/// Logging-style `{}` placeholder substitution.
pub fn brace_placeholder(data: &StringAndNumber) -> String {
    brace_format("{}-{}", &[&data.value(), &data.number()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::STRING_NUMBER_VARIANTS;

    #[test]
    fn all_variants_agree_on_default_fixture() {
        let fixture = StringAndNumber::default();
        for (name, run) in STRING_NUMBER_VARIANTS {
            assert_eq!(run(&fixture), "first-1234", "variant {name}");
        }
    }

    #[test]
    fn no_variant_inserts_grouping_separators() {
        let fixture = StringAndNumber::new("big", 9_876_543_210);
        for (name, run) in STRING_NUMBER_VARIANTS {
            assert_eq!(run(&fixture), "big-9876543210", "variant {name}");
        }
    }

    #[test]
    fn negative_numbers_render_with_sign() {
        let fixture = StringAndNumber::new("neg", -42);
        for (name, run) in STRING_NUMBER_VARIANTS {
            assert_eq!(run(&fixture), "neg--42", "variant {name}");
        }
    }

    #[test]
    fn empty_string_operand_keeps_the_hyphen() {
        let fixture = StringAndNumber::new("", 0);
        for (name, run) in STRING_NUMBER_VARIANTS {
            assert_eq!(run(&fixture), "-0", "variant {name}");
        }
    }

    #[test]
    fn variants_are_idempotent() {
        let fixture = StringAndNumber::new("alpha", i64::MAX);
        for (name, run) in STRING_NUMBER_VARIANTS {
            assert_eq!(run(&fixture), run(&fixture), "variant {name}");
        }
    }

    #[test]
    fn cached_template_matches_fresh_compile() {
        let fixture = StringAndNumber::default();
        let mut cache = CachedTemplate::new("{0}-{1}");
        cache.refresh().unwrap();
        assert_eq!(
            cached_template(&fixture, &cache),
            positional_template(&fixture)
        );
    }
}
