//! Immutable input fixtures shared by every concatenation variant.
//!
//! A fixture is built once per benchmark run and only ever read afterwards.
//! `Default` yields the canonical operands every variant is validated
//! against: `("first", "second")` and `("first", 1234)`.

/// Two string operands for the `a + "-" + b` pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwoStrings {
    first: String,
    second: String,
}

impl TwoStrings {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}

impl Default for TwoStrings {
    fn default() -> Self {
        Self::new("first", "second")
    }
}

/// A string and an integer operand for the `a + "-" + n` pattern.
///
/// The number must render without grouping separators (`1234`, never
/// `1,234`); `i64`'s `Display` already guarantees that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringAndNumber {
    value: String,
    number: i64,
}

impl StringAndNumber {
    pub fn new(value: impl Into<String>, number: i64) -> Self {
        Self {
            value: value.into(),
            number,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn number(&self) -> i64 {
        self.number
    }
}

impl Default for StringAndNumber {
    fn default() -> Self {
        Self::new("first", 1234)
    }
}
