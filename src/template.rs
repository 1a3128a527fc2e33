//! Runtime-compiled positional templates.
//!
//! Rust's `format!` resolves its pattern at compile time, so the
//! "template parsed at runtime, applied per call" strategies need their
//! own compiled representation. [`PositionalTemplate`] parses `{N}`
//! placeholders once; [`CachedTemplate`] wraps one behind an explicit
//! two-phase lifecycle so compilation cost can be excluded from the
//! per-call measurement.

use std::fmt::{Display, Write};

use thiserror::Error;

/// Errors from compiling or rendering a positional template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unterminated placeholder at byte {0}")]
    UnterminatedPlaceholder(usize),
    #[error("placeholder index is not a number: {{{0}}}")]
    BadIndex(String),
    #[error("placeholder {{{index}}} out of range: {supplied} argument(s) supplied")]
    MissingArgument { index: usize, supplied: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Arg(usize),
}

/// A pattern with `{N}` placeholders, parsed once and rendered many times.
///
/// Arguments render through their `Display` impl, so integers come out
/// without thousands separators.
///
/// ```
/// use hyphen_bench::template::PositionalTemplate;
///
/// let t = PositionalTemplate::compile("{0}-{1}").unwrap();
/// assert_eq!(t.render(&[&"first", &1234]).unwrap(), "first-1234");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionalTemplate {
    segments: Vec<Segment>,
}

impl PositionalTemplate {
    /// Parse `pattern` into literal and placeholder segments.
    ///
    /// Only `{N}` placeholders are recognized; there is no escape syntax,
    /// matching the fixed patterns this crate measures.
    pub fn compile(pattern: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = pattern;
        let mut offset = 0;

        while let Some(open) = rest.find('{') {
            literal.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or(TemplateError::UnterminatedPlaceholder(offset + open))?;
            let index = after[..close]
                .parse::<usize>()
                .map_err(|_| TemplateError::BadIndex(after[..close].to_string()))?;

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Arg(index));

            offset += open + 1 + close + 1;
            rest = &after[close + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Render the template against positional `args`.
    pub fn render(&self, args: &[&dyn Display]) -> Result<String, TemplateError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Arg(index) => {
                    let arg = args.get(*index).ok_or(TemplateError::MissingArgument {
                        index: *index,
                        supplied: args.len(),
                    })?;
                    // Writing to a String is infallible.
                    let _ = write!(out, "{arg}");
                }
            }
        }
        Ok(out)
    }
}

/// A positional template compiled once per measurement iteration.
///
/// The bench driver calls [`refresh`](Self::refresh) outside the timed
/// region, then hands the provider to the variant for many
/// [`get`](Self::get) + render calls. Calling `get` before the first
/// `refresh` is a precondition violation and panics.
#[derive(Clone, Debug)]
pub struct CachedTemplate {
    pattern: String,
    compiled: Option<PositionalTemplate>,
}

impl CachedTemplate {
    /// Store `pattern` without compiling it.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            compiled: None,
        }
    }

    /// (Re)compile the stored pattern. Call once per measurement iteration.
    pub fn refresh(&mut self) -> Result<(), TemplateError> {
        self.compiled = Some(PositionalTemplate::compile(&self.pattern)?);
        Ok(())
    }

    /// The compiled template.
    ///
    /// # Panics
    ///
    /// If `refresh()` has not run successfully yet.
    pub fn get(&self) -> &PositionalTemplate {
        self.compiled
            .as_ref()
            .expect("CachedTemplate::get() called before refresh()")
    }
}

/// Logging-style `{}` substitution: each `{}` in `pattern` consumes the
/// next argument, in order.
///
/// The pattern is scanned exactly once, so argument values containing
/// `{}` are never re-substituted. Surplus placeholders are kept verbatim,
/// surplus arguments are ignored.
pub fn brace_format(pattern: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut next = args.iter();
    let mut rest = pattern;

    while let Some(open) = rest.find("{}") {
        match next.next() {
            Some(arg) => {
                out.push_str(&rest[..open]);
                // Infallible for String targets; see render().
                let _ = write!(out, "{arg}");
            }
            None => out.push_str(&rest[..open + 2]),
        }
        rest = &rest[open + 2..];
    }
    out.push_str(rest);
    out
}
