//! Microbenchmarks for hyphen-separated string concatenation.
//!
//! The pattern under test is `a + "-" + b` (two strings) and
//! `a + "-" + n` (string and integer). Each strategy for producing that
//! output lives behind one pure function in [`variants`]; the Criterion
//! targets in `benches/` drive the registries so every strategy is
//! measured against the same immutable [`fixture`] data.
//!
//! Adding a strategy means adding one function and one registry entry,
//! not a new benchmark module.
//!
//! ```
//! use hyphen_bench::{TwoStrings, variants::TWO_STRINGS_VARIANTS};
//!
//! let fixture = TwoStrings::default();
//! for (name, run) in TWO_STRINGS_VARIANTS {
//!     assert_eq!(run(&fixture), "first-second", "variant {name}");
//! }
//! ```

pub mod fixture;
pub mod template;
pub mod variants;

pub use fixture::{StringAndNumber, TwoStrings};
pub use template::{CachedTemplate, PositionalTemplate, TemplateError};
