//! Age/gender-conditional reference-range resolution.
//!
//! Lab parameters store their clinically normal interval either as one
//! literal string or as a table of age-bracket keyed ranges per gender.
//! This crate turns a patient's `(age in days, gender)` into the single
//! applicable range string.

pub mod bracket;
pub mod resolver;

pub use bracket::{AgeBracket, parse_bracket_key};
pub use resolver::resolve;
