//! Restricted arithmetic expressions for derived lab parameters.
//!
//! Legacy report data may attach a `formula` to a parameter, deriving its
//! value from sibling parameters (e.g. indirect bilirubin = total minus
//! direct). The stored expressions are plain arithmetic over named
//! parameters, and this crate evaluates exactly that grammar and nothing
//! else:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := '-' factor | number | ident | '(' expr ')'
//! ```
//!
//! Identifiers are resolved against a closed table of numeric bindings.
//! Anything outside the grammar — an unknown name, a stray character, an
//! unbalanced parenthesis — makes evaluation return `None`, as does a
//! non-finite result. Author-supplied text is never executed.

mod eval;
mod token;

pub use eval::{evaluate, round2};
