//! The constraint mini-language: frequency strings, window strings and the
//! relational/apart constraint grammar. Every parser here is context-free.
//! Reference resolution (entity vs. category) happens in `catalog`.

pub mod constraint;
pub mod frequency;
pub mod window;

pub use constraint::{parse_constraint, Constraint, ConstraintKind, ConstraintRef};
pub use frequency::{Frequency, Period};
pub use window::WindowSpec;
