//! Concrete widget kinds.
//!
//! Small implementations of [`Widget`](crate::Widget) used to compose
//! control trees: text and a linear container.

mod label;
mod stack;

pub use label::Label;
pub use stack::{Child, Stack};

/// Convert a text measurement to a control size, saturating.
fn to_size(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(crate::types::UNBOUNDED)
}
