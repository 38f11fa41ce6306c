//! # spark-controls
//!
//! Box-model controls for terminal UIs.
//!
//! A control turns declarative constraints (explicit/min/max size, margin,
//! padding, alignment, colors) into two things:
//!
//! - a *measured size* for a given available space, and
//! - a *rendered* block of styled text lines of exactly that size.
//!
//! ## Architecture
//!
//! ```text
//! overrides → kind defaults → fallback   (property cascade)
//!        │
//!        ▼
//! measure(h, w) ── measure_core(inner) ── clamp ── + insets
//!        │
//!        ▼
//! render(h, w) ── render_core(inner) ── align ── insets ── colors ── Lines
//! ```
//!
//! Concrete widgets implement [`Widget`]; the [`Control`] wrapping them does
//! the rest. Output encoding (escape sequences) is left to the consumer of
//! the [`Line`]s.
//!
//! ## Modules
//!
//! - [`types`] - Value types (Rgba, Attr, Cell, Thickness, alignments)
//! - [`control`] - The control, its property cascade, measure and render
//! - [`text`] - Lines of cells and text measurement
//! - [`widgets`] - Label and Stack
//! - [`error`] - Error type

pub mod control;
pub mod error;
pub mod text;
pub mod types;
pub mod widgets;

pub use types::*;

pub use control::{
    Control, ControlBuilder, ControlDefaults, Lines, Overrides, Property, PropertySet,
    PropertyValue, Resolved, Widget,
};

pub use error::{ControlError, Result};

pub use text::{grapheme_width, string_width, truncate_text, wrap_text, Line};

pub use widgets::{Label, Stack};
