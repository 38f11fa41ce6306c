//! Text lines and text measurement.
//!
//! [`Line`] is what every control renders into; the measurement helpers are
//! used by text-bearing widgets to compute their intrinsic size.

mod line;
mod measure;

pub use line::Line;
pub use measure::*;
