//! Measure engine.
//!
//! `measure(available_height, available_width)`:
//! 1. take margin + padding off the available box (never below zero)
//! 2. ask the widget for its intrinsic size within that budget
//! 3. clamp to the resolved `[min, max]` and the budget, min winning
//! 4. add the insets back
//!
//! The result is memoized per `(available_height, available_width)` until the
//! control changes.

use tracing::{debug, debug_span, trace};

use super::{properties, Control, Widget};
use crate::error::{non_negative, Result};
use crate::types::{grow, shrink};

/// The most recent measurement and the budget it was taken against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Measurement {
    pub available: (i32, i32),
    pub size: (i32, i32),
}

/// Clamp an intrinsic size on one axis.
///
/// Max and the budget cap it; min overrides both.
#[inline]
fn fit(intrinsic: i32, budget: i32, min: i32, max: i32) -> i32 {
    intrinsic.max(0).min(max).min(budget).max(min)
}

impl<W: Widget> Control<W> {
    /// Measure against an available `(height, width)`.
    ///
    /// Either dimension may be [`UNBOUNDED`](crate::UNBOUNDED). Negative
    /// dimensions fail with [`ControlError::InvalidValue`]; min above max on
    /// an axis fails with [`ControlError::Constraint`].
    ///
    /// [`ControlError::InvalidValue`]: crate::ControlError::InvalidValue
    /// [`ControlError::Constraint`]: crate::ControlError::Constraint
    ///
    /// The returned size respects the resolved min bound. It respects the
    /// max bound and the available budget unless min forces it larger, in
    /// which case the caller has to deal with the overflow.
    pub fn measure(&self, available_height: i32, available_width: i32) -> Result<(i32, i32)> {
        non_negative("available_height", available_height)?;
        non_negative("available_width", available_width)?;

        let key = (available_height, available_width);
        if let Some(cached) = self.measurement.get() {
            if cached.available == key {
                trace!(available_height, available_width, "measure cache hit");
                return Ok(cached.size);
            }
        }

        let _span = debug_span!("measure", available_height, available_width).entered();

        // Kind defaults may have changed through widget_mut since the last
        // assignment was checked.
        properties::validate(&self.overrides, self.widget.defaults())?;
        let resolved = self.resolved();

        let insets = resolved.insets();
        let budget_height = shrink(available_height, insets.vertical());
        let budget_width = shrink(available_width, insets.horizontal());

        let (core_height, core_width) = self.widget.measure_core(
            budget_height.min(resolved.max_height),
            budget_width.min(resolved.max_width),
        );
        if core_height > budget_height || core_width > budget_width {
            debug!(
                core_height,
                core_width, budget_height, budget_width, "intrinsic size exceeds budget, clamping"
            );
        }

        let inner_height = fit(core_height, budget_height, resolved.min_height, resolved.max_height);
        let inner_width = fit(core_width, budget_width, resolved.min_width, resolved.max_width);
        if inner_height > budget_height || inner_width > budget_width {
            debug!(inner_height, inner_width, budget_height, budget_width, "min constraint exceeds available space");
        }

        let size = (
            grow(inner_height, insets.vertical()),
            grow(inner_width, insets.horizontal()),
        );
        self.measurement.set(Some(Measurement { available: key, size }));
        debug!(height = size.0, width = size.1, "measured");

        Ok(size)
    }

    /// Size from the most recent measurement, if any.
    pub fn last_measurement(&self) -> Option<(i32, i32)> {
        self.measurement.get().map(|m| m.size)
    }

    /// Drop the memoized measurement.
    pub fn invalidate(&self) {
        self.measurement.set(None);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::control::ControlDefaults;
    use crate::error::ControlError;
    use crate::text::Line;
    use crate::types::{Axis, Rgba, Thickness, UNBOUNDED};

    const CAPPED: ControlDefaults = ControlDefaults::EMPTY.with_max_width(2);

    /// Reports a fixed intrinsic size and counts measure_core calls.
    struct Counting {
        size: (i32, i32),
        calls: Cell<usize>,
        offered: Cell<(i32, i32)>,
        /// Switches the kind defaults to `CAPPED`.
        capped: bool,
    }

    impl Counting {
        fn new(height: i32, width: i32) -> Self {
            Self {
                size: (height, width),
                calls: Cell::new(0),
                offered: Cell::new((0, 0)),
                capped: false,
            }
        }
    }

    impl Widget for Counting {
        fn defaults(&self) -> &ControlDefaults {
            if self.capped { &CAPPED } else { &ControlDefaults::EMPTY }
        }

        fn measure_core(&self, inner_height: i32, inner_width: i32) -> (i32, i32) {
            self.calls.set(self.calls.get() + 1);
            self.offered.set((inner_height, inner_width));
            self.size
        }

        fn render_core(&self, _: i32, _: i32) -> Box<dyn Iterator<Item = Line> + '_> {
            Box::new(std::iter::empty())
        }
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit(5, 10, 0, UNBOUNDED), 5);
        assert_eq!(fit(15, 10, 0, UNBOUNDED), 10);
        assert_eq!(fit(5, 10, 0, 3), 3);
        assert_eq!(fit(1, 10, 4, 8), 4);
        assert_eq!(fit(1, 2, 4, 8), 4);
        assert_eq!(fit(-3, 10, 0, 8), 0);
    }

    #[test]
    fn test_measure_is_memoized() {
        let control = Control::new(Counting::new(2, 3)).unwrap();
        assert_eq!(control.measure(10, 10), Ok((2, 3)));
        assert_eq!(control.measure(10, 10), Ok((2, 3)));
        assert_eq!(control.widget().calls.get(), 1);

        // Different key re-measures.
        assert_eq!(control.measure(10, 11), Ok((2, 3)));
        assert_eq!(control.widget().calls.get(), 2);
        assert_eq!(control.last_measurement(), Some((2, 3)));
    }

    #[test]
    fn test_setter_invalidates_memo() {
        let mut control = Control::new(Counting::new(2, 3)).unwrap();
        control.measure(10, 10).unwrap();
        control.set_margin(Some(Thickness::uniform(1))).unwrap();
        assert_eq!(control.last_measurement(), None);
        assert_eq!(control.measure(10, 10), Ok((4, 5)));
        assert_eq!(control.widget().calls.get(), 2);
    }

    #[test]
    fn test_color_and_alignment_setters_invalidate_memo() {
        let mut control = Control::new(Counting::new(2, 3)).unwrap();
        control.measure(10, 10).unwrap();

        control.set_background(Some(Rgba::BLUE)).unwrap();
        assert_eq!(control.last_measurement(), None);
        control.measure(10, 10).unwrap();
        assert_eq!(control.widget().calls.get(), 2);

        control.set_foreground(Some(Rgba::WHITE)).unwrap();
        control.measure(10, 10).unwrap();
        assert_eq!(control.widget().calls.get(), 3);

        control.set_vertical_alignment(None).unwrap();
        control.measure(10, 10).unwrap();
        assert_eq!(control.widget().calls.get(), 4);
    }

    #[test]
    fn test_widget_mut_invalidates_memo() {
        let mut control = Control::new(Counting::new(2, 3)).unwrap();
        assert_eq!(control.measure(10, 10), Ok((2, 3)));
        control.widget_mut().size = (4, 5);
        assert_eq!(control.measure(10, 10), Ok((4, 5)));
        assert_eq!(control.widget().calls.get(), 2);
    }

    #[test]
    fn test_kind_defaults_changed_through_widget_mut_are_checked() {
        let mut control = Control::builder(Counting::new(1, 1)).min_width(4).build().unwrap();
        assert_eq!(control.measure(10, 10), Ok((1, 4)));

        control.widget_mut().capped = true;
        assert_eq!(
            control.measure(10, 10),
            Err(ControlError::Constraint { axis: Axis::Horizontal, min: 4, max: 2 })
        );
        assert_eq!(control.widget().calls.get(), 1);
    }

    #[test]
    fn test_failed_setter_keeps_memo() {
        let mut control = Control::new(Counting::new(2, 3)).unwrap();
        control.measure(10, 10).unwrap();
        assert!(control.set_width(Some(-2)).is_err());
        control.measure(10, 10).unwrap();
        assert_eq!(control.widget().calls.get(), 1);
    }

    #[test]
    fn test_negative_available_fails() {
        let control = Control::new(Counting::new(2, 3)).unwrap();
        assert!(control.measure(-1, 5).unwrap_err().is_value_error());
        assert!(control.measure(5, -1).unwrap_err().is_value_error());
        assert_eq!(control.widget().calls.get(), 0);
    }

    #[test]
    fn test_insets_shrink_budget_and_grow_result() {
        let control = Control::builder(Counting::new(1, 4))
            .margin(Thickness::new(1, 2, 1, 0))
            .padding(Thickness::new(2, 0, 0, 1))
            .build()
            .unwrap();
        assert_eq!(control.measure(20, 30), Ok((4, 8)));
        assert_eq!(control.widget().offered.get(), (17, 26));
    }

    #[test]
    fn test_insets_larger_than_budget_clamp_to_zero() {
        let control = Control::builder(Counting::new(1, 1))
            .margin(3)
            .build()
            .unwrap();
        assert_eq!(control.measure(2, 2), Ok((6, 6)));
        assert_eq!(control.widget().offered.get(), (0, 0));
    }

    #[test]
    fn test_unbounded_budget() {
        let control = Control::builder(Counting::new(3, 50)).padding(1).build().unwrap();
        assert_eq!(control.measure(UNBOUNDED, UNBOUNDED), Ok((5, 52)));
        assert_eq!(control.widget().offered.get(), (UNBOUNDED, UNBOUNDED));
    }

    #[test]
    fn test_max_caps_offer_and_result() {
        let control = Control::builder(Counting::new(3, 50)).max_width(10).build().unwrap();
        assert_eq!(control.measure(20, 30), Ok((3, 10)));
        assert_eq!(control.widget().offered.get(), (20, 10));
    }

    #[test]
    fn test_intrinsic_larger_than_budget_is_clamped() {
        let control = Control::new(Counting::new(30, 30)).unwrap();
        assert_eq!(control.measure(5, 6), Ok((5, 6)));
    }

    #[test]
    fn test_min_beats_budget() {
        let control = Control::builder(Counting::new(1, 1)).min_width(8).min_height(2).build().unwrap();
        assert_eq!(control.measure(1, 4), Ok((2, 8)));
    }

    #[test]
    fn test_explicit_size_overrides_intrinsic() {
        let control = Control::builder(Counting::new(9, 9))
            .width(3)
            .height(1)
            .margin(1)
            .build()
            .unwrap();
        assert_eq!(control.measure(100, 100), Ok((3, 5)));
        // Explicit width larger than what is offered still wins.
        let control = Control::builder(Counting::new(1, 1)).width(7).build().unwrap();
        assert_eq!(control.measure(10, 5), Ok((1, 7)));
    }
}
