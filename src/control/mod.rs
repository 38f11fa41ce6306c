//! Controls - the box model every widget is wrapped in.
//!
//! A [`Control`] pairs a concrete [`Widget`] with a fixed set of attribute
//! overrides and runs the two-phase protocol:
//!
//! 1. [`Control::measure`] resolves the constraint cascade, asks the widget
//!    for its intrinsic size inside the margin/padding insets, and clamps it.
//! 2. [`Control::render`] produces exactly `height` lines of exactly `width`
//!    cells: insets, aligned widget content, colors on every cell.
//!
//! ```
//! use spark_controls::{Control, Label, Thickness};
//!
//! let label = Control::builder(Label::new("hi"))
//!     .margin(Thickness::uniform(1))
//!     .build()
//!     .unwrap();
//!
//! let (h, w) = label.measure(10, 10).unwrap();
//! assert_eq!((h, w), (3, 4));
//! let lines: Vec<_> = label.render(h, w).map(|l| l.text()).collect();
//! assert_eq!(lines, vec!["    ", " hi ", "    "]);
//! ```

mod measure;
mod properties;
mod render;

pub use properties::{ControlDefaults, Overrides, Property, PropertySet, PropertyValue, Resolved};
pub use render::Lines;

use crate::error::Result;
use crate::text::Line;
use crate::types::{HorizontalAlignment, Rgba, Thickness, VerticalAlignment};

use measure::Measurement;

// =============================================================================
// Widget - The extension point
// =============================================================================

/// Content of a control.
///
/// Both hooks work in inner-box units: the box left after the control's
/// margin and padding are taken away.
pub trait Widget {
    /// This kind's default attribute table.
    fn defaults(&self) -> &ControlDefaults {
        &ControlDefaults::EMPTY
    }

    /// Intrinsic size `(height, width)` within the offered inner budget.
    ///
    /// Either budget may be [`UNBOUNDED`](crate::UNBOUNDED). A result larger
    /// than the budget is clamped by the control.
    fn measure_core(&self, inner_height: i32, inner_width: i32) -> (i32, i32);

    /// Content lines for an inner box of the given size.
    ///
    /// May yield fewer lines than `inner_height` and lines shorter than
    /// `inner_width`; the control aligns, pads and clips.
    fn render_core(&self, inner_height: i32, inner_width: i32) -> Box<dyn Iterator<Item = Line> + '_>;
}

impl<W: Widget + ?Sized> Widget for Box<W> {
    fn defaults(&self) -> &ControlDefaults {
        (**self).defaults()
    }

    fn measure_core(&self, inner_height: i32, inner_width: i32) -> (i32, i32) {
        (**self).measure_core(inner_height, inner_width)
    }

    fn render_core(&self, inner_height: i32, inner_width: i32) -> Box<dyn Iterator<Item = Line> + '_> {
        (**self).render_core(inner_height, inner_width)
    }
}

// =============================================================================
// Control
// =============================================================================

/// A widget wrapped in the box model.
///
/// Not `Sync`: the memoized measurement lives in a `Cell`. Distinct
/// controls can be used from different threads.
#[derive(Debug)]
pub struct Control<W> {
    widget: W,
    overrides: Overrides,
    measurement: std::cell::Cell<Option<Measurement>>,
}

impl<W: Widget> Control<W> {
    /// Wrap `widget` with no overrides.
    pub fn new(widget: W) -> Result<Self> {
        Self::with_overrides(widget, Overrides::EMPTY)
    }

    /// Wrap `widget` with a fixed override set.
    pub fn with_overrides(widget: W, overrides: Overrides) -> Result<Self> {
        properties::validate(&overrides, widget.defaults())?;
        Ok(Self {
            widget,
            overrides,
            measurement: std::cell::Cell::new(None),
        })
    }

    pub fn builder(widget: W) -> ControlBuilder<W> {
        ControlBuilder {
            widget,
            overrides: Overrides::EMPTY,
        }
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Mutable access to the widget. Drops the memoized measurement.
    pub fn widget_mut(&mut self) -> &mut W {
        self.invalidate();
        &mut self.widget
    }

    pub fn into_widget(self) -> W {
        self.widget
    }

    /// The instance tier of the cascade.
    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// All effective attribute values.
    pub fn resolved(&self) -> Resolved {
        Resolved::resolve(&self.overrides, self.widget.defaults())
    }

    /// Effective value of one attribute.
    pub fn resolve(&self, property: Property) -> PropertyValue {
        self.resolved().get(property)
    }

    pub fn background(&self) -> Option<Rgba> {
        self.resolved().background
    }

    pub fn foreground(&self) -> Option<Rgba> {
        self.resolved().foreground
    }

    /// Explicit width, `None` when sized to content.
    pub fn width(&self) -> Option<i32> {
        self.resolved().width
    }

    /// Explicit height, `None` when sized to content.
    pub fn height(&self) -> Option<i32> {
        self.resolved().height
    }

    pub fn min_width(&self) -> i32 {
        self.resolved().min_width
    }

    pub fn max_width(&self) -> i32 {
        self.resolved().max_width
    }

    pub fn min_height(&self) -> i32 {
        self.resolved().min_height
    }

    pub fn max_height(&self) -> i32 {
        self.resolved().max_height
    }

    pub fn margin(&self) -> Thickness {
        self.resolved().margin
    }

    pub fn padding(&self) -> Thickness {
        self.resolved().padding
    }

    pub fn horizontal_alignment(&self) -> HorizontalAlignment {
        self.resolved().horizontal_alignment
    }

    pub fn vertical_alignment(&self) -> VerticalAlignment {
        self.resolved().vertical_alignment
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Apply a change to the overrides, keeping the old set if the result is
    /// invalid.
    fn assign(&mut self, change: impl FnOnce(&mut Overrides)) -> Result<()> {
        let mut next = self.overrides;
        change(&mut next);
        properties::validate(&next, self.widget.defaults())?;
        self.overrides = next;
        self.invalidate();
        Ok(())
    }

    pub fn set_background(&mut self, color: Option<Rgba>) -> Result<()> {
        self.assign(|o| o.background = color)
    }

    pub fn set_foreground(&mut self, color: Option<Rgba>) -> Result<()> {
        self.assign(|o| o.foreground = color)
    }

    /// `None` reverts to the kind default, or auto-sizing.
    pub fn set_width(&mut self, width: Option<i32>) -> Result<()> {
        self.assign(|o| o.width = width)
    }

    /// `None` reverts to the kind default, or auto-sizing.
    pub fn set_height(&mut self, height: Option<i32>) -> Result<()> {
        self.assign(|o| o.height = height)
    }

    pub fn set_min_width(&mut self, value: Option<i32>) -> Result<()> {
        self.assign(|o| o.min_width = value)
    }

    pub fn set_max_width(&mut self, value: Option<i32>) -> Result<()> {
        self.assign(|o| o.max_width = value)
    }

    pub fn set_min_height(&mut self, value: Option<i32>) -> Result<()> {
        self.assign(|o| o.min_height = value)
    }

    pub fn set_max_height(&mut self, value: Option<i32>) -> Result<()> {
        self.assign(|o| o.max_height = value)
    }

    pub fn set_margin(&mut self, margin: Option<Thickness>) -> Result<()> {
        self.assign(|o| o.margin = margin)
    }

    pub fn set_padding(&mut self, padding: Option<Thickness>) -> Result<()> {
        self.assign(|o| o.padding = padding)
    }

    pub fn set_horizontal_alignment(&mut self, align: Option<HorizontalAlignment>) -> Result<()> {
        self.assign(|o| o.horizontal_alignment = align)
    }

    pub fn set_vertical_alignment(&mut self, align: Option<VerticalAlignment>) -> Result<()> {
        self.assign(|o| o.vertical_alignment = align)
    }
}

impl<W: Widget + 'static> Control<W> {
    /// Erase the widget type so controls of different kinds can live side
    /// by side in a container. Overrides and any memoized measurement carry
    /// over.
    pub fn boxed(self) -> Control<Box<dyn Widget>> {
        Control {
            widget: Box::new(self.widget),
            overrides: self.overrides,
            measurement: self.measurement,
        }
    }
}

// =============================================================================
// ControlBuilder
// =============================================================================

/// Fluent construction of a [`Control`]; validation happens in `build`.
#[derive(Debug)]
pub struct ControlBuilder<W> {
    widget: W,
    overrides: Overrides,
}

impl<W: Widget> ControlBuilder<W> {
    pub fn background(mut self, color: Rgba) -> Self {
        self.overrides.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Rgba) -> Self {
        self.overrides.foreground = Some(color);
        self
    }

    pub fn width(mut self, width: i32) -> Self {
        self.overrides.width = Some(width);
        self
    }

    pub fn height(mut self, height: i32) -> Self {
        self.overrides.height = Some(height);
        self
    }

    pub fn min_width(mut self, value: i32) -> Self {
        self.overrides.min_width = Some(value);
        self
    }

    pub fn max_width(mut self, value: i32) -> Self {
        self.overrides.max_width = Some(value);
        self
    }

    pub fn min_height(mut self, value: i32) -> Self {
        self.overrides.min_height = Some(value);
        self
    }

    pub fn max_height(mut self, value: i32) -> Self {
        self.overrides.max_height = Some(value);
        self
    }

    pub fn margin(mut self, margin: impl Into<Thickness>) -> Self {
        self.overrides.margin = Some(margin.into());
        self
    }

    pub fn padding(mut self, padding: impl Into<Thickness>) -> Self {
        self.overrides.padding = Some(padding.into());
        self
    }

    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.overrides.horizontal_alignment = Some(align);
        self
    }

    pub fn vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.overrides.vertical_alignment = Some(align);
        self
    }

    /// Both alignments at once.
    pub fn align(self, horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        self.horizontal_alignment(horizontal).vertical_alignment(vertical)
    }

    pub fn build(self) -> Result<Control<W>> {
        Control::with_overrides(self.widget, self.overrides)
    }
}
