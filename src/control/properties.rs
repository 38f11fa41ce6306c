//! Property cascade.
//!
//! Every box-model attribute resolves through the same chain: the instance
//! override if present, else the widget kind's default table, else the hard
//! fallback (0 / unbounded / zero inset / `Stretch` / no color / auto size).

use crate::error::{non_negative, ControlError, Result};
use crate::types::{Axis, HorizontalAlignment, Rgba, Thickness, VerticalAlignment, UNBOUNDED};

// =============================================================================
// PropertySet - One optional entry per attribute
// =============================================================================

/// A set of optional attribute values.
///
/// Used both for a control's instance overrides and for a widget kind's
/// default table. `None` means "not set at this tier".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PropertySet {
    pub background: Option<Rgba>,
    pub foreground: Option<Rgba>,
    pub height: Option<i32>,
    pub horizontal_alignment: Option<HorizontalAlignment>,
    pub margin: Option<Thickness>,
    pub max_height: Option<i32>,
    pub max_width: Option<i32>,
    pub min_height: Option<i32>,
    pub min_width: Option<i32>,
    pub padding: Option<Thickness>,
    pub vertical_alignment: Option<VerticalAlignment>,
    pub width: Option<i32>,
}

/// Per-kind default table, returned by [`Widget::defaults`](super::Widget::defaults).
pub type ControlDefaults = PropertySet;

/// Per-instance overrides.
pub type Overrides = PropertySet;

impl PropertySet {
    /// Nothing set.
    pub const EMPTY: Self = Self {
        background: None,
        foreground: None,
        height: None,
        horizontal_alignment: None,
        margin: None,
        max_height: None,
        max_width: None,
        min_height: None,
        min_width: None,
        padding: None,
        vertical_alignment: None,
        width: None,
    };

    pub const fn with_background(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    pub const fn with_foreground(mut self, color: Rgba) -> Self {
        self.foreground = Some(color);
        self
    }

    pub const fn with_width(mut self, width: i32) -> Self {
        self.width = Some(width);
        self
    }

    pub const fn with_height(mut self, height: i32) -> Self {
        self.height = Some(height);
        self
    }

    pub const fn with_min_width(mut self, value: i32) -> Self {
        self.min_width = Some(value);
        self
    }

    pub const fn with_max_width(mut self, value: i32) -> Self {
        self.max_width = Some(value);
        self
    }

    pub const fn with_min_height(mut self, value: i32) -> Self {
        self.min_height = Some(value);
        self
    }

    pub const fn with_max_height(mut self, value: i32) -> Self {
        self.max_height = Some(value);
        self
    }

    pub const fn with_margin(mut self, margin: Thickness) -> Self {
        self.margin = Some(margin);
        self
    }

    pub const fn with_padding(mut self, padding: Thickness) -> Self {
        self.padding = Some(padding);
        self
    }

    pub const fn with_horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.horizontal_alignment = Some(align);
        self
    }

    pub const fn with_vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.vertical_alignment = Some(align);
        self
    }

    /// Reject negative sizes and insets.
    pub(crate) fn check_values(&self) -> Result<()> {
        let sizes = [
            ("height", self.height),
            ("max_height", self.max_height),
            ("max_width", self.max_width),
            ("min_height", self.min_height),
            ("min_width", self.min_width),
            ("width", self.width),
        ];
        for (property, value) in sizes {
            if let Some(value) = value {
                non_negative(property, value)?;
            }
        }

        for (property, inset) in [("margin", self.margin), ("padding", self.padding)] {
            if let Some((_, value)) = inset.and_then(|t| t.first_negative()) {
                return Err(ControlError::InvalidValue { property, value });
            }
        }

        Ok(())
    }
}

// =============================================================================
// Property - Attribute names for generic resolution
// =============================================================================

/// The twelve cascaded attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Background,
    Foreground,
    Height,
    HorizontalAlignment,
    Margin,
    MaxHeight,
    MaxWidth,
    MinHeight,
    MinWidth,
    Padding,
    VerticalAlignment,
    Width,
}

impl Property {
    pub const ALL: [Property; 12] = [
        Self::Background,
        Self::Foreground,
        Self::Height,
        Self::HorizontalAlignment,
        Self::Margin,
        Self::MaxHeight,
        Self::MaxWidth,
        Self::MinHeight,
        Self::MinWidth,
        Self::Padding,
        Self::VerticalAlignment,
        Self::Width,
    ];
}

/// A resolved attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyValue {
    /// `None` inherits.
    Color(Option<Rgba>),
    /// Explicit size; `None` is auto.
    Size(Option<i32>),
    /// Min/max bound (max may be [`UNBOUNDED`]).
    Bound(i32),
    Thickness(Thickness),
    Horizontal(HorizontalAlignment),
    Vertical(VerticalAlignment),
}

// =============================================================================
// Resolved - The cascade result
// =============================================================================

/// Effective attribute values of a control.
///
/// `min_*`/`max_*` already fold in an explicit size: when `width` is set,
/// `min_width == max_width == width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub background: Option<Rgba>,
    pub foreground: Option<Rgba>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub min_width: i32,
    pub max_width: i32,
    pub min_height: i32,
    pub max_height: i32,
    pub margin: Thickness,
    pub padding: Thickness,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
}

/// First non-absent tier wins.
#[inline]
fn cascade<T: Copy>(instance: Option<T>, class: Option<T>) -> Option<T> {
    instance.or(class)
}

/// Min/max for one axis before any explicit size is applied.
fn bounds(overrides: &PropertySet, defaults: &PropertySet, axis: Axis) -> (i32, i32) {
    let (min, max) = match axis {
        Axis::Horizontal => (
            cascade(overrides.min_width, defaults.min_width),
            cascade(overrides.max_width, defaults.max_width),
        ),
        Axis::Vertical => (
            cascade(overrides.min_height, defaults.min_height),
            cascade(overrides.max_height, defaults.max_height),
        ),
    };
    (min.unwrap_or(0), max.unwrap_or(UNBOUNDED))
}

impl Resolved {
    /// Run the cascade for every attribute.
    pub fn resolve(overrides: &PropertySet, defaults: &PropertySet) -> Self {
        let width = cascade(overrides.width, defaults.width);
        let height = cascade(overrides.height, defaults.height);
        let (min_width, max_width) = match width {
            Some(w) => (w, w),
            None => bounds(overrides, defaults, Axis::Horizontal),
        };
        let (min_height, max_height) = match height {
            Some(h) => (h, h),
            None => bounds(overrides, defaults, Axis::Vertical),
        };

        Self {
            background: cascade(overrides.background, defaults.background),
            foreground: cascade(overrides.foreground, defaults.foreground),
            width,
            height,
            min_width,
            max_width,
            min_height,
            max_height,
            margin: cascade(overrides.margin, defaults.margin).unwrap_or_default(),
            padding: cascade(overrides.padding, defaults.padding).unwrap_or_default(),
            horizontal_alignment: cascade(overrides.horizontal_alignment, defaults.horizontal_alignment)
                .unwrap_or_default(),
            vertical_alignment: cascade(overrides.vertical_alignment, defaults.vertical_alignment)
                .unwrap_or_default(),
        }
    }

    /// Look up one attribute.
    pub fn get(&self, property: Property) -> PropertyValue {
        match property {
            Property::Background => PropertyValue::Color(self.background),
            Property::Foreground => PropertyValue::Color(self.foreground),
            Property::Height => PropertyValue::Size(self.height),
            Property::HorizontalAlignment => PropertyValue::Horizontal(self.horizontal_alignment),
            Property::Margin => PropertyValue::Thickness(self.margin),
            Property::MaxHeight => PropertyValue::Bound(self.max_height),
            Property::MaxWidth => PropertyValue::Bound(self.max_width),
            Property::MinHeight => PropertyValue::Bound(self.min_height),
            Property::MinWidth => PropertyValue::Bound(self.min_width),
            Property::Padding => PropertyValue::Thickness(self.padding),
            Property::VerticalAlignment => PropertyValue::Vertical(self.vertical_alignment),
            Property::Width => PropertyValue::Size(self.width),
        }
    }

    /// Margin plus padding.
    #[inline]
    pub fn insets(&self) -> Thickness {
        self.margin.add(&self.padding)
    }
}

/// Validate the combination of overrides and defaults.
///
/// Negative values fail with [`ControlError::InvalidValue`]. A configured min
/// above the configured max on either axis fails with
/// [`ControlError::Constraint`]; an explicit size replaces both bounds and
/// is not checked against them.
pub(crate) fn validate(overrides: &PropertySet, defaults: &PropertySet) -> Result<()> {
    defaults.check_values()?;
    overrides.check_values()?;

    for axis in [Axis::Horizontal, Axis::Vertical] {
        let (min, max) = bounds(overrides, defaults, axis);
        if min > max {
            return Err(ControlError::Constraint { axis, min, max });
        }
    }

    Ok(())
}
