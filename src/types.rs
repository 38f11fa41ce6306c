//! Core types for spark-controls.
//!
//! Plain value types that flow through the measure/render protocol:
//! colors, text attributes, cells, insets and alignments.

use std::borrow::Cow;

// =============================================================================
// Sizes
// =============================================================================

/// Sentinel for "no constraint" on an available dimension or a max bound.
///
/// Arithmetic on sizes saturates, so `UNBOUNDED` minus an inset stays
/// `UNBOUNDED`.
pub const UNBOUNDED: i32 = i32::MAX;

/// Subtract an inset from a size, keeping `UNBOUNDED` intact and never going
/// below zero.
#[inline]
pub(crate) const fn shrink(size: i32, inset: i32) -> i32 {
    if size == UNBOUNDED {
        return UNBOUNDED;
    }
    let inner = size.saturating_sub(inset);
    if inner < 0 { 0 } else { inner }
}

/// Add an inset back onto a size, saturating at `UNBOUNDED`.
#[inline]
pub(crate) const fn grow(size: i32, inset: i32) -> i32 {
    size.saturating_add(inset)
}

/// Layout axis, used to report which constraint failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// "No color" is expressed as `Option<Rgba>::None` by the controls, meaning
/// inherit from the surroundings (ultimately the terminal default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Create an ANSI palette color (0-255).
    ///
    /// Uses special marker: r=-2, g=palette_index.
    /// - 0-7: Standard colors
    /// - 8-15: Bright colors
    /// - 16-231: 6x6x6 RGB cube
    /// - 232-255: Grayscale
    pub const fn ansi(index: u8) -> Self {
        Self {
            r: -2,
            g: index as i16,
            b: 0,
            a: 255,
        }
    }

    /// Check if this is an ANSI palette color.
    #[inline]
    pub const fn is_ansi(&self) -> bool {
        self.r == -2
    }

    /// Get ANSI palette index (only valid if is_ansi() returns true).
    #[inline]
    pub const fn ansi_index(&self) -> u8 {
        self.g as u8
    }

    /// Create from 0xRRGGBB integer format.
    ///
    /// # Examples
    ///
    /// ```
    /// use spark_controls::types::Rgba;
    ///
    /// let red = Rgba::from_rgb_int(0xff0000);
    /// assert_eq!(red, Rgba::rgb(255, 0, 0));
    /// ```
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Create from a packed 0xAARRGGBB value.
    ///
    /// ```
    /// use spark_controls::types::Rgba;
    ///
    /// assert_eq!(Rgba::from_argb_int(0x80ff0000), Rgba::new(255, 0, 0, 128));
    /// ```
    pub const fn from_argb_int(argb: u32) -> Self {
        Self::new(
            ((argb >> 16) & 0xFF) as u8,
            ((argb >> 8) & 0xFF) as u8,
            (argb & 0xFF) as u8,
            ((argb >> 24) & 0xFF) as u8,
        )
    }

    /// Pack into 0xAARRGGBB. Returns None for ANSI palette colors.
    pub const fn to_argb_int(&self) -> Option<u32> {
        if self.is_ansi() {
            return None;
        }
        Some(
            ((self.a as u32 & 0xFF) << 24)
                | ((self.r as u32 & 0xFF) << 16)
                | ((self.g as u32 & 0xFF) << 8)
                | (self.b as u32 & 0xFF),
        )
    }

}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const INVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

// =============================================================================
// Style - What a run of text is painted with
// =============================================================================

/// Paint for a run of cells. `None` colors inherit from the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Option<Rgba>,
    pub bg: Option<Rgba>,
    pub attrs: Attr,
}

impl Style {
    /// Style that inherits everything.
    pub const INHERIT: Self = Self {
        fg: None,
        bg: None,
        attrs: Attr::NONE,
    };

    pub const fn fg(mut self, fg: Rgba) -> Self {
        self.fg = Some(fg);
        self
    }

    pub const fn bg(mut self, bg: Rgba) -> Self {
        self.bg = Some(bg);
        self
    }

    pub const fn attrs(mut self, attrs: Attr) -> Self {
        self.attrs = attrs;
        self
    }
}

// =============================================================================
// Cell - The atomic unit of a rendered line
// =============================================================================

/// Symbol stored in the cell that follows a wide grapheme.
pub const CONTINUATION: &str = "";

/// A single terminal cell.
///
/// Every line produced by a control is a row of these, one per terminal
/// column. A wide grapheme occupies its own cell followed by a
/// [`CONTINUATION`] cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The grapheme cluster shown in this column: a base character plus any
    /// combining marks. A space for filler.
    pub symbol: Cow<'static, str>,
    /// Foreground color; `None` inherits.
    pub fg: Option<Rgba>,
    /// Background color; `None` inherits.
    pub bg: Option<Rgba>,
    /// Attribute flags (bold, italic, etc.).
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

impl Cell {
    /// An unstyled space.
    pub const BLANK: Self = Self::filler(None, None);

    /// A cell showing `symbol` painted with `style`.
    pub fn new(symbol: impl Into<Cow<'static, str>>, style: Style) -> Self {
        Self {
            symbol: symbol.into(),
            fg: style.fg,
            bg: style.bg,
            attrs: style.attrs,
        }
    }

    /// A blank cell painted with the given colors.
    pub const fn filler(fg: Option<Rgba>, bg: Option<Rgba>) -> Self {
        Self {
            symbol: Cow::Borrowed(" "),
            fg,
            bg,
            attrs: Attr::NONE,
        }
    }

    /// The placeholder that trails a wide grapheme painted with `style`.
    pub const fn continuation(style: Style) -> Self {
        Self {
            symbol: Cow::Borrowed(CONTINUATION),
            fg: style.fg,
            bg: style.bg,
            attrs: style.attrs,
        }
    }

    /// True for the placeholder that trails a wide grapheme.
    #[inline]
    pub fn is_continuation(&self) -> bool {
        self.symbol.is_empty()
    }

    /// Fill in any missing colors from the surrounding control.
    #[inline]
    pub fn inherit(self, fg: Option<Rgba>, bg: Option<Rgba>) -> Self {
        Self {
            fg: self.fg.or(fg),
            bg: self.bg.or(bg),
            ..self
        }
    }
}

// =============================================================================
// Thickness - Inset on each side
// =============================================================================

/// Inset on each side of a box, in cells.
///
/// Components are validated non-negative when assigned to a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Thickness {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Thickness {
    pub const ZERO: Self = Self::uniform(0);

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same inset on every side.
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// `horizontal` on left and right, `vertical` on top and bottom.
    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Left + right.
    #[inline]
    pub const fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Top + bottom.
    #[inline]
    pub const fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }

    /// Component-wise sum.
    pub const fn add(&self, other: &Thickness) -> Self {
        Self::new(
            self.left.saturating_add(other.left),
            self.top.saturating_add(other.top),
            self.right.saturating_add(other.right),
            self.bottom.saturating_add(other.bottom),
        )
    }

    /// The first negative component, if any, as (side, value).
    pub(crate) const fn first_negative(&self) -> Option<(&'static str, i32)> {
        if self.left < 0 {
            Some(("left", self.left))
        } else if self.top < 0 {
            Some(("top", self.top))
        } else if self.right < 0 {
            Some(("right", self.right))
        } else if self.bottom < 0 {
            Some(("bottom", self.bottom))
        } else {
            None
        }
    }
}

impl From<i32> for Thickness {
    fn from(value: i32) -> Self {
        Self::uniform(value)
    }
}

impl From<(i32, i32, i32, i32)> for Thickness {
    fn from((left, top, right, bottom): (i32, i32, i32, i32)) -> Self {
        Self::new(left, top, right, bottom)
    }
}

// =============================================================================
// Alignment
// =============================================================================

/// Horizontal placement of content inside its allocated box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
    /// Content fills the width.
    #[default]
    Stretch,
}

/// Vertical placement of content inside its allocated box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
    /// Content fills the height.
    #[default]
    Stretch,
}

/// Split `slack` filler cells into (before, after) for a horizontal alignment.
///
/// Center puts the odd cell after.
pub(crate) const fn split_horizontal(align: HorizontalAlignment, slack: i32) -> (i32, i32) {
    match align {
        HorizontalAlignment::Left | HorizontalAlignment::Stretch => (0, slack),
        HorizontalAlignment::Right => (slack, 0),
        HorizontalAlignment::Center => (slack / 2, slack - slack / 2),
    }
}

/// Split `slack` filler lines into (above, below) for a vertical alignment.
pub(crate) const fn split_vertical(align: VerticalAlignment, slack: i32) -> (i32, i32) {
    match align {
        VerticalAlignment::Top | VerticalAlignment::Stretch => (0, slack),
        VerticalAlignment::Bottom => (slack, 0),
        VerticalAlignment::Center => (slack / 2, slack - slack / 2),
    }
}

// =============================================================================
// Widget enums
// =============================================================================

/// Text wrap mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextWrap {
    NoWrap,
    #[default]
    Wrap,
    Truncate,
}

/// Direction a stack lays out its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

// =============================================================================
// Tests
// =============================================================================
