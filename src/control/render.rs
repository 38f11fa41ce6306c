//! Render engine.
//!
//! Turns a control into exactly `height` lines of exactly `width` cells.
//! Lines are produced on demand by [`Lines`]; every call to
//! [`Control::render`] starts a fresh, independent sequence.

use std::collections::VecDeque;

use tracing::{debug, warn};

use super::{Control, Widget};
use crate::error::Result;
use crate::text::Line;
use crate::types::{
    shrink, split_horizontal, split_vertical, HorizontalAlignment, Rgba, VerticalAlignment,
};

impl<W: Widget> Control<W> {
    /// Render into a `(height, width)` box.
    ///
    /// Pass the size returned by [`measure`](Self::measure) (or any box at
    /// least as large as the margin + padding footprint). A box too small for
    /// the insets renders as filler only. Negative dimensions are treated as
    /// zero. Never fails.
    pub fn render(&self, height: i32, width: i32) -> Lines<'_> {
        if height < 0 || width < 0 {
            warn!(height, width, "negative render size, clamping to zero");
        }
        let height = height.max(0);
        let width = width.max(0);

        let resolved = self.resolved();
        let insets = resolved.insets();
        let fits = height >= insets.vertical() && width >= insets.horizontal();
        let inner_height = shrink(height, insets.vertical());
        let inner_width = shrink(width, insets.horizontal());

        let frame = if fits && inner_height > 0 && inner_width > 0 {
            Some(Frame {
                left: insets.left as usize,
                top: insets.top as usize,
                inner_height: inner_height as usize,
                inner_width: inner_width as usize,
                horizontal: resolved.horizontal_alignment,
                vertical: resolved.vertical_alignment,
                source: Source::Pending(self.widget.render_core(inner_height, inner_width)),
                above: 0,
            })
        } else {
            None
        };

        Lines {
            row: 0,
            height: height as usize,
            width: width as usize,
            fg: resolved.foreground,
            bg: resolved.background,
            frame,
        }
    }

    /// Render at the most recently measured size (empty if never measured).
    pub fn render_measured(&self) -> Lines<'_> {
        let (height, width) = self.last_measurement().unwrap_or((0, 0));
        self.render(height, width)
    }

    /// Measure against the available box, then render at the measured size.
    pub fn layout(&self, available_height: i32, available_width: i32) -> Result<Lines<'_>> {
        let (height, width) = self.measure(available_height, available_width)?;
        Ok(self.render(height, width))
    }
}

// =============================================================================
// Lines - Lazy render output
// =============================================================================

/// Lazily rendered lines of a control.
///
/// Always yields exactly the requested number of lines, each exactly the
/// requested width.
pub struct Lines<'a> {
    row: usize,
    height: usize,
    width: usize,
    fg: Option<Rgba>,
    bg: Option<Rgba>,
    /// None when there is no room for content.
    frame: Option<Frame<'a>>,
}

/// Where the inner box sits and what fills it.
struct Frame<'a> {
    left: usize,
    top: usize,
    inner_height: usize,
    inner_width: usize,
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
    source: Source<'a>,
    /// Filler lines above the content, known once the source is prepared.
    above: usize,
}

enum Source<'a> {
    /// Widget output not pulled yet.
    Pending(Box<dyn Iterator<Item = Line> + 'a>),
    /// Top-aligned content pulled one line at a time, with the rows left.
    Streaming(Box<dyn Iterator<Item = Line> + 'a>, usize),
    /// Content collected up front because its height decides the offset.
    Buffered(VecDeque<Line>),
}

impl<'a> Frame<'a> {
    /// Decide the vertical offset, collecting content if the alignment needs
    /// its height.
    fn prepare(&mut self) {
        let Source::Pending(_) = self.source else {
            return;
        };
        let Source::Pending(content) =
            std::mem::replace(&mut self.source, Source::Buffered(VecDeque::new()))
        else {
            return;
        };

        match self.vertical {
            VerticalAlignment::Top | VerticalAlignment::Stretch => {
                self.source = Source::Streaming(content, self.inner_height);
            }
            VerticalAlignment::Center | VerticalAlignment::Bottom => {
                let mut lines: VecDeque<Line> = content.take(self.inner_height + 1).collect();
                if lines.len() > self.inner_height {
                    debug!(inner_height = self.inner_height, "content taller than box, clipping");
                    lines.truncate(self.inner_height);
                }
                let slack = (self.inner_height - lines.len()) as i32;
                self.above = split_vertical(self.vertical, slack).0 as usize;
                self.source = Source::Buffered(lines);
            }
        }
    }

    fn next_content(&mut self) -> Option<Line> {
        match &mut self.source {
            Source::Pending(_) => None,
            Source::Streaming(lines, left) => {
                if *left == 0 {
                    return None;
                }
                *left -= 1;
                let line = lines.next();
                if *left == 0 && line.is_some() && lines.next().is_some() {
                    debug!(inner_height = self.inner_height, "content taller than box, clipping");
                }
                line
            }
            Source::Buffered(lines) => lines.pop_front(),
        }
    }

    /// Inner-box row `index`, aligned and exactly `inner_width` wide.
    fn inner_row(&mut self, index: usize, fg: Option<Rgba>, bg: Option<Rgba>) -> Line {
        self.prepare();
        let content = if index < self.above { None } else { self.next_content() };
        let Some(mut content) = content else {
            return Line::filler(self.inner_width, fg, bg);
        };

        content.truncate(self.inner_width);
        let slack = (self.inner_width - content.width()) as i32;
        let (before, after) = split_horizontal(self.horizontal, slack);

        let mut line = Line::filler(before as usize, fg, bg);
        line.append(content.inherit(fg, bg));
        line.push_filler(after as usize, fg, bg);
        line
    }

    /// Full-width row `row` of the control's box.
    fn row(&mut self, row: usize, width: usize, fg: Option<Rgba>, bg: Option<Rgba>) -> Line {
        if row < self.top || row >= self.top + self.inner_height {
            return Line::filler(width, fg, bg);
        }

        let mut line = Line::filler(self.left, fg, bg);
        line.append(self.inner_row(row - self.top, fg, bg));
        line.push_filler(width - self.left - self.inner_width, fg, bg);
        line
    }
}

impl Iterator for Lines<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        if self.row >= self.height {
            return None;
        }
        let row = self.row;
        self.row += 1;

        Some(match &mut self.frame {
            Some(frame) => frame.row(row, self.width, self.fg, self.bg),
            None => Line::filler(self.width, self.fg, self.bg),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.height - self.row;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Lines<'_> {}

impl std::iter::FusedIterator for Lines<'_> {}
