//! Stack - children laid out in a row or a column.

use tracing::warn;

use crate::control::{Control, Lines, Widget};
use crate::text::Line;
use crate::types::{shrink, Orientation};

/// A child of a stack.
pub type Child = Control<Box<dyn Widget>>;

/// Lays children out one after another along its orientation.
///
/// Each child is measured against the space the previous children left
/// over and rendered at its measured size on the main axis and the full
/// stack size on the cross axis.
#[derive(Default)]
pub struct Stack {
    pub children: Vec<Child>,
    pub orientation: Orientation,
    /// Blank cells (horizontal) or lines (vertical) between children.
    pub spacing: i32,
}

impl Stack {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Default::default()
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Negative spacing counts as none.
    pub fn spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing.max(0);
        self
    }

    pub fn child<W: Widget + 'static>(mut self, child: Control<W>) -> Self {
        self.children.push(child.boxed());
        self
    }

    /// `(gap before, main size, cross size)` of each child within `main`,
    /// given the cross-axis size.
    fn allocate(&self, main: i32, cross: i32) -> Vec<(i32, i32, i32)> {
        let mut remaining = main;
        let mut slots = Vec::with_capacity(self.children.len());

        for (i, child) in self.children.iter().enumerate() {
            let gap = if i == 0 { 0 } else { self.spacing.max(0).min(remaining) };
            remaining = shrink(remaining, gap);

            let measured = match self.orientation {
                Orientation::Vertical => child.measure(remaining, cross),
                Orientation::Horizontal => child.measure(cross, remaining),
            };
            // The budgets here are never negative, so only a child whose kind
            // defaults now conflict with its overrides can fail.
            let (height, width) = match measured {
                Ok(size) => size,
                Err(err) => {
                    warn!(child = i, %err, "child cannot be measured, collapsing it");
                    (0, 0)
                }
            };
            let (size, extent) = match self.orientation {
                Orientation::Vertical => (height, width),
                Orientation::Horizontal => (width, height),
            };
            let size = size.min(remaining);

            remaining = shrink(remaining, size);
            slots.push((gap, size, extent));
        }

        slots
    }
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stack")
            .field("children", &self.children.len())
            .field("orientation", &self.orientation)
            .field("spacing", &self.spacing)
            .finish()
    }
}

impl Widget for Stack {
    fn measure_core(&self, inner_height: i32, inner_width: i32) -> (i32, i32) {
        let (main, cross) = match self.orientation {
            Orientation::Vertical => (inner_height, inner_width),
            Orientation::Horizontal => (inner_width, inner_height),
        };

        let slots = self.allocate(main, cross);
        let main_total = slots
            .iter()
            .fold(0i32, |acc, (gap, size, _)| acc.saturating_add(*gap).saturating_add(*size));
        let cross_max = slots.iter().map(|(_, _, extent)| *extent).max().unwrap_or(0);

        match self.orientation {
            Orientation::Vertical => (main_total, cross_max),
            Orientation::Horizontal => (cross_max, main_total),
        }
    }

    fn render_core(&self, inner_height: i32, inner_width: i32) -> Box<dyn Iterator<Item = Line> + '_> {
        match self.orientation {
            Orientation::Vertical => {
                let slots = self.allocate(inner_height, inner_width);
                Box::new(self.children.iter().zip(slots).flat_map(move |(child, (gap, height, _))| {
                    std::iter::repeat_n(Line::new(), gap as usize).chain(child.render(height, inner_width))
                }))
            }
            Orientation::Horizontal => {
                let slots = self.allocate(inner_width, inner_height);
                let mut columns: Vec<(usize, Lines<'_>)> = self
                    .children
                    .iter()
                    .zip(slots)
                    .map(|(child, (gap, width, _))| (gap as usize, child.render(inner_height, width)))
                    .collect();
                let rows = usize::try_from(inner_height).unwrap_or(0);
                Box::new((0..rows).map(move |_| {
                    let mut line = Line::new();
                    for (gap, lines) in &mut columns {
                        line.push_filler(*gap, None, None);
                        if let Some(part) = lines.next() {
                            line.append(part);
                        }
                    }
                    line
                }))
            }
        }
    }
}
