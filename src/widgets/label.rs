//! Label - a run of styled text.

use crate::control::{ControlDefaults, Widget};
use crate::text::{string_width, truncate_text, wrap_text, Line};
use crate::types::{HorizontalAlignment, Style, TextWrap, VerticalAlignment};

use super::to_size;

const LABEL_DEFAULTS: ControlDefaults = ControlDefaults::EMPTY
    .with_horizontal_alignment(HorizontalAlignment::Left)
    .with_vertical_alignment(VerticalAlignment::Top);

/// Text content.
///
/// Labels sit top-left in their box unless told otherwise.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Label {
    pub text: String,
    pub style: Style,
    pub wrap: TextWrap,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn wrap(mut self, wrap: TextWrap) -> Self {
        self.wrap = wrap;
        self
    }

    /// Text split into display lines for a given width.
    fn layout_lines(&self, width: i32) -> Vec<String> {
        let width = usize::try_from(width).unwrap_or(0);
        match self.wrap {
            TextWrap::Wrap => wrap_text(&self.text, width),
            TextWrap::NoWrap => self.text.lines().map(str::to_string).collect(),
            TextWrap::Truncate => self
                .text
                .lines()
                .map(|line| truncate_text(line, width, "…"))
                .collect(),
        }
    }
}

impl Widget for Label {
    fn defaults(&self) -> &ControlDefaults {
        &LABEL_DEFAULTS
    }

    fn measure_core(&self, _inner_height: i32, inner_width: i32) -> (i32, i32) {
        let lines = self.layout_lines(inner_width);
        let width = lines.iter().map(|l| string_width(l)).max().unwrap_or(0);
        (to_size(lines.len()), to_size(width))
    }

    fn render_core(&self, inner_height: i32, inner_width: i32) -> Box<dyn Iterator<Item = Line> + '_> {
        let style = self.style;
        Box::new(
            self.layout_lines(inner_width)
                .into_iter()
                .take(usize::try_from(inner_height).unwrap_or(0))
                .map(move |text| Line::styled(&text, style)),
        )
    }
}
