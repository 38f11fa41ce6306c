//! End-to-end checks of the measure/render protocol through the public API.
//!
//! Run with: cargo test --test control

use std::cell::Cell as Counter;

use spark_controls::{
    Axis, Cell, Control, ControlDefaults, ControlError, HorizontalAlignment, Label, Line,
    Property, PropertyValue, Rgba, Stack, Style, Thickness, VerticalAlignment, Widget, UNBOUNDED,
};

// =============================================================================
// Test doubles
// =============================================================================

/// A `rows` x `cols` block of '#', counting measure_core calls.
#[derive(Debug)]
struct Block {
    rows: usize,
    cols: usize,
    measured: Counter<usize>,
}

impl Block {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            measured: Counter::new(0),
        }
    }
}

impl Widget for Block {
    fn measure_core(&self, _: i32, _: i32) -> (i32, i32) {
        self.measured.set(self.measured.get() + 1);
        (self.rows as i32, self.cols as i32)
    }

    fn render_core(&self, _: i32, _: i32) -> Box<dyn Iterator<Item = Line> + '_> {
        let row = "#".repeat(self.cols);
        Box::new((0..self.rows).map(move |_| Line::from(row.as_str())))
    }
}

fn texts<W: Widget>(control: &Control<W>, h: i32, w: i32) -> Vec<String> {
    control.render(h, w).map(|l| l.text()).collect()
}

// =============================================================================
// Property cascade
// =============================================================================

#[test]
fn min_above_max_is_a_constraint_error() {
    let mut control = Control::new(Block::new(1, 1)).unwrap();
    control.set_min_width(Some(5)).unwrap();
    let err = control.set_max_width(Some(3)).unwrap_err();
    assert_eq!(err, ControlError::Constraint { axis: Axis::Horizontal, min: 5, max: 3 });
}

#[test]
fn explicit_width_pins_min_and_max() {
    let control = Control::builder(Block::new(1, 1))
        .min_width(2)
        .max_width(30)
        .width(7)
        .build()
        .unwrap();
    assert_eq!(control.resolve(Property::MinWidth), PropertyValue::Bound(7));
    assert_eq!(control.resolve(Property::MaxWidth), PropertyValue::Bound(7));
}

#[test]
fn negative_values_are_value_errors() {
    assert!(Control::builder(Block::new(1, 1)).height(-1).build().unwrap_err().is_value_error());
    assert!(Control::builder(Block::new(1, 1))
        .margin(Thickness::new(-1, 0, 0, 0))
        .build()
        .unwrap_err()
        .is_value_error());

    let control = Control::new(Block::new(1, 1)).unwrap();
    assert!(control.measure(-5, 0).unwrap_err().is_value_error());
}

struct Themed;

const THEMED: ControlDefaults = ControlDefaults::EMPTY
    .with_background(Rgba::BLUE)
    .with_padding(Thickness::uniform(1));

impl Widget for Themed {
    fn defaults(&self) -> &ControlDefaults {
        &THEMED
    }

    fn measure_core(&self, _: i32, _: i32) -> (i32, i32) {
        (1, 1)
    }

    fn render_core(&self, _: i32, _: i32) -> Box<dyn Iterator<Item = Line> + '_> {
        Box::new(std::iter::once(Line::from("t")))
    }
}

#[test]
fn kind_defaults_sit_between_override_and_fallback() {
    let plain = Control::new(Themed).unwrap();
    assert_eq!(plain.background(), Some(Rgba::BLUE));
    assert_eq!(plain.padding(), Thickness::uniform(1));
    assert_eq!(plain.margin(), Thickness::ZERO);
    assert_eq!(plain.measure(10, 10), Ok((3, 3)));

    let custom = Control::builder(Themed).background(Rgba::RED).padding(0).build().unwrap();
    assert_eq!(custom.background(), Some(Rgba::RED));
    assert_eq!(custom.measure(10, 10), Ok((1, 1)));
}

// =============================================================================
// Measure
// =============================================================================

#[test]
fn measure_is_idempotent_and_memoized() {
    let control = Control::new(Block::new(2, 3)).unwrap();
    let first = control.measure(8, 8).unwrap();
    let second = control.measure(8, 8).unwrap();
    assert_eq!(first, second);
    assert_eq!(control.widget().measured.get(), 1);
}

#[test]
fn measure_reports_min_when_it_cannot_fit() {
    let control = Control::builder(Block::new(1, 1)).min_height(4).build().unwrap();
    assert_eq!(control.measure(2, UNBOUNDED), Ok((4, 1)));
}

// =============================================================================
// Render
// =============================================================================

#[test]
fn render_always_fills_the_requested_box() {
    let control = Control::builder(Block::new(3, 6))
        .margin(Thickness::new(1, 0, 2, 1))
        .padding(1)
        .align(HorizontalAlignment::Right, VerticalAlignment::Bottom)
        .build()
        .unwrap();
    for h in 0..8 {
        for w in 0..12 {
            let lines: Vec<Line> = control.render(h, w).collect();
            assert_eq!(lines.len(), h as usize, "h={h} w={w}");
            assert!(lines.iter().all(|l| l.width() == w as usize), "h={h} w={w}");
        }
    }
}

#[test]
fn center_center_pads_evenly() {
    let control = Control::builder(Block::new(1, 4))
        .align(HorizontalAlignment::Center, VerticalAlignment::Center)
        .build()
        .unwrap();
    let lines = texts(&control, 5, 10);
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[2], "   ####   ");
    for (i, line) in lines.iter().enumerate() {
        if i != 2 {
            assert_eq!(line, "          ");
        }
    }
}

#[test]
fn margin_wraps_explicitly_sized_content() {
    let control = Control::builder(Block::new(1, 3))
        .margin(Thickness::uniform(1))
        .padding(Thickness::ZERO)
        .width(3)
        .height(1)
        .background(Rgba::GREEN)
        .build()
        .unwrap();
    let (h, w) = control.measure(UNBOUNDED, UNBOUNDED).unwrap();
    assert_eq!((h, w), (3, 5));

    let lines: Vec<Line> = control.render(h, w).collect();
    assert_eq!(lines.len(), 3);
    let filler = Cell::filler(None, Some(Rgba::GREEN));
    assert!(lines[0].cells().iter().all(|c| *c == filler));
    assert!(lines[2].cells().iter().all(|c| *c == filler));
    assert_eq!(lines[1].width(), 5);
    assert_eq!(lines[1].cells()[0], filler);
    assert_eq!(lines[1].text(), " ### ");
    assert_eq!(lines[1].cells()[4], filler);
}

#[test]
fn render_without_room_for_insets_is_blank() {
    let control = Control::builder(Block::new(1, 1)).padding(3).build().unwrap();
    assert_eq!(texts(&control, 2, 4), vec!["    ", "    "]);
}

#[test]
fn nested_controls_compose() {
    let title = Control::builder(Label::new("Title").style(Style::INHERIT.fg(Rgba::YELLOW)))
        .horizontal_alignment(HorizontalAlignment::Center)
        .build()
        .unwrap();
    let body = Control::builder(Label::new("body text"))
        .padding(Thickness::symmetric(1, 0))
        .build()
        .unwrap();
    let stack = Stack::vertical().spacing(1).child(title).child(body);
    let panel = Control::builder(stack)
        .margin(1)
        .background(Rgba::ansi(4))
        .build()
        .unwrap();

    let (h, w) = panel.measure(20, 20).unwrap();
    assert_eq!((h, w), (5, 13));
    let lines = texts(&panel, h, w);
    assert_eq!(
        lines,
        vec![
            "             ",
            "    Title    ",
            "             ",
            "  body text  ",
            "             ",
        ]
    );

    for line in panel.render(h, w) {
        assert!(line.cells().iter().all(|c| c.bg == Some(Rgba::ansi(4))));
    }
}

#[test]
fn grapheme_clusters_survive_measure_and_render() {
    let text = "cafe\u{301} 👨\u{200d}👩\u{200d}👧";
    let label = Control::new(Label::new(text)).unwrap();
    let (h, w) = label.measure(5, 20).unwrap();
    assert_eq!((h, w), (1, 7));
    assert_eq!(texts(&label, h, w), vec![text]);
}
