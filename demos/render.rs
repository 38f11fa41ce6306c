//! Render Example - measure a small control tree and print it
//!
//! Builds a panel out of labels in stacks, measures it against the terminal
//! size, and writes the rendered lines with crossterm colors.
//!
//! Run with: RUST_LOG=spark_controls=debug cargo run --example render

use std::io::{self, Write};

use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{queue, terminal};
use tracing_subscriber::EnvFilter;

use spark_controls::{
    Attr, Control, HorizontalAlignment, Label, Line, Rgba, Stack, Style, TextWrap, Thickness,
    VerticalAlignment,
};

fn to_color(color: Option<Rgba>) -> Color {
    match color {
        None => Color::Reset,
        Some(c) if c.is_ansi() => Color::AnsiValue(c.ansi_index()),
        Some(c) => Color::Rgb {
            r: c.r as u8,
            g: c.g as u8,
            b: c.b as u8,
        },
    }
}

fn print_line(out: &mut impl Write, line: &Line) -> io::Result<()> {
    for cell in line.cells() {
        if cell.is_continuation() {
            continue;
        }
        queue!(
            out,
            SetForegroundColor(to_color(cell.fg)),
            SetBackgroundColor(to_color(cell.bg)),
        )?;
        if cell.attrs.contains(Attr::BOLD) {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        queue!(out, Print(cell.symbol.as_ref()), SetAttribute(Attribute::Reset))?;
    }
    queue!(out, ResetColor, Print("\n"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let (cols, rows) = terminal::size().unwrap_or((80, 24));

    let title_style = Style::INHERIT.attrs(Attr::BOLD).fg(Rgba::YELLOW);
    let title = Control::builder(Label::new("spark-controls").style(title_style))
        .horizontal_alignment(HorizontalAlignment::Center)
        .build()?;
    let body = Control::builder(Label::new(
        "Margins, padding and alignment resolve into a measured box; every cell is painted.",
    ))
    .max_width(36)
    .build()?;
    let footer = Control::builder(Label::new("measure → render → lines").wrap(TextWrap::Truncate))
        .foreground(Rgba::GRAY)
        .horizontal_alignment(HorizontalAlignment::Right)
        .build()?;

    let menu = Stack::vertical()
        .child(Control::new(Label::new("one"))?)
        .child(Control::new(Label::new("two"))?);
    let sidebar = Control::builder(menu)
        .background(Rgba::from_rgb_int(0x44475a))
        .padding(Thickness::symmetric(1, 0))
        .vertical_alignment(VerticalAlignment::Center)
        .build()?;

    let content = Stack::vertical().spacing(1).child(title).child(body).child(footer);
    let row = Stack::horizontal().spacing(2).child(sidebar).child(Control::new(content)?);

    let panel = Control::builder(row)
        .margin(Thickness::symmetric(2, 1))
        .padding(1)
        .background(Rgba::from_rgb_int(0x282a36))
        .foreground(Rgba::WHITE)
        .build()?;

    let (height, width) = panel.measure(rows as i32, cols as i32)?;
    println!("measured {height}x{width} in a {rows}x{cols} terminal\n");

    let mut out = io::stdout().lock();
    for line in panel.render(height, width) {
        print_line(&mut out, &line)?;
    }
    out.flush()?;

    Ok(())
}
