//! Non-markup outputs of [`OrderDisplay`]

use super::display::{InfoSection, OrderDisplay};
use std::fmt::Write;

/// Converts a display structure into a concrete output form
pub trait DisplayBackend {
    type Output;

    fn render(&self, display: &OrderDisplay) -> Self::Output;
}

/// Terminal-friendly text: one `label: value` line per field, items as a
/// pipe-separated table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextBackend;

fn write_section(out: &mut String, section: &InfoSection) {
    let _ = writeln!(out, "{}", section.title);
    for field in &section.fields {
        let _ = writeln!(out, "  {}: {}", field.label, field.value);
    }
    out.push('\n');
}

impl DisplayBackend for PlainTextBackend {
    type Output = String;

    fn render(&self, display: &OrderDisplay) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} [{}]", display.header.title, display.header.status);
        out.push('\n');

        write_section(&mut out, &display.delivery);
        write_section(&mut out, &display.payment);

        let _ = writeln!(out, "{}", display.items.title);
        let _ = writeln!(out, "  {}", display.items.columns.join(" | "));
        for row in &display.items.rows {
            let _ = writeln!(out, "  {}", row.cells().join(" | "));
        }
        out.push('\n');

        write_section(&mut out, &display.details);
        out
    }
}

/// JSON serialisation of the display structure
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBackend {
    pub pretty: bool,
}

impl JsonBackend {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl DisplayBackend for JsonBackend {
    type Output = Result<String, serde_json::Error>;

    fn render(&self, display: &OrderDisplay) -> Self::Output {
        if self.pretty {
            serde_json::to_string_pretty(display)
        } else {
            serde_json::to_string(display)
        }
    }
}
