//! Box-drawn tables for the terminal.

use console::{measure_text_width, pad_str, Style};

use super::transform::{DisplayTable, PostseasonGlyphs};
use super::Renderer;
use crate::query::columns::Alignment;

/// Renders a grid with a heavy header rule, caption below.
#[derive(Debug, Clone)]
pub struct ConsoleRenderer {
    header: Style,
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleRenderer {
    /// Bold headers when the terminal supports it.
    pub fn new() -> Self {
        Self {
            header: Style::new().bold(),
        }
    }

    /// Never emit escape codes (files, tests).
    pub fn plain() -> Self {
        Self {
            header: Style::new().bold().force_styling(false),
        }
    }

    fn grid(&self, table: &DisplayTable) -> String {
        let widths: Vec<usize> = table
            .columns()
            .iter()
            .enumerate()
            .map(|(i, column)| {
                table
                    .rows
                    .iter()
                    .map(|row| measure_text_width(&row[i]))
                    .chain(std::iter::once(measure_text_width(column.label)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let rule = |left: &str, fill: &str, mid: &str, right: &str| -> String {
            let segments: Vec<String> = widths.iter().map(|w| fill.repeat(w + 2)).collect();
            format!("{}{}{}\n", left, segments.join(mid), right)
        };

        let mut out = String::new();
        out.push_str(&rule("┏", "━", "┳", "┓"));

        let headers: Vec<String> = table
            .columns()
            .iter()
            .zip(&widths)
            .map(|(column, width)| {
                let padded = pad_str(column.label, *width, justify(column.column.alignment()), None);
                self.header.apply_to(padded).to_string()
            })
            .collect();
        out.push_str(&format!("┃ {} ┃\n", headers.join(" ┃ ")));
        out.push_str(&rule("┡", "━", "╇", "┩"));

        for row in &table.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(table.columns().iter().zip(&widths))
                .map(|(cell, (column, width))| {
                    pad_str(cell, *width, justify(column.column.alignment()), None).into_owned()
                })
                .collect();
            out.push_str(&format!("│ {} │\n", cells.join(" │ ")));
        }

        out.push_str(&rule("└", "─", "┴", "┘"));
        out
    }
}

fn justify(alignment: Alignment) -> console::Alignment {
    match alignment {
        Alignment::Left => console::Alignment::Left,
        Alignment::Center => console::Alignment::Center,
        Alignment::Right => console::Alignment::Right,
    }
}

impl Renderer for ConsoleRenderer {
    fn glyphs(&self) -> PostseasonGlyphs {
        PostseasonGlyphs {
            regular: " ",
            postseason: "Y",
        }
    }

    fn render(&self, table: &DisplayTable, caption: &str) -> String {
        format!("\n\n{}\n{}\n\n", self.grid(table), caption)
    }
}
