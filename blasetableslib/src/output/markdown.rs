//! Markdown tables.
//!
//! The postseason flag gets no column of its own: its glyph is appended to
//! the day cell, so a postseason game on day 102 reads `102*`.

use super::transform::{DisplayTable, PostseasonGlyphs};
use super::Renderer;
use crate::query::columns::{Alignment, Column};

/// Appended to every Markdown caption.
pub const POSTSEASON_NOTE: &str = " (asterisk indicates a postseason game)";

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    fn table(&self, table: &DisplayTable) -> String {
        let columns = table.columns();
        let postseason = table.position(Column::Postseason);
        let shown: Vec<usize> = (0..columns.len())
            .filter(|i| Some(*i) != postseason)
            .collect();

        let header: Vec<&str> = shown.iter().map(|&i| columns[i].label).collect();
        let separator: Vec<&str> = shown
            .iter()
            .map(|&i| match columns[i].column.alignment() {
                Alignment::Right => "------:",
                Alignment::Center => ":------:",
                Alignment::Left => "------",
            })
            .collect();

        let mut out = String::new();
        out.push_str(&pipe_row(&header));
        out.push_str(&pipe_row(&separator));

        for row in &table.rows {
            let cells: Vec<String> = shown
                .iter()
                .map(|&i| match (columns[i].column, postseason) {
                    (Column::Day, Some(post)) => format!("{}{}", row[i], row[post]),
                    _ => row[i].clone(),
                })
                .collect();
            out.push_str(&pipe_row(&cells));
        }
        out
    }
}

fn pipe_row<S: AsRef<str>>(cells: &[S]) -> String {
    let cells: Vec<&str> = cells.iter().map(|c| c.as_ref()).collect();
    format!("| {} |\n", cells.join(" | "))
}

impl Renderer for MarkdownRenderer {
    fn glyphs(&self) -> PostseasonGlyphs {
        PostseasonGlyphs {
            regular: "",
            postseason: "*",
        }
    }

    fn caption(&self, description: &str) -> String {
        format!("{}{}", description, POSTSEASON_NOTE)
    }

    fn render(&self, table: &DisplayTable, caption: &str) -> String {
        format!("\n\n{}\n\n{}\n", caption, self.table(table))
    }
}
