//! Output: turn game records into tables and emit them.
//!
//! This module handles the last stage of the pipeline:
//!
//! - **transform**: records → renderer-agnostic display strings
//! - **Renderer**: display strings → terminal grid or Markdown text
//! - **OutputTarget**: standard output or an append-only output file
//!
//! Renderers only serialize. Anything that changes what a cell says belongs
//! in [`transform`].

pub mod terminal;
pub mod markdown;
pub mod target;
pub mod transform;

pub use terminal::ConsoleRenderer;
pub use markdown::MarkdownRenderer;
pub use target::{OutputTarget, OVERWRITE_GRACE_PERIOD};
pub use transform::{decode_emoji, transform, with_odds, DisplayTable, PostseasonGlyphs};

/// Serializes a display table.
pub trait Renderer {
    /// Glyphs used for the postseason flag.
    fn glyphs(&self) -> PostseasonGlyphs;

    /// Full caption for a table description.
    fn caption(&self, description: &str) -> String {
        description.to_string()
    }

    /// Render a table together with its caption.
    fn render(&self, table: &DisplayTable, caption: &str) -> String;
}
