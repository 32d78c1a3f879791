//! # blasetableslib
//!
//! Tables of notable games from a simulated baseball league: blowouts,
//! shutouts, shame games, underdog wins, maxed-out and defensive one-run
//! games.
//!
//! ## Overview
//!
//! Games arrive already classified and ranked. This library decides which
//! columns to show, rewrites values for display, and renders the result as
//! a terminal grid or a Markdown table:
//!
//! - **Column planning**: win/loss or home/away layout, optional pitchers,
//!   long names, nicknames or emoji
//! - **Captions**: one sentence per table describing category, seasons and
//!   teams
//! - **Transformation**: 1-based seasons and days, odds on underdog tables,
//!   postseason markers, decoded emoji, shared by every renderer
//! - **Rendering**: terminal grid or Markdown, to standard output or
//!   appended to a file
//!
//! ## Example
//!
//! ```rust
//! use blasetableslib::{
//!     transform, Category, ColumnPlan, GameRecord, MarkdownRenderer, Renderer, ViewOptions,
//! };
//!
//! let game: GameRecord = serde_json::from_str(r#"{
//!     "season": 2, "day": 9,
//!     "homeTeamName": "Canada Moist Talkers", "homeTeamNickname": "Moist Talkers",
//!     "homeTeamEmoji": "0x1F5E3",
//!     "awayTeamName": "Baltimore Crabs", "awayTeamNickname": "Crabs",
//!     "awayTeamEmoji": "0x1F980",
//!     "homeScore": 5, "awayScore": 0,
//!     "homeOdds": 0.37, "awayOdds": 0.63
//! }"#).unwrap();
//!
//! let options = ViewOptions::new();
//! let plan = ColumnPlan::build(&options);
//! let renderer = MarkdownRenderer::new();
//! let table = transform(&[game], &plan, Category::Underdog, 10, renderer.glyphs()).unwrap();
//!
//! assert_eq!(table.rows[0][3], "Moist Talkers (37%)");
//! let text = renderer.render(&table, "Underdog games");
//! assert!(text.contains("| 3 | 10 | Moist Talkers (37%) | 5 | 0 | Crabs (63%) |"));
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod view;

pub use data::{Category, GameRecord, GameSource, JsonGameData, NameStyle, Side};
pub use error::BlasetablesError;
pub use output::{
    transform, ConsoleRenderer, DisplayTable, MarkdownRenderer, OutputTarget, PostseasonGlyphs,
    Renderer, OVERWRITE_GRACE_PERIOD,
};
pub use query::{
    describe, Alignment, Column, ColumnPlan, Orientation, Pitchers, SeasonSelector, TeamSelector,
    ViewOptions,
};
pub use view::TableView;

/// Result type for blasetableslib operations
pub type Result<T> = std::result::Result<T, BlasetablesError>;
