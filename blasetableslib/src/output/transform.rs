//! Turn game records into display strings.
//!
//! Both renderers go through [`transform`], so a console table and a
//! Markdown table built from the same records always agree cell by cell.
//! The only renderer-specific input is the pair of postseason glyphs.
//!
//! The steps, in order:
//!
//! 1. keep the first `result_limit` records (they arrive most notable first)
//! 2. show season and day 1-based
//! 3. for underdog tables, append each side's win odds to its team name
//! 4. drop the odds columns
//! 5. render the postseason flag as a glyph
//! 6. decode emoji code points
//!
//! Every cell ends up as a `String`.

use log::debug;

use crate::data::record::{GameRecord, Side};
use crate::data::Category;
use crate::error::BlasetablesError;
use crate::query::columns::{Column, ColumnPlan, PlannedColumn};
use crate::Result;

/// How a renderer shows the postseason flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostseasonGlyphs {
    pub regular: &'static str,
    pub postseason: &'static str,
}

impl PostseasonGlyphs {
    pub fn glyph(&self, is_postseason: bool) -> &'static str {
        if is_postseason {
            self.postseason
        } else {
            self.regular
        }
    }
}

/// Renderer-agnostic table of display strings.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTable {
    /// The plan the rows were built from, without odds columns
    pub plan: ColumnPlan,
    /// One `Vec` per game, one cell per column
    pub rows: Vec<Vec<String>>,
}

impl DisplayTable {
    /// Displayed columns, in order.
    pub fn columns(&self) -> &[PlannedColumn] {
        self.plan.columns()
    }

    /// Index of a column, if present.
    pub fn position(&self, column: Column) -> Option<usize> {
        self.columns().iter().position(|c| c.column == column)
    }
}

/// Build a display table from records already filtered and ordered by
/// notability.
///
/// Fails with [`BlasetablesError::MissingField`] when `category` is
/// underdog and the plan or a record carries no odds for a side. Running
/// this again on `table.plan` therefore succeeds for every other category
/// and fails for underdog.
pub fn transform(
    records: &[GameRecord],
    plan: &ColumnPlan,
    category: Category,
    result_limit: usize,
    glyphs: PostseasonGlyphs,
) -> Result<DisplayTable> {
    let cut = &records[..records.len().min(result_limit)];
    debug!(
        "transforming {} of {} {} games",
        cut.len(),
        records.len(),
        category
    );

    let pruned = plan.without_odds();
    let mut rows = Vec::with_capacity(cut.len());
    for (index, record) in cut.iter().enumerate() {
        let mut cells = Vec::with_capacity(pruned.len());
        for planned in plan.columns() {
            let cell = match planned.column {
                Column::Season => one_based(record.season),
                Column::Day => one_based(record.day),
                Column::Postseason => glyphs.glyph(record.is_postseason).to_string(),
                Column::Pitcher(side) => record.pitcher(side).to_string(),
                Column::Score(side) => record.score(side).to_string(),
                Column::Team(side, style) => {
                    let name = decode_if_emoji(planned.column, record.team(side, style))?;
                    if category == Category::Underdog {
                        let odds = underdog_odds(record, side, plan, index)?;
                        with_odds(&name, odds)
                    } else {
                        name
                    }
                }
                // Odds only ever show up inside team cells
                Column::Odds(_) => continue,
            };
            cells.push(cell);
        }
        rows.push(cells);
    }

    Ok(DisplayTable { plan: pruned, rows })
}

/// 0-based season or day as users count it.
fn one_based(value: u32) -> String {
    (u64::from(value) + 1).to_string()
}

fn decode_if_emoji(column: Column, value: &str) -> Result<String> {
    if column.is_emoji() {
        decode_emoji(value).map(String::from)
    } else {
        Ok(value.to_string())
    }
}

fn underdog_odds(record: &GameRecord, side: Side, plan: &ColumnPlan, row: usize) -> Result<f64> {
    let column = Column::Odds(side);
    let missing = || BlasetablesError::MissingField {
        row,
        field: column.key(),
        columns: plan.keys(),
    };
    if !plan.contains(column) {
        return Err(missing());
    }
    record.odds(side).ok_or_else(missing)
}

/// `"<name> (<pct>%)"`, with the percentage rounded half away from zero.
pub fn with_odds(name: &str, odds: f64) -> String {
    format!("{} ({}%)", name, (100.0 * odds).round() as i64)
}

/// Decode a hex code point such as `0x1F980`, `U+1F980` or `1F980`.
pub fn decode_emoji(hex: &str) -> Result<char> {
    let trimmed = hex.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .or_else(|| trimmed.strip_prefix("U+"))
        .unwrap_or(trimmed);
    u32::from_str_radix(digits, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| BlasetablesError::InvalidEmoji(hex.to_string()))
}
