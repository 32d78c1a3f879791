//! Game data: records, categories, the league roster, and where records
//! come from.
//!
//! This module handles the first stage of the pipeline. Classification
//! happens upstream; by the time records reach this crate they are already
//! grouped by category and ranked.

pub mod category;
pub mod record;
pub mod source;
pub mod teams;

pub use category::Category;
pub use record::{sanitize_name, GameRecord, NameStyle, Side, Venue};
pub use source::{GameSource, JsonGameData};
pub use teams::{is_full_roster, ALL_TEAMS};
