//! Query planning: what to show and how to describe it.
//!
//! - **Options**: validated user choices (`ViewOptions`, selectors)
//! - **Columns**: the ordered column plan derived from the options
//! - **Description**: the caption printed with each table
//!
//! ## Example
//!
//! ```rust
//! use blasetableslib::query::{ColumnPlan, Orientation, Pitchers, ViewOptions};
//!
//! let options = ViewOptions::new()
//!     .orientation(Orientation::HomeAway)
//!     .pitchers(Pitchers::none().with_home(true));
//! let plan = ColumnPlan::build(&options);
//! assert_eq!(plan.labels()[3], "Home P");
//! ```

pub mod columns;
pub mod description;
pub mod options;

pub use columns::{Alignment, Column, ColumnPlan, PlannedColumn};
pub use description::{describe, INDEXING_NOTE};
pub use options::{
    Orientation, Pitchers, SeasonSelector, TeamSelector, ViewOptions, DEFAULT_RESULT_LIMIT,
};
