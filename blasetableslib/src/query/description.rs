//! One-line captions describing what a table contains.

use crate::data::teams::is_full_roster;
use crate::data::Category;
use crate::query::options::{SeasonSelector, TeamSelector};

/// Appended to every caption.
pub const INDEXING_NOTE: &str = " (note: all days and seasons displayed are 1-indexed)";

/// Describe a table: category, then seasons, postseason, and teams.
///
/// ```
/// use blasetableslib::{describe, Category, SeasonSelector, TeamSelector};
///
/// let seasons = SeasonSelector::from_values(["3"]).unwrap();
/// let desc = describe(Category::Shutout, &seasons, false, &TeamSelector::all());
/// assert_eq!(
///     desc,
///     "Shutout games (games where the loser had zero runs) for season 3 \
///      for all teams (note: all days and seasons displayed are 1-indexed)"
/// );
/// ```
pub fn describe(
    category: Category,
    seasons: &SeasonSelector,
    postseason_only: bool,
    teams: &TeamSelector,
) -> String {
    let mut desc = format!("{} ", category.phrase());

    match seasons {
        SeasonSelector::All => desc.push_str("for all time "),
        SeasonSelector::Seasons(labels) if labels.len() == 1 => {
            desc.push_str(&format!("for season {} ", labels[0]));
        }
        SeasonSelector::Seasons(labels) => {
            desc.push_str(&format!("for seasons {} ", labels.join(", ")));
        }
    }

    if postseason_only {
        desc.push_str("(postseason only) ");
    }

    let teams = &teams.teams;
    if teams.len() == 1 {
        desc.push_str(&format!("for team {}", teams[0]));
    } else if is_full_roster(teams) {
        desc.push_str("for all teams");
    } else {
        desc.push_str(&format!("for teams {}", teams.join(", ")));
    }

    desc.push_str(INDEXING_NOTE);
    desc
}
