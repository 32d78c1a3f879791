//! User options that control which games are shown and how.
//!
//! `ViewOptions` is validated once, up front. Everything downstream (column
//! planning, captions, data selection) can then rely on it being coherent.

use crate::data::record::{NameStyle, Side};
use crate::data::teams::ALL_TEAMS;
use crate::data::Category;
use crate::error::BlasetablesError;
use crate::Result;

/// Number of games shown per table unless told otherwise
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// How the two teams of a game are laid out across the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Winner on the left, loser on the right
    #[default]
    WinLoss,
    /// Home team on the left, away team on the right
    HomeAway,
}

impl Orientation {
    /// Resolve the two orientation switches. Win/loss takes precedence.
    pub fn from_flags(win_loss: bool, home_away: bool) -> Result<Self> {
        match (win_loss, home_away) {
            (true, _) => Ok(Orientation::WinLoss),
            (false, true) => Ok(Orientation::HomeAway),
            (false, false) => Err(BlasetablesError::MissingOrientation),
        }
    }

    /// (left side, right side)
    pub fn sides(self) -> (Side, Side) {
        match self {
            Orientation::WinLoss => (Side::Winning, Side::Losing),
            Orientation::HomeAway => (Side::Home, Side::Away),
        }
    }
}

/// Optional pitcher columns, one switch per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pitchers {
    pub winning: bool,
    pub losing: bool,
    pub home: bool,
    pub away: bool,
}

impl Pitchers {
    /// No pitcher columns
    pub fn none() -> Self {
        Self::default()
    }

    /// Builder: set winning pitcher column
    pub fn with_winning(mut self, include: bool) -> Self {
        self.winning = include;
        self
    }

    /// Builder: set losing pitcher column
    pub fn with_losing(mut self, include: bool) -> Self {
        self.losing = include;
        self
    }

    /// Builder: set home pitcher column
    pub fn with_home(mut self, include: bool) -> Self {
        self.home = include;
        self
    }

    /// Builder: set away pitcher column
    pub fn with_away(mut self, include: bool) -> Self {
        self.away = include;
        self
    }

    pub fn shows(&self, side: Side) -> bool {
        match side {
            Side::Winning => self.winning,
            Side::Losing => self.losing,
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }
}

/// Which seasons to show.
///
/// Labels are kept as the user typed them (1-based) so captions echo them
/// back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SeasonSelector {
    #[default]
    All,
    Seasons(Vec<String>),
}

impl SeasonSelector {
    /// Build from raw labels. Any `all` selects every season; no labels
    /// at all also means every season.
    pub fn from_values<I, S>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut labels = Vec::new();
        for value in values {
            let value = value.as_ref().trim();
            if value.eq_ignore_ascii_case("all") {
                return Ok(SeasonSelector::All);
            }
            match value.parse::<u32>() {
                Ok(n) if n >= 1 => labels.push(value.to_string()),
                _ => return Err(BlasetablesError::InvalidSeason(value.to_string())),
            }
        }
        if labels.is_empty() {
            Ok(SeasonSelector::All)
        } else {
            Ok(SeasonSelector::Seasons(labels))
        }
    }

    /// Whether a 0-based season index is selected.
    pub fn matches(&self, season: u32) -> bool {
        match self {
            SeasonSelector::All => true,
            SeasonSelector::Seasons(labels) => labels
                .iter()
                .filter_map(|label| label.parse::<u64>().ok())
                .any(|label| label == u64::from(season) + 1),
        }
    }
}

/// Which teams to show, by nickname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSelector {
    pub teams: Vec<String>,
}

impl Default for TeamSelector {
    fn default() -> Self {
        Self::all()
    }
}

impl TeamSelector {
    /// Every team on the roster
    pub fn all() -> Self {
        Self {
            teams: ALL_TEAMS.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Specific teams; an empty list means every team.
    pub fn teams<I, S>(teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let teams: Vec<String> = teams.into_iter().map(Into::into).collect();
        if teams.is_empty() {
            Self::all()
        } else {
            Self { teams }
        }
    }
}

/// Everything a table view needs to know about the user's request.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewOptions {
    pub orientation: Orientation,
    pub pitchers: Pitchers,
    pub name_style: NameStyle,
    pub result_limit: usize,
    pub seasons: SeasonSelector,
    pub postseason_only: bool,
    pub teams: TeamSelector,
    /// Categories to render, in order
    pub categories: Vec<Category>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            pitchers: Pitchers::none(),
            name_style: NameStyle::default(),
            result_limit: DEFAULT_RESULT_LIMIT,
            seasons: SeasonSelector::All,
            postseason_only: false,
            teams: TeamSelector::all(),
            categories: Category::ALL.to_vec(),
        }
    }
}

impl ViewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set orientation
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Builder: set pitcher columns
    pub fn pitchers(mut self, pitchers: Pitchers) -> Self {
        self.pitchers = pitchers;
        self
    }

    /// Builder: set team name style
    pub fn name_style(mut self, name_style: NameStyle) -> Self {
        self.name_style = name_style;
        self
    }

    /// Builder: set the maximum number of games per table
    pub fn result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }

    /// Builder: set season selection
    pub fn seasons(mut self, seasons: SeasonSelector) -> Self {
        self.seasons = seasons;
        self
    }

    /// Builder: only show postseason games
    pub fn postseason_only(mut self, postseason_only: bool) -> Self {
        self.postseason_only = postseason_only;
        self
    }

    /// Builder: set team selection
    pub fn teams(mut self, teams: TeamSelector) -> Self {
        self.teams = teams;
        self
    }

    /// Builder: set categories; an empty list means every category.
    /// Repeats are dropped, first mention wins.
    pub fn categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = if categories.is_empty() {
            Category::ALL.to_vec()
        } else {
            let mut unique = Vec::with_capacity(categories.len());
            for category in categories {
                if !unique.contains(&category) {
                    unique.push(category);
                }
            }
            unique
        };
        self
    }
}
