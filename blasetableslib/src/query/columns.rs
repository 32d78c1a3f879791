//! Column planning: which game fields end up in a table, in which order.
//!
//! The layout is fixed:
//!
//! ```text
//! Sea | Day | Post | [Pitcher] | Team | (Odds) | Score | Score | (Odds) | Team | [Pitcher]
//! ```
//!
//! The left side is the winner (or home team) and the right side mirrors it
//! for the loser (or away team). Odds columns only feed the underdog
//! annotation and are pruned before anything is displayed.

use crate::data::record::{NameStyle, Side};
use crate::query::options::ViewOptions;

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A game field that can be shown as a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Season,
    Day,
    Postseason,
    Pitcher(Side),
    Team(Side, NameStyle),
    Odds(Side),
    Score(Side),
}

impl Column {
    /// Internal camelCase key, e.g. `winningTeamEmoji` or `awayOdds`.
    pub fn key(self) -> String {
        match self {
            Column::Season => "season".to_string(),
            Column::Day => "day".to_string(),
            Column::Postseason => "isPostseason".to_string(),
            Column::Pitcher(side) => format!("{}PitcherName", side.prefix()),
            Column::Team(side, style) => format!("{}{}", side.prefix(), style.key_suffix()),
            Column::Odds(side) => format!("{}Odds", side.prefix()),
            Column::Score(side) => format!("{}Score", side.prefix()),
        }
    }

    pub fn is_odds(self) -> bool {
        matches!(self, Column::Odds(_))
    }

    pub fn is_emoji(self) -> bool {
        matches!(self, Column::Team(_, NameStyle::Emoji))
    }

    /// Right side scores hug the left side scores; emoji sit centered.
    pub fn alignment(self) -> Alignment {
        match self {
            Column::Score(Side::Losing) | Column::Score(Side::Away) => Alignment::Right,
            Column::Team(_, NameStyle::Emoji) => Alignment::Center,
            _ => Alignment::Left,
        }
    }
}

/// A column together with its header label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedColumn {
    pub column: Column,
    pub label: &'static str,
}

/// Header labels for one side of the table.
struct SideLabels {
    pitcher: &'static str,
    team: &'static str,
    odds: &'static str,
}

fn side_labels(side: Side) -> SideLabels {
    match side {
        Side::Winning => SideLabels {
            pitcher: "WP",
            team: "Winner",
            odds: "W Odds",
        },
        Side::Losing => SideLabels {
            pitcher: "LP",
            team: "Loser",
            odds: "L Odds",
        },
        Side::Home => SideLabels {
            pitcher: "Home P",
            team: "Home",
            odds: "H Odds",
        },
        Side::Away => SideLabels {
            pitcher: "Away P",
            team: "Away",
            odds: "A Odds",
        },
    }
}

/// Ordered columns of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPlan {
    columns: Vec<PlannedColumn>,
}

impl ColumnPlan {
    /// Plan the columns for a set of view options.
    pub fn build(options: &ViewOptions) -> Self {
        let (left, right) = options.orientation.sides();
        let style = options.name_style;
        let mut plan = ColumnPlan {
            columns: Vec::with_capacity(11),
        };

        plan.push(Column::Season, "Sea");
        plan.push(Column::Day, "Day");
        plan.push(Column::Postseason, "Post");

        let l = side_labels(left);
        if options.pitchers.shows(left) {
            plan.push(Column::Pitcher(left), l.pitcher);
        }
        plan.push(Column::Team(left, style), l.team);
        plan.push(Column::Odds(left), l.odds);
        plan.push(Column::Score(left), "Score");

        let r = side_labels(right);
        plan.push(Column::Score(right), "Score");
        plan.push(Column::Odds(right), r.odds);
        plan.push(Column::Team(right, style), r.team);
        if options.pitchers.shows(right) {
            plan.push(Column::Pitcher(right), r.pitcher);
        }

        plan
    }

    fn push(&mut self, column: Column, label: &'static str) {
        self.columns.push(PlannedColumn { column, label });
    }

    /// The same plan without odds columns.
    pub fn without_odds(&self) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .filter(|c| !c.column.is_odds())
                .copied()
                .collect(),
        }
    }

    pub fn columns(&self) -> &[PlannedColumn] {
        &self.columns
    }

    pub fn contains(&self, column: Column) -> bool {
        self.columns.iter().any(|c| c.column == column)
    }

    pub fn keys(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.column.key()).collect()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.label).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
