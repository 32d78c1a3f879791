//! Categories of notable games.

use std::fmt;
use std::str::FromStr;

use crate::error::BlasetablesError;

/// Why a game was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// High scores and a high run differential
    Blowout,
    /// The loser scored zero runs
    Shutout,
    /// The loser was shamed
    Shame,
    /// The underdog won by a large run differential
    Underdog,
    /// High-scoring one-run games
    MaxedOut,
    /// Low-scoring one-run games
    Defensive,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Category::Blowout,
        Category::Shutout,
        Category::Shame,
        Category::Underdog,
        Category::MaxedOut,
        Category::Defensive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Blowout => "blowout",
            Category::Shutout => "shutout",
            Category::Shame => "shame",
            Category::Underdog => "underdog",
            Category::MaxedOut => "maxedout",
            Category::Defensive => "defensive",
        }
    }

    /// Leading phrase of a table caption.
    pub fn phrase(self) -> &'static str {
        match self {
            Category::Blowout => {
                "Blowout games (games with high scores and high run differentials)"
            }
            Category::Shutout => "Shutout games (games where the loser had zero runs)",
            Category::Shame => "Shame games (games where the loser was shamed)",
            Category::Underdog => {
                "Underdog games (games where the underdog won with large run differential)"
            }
            Category::MaxedOut => "Maxed out games (high-scoring one-run games)",
            Category::Defensive => "Defensive games (low-scoring one-run games)",
        }
    }

    /// Comma-separated list of every valid name.
    pub fn valid_names() -> String {
        Category::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Category {
    type Err = BlasetablesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s.to_lowercase())
            .ok_or_else(|| BlasetablesError::UnknownCategory {
                name: s.to_string(),
                valid: Category::valid_names(),
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
