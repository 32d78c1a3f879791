//! Game records and the ways a team can be presented.
//!
//! A `GameRecord` stores the home and away sides as they come from the data
//! file. Winning/losing views are derived from the score, so a record never
//! has to keep the two views in sync.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::BlasetablesError;

/// One simulated game.
///
/// `season` and `day` are 0-based, exactly as stored by the league.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub season: u32,
    pub day: u32,
    #[serde(default)]
    pub is_postseason: bool,

    pub home_team_name: String,
    pub home_team_nickname: String,
    /// Hex code point, e.g. `0x1F980`
    pub home_team_emoji: String,
    pub away_team_name: String,
    pub away_team_nickname: String,
    pub away_team_emoji: String,

    #[serde(default)]
    pub home_pitcher_name: String,
    #[serde(default)]
    pub away_pitcher_name: String,

    pub home_score: i64,
    pub away_score: i64,

    /// Modeled win probability of the home team (0..1)
    #[serde(default)]
    pub home_odds: Option<f64>,
    /// Modeled win probability of the away team (0..1)
    #[serde(default)]
    pub away_odds: Option<f64>,
}

/// A venue side of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Venue {
    Home,
    Away,
}

/// A side of a game as seen by a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Winning,
    Losing,
    Home,
    Away,
}

impl Side {
    /// Prefix used in internal column keys (`winningTeamName`, `awayOdds`, ...).
    pub fn prefix(self) -> &'static str {
        match self {
            Side::Winning => "winning",
            Side::Losing => "losing",
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

/// How a team is shown in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum NameStyle {
    /// Full name, e.g. "Canada Moist Talkers"
    Long,
    /// Nickname, e.g. "Moist Talkers"
    #[default]
    Short,
    /// Team emoji
    Emoji,
}

impl NameStyle {
    /// Suffix used in internal column keys.
    pub fn key_suffix(self) -> &'static str {
        match self {
            NameStyle::Long => "TeamName",
            NameStyle::Short => "TeamNickname",
            NameStyle::Emoji => "TeamEmoji",
        }
    }
}

impl FromStr for NameStyle {
    type Err = BlasetablesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(NameStyle::Long),
            "short" => Ok(NameStyle::Short),
            "emoji" => Ok(NameStyle::Emoji),
            other => Err(BlasetablesError::UnknownNameStyle(other.to_string())),
        }
    }
}

impl GameRecord {
    /// The venue that won the game. Home takes a (never expected) tie.
    pub fn winner(&self) -> Venue {
        if self.away_score > self.home_score {
            Venue::Away
        } else {
            Venue::Home
        }
    }

    /// Resolve a table side to a concrete venue for this game.
    pub fn venue(&self, side: Side) -> Venue {
        match (side, self.winner()) {
            (Side::Home, _) => Venue::Home,
            (Side::Away, _) => Venue::Away,
            (Side::Winning, winner) => winner,
            (Side::Losing, Venue::Home) => Venue::Away,
            (Side::Losing, Venue::Away) => Venue::Home,
        }
    }

    pub fn team(&self, side: Side, style: NameStyle) -> &str {
        match (self.venue(side), style) {
            (Venue::Home, NameStyle::Long) => &self.home_team_name,
            (Venue::Home, NameStyle::Short) => &self.home_team_nickname,
            (Venue::Home, NameStyle::Emoji) => &self.home_team_emoji,
            (Venue::Away, NameStyle::Long) => &self.away_team_name,
            (Venue::Away, NameStyle::Short) => &self.away_team_nickname,
            (Venue::Away, NameStyle::Emoji) => &self.away_team_emoji,
        }
    }

    pub fn pitcher(&self, side: Side) -> &str {
        match self.venue(side) {
            Venue::Home => &self.home_pitcher_name,
            Venue::Away => &self.away_pitcher_name,
        }
    }

    pub fn score(&self, side: Side) -> i64 {
        match self.venue(side) {
            Venue::Home => self.home_score,
            Venue::Away => self.away_score,
        }
    }

    pub fn odds(&self, side: Side) -> Option<f64> {
        match self.venue(side) {
            Venue::Home => self.home_odds,
            Venue::Away => self.away_odds,
        }
    }

    /// Whether either team is one of `nicknames`.
    ///
    /// Matches nicknames and long names; accents are folded so that
    /// "Dale" selects "Dalé".
    pub fn involves_any(&self, nicknames: &[String]) -> bool {
        let names = [
            &self.home_team_nickname,
            &self.home_team_name,
            &self.away_team_nickname,
            &self.away_team_name,
        ];
        nicknames.iter().any(|wanted| {
            let wanted = sanitize_name(wanted);
            names.iter().any(|name| sanitize_name(name) == wanted)
        })
    }
}

/// Fold the one accented team name in the league to plain ASCII.
pub fn sanitize_name(name: &str) -> String {
    name.replace('é', "e").replace('É', "E")
}


#[cfg(test)]
mod tests {
    use super::fixtures::{away_shutout, home_win};
    use super::*;

    #[test]
    fn test_winner_derived_from_score() {
        assert_eq!(home_win().winner(), Venue::Home);
        assert_eq!(away_shutout().winner(), Venue::Away);
    }

    #[test]
    fn test_winning_losing_views() {
        let game = away_shutout();
        assert_eq!(game.team(Side::Winning, NameStyle::Short), "Tigers");
        assert_eq!(game.team(Side::Losing, NameStyle::Long), "Miami Dalé");
        assert_eq!(game.score(Side::Winning), 7);
        assert_eq!(game.score(Side::Losing), 0);
        assert_eq!(game.pitcher(Side::Winning), "Jaylen Hotdogfingers");
        assert_eq!(game.odds(Side::Losing), Some(0.55));
    }

    #[test]
    fn test_home_away_views_ignore_result() {
        let game = away_shutout();
        assert_eq!(game.team(Side::Home, NameStyle::Emoji), "0x1F3B8");
        assert_eq!(game.score(Side::Away), 7);
    }

    #[test]
    fn test_name_style_from_str() {
        assert_eq!("long".parse::<NameStyle>().unwrap(), NameStyle::Long);
        assert_eq!("short".parse::<NameStyle>().unwrap(), NameStyle::Short);
        assert_eq!("emoji".parse::<NameStyle>().unwrap(), NameStyle::Emoji);
        let err = "fancy".parse::<NameStyle>().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("fancy"));
    }

    #[test]
    fn test_involves_any_folds_accents() {
        let game = away_shutout();
        assert!(game.involves_any(&["Dale".to_string()]));
        assert!(game.involves_any(&["Hades Tigers".to_string()]));
        assert!(!game.involves_any(&["Crabs".to_string()]));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "season": 0, "day": 4,
            "homeTeamName": "Boston Flowers", "homeTeamNickname": "Flowers", "homeTeamEmoji": "0x1F339",
            "awayTeamName": "Seattle Garages", "awayTeamNickname": "Garages", "awayTeamEmoji": "0x1F3B8",
            "homeScore": 3, "awayScore": 4
        }"#;
        let game: GameRecord = serde_json::from_str(json).unwrap();
        assert!(!game.is_postseason);
        assert_eq!(game.home_odds, None);
        assert_eq!(game.home_pitcher_name, "");
        assert_eq!(game.team(Side::Winning, NameStyle::Short), "Garages");
    }
}
