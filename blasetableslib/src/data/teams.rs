//! The league roster.

use super::record::sanitize_name;

/// Nicknames of every team in the league, by division.
pub const ALL_TEAMS: [&str; 20] = [
    // Good League
    "Lovers",
    "Tacos",
    "Steaks",
    "Breath Mints",
    "Firefighters",
    "Shoe Thieves",
    "Flowers",
    "Fridays",
    "Magic",
    "Millennials",
    // Evil League
    "Crabs",
    "Sunbeams",
    "Wild Wings",
    "Pies",
    "Garages",
    "Jazz Hands",
    "Spies",
    "Tigers",
    "Moist Talkers",
    "Dale",
];

/// Whether `teams` names every team on the roster, in any order.
/// `Dalé` and `Dale` count as the same team.
pub fn is_full_roster(teams: &[String]) -> bool {
    let given: Vec<String> = teams.iter().map(|t| sanitize_name(t)).collect();
    ALL_TEAMS
        .iter()
        .all(|team| given.iter().any(|t| t == team))
}
