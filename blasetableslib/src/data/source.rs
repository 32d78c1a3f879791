//! Loading pre-classified game data.
//!
//! Games arrive already sorted into categories and ranked, most notable
//! first. A source only narrows them down to the seasons, teams and
//! categories the user asked for; it never reclassifies or reorders.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::data::record::GameRecord;
use crate::data::Category;
use crate::error::BlasetablesError;
use crate::query::options::ViewOptions;
use crate::Result;

/// Anything that can hand over categorized record sets.
pub trait GameSource {
    /// Record sets in the order they should be rendered.
    fn parse(&self) -> Result<Vec<(Category, Vec<GameRecord>)>>;
}

/// A JSON file mapping category names to ranked arrays of games:
///
/// ```json
/// { "shutout": [ { "season": 2, "day": 9, ... } ], "underdog": [ ... ] }
/// ```
#[derive(Debug, Clone)]
pub struct JsonGameData {
    path: PathBuf,
    options: ViewOptions,
}

impl JsonGameData {
    pub fn new(path: impl AsRef<Path>, options: ViewOptions) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            options,
        }
    }

    fn load(&self) -> Result<HashMap<Category, Vec<GameRecord>>> {
        let text = fs::read_to_string(&self.path).map_err(|source| BlasetablesError::FileRead {
            path: self.path.clone(),
            source,
        })?;
        let raw: HashMap<String, Vec<GameRecord>> =
            serde_json::from_str(&text).map_err(|source| BlasetablesError::InvalidData {
                path: self.path.clone(),
                source,
            })?;

        let mut sets = HashMap::with_capacity(raw.len());
        for (name, records) in raw {
            let category: Category = name.parse()?;
            sets.insert(category, records);
        }
        info!(
            "loaded {} categories from {}",
            sets.len(),
            self.path.display()
        );
        Ok(sets)
    }

    fn selected(&self, record: &GameRecord) -> bool {
        let options = &self.options;
        options.seasons.matches(record.season)
            && (!options.postseason_only || record.is_postseason)
            && record.involves_any(&options.teams.teams)
    }
}

impl GameSource for JsonGameData {
    fn parse(&self) -> Result<Vec<(Category, Vec<GameRecord>)>> {
        let sets = self.load()?;
        let mut tables = Vec::new();
        for category in &self.options.categories {
            let Some(records) = sets.get(category) else {
                debug!("no {} games in {}", category, self.path.display());
                continue;
            };
            let total = records.len();
            let kept: Vec<GameRecord> = records
                .iter()
                .filter(|r| self.selected(r))
                .cloned()
                .collect();
            debug!("{}: kept {} of {} games", category, kept.len(), total);
            tables.push((*category, kept));
        }
        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::fixtures::{away_shutout, home_win};
    use crate::query::options::{SeasonSelector, TeamSelector};
    use tempfile::tempdir;

    fn write_data(dir: &Path, json: &serde_json::Value) -> PathBuf {
        let path = dir.join("games.json");
        fs::write(&path, serde_json::to_string(json).unwrap()).unwrap();
        path
    }

    fn sample(dir: &Path) -> PathBuf {
        write_data(
            dir,
            &serde_json::json!({
                "shutout": [away_shutout(), home_win()],
                "underdog": [home_win()],
            }),
        )
    }

    #[test]
    fn test_parse_follows_requested_order() {
        let dir = tempdir().unwrap();
        let path = sample(dir.path());
        let options = ViewOptions::new().categories(vec![
            Category::Underdog,
            Category::Blowout,
            Category::Shutout,
        ]);
        let tables = JsonGameData::new(&path, options).parse().unwrap();
        let categories: Vec<Category> = tables.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, vec![Category::Underdog, Category::Shutout]);
        assert_eq!(tables[1].1, vec![away_shutout(), home_win()]);
    }

    #[test]
    fn test_repeated_category_yields_one_table() {
        let dir = tempdir().unwrap();
        let path = sample(dir.path());
        let options = ViewOptions::new().categories(vec![
            Category::Shutout,
            Category::Underdog,
            Category::Shutout,
        ]);
        let tables = JsonGameData::new(&path, options).parse().unwrap();
        let categories: Vec<Category> = tables.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, vec![Category::Shutout, Category::Underdog]);
        assert_eq!(tables[0].1.len(), 2);
    }

    #[test]
    fn test_postseason_filter() {
        let dir = tempdir().unwrap();
        let path = sample(dir.path());
        let options = ViewOptions::new().postseason_only(true);
        let tables = JsonGameData::new(&path, options).parse().unwrap();
        let shutouts = &tables.iter().find(|(c, _)| *c == Category::Shutout).unwrap().1;
        assert_eq!(shutouts, &vec![away_shutout()]);
    }

    #[test]
    fn test_season_and_team_filters() {
        let dir = tempdir().unwrap();
        let path = sample(dir.path());

        let options = ViewOptions::new()
            .categories(vec![Category::Shutout])
            .seasons(SeasonSelector::from_values(["3"]).unwrap());
        let tables = JsonGameData::new(&path, options).parse().unwrap();
        assert_eq!(tables[0].1, vec![home_win()]);

        let options = ViewOptions::new()
            .categories(vec![Category::Shutout])
            .teams(TeamSelector::teams(["Dale"]));
        let tables = JsonGameData::new(&path, options).parse().unwrap();
        assert_eq!(tables[0].1, vec![away_shutout()]);
    }

    #[test]
    fn test_unknown_category_in_file() {
        let dir = tempdir().unwrap();
        let path = write_data(dir.path(), &serde_json::json!({ "nailbiter": [] }));
        let err = JsonGameData::new(&path, ViewOptions::new())
            .parse()
            .unwrap_err();
        assert!(matches!(err, BlasetablesError::UnknownCategory { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = JsonGameData::new(dir.path().join("nope.json"), ViewOptions::new())
            .parse()
            .unwrap_err();
        assert!(matches!(err, BlasetablesError::FileRead { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("games.json");
        fs::write(&path, "{ not json").unwrap();
        let err = JsonGameData::new(&path, ViewOptions::new())
            .parse()
            .unwrap_err();
        assert!(matches!(err, BlasetablesError::InvalidData { .. }));
    }
}
