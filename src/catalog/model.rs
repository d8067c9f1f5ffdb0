use super::CatalogError;
use crate::{parse_minutes, Difficulty, Recipe};
use serde::Deserialize;

/// Shape of a recipe in a seed file.
///
/// More forgiving than [`Recipe`]: ids may be numbers, times may be written
/// as durations ("2h 30m") and multi-line fields may be lists of lines.
#[derive(Debug, Deserialize)]
pub(super) struct RecipeRecord {
    id: IdValue,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    ingredients: Lines,
    #[serde(default)]
    steps: Lines,
    difficulty: Difficulty,
    time: TimeValue,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdValue {
    Number(u64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TimeValue {
    Minutes(u32),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Lines {
    Text(String),
    List(Vec<String>),
}

impl Default for Lines {
    fn default() -> Self {
        Lines::Text(String::new())
    }
}

impl Lines {
    fn into_text(self) -> String {
        match self {
            Lines::Text(text) => text,
            Lines::List(lines) => lines.join("\n"),
        }
    }
}

impl RecipeRecord {
    /// Converts the record, failing when the time cannot be read as a duration.
    pub(super) fn into_recipe(self) -> Result<Recipe, CatalogError> {
        let id = match self.id {
            IdValue::Number(n) => n.to_string(),
            IdValue::Text(text) => text,
        };
        let time = match self.time {
            TimeValue::Minutes(minutes) => minutes,
            TimeValue::Text(text) => match parse_minutes(&text) {
                Some(minutes) => minutes,
                None => return Err(CatalogError::InvalidDuration { id, value: text }),
            },
        };

        Ok(Recipe {
            id,
            title: self.title,
            description: self.description,
            ingredients: self.ingredients.into_text(),
            steps: self.steps.into_text(),
            difficulty: self.difficulty,
            time,
            tags: self.tags,
        })
    }
}
