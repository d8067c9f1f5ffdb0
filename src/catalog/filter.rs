use crate::model::text::fold;
use crate::{Difficulty, Recipe};
use std::convert::Infallible;
use std::str::FromStr;

/// Difficulty criterion for browsing.
///
/// Parsing never fails: anything that is not a known difficulty means `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    pub fn matches(self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(wanted) => wanted == difficulty,
        }
    }
}

impl From<&str> for DifficultyFilter {
    fn from(s: &str) -> Self {
        s.parse().map_or(DifficultyFilter::All, DifficultyFilter::Only)
    }
}

impl FromStr for DifficultyFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Preparation time bucket.
///
/// Parsing never fails: unknown values mean `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeBucket {
    #[default]
    All,
    /// Under 30 minutes
    Short,
    /// 30 to 60 minutes, both inclusive
    Medium,
    /// Over 60 minutes
    Long,
}

impl TimeBucket {
    pub fn matches(self, minutes: u32) -> bool {
        match self {
            TimeBucket::All => true,
            TimeBucket::Short => minutes < 30,
            TimeBucket::Medium => (30..=60).contains(&minutes),
            TimeBucket::Long => minutes > 60,
        }
    }
}

impl From<&str> for TimeBucket {
    fn from(s: &str) -> Self {
        match fold(s.trim()).as_str() {
            "<30" | "short" | "corta" | "rapida" => TimeBucket::Short,
            "30-60" | "30..60" | "30..=60" | "medium" | "media" => TimeBucket::Medium,
            ">60" | "long" | "larga" => TimeBucket::Long,
            _ => TimeBucket::All,
        }
    }
}

impl FromStr for TimeBucket {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Category criterion, matched against recipe tags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Folded (lower-cased, accents stripped) tag prefix
    Prefix(String),
}

impl CategoryFilter {
    /// A recipe matches when one of its tags starts with the category,
    /// ignoring case and accents: "plato" matches "Plato fuerte".
    pub fn matches(&self, tags: &[String]) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Prefix(prefix) => tags.iter().any(|tag| fold(tag).starts_with(prefix)),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        let folded = fold(s.trim());
        match folded.as_str() {
            "" | "all" | "todas" | "todos" => CategoryFilter::All,
            _ => CategoryFilter::Prefix(folded),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// All browsing criteria, combined with AND.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterQuery {
    /// Case-insensitive text searched in title and ingredients
    pub text: String,
    pub difficulty: DifficultyFilter,
    pub time: TimeBucket,
    pub category: CategoryFilter,
}

impl FilterQuery {
    /// Builds a query from the raw values of the browse controls.
    pub fn from_parts(text: &str, difficulty: &str, time: &str, category: &str) -> Self {
        FilterQuery {
            text: text.to_string(),
            difficulty: DifficultyFilter::from(difficulty),
            time: TimeBucket::from(time),
            category: CategoryFilter::from(category),
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_with(self.needle().as_deref(), recipe)
    }

    /// Lower-cased search text, or `None` when it is blank. Surrounding
    /// spaces are kept: " de " only matches a standalone word.
    pub(super) fn needle(&self) -> Option<String> {
        if self.text.trim().is_empty() {
            None
        } else {
            Some(self.text.to_lowercase())
        }
    }

    pub(super) fn matches_with(&self, needle: Option<&str>, recipe: &Recipe) -> bool {
        let text_matches = needle.map_or(true, |needle| {
            recipe.title.to_lowercase().contains(needle)
                || recipe.ingredients.to_lowercase().contains(needle)
        });
        text_matches
            && self.difficulty.matches(recipe.difficulty)
            && self.time.matches(recipe.time)
            && self.category.matches(&recipe.tags)
    }
}
