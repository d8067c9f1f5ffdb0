use super::{Difficulty, RecipeView};
use serde::{Deserialize, Serialize};

/// A catalog entry.
///
/// `id` is unique within a catalog and `time` is strictly positive; both are
/// checked when the recipe is inserted into a [`CatalogStore`](crate::CatalogStore).
///
/// # Examples
///
/// ```
/// use recipe_suggest::{Difficulty, Recipe};
///
/// let recipe = Recipe::new("r1", "Galletas de jengibre", Difficulty::Easy, 45)
///     .with_ingredients("300g harina\n1 cda jengibre molido")
///     .with_tags(["Postre", "Galletas"]);
/// assert_eq!(recipe.tags[0], "Postre");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// One ingredient per line
    #[serde(default)]
    pub ingredients: String,
    /// One step per line, in order
    #[serde(default)]
    pub steps: String,
    pub difficulty: Difficulty,
    /// Preparation time in minutes
    pub time: u32,
    /// Category labels such as "Postre" or "Plato fuerte"
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Recipe {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        difficulty: Difficulty,
        time: u32,
    ) -> Self {
        Recipe {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            ingredients: String::new(),
            steps: String::new(),
            difficulty,
            time,
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = ingredients.into();
        self
    }

    pub fn with_steps(mut self, steps: impl Into<String>) -> Self {
        self.steps = steps.into();
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

impl RecipeView for Recipe {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn ingredients(&self) -> &str {
        &self.ingredients
    }

    fn steps(&self) -> &str {
        &self.steps
    }

    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    fn time(&self) -> u32 {
        self.time
    }
}

/// A suggestion produced from the user's ingredients.
///
/// Shaped like a [`Recipe`] but without an id: it is built fresh on every
/// request and never stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub steps: String,
    pub difficulty: Difficulty,
    pub time: u32,
}

impl RecipeView for GeneratedRecipe {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn ingredients(&self) -> &str {
        &self.ingredients
    }

    fn steps(&self) -> &str {
        &self.steps
    }

    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    fn time(&self) -> u32 {
        self.time
    }
}
