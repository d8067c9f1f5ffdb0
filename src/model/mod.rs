//! Recipe data types shared by the catalog, the suggestion engine and export.

mod difficulty;
mod duration;
mod recipe;
pub(crate) mod text;

pub use difficulty::{Difficulty, DifficultyParseError};
pub use duration::{format_minutes, parse_minutes};
pub use recipe::{GeneratedRecipe, Recipe};

/// Read-only view over anything shaped like a recipe.
///
/// Implemented by both catalog entries and generated suggestions so that
/// export and display code can treat them uniformly.
pub trait RecipeView {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn ingredients(&self) -> &str;
    fn steps(&self) -> &str;
    fn difficulty(&self) -> Difficulty;
    /// Preparation time in minutes
    fn time(&self) -> u32;

    /// Ingredient lines, trimmed, with empty lines removed.
    fn ingredient_lines(&self) -> Vec<&str> {
        text::clean_lines(self.ingredients())
    }
}
