use crate::Recipe;

/// A catalog recipe with its match score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredRecipe {
    /// Position of the recipe in catalog order
    pub index: usize,
    /// Number of tokens found in the recipe's ingredients
    pub score: usize,
}

/// The recipe chosen as the base for a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMatch<'a> {
    pub recipe: &'a Recipe,
    pub index: usize,
    pub score: usize,
}
