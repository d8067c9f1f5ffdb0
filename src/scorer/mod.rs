//! Ranks catalog recipes against the user's ingredient tokens.
//!
//! Matching is plain substring containment on the lower-cased ingredient
//! text, so the token "sal" also matches "salsa". Word boundaries are not
//! considered.

use crate::{Recipe, Token};

mod model;

pub use model::{BestMatch, ScoredRecipe};

/// Counts the tokens whose normalized text occurs anywhere in the recipe's
/// ingredients, ignoring case. A token listed twice counts twice.
pub fn score_recipe(recipe: &Recipe, tokens: &[Token]) -> usize {
    let haystack = recipe.ingredients.to_lowercase();
    tokens
        .iter()
        .filter(|token| haystack.contains(token.normalized()))
        .count()
}

/// Scores every recipe, returning one entry per recipe in catalog order.
pub fn score_catalog(catalog: &[Recipe], tokens: &[Token]) -> Vec<ScoredRecipe> {
    catalog
        .iter()
        .enumerate()
        .map(|(index, recipe)| ScoredRecipe {
            index,
            score: score_recipe(recipe, tokens),
        })
        .collect()
}

/// Picks the highest scoring recipe.
///
/// Ties go to the recipe that comes first in the catalog. Returns `None` when
/// no recipe matches any token, or when there are no tokens at all.
pub fn best_match<'a>(catalog: &'a [Recipe], tokens: &[Token]) -> Option<BestMatch<'a>> {
    let mut best: Option<ScoredRecipe> = None;

    for scored in score_catalog(catalog, tokens) {
        // Strictly greater keeps the earliest recipe on ties
        if scored.score > best.map_or(0, |b| b.score) {
            best = Some(scored);
        }
    }

    best.map(|b| BestMatch {
        recipe: &catalog[b.index],
        index: b.index,
        score: b.score,
    })
}
