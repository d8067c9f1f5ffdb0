//! Builds a suggested recipe from the ingredients the user has.
//!
//! The best catalog match (see [`crate::scorer`]) is used as a base and
//! extended with the user's ingredients. When nothing in the catalog matches,
//! a generic template is filled in instead. Nothing here touches the catalog.

use crate::model::RecipeView;
use crate::scorer::best_match;
use crate::{parse_ingredients, Difficulty, GeneratedRecipe, Recipe, Token};

pub const FALLBACK_TITLE: &str = "Receta sugerida";
pub const FALLBACK_DESCRIPTION: &str = "Una idea rápida con los ingredientes que tienes a mano.";
pub const FALLBACK_STEPS: &str = "1. Lava y corta todos los ingredientes.\n\
    2. Cocina los ingredientes a fuego medio durante unos 20 minutos, removiendo de vez en cuando.\n\
    3. Ajusta la sazón al gusto y sirve caliente.";
pub const FALLBACK_DIFFICULTY: Difficulty = Difficulty::Easy;
pub const FALLBACK_TIME: u32 = 30;

pub const MERGED_TITLE_SUFFIX: &str = " (con tus ingredientes)";
pub const MERGED_DESCRIPTION_SUFFIX: &str = " Adaptada con los ingredientes que tienes.";

/// Lower bound for the time of a merged suggestion, in minutes
pub const MIN_MERGED_TIME: u32 = 20;

/// Suggests a recipe for the raw ingredient text.
///
/// Returns `None` when the text holds no ingredients. The result depends only
/// on `catalog` and `raw_text`, so repeated calls give identical output.
///
/// # Examples
///
/// ```
/// use recipe_suggest::{synthesize, Difficulty, Recipe};
///
/// let catalog = vec![
///     Recipe::new("r2", "Panettone casero", Difficulty::Medium, 120)
///         .with_ingredients("500g harina\n200ml leche"),
/// ];
/// let suggestion = synthesize(&catalog, "harina, pasas").unwrap();
/// assert_eq!(suggestion.time, 96);
/// assert_eq!(suggestion.ingredients, "500g harina\n200ml leche\npasas");
///
/// assert!(synthesize(&catalog, "  ").is_none());
/// ```
pub fn synthesize(catalog: &[Recipe], raw_text: &str) -> Option<GeneratedRecipe> {
    let tokens = parse_ingredients(raw_text);
    if tokens.is_empty() {
        return None;
    }
    Some(synthesize_from_tokens(catalog, &tokens))
}

/// Same as [`synthesize`] for already parsed, non-empty tokens.
pub fn synthesize_from_tokens(catalog: &[Recipe], tokens: &[Token]) -> GeneratedRecipe {
    match best_match(catalog, tokens) {
        Some(best) => merge(best.recipe, tokens),
        None => fallback(tokens),
    }
}

/// Generic suggestion listing the user's ingredients as typed.
pub fn fallback(tokens: &[Token]) -> GeneratedRecipe {
    let ingredients: Vec<&str> = tokens.iter().map(Token::original).collect();
    GeneratedRecipe {
        title: FALLBACK_TITLE.to_string(),
        description: FALLBACK_DESCRIPTION.to_string(),
        ingredients: ingredients.join("\n"),
        steps: FALLBACK_STEPS.to_string(),
        difficulty: FALLBACK_DIFFICULTY,
        time: FALLBACK_TIME,
    }
}

/// Adapts `base` to the user's ingredients.
///
/// Steps and difficulty are kept as they are; the ingredient list gains the
/// user's ingredients that it does not already mention and the time shrinks
/// by a fifth, never below [`MIN_MERGED_TIME`].
pub fn merge(base: &Recipe, tokens: &[Token]) -> GeneratedRecipe {
    GeneratedRecipe {
        title: format!("{}{MERGED_TITLE_SUFFIX}", base.title),
        description: format!("{}{MERGED_DESCRIPTION_SUFFIX}", base.description),
        ingredients: merge_ingredients(base, tokens).join("\n"),
        steps: base.steps.clone(),
        difficulty: base.difficulty,
        time: scaled_time(base.time),
    }
}

/// The base recipe's cleaned ingredient lines followed by every token not yet
/// mentioned, in the order first seen.
///
/// A token counts as mentioned when any line collected so far contains it,
/// ignoring case; this is the same substring rule used for scoring.
pub fn merge_ingredients(base: &Recipe, tokens: &[Token]) -> Vec<String> {
    let mut merged: Vec<String> = base
        .ingredient_lines()
        .into_iter()
        .map(str::to_string)
        .collect();
    let mut lowered: Vec<String> = merged.iter().map(|line| line.to_lowercase()).collect();

    for token in tokens {
        if lowered.iter().any(|line| line.contains(token.normalized())) {
            continue;
        }
        merged.push(token.original().to_string());
        lowered.push(token.normalized().to_string());
    }

    merged
}

/// `max(20, floor(minutes * 0.8))`
pub fn scaled_time(minutes: u32) -> u32 {
    let scaled = u64::from(minutes) * 4 / 5;
    u32::try_from(scaled)
        .unwrap_or(u32::MAX)
        .max(MIN_MERGED_TIME)
}
