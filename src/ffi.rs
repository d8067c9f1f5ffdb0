//! UniFFI bindings for cross-platform support (iOS, Android).
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! Recipes cross the boundary as plain records; the catalog and favorites
//! stay behind the [`FfiRecipeBook`] object.

use crate::book::{BookError, RecipeBook};
use crate::catalog::{CatalogError, FilterQuery};
use crate::config::{Config, ConfigError};
use crate::export::ExportError;
use crate::{export, format_minutes, parse_ingredients as parse_internal};
use crate::{Difficulty, GeneratedRecipe, Recipe};
use camino::Utf8Path;
use std::sync::{Arc, Mutex, MutexGuard};

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum RecipeSuggestError {
    #[error("Recipe not found: {message}")]
    NotFound { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Catalog error: {message}")]
    CatalogError { message: String },
}

impl From<CatalogError> for RecipeSuggestError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::IoError(e) => RecipeSuggestError::IoError {
                message: e.to_string(),
            },
            CatalogError::YamlError(_)
            | CatalogError::JsonError(_)
            | CatalogError::InvalidDuration { .. } => RecipeSuggestError::ParseError {
                message: e.to_string(),
            },
            other => RecipeSuggestError::CatalogError {
                message: other.to_string(),
            },
        }
    }
}

impl From<ConfigError> for RecipeSuggestError {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::IoError(e) => RecipeSuggestError::IoError {
                message: e.to_string(),
            },
            ConfigError::ParseError(e) => RecipeSuggestError::ParseError {
                message: e.to_string(),
            },
        }
    }
}

impl From<ExportError> for RecipeSuggestError {
    fn from(e: ExportError) -> Self {
        match e {
            ExportError::IoError(e) => RecipeSuggestError::IoError {
                message: e.to_string(),
            },
        }
    }
}

impl From<BookError> for RecipeSuggestError {
    fn from(e: BookError) -> Self {
        match e {
            BookError::CatalogError(e) => e.into(),
            BookError::ExportError(e) => e.into(),
            BookError::NotFound(id) => RecipeSuggestError::NotFound { message: id },
        }
    }
}

/// FFI-safe representation of a catalog recipe.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub steps: String,
    /// Localized difficulty label
    pub difficulty: String,
    /// Preparation time in minutes
    pub time: u32,
    /// Preparation time formatted for display, e.g. "2h 30m"
    pub time_label: String,
    pub tags: Vec<String>,
    pub is_favorite: bool,
}

impl FfiRecipe {
    fn new(recipe: &Recipe, is_favorite: bool) -> Self {
        FfiRecipe {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            ingredients: recipe.ingredients.clone(),
            steps: recipe.steps.clone(),
            difficulty: recipe.difficulty.label().to_string(),
            time: recipe.time,
            time_label: format_minutes(recipe.time),
            tags: recipe.tags.clone(),
            is_favorite,
        }
    }
}

/// FFI-safe representation of a suggested recipe.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiGeneratedRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub steps: String,
    pub difficulty: String,
    pub time: u32,
    /// The recipe in the export layout, ready to save or print
    pub export_text: String,
}

impl From<GeneratedRecipe> for FfiGeneratedRecipe {
    fn from(g: GeneratedRecipe) -> Self {
        let export_text = export::to_text(&g);
        FfiGeneratedRecipe {
            title: g.title,
            description: g.description,
            ingredients: g.ingredients,
            steps: g.steps,
            difficulty: g.difficulty.label().to_string(),
            time: g.time,
            export_text,
        }
    }
}

impl TryFrom<FfiGeneratedRecipe> for GeneratedRecipe {
    type Error = RecipeSuggestError;

    fn try_from(g: FfiGeneratedRecipe) -> Result<Self, Self::Error> {
        let difficulty = g
            .difficulty
            .parse::<Difficulty>()
            .map_err(|e| RecipeSuggestError::ParseError {
                message: e.to_string(),
            })?;
        Ok(GeneratedRecipe {
            title: g.title,
            description: g.description,
            ingredients: g.ingredients,
            steps: g.steps,
            difficulty,
            time: g.time,
        })
    }
}

/// FFI-safe handle on a catalog with its favorites.
#[derive(uniffi::Object)]
pub struct FfiRecipeBook {
    inner: Mutex<RecipeBook>,
}

#[uniffi::export]
impl FfiRecipeBook {
    /// Opens the book described by a YAML config file, or the built-in
    /// recipes with in-memory favorites when no path is given.
    #[uniffi::constructor]
    pub fn new(config_path: Option<String>) -> Result<Arc<Self>, RecipeSuggestError> {
        let config = match config_path {
            Some(path) => Config::from_path(Utf8Path::new(&path))?,
            None => Config::default(),
        };
        let book = RecipeBook::from_config(&config)?;
        Ok(Arc::new(FfiRecipeBook {
            inner: Mutex::new(book),
        }))
    }

    /// Returns every recipe in catalog order.
    pub fn recipes(&self) -> Vec<FfiRecipe> {
        let book = self.lock();
        book.catalog()
            .recipes()
            .iter()
            .map(|r| FfiRecipe::new(r, book.is_favorite(&r.id)))
            .collect()
    }

    /// Filters the catalog with the raw values of the browse controls.
    ///
    /// Unknown difficulty, time or category values match everything.
    pub fn filter(
        &self,
        query: String,
        difficulty: String,
        time: String,
        category: String,
    ) -> Vec<FfiRecipe> {
        let book = self.lock();
        let query = FilterQuery::from_parts(&query, &difficulty, &time, &category);
        book.filter_query(&query)
            .into_iter()
            .map(|r| FfiRecipe::new(r, book.is_favorite(&r.id)))
            .collect()
    }

    /// Suggests a recipe from free-text ingredients, or nothing for empty
    /// input.
    pub fn synthesize(&self, ingredients: String) -> Option<FfiGeneratedRecipe> {
        self.lock().synthesize(&ingredients).map(Into::into)
    }

    /// Flips the favorite state of a recipe and returns the new state.
    pub fn toggle_favorite(&self, id: String) -> bool {
        self.lock().toggle_favorite(&id)
    }

    /// Returns favorite recipes still present in the catalog.
    pub fn favorites(&self) -> Vec<FfiRecipe> {
        let book = self.lock();
        book.favorites()
            .into_iter()
            .map(|r| FfiRecipe::new(r, true))
            .collect()
    }

    /// Returns a catalog recipe in the export layout.
    pub fn export_text(&self, id: String) -> Result<String, RecipeSuggestError> {
        Ok(self.lock().export_text(&id)?)
    }

    /// Writes a catalog recipe to the export directory and returns the path.
    pub fn export_to_file(&self, id: String) -> Result<String, RecipeSuggestError> {
        Ok(self.lock().export_to_dir(&id)?.into_string())
    }
}

impl FfiRecipeBook {
    fn lock(&self) -> MutexGuard<'_, RecipeBook> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Splits free text into ingredient names as typed, trimmed and without
/// empty entries.
#[uniffi::export]
pub fn parse_ingredients(text: String) -> Vec<String> {
    parse_internal(&text)
        .iter()
        .map(|t| t.original().to_string())
        .collect()
}

/// Renders a suggested recipe in the export layout.
#[uniffi::export]
pub fn export_generated_text(recipe: FfiGeneratedRecipe) -> Result<String, RecipeSuggestError> {
    let recipe = GeneratedRecipe::try_from(recipe)?;
    Ok(export::to_text(&recipe))
}

/// Formats minutes for display, e.g. 150 becomes "2h 30m".
#[uniffi::export]
pub fn format_duration(minutes: u32) -> String {
    format_minutes(minutes)
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
