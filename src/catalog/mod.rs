//! The recipe catalog and its browse filters.
//!
//! Recipes are kept in insertion order. That order is what browsing returns
//! and what breaks ties when scoring suggestions, so the store is a plain
//! `Vec` and never an unordered map.

use crate::Recipe;
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::HashSet;
use std::fs;
use thiserror::Error;
use tracing::debug;

mod filter;
mod model;

pub use filter::{CategoryFilter, DifficultyFilter, FilterQuery, TimeBucket};
use model::RecipeRecord;

const BUILTIN_SEED: &str = include_str!("../../data/recetas.yaml");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate recipe id: {0}")]
    DuplicateId(String),

    #[error("Recipe {0} must take at least one minute")]
    InvalidTime(String),

    #[error("Recipe {id} has an unreadable time: {value}")]
    InvalidDuration { id: String, value: String },

    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML catalog: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON catalog: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(Utf8PathBuf),

    #[error("Failed to read directory: {0}")]
    GlobError(#[from] glob::GlobError),

    #[error("Failed to create glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Path contains invalid UTF-8: {0}")]
    InvalidPath(String),
}

/// Result of a catalog load that must not abort the caller.
///
/// A failed load still yields a usable (empty) store, but the error is kept
/// so the caller can show that the catalog is missing.
#[derive(Debug)]
pub struct CatalogLoad {
    pub store: CatalogStore,
    pub error: Option<CatalogError>,
}

/// Ordered collection of recipes with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStore {
    recipes: Vec<Recipe>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from recipes in the given order.
    ///
    /// # Errors
    ///
    /// Fails on the first duplicated id or zero time.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for recipe in &recipes {
            validate(recipe)?;
            if !seen.insert(recipe.id.as_str()) {
                return Err(CatalogError::DuplicateId(recipe.id.clone()));
            }
        }
        Ok(CatalogStore { recipes })
    }

    /// The Christmas recipes bundled with the library.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUILTIN_SEED)
    }

    /// Parses a YAML list of recipe records.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let records: Vec<RecipeRecord> = serde_yaml::from_str(yaml)?;
        Self::from_records(records)
    }

    /// Parses a JSON array of recipe records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<RecipeRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    fn from_records(records: Vec<RecipeRecord>) -> Result<Self, CatalogError> {
        let recipes = records
            .into_iter()
            .map(RecipeRecord::into_recipe)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_recipes(recipes)
    }

    /// Loads a seed file, picking the format from its extension
    /// (`.yaml`, `.yml` or `.json`).
    pub fn load_seed(path: &Utf8Path) -> Result<Self, CatalogError> {
        let recipes = read_seed(path)?;
        let store = Self::from_recipes(recipes)?;
        debug!(path = %path, recipes = store.len(), "loaded catalog seed");
        Ok(store)
    }

    /// Loads every seed file directly inside `dir`, in path order.
    pub fn load_seed_dir(dir: &Utf8Path) -> Result<Self, CatalogError> {
        let mut paths = Vec::new();
        for ext in ["yaml", "yml", "json"] {
            let pattern = format!("{}/*.{ext}", glob::Pattern::escape(dir.as_str()));
            for entry in glob::glob(&pattern)? {
                let path = Utf8PathBuf::from_path_buf(entry?)
                    .map_err(|p| CatalogError::InvalidPath(p.display().to_string()))?;
                paths.push(path);
            }
        }
        paths.sort();

        let mut recipes = Vec::new();
        for path in &paths {
            recipes.extend(read_seed(path)?);
        }
        let store = Self::from_recipes(recipes)?;
        debug!(dir = %dir, files = paths.len(), recipes = store.len(), "loaded catalog seed directory");
        Ok(store)
    }

    /// Like [`load_seed`](Self::load_seed), but a failure gives an empty
    /// store together with the error instead of aborting.
    pub fn load_or_empty(path: &Utf8Path) -> CatalogLoad {
        match Self::load_seed(path) {
            Ok(store) => CatalogLoad { store, error: None },
            Err(error) => CatalogLoad {
                store: Self::new(),
                error: Some(error),
            },
        }
    }

    /// Appends a recipe at the end of the catalog.
    pub fn add(&mut self, recipe: Recipe) -> Result<(), CatalogError> {
        validate(&recipe)?;
        if self.get(&recipe.id).is_some() {
            return Err(CatalogError::DuplicateId(recipe.id));
        }
        self.recipes.push(recipe);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// All recipes in catalog order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipes matching the text, difficulty and time criteria, in catalog
    /// order.
    ///
    /// The text is looked up, ignoring case, in the title and the
    /// ingredients; an empty text matches everything.
    pub fn filter(
        &self,
        query: &str,
        difficulty: DifficultyFilter,
        time: TimeBucket,
    ) -> Vec<&Recipe> {
        self.filter_query(&FilterQuery {
            text: query.to_string(),
            difficulty,
            time,
            category: CategoryFilter::All,
        })
    }

    pub fn filter_query(&self, query: &FilterQuery) -> Vec<&Recipe> {
        let needle = query.needle();
        self.recipes
            .iter()
            .filter(|r| query.matches_with(needle.as_deref(), r))
            .collect()
    }
}

fn validate(recipe: &Recipe) -> Result<(), CatalogError> {
    if recipe.time == 0 {
        return Err(CatalogError::InvalidTime(recipe.id.clone()));
    }
    Ok(())
}

fn read_seed(path: &Utf8Path) -> Result<Vec<Recipe>, CatalogError> {
    let records: Vec<RecipeRecord> = match path.extension() {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&fs::read_to_string(path)?)?,
        Some("json") => serde_json::from_str(&fs::read_to_string(path)?)?,
        _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
    };
    records.into_iter().map(RecipeRecord::into_recipe).collect()
}
