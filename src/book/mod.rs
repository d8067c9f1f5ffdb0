//! One object tying the catalog, favorites and suggestions together for a
//! display layer.

use crate::catalog::{CatalogError, DifficultyFilter, FilterQuery, TimeBucket};
use crate::config::Config;
use crate::export::{self, ExportError};
use crate::favorites::{FavoritesRegistry, FavoritesStore, JsonFileStore, MemoryStore};
use crate::{synthesize, CatalogStore, GeneratedRecipe, Recipe};
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Failed to load catalog: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("Failed to export recipe: {0}")]
    ExportError(#[from] ExportError),

    #[error("Recipe not found: {0}")]
    NotFound(String),
}

pub type BoxedFavoritesStore = Box<dyn FavoritesStore + Send>;

/// Catalog plus favorites, with the suggestion engine on top.
///
/// Suggestions are returned to the caller and never added to the catalog;
/// only [`add_recipe`](Self::add_recipe) grows it.
pub struct RecipeBook {
    catalog: CatalogStore,
    favorites: FavoritesRegistry<BoxedFavoritesStore>,
    export_dir: Utf8PathBuf,
}

impl RecipeBook {
    pub fn new(
        catalog: CatalogStore,
        favorites: BoxedFavoritesStore,
        export_dir: impl Into<Utf8PathBuf>,
    ) -> Self {
        RecipeBook {
            catalog,
            favorites: FavoritesRegistry::open(favorites),
            export_dir: export_dir.into(),
        }
    }

    /// Opens the catalog and favorites named by `config`.
    ///
    /// # Errors
    ///
    /// A catalog that cannot be loaded is an error. Favorites never are: an
    /// unreadable favorites file starts out empty.
    pub fn from_config(config: &Config) -> Result<Self, BookError> {
        let catalog = match &config.catalog {
            None => CatalogStore::builtin()?,
            Some(path) if path.is_dir() => CatalogStore::load_seed_dir(path)?,
            Some(path) => CatalogStore::load_seed(path)?,
        };
        let favorites: BoxedFavoritesStore = match &config.favorites {
            Some(path) => Box::new(JsonFileStore::new(path.clone())),
            None => Box::new(MemoryStore::new()),
        };
        Ok(Self::new(catalog, favorites, config.export_dir.clone()))
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn export_dir(&self) -> &Utf8Path {
        &self.export_dir
    }

    pub fn filter(
        &self,
        query: &str,
        difficulty: DifficultyFilter,
        time: TimeBucket,
    ) -> Vec<&Recipe> {
        self.catalog.filter(query, difficulty, time)
    }

    pub fn filter_query(&self, query: &FilterQuery) -> Vec<&Recipe> {
        self.catalog.filter_query(query)
    }

    /// Suggests a recipe from free-text ingredients; `None` for empty input.
    pub fn synthesize(&self, raw_text: &str) -> Option<GeneratedRecipe> {
        synthesize(self.catalog.recipes(), raw_text)
    }

    /// Adds a hand-written recipe to the catalog.
    pub fn add_recipe(&mut self, recipe: Recipe) -> Result<(), BookError> {
        Ok(self.catalog.add(recipe)?)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.favorites.toggle(id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Favorite recipes still present in the catalog, in catalog order.
    pub fn favorites(&self) -> Vec<&Recipe> {
        self.favorites.resolve(&self.catalog)
    }

    pub fn export_text(&self, id: &str) -> Result<String, BookError> {
        Ok(export::to_text(self.recipe(id)?))
    }

    pub fn export_to_dir(&self, id: &str) -> Result<Utf8PathBuf, BookError> {
        Ok(export::write_to_dir(&self.export_dir, self.recipe(id)?)?)
    }

    fn recipe(&self, id: &str) -> Result<&Recipe, BookError> {
        self.catalog
            .get(id)
            .ok_or_else(|| BookError::NotFound(id.to_string()))
    }
}
