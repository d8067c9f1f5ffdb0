pub mod book;
pub mod catalog;
pub mod config;
pub mod export;
pub mod favorites;
pub mod ffi;
pub mod model;
pub mod parser;
pub mod scorer;
pub mod synth;

pub use book::{BookError, RecipeBook};
pub use catalog::{
    CatalogError, CatalogLoad, CatalogStore, CategoryFilter, DifficultyFilter, FilterQuery,
    TimeBucket,
};
pub use config::{Config, ConfigError};
pub use favorites::{FavoritesRegistry, FavoritesStore, JsonFileStore, MemoryStore};
pub use model::*;
pub use parser::{parse_ingredients, Token};
pub use synth::synthesize;

uniffi::setup_scaffolding!();
