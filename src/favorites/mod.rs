//! Favorite recipes.
//!
//! The registry holds the set of favorited ids and writes it back to its
//! store after every change. Ids are not checked against the catalog: a
//! favorite may outlive its recipe, and [`FavoritesRegistry::resolve`] simply
//! skips such ids.

use crate::{CatalogStore, Recipe};
use std::collections::BTreeSet;

mod store;

pub use store::{FavoritesStore, JsonFileStore, MemoryStore};

/// Set of favorite recipe ids backed by a [`FavoritesStore`].
#[derive(Debug)]
pub struct FavoritesRegistry<S> {
    store: S,
    ids: BTreeSet<String>,
}

impl<S: FavoritesStore> FavoritesRegistry<S> {
    /// Loads the current favorites from `store`.
    pub fn open(store: S) -> Self {
        let ids = store.load();
        FavoritesRegistry { store, ids }
    }

    /// Flips the favorite state of `id` and returns whether it is now a
    /// favorite.
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_favorite = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };
        self.store.save(&self.ids);
        now_favorite
    }

    /// Marks `id` as favorite. Returns false if it already was.
    pub fn add(&mut self, id: &str) -> bool {
        let added = self.ids.insert(id.to_string());
        if added {
            self.store.save(&self.ids);
        }
        added
    }

    /// Unmarks `id`. Returns false if it was not a favorite.
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.ids.remove(id);
        if removed {
            self.store.save(&self.ids);
        }
        removed
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &BTreeSet<String> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorite recipes in catalog order, ignoring ids the catalog no longer
    /// holds.
    pub fn resolve<'a>(&self, catalog: &'a CatalogStore) -> Vec<&'a Recipe> {
        catalog
            .recipes()
            .iter()
            .filter(|r| self.ids.contains(&r.id))
            .collect()
    }

    /// Drops ids that are not in `catalog`, saving only if something changed.
    /// Returns the number of ids removed.
    pub fn prune(&mut self, catalog: &CatalogStore) -> usize {
        let before = self.ids.len();
        self.ids.retain(|id| catalog.get(id).is_some());
        let removed = before - self.ids.len();
        if removed > 0 {
            self.store.save(&self.ids);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Difficulty;
    use std::cell::Cell;

    /// Store that counts saves
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        saves: Cell<usize>,
    }

    impl FavoritesStore for CountingStore {
        fn load(&self) -> BTreeSet<String> {
            self.inner.load()
        }

        fn save(&self, ids: &BTreeSet<String>) {
            self.saves.set(self.saves.get() + 1);
            self.inner.save(ids);
        }
    }

    fn catalog() -> CatalogStore {
        CatalogStore::from_recipes(vec![
            Recipe::new("r1", "Panettone", Difficulty::Medium, 150),
            Recipe::new("r2", "Pernil", Difficulty::Hard, 300),
            Recipe::new("r3", "Galletas", Difficulty::Easy, 45),
        ])
        .unwrap()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = FavoritesRegistry::open(MemoryStore::new());
        assert!(favorites.toggle("r1"));
        assert!(favorites.contains("r1"));
        assert_eq!(favorites.len(), 1);

        assert!(!favorites.toggle("r1"));
        assert!(!favorites.contains("r1"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_no_duplicates() {
        let mut favorites = FavoritesRegistry::open(MemoryStore::new());
        favorites.toggle("r1");
        assert!(!favorites.add("r1"));
        favorites.toggle("r2");
        favorites.toggle("r2");
        favorites.toggle("r2");
        assert_eq!(favorites.ids().iter().collect::<Vec<_>>(), vec!["r1", "r2"]);
    }

    #[test]
    fn test_every_change_is_saved() {
        let mut favorites = FavoritesRegistry::open(CountingStore::default());
        favorites.toggle("r1");
        favorites.toggle("r2");
        favorites.remove("r1");
        assert_eq!(favorites.store.saves.get(), 3);
        assert_eq!(favorites.store.inner.load(), BTreeSet::from(["r2".to_string()]));

        // no-op changes do not write
        favorites.add("r2");
        favorites.remove("r9");
        assert_eq!(favorites.store.saves.get(), 3);
    }

    #[test]
    fn test_open_loads_existing() {
        let favorites = FavoritesRegistry::open(MemoryStore::with_ids(["r3", "r1"]));
        assert!(favorites.contains("r1"));
        assert!(favorites.contains("r3"));
    }

    #[test]
    fn test_resolve_skips_dangling() {
        let catalog = catalog();
        let favorites = FavoritesRegistry::open(MemoryStore::with_ids(["r3", "gone", "r1"]));
        let ids: Vec<&str> = favorites
            .resolve(&catalog)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["r1", "r3"]);
        assert_eq!(favorites.len(), 3);
    }

    #[test]
    fn test_prune() {
        let catalog = catalog();
        let mut favorites = FavoritesRegistry::open(MemoryStore::with_ids(["r2", "gone"]));
        assert_eq!(favorites.prune(&catalog), 1);
        assert_eq!(favorites.ids().iter().collect::<Vec<_>>(), vec!["r2"]);
        assert_eq!(favorites.prune(&catalog), 0);
    }
}
