//! Locally persisted favorite recipes.
//!
//! Favorites are stored as full recipe snapshots, not ids, so the favorites
//! view renders without another round trip to the API. The trade-off is that
//! a snapshot does not follow later upstream edits.

use log::{debug, info};

use crate::error::FinderError;
use crate::model::Recipe;
use crate::storage::KeyValueStore;

/// Key the favorites array is written under.
pub const FAVORITES_KEY: &str = "favorites";

/// What a call to [`FavoritesStore::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Not a favorite and no recipe to snapshot; nothing changed.
    Ignored,
}

pub struct FavoritesStore {
    storage: Box<dyn KeyValueStore>,
    favorites: Vec<Recipe>,
}

impl FavoritesStore {
    /// Read the persisted set. An absent key is an empty set.
    pub fn open(storage: Box<dyn KeyValueStore>) -> Result<Self, FinderError> {
        let favorites: Vec<Recipe> = match storage.get(FAVORITES_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };

        // Collapse duplicates a hand-edited file might carry; first one wins
        let mut unique: Vec<Recipe> = Vec::with_capacity(favorites.len());
        for recipe in favorites {
            if !unique.iter().any(|r| r.id == recipe.id) {
                unique.push(recipe);
            }
        }

        debug!("Loaded {} favorites", unique.len());
        Ok(Self {
            storage,
            favorites: unique,
        })
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|r| r.id == id)
    }

    /// Snapshot of all favorites in insertion order.
    pub fn all(&self) -> Vec<Recipe> {
        self.favorites.clone()
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Remove `id` if it is a favorite, otherwise insert `candidate` under it.
    ///
    /// The new set is written before this returns. On a storage error the
    /// in-memory set is left as it was.
    pub fn toggle(
        &mut self,
        id: &str,
        candidate: Option<&Recipe>,
    ) -> Result<ToggleOutcome, FinderError> {
        let mut next = self.favorites.clone();

        let outcome = if let Some(pos) = next.iter().position(|r| r.id == id) {
            next.remove(pos);
            ToggleOutcome::Removed
        } else if let Some(recipe) = candidate {
            // Stored under the requested id, whatever the snapshot says
            let mut snapshot = recipe.clone();
            snapshot.id = id.to_string();
            next.push(snapshot);
            ToggleOutcome::Added
        } else {
            debug!("No recipe available to favorite {}, ignoring", id);
            return Ok(ToggleOutcome::Ignored);
        };

        self.persist(&next)?;
        self.favorites = next;
        info!("Favorite {} {:?}", id, outcome);
        Ok(outcome)
    }

    fn persist(&mut self, favorites: &[Recipe]) -> Result<(), FinderError> {
        let raw = serde_json::to_string(favorites)?;
        self.storage.set(FAVORITES_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn recipe(id: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: format!("Recipe {id}"),
            category: "Beef".to_string(),
            area: "British".to_string(),
            thumbnail_url: String::new(),
            instructions: "Cook it.".to_string(),
            video_url: None,
            ingredients: Vec::new(),
        }
    }

    fn empty_store() -> FavoritesStore {
        FavoritesStore::open(Box::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn test_insert_into_empty_store() {
        let mut store = empty_store();
        assert!(store.all().is_empty());

        let outcome = store.toggle("52874", Some(&recipe("52874"))).unwrap();
        assert_eq!(outcome, ToggleOutcome::Added);
        assert!(store.is_favorite("52874"));
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut store = empty_store();
        store.toggle("1", Some(&recipe("1"))).unwrap();
        let before = store.all();

        store.toggle("2", Some(&recipe("2"))).unwrap();
        assert!(store.is_favorite("2"));
        let outcome = store.toggle("2", Some(&recipe("2"))).unwrap();
        assert_eq!(outcome, ToggleOutcome::Removed);

        assert!(!store.is_favorite("2"));
        assert_eq!(store.all(), before);
    }

    #[test]
    fn test_remove_does_not_need_candidate() {
        let mut store = empty_store();
        store.toggle("1", Some(&recipe("1"))).unwrap();
        assert_eq!(store.toggle("1", None).unwrap(), ToggleOutcome::Removed);
        assert!(store.is_empty());
    }

    #[test]
    fn test_missing_candidate_is_ignored() {
        let mut store = empty_store();
        assert_eq!(store.toggle("99", None).unwrap(), ToggleOutcome::Ignored);
        assert!(!store.is_favorite("99"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut store = empty_store();
        for id in ["3", "1", "2"] {
            store.toggle(id, Some(&recipe(id))).unwrap();
        }
        let ids: Vec<String> = store.all().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_reads_previous_session() {
        let saved =
            serde_json::to_string(&vec![recipe("7"), recipe("8"), recipe("7")]).unwrap();
        let storage = MemoryStore::new().with_entry(FAVORITES_KEY, &saved);

        let store = FavoritesStore::open(Box::new(storage)).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.is_favorite("7"));
        assert!(store.is_favorite("8"));
    }

    #[test]
    fn test_corrupt_value_is_an_error() {
        let storage = MemoryStore::new().with_entry(FAVORITES_KEY, "{oops");
        let result = FavoritesStore::open(Box::new(storage));
        assert!(matches!(result, Err(FinderError::SerializationError(_))));
    }

    #[test]
    fn test_storage_failure_propagates_and_keeps_memory() {
        let storage = MemoryStore::new().failing_writes();
        let mut store = FavoritesStore::open(Box::new(storage)).unwrap();

        let result = store.toggle("1", Some(&recipe("1")));
        assert!(matches!(result, Err(FinderError::StorageError(_))));
        assert!(!store.is_favorite("1"));
    }
}
