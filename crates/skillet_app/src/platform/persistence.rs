use engine_logging::{engine_error, engine_info, engine_warn};
use serde::{Deserialize, Serialize};
use skillet_core::RecipeSummary;
use skillet_engine::FavoritesStore;

/// On-disk shape of one favorite. Kept separate from the core type so the
/// document format does not move when the state machine does.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedRecipe {
    id: u64,
    title: String,
    image: Option<String>,
    ingredients: Vec<String>,
    cook_time: String,
    servings: u32,
    source_url: Option<String>,
    summary: Option<String>,
}

pub(crate) fn load_favorites(store: &FavoritesStore) -> Vec<RecipeSummary> {
    let content = match store.read() {
        Ok(Some(text)) => text,
        Ok(None) => return Vec::new(),
        Err(err) => {
            engine_warn!("Failed to read favorites from {:?}: {}", store.path(), err);
            return Vec::new();
        }
    };

    // Malformed content is data loss, not a fault: start over empty.
    let entries: Vec<PersistedRecipe> = match serde_json::from_str(&content) {
        Ok(entries) => entries,
        Err(err) => {
            engine_warn!("Failed to parse favorites from {:?}: {}", store.path(), err);
            return Vec::new();
        }
    };

    engine_info!("Loaded {} favorites from {:?}", entries.len(), store.path());
    entries.into_iter().map(into_summary).collect()
}

pub(crate) fn save_favorites(store: &FavoritesStore, favorites: &[RecipeSummary]) {
    let document: Vec<PersistedRecipe> = favorites.iter().map(from_summary).collect();
    let content = match serde_json::to_string_pretty(&document) {
        Ok(text) => text,
        Err(err) => {
            engine_error!("Failed to serialize favorites: {}", err);
            return;
        }
    };

    if let Err(err) = store.write(&content) {
        engine_error!("Failed to write favorites to {:?}: {}", store.path(), err);
    }
}

fn into_summary(entry: PersistedRecipe) -> RecipeSummary {
    RecipeSummary {
        id: entry.id,
        title: entry.title,
        image: entry.image,
        ingredients: entry.ingredients,
        cook_time: entry.cook_time,
        servings: entry.servings,
        source_url: entry.source_url,
        summary: entry.summary,
    }
}

fn from_summary(summary: &RecipeSummary) -> PersistedRecipe {
    PersistedRecipe {
        id: summary.id,
        title: summary.title.clone(),
        image: summary.image.clone(),
        ingredients: summary.ingredients.clone(),
        cook_time: summary.cook_time.clone(),
        servings: summary.servings,
        source_url: summary.source_url.clone(),
        summary: summary.summary.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn summary(id: u64, title: &str) -> RecipeSummary {
        RecipeSummary {
            id,
            title: title.to_string(),
            image: Some(format!("https://img.example.com/{id}.jpg")),
            ingredients: vec!["salt".to_string(), "pepper".to_string()],
            cook_time: "20 mins".to_string(),
            servings: 2,
            source_url: None,
            summary: Some("Tasty.".to_string()),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let store = FavoritesStore::new(temp.path().join("recipe_favorites.json"));

        for count in 0..4 {
            let favorites: Vec<_> = (0..count)
                .map(|id| summary(id, &format!("Recipe {id}")))
                .collect();
            save_favorites(&store, &favorites);
            assert_eq!(load_favorites(&store), favorites);
        }
    }

    #[test]
    fn absent_store_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = FavoritesStore::new(temp.path().join("recipe_favorites.json"));

        assert!(load_favorites(&store).is_empty());
    }

    #[test]
    fn malformed_store_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = FavoritesStore::new(temp.path().join("recipe_favorites.json"));

        store.write("{ definitely not a favorites document").unwrap();
        assert!(load_favorites(&store).is_empty());

        store.write("[{\"id\": 1}]").unwrap();
        assert!(load_favorites(&store).is_empty());
    }
}
