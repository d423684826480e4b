//! Skillet engine: recipe provider IO and favorites persistence.
mod engine;
mod provider;
mod store;
mod types;

pub use engine::EngineHandle;
pub use provider::{HttpRecipeProvider, ProviderSettings, RecipeProvider};
pub use store::{FavoritesStore, StoreError};
pub use types::{
    DetailRecord, DetailRequestId, EngineEvent, FailureKind, IngredientRecord, ProviderError,
    RecipeId, RecipeRecord, SearchGeneration,
};
