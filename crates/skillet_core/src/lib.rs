//! Skillet core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, DetailOutcome, DetailRequestId, DetailState, FavoritesList, IngredientLine,
    RecipeDetail, RecipeId, RecipeSummary, SearchGeneration, SearchOutcome, SearchState,
    ViewSelection,
};
pub use update::update;
pub use view_model::{AppViewModel, DetailPane, RecipeCardView, Screen, SEARCH_FAILED_MESSAGE};
