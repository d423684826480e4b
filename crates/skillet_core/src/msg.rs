use crate::{DetailOutcome, DetailRequestId, RecipeId, RecipeSummary, SearchGeneration, SearchOutcome};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the search input box.
    QueryChanged(String),
    /// User submitted the current search input.
    QuerySubmitted,
    /// Provider search finished for the given generation.
    SearchCompleted {
        generation: SearchGeneration,
        outcome: SearchOutcome,
    },
    /// User selected the all-results tab.
    ResultsTabSelected,
    /// User selected the favorites tab.
    FavoritesTabSelected,
    /// User toggled the favorite marker on a visible card.
    FavoriteToggled { recipe_id: RecipeId },
    /// Restore favorites read from the persistent store at startup.
    RestoreFavorites(Vec<RecipeSummary>),
    /// User opened the detail overlay for a recipe.
    DetailOpened { recipe_id: RecipeId },
    /// Provider detail fetch finished for the given request.
    DetailCompleted {
        request: DetailRequestId,
        outcome: DetailOutcome,
    },
    /// User closed the detail overlay.
    DetailClosed,
    /// Fallback for placeholder wiring.
    NoOp,
}
