use crate::{RecipeDetail, RecipeId, ViewSelection};

/// Fixed user-facing message shown for any failed search. The underlying
/// cause goes to the log, not the screen.
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch recipes. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub view: ViewSelection,
    pub favorite_count: usize,
    pub screen: Screen,
    pub detail: DetailPane,
}

/// What the main pane shows, selected purely from state.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Nothing searched yet.
    Welcome,
    /// A search is in flight.
    Loading,
    /// The last search failed; [`SEARCH_FAILED_MESSAGE`] applies.
    SearchFailed,
    /// The last search succeeded with zero results.
    NoResults,
    /// Ordered result cards from the last search.
    Results(Vec<RecipeCardView>),
    /// Favorites tab with nothing saved yet.
    NoFavorites,
    /// Saved favorites in insertion order.
    Favorites(Vec<RecipeCardView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCardView {
    pub id: RecipeId,
    pub title: String,
    pub image: Option<String>,
    pub ingredients: Vec<String>,
    pub cook_time: String,
    pub servings: u32,
    /// Whether this card's recipe is in the favorites set, regardless of
    /// which collection the card came from.
    pub favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailPane {
    #[default]
    Closed,
    Loading,
    Ready(RecipeDetail),
    Failed,
}
