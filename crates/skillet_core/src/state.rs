use std::collections::HashSet;

use crate::view_model::{AppViewModel, DetailPane, RecipeCardView, Screen};

pub type RecipeId = u64;

/// Monotonic counter identifying one search round-trip. Completions carry the
/// generation they were started with; anything older than the current value
/// is stale and must be dropped.
pub type SearchGeneration = u64;

/// Monotonic counter identifying one detail round-trip, same discipline as
/// [`SearchGeneration`] but scoped to the detail overlay.
pub type DetailRequestId = u64;

/// Lightweight recipe record used in list views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub title: String,
    pub image: Option<String>,
    /// Ingredient names in provider order; empty when the provider sent none.
    pub ingredients: Vec<String>,
    /// Display string, e.g. "25 mins", or the sentinel "N/A".
    pub cook_time: String,
    /// 0 when the provider did not report a serving count.
    pub servings: u32,
    pub source_url: Option<String>,
    /// HTML-bearing teaser text from the provider.
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientLine {
    pub amount: f64,
    pub unit: String,
    pub name: String,
}

/// Full recipe record shown in the detail overlay. Never cached; fetched
/// again each time the overlay opens.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDetail {
    pub id: RecipeId,
    pub title: String,
    pub image: Option<String>,
    pub ready_in_minutes: Option<u32>,
    pub servings: u32,
    pub health_score: Option<f64>,
    pub summary: Option<String>,
    pub ingredients: Vec<IngredientLine>,
    /// HTML-bearing instructions text.
    pub instructions: Option<String>,
    pub source_url: Option<String>,
}

/// Which collection the main pane shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewSelection {
    #[default]
    Results,
    Favorites,
}

/// Outcome of the most recent search. Exactly one variant holds at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Ready(Vec<RecipeSummary>),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Closed,
    Loading {
        request: DetailRequestId,
        recipe_id: RecipeId,
    },
    Ready(RecipeDetail),
    Failed {
        recipe_id: RecipeId,
    },
}

/// Search completion payload, already mapped to summaries. Failures carry no
/// detail: the raw error is logged where it happened and the user sees one
/// fixed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Success(Vec<RecipeSummary>),
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    Success(RecipeDetail),
    Failed,
}

/// User-curated recipes keyed by id. Insertion order is preserved for
/// display; ids are unique.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FavoritesList {
    entries: Vec<RecipeSummary>,
    ids: HashSet<RecipeId>,
}

impl FavoritesList {
    /// Rebuild from a persisted snapshot. Duplicate ids keep the first
    /// occurrence so the uniqueness invariant holds even over a hand-edited
    /// store file.
    pub fn restore(entries: Vec<RecipeSummary>) -> Self {
        let mut list = Self::default();
        for entry in entries {
            list.add(entry);
        }
        list
    }

    /// Insert unless the id is already present. Returns whether it was added.
    pub fn add(&mut self, recipe: RecipeSummary) -> bool {
        if !self.ids.insert(recipe.id) {
            return false;
        }
        self.entries.push(recipe);
        true
    }

    /// Remove by id. Returns whether an entry was removed.
    pub fn remove(&mut self, id: RecipeId) -> bool {
        if !self.ids.remove(&id) {
            return false;
        }
        self.entries.retain(|entry| entry.id != id);
        true
    }

    /// Flip membership and return the new membership: `true` means the
    /// recipe is now a favorite.
    pub fn toggle(&mut self, recipe: RecipeSummary) -> bool {
        if self.remove(recipe.id) {
            false
        } else {
            self.add(recipe);
            true
        }
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RecipeSummary] {
        &self.entries
    }

    /// Full copy for write-back to the persistent store.
    pub fn snapshot(&self) -> Vec<RecipeSummary> {
        self.entries.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    query_input: String,
    search: SearchState,
    generation: SearchGeneration,
    view: ViewSelection,
    favorites: FavoritesList,
    detail: DetailState,
    detail_request: DetailRequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let screen = match self.view {
            ViewSelection::Favorites => {
                if self.favorites.is_empty() {
                    Screen::NoFavorites
                } else {
                    Screen::Favorites(self.cards(self.favorites.entries()))
                }
            }
            ViewSelection::Results => match &self.search {
                SearchState::Idle => Screen::Welcome,
                SearchState::Loading => Screen::Loading,
                SearchState::Failed => Screen::SearchFailed,
                SearchState::Ready(results) if results.is_empty() => Screen::NoResults,
                SearchState::Ready(results) => Screen::Results(self.cards(results)),
            },
        };

        let detail = match &self.detail {
            DetailState::Closed => DetailPane::Closed,
            DetailState::Loading { .. } => DetailPane::Loading,
            DetailState::Ready(detail) => DetailPane::Ready(detail.clone()),
            DetailState::Failed { .. } => DetailPane::Failed,
        };

        AppViewModel {
            view: self.view,
            favorite_count: self.favorites.len(),
            screen,
            detail,
        }
    }

    fn cards(&self, summaries: &[RecipeSummary]) -> Vec<RecipeCardView> {
        summaries
            .iter()
            .map(|summary| RecipeCardView {
                id: summary.id,
                title: summary.title.clone(),
                image: summary.image.clone(),
                ingredients: summary.ingredients.clone(),
                cook_time: summary.cook_time.clone(),
                servings: summary.servings,
                favorite: self.favorites.contains(summary.id),
            })
            .collect()
    }

    pub fn query_input(&self) -> &str {
        &self.query_input
    }

    pub(crate) fn set_query_input(&mut self, text: String) {
        self.query_input = text;
    }

    /// Start a new search round: bump the generation, enter Loading, and
    /// force the results view. Any completion carrying an older generation
    /// is rejected by [`AppState::apply_search_outcome`].
    pub(crate) fn begin_search(&mut self) -> SearchGeneration {
        self.generation += 1;
        self.search = SearchState::Loading;
        self.view = ViewSelection::Results;
        self.mark_dirty();
        self.generation
    }

    /// Apply a search completion. Returns `false` for stale generations,
    /// which leave the state untouched.
    pub(crate) fn apply_search_outcome(
        &mut self,
        generation: SearchGeneration,
        outcome: SearchOutcome,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.search = match outcome {
            SearchOutcome::Success(results) => SearchState::Ready(results),
            SearchOutcome::Failed => SearchState::Failed,
        };
        self.mark_dirty();
        true
    }

    pub(crate) fn select_view(&mut self, view: ViewSelection) {
        if self.view != view {
            self.view = view;
            self.mark_dirty();
        }
    }

    pub fn favorites(&self) -> &FavoritesList {
        &self.favorites
    }

    /// Toggle by id against what is currently visible: removal needs only
    /// membership, insertion takes the summary from the current results.
    /// Returns the new membership, or `None` when the id resolves to nothing
    /// (in which case the state is unchanged).
    pub(crate) fn toggle_favorite(&mut self, id: RecipeId) -> Option<bool> {
        if self.favorites.remove(id) {
            self.mark_dirty();
            return Some(false);
        }
        let summary = match &self.search {
            SearchState::Ready(results) => results.iter().find(|entry| entry.id == id).cloned(),
            _ => None,
        }?;
        self.favorites.add(summary);
        self.mark_dirty();
        Some(true)
    }

    pub(crate) fn restore_favorites(&mut self, entries: Vec<RecipeSummary>) {
        self.favorites = FavoritesList::restore(entries);
        self.mark_dirty();
    }

    /// Open the detail overlay and start a fresh fetch for the recipe.
    pub(crate) fn begin_detail(&mut self, recipe_id: RecipeId) -> DetailRequestId {
        self.detail_request += 1;
        self.detail = DetailState::Loading {
            request: self.detail_request,
            recipe_id,
        };
        self.mark_dirty();
        self.detail_request
    }

    /// Apply a detail completion. Only the request currently in flight may
    /// land; anything else (overlay closed, reopened, superseded) is dropped.
    pub(crate) fn apply_detail_outcome(
        &mut self,
        request: DetailRequestId,
        outcome: DetailOutcome,
    ) -> bool {
        let recipe_id = match &self.detail {
            DetailState::Loading {
                request: current,
                recipe_id,
            } if *current == request => *recipe_id,
            _ => return false,
        };
        self.detail = match outcome {
            DetailOutcome::Success(detail) => DetailState::Ready(detail),
            DetailOutcome::Failed => DetailState::Failed { recipe_id },
        };
        self.mark_dirty();
        true
    }

    pub(crate) fn close_detail(&mut self) {
        if !matches!(self.detail, DetailState::Closed) {
            self.detail = DetailState::Closed;
            self.mark_dirty();
        }
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    /// Returns the dirty flag and clears it. The shell renders only when a
    /// message actually changed something.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
