use crate::{DetailRequestId, RecipeId, RecipeSummary, SearchGeneration};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch search results for the query. The completion must echo the
    /// generation so stale responses can be dropped.
    FetchSearch {
        generation: SearchGeneration,
        query: String,
    },
    /// Fetch full detail for one recipe. The completion must echo the
    /// request id.
    FetchDetail {
        request: DetailRequestId,
        recipe_id: RecipeId,
    },
    /// Write the full favorites snapshot to the persistent store. Issued
    /// after every mutation, never batched.
    PersistFavorites { favorites: Vec<RecipeSummary> },
}
