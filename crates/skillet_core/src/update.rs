use crate::{AppState, Effect, Msg, ViewSelection};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(text) => {
            state.set_query_input(text);
            Vec::new()
        }
        Msg::QuerySubmitted => {
            // A blank query is a silent no-op: no transition, no fetch.
            let query = state.query_input().trim().to_owned();
            if query.is_empty() {
                return (state, Vec::new());
            }
            let generation = state.begin_search();
            vec![Effect::FetchSearch { generation, query }]
        }
        Msg::SearchCompleted {
            generation,
            outcome,
        } => {
            state.apply_search_outcome(generation, outcome);
            Vec::new()
        }
        Msg::ResultsTabSelected => {
            state.select_view(ViewSelection::Results);
            Vec::new()
        }
        Msg::FavoritesTabSelected => {
            state.select_view(ViewSelection::Favorites);
            Vec::new()
        }
        Msg::FavoriteToggled { recipe_id } => {
            // Persist the whole set right after the mutation so the store
            // agrees with memory before the next message is processed.
            if state.toggle_favorite(recipe_id).is_some() {
                vec![Effect::PersistFavorites {
                    favorites: state.favorites().snapshot(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::RestoreFavorites(entries) => {
            state.restore_favorites(entries);
            Vec::new()
        }
        Msg::DetailOpened { recipe_id } => {
            let request = state.begin_detail(recipe_id);
            vec![Effect::FetchDetail { request, recipe_id }]
        }
        Msg::DetailCompleted { request, outcome } => {
            state.apply_detail_outcome(request, outcome);
            Vec::new()
        }
        Msg::DetailClosed => {
            state.close_detail();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
