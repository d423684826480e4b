use skillet_core::{
    update, AppState, DetailOutcome, DetailPane, Effect, IngredientLine, Msg, RecipeDetail,
    SearchState,
};

fn detail(id: u64, title: &str) -> RecipeDetail {
    RecipeDetail {
        id,
        title: title.to_string(),
        image: None,
        ready_in_minutes: Some(25),
        servings: 4,
        health_score: Some(62.0),
        summary: Some("A classic.".to_string()),
        ingredients: vec![IngredientLine {
            amount: 0.5,
            unit: "cup".to_string(),
            name: "parmesan".to_string(),
        }],
        instructions: Some("<ol><li>Cook.</li></ol>".to_string()),
        source_url: None,
    }
}

#[test]
fn opening_detail_starts_loading_and_requests_a_fetch() {
    let (mut state, effects) = update(AppState::new(), Msg::DetailOpened { recipe_id: 7 });

    assert_eq!(
        effects,
        vec![Effect::FetchDetail {
            request: 1,
            recipe_id: 7,
        }]
    );
    assert!(state.consume_dirty());
    assert_eq!(state.view().detail, DetailPane::Loading);
}

#[test]
fn completed_fetch_shows_the_detail() {
    let (state, _) = update(AppState::new(), Msg::DetailOpened { recipe_id: 7 });
    let (state, _) = update(
        state,
        Msg::DetailCompleted {
            request: 1,
            outcome: DetailOutcome::Success(detail(7, "Carbonara")),
        },
    );

    assert_eq!(state.view().detail, DetailPane::Ready(detail(7, "Carbonara")));
}

#[test]
fn failed_fetch_is_distinct_from_loading_and_closed() {
    let (state, _) = update(AppState::new(), Msg::DetailOpened { recipe_id: 7 });
    let (state, _) = update(
        state,
        Msg::DetailCompleted {
            request: 1,
            outcome: DetailOutcome::Failed,
        },
    );

    assert_eq!(state.view().detail, DetailPane::Failed);
}

#[test]
fn late_completion_after_close_is_dropped() {
    let (state, _) = update(AppState::new(), Msg::DetailOpened { recipe_id: 7 });
    let (mut state, _) = update(state, Msg::DetailClosed);
    state.consume_dirty();

    let (mut state, effects) = update(
        state,
        Msg::DetailCompleted {
            request: 1,
            outcome: DetailOutcome::Success(detail(7, "Carbonara")),
        },
    );

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.view().detail, DetailPane::Closed);
}

#[test]
fn reopening_supersedes_the_earlier_request() {
    // Open, close, reopen the same recipe: the first fetch is still in
    // flight but its request id is no longer current.
    let (state, _) = update(AppState::new(), Msg::DetailOpened { recipe_id: 7 });
    let (state, _) = update(state, Msg::DetailClosed);
    let (state, effects) = update(state, Msg::DetailOpened { recipe_id: 7 });
    assert_eq!(
        effects,
        vec![Effect::FetchDetail {
            request: 2,
            recipe_id: 7,
        }]
    );

    let (state, _) = update(
        state,
        Msg::DetailCompleted {
            request: 1,
            outcome: DetailOutcome::Failed,
        },
    );
    assert_eq!(state.view().detail, DetailPane::Loading);

    let (state, _) = update(
        state,
        Msg::DetailCompleted {
            request: 2,
            outcome: DetailOutcome::Success(detail(7, "Carbonara")),
        },
    );
    assert_eq!(state.view().detail, DetailPane::Ready(detail(7, "Carbonara")));
}

#[test]
fn detail_lifecycle_is_independent_of_the_search_session() {
    let (state, _) = update(AppState::new(), Msg::QueryChanged("pasta".to_string()));
    let (state, _) = update(state, Msg::QuerySubmitted);
    let (state, _) = update(state, Msg::DetailOpened { recipe_id: 7 });

    let (state, _) = update(
        state,
        Msg::DetailCompleted {
            request: 1,
            outcome: DetailOutcome::Success(detail(7, "Carbonara")),
        },
    );
    assert_eq!(state.search(), &SearchState::Loading);
    assert_eq!(state.view().detail, DetailPane::Ready(detail(7, "Carbonara")));
}
