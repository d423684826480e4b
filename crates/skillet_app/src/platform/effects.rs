use std::sync::mpsc;
use std::thread;

use engine_logging::{engine_info, engine_warn};
use skillet_core::{
    DetailOutcome, Effect, IngredientLine, Msg, RecipeDetail, RecipeSummary, SearchOutcome,
};
use skillet_engine::{
    DetailRecord, EngineEvent, EngineHandle, FavoritesStore, ProviderError, ProviderSettings,
    RecipeRecord,
};

use super::app::AppInput;
use super::persistence;

pub(crate) struct EffectRunner {
    engine: EngineHandle,
    store: FavoritesStore,
}

impl EffectRunner {
    pub(crate) fn new(
        settings: ProviderSettings,
        store: FavoritesStore,
        input_tx: mpsc::Sender<AppInput>,
    ) -> Result<Self, ProviderError> {
        let (engine, event_rx) = EngineHandle::new(settings)?;
        spawn_event_loop(event_rx, input_tx);
        Ok(Self { engine, store })
    }

    pub(crate) fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchSearch { generation, query } => {
                    engine_info!("Search (generation {}) for {:?}", generation, query);
                    self.engine.search(generation, query);
                }
                Effect::FetchDetail { request, recipe_id } => {
                    engine_info!("Detail fetch (request {}) for recipe {}", request, recipe_id);
                    self.engine.fetch_detail(request, recipe_id);
                }
                Effect::PersistFavorites { favorites } => {
                    // Written before the next message is processed so the
                    // store always agrees with memory.
                    persistence::save_favorites(&self.store, &favorites);
                }
            }
        }
    }
}

/// Bridge engine completions back onto the main loop as core messages.
fn spawn_event_loop(event_rx: mpsc::Receiver<EngineEvent>, input_tx: mpsc::Sender<AppInput>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            let msg = match event {
                EngineEvent::SearchFinished { generation, result } => Msg::SearchCompleted {
                    generation,
                    outcome: match result {
                        Ok(records) => SearchOutcome::Success(
                            records.into_iter().map(map_summary).collect(),
                        ),
                        Err(err) => {
                            engine_warn!("Search (generation {}) failed: {}", generation, err);
                            SearchOutcome::Failed
                        }
                    },
                },
                EngineEvent::DetailFinished { request, result } => Msg::DetailCompleted {
                    request,
                    outcome: match result {
                        Ok(record) => DetailOutcome::Success(map_detail(record)),
                        Err(err) => {
                            engine_warn!("Detail fetch (request {}) failed: {}", request, err);
                            DetailOutcome::Failed
                        }
                    },
                },
            };
            if input_tx.send(AppInput::Core(msg)).is_err() {
                break;
            }
        }
    });
}

fn map_summary(record: RecipeRecord) -> RecipeSummary {
    RecipeSummary {
        id: record.id,
        title: record.title,
        image: record.image,
        ingredients: record.ingredients,
        cook_time: record.cook_time,
        servings: record.servings,
        source_url: record.source_url,
        summary: record.summary,
    }
}

fn map_detail(record: DetailRecord) -> RecipeDetail {
    RecipeDetail {
        id: record.id,
        title: record.title,
        image: record.image,
        ready_in_minutes: record.ready_in_minutes,
        servings: record.servings,
        health_score: record.health_score,
        summary: record.summary,
        ingredients: record
            .ingredients
            .into_iter()
            .map(|ingredient| IngredientLine {
                amount: ingredient.amount,
                unit: ingredient.unit,
                name: ingredient.name,
            })
            .collect(),
        instructions: record.instructions,
        source_url: record.source_url,
    }
}
