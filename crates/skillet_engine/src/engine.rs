use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::engine_warn;

use crate::provider::{HttpRecipeProvider, ProviderSettings, RecipeProvider};
use crate::{DetailRequestId, EngineEvent, ProviderError, RecipeId, SearchGeneration};

enum EngineCommand {
    Search {
        generation: SearchGeneration,
        query: String,
    },
    FetchDetail {
        request: DetailRequestId,
        recipe_id: RecipeId,
    },
}

/// Handle to the background fetch thread. Commands go in over a channel and
/// completions come back as [`EngineEvent`]s on the receiver returned by
/// [`EngineHandle::new`]. A search and a detail fetch may be in flight at the
/// same time; completions carry the counters they were started with.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        settings: ProviderSettings,
    ) -> Result<(Self, mpsc::Receiver<EngineEvent>), ProviderError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let provider = Arc::new(HttpRecipeProvider::new(settings)?);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let provider = provider.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(provider.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok((Self { cmd_tx }, event_rx))
    }

    pub fn search(&self, generation: SearchGeneration, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Search {
            generation,
            query: query.into(),
        });
    }

    pub fn fetch_detail(&self, request: DetailRequestId, recipe_id: RecipeId) {
        let _ = self.cmd_tx.send(EngineCommand::FetchDetail { request, recipe_id });
    }
}

async fn handle_command(
    provider: &dyn RecipeProvider,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search { generation, query } => {
            let result = provider.search(&query).await;
            if let Err(err) = &result {
                engine_warn!("Search (generation {}) failed: {}", generation, err);
            }
            let _ = event_tx.send(EngineEvent::SearchFinished { generation, result });
        }
        EngineCommand::FetchDetail { request, recipe_id } => {
            let result = provider.detail(recipe_id).await;
            if let Err(err) = &result {
                engine_warn!("Detail fetch for recipe {} failed: {}", recipe_id, err);
            }
            let _ = event_tx.send(EngineEvent::DetailFinished { request, result });
        }
    }
}
