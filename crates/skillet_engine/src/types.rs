use std::fmt;

pub type RecipeId = u64;
pub type SearchGeneration = u64;
pub type DetailRequestId = u64;

/// One mapped search record with display defaults already applied: missing
/// ingredients become an empty list, a missing ready-time becomes "N/A",
/// missing servings become 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRecord {
    pub id: RecipeId,
    pub title: String,
    pub image: Option<String>,
    pub ingredients: Vec<String>,
    pub cook_time: String,
    pub servings: u32,
    pub source_url: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientRecord {
    pub amount: f64,
    pub unit: String,
    pub name: String,
}

/// Full per-recipe record from the provider's information endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRecord {
    pub id: RecipeId,
    pub title: String,
    pub image: Option<String>,
    pub ready_in_minutes: Option<u32>,
    pub servings: u32,
    pub health_score: Option<f64>,
    pub summary: Option<String>,
    pub ingredients: Vec<IngredientRecord>,
    pub instructions: Option<String>,
    pub source_url: Option<String>,
}

/// Completion events from the background fetch thread. Each echoes the
/// counter its request was started with so the caller can drop stale ones.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    SearchFinished {
        generation: SearchGeneration,
        result: Result<Vec<RecipeRecord>, ProviderError>,
    },
    DetailFinished {
        request: DetailRequestId,
        result: Result<DetailRecord, ProviderError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub kind: FailureKind,
    pub message: String,
}

impl ProviderError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ProviderError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Decode => write!(f, "malformed response body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
