use std::time::Duration;

use serde::Deserialize;

use crate::{DetailRecord, FailureKind, IngredientRecord, ProviderError, RecipeId, RecipeRecord};

/// Display sentinel used when the provider does not report a ready-time.
const COOK_TIME_UNKNOWN: &str = "N/A";

#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// Base URL of the recipe API.
    pub base_url: String,
    /// API key sent as a query parameter with every request.
    pub api_key: String,
    /// Fixed number of results requested per search.
    pub result_limit: u32,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.spoonacular.com/recipes".to_string(),
            api_key: String::new(),
            result_limit: 12,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Free-text search with ingredient and timing enrichment.
    async fn search(&self, query: &str) -> Result<Vec<RecipeRecord>, ProviderError>;
    /// Full detail for one recipe id.
    async fn detail(&self, id: RecipeId) -> Result<DetailRecord, ProviderError>;
}

#[derive(Debug, Clone)]
pub struct HttpRecipeProvider {
    settings: ProviderSettings,
    client: reqwest::Client,
}

impl HttpRecipeProvider {
    pub fn new(settings: ProviderSettings) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ProviderError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, ProviderError> {
        let raw = format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path);
        reqwest::Url::parse(&raw)
            .map_err(|err| ProviderError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn get_json<T>(
        &self,
        url: reqwest::Url,
        params: &[(&str, String)],
    ) -> Result<T, ProviderError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        response.json::<T>().await.map_err(map_reqwest_error)
    }
}

#[async_trait::async_trait]
impl RecipeProvider for HttpRecipeProvider {
    async fn search(&self, query: &str) -> Result<Vec<RecipeRecord>, ProviderError> {
        let url = self.endpoint("complexSearch")?;
        let params = [
            ("query", query.to_string()),
            ("apiKey", self.settings.api_key.clone()),
            ("number", self.settings.result_limit.to_string()),
            ("addRecipeInformation", "true".to_string()),
            ("fillIngredients", "true".to_string()),
        ];
        let body: SearchResponse = self.get_json(url, &params).await?;
        Ok(body.results.into_iter().map(map_search_record).collect())
    }

    async fn detail(&self, id: RecipeId) -> Result<DetailRecord, ProviderError> {
        let url = self.endpoint(&format!("{id}/information"))?;
        let params = [("apiKey", self.settings.api_key.clone())];
        let body: DetailResponse = self.get_json(url, &params).await?;
        Ok(map_detail_record(body))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        return ProviderError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ProviderError::new(FailureKind::Decode, err.to_string());
    }
    ProviderError::new(FailureKind::Network, err.to_string())
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchRecordDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchRecordDto {
    id: RecipeId,
    title: String,
    image: Option<String>,
    extended_ingredients: Option<Vec<IngredientDto>>,
    ready_in_minutes: Option<u32>,
    servings: Option<u32>,
    source_url: Option<String>,
    summary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IngredientDto {
    #[serde(default)]
    name: String,
    #[serde(default)]
    amount: f64,
    #[serde(default)]
    unit: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailResponse {
    id: RecipeId,
    title: String,
    image: Option<String>,
    ready_in_minutes: Option<u32>,
    servings: Option<u32>,
    health_score: Option<f64>,
    summary: Option<String>,
    extended_ingredients: Option<Vec<IngredientDto>>,
    instructions: Option<String>,
    source_url: Option<String>,
}

fn map_search_record(dto: SearchRecordDto) -> RecipeRecord {
    RecipeRecord {
        id: dto.id,
        title: dto.title,
        image: dto.image,
        ingredients: dto
            .extended_ingredients
            .unwrap_or_default()
            .into_iter()
            .map(|ingredient| ingredient.name)
            .collect(),
        cook_time: format_cook_time(dto.ready_in_minutes),
        servings: dto.servings.unwrap_or(0),
        source_url: dto.source_url,
        summary: dto.summary,
    }
}

fn map_detail_record(dto: DetailResponse) -> DetailRecord {
    DetailRecord {
        id: dto.id,
        title: dto.title,
        image: dto.image,
        ready_in_minutes: dto.ready_in_minutes,
        servings: dto.servings.unwrap_or(0),
        health_score: dto.health_score,
        summary: dto.summary,
        ingredients: dto
            .extended_ingredients
            .unwrap_or_default()
            .into_iter()
            .map(|ingredient| IngredientRecord {
                amount: ingredient.amount,
                unit: ingredient.unit,
                name: ingredient.name,
            })
            .collect(),
        instructions: dto.instructions,
        source_url: dto.source_url,
    }
}

fn format_cook_time(ready_in_minutes: Option<u32>) -> String {
    match ready_in_minutes {
        Some(minutes) => format!("{minutes} mins"),
        None => COOK_TIME_UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_record_defaults_apply_to_sparse_payloads() {
        let dto: SearchRecordDto = serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "Mystery Stew",
        }))
        .unwrap();

        let record = map_search_record(dto);
        assert_eq!(record.ingredients, Vec::<String>::new());
        assert_eq!(record.cook_time, "N/A");
        assert_eq!(record.servings, 0);
        assert_eq!(record.image, None);
    }

    #[test]
    fn ready_time_is_formatted_in_minutes() {
        assert_eq!(format_cook_time(Some(25)), "25 mins");
        assert_eq!(format_cook_time(None), "N/A");
    }

    #[test]
    fn ingredient_names_are_taken_in_order() {
        let dto: SearchRecordDto = serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "Carbonara",
            "extendedIngredients": [
                { "name": "spaghetti", "amount": 1.0, "unit": "lb" },
                { "name": "egg", "amount": 3.0, "unit": "" },
            ],
        }))
        .unwrap();

        let record = map_search_record(dto);
        assert_eq!(record.ingredients, vec!["spaghetti", "egg"]);
    }
}
