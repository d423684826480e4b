use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use skillet_engine::{FailureKind, HttpRecipeProvider, ProviderSettings, RecipeProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer) -> ProviderSettings {
    ProviderSettings {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        ..ProviderSettings::default()
    }
}

#[tokio::test]
async fn search_sends_enrichment_flags_and_maps_records_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/complexSearch"))
        .and(query_param("query", "pasta"))
        .and(query_param("apiKey", "test-key"))
        .and(query_param("number", "12"))
        .and(query_param("addRecipeInformation", "true"))
        .and(query_param("fillIngredients", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {
                    "id": 101,
                    "title": "Spaghetti Carbonara",
                    "image": "https://img.example.com/101.jpg",
                    "extendedIngredients": [
                        { "name": "spaghetti", "amount": 1.0, "unit": "lb" },
                        { "name": "egg", "amount": 3.0, "unit": "" },
                    ],
                    "readyInMinutes": 25,
                    "servings": 4,
                    "sourceUrl": "https://example.com/carbonara",
                    "summary": "A <b>classic</b> Roman pasta.",
                },
                {
                    "id": 102,
                    "title": "Mystery Stew",
                },
            ],
        })))
        .mount(&server)
        .await;

    let provider = HttpRecipeProvider::new(settings(&server)).expect("client");
    let records = provider.search("pasta").await.expect("search ok");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 101);
    assert_eq!(records[0].title, "Spaghetti Carbonara");
    assert_eq!(records[0].ingredients, vec!["spaghetti", "egg"]);
    assert_eq!(records[0].cook_time, "25 mins");
    assert_eq!(records[0].servings, 4);
    assert_eq!(
        records[0].source_url.as_deref(),
        Some("https://example.com/carbonara")
    );

    // Sparse record falls back to display defaults.
    assert_eq!(records[1].id, 102);
    assert_eq!(records[1].ingredients, Vec::<String>::new());
    assert_eq!(records[1].cook_time, "N/A");
    assert_eq!(records[1].servings, 0);
}

#[tokio::test]
async fn search_returns_all_twelve_records_in_provider_order() {
    let server = MockServer::start().await;
    let results: Vec<_> = (1..=12)
        .map(|id| json!({ "id": id, "title": format!("Recipe {id}") }))
        .collect();
    Mock::given(method("GET"))
        .and(path("/complexSearch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": results })))
        .mount(&server)
        .await;

    let provider = HttpRecipeProvider::new(settings(&server)).expect("client");
    let records = provider.search("anything").await.expect("search ok");

    let ids: Vec<_> = records.iter().map(|record| record.id).collect();
    assert_eq!(ids, (1..=12).collect::<Vec<_>>());
}

#[tokio::test]
async fn search_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/complexSearch"))
        .respond_with(ResponseTemplate::new(402))
        .mount(&server)
        .await;

    let provider = HttpRecipeProvider::new(settings(&server)).expect("client");
    let err = provider.search("pasta").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(402));
}

#[tokio::test]
async fn search_fails_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/complexSearch"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let provider = HttpRecipeProvider::new(settings(&server)).expect("client");
    let err = provider.search("pasta").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn search_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/complexSearch"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "results": [] })),
        )
        .mount(&server)
        .await;

    let settings = ProviderSettings {
        request_timeout: Duration::from_millis(50),
        ..settings(&server)
    };
    let provider = HttpRecipeProvider::new(settings).expect("client");
    let err = provider.search("pasta").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn detail_maps_structured_ingredients() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/101/information"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 101,
            "title": "Spaghetti Carbonara",
            "readyInMinutes": 25,
            "servings": 4,
            "healthScore": 62.5,
            "summary": "A classic.",
            "extendedIngredients": [
                { "name": "parmesan", "amount": 0.5, "unit": "cup" },
            ],
            "instructions": "<ol><li>Cook.</li></ol>",
            "sourceUrl": "https://example.com/carbonara",
        })))
        .mount(&server)
        .await;

    let provider = HttpRecipeProvider::new(settings(&server)).expect("client");
    let detail = provider.detail(101).await.expect("detail ok");

    assert_eq!(detail.title, "Spaghetti Carbonara");
    assert_eq!(detail.ready_in_minutes, Some(25));
    assert_eq!(detail.health_score, Some(62.5));
    assert_eq!(detail.ingredients.len(), 1);
    assert_eq!(detail.ingredients[0].amount, 0.5);
    assert_eq!(detail.ingredients[0].unit, "cup");
    assert_eq!(detail.ingredients[0].name, "parmesan");
    assert_eq!(detail.instructions.as_deref(), Some("<ol><li>Cook.</li></ol>"));
}

#[tokio::test]
async fn detail_omits_optional_fields_gracefully() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/102/information"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 102,
            "title": "Mystery Stew",
        })))
        .mount(&server)
        .await;

    let provider = HttpRecipeProvider::new(settings(&server)).expect("client");
    let detail = provider.detail(102).await.expect("detail ok");

    assert_eq!(detail.ready_in_minutes, None);
    assert_eq!(detail.servings, 0);
    assert_eq!(detail.health_score, None);
    assert!(detail.ingredients.is_empty());
    assert_eq!(detail.instructions, None);
}

#[tokio::test]
async fn detail_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/999/information"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let provider = HttpRecipeProvider::new(settings(&server)).expect("client");
    let err = provider.detail(999).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}
