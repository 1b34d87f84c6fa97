use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use log::{error, info};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ExtractError;
use crate::extractor::extract_recipe;
use crate::fetcher::RecipeFetcher;
use crate::render;

/// Shared state for request handlers; the fetcher owns the pooled client.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: RecipeFetcher,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/extract", post(extract))
        .route("/health", get(health))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(render::INDEX_PAGE)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Deserialize)]
struct ExtractRequest {
    #[serde(default)]
    url: String,
}

async fn extract(
    State(state): State<AppState>,
    Form(form): Form<ExtractRequest>,
) -> Result<Response, ExtractError> {
    let url = form.url.trim();
    if url.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Html(render::error_fragment("a recipe URL is required")),
        )
            .into_response());
    }

    info!("Extracting recipe from {url}");
    let body = state.fetcher.fetch(url).await?;
    let recipe = extract_recipe(&body)?;

    Ok(Html(render::recipe_fragment(&recipe)).into_response())
}

impl IntoResponse for ExtractError {
    fn into_response(self) -> Response {
        error!("{self}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(render::error_fragment(&self.to_string())),
        )
            .into_response()
    }
}
