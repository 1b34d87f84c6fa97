pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod model;
pub mod render;
pub mod server;

use crate::error::ExtractError;
use crate::fetcher::RecipeFetcher;
use crate::model::Recipe;

/// Fetch a page and run the selector heuristic over it.
pub async fn extract_from_url(url: &str) -> Result<Recipe, ExtractError> {
    let fetcher = RecipeFetcher::default();
    let body = fetcher.fetch(url).await?;
    extractor::extract_recipe(&body)
}
