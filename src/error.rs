use thiserror::Error;

/// Errors that can occur while fetching and extracting a recipe
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Network or transport failure while fetching the page
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The response body could not be decoded as HTML text
    #[error("Failed to parse HTML: {0}")]
    Parse(String),
}
