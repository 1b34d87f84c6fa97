use log::debug;
use scraper::{Html, Selector};

use crate::error::ExtractError;
use crate::model::Recipe;

/// Selector patterns tried for ingredient-like elements, in order.
const INGREDIENT_SELECTORS: [&str; 5] = [
    "li[itemprop='recipeIngredient']",
    ".recipe-ingredient",
    ".ingredients li",
    "[data-ingredient]",
    ".ingredient",
];

/// Selector patterns tried for direction-like elements, in order.
const DIRECTION_SELECTORS: [&str; 6] = [
    "li[itemprop='recipeInstructions']",
    ".recipe-instruction",
    ".instructions li",
    "[data-instruction]",
    ".instruction",
    ".directions li",
];

/// Scan an HTML body for recipe-like content.
///
/// The body must decode as UTF-8; the markup itself is parsed permissively,
/// so malformed HTML still yields a document. Zero matches is not an error:
/// the caller receives an empty [`Recipe`].
pub fn extract_recipe(body: &[u8]) -> Result<Recipe, ExtractError> {
    let html = std::str::from_utf8(body).map_err(|e| ExtractError::Parse(e.to_string()))?;
    let document = Html::parse_document(html);

    let recipe = Recipe {
        ingredients: collect_matches(&document, &INGREDIENT_SELECTORS),
        directions: collect_matches(&document, &DIRECTION_SELECTORS),
    };

    debug!(
        "Extracted {} ingredients and {} directions",
        recipe.ingredients.len(),
        recipe.directions.len()
    );

    Ok(recipe)
}

/// Evaluate each selector over the whole document, in list order,
/// accumulating trimmed non-empty text per selector. Results follow
/// selector order, not document order, and an element matched by two
/// selectors contributes its text twice.
fn collect_matches(document: &Html, patterns: &[&str]) -> Vec<String> {
    let mut items = Vec::new();

    for pattern in patterns {
        if let Ok(selector) = Selector::parse(pattern) {
            for element in document.select(&selector) {
                let text = element
                    .text()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .trim()
                    .to_string();
                if !text.is_empty() {
                    items.push(text);
                }
            }
        }
    }

    items
}
