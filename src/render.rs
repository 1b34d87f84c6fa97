use html_escape::encode_text;

use crate::model::Recipe;

/// Notice shown when no selector matched anything on the page.
const NOT_FOUND_NOTICE: &str =
    "No ingredients or directions found. The recipe format might not be supported.";

/// The submission form served at `/`.
pub const INDEX_PAGE: &str = include_str!("../templates/index.html");

/// Format a recipe as an HTML fragment.
///
/// Ingredients render as an unordered list, directions as an ordered list;
/// an empty section is omitted entirely. When both sequences are empty the
/// fragment carries the not-found notice instead.
pub fn recipe_fragment(recipe: &Recipe) -> String {
    let mut html = String::from(r#"<div class="recipe">"#);

    if !recipe.ingredients.is_empty() {
        html.push_str(r#"<div class="ingredients"><h3>Ingredients:</h3><ul>"#);
        for item in &recipe.ingredients {
            html.push_str(&format!("<li>{}</li>", encode_text(item)));
        }
        html.push_str("</ul></div>");
    }

    if !recipe.directions.is_empty() {
        html.push_str(r#"<div class="directions"><h3>Directions:</h3><ol>"#);
        for step in &recipe.directions {
            html.push_str(&format!("<li>{}</li>", encode_text(step)));
        }
        html.push_str("</ol></div>");
    }

    if recipe.is_empty() {
        html.push_str(&format!("<p>{NOT_FOUND_NOTICE}</p>"));
    }

    html.push_str("</div>");
    html
}

/// Format a failure as an HTML fragment in plain language.
pub fn error_fragment(message: &str) -> String {
    format!(
        r#"<div class="recipe"><p class="error">Error extracting recipe: {}</p></div>"#,
        encode_text(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_recipe_renders_not_found_notice() {
        let html = recipe_fragment(&Recipe::default());
        assert!(html.contains("No ingredients or directions found"));
        assert!(!html.contains("<ul>"));
        assert!(!html.contains("<ol>"));
    }

    #[test]
    fn test_sections_render_as_lists() {
        let recipe = Recipe {
            ingredients: vec!["2 eggs".to_string()],
            directions: vec!["Preheat oven".to_string(), "Mix ingredients".to_string()],
        };

        let html = recipe_fragment(&recipe);
        assert!(html.contains("<h3>Ingredients:</h3><ul><li>2 eggs</li></ul>"));
        assert!(html.contains("<h3>Directions:</h3><ol><li>Preheat oven</li><li>Mix ingredients</li></ol>"));
        assert!(!html.contains("No ingredients or directions found"));
    }

    #[test]
    fn test_empty_section_is_omitted() {
        let recipe = Recipe {
            ingredients: vec!["1 cup flour".to_string()],
            directions: vec![],
        };

        let html = recipe_fragment(&recipe);
        assert!(html.contains("Ingredients:"));
        assert!(!html.contains("Directions:"));
    }

    #[test]
    fn test_item_text_is_escaped() {
        let recipe = Recipe {
            ingredients: vec!["1 cup <b>flour</b> & sugar".to_string()],
            directions: vec![],
        };

        let html = recipe_fragment(&recipe);
        assert!(html.contains("1 cup &lt;b&gt;flour&lt;/b&gt; &amp; sugar"));
    }

    #[test]
    fn test_error_fragment_is_escaped() {
        let html = error_fragment("bad <script> url");
        assert!(html.contains("Error extracting recipe: bad &lt;script&gt; url"));
    }
}
