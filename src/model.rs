use serde::Serialize;

/// The two ordered text sequences produced for a single page.
#[derive(Debug, Default, Serialize)]
pub struct Recipe {
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
}

impl Recipe {
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.directions.is_empty()
    }

    /// Render the recipe as a delimited plain-text block.
    pub fn to_plain_text(&self) -> String {
        format!(
            "INGREDIENTS:\n{}\n\nDIRECTIONS:\n{}",
            self.ingredients.join("\n"),
            self.directions.join("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_format() {
        let recipe = Recipe {
            ingredients: vec!["2 eggs".to_string(), "1 cup flour".to_string()],
            directions: vec!["Preheat oven".to_string(), "Mix ingredients".to_string()],
        };

        assert_eq!(
            recipe.to_plain_text(),
            "INGREDIENTS:\n2 eggs\n1 cup flour\n\nDIRECTIONS:\nPreheat oven\nMix ingredients"
        );
    }

    #[test]
    fn test_empty_recipe() {
        let recipe = Recipe::default();
        assert!(recipe.is_empty());
        assert_eq!(recipe.to_plain_text(), "INGREDIENTS:\n\n\nDIRECTIONS:\n");
    }
}
