use crate::domain::{
    generation::value_objects::{GenerationConstraints, IngredientList},
    recipe::entities::RecipeDraft,
};

#[derive(Debug, Clone)]
pub struct GenerateRecipesInput {
    pub ingredients: IngredientList,
    pub constraints: GenerationConstraints,
}

/// A recipe typed in by the user. Ingredients and instructions are one entry per line.
#[derive(Debug, Clone, Default)]
pub struct UploadRecipeInput {
    pub recipe_name: String,
    pub description: String,
    pub cuisine_type: String,
    pub cooking_time: String,
    pub ingredients_text: String,
    pub instructions_text: String,
    pub image_url: Option<String>,
}

impl UploadRecipeInput {
    pub fn into_draft(self) -> RecipeDraft {
        RecipeDraft {
            recipe_name: self.recipe_name.trim().to_string(),
            description: self.description.trim().to_string(),
            cuisine_type: self.cuisine_type.trim().to_string(),
            cooking_time: self.cooking_time.trim().to_string(),
            ingredients: non_blank_lines(&self.ingredients_text),
            instructions: non_blank_lines(&self.instructions_text),
            image_url: self.image_url,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub favorites_only: bool,
}

fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_splits_lines_and_drops_blanks() {
        let input = UploadRecipeInput {
            recipe_name: "  Soy Eggs ".to_string(),
            ingredients_text: "4 eggs\n\n  1 tbsp soy sauce  \r\n".to_string(),
            instructions_text: "1. Boil eggs.\n   \n2. Marinate.".to_string(),
            ..UploadRecipeInput::default()
        };

        let draft = input.into_draft();

        assert_eq!(draft.recipe_name, "Soy Eggs");
        assert_eq!(draft.ingredients, vec!["4 eggs", "1 tbsp soy sauce"]);
        assert_eq!(draft.instructions, vec!["1. Boil eggs.", "2. Marinate."]);
        assert!(draft.image_url.is_none());
    }
}
