use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    generation::value_objects::{GenerationConstraints, IngredientList},
    recipe::entities::RecipeDraft,
};

pub const RECIPES_PER_REQUEST: usize = 3;

/// Shape the text model is asked to return for each recipe.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedRecipe {
    recipe_name: String,
    description: String,
    cuisine_type: String,
    cooking_time: String,
    ingredients: Vec<String>,
    instructions: Vec<String>,
}

impl From<GeneratedRecipe> for RecipeDraft {
    fn from(recipe: GeneratedRecipe) -> Self {
        Self {
            recipe_name: recipe.recipe_name,
            description: recipe.description,
            cuisine_type: recipe.cuisine_type,
            cooking_time: recipe.cooking_time,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            image_url: None,
        }
    }
}

/// Build the generation prompt; constraint clauses only appear when set
pub fn build_recipe_prompt(
    ingredients: &IngredientList,
    constraints: &GenerationConstraints,
) -> String {
    let mut prompt = format!(
        "Freely come up with {} diverse recipes using some or all of the following ingredients: {}.",
        RECIPES_PER_REQUEST,
        ingredients.join(", ")
    );

    if let Some(limit) = constraints.max_cooking_time.prompt_text() {
        prompt.push_str(&format!(
            " Make sure every recipe can be cooked within {}.",
            limit
        ));
    }

    let flavor = constraints.flavor_preference.trim();
    if !flavor.is_empty() {
        prompt.push_str(&format!(" The recipes should lean towards a \"{}\" flavor.", flavor));
    }

    let equipment = constraints.equipment.trim();
    if !equipment.is_empty() {
        prompt.push_str(&format!(
            " Prefer using the following cooking equipment: {}.",
            equipment
        ));
    }

    let serving_size = constraints.serving_size.trim();
    if !serving_size.is_empty() {
        prompt.push_str(&format!(
            " Each recipe should serve {}, and all ingredient quantities must be adjusted to that serving size.",
            serving_size
        ));
    }

    prompt.push_str(
        " For each recipe provide a name, a short description, the cuisine type, the estimated cooking time, \
         the full list of required ingredients with quantities, and step-by-step instructions. \
         Make sure the output is JSON matching the provided schema.",
    );

    prompt
}

pub fn build_image_prompt(recipe_name: &str) -> String {
    format!(
        "A high-quality, delicious-looking professional food photograph of \"{}\".",
        recipe_name
    )
}

/// Parse the raw LLM text into drafts.
///
/// A well-formed JSON value that is not an array yields no drafts; anything that
/// fails to parse, or an array element missing a required field, is an error.
pub fn parse_recipe_drafts(raw_response: &str) -> Result<Vec<RecipeDraft>, CoreError> {
    let parsed: serde_json::Value = serde_json::from_str(raw_response.trim()).map_err(|e| {
        tracing::error!("Failed to parse LLM response: {}", e);
        CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
    })?;

    if !parsed.is_array() {
        tracing::warn!("LLM response is not an array, treating it as zero recipes");
        return Ok(Vec::new());
    }

    let recipes: Vec<GeneratedRecipe> = serde_json::from_value(parsed).map_err(|e| {
        tracing::error!("Invalid recipes format: {}", e);
        CoreError::ExternalServiceError(format!("Invalid recipes format: {}", e))
    })?;

    Ok(recipes.into_iter().map(RecipeDraft::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generation::value_objects::CookingTimeLimit;

    const TWO_RECIPES: &str = r#"
        [
            {
                "recipeName": "Tomato Egg Stir-fry",
                "description": "Homestyle and quick.",
                "cuisineType": "Chinese",
                "cookingTime": "15 minutes",
                "ingredients": ["2 eggs", "2 tomatoes"],
                "instructions": ["Beat eggs", "Stir-fry with tomatoes"]
            },
            {
                "recipeName": "Shakshuka",
                "description": "Eggs poached in tomato sauce.",
                "cuisineType": "Middle Eastern",
                "cookingTime": "30 minutes",
                "ingredients": ["4 eggs", "400g tomatoes"],
                "instructions": ["Make sauce", "Poach eggs"]
            }
        ]
    "#;

    fn egg_and_tomato() -> IngredientList {
        IngredientList::new(["egg", "tomato"])
    }

    #[test]
    fn test_default_constraints_add_no_clauses() {
        let prompt = build_recipe_prompt(&egg_and_tomato(), &GenerationConstraints::default());
        assert!(prompt.contains("egg, tomato"));
        assert!(!prompt.contains("cooked within"));
        assert!(!prompt.contains("flavor"));
        assert!(!prompt.contains("equipment"));
        assert!(!prompt.contains("serve"));
    }

    #[test]
    fn test_blank_text_constraints_are_omitted() {
        let constraints = GenerationConstraints {
            max_cooking_time: CookingTimeLimit::Unlimited,
            flavor_preference: "   ".to_string(),
            equipment: "".to_string(),
            serving_size: "\t".to_string(),
        };
        let prompt = build_recipe_prompt(&egg_and_tomato(), &constraints);
        assert!(!prompt.contains("flavor"));
        assert!(!prompt.contains("equipment"));
        assert!(!prompt.contains("serve"));
    }

    #[test]
    fn test_all_constraints_included() {
        let constraints = GenerationConstraints {
            max_cooking_time: CookingTimeLimit::Minutes30,
            flavor_preference: "spicy".to_string(),
            equipment: "air fryer".to_string(),
            serving_size: "2 people".to_string(),
        };
        let prompt = build_recipe_prompt(&egg_and_tomato(), &constraints);
        assert!(prompt.contains("cooked within 30 minutes"));
        assert!(prompt.contains("\"spicy\" flavor"));
        assert!(prompt.contains("equipment: air fryer"));
        assert!(prompt.contains("serve 2 people"));
    }

    #[test]
    fn test_image_prompt_names_recipe() {
        assert!(build_image_prompt("Shakshuka").contains("\"Shakshuka\""));
    }

    #[test]
    fn test_parse_recipe_drafts() {
        let drafts = parse_recipe_drafts(TWO_RECIPES).unwrap();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].recipe_name, "Tomato Egg Stir-fry");
        assert_eq!(drafts[1].instructions.len(), 2);
        assert!(drafts.iter().all(|d| d.image_url.is_none()));
    }

    #[test]
    fn test_non_array_response_yields_no_drafts() {
        let drafts = parse_recipe_drafts(r#"{"recipes": []}"#).unwrap();
        assert!(drafts.is_empty());
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let raw = r#"[{"recipeName": "Soup", "description": "Warm."}]"#;
        assert!(matches!(
            parse_recipe_drafts(raw),
            Err(CoreError::ExternalServiceError(_))
        ));
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let raw = r#"[{
            "recipeName": "Soup",
            "description": "Warm.",
            "cuisineType": "French",
            "cookingTime": "1 hour",
            "ingredients": "water",
            "instructions": ["Boil"]
        }]"#;
        assert!(parse_recipe_drafts(raw).is_err());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(parse_recipe_drafts("not json at all").is_err());
    }
}
