use crate::domain::{
    common::entities::app_errors::CoreError, generation::value_objects::IngredientList,
    recipe::entities::RecipeDraft,
};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

pub fn ensure_ingredients(ingredients: &IngredientList) -> Result<(), CoreError> {
    if ingredients.is_empty() {
        return Err(CoreError::MissingIngredients);
    }
    Ok(())
}

pub fn ensure_rating(rating: u8) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::InvalidRating(rating));
    }
    Ok(())
}

/// Returns the trimmed comment text, rejecting blank input
pub fn normalize_comment(text: &str) -> Result<String, CoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyComment);
    }
    Ok(trimmed.to_string())
}

/// Every field of a user recipe is required; ingredients and instructions need at least one line.
pub fn ensure_complete_recipe(draft: &RecipeDraft) -> Result<(), CoreError> {
    let text_fields = [
        ("recipe name", &draft.recipe_name),
        ("description", &draft.description),
        ("cuisine type", &draft.cuisine_type),
        ("cooking time", &draft.cooking_time),
    ];
    for (field, value) in text_fields {
        if value.trim().is_empty() {
            return Err(CoreError::Invalid(format!("{} must not be empty", field)));
        }
    }

    if draft.ingredients.is_empty() {
        return Err(CoreError::Invalid(
            "at least one ingredient is required".to_string(),
        ));
    }
    if draft.instructions.is_empty() {
        return Err(CoreError::Invalid(
            "at least one instruction step is required".to_string(),
        ));
    }
    Ok(())
}
