use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

/// Author recorded on every comment written from this device.
pub const LOCAL_COMMENT_AUTHOR: &str = "you";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    Ai,
    User,
}

impl RecipeSource {
    pub fn as_str(&self) -> &str {
        match self {
            RecipeSource::Ai => "ai",
            RecipeSource::User => "user",
        }
    }
}

/// A recipe payload before identity and engagement fields are attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub recipe_name: String,
    pub description: String,
    pub cuisine_type: String,
    pub cooking_time: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub author: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    pub fn local(text: String) -> Self {
        Self {
            id: generate_uuid_v7(),
            author: LOCAL_COMMENT_AUTHOR.to_string(),
            text,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub recipe_name: String,
    pub description: String,
    pub cuisine_type: String,
    pub cooking_time: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub rating: u8,
    pub source: RecipeSource,
    pub is_favorited: bool,
    pub comments: Vec<Comment>,
}

impl Recipe {
    /// Enriches a draft with a fresh id and empty engagement state.
    pub fn from_draft(draft: RecipeDraft, source: RecipeSource) -> Self {
        Self {
            id: generate_uuid_v7(),
            recipe_name: draft.recipe_name,
            description: draft.description,
            cuisine_type: draft.cuisine_type,
            cooking_time: draft.cooking_time,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            image_url: draft.image_url,
            rating: 0,
            source,
            is_favorited: false,
            comments: Vec::new(),
        }
    }

    pub fn with_rating(&self, rating: u8) -> Self {
        Self {
            rating,
            ..self.clone()
        }
    }

    pub fn with_favorite_toggled(&self) -> Self {
        Self {
            is_favorited: !self.is_favorited,
            ..self.clone()
        }
    }

    pub fn with_comment(&self, comment: Comment) -> Self {
        let mut updated = self.clone();
        updated.comments.push(comment);
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> RecipeDraft {
        RecipeDraft {
            recipe_name: "Tomato Egg Stir-fry".to_string(),
            description: "A homestyle classic.".to_string(),
            cuisine_type: "Chinese".to_string(),
            cooking_time: "15 minutes".to_string(),
            ingredients: vec!["2 eggs".to_string(), "2 tomatoes".to_string()],
            instructions: vec!["Beat the eggs.".to_string(), "Stir-fry.".to_string()],
            image_url: None,
        }
    }

    #[test]
    fn test_from_draft_sets_default_engagement() {
        let recipe = Recipe::from_draft(draft(), RecipeSource::Ai);
        assert_eq!(recipe.source, RecipeSource::Ai);
        assert_eq!(recipe.rating, 0);
        assert!(!recipe.is_favorited);
        assert!(recipe.comments.is_empty());
        assert_eq!(recipe.recipe_name, "Tomato Egg Stir-fry");
    }

    #[test]
    fn test_from_draft_assigns_distinct_ids() {
        let a = Recipe::from_draft(draft(), RecipeSource::User);
        let b = Recipe::from_draft(draft(), RecipeSource::User);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let recipe = Recipe::from_draft(draft(), RecipeSource::Ai);
        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["recipeName"], "Tomato Egg Stir-fry");
        assert_eq!(value["cuisineType"], "Chinese");
        assert_eq!(value["isFavorited"], false);
        assert_eq!(value["source"], "ai");
        assert!(value.get("imageUrl").is_none());
    }

    #[test]
    fn test_missing_rating_defaults_to_zero() {
        let raw = r#"{
            "id": "0191e1c4-5b7a-7cc3-9f0e-3c2b4a1d6e8f",
            "recipeName": "Omelette",
            "description": "Fluffy.",
            "cuisineType": "French",
            "cookingTime": "10 minutes",
            "ingredients": ["3 eggs"],
            "instructions": ["Whisk", "Cook"],
            "source": "user",
            "isFavorited": true,
            "comments": []
        }"#;
        let recipe: Recipe = serde_json::from_str(raw).unwrap();
        assert_eq!(recipe.rating, 0);
        assert_eq!(recipe.source, RecipeSource::User);
        assert!(recipe.is_favorited);
    }

    #[test]
    fn test_with_comment_appends() {
        let recipe = Recipe::from_draft(draft(), RecipeSource::Ai);
        let first = recipe.with_comment(Comment::local("Great".to_string()));
        let second = first.with_comment(Comment::local("Again".to_string()));
        assert_eq!(second.comments.len(), 2);
        assert_eq!(second.comments[0].text, "Great");
        assert_eq!(second.comments[1].author, LOCAL_COMMENT_AUTHOR);
        assert!(recipe.comments.is_empty());
    }
}
