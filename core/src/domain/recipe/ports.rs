use std::future::Future;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{GenerateRecipesInput, RecipeFilter, UploadRecipeInput},
    },
};

/// Service trait for recipe business logic
///
/// Mutations on an id that is not in the collection return `Ok(None)`.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    /// Generate recipes and put them at the front of the collection
    fn generate_recipes(
        &mut self,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<Vec<Arc<Recipe>>, CoreError>> + Send;

    fn upload_recipe(
        &mut self,
        input: UploadRecipeInput,
    ) -> impl Future<Output = Result<Arc<Recipe>, CoreError>> + Send;

    fn rate_recipe(
        &mut self,
        recipe_id: Uuid,
        rating: u8,
    ) -> impl Future<Output = Result<Option<Arc<Recipe>>, CoreError>> + Send;

    fn toggle_favorite(
        &mut self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<Arc<Recipe>>, CoreError>> + Send;

    fn comment_on_recipe(
        &mut self,
        recipe_id: Uuid,
        text: String,
    ) -> impl Future<Output = Result<Option<Arc<Recipe>>, CoreError>> + Send;

    fn list_recipes(&self, filter: RecipeFilter) -> Vec<Arc<Recipe>>;

    fn get_recipe(&self, recipe_id: Uuid) -> Option<Arc<Recipe>>;
}
