use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    generation::ports::LLMClient,
    recipe::{
        entities::Recipe,
        policies::{ensure_complete_recipe, ensure_ingredients, ensure_rating, normalize_comment},
        ports::RecipeService,
        value_objects::{GenerateRecipesInput, RecipeFilter, UploadRecipeInput},
    },
    store::ports::KeyValueStorage,
};

impl<LLM, S> RecipeService for Service<LLM, S>
where
    LLM: LLMClient,
    S: KeyValueStorage,
{
    #[instrument(skip_all, fields(ingredients = input.ingredients.len()))]
    async fn generate_recipes(
        &mut self,
        input: GenerateRecipesInput,
    ) -> Result<Vec<Arc<Recipe>>, CoreError> {
        // 1. Reject before any network call
        ensure_ingredients(&input.ingredients)?;

        // 2. Generate drafts with images
        let drafts = self
            .generator
            .generate(&input.ingredients, &input.constraints)
            .await?;

        // 3. Enrich, prepend and persist
        self.store.add_generated(drafts).await
    }

    #[instrument(skip_all)]
    async fn upload_recipe(&mut self, input: UploadRecipeInput) -> Result<Arc<Recipe>, CoreError> {
        let draft = input.into_draft();
        ensure_complete_recipe(&draft)?;

        self.store.add_user_recipe(draft).await
    }

    #[instrument(skip(self))]
    async fn rate_recipe(
        &mut self,
        recipe_id: Uuid,
        rating: u8,
    ) -> Result<Option<Arc<Recipe>>, CoreError> {
        ensure_rating(rating)?;

        self.store.set_rating(recipe_id, rating).await
    }

    #[instrument(skip(self))]
    async fn toggle_favorite(&mut self, recipe_id: Uuid) -> Result<Option<Arc<Recipe>>, CoreError> {
        self.store.toggle_favorite(recipe_id).await
    }

    #[instrument(skip(self, text))]
    async fn comment_on_recipe(
        &mut self,
        recipe_id: Uuid,
        text: String,
    ) -> Result<Option<Arc<Recipe>>, CoreError> {
        let text = normalize_comment(&text)?;

        self.store.add_comment(recipe_id, text).await
    }

    fn list_recipes(&self, filter: RecipeFilter) -> Vec<Arc<Recipe>> {
        if filter.favorites_only {
            return self.store.favorites();
        }
        self.store.snapshot().to_vec()
    }

    fn get_recipe(&self, recipe_id: Uuid) -> Option<Arc<Recipe>> {
        self.store.get(recipe_id)
    }
}
