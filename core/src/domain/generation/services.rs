use futures::future::join_all;
use tracing::instrument;

use crate::domain::{
    common::entities::app_errors::CoreError,
    generation::{
        helpers::{build_image_prompt, build_recipe_prompt, parse_recipe_drafts},
        ports::LLMClient,
        schema::get_recipe_schema,
        value_objects::{GenerationConstraints, ImageOptions, IngredientList},
    },
    recipe::entities::RecipeDraft,
};

/// Turns ingredients and preferences into illustrated recipe drafts.
#[derive(Debug, Clone)]
pub struct RecipeGenerator<LLM: LLMClient> {
    llm_client: LLM,
}

impl<LLM: LLMClient> RecipeGenerator<LLM> {
    pub fn new(llm_client: LLM) -> Self {
        Self { llm_client }
    }

    /// Text generation is all-or-nothing; image generation degrades per recipe.
    #[instrument(skip_all, fields(ingredients = ingredients.len()))]
    pub async fn generate(
        &self,
        ingredients: &IngredientList,
        constraints: &GenerationConstraints,
    ) -> Result<Vec<RecipeDraft>, CoreError> {
        if ingredients.is_empty() {
            return Ok(Vec::new());
        }

        let prompt = build_recipe_prompt(ingredients, constraints);

        let raw_response = self
            .llm_client
            .generate_with_text(prompt, get_recipe_schema())
            .await
            .map_err(|e| {
                tracing::error!("Error generating recipes: {}", e);
                CoreError::GenerationFailed
            })?;

        let drafts = parse_recipe_drafts(&raw_response).map_err(|e| {
            tracing::error!("Error generating recipes: {}", e);
            CoreError::GenerationFailed
        })?;

        tracing::info!("Generated {} recipe drafts", drafts.len());

        Ok(self.attach_images(drafts).await)
    }

    async fn attach_images(&self, drafts: Vec<RecipeDraft>) -> Vec<RecipeDraft> {
        let requests = drafts.iter().map(|draft| {
            self.llm_client.generate_image(
                build_image_prompt(&draft.recipe_name),
                ImageOptions::default(),
            )
        });

        let outcomes = join_all(requests).await;

        drafts
            .into_iter()
            .zip(outcomes)
            .map(|(mut draft, outcome)| {
                match outcome {
                    Ok(image) => draft.image_url = Some(image.into_data_uri()),
                    Err(e) => {
                        tracing::warn!(
                            "Error generating image for recipe \"{}\": {}",
                            draft.recipe_name,
                            e
                        );
                    }
                }
                draft
            })
            .collect()
    }
}
