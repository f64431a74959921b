use std::collections::HashSet;
use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{Comment, Recipe, RecipeDraft, RecipeSource},
    store::ports::KeyValueStorage,
};

/// Storage key holding the serialized recipe collection.
pub const RECIPES_STORAGE_KEY: &str = "recipes";

/// Read-only view of the collection, newest first.
pub type RecipeSnapshot = Arc<[Arc<Recipe>]>;

/// Write-through recipe collection.
///
/// Every mutation builds a new sequence in which only the affected entry is a new
/// allocation, persists it, and only then swaps it in. A failed write leaves the
/// in-memory copy untouched so both copies always agree.
pub struct RecipeStore<S: KeyValueStorage> {
    storage: S,
    recipes: RecipeSnapshot,
}

impl<S: KeyValueStorage> RecipeStore<S> {
    /// Load the persisted collection. Missing or unreadable data yields an empty store.
    #[instrument(skip_all)]
    pub async fn hydrate(storage: S) -> Self {
        let recipes = match storage.get(RECIPES_STORAGE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Recipe>>(&raw) {
                Ok(recipes) => dedupe_by_id(recipes),
                Err(e) => {
                    tracing::error!("Failed to parse recipes from storage: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::error!("Failed to read recipes from storage: {}", e);
                Vec::new()
            }
        };

        Self {
            storage,
            recipes: recipes.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn snapshot(&self) -> RecipeSnapshot {
        Arc::clone(&self.recipes)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, recipe_id: Uuid) -> Option<Arc<Recipe>> {
        self.recipes.iter().find(|r| r.id == recipe_id).cloned()
    }

    pub fn favorites(&self) -> Vec<Arc<Recipe>> {
        self.recipes
            .iter()
            .filter(|r| r.is_favorited)
            .cloned()
            .collect()
    }

    /// Enrich generated drafts and put them in front of the collection, in draft order
    pub async fn add_generated(
        &mut self,
        drafts: Vec<RecipeDraft>,
    ) -> Result<Vec<Arc<Recipe>>, CoreError> {
        self.prepend(drafts, RecipeSource::Ai).await
    }

    pub async fn add_user_recipe(&mut self, draft: RecipeDraft) -> Result<Arc<Recipe>, CoreError> {
        let mut added = self.prepend(vec![draft], RecipeSource::User).await?;
        added
            .pop()
            .ok_or_else(|| CoreError::StorageError("uploaded recipe was not stored".to_string()))
    }

    /// The value is stored as given
    pub async fn set_rating(
        &mut self,
        recipe_id: Uuid,
        rating: u8,
    ) -> Result<Option<Arc<Recipe>>, CoreError> {
        self.replace(recipe_id, |recipe| recipe.with_rating(rating))
            .await
    }

    pub async fn toggle_favorite(
        &mut self,
        recipe_id: Uuid,
    ) -> Result<Option<Arc<Recipe>>, CoreError> {
        self.replace(recipe_id, Recipe::with_favorite_toggled).await
    }

    /// Appends a locally authored comment; the text is stored as given
    pub async fn add_comment(
        &mut self,
        recipe_id: Uuid,
        text: String,
    ) -> Result<Option<Arc<Recipe>>, CoreError> {
        self.replace(recipe_id, |recipe| recipe.with_comment(Comment::local(text)))
            .await
    }

    async fn prepend(
        &mut self,
        drafts: Vec<RecipeDraft>,
        source: RecipeSource,
    ) -> Result<Vec<Arc<Recipe>>, CoreError> {
        if drafts.is_empty() {
            return Ok(Vec::new());
        }

        let added: Vec<Arc<Recipe>> = drafts
            .into_iter()
            .map(|draft| Arc::new(Recipe::from_draft(draft, source)))
            .collect();

        let next: Vec<Arc<Recipe>> = added
            .iter()
            .cloned()
            .chain(self.recipes.iter().cloned())
            .collect();

        self.commit(next).await?;
        tracing::info!("Added {} {} recipes", added.len(), source.as_str());

        Ok(added)
    }

    async fn replace<F>(
        &mut self,
        recipe_id: Uuid,
        update: F,
    ) -> Result<Option<Arc<Recipe>>, CoreError>
    where
        F: FnOnce(&Recipe) -> Recipe,
    {
        let Some(position) = self.recipes.iter().position(|r| r.id == recipe_id) else {
            tracing::debug!("No recipe with id {}, ignoring update", recipe_id);
            return Ok(None);
        };

        let updated = Arc::new(update(&self.recipes[position]));

        let next: Vec<Arc<Recipe>> = self
            .recipes
            .iter()
            .enumerate()
            .map(|(index, recipe)| {
                if index == position {
                    Arc::clone(&updated)
                } else {
                    Arc::clone(recipe)
                }
            })
            .collect();

        self.commit(next).await?;

        Ok(Some(updated))
    }

    async fn commit(&mut self, next: Vec<Arc<Recipe>>) -> Result<(), CoreError> {
        let records: Vec<&Recipe> = next.iter().map(Arc::as_ref).collect();
        let serialized = serde_json::to_string(&records).map_err(|e| {
            tracing::error!("Failed to serialize recipes: {}", e);
            CoreError::StorageError(format!("Failed to serialize recipes: {}", e))
        })?;

        self.storage.set(RECIPES_STORAGE_KEY, serialized).await?;
        self.recipes = next.into();

        Ok(())
    }
}

fn dedupe_by_id(recipes: Vec<Recipe>) -> Vec<Recipe> {
    let mut seen = HashSet::new();
    recipes
        .into_iter()
        .filter(|recipe| {
            let first = seen.insert(recipe.id);
            if !first {
                tracing::warn!("Dropping duplicate stored recipe {}", recipe.id);
            }
            first
        })
        .collect()
}
