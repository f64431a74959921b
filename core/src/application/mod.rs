use crate::{
    domain::{
        common::{ChefmateConfig, services::Service},
        generation::services::RecipeGenerator,
        store::services::RecipeStore,
    },
    infrastructure::{llm::GeminiLLMClient, storage::FileStorage},
};

pub type ChefmateService = Service<GeminiLLMClient, FileStorage>;

/// Wire the Gemini client and the file-backed store, hydrating the collection once.
pub async fn create_service(config: ChefmateConfig) -> Result<ChefmateService, anyhow::Error> {
    let llm_client = GeminiLLMClient::new(config.llm)?;
    let storage = FileStorage::new(&config.storage.data_dir);

    tracing::debug!("Using data directory {}", storage.data_dir().display());
    let store = RecipeStore::hydrate(storage).await;
    if store.is_empty() {
        tracing::info!("No saved recipes yet");
    } else {
        tracing::info!("Loaded {} saved recipes", store.len());
    }

    Ok(Service::new(RecipeGenerator::new(llm_client), store))
}
