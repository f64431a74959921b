use crate::domain::{
    generation::{ports::LLMClient, services::RecipeGenerator},
    store::{ports::KeyValueStorage, services::RecipeStore},
};

/// Composition root for the recipe use cases.
pub struct Service<LLM, S>
where
    LLM: LLMClient,
    S: KeyValueStorage,
{
    pub(crate) generator: RecipeGenerator<LLM>,
    pub(crate) store: RecipeStore<S>,
}

impl<LLM, S> Service<LLM, S>
where
    LLM: LLMClient,
    S: KeyValueStorage,
{
    pub fn new(generator: RecipeGenerator<LLM>, store: RecipeStore<S>) -> Self {
        Self { generator, store }
    }

    pub fn store(&self) -> &RecipeStore<S> {
        &self.store
    }
}
