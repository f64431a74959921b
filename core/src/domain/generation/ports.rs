use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    generation::value_objects::{GeneratedImage, ImageOptions},
};

/// LLM Client trait for calling generative text and image models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Returns the raw structured text produced under `response_schema`
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_image(
        &self,
        prompt: String,
        options: ImageOptions,
    ) -> impl Future<Output = Result<GeneratedImage, CoreError>> + Send;
}
