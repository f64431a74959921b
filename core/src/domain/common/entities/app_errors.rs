use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Please add at least one ingredient")]
    MissingIngredients,

    #[error("Comment text must not be empty")]
    EmptyComment,

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Could not generate recipes. The AI service may be busy, please try again later.")]
    GenerationFailed,

    #[error("Image unavailable: {0}")]
    ImageUnavailable(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Failed to read image: {0}")]
    ImageReadFailed(String),
}

impl CoreError {
    /// Validation errors are caught before any network call or store write.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CoreError::MissingIngredients
                | CoreError::EmptyComment
                | CoreError::InvalidRating(_)
                | CoreError::Invalid(_)
        )
    }
}
