//! Error types for the model registry.

/// Error creating a model handle or registering a provider.
#[derive(Debug, thiserror::Error)]
pub enum CreateModelError {
    /// Invalid model ID format.
    #[error("invalid model id '{0}': expected format 'provider/model'")]
    InvalidModelId(String),

    /// The specified provider was not found in the registry.
    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    /// A provider with this name is already registered.
    #[error("LLM provider '{0}' is already registered")]
    DuplicateProvider(String),
}
