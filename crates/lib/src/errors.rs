use thiserror::Error;

/// Custom error types for the library.
///
/// The retrieval core itself is total and never fails; these variants cover
/// the injected collaborators (chat provider, document store, configuration).
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to the chat provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize the chat provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("The chat provider returned an error: {0}")]
    AiApi(String),
    #[error("Failed to read document `{path}`: {source}")]
    StoreRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to read configuration file: {0}")]
    ConfigRead(#[from] std::io::Error),
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
    #[error("An AI provider is required to build the client")]
    MissingAiProvider,
    #[error("A document store is required to build the client")]
    MissingDocumentStore,
    #[error("An internal error occurred: {0}")]
    Internal(#[from] anyhow::Error),
}
