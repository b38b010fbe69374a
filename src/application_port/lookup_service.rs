use crate::domain_model::DestinationError;
use crate::domain_port::CredentialRepoError;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("username is required")]
    UsernameRequired,
    #[error("username exceeds {max} bytes")]
    UsernameTooLong { max: usize },
    #[error("destination rejected for {identifier}: {source}")]
    DestinationRejected {
        identifier: String,
        source: DestinationError,
    },
    #[error(transparent)]
    Store(#[from] CredentialRepoError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found { destination: String },
    NotFound,
}

#[async_trait::async_trait]
pub trait LookupService: Send + Sync {
    /// Resolves `username` to its registered destination, if any.
    async fn check_user(&self, username: &str) -> Result<LookupOutcome, LookupError>;
}
