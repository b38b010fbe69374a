use crate::domain_model::*;

#[derive(Debug, thiserror::Error)]
pub enum CredentialRepoError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store error: {0}")]
    Store(String),
}

/// Read-only access to pre-provisioned credential records.
///
/// Lookups are exact and case-sensitive; at most one record matches.
#[async_trait::async_trait]
pub trait CredentialRepo: Send + Sync {
    async fn find_by_identifier(
        &self,
        identifier: &Identifier,
    ) -> Result<Option<CredentialRecord>, CredentialRepoError>;
}
