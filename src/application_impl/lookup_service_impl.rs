use crate::application_port::{LookupError, LookupOutcome, LookupService};
use crate::domain_model::{DestinationPolicy, Identifier, MAX_IDENTIFIER_LEN};
use crate::domain_port::CredentialRepo;
use crate::logger::*;
use std::sync::Arc;

pub struct RealLookupService {
    credential_repo: Arc<dyn CredentialRepo>,
    policy: DestinationPolicy,
}

impl RealLookupService {
    pub fn new(credential_repo: Arc<dyn CredentialRepo>, policy: DestinationPolicy) -> Self {
        RealLookupService {
            credential_repo,
            policy,
        }
    }
}

#[async_trait::async_trait]
impl LookupService for RealLookupService {
    async fn check_user(&self, username: &str) -> Result<LookupOutcome, LookupError> {
        if username.trim().is_empty() {
            return Err(LookupError::UsernameRequired);
        }
        if username.chars().count() > MAX_IDENTIFIER_LEN {
            return Err(LookupError::UsernameTooLong {
                max: MAX_IDENTIFIER_LEN,
            });
        }

        let identifier = Identifier(username.to_owned());
        let Some(record) = self.credential_repo.find_by_identifier(&identifier).await? else {
            debug!(%identifier, "no credential record");
            return Ok(LookupOutcome::NotFound);
        };

        let url = self
            .policy
            .check(&record.destination)
            .map_err(|source| LookupError::DestinationRejected {
                identifier: identifier.to_string(),
                source,
            })?;

        debug!(%identifier, host = url.host_str(), "credential record found");
        Ok(LookupOutcome::Found {
            destination: record.destination.trim().to_owned(),
        })
    }
}
