#![allow(dead_code)]

use gatekeeper::application_impl::RealLookupService;
use gatekeeper::application_port::LookupService;
use gatekeeper::domain_model::*;
use gatekeeper::domain_port::*;
use gatekeeper::infra_memory::MemoryCredentialRepo;
use std::sync::Arc;

pub struct UnreachableRepo;

#[async_trait::async_trait]
impl CredentialRepo for UnreachableRepo {
    async fn find_by_identifier(
        &self,
        _identifier: &Identifier,
    ) -> Result<Option<CredentialRecord>, CredentialRepoError> {
        Err(CredentialRepoError::Unavailable(
            "pool timed out while waiting for an open connection".into(),
        ))
    }
}

pub fn seeded_service(policy: DestinationPolicy) -> Arc<dyn LookupService> {
    let repo = MemoryCredentialRepo::with_records([
        CredentialRecord::new("alice", "https://dest.example/alice"),
        CredentialRecord::new("Eve", "https://dest.example/eve"),
        CredentialRecord::new("mallory", "https://elsewhere.test/m"),
    ]);
    Arc::new(RealLookupService::new(Arc::new(repo), policy))
}

pub fn unreachable_service() -> Arc<dyn LookupService> {
    Arc::new(RealLookupService::new(
        Arc::new(UnreachableRepo),
        DestinationPolicy::allow_any(),
    ))
}
