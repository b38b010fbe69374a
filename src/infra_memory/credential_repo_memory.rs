use crate::domain_model::*;
use crate::domain_port::*;
use dashmap::DashMap;

/// Process-local credential table, seeded once at startup.
#[derive(Debug, Default)]
pub struct MemoryCredentialRepo {
    records: DashMap<Identifier, String>,
}

impl MemoryCredentialRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later records with a duplicate identifier replace earlier ones, keeping
    /// at most one record per identifier.
    pub fn with_records(records: impl IntoIterator<Item = CredentialRecord>) -> Self {
        let repo = Self::new();
        for record in records {
            repo.records.insert(record.identifier, record.destination);
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait::async_trait]
impl CredentialRepo for MemoryCredentialRepo {
    async fn find_by_identifier(
        &self,
        identifier: &Identifier,
    ) -> Result<Option<CredentialRecord>, CredentialRepoError> {
        Ok(self.records.get(identifier).map(|entry| CredentialRecord {
            identifier: entry.key().clone(),
            destination: entry.value().clone(),
        }))
    }
}
