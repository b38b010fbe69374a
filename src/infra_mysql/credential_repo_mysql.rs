use super::util::classify;
use crate::domain_model::*;
use crate::domain_port::*;
use sqlx::{MySqlPool, Row};

pub struct MySqlCredentialRepo {
    pool: MySqlPool,
}

impl MySqlCredentialRepo {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlCredentialRepo { pool }
    }
}

#[async_trait::async_trait]
impl CredentialRepo for MySqlCredentialRepo {
    async fn find_by_identifier(
        &self,
        identifier: &Identifier,
    ) -> Result<Option<CredentialRecord>, CredentialRepoError> {
        // The pool hands out a connection for this query only; a broken
        // connection is discarded on drop instead of poisoning later lookups.
        let row = sqlx::query("SELECT user_name, link FROM user_credentials WHERE user_name = ?")
            .bind(identifier.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify("query credential", e))?;

        Ok(row.map(|row| CredentialRecord {
            identifier: Identifier(row.get::<String, _>("user_name")),
            destination: row.get::<String, _>("link"),
        }))
    }
}
