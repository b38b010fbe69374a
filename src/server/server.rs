use crate::application_impl::*;
use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use crate::infra_memory::*;
use crate::infra_mysql::*;
use crate::logger::*;
use crate::settings::Settings;
use sqlx::MySqlPool;
use std::sync::Arc;
use std::time::Duration;

pub struct Server {
    pub lookup_service: Arc<dyn LookupService>,
    pool: Option<MySqlPool>,
}

impl Server {
    pub async fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let (credential_repo, pool): (Arc<dyn CredentialRepo>, Option<MySqlPool>) =
            match settings.lookup.backend.as_str() {
                "fake" => {
                    let records = settings
                        .lookup
                        .seed
                        .iter()
                        .map(|s| CredentialRecord::new(s.username.clone(), s.link.clone()));
                    let repo = MemoryCredentialRepo::with_records(records);
                    if repo.is_empty() {
                        warn!("in-memory credential store has no seed records");
                    }
                    info!(records = repo.len(), "using in-memory credential store");
                    (Arc::new(repo), None)
                }
                "real" => {
                    let database = settings.database.as_ref().ok_or_else(|| {
                        anyhow::anyhow!("lookup backend \"real\" requires a [database] section")
                    })?;
                    let pool = connect_lazy(&PoolConfig {
                        url: &database.url,
                        max_connections: database.max_connections,
                        acquire_timeout: Duration::from_secs(database.acquire_timeout_secs),
                    })?;
                    info!(
                        max_connections = database.max_connections,
                        "using MySQL credential store"
                    );
                    (Arc::new(MySqlCredentialRepo::new(pool.clone())), Some(pool))
                }
                other => return Err(anyhow::anyhow!("Unknown lookup backend: {}", other)),
            };

        let policy = DestinationPolicy::new(&settings.lookup.allowed_hosts);
        if settings.lookup.allowed_hosts.is_empty() {
            warn!("no destination allow-list configured; any http(s) destination is served");
        }

        let lookup_service: Arc<dyn LookupService> =
            Arc::new(RealLookupService::new(credential_repo, policy));

        info!("server started");

        Ok(Self {
            lookup_service,
            pool,
        })
    }

    pub async fn shutdown(&self) {
        info!("server shutting down...");

        if let Some(pool) = &self.pool {
            pool.close().await;
            info!("database pool closed");
        }
    }
}
