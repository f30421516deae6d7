use crate::application_impl::RealMessageService;
use crate::application_port::MessageService;
use crate::domain_port::MessageRepo;
use crate::infra_memory::InMemoryMessageRepo;
use crate::infra_mysql::MySqlMessageRepo;
use crate::logger::*;
use crate::settings::Settings;
use sqlx::{MySql, Pool};
use std::sync::Arc;

pub struct Server {
    pub message_service: Arc<dyn MessageService>,
    pool: Option<Pool<MySql>>,
}

impl Server {
    pub async fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let mut pool = None;

        let message_repo: Arc<dyn MessageRepo> = match settings.storage.backend.as_str() {
            "memory" => Arc::new(InMemoryMessageRepo::new()),
            "mysql" => {
                let dsn = settings.storage.mysql_dsn.as_deref().ok_or_else(|| {
                    anyhow::anyhow!("storage.mysql_dsn is required for the mysql backend")
                })?;
                let mysql_pool = Pool::<MySql>::connect(dsn).await?;
                pool = Some(mysql_pool.clone());
                Arc::new(MySqlMessageRepo::new(mysql_pool))
            }
            other => return Err(anyhow::anyhow!("Unknown storage backend: {}", other)),
        };

        let message_service: Arc<dyn MessageService> =
            Arc::new(RealMessageService::new(message_repo));

        info!("server started");

        Ok(Self {
            message_service,
            pool,
        })
    }

    pub async fn shutdown(&self) {
        info!("server shutting down...");

        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
