use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use shared::{
    abstract_trait::jwt::DynJwtService,
    config::{Config, ConnectionManager, JwtConfig},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub di_container: DependenciesInject,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = ConnectionManager::new_pool(
            &config.database_url,
            config.run_migrations,
            config.db_max_connections,
        )
        .await
        .context("Failed to create database pool")?;

        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;

        Ok(Self::from_parts(jwt_config, DependenciesInject::new(pool)))
    }

    pub fn from_parts(jwt_config: DynJwtService, di_container: DependenciesInject) -> Self {
        Self {
            jwt_config,
            di_container,
        }
    }
}
