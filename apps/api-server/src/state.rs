//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::PostService;
use quill_core::ports::PostRepository;

use crate::config::AppConfig;

#[cfg(feature = "database")]
use anyhow::Context;
#[cfg(feature = "database")]
use migration::{Migrator, MigratorTrait};
#[cfg(feature = "database")]
use quill_infra::database::{self, SeaOrmPostRepository};

#[cfg(not(feature = "database"))]
use quill_infra::database::InMemoryPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: PostService::new(repo),
        }
    }

    /// Build the application state from configuration.
    ///
    /// A datastore that cannot be reached or migrated aborts startup.
    #[cfg(feature = "database")]
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let db = database::connect(&config.database)
            .await
            .context("failed to connect to the database")?;

        if config.run_migrations {
            Migrator::up(&db, None)
                .await
                .context("failed to apply database migrations")?;
            tracing::info!("Database schema is up to date");
        }

        tracing::info!("Application state initialized");
        Ok(Self::new(Arc::new(SeaOrmPostRepository::new(db))))
    }

    #[cfg(not(feature = "database"))]
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        tracing::warn!(
            database_url = %config.database.url,
            run_migrations = config.run_migrations,
            "Built without database feature - settings ignored, posts are kept in memory only"
        );
        Ok(Self::new(Arc::new(InMemoryPostRepository::new())))
    }
}
