//! Application state - shared across all handlers.

use std::sync::Arc;

use board_core::PostService;
use board_core::ports::{PasswordService, PostRepository};
use board_infra::{InMemoryPostRepository, PlainTextPasswordService};

#[cfg(feature = "hashing")]
use board_infra::Argon2PasswordService;
#[cfg(feature = "postgres")]
use board_infra::PostgresPostRepository;
#[cfg(feature = "postgres")]
use sea_orm::DbConn;

use crate::config::{AppConfig, PasswordStorage};

/// Which storage backend is serving posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Postgres,
    Memory,
}

impl StorageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKind::Postgres => "postgres",
            StorageKind::Memory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    pub storage: StorageKind,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let passwords = password_service(config.password_storage);
        let (repo, storage) = post_repository(config).await;

        tracing::info!(storage = storage.as_str(), "Application state initialized");

        Self::with_parts(repo, passwords, storage)
    }

    /// State backed by a fresh in-memory store.
    #[cfg(test)]
    pub fn in_memory(passwords: Arc<dyn PasswordService>) -> Self {
        Self::with_parts(
            Arc::new(InMemoryPostRepository::new()),
            passwords,
            StorageKind::Memory,
        )
    }

    fn with_parts(
        repo: Arc<dyn PostRepository>,
        passwords: Arc<dyn PasswordService>,
        storage: StorageKind,
    ) -> Self {
        Self {
            posts: Arc::new(PostService::new(repo, passwords)),
            storage,
        }
    }
}

fn password_service(storage: PasswordStorage) -> Arc<dyn PasswordService> {
    match storage {
        PasswordStorage::Plain => Arc::new(PlainTextPasswordService),
        #[cfg(feature = "hashing")]
        PasswordStorage::Argon2 => Arc::new(Argon2PasswordService::new()),
        #[cfg(not(feature = "hashing"))]
        PasswordStorage::Argon2 => {
            tracing::warn!("Built without the hashing feature - storing passwords as plain text");
            Arc::new(PlainTextPasswordService)
        }
    }
}

fn memory() -> (Arc<dyn PostRepository>, StorageKind) {
    (Arc::new(InMemoryPostRepository::new()), StorageKind::Memory)
}

#[cfg(feature = "postgres")]
async fn post_repository(config: &AppConfig) -> (Arc<dyn PostRepository>, StorageKind) {
    let Some(db_config) = config.database.as_ref() else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return memory();
    };

    match board_infra::database::connect(db_config).await {
        Ok(conn) => postgres_or_memory(conn, config.run_migrations).await,
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            memory()
        }
    }
}

/// Serve from Postgres unless the schema could not be brought up to date.
#[cfg(feature = "postgres")]
async fn postgres_or_memory(
    conn: DbConn,
    run_migrations: bool,
) -> (Arc<dyn PostRepository>, StorageKind) {
    use migration::MigratorTrait;

    if run_migrations {
        if let Err(e) = migration::Migrator::up(&conn, None).await {
            tracing::error!(
                "Failed to apply migrations: {}. Using in-memory fallback.",
                e
            );
            return memory();
        }
        tracing::info!("Database migrations applied");
    }

    (
        Arc::new(PostgresPostRepository::new(conn)),
        StorageKind::Postgres,
    )
}

#[cfg(not(feature = "postgres"))]
async fn post_repository(config: &AppConfig) -> (Arc<dyn PostRepository>, StorageKind) {
    if config.database.is_some() {
        tracing::warn!("DATABASE_URL ignored - built without the postgres feature");
    }
    tracing::info!("Running without postgres feature - using in-memory repository");
    memory()
}
