use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::{future::Future, sync::Arc, time::Duration};
use tokio::sync::OnceCell;
use tracing::info;

use crate::config::AppConfig;

static CONNECTION: OnceCell<Arc<DatabaseConnection>> = OnceCell::const_new();

/// Process-wide connection pool, opened on first use.
pub async fn connect(config: &AppConfig) -> Result<Arc<DatabaseConnection>, DbErr> {
    let options = connect_options(config);
    get_or_connect(&CONNECTION, || async move {
        let conn = Database::connect(options).await?;
        info!("Database connection established");
        Ok(conn)
    })
    .await
}

/// Concurrent first callers await the same attempt. A failed attempt leaves
/// the cell empty so the next caller tries again.
pub async fn get_or_connect<F, Fut>(
    cell: &OnceCell<Arc<DatabaseConnection>>,
    open: F,
) -> Result<Arc<DatabaseConnection>, DbErr>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<DatabaseConnection, DbErr>>,
{
    cell.get_or_try_init(|| async { open().await.map(Arc::new) })
        .await
        .cloned()
}

pub fn connect_options(config: &AppConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);
    opt
}
