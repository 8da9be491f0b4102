use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::{
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous},
    Pool, Sqlite, SqlitePool, Transaction,
};

use crate::{
    conf::settings,
    pkg::internal::{auth::TokenKeys, blobstore::BlobStore, skills::SkillTaxonomy},
    prelude::Result,
};

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub fn db_pool() -> Result<Pool<Sqlite>> {
    let options = SqliteConnectOptions::from_str(&settings.database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));
    let pool = SqlitePoolOptions::new()
        .max_connections(settings.database_pool_max_connections)
        .connect_lazy_with(options);
    Ok(pool)
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: Arc<SqlitePool>,
    pub blobs: Arc<BlobStore>,
    pub taxonomy: Arc<SkillTaxonomy>,
    pub tokens: TokenKeys,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        Ok(AppState::assemble(
            db_pool()?,
            BlobStore::new(&settings.upload_dir),
            TokenKeys::from_secret(&settings.jwt_secret, settings.jwt_expiry_hours),
        ))
    }

    pub fn assemble(pool: SqlitePool, blobs: BlobStore, tokens: TokenKeys) -> AppState {
        AppState {
            db_pool: Arc::new(pool),
            blobs: Arc::new(blobs),
            taxonomy: Arc::new(SkillTaxonomy::seeded()),
            tokens,
        }
    }
}

pub trait GetTxn {
    async fn begin_txn(&self) -> Result<Transaction<'static, Sqlite>>;
}

impl GetTxn for SqlitePool {
    async fn begin_txn(&self) -> Result<Transaction<'static, Sqlite>> {
        Ok(self.begin().await?)
    }
}
