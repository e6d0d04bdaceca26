use std::sync::Arc;

use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite, SqlitePool};

use crate::{conf::settings, prelude::Result};

pub fn db_pool() -> Result<Pool<Sqlite>> {
    let pool = SqlitePoolOptions::new()
        .max_connections(settings.database_pool_max_connections)
        .connect_lazy(&settings.database_url)?;
    Ok(pool)
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub db_pool: Arc<SqlitePool>,
}

impl AppState {
    pub fn new() -> Result<AppState> {
        Ok(AppState {
            db_pool: Arc::new(db_pool()?),
        })
    }
}
