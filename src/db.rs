use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

use crate::error::CustomError;

pub struct Database;

impl Database {
    pub async fn new_pool(url: &str) -> Result<PgPool, CustomError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .min_connections(5)
            .idle_timeout(Duration::from_secs(30))
            .acquire_timeout(Duration::from_secs(5))
            .connect(url)
            .await
            .map_err(CustomError::DBError)?;

        info!("PostgreSQL connection pool established");
        Ok(pool)
    }
}
