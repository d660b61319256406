use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::CustomError;

use super::model::Account;

#[async_trait]
pub trait DbConnection: Send + Sync {
    async fn create_table(&self) -> Result<(), sqlx::Error>;
    async fn insert_account(&self, account: &Account) -> Result<i32, sqlx::Error>;
    async fn fetch_account(&self, id: i32) -> Result<Account, sqlx::Error>;
    async fn fetch_accounts(&self) -> Result<Vec<Account>, sqlx::Error>;
    async fn remove_account(&self, id: i32) -> Result<u64, sqlx::Error>;
    fn log_pool_stats(&self);
}

#[async_trait]
impl DbConnection for sqlx::PgPool {
    async fn create_table(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS account (
                id SERIAL PRIMARY KEY,
                first_name VARCHAR(50) NOT NULL,
                last_name VARCHAR(50) NOT NULL,
                number BIGINT NOT NULL,
                balance BIGINT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
            )"#,
        )
        .execute(self)
        .await?;
        Ok(())
    }
    async fn insert_account(&self, account: &Account) -> Result<i32, sqlx::Error> {
        let row: (i32,) = sqlx::query_as(
            r#"
            INSERT INTO account (first_name, last_name, number, balance, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id"#,
        )
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.number)
        .bind(account.balance)
        .bind(account.created_at)
        .fetch_one(self)
        .await?;
        Ok(row.0)
    }
    async fn fetch_account(&self, id: i32) -> Result<Account, sqlx::Error> {
        sqlx::query_as::<_, Account>(
            r#"SELECT id, first_name, last_name, number, balance, created_at FROM account WHERE id = $1"#,
        )
        .bind(id)
        .fetch_one(self)
        .await
    }
    async fn fetch_accounts(&self) -> Result<Vec<Account>, sqlx::Error> {
        sqlx::query_as::<_, Account>(
            r#"SELECT id, first_name, last_name, number, balance, created_at FROM account ORDER BY id"#,
        )
        .fetch_all(self)
        .await
    }
    async fn remove_account(&self, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM account WHERE id = $1"#)
            .bind(id)
            .execute(self)
            .await?;
        Ok(result.rows_affected())
    }
    fn log_pool_stats(&self) {
        debug!(
            total = self.size(),
            idle = self.num_idle(),
            active = self.size().saturating_sub(self.num_idle() as u32),
            "db pool stats"
        );
    }
}

#[cfg(feature = "test-sqlite")]
#[async_trait]
impl DbConnection for sqlx::SqlitePool {
    async fn create_table(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS account (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                number INTEGER NOT NULL,
                balance INTEGER NOT NULL,
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )"#,
        )
        .execute(self)
        .await?;
        Ok(())
    }
    async fn insert_account(&self, account: &Account) -> Result<i32, sqlx::Error> {
        let row: (i32,) = sqlx::query_as(
            r#"
            INSERT INTO account (first_name, last_name, number, balance, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id"#,
        )
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.number)
        .bind(account.balance)
        .bind(account.created_at)
        .fetch_one(self)
        .await?;
        Ok(row.0)
    }
    async fn fetch_account(&self, id: i32) -> Result<Account, sqlx::Error> {
        sqlx::query_as::<_, Account>(
            r#"SELECT id, first_name, last_name, number, balance, created_at FROM account WHERE id = ?1"#,
        )
        .bind(id)
        .fetch_one(self)
        .await
    }
    async fn fetch_accounts(&self) -> Result<Vec<Account>, sqlx::Error> {
        sqlx::query_as::<_, Account>(
            r#"SELECT id, first_name, last_name, number, balance, created_at FROM account ORDER BY id"#,
        )
        .fetch_all(self)
        .await
    }
    async fn remove_account(&self, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM account WHERE id = ?1"#)
            .bind(id)
            .execute(self)
            .await?;
        Ok(result.rows_affected())
    }
    fn log_pool_stats(&self) {
        debug!(
            total = self.size(),
            idle = self.num_idle(),
            "db pool stats"
        );
    }
}

pub struct AccountRepository<DB: DbConnection> {
    db: DB,
}

impl<DB: DbConnection> AccountRepository<DB> {
    pub fn new(db: DB) -> Self {
        AccountRepository { db }
    }

    pub fn log_pool_stats(&self) {
        self.db.log_pool_stats();
    }

    pub async fn init(&self) -> Result<(), CustomError> {
        info!("creating account table");
        self.db.create_table().await.map_err(CustomError::DBError)
    }

    /// Persists `account` and returns the id the store generated for it.
    pub async fn create_account(&self, account: &Account) -> Result<i32, CustomError> {
        self.db
            .insert_account(account)
            .await
            .map_err(CustomError::DBError)
    }

    pub async fn get_account_by_id(&self, id: i32) -> Result<Account, CustomError> {
        self.db.fetch_account(id).await.map_err(|e| match e {
            sqlx::Error::RowNotFound => CustomError::AccountNotFound(id),
            _ => CustomError::DBError(e),
        })
    }

    pub async fn get_accounts(&self) -> Result<Vec<Account>, CustomError> {
        self.db.fetch_accounts().await.map_err(CustomError::DBError)
    }

    /// Deleting an unknown id is not an error.
    pub async fn delete_account(&self, id: i32) -> Result<(), CustomError> {
        let affected = self
            .db
            .remove_account(id)
            .await
            .map_err(CustomError::DBError)?;
        debug!(id, affected, "delete account");
        Ok(())
    }

    pub async fn update_account(&self, account: &Account) -> Result<(), CustomError> {
        debug!(id = account.id, "update account is a no-op");
        Ok(())
    }
}
