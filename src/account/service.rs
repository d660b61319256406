use tracing::info;

use super::model::{Account, CreateAccountRequest, TransferRequest};
use super::repo::{AccountRepository, DbConnection};
use crate::{
    auth::{jwt::JwtKeys, model::Claims},
    error::CustomError,
};

pub struct AccountService<DB: DbConnection> {
    repository: AccountRepository<DB>,
    keys: JwtKeys,
}

impl<DB: DbConnection> AccountService<DB> {
    pub fn new(repository: AccountRepository<DB>, keys: JwtKeys) -> Self {
        AccountService { repository, keys }
    }

    /// Ensures the account table exists. Run once before serving.
    pub async fn init(&self) -> Result<(), CustomError> {
        self.repository.init().await
    }

    pub async fn list_accounts(&self) -> Result<Vec<Account>, CustomError> {
        self.repository.log_pool_stats();
        self.repository.get_accounts().await
    }

    pub async fn create_account(&self, request: CreateAccountRequest) -> Result<Account, CustomError> {
        let mut account = Account::new(request.first_name, request.last_name);
        account.id = self.repository.create_account(&account).await?;

        let token = self.keys.create_jwt(&account)?;
        info!(id = account.id, number = account.number, %token, "account created");
        Ok(account)
    }

    pub async fn get_account(&self, id: i32) -> Result<Account, CustomError> {
        self.repository.get_account_by_id(id).await
    }

    pub async fn delete_account(&self, id: i32) -> Result<i32, CustomError> {
        self.repository.delete_account(id).await?;
        info!(id, "account deleted");
        Ok(id)
    }

    pub async fn update_account(&self, account: &Account) -> Result<(), CustomError> {
        self.repository.update_account(account).await
    }

    /// Echoes the request. Balances are never touched.
    pub fn transfer(&self, request: TransferRequest) -> TransferRequest {
        info!(to = request.to_account, amount = request.amount, "transfer requested");
        request
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, CustomError> {
        self.keys.verify_jwt(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::memory::MemoryDb;

    fn service() -> AccountService<MemoryDb> {
        AccountService::new(
            AccountRepository::new(MemoryDb::new()),
            JwtKeys::from_secret("service-secret"),
        )
    }

    fn request(first: &str, last: &str) -> CreateAccountRequest {
        CreateAccountRequest {
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    #[tokio::test]
    async fn created_account_gets_store_id() {
        let svc = service();
        svc.init().await.unwrap();

        let account = svc.create_account(request("Ada", "Lovelace")).await.unwrap();

        assert_eq!(account.id, 1);
        assert_eq!(svc.get_account(1).await.unwrap(), account);
    }

    #[tokio::test]
    async fn update_leaves_stored_account_alone() {
        let svc = service();
        let account = svc.create_account(request("Ada", "Lovelace")).await.unwrap();

        let mut changed = account.clone();
        changed.balance = 500;
        svc.update_account(&changed).await.unwrap();

        assert_eq!(svc.get_account(account.id).await.unwrap().balance, 0);
    }

    #[tokio::test]
    async fn delete_reports_id_even_when_missing() {
        let svc = service();
        assert_eq!(svc.delete_account(77).await.unwrap(), 77);
        assert!(matches!(
            svc.get_account(77).await,
            Err(CustomError::AccountNotFound(77))
        ));
    }

    #[test]
    fn transfer_is_echoed() {
        let svc = service();
        let transfer = TransferRequest { to_account: 7, amount: 50 };
        assert_eq!(svc.transfer(transfer.clone()), transfer);
    }
}
