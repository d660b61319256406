use crate::account::{
    controller::{
        create_account, delete_account, get_account, list_accounts, method_not_allowed, transfer,
    },
    repo::DbConnection,
    service::AccountService,
};
use crate::auth::middleware::require_token;
use anyhow::{Context, Result};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot::Receiver;
use tracing::info;

pub struct Server<DB: DbConnection + 'static> {
    account_svc: Arc<AccountService<DB>>,
    addr: String,
}

impl<DB: DbConnection + 'static> Server<DB> {
    pub fn new(account_svc: Arc<AccountService<DB>>, addr: impl Into<String>) -> Self {
        Self {
            account_svc,
            addr: addr.into(),
        }
    }

    pub fn router(&self) -> Router {
        router(Arc::clone(&self.account_svc))
    }

    pub async fn start(&self, shutdown_rx: Receiver<()>) -> Result<()> {
        let listener = TcpListener::bind(&self.addr)
            .await
            .with_context(|| format!("failed to bind {}", self.addr))?;
        info!("Server running on http://{}", self.addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
                info!("Shutting down server...");
            })
            .await
            .context("server error")
    }
}

/// Only the GET on `/account/{id}` sits behind the token check.
pub fn router<DB: DbConnection + 'static>(account_svc: Arc<AccountService<DB>>) -> Router {
    let auth = from_fn_with_state(Arc::clone(&account_svc), require_token::<DB>);

    Router::new()
        .route(
            "/account",
            get(list_accounts::<DB>)
                .post(create_account::<DB>)
                .fallback(method_not_allowed),
        )
        .route(
            "/account/{id}",
            get(get_account::<DB>)
                .route_layer(auth)
                .delete(delete_account::<DB>)
                .fallback(method_not_allowed),
        )
        .route(
            "/transfer",
            post(transfer::<DB>).fallback(method_not_allowed),
        )
        .with_state(account_svc)
}
