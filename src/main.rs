use std::sync::Arc;

use anyhow::{Context, Result};
use stockbit_account::{
    account::{repo::AccountRepository, service::AccountService},
    auth::jwt::JwtKeys,
    config::Config,
    db::Database,
    logging::init_logging,
    server::Server,
};
use tokio::sync::oneshot;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;
    init_logging(&config.log_level);

    let pool = Database::new_pool(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let account_svc = AccountService::new(
        AccountRepository::new(pool),
        JwtKeys::from_secret(&config.jwt_secret),
    );
    account_svc
        .init()
        .await
        .context("failed to initialize account table")?;
    info!("account table ready");

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                let _ = shutdown_tx.send(());
            }
            Err(e) => {
                warn!(error = %e, "unable to listen for shutdown signal");
                // Keep the sender alive so the server runs until killed
                std::future::pending::<()>().await;
            }
        }
    });

    let server = Server::new(Arc::new(account_svc), config.listen_addr);
    server.start(shutdown_rx).await
}
