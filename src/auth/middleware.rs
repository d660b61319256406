use std::sync::Arc;

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use tracing::{info, warn};

use crate::{
    account::{repo::DbConnection, service::AccountService},
    error::CustomError,
    utils::extract_token,
};

/// Rejects requests without a validly signed `x-jwt-token`.
///
/// Claims are logged and attached to the request extensions, but they are
/// not matched against the account being requested.
pub async fn require_token<DB: DbConnection + 'static>(
    State(svc): State<Arc<AccountService<DB>>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, CustomError> {
    let token = extract_token(request.headers()).ok_or_else(|| {
        warn!(path = %request.uri().path(), "missing token header");
        CustomError::InvalidToken("missing header".to_string())
    })?;

    let claims = svc.verify_token(token).inspect_err(|e| {
        warn!(path = %request.uri().path(), error = %e, "token rejected");
    })?;
    info!(
        account_number = claims.account_number,
        expires_at = claims.expires_at,
        "token accepted"
    );

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
