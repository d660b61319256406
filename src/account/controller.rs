use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{
        Path, State,
        rejection::{BytesRejection, PathRejection},
    },
    http::Method,
};

use super::model::{Account, CreateAccountRequest, DeleteResponse, TransferRequest};
use super::repo::DbConnection;
use super::service::AccountService;
use crate::{error::CustomError, utils::des_from_slice};

type Svc<DB> = State<Arc<AccountService<DB>>>;

fn parse_id(raw: &str) -> Result<i32, CustomError> {
    raw.trim()
        .parse()
        .map_err(|_| CustomError::InvalidAccountId(raw.to_string()))
}

pub async fn list_accounts<DB: DbConnection>(
    State(svc): Svc<DB>,
) -> Result<Json<Vec<Account>>, CustomError> {
    Ok(Json(svc.list_accounts().await?))
}

pub async fn create_account<DB: DbConnection>(
    State(svc): Svc<DB>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Account>, CustomError> {
    let body = body?;
    let request: CreateAccountRequest = des_from_slice(&body)?;
    Ok(Json(svc.create_account(request).await?))
}

pub async fn get_account<DB: DbConnection>(
    State(svc): Svc<DB>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Account>, CustomError> {
    let Path(id) = path?;
    let id = parse_id(&id)?;
    Ok(Json(svc.get_account(id).await?))
}

pub async fn delete_account<DB: DbConnection>(
    State(svc): Svc<DB>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<DeleteResponse>, CustomError> {
    let Path(id) = path?;
    let id = parse_id(&id)?;
    let deleted = svc.delete_account(id).await?;
    Ok(Json(DeleteResponse { deleted }))
}

pub async fn transfer<DB: DbConnection>(
    State(svc): Svc<DB>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TransferRequest>, CustomError> {
    let body = body?;
    let request: TransferRequest = des_from_slice(&body)?;
    Ok(Json(svc.transfer(request)))
}

pub async fn method_not_allowed(method: Method) -> CustomError {
    CustomError::MethodNotAllowed(method.to_string())
}
