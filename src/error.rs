use std::{error::Error, fmt::Debug};

use axum::{
    Json,
    extract::rejection::{BytesRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::constants::INVALID_TOKEN;

#[derive(thiserror::Error)]
pub enum CustomError {
    #[error("ENV '{0}' Not Found")]
    EnvError(String, #[source] std::env::VarError),

    #[error("failed to sign token")]
    EncodeError(#[source] jsonwebtoken::errors::Error),

    #[error("invalid-token: {0}")]
    InvalidToken(String),

    #[error("database error: {0}")]
    DBError(#[source] sqlx::Error),

    #[error("account with ID {0} not found")]
    AccountNotFound(i32),

    #[error("{0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error("invalid account id '{0}'")]
    InvalidAccountId(String),

    #[error("method not allowed {0}")]
    MethodNotAllowed(String),

    #[error("{0}")]
    Rejected(String),
}

impl Debug for CustomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        if let Some(source) = self.source() {
            write!(f, " (Caused by: {})", source)?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
pub struct ApiError {
    pub error: String,
}

impl CustomError {
    pub fn status(&self) -> StatusCode {
        match self {
            CustomError::InvalidToken(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

// Extractor rejections are plain text by default
impl From<PathRejection> for CustomError {
    fn from(rejection: PathRejection) -> Self {
        CustomError::Rejected(rejection.body_text())
    }
}

impl From<BytesRejection> for CustomError {
    fn from(rejection: BytesRejection) -> Self {
        CustomError::Rejected(rejection.body_text())
    }
}

impl IntoResponse for CustomError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Token failures never say why
        let error = match &self {
            CustomError::InvalidToken(_) => INVALID_TOKEN.to_string(),
            other => other.to_string(),
        };
        (status, Json(ApiError { error })).into_response()
    }
}
