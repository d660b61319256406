use serde::Deserialize;

use crate::error::CustomError;

pub fn des_from_slice<T: for<'a> Deserialize<'a>>(bytes: &[u8]) -> Result<T, CustomError> {
    serde_json::from_slice(bytes).map_err(CustomError::InvalidBody)
}

pub fn extract_token(headers: &axum::http::HeaderMap) -> Option<&str> {
    headers
        .get(crate::constants::TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
