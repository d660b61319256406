use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::account::model::Account;
use crate::auth::model::Claims;
use crate::constants::TOKEN_EXPIRES_AT;
use crate::error::CustomError;

/// HMAC keys derived from the shared `JWT_SECRET`.
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtKeys {
    pub fn from_secret(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // `exp` is still checked whenever a token carries one
        validation.required_spec_claims.clear();
        validation.validate_aud = false;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn create_jwt(&self, account: &Account) -> Result<String, CustomError> {
        let claims = Claims {
            expires_at: TOKEN_EXPIRES_AT,
            account_number: account.number,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(CustomError::EncodeError)
    }

    pub fn verify_jwt(&self, token: &str) -> Result<Claims, CustomError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| CustomError::InvalidToken(e.to_string()))
    }
}
