use std::env::{self, VarError};

use dotenvy::dotenv;

use crate::{
    constants::{DEFAULT_LISTEN_ADDR, DEFAULT_LOG_LEVEL},
    error::CustomError,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, CustomError> {
        dotenv().ok(); // Load environment variables
        Self::from_lookup(|key| env::var(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, CustomError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let required =
            |key: &str| lookup(key).map_err(|e| CustomError::EnvError(key.to_string(), e));
        let optional = |key: &str, default: &str| lookup(key).unwrap_or_else(|_| default.into());

        Ok(Config {
            jwt_secret: required("JWT_SECRET")?,
            database_url: required("DATABASE_URL")?,
            listen_addr: optional("LISTEN_ADDR", DEFAULT_LISTEN_ADDR),
            log_level: optional("LOG_LEVEL", DEFAULT_LOG_LEVEL),
        })
    }
}
