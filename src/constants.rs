pub const TOKEN_HEADER: &str = "x-jwt-token";
pub const INVALID_TOKEN: &str = "invalid-token";
// Fixed `expiresAt` claim carried by every minted token
pub const TOKEN_EXPIRES_AT: i64 = 15000;
pub const ACCOUNT_NUMBER_LIMIT: i64 = 1_000_000;
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_LOG_LEVEL: &str = "info";
