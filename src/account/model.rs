use chrono::{DateTime, SubsecRound, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::ACCOUNT_NUMBER_LIMIT;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub number: i64,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Builds an unsaved account. `id` stays 0 until the store assigns one.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            number: rand::thread_rng().gen_range(0..ACCOUNT_NUMBER_LIMIT),
            balance: 0,
            // Postgres keeps microseconds
            created_at: Utc::now().trunc_subsecs(6),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub to_account: i32,
    pub amount: i64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DeleteResponse {
    pub deleted: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_starts_empty() {
        let account = Account::new("Ada", "Lovelace");

        assert_eq!(account.id, 0);
        assert_eq!(account.balance, 0);
        assert!((0..ACCOUNT_NUMBER_LIMIT).contains(&account.number));
        assert_eq!(account.first_name, "Ada");
        assert_eq!(account.last_name, "Lovelace");
    }

    #[test]
    fn created_at_has_microsecond_precision() {
        let account = Account::new("Ada", "Lovelace");
        assert_eq!(account.created_at.timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn names_are_not_validated() {
        let account = Account::new("", "  ");
        assert_eq!(account.first_name, "");
        assert_eq!(account.last_name, "  ");
    }

    #[test]
    fn serializes_camel_case() {
        let account = Account::new("Ada", "Lovelace");
        let json = serde_json::to_value(&account).unwrap();

        for key in ["id", "firstName", "lastName", "number", "balance", "createdAt"] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn json_round_trip_keeps_every_field() {
        let mut account = Account::new("Grace", "Hopper");
        account.id = 42;

        let encoded = serde_json::to_string(&account).unwrap();
        let decoded: Account = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, account);
    }

    #[test]
    fn transfer_request_uses_wire_names() {
        let transfer: TransferRequest =
            serde_json::from_str(r#"{"toAccount":7,"amount":50}"#).unwrap();
        assert_eq!(transfer, TransferRequest { to_account: 7, amount: 50 });
    }
}
