use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// A single inventory record as stored in the `items` table.
///
/// `quantity` carries no lower bound: negative values are stored and returned
/// as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub expiration_date: Option<String>,
    pub created_at: String,
}

/// Values for a row about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub quantity: i64,
    pub expiration_date: Option<String>,
    pub created_at: String,
}

impl NewItem {
    /// Build an insert payload stamped with the current server time.
    pub fn new(name: String, quantity: Option<i64>, expiration_date: Option<String>) -> Self {
        NewItem {
            name,
            quantity: quantity.unwrap_or(0),
            expiration_date,
            created_at: now_timestamp(),
        }
    }
}

/// Current UTC time as RFC 3339 with millisecond precision, e.g.
/// `2025-01-01T12:00:00.000Z`. Lexicographic order matches time order.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
