use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,                    // surrogate key, generated by the store
    pub username: String,           // normalized email, the login identifier
    #[serde(skip_serializing)]
    pub password_hash: String,      // argon2 digest, not exposed in JSON
    pub created_at: OffsetDateTime, // creation timestamp
}
