//! User Endpoints
//!
//! Profile row lookup for the signed-in account.

use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::Deserialize;

use super::{bearer, check, rest_url, ApiError};
use crate::config;
use crate::models::{Role, User};

/// `users` table row as stored in the backend.
#[derive(Debug, Clone, Deserialize)]
struct UserRow {
    id_user: String,
    name_user: String,
    email: String,
    phone: Option<String>,
    address: Option<String>,
    role: Role,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id_user,
            name: row.name_user,
            email: row.email,
            phone: row.phone.unwrap_or_default(),
            address: row.address.unwrap_or_default(),
            role: row.role,
        }
    }
}

/// Fetch the profile row for an authenticated user id.
pub async fn fetch_profile(user_id: &str, access_token: &str) -> Result<User, ApiError> {
    let id_filter = format!("eq.{user_id}");
    let resp = Client::new()
        .get(rest_url("users"))
        .query(&[("id_user", id_filter.as_str()), ("select", "*")])
        .header("apikey", config::BACKEND_ANON_KEY)
        .header(AUTHORIZATION, bearer(Some(access_token)))
        .send()
        .await?;
    let rows: Vec<UserRow> = check(resp).await?.json().await?;
    rows.into_iter()
        .next()
        .map(User::from)
        .ok_or(ApiError::Status { code: 404, message: "user profile not found".into() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_row_maps_to_user() {
        let json = r#"{
            "id_user": "u-1",
            "name_user": "Budi",
            "email": "kasir@toko.com",
            "phone": null,
            "address": "Jakarta",
            "role": "kasir"
        }"#;
        let row: UserRow = serde_json::from_str(json).unwrap();
        let user = User::from(row);
        assert_eq!(user.id, "u-1");
        assert_eq!(user.name, "Budi");
        assert_eq!(user.phone, "");
        assert_eq!(user.address, "Jakarta");
        assert_eq!(user.role, Role::Kasir);
    }
}
