//! Frontend Models
//!
//! Data structures matching backend rows, plus the patch types used by the
//! shallow-merge update operations.

use serde::{Deserialize, Serialize};

use crate::money::{self, Money};

/// Account role. Gates UI affordances only; the backend does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Kasir,
    Pemilik,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Kasir => "Kasir",
            Role::Pemilik => "Pemilik",
        }
    }

    /// Owners may edit stock and the store profile.
    pub fn is_owner(self) -> bool {
        self == Role::Pemilik
    }
}

/// Authenticated user's profile row. Fetched, never created, by this app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub role: Role,
}

/// Optional fields for `SessionContext::update_user`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub role: Option<Role>,
}

/// Backend-issued session tokens. Held by the session store, persisted to
/// localStorage for resumption, destroyed on logout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix seconds.
    pub expires_at: i64,
    pub user_id: String,
}

impl Session {
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expires_at <= now_secs
    }
}

/// Static display configuration printed on receipts. In-memory only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Optional fields for `SessionContext::update_store`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorePatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Product row joined with its category summary. Read-only except `stock`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Minor units (whole rupiah). The backend column is numeric; floats are
    /// rounded on the way in.
    #[serde(deserialize_with = "money::de_minor_units")]
    pub price: Money,
    pub stock: i64,
    pub category_id: Option<String>,
    pub image_url: Option<String>,
    pub barcode: Option<String>,
    pub is_active: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    /// Joined category row, named after the backend table in the wire format.
    #[serde(rename = "categories", default)]
    pub category: Option<CategorySummary>,
}

/// Projection of a category embedded in a product row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// One staged purchase line. View state only, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Qris,
    Debit,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] =
        [PaymentMethod::Cash, PaymentMethod::Qris, PaymentMethod::Debit];

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Tunai",
            PaymentMethod::Qris => "QRIS",
            PaymentMethod::Debit => "Debit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_row_deserializes_with_joined_category() {
        let json = r#"[
            {
                "id": "p-1",
                "name": "Susu Kotak",
                "description": null,
                "price": 5000,
                "stock": 12,
                "category_id": "c-1",
                "image_url": null,
                "barcode": "8991002100017",
                "is_active": true,
                "created_at": "2024-01-10T08:00:00Z",
                "updated_at": "2024-01-10T08:00:00Z",
                "categories": { "id": "c-1", "name": "Minuman", "description": null }
            },
            {
                "id": "p-2",
                "name": "Beras 5kg",
                "description": "Premium",
                "price": 72500.0,
                "stock": 3,
                "category_id": null,
                "image_url": null,
                "barcode": null,
                "is_active": false,
                "created_at": null,
                "updated_at": null
            }
        ]"#;

        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].price, 5000);
        assert_eq!(products[0].category.as_ref().unwrap().name, "Minuman");
        // Numeric column may come back as a float; rounded to minor units.
        assert_eq!(products[1].price, 72500);
        assert!(products[1].category.is_none());
        assert!(!products[1].is_active);
    }

    #[test]
    fn test_role_maps_to_backend_strings() {
        assert_eq!(serde_json::from_str::<Role>(r#""kasir""#).unwrap(), Role::Kasir);
        assert_eq!(serde_json::from_str::<Role>(r#""pemilik""#).unwrap(), Role::Pemilik);
        assert!(Role::Pemilik.is_owner());
        assert!(!Role::Kasir.is_owner());
    }

    #[test]
    fn test_session_expiry() {
        let session = Session {
            access_token: "at".into(),
            refresh_token: "rt".into(),
            expires_at: 1_000,
            user_id: "u-1".into(),
        };
        assert!(!session.is_expired(999));
        assert!(session.is_expired(1_000));
        assert!(session.is_expired(1_001));
    }
}
