//! Backend Configuration
//!
//! Endpoint settings for the hosted auth/data service plus the default
//! store profile shown on receipts.

use crate::models::StoreProfile;

/// Base URL of the hosted backend project.
pub const BACKEND_URL: &str = match option_env!("POS_BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:54321",
};

/// Publishable (anon) API key sent with every request.
pub const BACKEND_ANON_KEY: &str = match option_env!("POS_BACKEND_ANON_KEY") {
    Some(key) => key,
    None => "local-anon-key",
};

/// localStorage key under which the session tokens are persisted.
pub const SESSION_STORAGE_KEY: &str = "kasir-pos.session";

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 3500;

/// Store profile used until the owner edits it. Never written back to the
/// backend.
pub fn default_store_profile() -> StoreProfile {
    StoreProfile {
        name: "Toko Kelontong Barokah".to_string(),
        address: "Jl. Mawar No. 123, Jakarta".to_string(),
        phone: "021-12345678".to_string(),
        email: "tokobarokah@email.com".to_string(),
    }
}
