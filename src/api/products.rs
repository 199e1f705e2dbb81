//! Catalog Endpoints
//!
//! Product and category reads plus the stock overwrite mutation.

use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::Serialize;

use super::{bearer, check, rest_url, ApiError};
use crate::config;
use crate::models::{Category, Product};

/// Select active products joined with their category summary, ordered by
/// name ascending.
pub async fn fetch_products(access_token: Option<&str>) -> Result<Vec<Product>, ApiError> {
    let resp = Client::new()
        .get(rest_url("products"))
        .query(&[
            ("select", "*,categories(id,name,description)"),
            ("is_active", "eq.true"),
            ("order", "name.asc"),
        ])
        .header("apikey", config::BACKEND_ANON_KEY)
        .header(AUTHORIZATION, bearer(access_token))
        .send()
        .await?;
    Ok(check(resp).await?.json().await?)
}

/// Select all categories ordered by name ascending.
pub async fn fetch_categories(access_token: Option<&str>) -> Result<Vec<Category>, ApiError> {
    let resp = Client::new()
        .get(rest_url("categories"))
        .query(&[("select", "*"), ("order", "name.asc")])
        .header("apikey", config::BACKEND_ANON_KEY)
        .header(AUTHORIZATION, bearer(access_token))
        .send()
        .await?;
    Ok(check(resp).await?.json().await?)
}

/// Overwrite a product's stock. Last-writer-wins; there is no
/// compare-and-swap against concurrent edits.
pub async fn update_product_stock(
    product_id: &str,
    new_stock: i64,
    access_token: Option<&str>,
) -> Result<Product, ApiError> {
    #[derive(Serialize)]
    struct StockPatch<'a> {
        stock: i64,
        updated_at: &'a str,
    }

    let updated_at = String::from(js_sys::Date::new_0().to_iso_string());
    let id_filter = format!("eq.{product_id}");
    let resp = Client::new()
        .patch(rest_url("products"))
        .query(&[
            ("id", id_filter.as_str()),
            ("select", "*,categories(id,name,description)"),
        ])
        .header("apikey", config::BACKEND_ANON_KEY)
        .header(AUTHORIZATION, bearer(access_token))
        .header("Prefer", "return=representation")
        .json(&StockPatch { stock: new_stock, updated_at: &updated_at })
        .send()
        .await?;
    let rows: Vec<Product> = check(resp).await?.json().await?;
    rows.into_iter()
        .next()
        .ok_or(ApiError::Status { code: 404, message: "product not found".into() })
}
