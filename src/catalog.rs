//! Catalog Accessor
//!
//! Cached read access to products and categories plus the stock overwrite
//! mutation. A reload trigger drives refetching: invalidating the product
//! cache and bumping the trigger makes the load effect refetch.

use leptos::logging::{error, log};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::api;
use crate::models::{Category, Product};
use crate::notify::NotifyContext;

/// Client-side cache for one list. `Stale` keeps the previous data for
/// display while a refetch is pending.
#[derive(Clone, Debug, PartialEq)]
pub enum Cache<T> {
    Missing,
    Fresh(Vec<T>),
    Stale(Vec<T>),
}

impl<T> Default for Cache<T> {
    fn default() -> Self {
        Cache::Missing
    }
}

impl<T> Cache<T> {
    pub fn fill(&mut self, items: Vec<T>) {
        *self = Cache::Fresh(items);
    }

    pub fn invalidate(&mut self) {
        *self = match std::mem::take(self) {
            Cache::Fresh(items) | Cache::Stale(items) => Cache::Stale(items),
            Cache::Missing => Cache::Missing,
        };
    }

    pub fn needs_fetch(&self) -> bool {
        !matches!(self, Cache::Fresh(_))
    }

    pub fn items(&self) -> &[T] {
        match self {
            Cache::Missing => &[],
            Cache::Fresh(items) | Cache::Stale(items) => items,
        }
    }
}

#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    pub products: Cache<Product>,
    pub categories: Cache<Category>,
}

/// Catalog handle provided via context
#[derive(Clone, Copy)]
pub struct CatalogContext {
    pub state: Store<CatalogState>,
    /// Bumped to make the load effect refetch - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped to make the load effect refetch - write
    set_reload_trigger: WriteSignal<u32>,
    notify: NotifyContext,
}

impl CatalogContext {
    pub fn new(notify: NotifyContext) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            state: Store::new(CatalogState::default()),
            reload_trigger,
            set_reload_trigger,
            notify,
        }
    }

    /// Trigger a reload of catalog data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Fetch whatever the cache cannot serve. Errors surface as toasts and
    /// leave cached state unchanged; no retry.
    pub async fn load(&self, access_token: Option<String>) {
        let token = access_token.as_deref();

        if self.state.products().read_untracked().needs_fetch() {
            match api::fetch_products(token).await {
                Ok(rows) => {
                    let products = normalize_products(rows);
                    log!("[catalog] loaded {} products", products.len());
                    self.state.products().write().fill(products);
                }
                Err(e) => {
                    error!("[catalog] failed to load products: {e}");
                    self.notify.error("Gagal memuat produk");
                }
            }
        }

        if self.state.categories().read_untracked().needs_fetch() {
            match api::fetch_categories(token).await {
                Ok(mut categories) => {
                    categories.sort_by(|a, b| a.name.cmp(&b.name));
                    self.state.categories().write().fill(categories);
                }
                Err(e) => {
                    error!("[catalog] failed to load categories: {e}");
                    self.notify.error("Gagal memuat kategori");
                }
            }
        }
    }

    /// Overwrite a product's stock, then invalidate the cached list so the
    /// next read is fresh. Returns whether the write went through.
    pub async fn set_product_stock(
        &self,
        product_id: &str,
        new_stock: i64,
        access_token: Option<&str>,
    ) -> bool {
        match api::update_product_stock(product_id, new_stock, access_token).await {
            Ok(updated) => {
                log!("[catalog] stock for {} set to {}", updated.name, updated.stock);
                self.state.products().write().invalidate();
                self.reload();
                self.notify.success("Stok produk berhasil diperbarui");
                true
            }
            Err(e) => {
                error!("[catalog] stock update failed: {e}");
                self.notify.error("Gagal memperbarui stok produk");
                false
            }
        }
    }
}

/// Get the catalog context; panics when no provider is in scope.
pub fn use_catalog() -> CatalogContext {
    expect_context::<CatalogContext>()
}

/// Reapply the backend's contract client-side: active products only,
/// ascending by name.
pub fn normalize_products(mut products: Vec<Product>) -> Vec<Product> {
    products.retain(|p| p.is_active);
    products.sort_by(|a, b| a.name.cmp(&b.name));
    products
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, stock: i64, is_active: bool) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            price: 1000,
            stock,
            category_id: None,
            image_url: None,
            barcode: None,
            is_active,
            created_at: None,
            updated_at: None,
            category: None,
        }
    }

    #[test]
    fn test_normalize_drops_inactive_and_sorts_by_name() {
        let products = normalize_products(vec![
            product("1", "Teh Botol", 5, true),
            product("2", "Beras 5kg", 3, true),
            product("3", "Rokok", 0, false),
            product("4", "Gula Pasir", 7, true),
        ]);
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Beras 5kg", "Gula Pasir", "Teh Botol"]);
    }

    #[test]
    fn test_cache_lifecycle() {
        let mut cache = Cache::default();
        assert!(cache.needs_fetch());
        assert!(cache.items().is_empty());

        cache.fill(vec![product("1", "Teh Botol", 5, true)]);
        assert!(!cache.needs_fetch());
        assert_eq!(cache.items().len(), 1);

        // Stale keeps the old data for display but demands a refetch.
        cache.invalidate();
        assert!(cache.needs_fetch());
        assert_eq!(cache.items().len(), 1);

        // Invalidating an empty cache stays Missing.
        let mut empty: Cache<Product> = Cache::default();
        empty.invalidate();
        assert_eq!(empty, Cache::Missing);
    }

    #[test]
    fn test_stock_write_then_refetch_reflects_new_stock() {
        let mut cache = Cache::default();
        cache.fill(vec![product("1", "Teh Botol", 5, true)]);

        // A successful stock write invalidates; the next load refetches and
        // fills with the backend's current rows.
        cache.invalidate();
        assert!(cache.needs_fetch());
        cache.fill(vec![product("1", "Teh Botol", 9, true)]);
        assert_eq!(cache.items()[0].stock, 9);
        assert!(!cache.needs_fetch());
    }
}
