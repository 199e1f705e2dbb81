//! Product Grid Component
//!
//! Catalog browse with category chips and name/barcode search. Clicking a
//! card stages one unit in the cart; owners get an inline stock editor.

use leptos::prelude::*;

use crate::cart::{cart_add_product, use_cart};
use crate::catalog::{use_catalog, CatalogStateStoreFields};
use crate::components::StockEditor;
use crate::models::Product;
use crate::money::format_rupiah;
use crate::session::{use_session, SessionStateStoreFields};

#[component]
pub fn ProductGrid() -> impl IntoView {
    let catalog = use_catalog();
    let session = use_session();
    let cart = use_cart();

    let (search, set_search) = signal(String::new());
    let (selected_category, set_selected_category) = signal::<Option<String>>(None);

    let is_owner = Memo::new(move |_| {
        session.state.user().get().is_some_and(|u| u.role.is_owner())
    });

    let filtered = Memo::new(move |_| {
        let query = search.get().to_lowercase();
        let category = selected_category.get();
        let cache = catalog.state.products().get();
        cache
            .items()
            .iter()
            .filter(|p| category.as_ref().is_none_or(|c| p.category_id.as_ref() == Some(c)))
            .filter(|p| {
                query.is_empty()
                    || p.name.to_lowercase().contains(&query)
                    || p.barcode.as_deref().is_some_and(|b| b.contains(&query))
            })
            .cloned()
            .collect::<Vec<Product>>()
    });

    view! {
        <section class="catalog-panel">
            <div class="catalog-toolbar">
                <input
                    type="text"
                    class="product-search"
                    placeholder="Cari nama atau barcode..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <div class="category-chips">
                <button
                    class=move || {
                        if selected_category.get().is_none() { "category-chip active" } else { "category-chip" }
                    }
                    on:click=move |_| set_selected_category.set(None)
                >
                    "Semua"
                </button>
                <For
                    each=move || catalog.state.categories().get().items().to_vec()
                    key=|category| category.id.clone()
                    children=move |category| {
                        let id = category.id.clone();
                        let id_for_click = category.id.clone();
                        let is_active = move || selected_category.get().as_deref() == Some(id.as_str());
                        view! {
                            <button
                                class=move || if is_active() { "category-chip active" } else { "category-chip" }
                                on:click=move |_| set_selected_category.set(Some(id_for_click.clone()))
                            >
                                {category.name.clone()}
                            </button>
                        }
                    }
                />
            </div>

            <div class="product-grid">
                <For
                    each=move || filtered.get()
                    key=|product| (product.id.clone(), product.stock)
                    children=move |product| {
                        let out_of_stock = product.stock <= 0;
                        let name = product.name.clone();
                        let price_label = format_rupiah(product.price);
                        let stock_label = format!("Stok: {}", product.stock);
                        let category_name = product.category.as_ref().map(|c| c.name.clone());
                        let add_product = product.clone();
                        let editor_product = product;
                        view! {
                            <div class=move || {
                                if out_of_stock { "product-card empty" } else { "product-card" }
                            }>
                                <button
                                    class="product-add"
                                    disabled=out_of_stock
                                    on:click=move |_| cart_add_product(&cart, &add_product)
                                >
                                    <span class="product-name">{name}</span>
                                    {category_name.map(|n| view! { <span class="product-category">{n}</span> })}
                                    <span class="product-price">{price_label}</span>
                                    <span class="product-stock">{stock_label}</span>
                                </button>
                                <Show when=move || is_owner.get()>
                                    <StockEditor product=editor_product.clone() />
                                </Show>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
