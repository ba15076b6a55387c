//! Card for one product on the home page.

use inventory::Product;
use leptos::prelude::*;

/// Product name/description with a delete action and a details link.
#[component]
pub fn ProductCard(product: Product, on_delete: Callback<String>) -> impl IntoView {
    let href = format!("/product/{}", product.id);
    let id = product.id.clone();
    let inactive = !product.is_active;

    view! {
        <div class="product-card" class:product-card--inactive=inactive>
            <div class="product-card__header">
                <div>
                    <h3 class="product-card__name">{product.name}</h3>
                    <p class="product-card__description">{product.description}</p>
                </div>
                <button
                    class="product-card__delete"
                    on:click=move |_| on_delete.run(id.clone())
                    title="Delete product"
                    aria-label="Delete product"
                >
                    "✕"
                </button>
            </div>
            <a class="btn btn--primary product-card__details" href=href>
                "Details →"
            </a>
        </div>
    }
}
