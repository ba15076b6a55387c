//! Home page listing products with create and delete actions.

use inventory::ProductDraft;
use leptos::prelude::*;

use crate::components::alert::AlertBanner;
use crate::components::create_dialog::CreateDialog;
use crate::components::product_card::ProductCard;
use crate::net::api::ApiClient;
use crate::pages::show_notice;
#[cfg(feature = "hydrate")]
use crate::pages::report;
use crate::state::notice::{Notice, NoticeSlot};
#[cfg(feature = "hydrate")]
use crate::state::notice::Operation;
use crate::state::products::ProductsState;

/// Home page: product grid, "Add Product" dialog, and notice banner.
#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let products = RwSignal::new(ProductsState::default());
    let notice = RwSignal::new(NoticeSlot::default());

    // Product list fetch on mount. The grid renders empty until it lands.
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.list_products().await {
                Ok(items) => {
                    products.try_update(|s| s.replace(items));
                }
                Err(_) => show_notice(notice, Notice::failed(Operation::LoadProducts)),
            }
        });
    }

    // Create-product dialog state.
    let show_create = RwSignal::new(false);
    let new_name = RwSignal::new(String::new());
    let new_description = RwSignal::new(String::new());

    let on_open = move |_| {
        new_name.set(String::new());
        new_description.set(String::new());
        show_create.set(true);
    };
    let on_cancel = Callback::new(move |()| show_create.set(false));

    let on_submit = Callback::new({
        let api = api.clone();
        move |()| {
            let name = new_name.get_untracked();
            if name.trim().is_empty() {
                show_notice(notice, Notice::name_required("product"));
                return;
            }
            let draft = ProductDraft::new(name.trim(), new_description.get_untracked());

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    let outcome = api.create_product(draft).await;
                    report(notice, Operation::CreateProduct, &outcome);
                    if let Ok(product) = outcome {
                        products.try_update(|s| s.upsert(product));
                        show_create.try_set(false);
                    }
                });
            }

            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, draft);
            }
        }
    });

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let outcome = api.delete_product(&id).await;
                report(notice, Operation::DeleteProduct, &outcome);
                if outcome.is_ok() {
                    products.try_update(|s| s.remove(&id));
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, id);
        }
    });

    view! {
        <div class="home-page">
            <header class="home-page__hero">
                <h1>"Welcome to Warehouse Temperature and Humidity Monitoring System"</h1>
                <p>"Monitor and manage your warehouse environment with ease"</p>
            </header>

            <div class="home-page__toolbar">
                <h2>"Your Products"</h2>
                <button class="btn btn--primary" on:click=on_open>
                    "+ Add Product"
                </button>
            </div>

            <div class="home-page__grid">
                {move || {
                    products
                        .get()
                        .items
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product on_delete=on_delete/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || show_create.get()>
                <CreateDialog
                    title="Create New Product"
                    name_placeholder="Product Name"
                    name=new_name
                    description=new_description
                    on_cancel=on_cancel
                    on_submit=on_submit
                />
            </Show>

            {move || {
                notice
                    .with(|slot| slot.current().cloned())
                    .map(|n| view! { <AlertBanner notice=n on_close={Callback::new(move |()| notice.update(NoticeSlot::dismiss))}/> })
            }}
        </div>
    }
}
