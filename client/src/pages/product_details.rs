//! Product details page: status toggle, component list, sensor charts.

use inventory::{Component, ComponentDraft};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::alert::AlertBanner;
use crate::components::component_card::ComponentCard;
use crate::components::create_dialog::CreateDialog;
use crate::components::graph::SensorGraph;
use crate::net::api::ApiClient;
use crate::pages::show_notice;
#[cfg(feature = "hydrate")]
use crate::pages::report;
use crate::state::notice::{Notice, NoticeSlot};
#[cfg(feature = "hydrate")]
use crate::state::notice::Operation;
use crate::state::product_detail::{DetailView, ProductDetailState};

/// Details for the product named by the `productId` route parameter.
///
/// Shows "Loading..." until the product fetch settles and "Product not
/// found" if it fails. Components are listed only while the product is
/// active.
#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let product_id = move || params.read().get("productId").unwrap_or_default();

    let detail = RwSignal::new(ProductDetailState::default());
    let notice = RwSignal::new(NoticeSlot::default());

    // Product + component fetches, reissued when the route parameter changes.
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        Effect::new(move || {
            let id = product_id();
            detail.set(ProductDetailState::default());

            let api_product = api.clone();
            let id_product = id.clone();
            leptos::task::spawn_local(async move {
                let outcome = api_product.get_product(&id_product).await;
                if params.try_with_untracked(|p| p.get("productId")).flatten() != Some(id_product) {
                    return;
                }
                if outcome.is_err() {
                    show_notice(notice, Notice::failed(Operation::LoadProduct));
                }
                detail.try_update(|s| s.product_loaded(outcome.ok()));
            });

            let api_components = api.clone();
            leptos::task::spawn_local(async move {
                let outcome = api_components.list_components(&id).await;
                if params.try_with_untracked(|p| p.get("productId")).flatten() != Some(id) {
                    return;
                }
                match outcome {
                    Ok(components) => {
                        detail.try_update(|s| s.components = components);
                    }
                    Err(_) => show_notice(notice, Notice::failed(Operation::LoadComponents)),
                }
            });
        });
    }

    // Create-component dialog state.
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
                show_notice(notice, Notice::name_required("component"));
                return;
            }
            let draft = ComponentDraft::new(name.trim(), new_description.get_untracked());
            let id = product_id();

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    let outcome = api.create_component(&id, draft).await;
                    report(notice, Operation::CreateComponent, &outcome);
                    if let Ok(component) = outcome {
                        detail.try_update(|s| s.add_component(component));
                        show_create.try_set(false);
                    }
                });
            }

            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, draft, id);
            }
        }
    });

    let on_delete = Callback::new({
        let api = api.clone();
        move |component_id: String| {
            let id = product_id();

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    let outcome = api.delete_component(&id, &component_id).await;
                    report(notice, Operation::DeleteComponent, &outcome);
                    if outcome.is_ok() {
                        detail.try_update(|s| s.remove_component(&component_id));
                    }
                });
            }

            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, id, component_id);
            }
        }
    });

    let on_toggle = Callback::new(move |()| {
        let id = product_id();

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.toggle_product(&id).await {
                    Ok(product) => {
                        show_notice(notice, Notice::toggled(product.is_active));
                        detail.try_update(|s| s.apply_product(product));
                    }
                    Err(_) => show_notice(notice, Notice::failed(Operation::ToggleProduct)),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, id);
        }
    });

    let on_view_graph = Callback::new(move |component: Component| {
        detail.update(|s| s.graph = Some(component));
    });
    let on_close_graph = move |_| detail.update(|s| s.graph = None);

    let body = move || match detail.with(ProductDetailState::view) {
        DetailView::Loading => view! { <div class="details-page__status">"Loading..."</div> }.into_any(),
        DetailView::NotFound => view! { <div class="details-page__status">"Product not found"</div> }.into_any(),
        DetailView::Ready => {
            let state = detail.get();
            let shows_components = state.shows_components();
            let Some(product) = state.product else {
                return view! { <div class="details-page__status">"Product not found"</div> }.into_any();
            };
            let is_active = product.is_active;
            let components = state
                .components
                .into_iter()
                .map(|component| {
                    view! {
                        <ComponentCard component=component on_delete=on_delete on_view_graph=on_view_graph/>
                    }
                })
                .collect::<Vec<_>>();

            view! {
                <header class="details-page__header">
                    <div>
                        <h1>{product.name}</h1>
                        <p>{product.description}</p>
                    </div>
                    <div class="details-page__controls">
                        <a class="btn" href="/">"⌂ Home"</a>
                        <button
                            class="toggle"
                            class:toggle--on=is_active
                            role="switch"
                            aria-checked={if is_active { "true" } else { "false" }}
                            on:click=move |_| on_toggle.run(())
                        >
                            <span class="toggle__knob"></span>
                            <span class="toggle__label">{if is_active { "Active" } else { "Inactive" }}</span>
                        </button>
                    </div>
                </header>

                {shows_components
                    .then(|| {
                        view! {
                            <div class="details-page__toolbar">
                                <h2>"Components"</h2>
                                <button class="btn btn--primary" on:click=on_open>
                                    "+ Add Component"
                                </button>
                            </div>
                            <div class="details-page__grid">{components}</div>
                        }
                    })}
            }
                .into_any()
        }
    };

    view! {
        <div class="details-page">
            {body}

            <Show when=move || show_create.get()>
                <CreateDialog
                    title="Create New Component"
                    name_placeholder="Component Name"
                    name=new_name
                    description=new_description
                    on_cancel=on_cancel
                    on_submit=on_submit
                />
            </Show>

            {move || {
                detail
                    .with(|s| s.graph.clone())
                    .map(|component| {
                        let title = format!("{} - Monitoring Data", component.name);
                        view! {
                            <div class="dialog-backdrop" on:click=on_close_graph>
                                <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                                    <div class="dialog__header">
                                        <h2>{title}</h2>
                                        <button class="dialog__close" on:click=on_close_graph aria-label="Close graph">
                                            "✕"
                                        </button>
                                    </div>
                                    <SensorGraph component=component/>
                                </div>
                            </div>
                        }
                    })
            }}

            {move || {
                notice
                    .with(|slot| slot.current().cloned())
                    .map(|n| view! { <AlertBanner notice=n on_close={Callback::new(move |()| notice.update(NoticeSlot::dismiss))}/> })
            }}
        </div>
    }
}
