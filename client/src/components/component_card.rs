//! Card for one component on the product details page.

use inventory::Component;
use leptos::prelude::*;

/// Component name/description with edit, delete, and view-graph actions.
///
/// Editing is not supported by the data contract, so the edit button is
/// rendered disabled unless a handler is supplied.
#[component]
pub fn ComponentCard(
    component: Component,
    on_delete: Callback<String>,
    on_view_graph: Callback<Component>,
    #[prop(optional)] on_edit: Option<Callback<Component>>,
) -> impl IntoView {
    let id = component.id.clone();
    let for_graph = component.clone();
    let for_edit = component.clone();
    let can_edit = on_edit.is_some();

    view! {
        <div class="component-card">
            <div class="component-card__text">
                <h3 class="component-card__name">{component.name}</h3>
                <p class="component-card__description">{component.description}</p>
            </div>
            <div class="component-card__actions">
                <button
                    class="icon-btn icon-btn--edit"
                    disabled={!can_edit}
                    on:click=move |_| {
                        if let Some(on_edit) = on_edit.as_ref() {
                            on_edit.run(for_edit.clone());
                        }
                    }
                    title="Edit component"
                    aria-label="Edit component"
                >
                    "✎"
                </button>
                <button
                    class="icon-btn icon-btn--delete"
                    on:click=move |_| on_delete.run(id.clone())
                    title="Delete component"
                    aria-label="Delete component"
                >
                    "✕"
                </button>
                <button
                    class="icon-btn icon-btn--graph"
                    on:click=move |_| on_view_graph.run(for_graph.clone())
                    title="View graphs"
                    aria-label="View graphs"
                >
                    "📈"
                </button>
            </div>
        </div>
    }
}
