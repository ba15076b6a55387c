//! Modal form collecting a name and description for a new record.

use leptos::prelude::*;

/// Create dialog shared by the product and component forms.
///
/// Clicking the backdrop or Cancel closes without submitting; Enter in the
/// name field submits.
#[component]
pub fn CreateDialog(
    title: &'static str,
    name_placeholder: &'static str,
    name: RwSignal<String>,
    description: RwSignal<String>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <input
                    class="dialog__input"
                    type="text"
                    placeholder=name_placeholder
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            on_submit.run(());
                        }
                    }
                />
                <textarea
                    class="dialog__input"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
