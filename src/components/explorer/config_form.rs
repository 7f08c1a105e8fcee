//! Configuration modal.
//!
//! Collects the root folder ID and API key. Both are required; validation
//! and persistence happen in the controller and any rejection comes back
//! as the form's error line.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/config_form.module.css");

#[component]
pub fn ConfigForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let folder_ref = NodeRef::<leptos::html::Input>::new();
    let key_ref = NodeRef::<leptos::html::Input>::new();

    // Prefill once; later view changes must not overwrite what the user typed.
    let (initial_folder, initial_key) = ctx.view.with_untracked(|v| {
        v.config_form
            .as_ref()
            .map(|f| (f.folder_id.clone(), f.api_key.clone()))
            .unwrap_or_default()
    });
    let error = Memo::new(move |_| {
        ctx.view
            .with(|v| v.config_form.as_ref().and_then(|f| f.error.clone()))
    });

    Effect::new(move || {
        if let Some(input) = folder_ref.get() {
            let _ = input.focus();
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let folder_id = folder_ref.get().map(|i| i.value()).unwrap_or_default();
        let api_key = key_ref.get().map(|i| i.value()).unwrap_or_default();
        ctx.save_configuration(&folder_id, &api_key);
    };

    // Listen on the window so Escape works wherever focus is.
    let keydown = window_event_listener(ev::keydown, move |ev| {
        if is_dismiss_key(&ev.key()) {
            ctx.dismiss_configuration();
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div class=css::backdrop>
            <div class=css::modal role="dialog" aria-modal="true" aria-labelledby="config-title">
                <div class=css::modalHeader>
                    <h2 id="config-title">"Drive Configuration"</h2>
                    <button
                        class=css::closeButton
                        on:click=move |_| ctx.dismiss_configuration()
                        title="Close"
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>

                <form class=css::form on:submit=on_submit>
                    <label class=css::field>
                        <span>"Folder ID"</span>
                        <input
                            node_ref=folder_ref
                            type="text"
                            autocomplete="off"
                            placeholder="Enter Google Drive folder ID"
                            value=initial_folder
                        />
                    </label>
                    <label class=css::field>
                        <span>"API Key"</span>
                        <input
                            node_ref=key_ref
                            type="password"
                            autocomplete="off"
                            placeholder="Enter Google Drive API key"
                            value=initial_key
                        />
                    </label>

                    {move || error.get().map(|msg| view! {
                        <p class=css::formError role="alert">{msg}</p>
                    })}

                    <div class=css::formActions>
                        <button
                            type="button"
                            class=css::secondaryButton
                            on:click=move |_| ctx.dismiss_configuration()
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class=css::primaryButton>"Save"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
