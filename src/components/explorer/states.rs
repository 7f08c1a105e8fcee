//! Non-content layouts of the explorer body.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/explorer/states.module.css");

/// Shown until both credentials are configured.
#[component]
pub fn Welcome() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::state>
            <div class=css::stateIcon><Icon icon=ic::DRIVE /></div>
            <h3>"Connect a drive folder"</h3>
            <p>"Enter a folder ID and an API key to browse its files."</p>
            <button class=css::primaryButton on:click=move |_| ctx.show_configuration()>
                "Configure"
            </button>
        </div>
    }
}

#[component]
pub fn LoadingState() -> impl IntoView {
    view! {
        <div class=css::state role="status" aria-live="polite">
            <div class=css::spinner aria-hidden="true"></div>
            <p>"Loading files..."</p>
        </div>
    }
}

#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class=css::state>
            <div class=css::stateIcon><Icon icon=ic::SEARCH /></div>
            <h3>"No files found"</h3>
            <p>"This folder is empty or no file matches your search."</p>
        </div>
    }
}

/// Load failure panel. The listing is already cleared when this shows.
#[component]
pub fn ErrorState(message: String) -> impl IntoView {
    view! {
        <div class=format!("{} {}", css::state, css::error) role="alert">
            <div class=css::stateIcon><Icon icon=ic::WARNING /></div>
            <h3>"Error"</h3>
            <p>{message}</p>
            <button class=css::primaryButton on:click=move |_| dom::reload()>
                "Retry"
            </button>
        </div>
    }
}
