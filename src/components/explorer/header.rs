//! Explorer header component.
//!
//! Contains the app title, current location, search box and action buttons.

use driveview_core::ViewMode;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Explorer header with location, search and actions.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let path_label = Memo::new(move |_| ctx.view.with(|v| v.plan.path_label.clone()));
    let at_root = Memo::new(move |_| ctx.view.with(|v| v.plan.at_root));

    let on_home = move |_: leptos::ev::MouseEvent| ctx.open_root();

    view! {
        <header class=css::header>
            <div class=css::title>
                <span class=css::titleIcon><Icon icon=ic::DRIVE /></span>
                <span class=css::titleLabel>{APP_NAME}</span>
            </div>

            <div class=css::location>
                <button
                    class=move || nav_button_class(at_root.get())
                    on:click=on_home
                    disabled=move || at_root.get()
                    title="Go to root folder"
                >
                    <Icon icon=ic::HOME />
                </button>
                <span class=css::pathLabel title=move || path_label.get()>
                    {move || path_label.get()}
                </span>
            </div>

            <SearchBox />
            <ActionButtons />
        </header>
    }
}

fn nav_button_class(disabled: bool) -> String {
    if disabled {
        format!("{} {}", css::navButton, css::navButtonDisabled)
    } else {
        css::navButton.to_string()
    }
}

/// Search input filtering the current folder by name.
#[component]
fn SearchBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let query = Memo::new(move |_| ctx.view.with(|v| v.plan.query.clone()));

    view! {
        <label class=css::search>
            <span class=css::searchIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
            <input
                class=css::searchInput
                type="search"
                placeholder="Search files..."
                aria-label="Search files"
                prop:value=move || query.get()
                on:input=move |ev| ctx.search(&event_target_value(&ev))
            />
        </label>
    }
}

/// Action buttons (view toggle, refresh, settings).
#[component]
fn ActionButtons() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let view_mode = Memo::new(move |_| ctx.view.with(|v| v.plan.view_mode));

    view! {
        <div class=css::actionButtons>
            <button
                class=css::actionButton
                on:click=move |_| ctx.toggle_view_mode()
                title=move || match view_mode.get() {
                    ViewMode::List => "Grid view",
                    ViewMode::Grid => "List view",
                }
            >
                {move || match view_mode.get() {
                    ViewMode::List => view! { <Icon icon=ic::GRID /> }.into_any(),
                    ViewMode::Grid => view! { <Icon icon=ic::LIST /> }.into_any(),
                }}
            </button>

            <button
                class=css::actionButton
                on:click=move |_| ctx.refresh()
                title="Refresh"
            >
                <Icon icon=ic::REFRESH />
            </button>

            <button
                class=css::actionButton
                on:click=move |_| ctx.show_configuration()
                title="Settings"
            >
                <Icon icon=ic::SETTINGS />
            </button>
        </div>
    }
}
