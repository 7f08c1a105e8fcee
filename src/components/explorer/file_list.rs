//! File list component for explorer view.
//!
//! Renders the visible entries as rows (list) or cards (grid). Folders open
//! in place; files open their drive link in a new tab.

use driveview_core::{EntryKind, ItemAction, ItemView, ViewMode};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::{UrlValidation, dom, validate_link_url};

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

#[component]
pub fn FileList(items: Vec<ItemView>, view_mode: ViewMode) -> impl IntoView {
    let list_class = match view_mode {
        ViewMode::List => css::list.to_string(),
        ViewMode::Grid => format!("{} {}", css::list, css::grid),
    };

    view! {
        <div class=list_class role="list" aria-label="Files">
            {items
                .into_iter()
                .map(|item| view! { <FileItem item=item /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn FileItem(item: ItemView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let item_class = match item.kind {
        EntryKind::Folder => format!("{} {}", css::item, css::folder),
        EntryKind::File => format!("{} {}", css::item, css::file),
    };

    let visual = match item.thumbnail {
        Some(src) => view! {
            <img class=css::thumbnail src=src alt="" loading="lazy" referrerpolicy="no-referrer" />
        }
        .into_any(),
        None => view! {
            <span class=css::icon aria-hidden="true"><Icon icon=ic::icon_for(item.icon) /></span>
        }
        .into_any(),
    };

    let action = match item.action {
        ItemAction::OpenFolder { id, label } => Some(view! {
            <button
                class=css::actionButton
                on:click=move |_| ctx.open_folder(&id, &label)
            >
                "Open"
            </button>
        }
        .into_any()),
        ItemAction::OpenLink { url } => Some(view! {
            <button class=css::actionButton on:click=move |_| open_link(&url)>
                <Icon icon=ic::EXTERNAL_LINK />
                "View"
            </button>
        }
        .into_any()),
        ItemAction::None => None,
    };

    let aria_label = format!("{}: {}", item.kind.label(), item.name);
    let title = item.name.clone();

    view! {
        <div class=item_class role="listitem" aria-label=aria_label>
            {visual}
            <div class=css::info>
                <div class=css::name title=title>{item.name}</div>
                <div class=css::details>{item.details}</div>
            </div>
            <div class=css::actions>{action}</div>
        </div>
    }
}

/// Open a drive link in a new tab after checking it against the allowlist.
fn open_link(url: &str) {
    match validate_link_url(url) {
        UrlValidation::Valid(safe_url) => {
            if !dom::open_in_new_tab(&safe_url) {
                log::warn!("browser refused to open {safe_url}");
            }
        }
        UrlValidation::Invalid(err) => {
            log::warn!("link blocked: {err}");
        }
    }
}
