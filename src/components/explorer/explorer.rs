//! Main explorer component.
//!
//! Header on top, the current layout in the body, item count at the bottom,
//! and the configuration modal above everything when open.

use driveview_core::Layout;
use leptos::prelude::*;

use super::states::{EmptyState, ErrorState, LoadingState, Welcome};
use super::{ConfigForm, FileList, Header};
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Drive explorer view component.
#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let body = Memo::new(move |_| {
        ctx.view
            .with(|v| (v.plan.layout.clone(), v.plan.view_mode))
    });
    let count_label = Memo::new(move |_| ctx.view.with(|v| v.plan.count_label.clone()));
    let form_open = Memo::new(move |_| ctx.view.with(|v| v.config_form.is_some()));

    view! {
        <div class=css::explorer>
            <Header />

            <main class=css::body>
                {move || {
                    let (layout, view_mode) = body.get();
                    match layout {
                        Layout::ConfigurationRequired => view! { <Welcome /> }.into_any(),
                        Layout::Loading => view! { <LoadingState /> }.into_any(),
                        Layout::Empty => view! { <EmptyState /> }.into_any(),
                        Layout::Error { message } => {
                            view! { <ErrorState message=message /> }.into_any()
                        }
                        Layout::Content { items } => {
                            view! { <FileList items=items view_mode=view_mode /> }.into_any()
                        }
                    }
                }}
            </main>

            <footer class=css::statusBar>
                <span class=css::fileCount>{move || count_label.get()}</span>
            </footer>

            <Show when=move || form_open.get()>
                <ConfigForm />
            </Show>
        </div>
    }
}
