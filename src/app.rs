//! Root application module.
//!
//! Contains the main App component and the [`AppContext`] that bridges the
//! explorer state machine to the browser: it owns the controller signal,
//! performs the fetches the controller asks for, and feeds results back.

use std::time::Duration;

use chrono::{DateTime, Utc};
use driveview_core::{
    Configuration, ExplorerController, ExplorerView, FetchRequest, ListingClient,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::Explorer;
use crate::config::CLOCK_TICK_MS;
use crate::utils::{BrowserStorage, BrowserTransport, dom, time};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from children
/// with `use_context::<AppContext>()`.
///
/// All fields are signals, so the context is `Copy`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Explorer state machine.
    pub explorer: RwSignal<ExplorerController<BrowserStorage>>,
    /// Clock used for relative dates, refreshed every [`CLOCK_TICK_MS`].
    pub now: RwSignal<DateTime<Utc>>,
    /// Render projection of `explorer` at `now`.
    pub view: Memo<ExplorerView>,
}

impl AppContext {
    /// Creates the context with configuration loaded from localStorage.
    ///
    /// Does not issue any request; call [`AppContext::start`] once mounted.
    pub fn new() -> Self {
        let explorer = RwSignal::new(ExplorerController::new(BrowserStorage));
        let now = RwSignal::new(time::now());
        let view = Memo::new(move |_| {
            let now = now.get();
            explorer.with(|c| c.view(now))
        });

        Self { explorer, now, view }
    }

    pub fn start(&self) {
        let request = self.explorer.try_update(|c| c.start()).flatten();
        self.dispatch(request);
    }

    pub fn open_folder(&self, id: &str, label: &str) {
        let request = self.explorer.try_update(|c| c.open_folder(id, label)).flatten();
        self.dispatch(request);
    }

    pub fn open_root(&self) {
        let request = self.explorer.try_update(|c| c.open_root()).flatten();
        self.dispatch(request);
    }

    pub fn refresh(&self) {
        let request = self.explorer.try_update(|c| c.refresh()).flatten();
        self.dispatch(request);
    }

    pub fn search(&self, query: &str) {
        self.explorer.update(|c| c.search(query));
    }

    pub fn toggle_view_mode(&self) {
        self.explorer.update(|c| c.toggle_view_mode());
    }

    pub fn show_configuration(&self) {
        self.explorer.update(|c| c.show_configuration());
    }

    pub fn dismiss_configuration(&self) {
        self.explorer.update(|c| c.dismiss_configuration());
    }

    /// Validate and persist credentials.
    ///
    /// A rejected configuration is reported through the form in
    /// [`ExplorerView::config_form`].
    pub fn save_configuration(&self, folder_id: &str, api_key: &str) {
        let cfg = Configuration::new(folder_id, api_key);
        let request = self
            .explorer
            .try_update(|c| c.save_configuration(&cfg).ok())
            .flatten();
        self.dispatch(request);
    }

    /// Run a listing request and hand its outcome back to the controller.
    ///
    /// The controller drops outcomes of requests it has since superseded.
    fn dispatch(&self, request: Option<FetchRequest>) {
        let Some(request) = request else {
            return;
        };
        let explorer = self.explorer;

        spawn_local(async move {
            let client = ListingClient::new(BrowserTransport::new());
            let response = client.execute(request).await;
            explorer.try_update(|c| {
                c.complete(response);
            });
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts the clock that keeps relative dates current
/// - Loads the configured root folder
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    let now = ctx.now;
    if let Err(err) = set_interval_with_handle(
        move || now.set(time::now()),
        Duration::from_millis(CLOCK_TICK_MS),
    ) {
        log::warn!("clock not started, relative dates will not refresh: {err:?}");
    }

    ctx.start();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f5f7fa;
                    color: #1f2933;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #c0392b; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #52606d; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #ffffff;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #7b8794;">
                                "Error details"
                            </summary>
                            <ul style="margin: 1rem 0 0 0; padding-left: 1.5rem; color: #c0392b;">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| dom::reload()
                            style="
                                background: #1a73e8;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <Explorer />
        </ErrorBoundary>
    }
}
