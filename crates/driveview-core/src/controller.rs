//! Explorer state machine.
//!
//! The controller owns configuration, navigation and listing state. Actions
//! that need the network return a [`FetchRequest`] instead of performing I/O;
//! the caller runs it (see [`ListingClient::execute`]) and feeds the
//! [`FetchResponse`] back through [`ExplorerController::complete`].
//!
//! Every request carries a generation number. Only the response for the most
//! recently issued request is applied, so a slow response for a folder the
//! user already left can never overwrite the current listing.
//!
//! [`ListingClient::execute`]: crate::ListingClient::execute

use chrono::{DateTime, Utc};

use crate::client::{FetchRequest, FetchResponse};
use crate::config::{ConfigStore, Configuration, KeyValueStore};
use crate::error::ConfigError;
use crate::listing::{ListingState, ListingStatus};
use crate::navigation::NavigationState;
use crate::render::{self, Layout, RenderPlan, ViewMode};

/// Coarse explorer phase, derived from configuration and listing status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Unconfigured,
    Idle,
    Loading,
    Ready,
    Failed,
}

/// State of the configuration form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigForm {
    /// Prefill values (the current configuration).
    pub folder_id: String,
    pub api_key: String,
    /// Last rejected save, if any.
    pub error: Option<String>,
}

/// Render plan plus the configuration form when it is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorerView {
    pub plan: RenderPlan,
    pub config_form: Option<ConfigForm>,
}

/// Orchestrates configuration, navigation, fetching and search.
#[derive(Debug)]
pub struct ExplorerController<S> {
    store: ConfigStore<S>,
    config: Configuration,
    navigation: NavigationState,
    listing: ListingState,
    view_mode: ViewMode,
    generation: u64,
    config_form_open: bool,
    config_error: Option<ConfigError>,
}

impl<S: KeyValueStore> ExplorerController<S> {
    /// Create a controller from persisted configuration. No fetch is issued
    /// until [`start`](Self::start).
    pub fn new(store: S) -> Self {
        let store = ConfigStore::new(store);
        let config = store.load();
        let navigation = NavigationState::root(config.folder_id.trim());

        Self {
            store,
            config,
            navigation,
            listing: ListingState::new(),
            view_mode: ViewMode::default(),
            generation: 0,
            config_form_open: false,
            config_error: None,
        }
    }

    /// Initial load: the root folder when configured, otherwise the
    /// configuration form.
    pub fn start(&mut self) -> Option<FetchRequest> {
        if !self.config.is_complete() {
            self.config_form_open = true;
            return None;
        }
        self.begin_load()
    }

    /// Navigate into a folder and load it.
    pub fn open_folder(&mut self, id: &str, label: &str) -> Option<FetchRequest> {
        if !self.require_configuration() {
            return None;
        }
        self.navigation.open(id, label);
        self.begin_load()
    }

    /// Navigate back to the root folder and load it.
    pub fn open_root(&mut self) -> Option<FetchRequest> {
        if !self.require_configuration() {
            return None;
        }
        self.navigation.reset(None);
        self.begin_load()
    }

    /// Reload the current folder.
    pub fn refresh(&mut self) -> Option<FetchRequest> {
        if !self.require_configuration() {
            return None;
        }
        self.begin_load()
    }

    /// Filter the loaded entries. Never fetches.
    pub fn search(&mut self, query: &str) {
        self.listing.set_query(query);
    }

    /// Validate and persist a new configuration, then load its root.
    ///
    /// On failure nothing changes except the error shown in the form.
    pub fn save_configuration(&mut self, cfg: &Configuration) -> Result<FetchRequest, ConfigError> {
        let saved = match self.store.save(cfg) {
            Ok(saved) => saved,
            Err(err) => {
                log::debug!("configuration rejected: {err}");
                self.config_error = Some(err.clone());
                return Err(err);
            }
        };

        self.navigation.reset(Some(&saved.folder_id));
        self.config = saved;
        self.config_form_open = false;
        self.config_error = None;

        Ok(self.issue_request())
    }

    pub fn show_configuration(&mut self) {
        self.config_form_open = true;
    }

    pub fn dismiss_configuration(&mut self) {
        self.config_form_open = false;
        self.config_error = None;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    /// Apply a finished fetch. Returns `false` when the response belongs to a
    /// superseded request and was dropped.
    pub fn complete(&mut self, response: FetchResponse) -> bool {
        if response.generation != self.generation {
            log::debug!(
                "discarding stale listing for {} (generation {}, current {})",
                response.folder_id,
                response.generation,
                self.generation
            );
            return false;
        }

        match response.result {
            Ok(entries) => {
                log::info!(
                    "loaded {} entries for folder {}",
                    entries.len(),
                    response.folder_id
                );
                self.listing.load(entries);
            }
            Err(err) => {
                log::warn!("failed to load folder {}: {err}", response.folder_id);
                self.listing.fail(err.user_message());
            }
        }
        true
    }

    pub fn phase(&self) -> Phase {
        if !self.config.is_complete() {
            return Phase::Unconfigured;
        }
        match self.listing.status() {
            ListingStatus::Idle => Phase::Idle,
            ListingStatus::Loading => Phase::Loading,
            ListingStatus::Loaded | ListingStatus::Empty => Phase::Ready,
            ListingStatus::Error(_) => Phase::Failed,
        }
    }

    /// Render plan for the current state. `now` anchors relative dates.
    pub fn view(&self, now: DateTime<Utc>) -> ExplorerView {
        let mut plan = render::render(&self.listing, &self.navigation, self.view_mode, now);
        if !self.config.is_complete() {
            plan.layout = Layout::ConfigurationRequired;
        }

        let config_form = self.config_form_open.then(|| ConfigForm {
            folder_id: self.config.folder_id.clone(),
            api_key: self.config.api_key.clone(),
            error: self.config_error.as_ref().map(ToString::to_string),
        });

        ExplorerView { plan, config_form }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn listing(&self) -> &ListingState {
        &self.listing
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_config_form_open(&self) -> bool {
        self.config_form_open
    }

    pub fn config_error(&self) -> Option<&ConfigError> {
        self.config_error.as_ref()
    }

    pub fn store(&self) -> &S {
        self.store.store()
    }

    /// Open the form when unconfigured. Returns whether loading may proceed.
    fn require_configuration(&mut self) -> bool {
        if self.config.is_complete() {
            return true;
        }
        self.config_form_open = true;
        false
    }

    fn begin_load(&mut self) -> Option<FetchRequest> {
        Some(self.issue_request())
    }

    /// Supersede any outstanding request and enter `Loading`.
    fn issue_request(&mut self) -> FetchRequest {
        self.generation += 1;
        self.listing.begin_loading();

        let request = FetchRequest {
            generation: self.generation,
            folder_id: self.navigation.current_folder_id().to_string(),
            api_key: self.config.api_key.trim().to_string(),
        };
        log::debug!(
            "requesting folder {} (generation {})",
            request.folder_id,
            request.generation
        );
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{API_KEY_STORAGE_KEY, FOLDER_ID_STORAGE_KEY, MemoryStore};
    use crate::entry::Entry;
    use crate::error::{ConfigField, FetchError, ValidationError};
    use crate::navigation::ROOT_LABEL;

    fn configured() -> ExplorerController<MemoryStore> {
        let mut store = MemoryStore::new();
        store.set(FOLDER_ID_STORAGE_KEY, "root123").unwrap();
        store.set(API_KEY_STORAGE_KEY, "abc").unwrap();
        ExplorerController::new(store)
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_705_320_000, 0).unwrap()
    }

    fn ok(request: &FetchRequest, entries: Vec<Entry>) -> FetchResponse {
        FetchResponse {
            generation: request.generation,
            folder_id: request.folder_id.clone(),
            result: Ok(entries),
        }
    }

    fn err(request: &FetchRequest, error: FetchError) -> FetchResponse {
        FetchResponse {
            generation: request.generation,
            folder_id: request.folder_id.clone(),
            result: Err(error),
        }
    }

    #[test]
    fn test_unconfigured_start_opens_form() {
        let mut ctrl = ExplorerController::new(MemoryStore::new());
        assert_eq!(ctrl.start(), None);
        assert_eq!(ctrl.phase(), Phase::Unconfigured);
        assert!(ctrl.is_config_form_open());
        assert_eq!(ctrl.view(now()).plan.layout, Layout::ConfigurationRequired);
    }

    #[test]
    fn test_unconfigured_actions_issue_nothing() {
        let mut ctrl = ExplorerController::new(MemoryStore::new());
        ctrl.dismiss_configuration();
        assert_eq!(ctrl.open_folder("f1", "Photos"), None);
        assert!(ctrl.is_config_form_open());
        assert_eq!(ctrl.refresh(), None);
        assert_eq!(ctrl.open_root(), None);
        assert_eq!(ctrl.generation(), 0);
    }

    #[test]
    fn test_start_loads_root() {
        let mut ctrl = configured();
        assert_eq!(ctrl.phase(), Phase::Idle);
        let request = ctrl.start().unwrap();
        assert_eq!(request.folder_id, "root123");
        assert_eq!(request.api_key, "abc");
        assert_eq!(ctrl.phase(), Phase::Loading);

        assert!(ctrl.complete(ok(&request, vec![Entry::file("1", "a.txt")])));
        assert_eq!(ctrl.phase(), Phase::Ready);
        assert_eq!(ctrl.listing().visible_entries().len(), 1);
    }

    #[test]
    fn test_open_folder_enters_loading_immediately() {
        let mut ctrl = configured();
        let first = ctrl.start().unwrap();
        ctrl.complete(ok(&first, vec![Entry::folder("f1", "Photos")]));

        let request = ctrl.open_folder("f1", "Photos").unwrap();
        assert_eq!(request.folder_id, "f1");
        assert_eq!(ctrl.phase(), Phase::Loading);
        assert_eq!(ctrl.navigation().path_label(), "Photos");
        assert!(ctrl.listing().all_entries().is_empty());
        assert_eq!(ctrl.view(now()).plan.layout, Layout::Loading);
    }

    #[test]
    fn test_supersession_in_either_order() {
        for a_first in [true, false] {
            let mut ctrl = configured();
            let a = ctrl.open_folder("A", "Folder A").unwrap();
            let b = ctrl.open_folder("B", "Folder B").unwrap();

            let a_response = ok(&a, vec![Entry::file("a1", "from-a.txt")]);
            let b_response = ok(&b, vec![Entry::file("b1", "from-b.txt")]);

            if a_first {
                assert!(!ctrl.complete(a_response));
                assert!(ctrl.complete(b_response));
            } else {
                assert!(ctrl.complete(b_response));
                assert!(!ctrl.complete(a_response));
            }

            let names: Vec<_> = ctrl
                .listing()
                .visible_entries()
                .iter()
                .map(|e| e.name.as_str())
                .collect();
            assert_eq!(names, ["from-b.txt"]);
            assert_eq!(ctrl.navigation().current_folder_id(), "B");
        }
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let mut ctrl = configured();
        let a = ctrl.open_folder("A", "A").unwrap();
        let b = ctrl.open_folder("B", "B").unwrap();
        assert!(ctrl.complete(ok(&b, Vec::new())));
        assert!(!ctrl.complete(err(&a, FetchError::Network("offline".into()))));
        assert_eq!(ctrl.phase(), Phase::Ready);
    }

    #[test]
    fn test_http_403_then_refresh_recovers() {
        let mut ctrl = configured();
        let request = ctrl.start().unwrap();
        ctrl.complete(err(&request, FetchError::from_status(403, "Forbidden")));

        assert_eq!(ctrl.phase(), Phase::Failed);
        let message = ctrl.listing().error_message().unwrap().to_string();
        assert!(message.contains("403"));
        match ctrl.view(now()).plan.layout {
            Layout::Error { message } => assert!(message.contains("403")),
            other => panic!("expected error layout, got {other:?}"),
        }

        let retry = ctrl.refresh().unwrap();
        assert_eq!(retry.folder_id, "root123");
        assert_eq!(ctrl.phase(), Phase::Loading);
        ctrl.complete(ok(&retry, vec![Entry::file("1", "a.txt")]));
        assert_eq!(ctrl.phase(), Phase::Ready);
    }

    #[test]
    fn test_failure_discards_previous_entries() {
        let mut ctrl = configured();
        let first = ctrl.start().unwrap();
        ctrl.complete(ok(&first, vec![Entry::file("1", "a.txt")]));

        let second = ctrl.refresh().unwrap();
        ctrl.complete(err(&second, FetchError::Network("offline".into())));
        assert!(ctrl.listing().all_entries().is_empty());
        assert!(ctrl.listing().visible_entries().is_empty());
    }

    #[test]
    fn test_refresh_keeps_navigation() {
        let mut ctrl = configured();
        ctrl.open_folder("f1", "Photos").unwrap();
        let request = ctrl.refresh().unwrap();
        assert_eq!(request.folder_id, "f1");
        assert_eq!(ctrl.navigation().path_label(), "Photos");
    }

    #[test]
    fn test_search_never_fetches() {
        let mut ctrl = configured();
        let request = ctrl.start().unwrap();
        ctrl.search("report");
        assert_eq!(ctrl.phase(), Phase::Loading);

        ctrl.complete(ok(
            &request,
            vec![
                Entry::file("1", "Report.pdf"),
                Entry::file("2", "report_final.docx"),
                Entry::file("3", "image.png"),
            ],
        ));
        assert_eq!(ctrl.listing().visible_entries().len(), 2);

        let generation = ctrl.generation();
        ctrl.search("missing");
        assert_eq!(ctrl.generation(), generation);
        assert_eq!(ctrl.view(now()).plan.layout, Layout::Empty);
        assert_eq!(ctrl.phase(), Phase::Ready);
    }

    #[test]
    fn test_query_survives_navigation() {
        let mut ctrl = configured();
        ctrl.search("b");
        let request = ctrl.open_folder("f1", "Photos").unwrap();
        ctrl.complete(ok(
            &request,
            vec![Entry::file("1", "a.png"), Entry::file("2", "b.png")],
        ));
        assert_eq!(ctrl.listing().visible_entries().len(), 1);
    }

    #[test]
    fn test_save_configuration_resets_and_loads_root() {
        let mut ctrl = ExplorerController::new(MemoryStore::new());
        ctrl.start();

        let request = ctrl
            .save_configuration(&Configuration::new("root123", "abc"))
            .unwrap();
        assert_eq!(request.folder_id, "root123");
        assert_eq!(request.api_key, "abc");
        assert_eq!(ctrl.generation(), 1);
        assert_eq!(ctrl.navigation().path_label(), ROOT_LABEL);
        assert_eq!(ctrl.phase(), Phase::Loading);
        assert!(!ctrl.is_config_form_open());
        assert_eq!(
            ctrl.store().get(FOLDER_ID_STORAGE_KEY).as_deref(),
            Some("root123")
        );
    }

    #[test]
    fn test_save_configuration_from_subfolder() {
        let mut ctrl = configured();
        let first = ctrl.open_folder("f1", "Photos").unwrap();

        let request = ctrl
            .save_configuration(&Configuration::new("other-root", "key2"))
            .unwrap();
        assert_eq!(request.folder_id, "other-root");
        assert!(ctrl.navigation().is_at_root());
        assert_eq!(ctrl.navigation().path_label(), ROOT_LABEL);

        // The subfolder fetch was superseded by the new root load.
        assert!(!ctrl.complete(ok(&first, vec![Entry::file("x", "stale")])));
    }

    #[test]
    fn test_invalid_save_leaves_state_untouched() {
        let mut ctrl = configured();
        let request = ctrl.start().unwrap();
        ctrl.complete(ok(&request, vec![Entry::file("1", "a.txt")]));
        ctrl.show_configuration();

        let generation = ctrl.generation();
        let result = ctrl.save_configuration(&Configuration::new("new-root", "  "));
        assert_eq!(
            result,
            Err(ConfigError::Validation(ValidationError::MissingField(
                ConfigField::ApiKey
            )))
        );
        assert_eq!(ctrl.generation(), generation);
        assert_eq!(ctrl.phase(), Phase::Ready);
        assert_eq!(ctrl.configuration(), &Configuration::new("root123", "abc"));
        assert_eq!(ctrl.store().get(FOLDER_ID_STORAGE_KEY).as_deref(), Some("root123"));

        let form = ctrl.view(now()).config_form.unwrap();
        assert!(form.error.unwrap().contains("API Key"));
        assert_eq!(form.folder_id, "root123");

        ctrl.dismiss_configuration();
        assert_eq!(ctrl.view(now()).config_form, None);
    }

    #[test]
    fn test_open_root_resets_label() {
        let mut ctrl = configured();
        ctrl.open_folder("f1", "Photos").unwrap();
        let request = ctrl.open_root().unwrap();
        assert_eq!(request.folder_id, "root123");
        assert!(ctrl.view(now()).plan.at_root);
        assert_eq!(ctrl.view(now()).plan.path_label, ROOT_LABEL);
    }

    #[test]
    fn test_view_mode() {
        let mut ctrl = configured();
        assert_eq!(ctrl.view_mode(), ViewMode::List);
        ctrl.toggle_view_mode();
        assert_eq!(ctrl.view(now()).plan.view_mode, ViewMode::Grid);
        ctrl.set_view_mode(ViewMode::List);
        assert_eq!(ctrl.view_mode(), ViewMode::List);
    }
}
