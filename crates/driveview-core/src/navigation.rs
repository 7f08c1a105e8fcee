//! Current folder tracking.

/// Label shown for the configured root folder.
pub const ROOT_LABEL: &str = "Root";

/// The folder being browsed and its display label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    root_folder_id: String,
    current_folder_id: String,
    path_label: String,
}

impl NavigationState {
    /// Start at `root_folder_id`.
    pub fn root(root_folder_id: impl Into<String>) -> Self {
        let root_folder_id = root_folder_id.into();
        Self {
            current_folder_id: root_folder_id.clone(),
            root_folder_id,
            path_label: ROOT_LABEL.to_string(),
        }
    }

    /// Move into a folder.
    pub fn open(&mut self, folder_id: impl Into<String>, label: impl Into<String>) {
        self.current_folder_id = folder_id.into();
        self.path_label = label.into();
    }

    /// Return to the root, optionally switching to a new root folder.
    pub fn reset(&mut self, root_folder_id: Option<&str>) {
        if let Some(root) = root_folder_id {
            self.root_folder_id = root.to_string();
        }
        self.current_folder_id = self.root_folder_id.clone();
        self.path_label = ROOT_LABEL.to_string();
    }

    pub fn current_folder_id(&self) -> &str {
        &self.current_folder_id
    }

    pub fn path_label(&self) -> &str {
        &self.path_label
    }

    pub fn root_folder_id(&self) -> &str {
        &self.root_folder_id
    }

    pub fn is_at_root(&self) -> bool {
        self.current_folder_id == self.root_folder_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_root() {
        let nav = NavigationState::root("root123");
        assert_eq!(nav.current_folder_id(), "root123");
        assert_eq!(nav.path_label(), ROOT_LABEL);
        assert!(nav.is_at_root());
    }

    #[test]
    fn test_open_sets_both_fields() {
        let mut nav = NavigationState::root("root123");
        nav.open("f1", "Photos");
        assert_eq!(nav.current_folder_id(), "f1");
        assert_eq!(nav.path_label(), "Photos");
        assert!(!nav.is_at_root());
        assert_eq!(nav.root_folder_id(), "root123");
    }

    #[test]
    fn test_reset_returns_to_root() {
        let mut nav = NavigationState::root("root123");
        nav.open("f1", "Photos");
        nav.reset(None);
        assert_eq!(nav, NavigationState::root("root123"));
    }

    #[test]
    fn test_reset_to_new_root() {
        let mut nav = NavigationState::root("old");
        nav.open("f1", "Photos");
        nav.reset(Some("new"));
        assert_eq!(nav.current_folder_id(), "new");
        assert_eq!(nav.root_folder_id(), "new");
        assert_eq!(nav.path_label(), ROOT_LABEL);
    }
}
