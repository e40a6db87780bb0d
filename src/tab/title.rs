//! Tab title, inline rename and icon.

use super::Tab;
use super::mailbox::DeferredTask;

/// Whether the header is showing its inline rename field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenameState {
    #[default]
    Idle,
    Renaming,
}

/// Keys the rename field reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameKey {
    /// Enter: keep the typed text
    Accept,
    /// Escape: discard the typed text
    Cancel,
}

impl Tab {
    /// Title shown in the header
    ///
    /// The user's override wins, then the active session's title.
    pub fn display_title(&self) -> String {
        if let Some(ref title) = self.runtime_title {
            return title.clone();
        }
        self.pane_manager
            .active_pane()
            .map(|pane| pane.title().to_string())
            .unwrap_or_default()
    }

    /// The user's title override, if any
    pub fn runtime_title(&self) -> Option<&str> {
        self.runtime_title.as_deref()
    }

    /// Override the title; an empty string removes the override
    pub fn set_runtime_title(&mut self, title: &str) {
        self.runtime_title = (!title.is_empty()).then(|| title.to_string());
        self.push_title();
    }

    /// Go back to showing the session title
    pub fn reset_runtime_title(&mut self) {
        self.set_runtime_title("");
    }

    pub(super) fn push_title(&mut self) {
        let title = self.display_title();
        self.header.set_title(&title);
    }

    pub fn rename_state(&self) -> RenameState {
        self.rename_state
    }

    /// Show the inline rename field, seeded with the current title
    pub fn request_rename(&mut self) {
        if self.rename_state == RenameState::Renaming {
            return;
        }
        self.rename_state = RenameState::Renaming;
        let seed = self.display_title();
        self.header.begin_rename(&seed);
    }

    /// Key pressed in the rename field
    pub fn rename_key(&mut self, key: RenameKey, text: &str) {
        match key {
            RenameKey::Accept => self.finish_rename(Some(text)),
            RenameKey::Cancel => self.finish_rename(None),
        }
    }

    /// The rename field lost focus, which keeps the typed text
    pub fn rename_lost_focus(&mut self, text: &str) {
        self.finish_rename(Some(text));
    }

    fn finish_rename(&mut self, commit: Option<&str>) {
        if self.rename_state == RenameState::Idle {
            log::debug!("Rename input while idle in tab {}, ignored", self.id);
            return;
        }
        self.rename_state = RenameState::Idle;
        self.header.end_rename();

        match commit {
            Some(text) => self.set_runtime_title(text),
            None => self.push_title(),
        }
    }

    /// Last icon path requested
    pub fn icon_path(&self) -> Option<&str> {
        self.icon_path.as_deref()
    }

    /// Show the icon at `path`
    ///
    /// Repeating the current path does nothing; otherwise the header is
    /// updated on the next [`Tab::process_pending`].
    pub fn update_icon(&mut self, path: &str) {
        if self.icon_path.as_deref() == Some(path) {
            return;
        }
        self.icon_path = Some(path.to_string());
        self.mailbox.post_deferred(DeferredTask::RefreshIcon);
    }

    pub(super) fn refresh_icon(&mut self) {
        if let Some(ref path) = self.icon_path {
            self.header.set_icon(path);
        }
    }
}
