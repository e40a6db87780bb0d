//! Display title, inline rename and icon refresh.

mod common;

use common::{TestTab, post, retitle};
use tabpane::{PaneEvent, RenameKey, RenameState, SplitDirection};

#[test]
fn test_display_title_follows_active_session() {
    let mut t = TestTab::new();
    assert_eq!(t.tab.display_title(), "shell-1");

    retitle(t.session(0), "vim");
    t.tab.process_pending();
    assert_eq!(t.tab.display_title(), "vim");
    assert_eq!(t.header.borrow().title, "vim");
}

#[test]
fn test_inactive_title_change_does_not_touch_header() {
    let mut t = TestTab::new();
    t.split(SplitDirection::Vertical);
    let pushed = t.header.borrow().titles_pushed;

    retitle(t.session(1), "htop");
    t.tab.process_pending();
    assert_eq!(t.header.borrow().titles_pushed, pushed);
    assert_eq!(t.tab.get_pane(2).unwrap().title(), "htop");

    t.tab.update_active_pane(2);
    assert_eq!(t.header.borrow().title, "htop");
}

#[test]
fn test_rename_accept_overrides_session_title() {
    let mut t = TestTab::new();
    t.tab.request_rename();
    assert_eq!(t.tab.rename_state(), RenameState::Renaming);
    assert_eq!(t.header.borrow().rename_seed.as_deref(), Some("shell-1"));
    assert!(t.header.borrow().renaming);

    t.tab.rename_key(RenameKey::Accept, "Build");
    assert_eq!(t.tab.rename_state(), RenameState::Idle);
    assert!(!t.header.borrow().renaming);
    assert_eq!(t.tab.display_title(), "Build");
    assert_eq!(t.header.borrow().title, "Build");

    retitle(t.session(0), "cargo build");
    t.tab.process_pending();
    assert_eq!(t.tab.display_title(), "Build");
    assert_eq!(t.header.borrow().title, "Build");
}

#[test]
fn test_rename_cancel_keeps_previous_title() {
    let mut t = TestTab::new();
    t.tab.request_rename();
    t.tab.rename_key(RenameKey::Cancel, "discarded");

    assert_eq!(t.tab.rename_state(), RenameState::Idle);
    assert_eq!(t.tab.runtime_title(), None);
    assert_eq!(t.header.borrow().title, "shell-1");
}

#[test]
fn test_rename_lost_focus_commits() {
    let mut t = TestTab::new();
    t.tab.request_rename();
    t.tab.rename_lost_focus("Logs");
    assert_eq!(t.tab.runtime_title(), Some("Logs"));
    assert_eq!(t.tab.rename_state(), RenameState::Idle);
}

#[test]
fn test_rename_input_while_idle_is_ignored() {
    let mut t = TestTab::new();
    t.tab.rename_key(RenameKey::Accept, "Nope");
    t.tab.rename_lost_focus("Nope");
    assert_eq!(t.tab.runtime_title(), None);
    assert_eq!(t.tab.display_title(), "shell-1");
}

#[test]
fn test_second_rename_request_is_noop() {
    let mut t = TestTab::new();
    t.tab.request_rename();
    t.header.borrow_mut().rename_seed = None;

    t.tab.request_rename();
    assert!(t.header.borrow().rename_seed.is_none());
    assert_eq!(t.tab.rename_state(), RenameState::Renaming);
}

#[test]
fn test_empty_rename_clears_override() {
    let mut t = TestTab::new();
    t.tab.set_runtime_title("Pinned");
    assert_eq!(t.tab.display_title(), "Pinned");

    t.tab.request_rename();
    assert_eq!(t.header.borrow().rename_seed.as_deref(), Some("Pinned"));
    t.tab.rename_key(RenameKey::Accept, "");
    assert_eq!(t.tab.runtime_title(), None);
    assert_eq!(t.tab.display_title(), "shell-1");
}

#[test]
fn test_reset_runtime_title() {
    let mut t = TestTab::new();
    t.tab.set_runtime_title("Pinned");
    t.tab.reset_runtime_title();
    assert_eq!(t.header.borrow().title, "shell-1");
}

#[test]
fn test_update_icon_is_deferred_and_deduplicated() {
    let mut t = TestTab::new();
    t.tab.update_icon("/icons/shell.png");
    assert_eq!(t.tab.icon_path(), Some("/icons/shell.png"));
    assert_eq!(t.header.borrow().icons_pushed, 0);

    t.tab.update_icon("/icons/shell.png");
    assert_eq!(t.tab.process_pending(), 1);
    assert_eq!(t.header.borrow().icon.as_deref(), Some("/icons/shell.png"));
    assert_eq!(t.header.borrow().icons_pushed, 1);

    t.tab.update_icon("/icons/shell.png");
    assert_eq!(t.tab.process_pending(), 0);
}

#[test]
fn test_title_event_after_close_is_dropped() {
    let mut t = TestTab::new();
    let (_, second) = t.split(SplitDirection::Vertical);
    t.tab.update_active_pane(second);
    let late = t.session(1).clone();
    t.tab.close_pane(second).unwrap();

    late.borrow_mut().title = "ghost".to_string();
    post(&late, PaneEvent::TitleChanged);
    t.tab.process_pending();
    assert_eq!(t.header.borrow().title, "shell-1");
}
