//! Custom tab color application and clearing.

mod common;

use common::TestTab;
use tabpane::{Config, TabColor, TabEvent, ThemeSlot};

const DARK_BLUE: TabColor = TabColor::rgb(0, 0, 139);

#[test]
fn test_set_color_is_applied_on_processing() {
    let mut t = TestTab::new();
    t.tab.set_color(DARK_BLUE);
    assert_eq!(t.tab.color(), None);
    assert!(t.header.borrow().resources.is_empty());

    t.tab.process_pending();
    assert_eq!(t.tab.color(), Some(DARK_BLUE));
    assert_eq!(t.drain_events(), vec![TabEvent::ColorSelected(DARK_BLUE)]);
}

#[test]
fn test_set_color_fills_every_slot() {
    let mut t = TestTab::new();
    t.tab.set_color(DARK_BLUE);
    t.tab.process_pending();

    let header = t.header.borrow();
    assert_eq!(header.resources.len(), ThemeSlot::ALL.len());
    assert_eq!(
        header.resources[&ThemeSlot::BackgroundSelected],
        DARK_BLUE
    );
    assert_eq!(header.resources[&ThemeSlot::BackgroundPressed], DARK_BLUE);
    assert_eq!(
        header.resources[&ThemeSlot::Background],
        DARK_BLUE.with_alpha(64)
    );
    assert_eq!(
        header.resources[&ThemeSlot::BackgroundPointerOver],
        DARK_BLUE.accent()
    );
    // Dark background gets white text
    for slot in [
        ThemeSlot::Foreground,
        ThemeSlot::ForegroundSelected,
        ThemeSlot::ForegroundPointerOver,
        ThemeSlot::ForegroundPressed,
        ThemeSlot::CloseButtonForegroundActive,
    ] {
        assert_eq!(header.resources[&slot], TabColor::WHITE);
    }
    assert_eq!(header.visual_refreshes, vec![false]);
}

#[test]
fn test_bright_color_gets_black_text() {
    let mut t = TestTab::new();
    let yellow = TabColor::rgb(250, 230, 40);
    t.tab.set_color(yellow);
    t.tab.process_pending();
    assert_eq!(
        t.header.borrow().resources[&ThemeSlot::Foreground],
        TabColor::BLACK
    );
}

#[test]
fn test_deselected_alpha_from_config() {
    let config = Config {
        deselected_tab_alpha: 100,
        ..Config::default()
    };
    let mut t = TestTab::with_config(&config);
    t.tab.set_color(DARK_BLUE);
    t.tab.process_pending();
    assert_eq!(t.header.borrow().resources[&ThemeSlot::Background].a, 100);
}

#[test]
fn test_set_then_clear_removes_overrides() {
    let mut t = TestTab::new();
    t.tab.set_focused(true);
    t.tab.set_color(DARK_BLUE);
    t.tab.clear_color();
    t.tab.process_pending();

    assert!(t.header.borrow().resources.is_empty());
    assert_eq!(t.tab.color(), None);
    assert_eq!(
        t.drain_events(),
        vec![TabEvent::ColorSelected(DARK_BLUE), TabEvent::ColorCleared]
    );
    assert_eq!(t.header.borrow().visual_refreshes, vec![true, true]);
}

#[test]
fn test_clear_without_color_is_silent() {
    let mut t = TestTab::new();
    t.tab.clear_color();
    t.tab.process_pending();

    assert!(t.drain_events().is_empty());
    assert_eq!(t.header.borrow().visual_refreshes.len(), 1);
}

#[test]
fn test_clear_twice_notifies_once() {
    let mut t = TestTab::new();
    t.tab.set_color(DARK_BLUE);
    t.tab.process_pending();
    t.drain_events();

    t.tab.clear_color();
    t.tab.clear_color();
    t.tab.process_pending();
    assert_eq!(t.drain_events(), vec![TabEvent::ColorCleared]);
}

#[test]
fn test_handle_posts_color_while_tab_alive() {
    let mut t = TestTab::new();
    let handle = t.tab.handle();
    assert!(handle.is_alive());
    assert!(handle.set_color(DARK_BLUE));
    t.tab.process_pending();
    assert_eq!(t.tab.color(), Some(DARK_BLUE));

    assert!(handle.clear_color());
    t.tab.process_pending();
    assert_eq!(t.tab.color(), None);
}

#[test]
fn test_handle_to_dropped_tab_does_nothing() {
    let t = TestTab::new();
    let handle = t.tab.handle();
    let header = t.header.clone();
    drop(t);

    assert!(!handle.is_alive());
    assert!(!handle.set_color(DARK_BLUE));
    assert!(!handle.clear_color());
    assert!(header.borrow().resources.is_empty());
}

#[test]
fn test_shutdown_resets_color_and_sessions() {
    let mut t = TestTab::new();
    t.tab.set_color(DARK_BLUE);
    t.tab.process_pending();
    t.drain_events();

    let TestTab {
        tab,
        header,
        mut events,
        sessions,
    } = t;
    tab.shutdown();

    assert!(header.borrow().resources.is_empty());
    assert_eq!(sessions[0].borrow().shutdowns, 1);
    assert!(sessions[0].borrow().detached);
    // Shutting down is not a close: subscribers hear nothing
    assert!(events.try_recv().is_err());
}
