use gsm_site_core::menu::{BarStyle, MenuState};
use gsm_site_core::nav::is_scrolled;
use gsm_site_core::scroll::{anchor_target, scroll_top_for};
use gsm_site_core::{SiteConfig, SiteState};
use proptest::prelude::*;

#[test]
fn scrolled_state_is_reversible() {
    let mut state = SiteState::default();
    assert!(!state.on_scroll(0.0).scrolled);
    assert!(state.on_scroll(51.0).scrolled);
    assert!(!state.on_scroll(50.0).scrolled);
    assert!(state.on_scroll(400.0).changed);
    assert!(!state.on_scroll(400.0).changed);
    assert!(state.scroll().is_scrolled());
}

#[test]
fn configured_threshold_is_used() {
    let cfg = SiteConfig::from_json(
        &gsm_test_fixtures::configs::json("compact-header").expect("fixture"),
    )
    .expect("config parses");
    let mut state = SiteState::new(cfg);
    assert!(state.on_scroll(30.0).scrolled);
    assert_eq!(
        scroll_top_for(500.0, state.config().header_offset),
        444.0
    );
}

#[test]
fn menu_state_machine() {
    let mut state = SiteState::default();
    assert_eq!(state.menu(), MenuState::Closed);

    assert_eq!(state.toggle_menu(), MenuState::Open);
    assert_eq!(state.toggle_menu(), MenuState::Closed);

    state.toggle_menu();
    // clicks on the toggle or inside the menu leave it open
    assert!(!state.document_click(true, false));
    assert!(!state.document_click(false, true));
    assert!(state.menu().is_open());

    assert!(state.document_click(false, false));
    assert_eq!(state.menu(), MenuState::Closed);
    // closing an already closed menu changes nothing
    assert!(!state.document_click(false, false));
    assert!(!state.close_menu());
}

#[test]
fn anchor_navigation_closes_menu() {
    let mut state = SiteState::default();
    state.toggle_menu();
    let id = anchor_target("#membership").expect("in-page anchor");
    assert_eq!(id, "membership");
    assert!(state.close_menu());
    assert_eq!(
        state.menu().bar_styles(),
        [BarStyle::NEUTRAL, BarStyle::NEUTRAL, BarStyle::NEUTRAL]
    );
}

proptest! {
    #[test]
    fn scrolled_iff_above_threshold(offset in -1000.0f64..10_000.0) {
        let mut state = SiteState::default();
        let update = state.on_scroll(offset);
        prop_assert_eq!(update.scrolled, offset > 50.0);
        prop_assert_eq!(update.scrolled, is_scrolled(offset, 50.0));
    }

    #[test]
    fn scroll_sequences_track_the_latest_offset(offsets in proptest::collection::vec(0.0f64..500.0, 1..40)) {
        let mut state = SiteState::default();
        for off in &offsets {
            state.on_scroll(*off);
        }
        let last = *offsets.last().unwrap();
        prop_assert_eq!(state.scroll().is_scrolled(), last > 50.0);
    }
}
