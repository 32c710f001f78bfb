use std::cell::RefCell;
use std::rc::Rc;

use gsm_site_core::observer::{OneShotObserver, RevealState, VisibilityObserver};
use gsm_site_core::CounterAnimation;
use proptest::prelude::*;

#[test]
fn counters_animate_once_even_when_scrolled_back() {
    let started: Rc<RefCell<Vec<String>>> = Rc::default();
    let mut obs = OneShotObserver::new();
    let sink = started.clone();
    obs.on_enter(Box::new(move |target: &u32| {
        let anim = CounterAnimation::new(i64::from(*target));
        sink.borrow_mut()
            .push(anim.frames().last().unwrap().text.clone());
    }));
    for target in [45u32, 30, 120] {
        obs.observe(target);
    }

    // scroll down past all three, back up, and down again
    for _ in 0..3 {
        obs.dispatch([(&45, true), (&30, true)]);
        obs.dispatch([(&45, false), (&30, false), (&120, true)]);
    }
    assert_eq!(*started.borrow(), vec!["45+", "30", "120"]);
    assert_eq!(obs.pending(), 0);
    assert_eq!(obs.revealed(), 3);
}

#[test]
fn non_intersecting_entries_keep_target_observed() {
    let mut obs = OneShotObserver::new();
    obs.observe("card");
    assert!(!obs.intersect(&"card", false));
    assert_eq!(obs.state(&"card"), RevealState::Observed);
    assert!(obs.intersect(&"card", true));
    assert_eq!(obs.state(&"card"), RevealState::Revealed);
}

#[test]
fn reobserving_a_revealed_target_does_not_rearm_it() {
    let mut obs = OneShotObserver::new();
    obs.observe(1);
    assert!(obs.intersect(&1, true));
    obs.observe(1);
    assert!(!obs.intersect(&1, true));
}

proptest! {
    #[test]
    fn each_target_fires_at_most_once(events in proptest::collection::vec((0u8..8, any::<bool>()), 0..200)) {
        let fired: Rc<RefCell<Vec<u8>>> = Rc::default();
        let mut obs = OneShotObserver::new();
        let sink = fired.clone();
        obs.on_enter(Box::new(move |t: &u8| sink.borrow_mut().push(*t)));
        for t in 0u8..8 {
            obs.observe(t);
        }
        for (t, visible) in &events {
            obs.intersect(t, *visible);
        }
        let fired = fired.borrow();
        let mut unique = fired.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(unique.len(), fired.len());
        for t in 0u8..8 {
            let seen_visible = events.iter().any(|(e, v)| *e == t && *v);
            prop_assert_eq!(fired.contains(&t), seen_visible);
        }
    }
}
