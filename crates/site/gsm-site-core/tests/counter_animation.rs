use gsm_site_core::counter::{final_label, parse_target, step, CounterAnimation};
use proptest::prelude::*;

#[test]
fn forty_five_gets_a_plus() {
    let frames = CounterAnimation::new(45).frames();
    assert_eq!(frames.last().unwrap().text, "45+");
    assert!(frames.last().unwrap().done);
}

#[test]
fn thirty_is_plain() {
    let frames = CounterAnimation::new(30).frames();
    assert_eq!(frames.last().unwrap().text, "30");
    assert_eq!(final_label(30, 45), "30");
}

#[test]
fn first_frame_is_one_step_in() {
    let mut anim = CounterAnimation::new(100);
    assert_eq!(anim.increment(), 2.0);
    let f = anim.tick();
    assert_eq!(f.text, "2");
    assert!(!f.done);
    assert_eq!(anim.current(), 2.0);
}

#[test]
fn intermediate_frames_round_up() {
    let mut anim = CounterAnimation::new(12);
    // 12 / 50 = 0.24 per frame
    assert_eq!(anim.tick().text, "1");
    for _ in 0..2 {
        anim.tick();
    }
    // 4 * 0.24 = 0.96, then 1.2
    assert_eq!(anim.tick().text, "1");
    assert_eq!(anim.tick().text, "2");
}

#[test]
fn finished_animation_keeps_final_label() {
    let mut anim = CounterAnimation::new(3);
    while !anim.tick().done {}
    assert!(anim.is_finished());
    assert_eq!(anim.tick().text, "3");
}

#[test]
fn custom_steps_and_suffix() {
    let frames = CounterAnimation::with_steps(10, 5.0, 10).frames();
    let texts: Vec<_> = frames.iter().map(|f| f.text.as_str()).collect();
    assert_eq!(texts, vec!["2", "4", "6", "8", "10", "10+"]);
}

#[test]
fn negative_target_finishes_at_once() {
    let target = parse_target("-5").unwrap();
    let frames = CounterAnimation::new(target).frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].text, "-5");
}

proptest! {
    #[test]
    fn step_never_moves_past_a_reached_target(current in 0.0f64..1e6, target in 0.0f64..1e6, inc in 0.001f64..100.0) {
        let next = step(current, target, inc);
        if current >= target {
            prop_assert_eq!(next, current);
        } else {
            prop_assert!(next > current);
        }
    }

    #[test]
    fn every_counter_finishes_on_its_label(target in 0i64..100_000) {
        let frames = CounterAnimation::new(target).frames();
        // 50 steps, plus at most one extra for float drift, plus the final label.
        prop_assert!(frames.len() <= 52);
        let last = frames.last().unwrap();
        prop_assert!(last.done);
        prop_assert_eq!(&last.text, &final_label(target, 45));
        prop_assert_eq!(frames.iter().filter(|f| f.done).count(), 1);
    }

    #[test]
    fn displayed_values_never_decrease(target in 1i64..10_000) {
        let values: Vec<i64> = CounterAnimation::new(target)
            .frames()
            .iter()
            .filter(|f| !f.done)
            .map(|f| f.text.parse().unwrap())
            .collect();
        prop_assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }
}
