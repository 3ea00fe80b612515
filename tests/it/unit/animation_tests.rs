//! Unit tests for the animation clock.

use crate::helpers::ms;
use budgetboard::drawer::{ease_out_cubic, AnimationClock};
use std::time::Instant;

#[test]
fn test_default_duration_matches_constant() {
    let start = Instant::now();
    let clock = AnimationClock::new(-280.0, 0.0, start);
    assert!(!clock.is_finished_at(
        start + ms(budgetboard::constants::DRAWER_ANIMATION_MS - 1)
    ));
    assert!(clock.is_finished_at(start + ms(budgetboard::constants::DRAWER_ANIMATION_MS)));
}

#[test]
fn test_repeated_retargeting_stays_continuous() {
    let start = Instant::now();
    let mut clock = AnimationClock::with_duration(-280.0, 0.0, start, ms(300));

    let mut now = start;
    let mut targets = [0.0_f32, -280.0, 0.0, -280.0].iter().cycle();
    for _ in 0..8 {
        now += ms(70);
        let before = clock.value_at(now);
        clock.retarget(now, *targets.next().unwrap());
        let after = clock.value_at(now);
        assert!(
            (before - after).abs() < 1e-4,
            "retarget introduced a jump: {} -> {}",
            before,
            after
        );
    }
}

#[test]
fn test_ease_out_decelerates() {
    // Ease-out: the first half covers more ground than the second
    let first_half = ease_out_cubic(0.5) - ease_out_cubic(0.0);
    let second_half = ease_out_cubic(1.0) - ease_out_cubic(0.5);
    assert!(first_half > second_half);
}

#[test]
fn test_zero_length_animation_is_instantly_finished() {
    let start = Instant::now();
    let clock = AnimationClock::with_duration(-140.0, -140.0, start, ms(0));
    assert!(clock.is_finished_at(start));
    assert_eq!(clock.value_at(start), -140.0);
}
