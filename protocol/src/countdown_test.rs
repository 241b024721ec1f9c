use super::*;
use proptest::prelude::*;
use time::Duration;
use time::macros::datetime;

const NOW: OffsetDateTime = datetime!(2026-03-01 12:00:00 UTC);

#[test]
fn past_target_is_all_zero() {
    let countdown = calculate_countdown(NOW - Duration::hours(5), NOW);
    assert!(countdown.is_zero());
}

#[test]
fn target_equal_to_now_is_all_zero() {
    assert!(calculate_countdown(NOW, NOW).is_zero());
}

#[test]
fn decomposes_into_units() {
    let target = NOW + Duration::days(3) + Duration::hours(4) + Duration::minutes(5) + Duration::seconds(6);
    let countdown = calculate_countdown(target, NOW);
    assert_eq!(countdown, Countdown { days: 3, hours: 4, minutes: 5, seconds: 6 });
}

#[test]
fn sub_second_remainder_is_dropped() {
    let target = NOW + Duration::milliseconds(1_999);
    let countdown = calculate_countdown(target, NOW);
    assert_eq!(countdown, Countdown { days: 0, hours: 0, minutes: 0, seconds: 1 });
}

#[test]
fn under_one_second_left_reads_zero_but_target_is_still_ahead() {
    let countdown = calculate_countdown(NOW + Duration::milliseconds(400), NOW);
    assert!(countdown.is_zero());
}

#[test]
fn display_pads_sub_day_units() {
    let countdown = Countdown { days: 12, hours: 3, minutes: 0, seconds: 9 };
    assert_eq!(countdown.to_string(), "12d 03h 00m 09s");
}

#[test]
fn instant_from_millis_round_trips_epoch_ms() {
    let instant = instant_from_millis(1_772_366_400_000).unwrap();
    assert_eq!(instant, NOW);
}

proptest! {
    #[test]
    fn elapsed_targets_always_clamp_to_zero(back_ms in 0_i64..10_000_000_000) {
        let target = NOW - Duration::milliseconds(back_ms);
        prop_assert!(calculate_countdown(target, NOW).is_zero());
    }

    #[test]
    fn future_targets_reconstruct_to_whole_seconds(ahead_ms in 1_i64..10_000_000_000) {
        let countdown = calculate_countdown(NOW + Duration::milliseconds(ahead_ms), NOW);
        prop_assert!(countdown.hours < 24);
        prop_assert!(countdown.minutes < 60);
        prop_assert!(countdown.seconds < 60);
        let expected = u128::try_from(ahead_ms / 1_000 * 1_000).unwrap();
        prop_assert_eq!(countdown.total_millis(), expected);
    }
}
