use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use fasting_tracker::fasting::duration::{DayAnchor, FastingWindow, progress_fraction};
use fasting_tracker::fasting::state::{MetabolicState, THRESHOLDS, bucket_index};
use fasting_tracker::fasting::target::{TargetStatus, TargetWindow};
use fasting_tracker::{calculate_fasting_hours, metabolic_state, science_details};

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 2, 1)
        .unwrap()
        .and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap())
}

fn as_hours(h: u32, m: u32) -> f64 {
    h as f64 + m as f64 / 60.0
}

#[test]
fn test_forward_pairs_use_plain_difference() {
    for (lh, lm, bh, bm) in [(6, 0, 6, 0), (7, 15, 13, 45), (0, 0, 23, 59), (12, 30, 12, 31)] {
        let hours = calculate_fasting_hours(at(lh, lm), at(bh, bm));
        let expected = as_hours(bh, bm) - as_hours(lh, lm);
        assert!((hours - expected).abs() < 1e-9, "{lh}:{lm} -> {bh}:{bm}");
    }
}

#[test]
fn test_backward_pairs_wrap_exactly_one_day() {
    for (lh, lm, bh, bm) in [(20, 0, 10, 0), (23, 59, 0, 0), (18, 30, 6, 15), (12, 1, 12, 0)] {
        let hours = calculate_fasting_hours(at(lh, lm), at(bh, bm));
        let expected = 24.0 - as_hours(lh, lm) + as_hours(bh, bm);
        assert!((hours - expected).abs() < 1e-9, "{lh}:{lm} -> {bh}:{bm}");
    }
}

#[test]
fn test_evening_to_morning_scenario() {
    let hours = calculate_fasting_hours(at(20, 0), at(10, 0));
    assert_eq!(hours, 14.0);
    assert_eq!(metabolic_state(hours), "Glycogen low. Ketone production starting.");
    assert_eq!(TargetWindow::default().assess(hours), TargetStatus::Within);
}

#[test]
fn test_identical_times_are_zero_not_a_full_day() {
    let hours = calculate_fasting_hours(at(8, 0), at(8, 0));
    assert_eq!(hours, 0.0);
    assert_eq!(
        metabolic_state(hours),
        "Active digestion. Rising blood glucose and insulin."
    );
}

#[test]
fn test_boundary_buckets() {
    assert_eq!(bucket_index(3.999) + 1, 1);
    assert_eq!(bucket_index(4.0) + 1, 2);
    assert_eq!(bucket_index(23.999) + 1, 6);
    assert_eq!(bucket_index(24.0) + 1, 7);
    assert_eq!(bucket_index(72.0) + 1, 7);
}

#[test]
fn test_buckets_are_monotonic_and_cover_every_index() {
    let mut previous = 0;
    let mut seen = [false; 7];
    let mut h = 0.0;
    while h < 30.0 {
        let idx = bucket_index(h);
        assert!(idx >= previous, "bucket went backwards at {h}");
        previous = idx;
        seen[idx] = true;
        h += 0.25;
    }
    assert!(seen.iter().all(|&s| s));
    assert_eq!(THRESHOLDS.len() + 1, MetabolicState::ALL.len());
}

#[test]
fn test_short_and_long_narratives_agree() {
    let mut h = 0.0;
    while h < 30.0 {
        let state = MetabolicState::from_hours(h);
        assert_eq!(metabolic_state(h), state.summary());
        assert_eq!(science_details(h), state.details());
        h += 0.1;
    }
}

#[test]
fn test_progress_is_clamped_at_one() {
    assert_eq!(progress_fraction(30.0), 1.0);
    assert_eq!(progress_fraction(6.0), 0.25);
}

#[test]
fn test_previous_day_anchor_matches_first_layout() {
    let window = FastingWindow::from_times(
        NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        DayAnchor::PreviousDay,
    )
    .unwrap();
    assert_eq!(window.last_meal.date(), NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
    assert_eq!(window.hours(), 14.0);
}
