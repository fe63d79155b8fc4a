use coinlens_core::{Tier, TierCaps, downsample, downsample_with_cap, downsample_with_caps, sample_indices};
use proptest::prelude::*;

proptest! {
    #[test]
    fn bounded_and_keeps_endpoints(len in 1usize..2_000, cap in 1usize..100) {
        let idx = sample_indices(len, Some(cap));
        prop_assert!(idx.len() <= cap + 1);
        prop_assert_eq!(idx.first().copied(), Some(0));
        prop_assert_eq!(idx.last().copied(), Some(len - 1));
        prop_assert!(idx.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn identity_when_under_cap(len in 0usize..50, extra in 0usize..50) {
        let series: Vec<usize> = (0..len).collect();
        let cap = len + extra;
        prop_assert_eq!(downsample_with_cap(&series, Some(cap)), series.clone());
        prop_assert_eq!(downsample_with_cap(&series, None), series);
    }

    #[test]
    fn output_is_a_subsequence(values in proptest::collection::vec(any::<i32>(), 0..500), cap in 1usize..40) {
        let out = downsample_with_cap(&values, Some(cap));
        let mut rest = values.iter();
        for v in &out {
            prop_assert!(rest.any(|x| x == v));
        }
        if !values.is_empty() {
            prop_assert_eq!(out.first(), values.first());
            prop_assert_eq!(out.last(), values.last());
        }
    }

    #[test]
    fn deterministic(len in 0usize..1_000, tier in prop_oneof![
        Just(Tier::Short), Just(Tier::Medium), Just(Tier::Long), Just(Tier::Extended)
    ]) {
        let series: Vec<usize> = (0..len).collect();
        prop_assert_eq!(downsample(&series, tier), downsample(&series, tier));
    }
}

#[test]
fn ninety_points_long_tier() {
    let series: Vec<usize> = (0..90).collect();
    let out = downsample(&series, Tier::Long);
    assert!(out.len() <= 25);
    assert_eq!(out.first(), Some(&0));
    assert_eq!(out.last(), Some(&89));
}

#[test]
fn medium_tier_thins_thirty_days() {
    let series: Vec<usize> = (0..30).collect();
    let out = downsample(&series, Tier::Medium);
    assert_eq!(out.len(), 16);
    assert_eq!(out[1], 2);
    assert_eq!(out.last(), Some(&29));
}

#[test]
fn short_tier_shows_everything() {
    let series: Vec<usize> = (0..365).collect();
    assert_eq!(downsample(&series, Tier::Short), series);
}

#[test]
fn empty_series_stays_empty() {
    let empty: Vec<f64> = Vec::new();
    for tier in Tier::ALL {
        assert!(downsample(&empty, tier).is_empty());
    }
    assert!(sample_indices(0, Some(5)).is_empty());
}

#[test]
fn custom_caps_are_honoured() {
    let caps = TierCaps {
        short: Some(3),
        ..TierCaps::default()
    };
    let series: Vec<usize> = (0..7).collect();
    let out = downsample_with_caps(&series, Tier::Short, &caps);
    assert_eq!(out, vec![0, 3, 6]);
}

#[test]
fn single_point_cap_keeps_both_ends() {
    let series: Vec<usize> = (0..10).collect();
    assert_eq!(downsample_with_cap(&series, Some(1)), vec![0, 9]);
}
