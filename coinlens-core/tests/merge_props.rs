use std::collections::{BTreeMap, BTreeSet};

use chrono::{NaiveDate, TimeDelta};
use coinlens_core::{TimePoint, canonicalize, merge_series};
use proptest::prelude::*;

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + TimeDelta::days(offset)
}

fn arb_series() -> impl Strategy<Value = Vec<TimePoint>> {
    proptest::collection::vec(
        (0i64..60, proptest::option::of(0.0f64..100_000.0)),
        0..80,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(off, value)| TimePoint { date: day(off), value })
            .collect()
    })
}

/// Last present value per day, the way a merge must resolve same-day points.
fn expected_values(series: &[TimePoint]) -> BTreeMap<NaiveDate, Option<f64>> {
    let mut out: BTreeMap<NaiveDate, Option<f64>> = BTreeMap::new();
    for p in series {
        let slot = out.entry(p.date).or_insert(None);
        if p.value.is_some() {
            *slot = p.value;
        }
    }
    out
}

proptest! {
    #[test]
    fn labels_are_sorted_union_of_dates(a in arb_series(), b in arb_series()) {
        let merged = merge_series(&a, &b);
        let expected: BTreeSet<NaiveDate> = a.iter().chain(&b).map(|p| p.date).collect();

        prop_assert_eq!(merged.labels.len(), expected.len());
        prop_assert_eq!(merged.values_a.len(), merged.labels.len());
        prop_assert_eq!(merged.values_b.len(), merged.labels.len());
        prop_assert!(merged.labels.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(merged.labels.iter().copied().collect::<BTreeSet<_>>(), expected);
    }

    #[test]
    fn values_align_with_their_dates(a in arb_series(), b in arb_series()) {
        let merged = merge_series(&a, &b);
        let exp_a = expected_values(&a);
        let exp_b = expected_values(&b);
        for (i, d) in merged.labels.iter().enumerate() {
            prop_assert_eq!(merged.values_a[i], exp_a.get(d).copied().flatten());
            prop_assert_eq!(merged.values_b[i], exp_b.get(d).copied().flatten());
        }
    }

    #[test]
    fn merge_is_symmetric_up_to_swapping(a in arb_series(), b in arb_series()) {
        let ab = merge_series(&a, &b);
        let ba = merge_series(&b, &a);
        prop_assert_eq!(&ab.labels, &ba.labels);
        prop_assert_eq!(&ab.values_a, &ba.values_b);
        prop_assert_eq!(&ab.values_b, &ba.values_a);
    }

    #[test]
    fn full_overlap_has_no_gaps(values in proptest::collection::vec((1.0f64..1e5, 1.0f64..1e5), 1..40)) {
        let a: Vec<TimePoint> = values.iter().enumerate()
            .map(|(i, (x, _))| TimePoint::new(day(i as i64), *x)).collect();
        let b: Vec<TimePoint> = values.iter().enumerate().rev()
            .map(|(i, (_, y))| TimePoint::new(day(i as i64), *y)).collect();
        let merged = merge_series(&a, &b);
        prop_assert_eq!(merged.len(), values.len());
        prop_assert!(merged.values_a.iter().all(Option::is_some));
        prop_assert!(merged.values_b.iter().all(Option::is_some));
    }

    #[test]
    fn canonicalize_is_idempotent(a in arb_series()) {
        let once = canonicalize(&a);
        let twice = canonicalize(&once);
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn empty_inputs_merge_to_empty() {
    let merged = merge_series(&[] as &[TimePoint], &[] as &[TimePoint]);
    assert!(merged.is_empty());
    assert!(merged.values_a.is_empty());
    assert!(merged.values_b.is_empty());
}

#[test]
fn one_empty_side_is_all_absent() {
    let a = vec![TimePoint::new("2025-08-01", 1.0), TimePoint::new("2025-08-02", 2.0)];
    let merged = merge_series(&a, &[] as &[TimePoint]);
    assert_eq!(merged.values_a, vec![Some(1.0), Some(2.0)]);
    assert_eq!(merged.values_b, vec![None, None]);
}

#[test]
fn timestamps_on_same_day_share_a_label() {
    let actual = vec![TimePoint::new("2025-08-15", 100.0)];
    let predicted = vec![TimePoint::new("2025-08-15T18:45:00Z", 101.0)];
    let merged = merge_series(&actual, &predicted);
    assert_eq!(merged.labels, vec![NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()]);
    assert_eq!(merged.values_a, vec![Some(100.0)]);
    assert_eq!(merged.values_b, vec![Some(101.0)]);
}

#[test]
fn unparseable_dates_are_dropped_not_fatal() {
    let a = vec![
        TimePoint::new("2025-08-01".to_string(), 1.0),
        TimePoint::new("not-a-date".to_string(), 2.0),
        TimePoint::new("2025-08-03".to_string(), 3.0),
    ];
    let b = vec![TimePoint::new(String::new(), 9.0)];
    let merged = merge_series(&a, &b);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged.values_a, vec![Some(1.0), Some(3.0)]);
    assert_eq!(merged.values_b, vec![None, None]);
}

#[test]
fn absent_value_never_erases_present_one() {
    let a = vec![
        TimePoint::new("2025-08-01", 5.0),
        TimePoint::empty("2025-08-01"),
        TimePoint::new("2025-08-02", f64::NAN),
    ];
    let merged = merge_series(&a, &[] as &[TimePoint]);
    assert_eq!(merged.values_a, vec![Some(5.0), None]);
}

#[test]
fn later_present_value_wins_on_same_day() {
    let a = vec![
        TimePoint::new("2025-08-01T09:00:00", 1.0),
        TimePoint::new("2025-08-01T21:00:00", 2.0),
    ];
    let out = canonicalize(&a);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].value, Some(2.0));
}

#[test]
fn inputs_are_not_mutated() {
    let a = vec![TimePoint::new("2025-08-02", 2.0), TimePoint::new("2025-08-01", 1.0)];
    let before = a.clone();
    let _ = merge_series(&a, &a);
    assert_eq!(a, before);
}
