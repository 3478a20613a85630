//! Five-number summary properties

use imchart_stats::{group_by, quantile_sorted, FiveNumberSummary, SortedSample};
use proptest::prelude::*;

#[test]
fn test_age_group_scenario() {
    let ages = ["Teen", "Adult", "Teen", "Senior"];
    let likes = [10.0, 20.0, 30.0, 5.0];

    let groups = group_by(ages.iter().zip(likes), |(a, _)| a.to_string(), |(_, l)| *l);
    assert_eq!(groups.len(), 3);

    let teen = FiveNumberSummary::from_data(groups.get(&"Teen".to_string()).unwrap()).unwrap();
    assert_eq!(
        (teen.min, teen.q1, teen.median, teen.q3, teen.max),
        (10.0, 15.0, 20.0, 25.0, 30.0)
    );

    let senior = FiveNumberSummary::from_data(groups.get(&"Senior".to_string()).unwrap()).unwrap();
    assert_eq!(senior.min, 5.0);
    assert_eq!(senior.max, 5.0);
    assert_eq!(senior.iqr(), 0.0);
}

proptest! {
    #[test]
    fn test_summary_is_ordered(data in prop::collection::vec(-1.0e6f64..1.0e6, 1..200)) {
        let summary = FiveNumberSummary::from_data(&data).unwrap();
        prop_assert!(summary.is_ordered(), "unordered summary: {:?}", summary);
    }

    #[test]
    fn test_single_element_collapses(x in -1.0e9f64..1.0e9) {
        let s = FiveNumberSummary::from_data(&[x]).unwrap();
        prop_assert_eq!(s.min, x);
        prop_assert_eq!(s.q1, x);
        prop_assert_eq!(s.median, x);
        prop_assert_eq!(s.q3, x);
        prop_assert_eq!(s.max, x);
    }

    #[test]
    fn test_quantile_monotone_in_p(
        data in prop::collection::vec(-1.0e3f64..1.0e3, 1..50),
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let sample = SortedSample::from_data(&data);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let q_lo = quantile_sorted(sample.values(), lo).unwrap();
        let q_hi = quantile_sorted(sample.values(), hi).unwrap();
        prop_assert!(q_lo <= q_hi);
    }
}
