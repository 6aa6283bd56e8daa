use proptest::prelude::*;
use regex::Regex;

use super::*;
use crate::{Rex, tokens};

fn anchored(from: i64, to: i64) -> Regex {
    Rex::new(tokens![chars::begin(), number_range(from, to), chars::end()]).must_compile()
}

fn assert_range(from: i64, to: i64, margin: i64) {
    let re = anchored(from, to);
    let (lo, hi) = if from > to { (to, from) } else { (from, to) };
    for n in lo.saturating_sub(margin)..=hi.saturating_add(margin) {
        assert_eq!(
            re.is_match(&n.to_string()),
            (lo..=hi).contains(&n),
            "{n} in {lo}..={hi}, pattern {re}"
        );
    }
}

#[test]
fn scenarios() {
    assert_range(50, 1230, 100);
    assert_range(250, 250, 100);
    assert_range(250, 255, 100);
    assert_range(999, 1000, 100);
    assert_range(1001, 1768, 100);
    assert_range(-123, 456, 100);
    assert_range(-456, 123, 100);
    assert_range(-456, -100, 100);
    assert_range(-1, 1, 100);
    assert_range(0, 0, 100);
    assert_range(i64::from(i32::MAX) - 20, i64::from(i32::MAX) - 10, 1000);
}

#[test]
fn every_small_range() {
    for from in -100..=100 {
        for to in from..=100 {
            assert_range(from, to, 100);
        }
    }
}

#[test]
fn reversed_bounds_are_swapped() {
    assert_eq!(number_range(1230, 50), number_range(50, 1230));
    assert_eq!(number_range(5, -3), number_range(-3, 5));
    assert_range(100, -100, 50);
}

#[test]
fn single_value() {
    assert_eq!(number_range(250, 250).to_string(), "250");
    assert_eq!(number_range(-7, -7).to_string(), r"(?:\-7)");
    let re = anchored(250, 250);
    assert!(re.is_match("250"));
    for rejected in ["249", "251", "0250", "25", "2500"] {
        assert!(!re.is_match(rejected), "{rejected}");
    }
}

#[test]
fn sign_straddling() {
    let re = anchored(-3, 5);
    for n in -3..=5 {
        assert!(re.is_match(&n.to_string()), "{n}");
    }
    for rejected in ["-4", "6", "-0", "--1", "+1", "-"] {
        assert!(!re.is_match(rejected), "{rejected}");
    }
}

#[test]
fn scenario_accept_and_reject_sets() {
    let re = anchored(50, 1230);
    for accepted in ["50", "99", "100", "999", "1000", "1199", "1229", "1230"] {
        assert!(re.is_match(accepted), "{accepted}");
    }
    for rejected in ["49", "1231", "050", "5", "12300"] {
        assert!(!re.is_match(rejected), "{rejected}");
    }

    let re = anchored(-456, 123);
    for accepted in ["-456", "-100", "-1", "0", "99", "123"] {
        assert!(re.is_match(accepted), "{accepted}");
    }
    for rejected in ["-457", "124", "-0", "-0456"] {
        assert!(!re.is_match(rejected), "{rejected}");
    }

    let re = anchored(999, 1000);
    assert!(re.is_match("999"));
    assert!(re.is_match("1000"));
    assert!(!re.is_match("998"));
    assert!(!re.is_match("1001"));
}

#[test]
fn leading_zeros_are_left_to_the_caller() {
    let no_leading = anchored(1, 100);
    assert!(no_leading.is_match("1"));
    assert!(!no_leading.is_match("001"));
    assert!(!no_leading.is_match("101"));

    let leading = Rex::new(tokens![
        chars::begin(),
        group::non_captured(tokens![
            chars::single('0').repeat().zero_or_more(),
            number_range(1, 100),
        ]),
        chars::end(),
    ])
    .must_compile();
    assert!(leading.is_match("099"));
    assert!(leading.is_match("000099"));
    assert!(leading.is_match("99"));
    assert!(!leading.is_match("101"));
}

#[test]
fn extremes() {
    assert_range(i64::MIN, i64::MIN + 5, 20);
    assert_range(i64::MAX - 5, i64::MAX, 20);
    assert_range(i64::MIN, i64::MIN, 20);

    let re = anchored(i64::MIN, i64::MAX);
    for accepted in ["0", "-1", "-9223372036854775808", "9223372036854775807", "1000000000000000000"] {
        assert!(re.is_match(accepted), "{accepted}");
    }
    for rejected in ["-9223372036854775809", "9223372036854775808", "-0", "00", "10000000000000000000"] {
        assert!(!re.is_match(rejected), "{rejected}");
    }
}

#[test]
fn steps_split_at_digit_widths() {
    let seg = |lo, hi| Segment::new(lo, hi);
    assert_eq!(
        steps(0, 255),
        [seg(0, 9), seg(10, 99), seg(100, 199), seg(200, 249), seg(250, 255)]
    );
    assert_eq!(
        steps(50, 1230),
        [
            seg(50, 99),
            seg(100, 999),
            seg(1000, 1199),
            seg(1200, 1229),
            seg(1230, 1230)
        ]
    );
    assert_eq!(steps(7, 7), [seg(7, 7)]);
    assert!(steps(8, 7).is_empty());
}

#[test]
fn steps_coalesce_zero_padded_starts() {
    let seg = |lo, hi| Segment::new(lo, hi);
    assert_eq!(steps(100, 456), [seg(100, 399), seg(400, 449), seg(450, 456)]);
    assert_eq!(steps(100, 299), [seg(100, 299)]);
    assert_eq!(steps(1000, 9999), [seg(1000, 9999)]);
}

#[test]
fn steps_cover_the_range_contiguously() {
    for (from, to) in [(0, 999_999), (13, 98_765), (1, u64::MAX), (1u64 << 63, u64::MAX)] {
        let segments = steps(from, to);
        assert_eq!(segments.first().map(|s| s.lo), Some(from));
        assert_eq!(segments.last().map(|s| s.hi), Some(to));
        for pair in segments.windows(2) {
            assert_eq!(pair[0].hi + 1, pair[1].lo, "{pair:?}");
        }
        for s in &segments {
            assert!(is_uniform(s.lo, s.hi) || s.lo == s.hi, "{s:?}");
        }
    }
}

#[test]
fn branch_count_follows_digit_width() {
    assert!(steps(0, 999_999).len() <= 6);
    assert!(steps(0, u64::MAX).len() <= 2 * 20);
    assert!(steps(123_456, 987_654).len() <= 2 * 6);
}

#[test]
fn segment_fragments() {
    assert_eq!(segment(7, 7).to_string(), "7");
    assert_eq!(segment(0, 9).to_string(), "(?:[0-9])");
    assert_eq!(segment(10, 99).to_string(), "(?:[1-9][0-9])");
    assert_eq!(segment(1200, 1229).to_string(), "(?:12[0-2][0-9])");
    assert_eq!(segment(250, 255).to_string(), "(?:25[0-5])");
}

#[test]
fn compose_elides_single_alternation() {
    assert_eq!(compose(&[Segment::new(250, 255)]).to_string(), "(?:25[0-5])");
    assert_eq!(
        compose(&[Segment::new(8, 9), Segment::new(10, 12)]).to_string(),
        "(?:(?:[8-9])|(?:1[0-2]))"
    );
}

#[test]
fn synthesizer_reuse_matches_fresh_calls() {
    let mut synth = RangeSynthesizer::new();
    for (from, to) in [(0, 255), (-456, 123), (7, 7), (999, 1000), (-456, -100)] {
        assert_eq!(synth.synthesize(from, to), number_range(from, to));
    }
}

proptest! {
    #[test]
    fn bounds_and_neighbours(from in any::<i64>(), to in any::<i64>(), probe in any::<i64>()) {
        let re = anchored(from, to);
        let (lo, hi) = if from > to { (to, from) } else { (from, to) };
        prop_assert!(re.is_match(&lo.to_string()));
        prop_assert!(re.is_match(&hi.to_string()));
        if let Some(below) = lo.checked_sub(1) {
            prop_assert!(!re.is_match(&below.to_string()));
        }
        if let Some(above) = hi.checked_add(1) {
            prop_assert!(!re.is_match(&above.to_string()));
        }
        prop_assert_eq!(re.is_match(&probe.to_string()), (lo..=hi).contains(&probe));
        let interior = lo + ((hi as i128 - lo as i128) / 2) as i64;
        prop_assert!(re.is_match(&interior.to_string()));
    }

    #[test]
    fn short_ranges_are_exact(from in -100_000i64..100_000, len in 0i64..300) {
        let re = anchored(from, from + len);
        for n in from - 50..=from + len + 50 {
            prop_assert_eq!(re.is_match(&n.to_string()), (from..=from + len).contains(&n));
        }
    }
}
