//! Cross-module properties of the core arithmetic.

use vortex_core::{
    CORE_CYCLE, DOUBLING, Family, Route, TRIAD, classify, digit_sum_root, doubling_sequence,
    is_member, patterns, reduce, reduce_wide, route, vortex_pair,
};

use crate::common::SAMPLE_INTEGERS;

#[test]
fn reduce_is_always_a_digit() {
    for n in SAMPLE_INTEGERS {
        assert!((1..=9).contains(&reduce(n).get()), "n = {n}");
    }
}

#[test]
fn reduce_reference_values() {
    assert_eq!(reduce(9).get(), 9);
    assert_eq!(reduce(18).get(), 9);
    assert_eq!(reduce(10).get(), 1);
    assert_eq!(reduce(1).get(), 1);
}

#[test]
fn digit_sum_agrees_with_modulo_on_non_negatives() {
    for n in SAMPLE_INTEGERS.into_iter().filter(|n| *n >= 0) {
        assert_eq!(digit_sum_root(n as u64), reduce(n), "n = {n}");
    }
}

#[test]
fn vortex_is_reduced_sum_for_all_pairs() {
    for a in SAMPLE_INTEGERS {
        for b in SAMPLE_INTEGERS {
            let pair = vortex_pair(a, b);
            let sum = i128::from(a) + i128::from(b);
            assert_eq!(pair.vortex(), reduce_wide(sum), "({a}, {b})");
            assert_eq!(pair.ratio().denominator(), i128::from(pair.vortex()));
        }
    }
}

#[test]
fn vortex_pair_of_one_and_two() {
    let pair = vortex_pair(1, 2);
    assert_eq!(pair.vortex().get(), 3);
    assert!((pair.ratio().value() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn membership_reference_values() {
    assert!(is_member(8, &CORE_CYCLE));
    assert!(!is_member(9, &CORE_CYCLE));
}

#[test]
fn every_digit_lands_in_exactly_one_family_pattern() {
    for n in SAMPLE_INTEGERS {
        let in_cycle = is_member(n, &CORE_CYCLE);
        let in_triad = is_member(n, &TRIAD);
        assert_ne!(in_cycle, in_triad, "n = {n}");
        assert_eq!(in_cycle, classify(n) == Family::Cycle, "n = {n}");
    }
}

#[test]
fn doubling_pattern_is_prefix_of_core_cycle() {
    assert_eq!(
        &CORE_CYCLE.digits()[..DOUBLING.digits().len()],
        DOUBLING.digits()
    );
    assert_eq!(doubling_sequence(1, 4), DOUBLING.digits().to_vec());
}

#[test]
fn registry_patterns_hold_only_digits() {
    for pattern in patterns() {
        assert!(!pattern.digits().is_empty(), "{}", pattern.name());
        for digit in pattern.digits() {
            assert!((1..=9).contains(&digit.get()));
        }
    }
}

#[test]
fn route_reference_values() {
    assert_eq!(route(10, 0, 5), Route::Wrapped(5));
    assert_eq!(route(10, 5, 0), Route::Divided(2));
    assert_eq!(route(10, 3, 0), Route::NoRoute);
    assert_eq!(route(10, 3, 0).to_sentinel(), -1);
}

#[test]
fn wrapped_routes_stay_below_ten() {
    for n in SAMPLE_INTEGERS {
        for m in SAMPLE_INTEGERS {
            match route(n, 0, m) {
                Route::Wrapped(v) => assert!((0..10).contains(&v), "({n}, 0, {m}) -> {v}"),
                other => panic!("zero divisor must wrap, got {other:?}"),
            }
        }
    }
}

#[test]
fn divided_routes_multiply_back() {
    for n in SAMPLE_INTEGERS {
        for d in [-9, -3, -1, 1, 2, 3, 9] {
            if let Route::Divided(q) = route(n, d, 0) {
                assert_eq!(q.checked_mul(d), Some(n), "({n}, {d})");
            }
        }
    }
}

#[test]
fn all_operations_are_repeatable() {
    for n in SAMPLE_INTEGERS {
        assert_eq!(reduce(n), reduce(n));
        assert_eq!(vortex_pair(n, 7), vortex_pair(n, 7));
        assert_eq!(is_member(n, &CORE_CYCLE), is_member(n, &CORE_CYCLE));
        assert_eq!(route(n, 3, 1), route(n, 3, 1));
    }
}
