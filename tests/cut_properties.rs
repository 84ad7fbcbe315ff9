use dp_tables::{min_cut_cost, problems::cut::CutProblem, DpError, TableEngine};
use proptest::prelude::*;

/// Try every order of performing the cuts and keep the cheapest.
fn brute_force(length: usize, cuts: &[usize]) -> u64 {
    fn go(segments: &mut Vec<(usize, usize)>, remaining: &mut Vec<usize>) -> u64 {
        if remaining.is_empty() {
            return 0;
        }
        let mut best = u64::MAX;
        for idx in 0..remaining.len() {
            let cut = remaining.remove(idx);
            let seg_idx = segments
                .iter()
                .position(|&(a, b)| a < cut && cut < b)
                .expect("cut falls inside a segment");
            let (a, b) = segments.remove(seg_idx);
            segments.push((a, cut));
            segments.push((cut, b));

            let cost = (b - a) as u64 + go(segments, remaining);
            best = best.min(cost);

            segments.pop();
            segments.pop();
            segments.insert(seg_idx, (a, b));
            remaining.insert(idx, cut);
        }
        best
    }
    go(&mut vec![(0, length)], &mut cuts.to_vec())
}

#[test]
fn golden_twenty_three_ten_twelve_fifteen() {
    assert_eq!(min_cut_cost(20, &[3, 10, 12, 15]), Ok(45));
    assert_eq!(brute_force(20, &[3, 10, 12, 15]), 45);
}

#[test]
fn empty_cut_list_is_free_for_any_length() {
    for n in [0, 1, 2, 20, 1_000] {
        assert_eq!(min_cut_cost(n, &[]), Ok(0));
    }
}

#[test]
fn adjacent_cuts() {
    // every unit position of a line of 10
    let cuts: Vec<usize> = (1..10).collect();
    assert_eq!(min_cut_cost(10, &cuts), Ok(34));
    assert_eq!(min_cut_cost(7, &[1, 3, 4, 5]), Ok(16));
}

#[test]
fn endpoint_cuts_are_free() {
    assert_eq!(min_cut_cost(20, &[0, 3, 10, 12, 15, 20]), Ok(45));
    assert_eq!(min_cut_cost(5, &[5]), Ok(0));
    assert_eq!(min_cut_cost(5, &[0]), Ok(0));
}

#[test]
fn out_of_range_cut_fails_fast() {
    assert_eq!(
        min_cut_cost(20, &[3, 21]),
        Err(DpError::CutOutOfRange { cut: 21, length: 20 })
    );
}

#[test]
fn overflowing_worst_case_fails_fast() {
    assert_eq!(
        min_cut_cost(usize::MAX, &[1, 2, 3]),
        Err(DpError::CostOverflow { problem: "cut" })
    );
    // one cut costs the whole line, which still fits
    assert_eq!(min_cut_cost(usize::MAX, &[1]), Ok(usize::MAX as u64));
    assert_eq!(min_cut_cost(usize::MAX, &[]), Ok(0));
}

#[test]
fn rerunning_is_idempotent() {
    let engine = TableEngine::new(CutProblem::new(9, &[5, 6, 1, 4, 2]).unwrap());
    let first = engine.solve();
    let second = engine.solve();
    assert_eq!(first.cost, 22);
    assert_eq!(first.cost, second.cost);
    assert_eq!(first.table, second.table);
    assert_eq!(first.path, second.path);
}

fn cut_instance() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (2usize..40).prop_flat_map(|n| {
        (
            Just(n),
            proptest::sample::subsequence((1..n).collect::<Vec<_>>(), 0..(n - 1).min(6)),
        )
    })
}

proptest! {
    #[test]
    fn matches_exhaustive_cut_orders((n, cuts) in cut_instance()) {
        prop_assert_eq!(min_cut_cost(n, &cuts).unwrap(), brute_force(n, &cuts));
    }

    #[test]
    fn input_order_does_not_matter(
        (n, cuts, shuffled) in cut_instance()
            .prop_flat_map(|(n, cuts)| (Just(n), Just(cuts.clone()), Just(cuts).prop_shuffle()))
    ) {
        prop_assert_eq!(min_cut_cost(n, &cuts), min_cut_cost(n, &shuffled));
    }

    #[test]
    fn plan_replays_to_the_optimum((n, cuts) in cut_instance()) {
        let (cost, plan) = TableEngine::new(CutProblem::new(n, &cuts).unwrap()).run();
        prop_assert_eq!(plan.len(), cuts.len());
        prop_assert_eq!(plan.iter().map(|s| s.cost).sum::<u64>(), cost);
        for step in &plan {
            prop_assert!(step.segment.0 < step.position && step.position < step.segment.1);
            prop_assert_eq!(step.cost, (step.segment.1 - step.segment.0) as u64);
        }
    }
}
