//! Integration tests for the algorithm library: sortedness, permutation,
//! counter contracts, trace shape, cancellation, and degenerate inputs.

use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use sortscope_engine::{
    AlgorithmId, CancelToken, EngineError, PacingCell, RunCounters, SequenceStore, TraceChannel,
    TraceEvent, trace::HighlightKind,
};

struct RunOutput {
    result: Result<(), EngineError>,
    sorted: Vec<u32>,
    events: Vec<TraceEvent>,
    comparisons: u64,
    swaps: u64,
}

/// Drive one algorithm headlessly (zero pacing) over `values`.
fn run(id: AlgorithmId, values: Vec<u32>) -> RunOutput {
    let store = SequenceStore::new(values);
    let (tx, rx) = mpsc::channel();
    let counters = Arc::new(RunCounters::new());
    let mut channel = TraceChannel::new(
        store.clone(),
        tx,
        counters.clone(),
        CancelToken::new(),
        PacingCell::new(Duration::ZERO),
    );
    let result = id.run(&mut channel);
    RunOutput {
        result,
        sorted: store.snapshot(),
        events: rx.try_iter().collect(),
        comparisons: counters.comparisons(),
        swaps: counters.swaps(),
    }
}

fn assert_sorted_permutation(id: AlgorithmId, input: &[u32], output: &[u32]) {
    assert!(
        output.windows(2).all(|w| w[0] <= w[1]),
        "{id}: output not ascending: {output:?}"
    );
    let mut expected = input.to_vec();
    expected.sort_unstable();
    let mut actual = output.to_vec();
    actual.sort_unstable();
    assert_eq!(actual, expected, "{id}: output is not a permutation of the input");
}

const FIXTURES: &[&[u32]] = &[
    &[5, 3, 8, 1],
    &[1, 2, 3, 4, 5, 6],
    &[9, 8, 7, 6, 5, 4, 3, 2, 1],
    &[42],
    &[7, 7, 7, 7],
    &[13, 170, 45, 75, 90, 802, 24, 2, 66],
    &[300, 10, 300, 10, 155],
];

#[test]
fn every_algorithm_sorts_every_fixture() {
    for id in AlgorithmId::ALL {
        for input in FIXTURES {
            let out = run(id, input.to_vec());
            assert_eq!(out.result, Ok(()), "{id} failed on {input:?}");
            assert_sorted_permutation(id, input, &out.sorted);
        }
    }
}

#[test]
fn comparison_sorts_accept_empty_input() {
    for id in AlgorithmId::ALL.into_iter().filter(|id| !id.requires_value_range()) {
        let out = run(id, vec![]);
        assert_eq!(out.result, Ok(()), "{id} should no-op on empty input");
        assert!(out.events.is_empty(), "{id} emitted events for empty input");
        assert_eq!(out.comparisons, 0);
        assert_eq!(out.swaps, 0);
    }
}

#[test]
fn range_sorts_reject_empty_input() {
    for id in [AlgorithmId::Counting, AlgorithmId::Radix, AlgorithmId::Bucket] {
        let out = run(id, vec![]);
        assert!(
            matches!(out.result, Err(EngineError::InvalidInput(_))),
            "{id} must report InvalidInput on empty input, got {:?}",
            out.result
        );
        assert!(out.events.is_empty(), "{id}: failure must not be a silent partial run");
    }
}

#[test]
fn singletons_sort_without_swaps() {
    for id in AlgorithmId::ALL {
        let out = run(id, vec![42]);
        assert_eq!(out.result, Ok(()), "{id} failed on a singleton");
        assert_eq!(out.sorted, vec![42]);
        // Distribution sorts stage/concatenate their single element;
        // comparison sorts must not move anything.
        if !id.requires_value_range() {
            assert_eq!(out.swaps, 0, "{id} swapped a singleton");
        }
    }
}

#[test]
fn bubble_scenario_counts_exactly() {
    // 6 comparisons (3+2+1) and one swap per inversion; [5,3,8,1] has the
    // four inversions (5,3), (5,1), (3,1), (8,1).
    let out = run(AlgorithmId::Bubble, vec![5, 3, 8, 1]);
    assert_eq!(out.sorted, vec![1, 3, 5, 8]);
    assert_eq!(out.comparisons, 6);
    assert_eq!(out.swaps, 4);
}

#[test]
fn selection_comparison_count_is_input_independent() {
    for input in FIXTURES {
        let n = input.len() as u64;
        let out = run(AlgorithmId::Selection, input.to_vec());
        assert_eq!(
            out.comparisons,
            n * (n - 1) / 2,
            "selection must compare exactly n(n-1)/2 times on {input:?}"
        );
    }
}

#[test]
fn quick_first_partition_pivots_on_the_last_element() {
    let out = run(AlgorithmId::Quick, vec![5, 3, 8, 1]);
    assert_eq!(out.sorted, vec![1, 3, 5, 8]);

    // Pivot 1 at index 3: marker first, then three comparisons that all
    // fail (nothing is below the pivot), then the pivot swap into slot 0.
    assert_eq!(
        out.events[0],
        TraceEvent::Highlight { index: 3, kind: HighlightKind::Pivot }
    );
    for (offset, j) in (0..3).enumerate() {
        assert_eq!(
            out.events[1 + offset],
            TraceEvent::Compare { i: 3, j, descending: false }
        );
    }
    assert_eq!(out.events[4], TraceEvent::Swap { i: 0, j: 3 });
}

#[test]
fn merge_counts_main_loop_placements_but_not_tail_copies() {
    // lower=[2], upper=[1]: one compared placement, one tail copy.
    let out = run(AlgorithmId::Merge, vec![2, 1]);
    assert_eq!(out.sorted, vec![1, 2]);
    assert_eq!(out.comparisons, 1);
    assert_eq!(out.swaps, 1);
    assert_eq!(
        out.events,
        vec![
            TraceEvent::Write { index: 0, value: 1 },
            TraceEvent::Write { index: 1, value: 2 },
        ]
    );
}

#[test]
fn counting_tallies_every_phase_into_the_counters() {
    let out = run(AlgorithmId::Counting, vec![5, 3, 8, 1]);
    assert_eq!(out.sorted, vec![1, 3, 5, 8]);
    // One observe per element in the tally, one stage per element in the
    // output build; copy-back writes are uncounted.
    assert_eq!(out.comparisons, 4);
    assert_eq!(out.swaps, 4);
}

#[test]
fn counting_rejects_a_pathological_value_span() {
    // A span this wide would need one counter per possible value; the
    // guard reports it instead of attempting the allocation.
    let out = run(AlgorithmId::Counting, vec![0, u32::MAX]);
    assert!(
        matches!(out.result, Err(EngineError::InvalidInput(_))),
        "expected InvalidInput, got {:?}",
        out.result
    );
    assert!(out.events.is_empty(), "span rejection must precede any phase");
}

#[test]
fn radix_runs_one_pass_per_digit_of_the_maximum() {
    let input = vec![170, 45, 75, 90];
    let out = run(AlgorithmId::Radix, input.clone());
    assert_sorted_permutation(AlgorithmId::Radix, &input, &out.sorted);
    // max 170 has three digits: three passes of n observes + n stages.
    assert_eq!(out.comparisons, 12);
    assert_eq!(out.swaps, 12);
}

#[test]
fn bucket_places_every_element_exactly_once() {
    let input = vec![13, 170, 45, 75, 90, 802, 24, 2, 66];
    let out = run(AlgorithmId::Bucket, input.clone());
    assert_sorted_permutation(AlgorithmId::Bucket, &input, &out.sorted);
    assert_eq!(out.comparisons, input.len() as u64);
    assert_eq!(out.swaps, input.len() as u64);
}

/// Replay swaps over decorated elements to observe stability directly.
/// Only valid for algorithms whose every mutation is a `Swap` event.
fn replay_swaps_stably(input: &[u32], events: &[TraceEvent]) -> Vec<(u32, usize)> {
    let mut shadow: Vec<(u32, usize)> = input.iter().copied().zip(0..).collect();
    for event in events {
        if let TraceEvent::Swap { i, j } = event {
            shadow.swap(*i, *j);
        }
    }
    shadow
}

#[test]
fn bubble_and_insertion_are_stable_under_replay() {
    let input = vec![30, 10, 30, 10, 20, 10];
    for id in [AlgorithmId::Bubble, AlgorithmId::Insertion] {
        let out = run(id, input.clone());
        let shadow = replay_swaps_stably(&input, &out.events);
        assert!(shadow.windows(2).all(|w| w[0].0 <= w[1].0), "{id}: replay not sorted");
        assert!(
            shadow
                .windows(2)
                .all(|w| w[0].0 != w[1].0 || w[0].1 < w[1].1),
            "{id}: equal elements were reordered: {shadow:?}"
        );
    }
}

#[test]
fn pre_cancelled_token_aborts_before_any_event() {
    let token = CancelToken::new();
    token.cancel();
    let (tx, rx) = mpsc::channel();
    let mut channel = TraceChannel::new(
        SequenceStore::new(vec![3, 1, 2]),
        tx,
        Arc::new(RunCounters::new()),
        token,
        PacingCell::new(Duration::ZERO),
    );
    for id in AlgorithmId::ALL {
        assert_eq!(id.run(&mut channel), Err(EngineError::Cancelled), "{id}");
    }
    assert!(rx.try_iter().next().is_none());
}

#[test]
fn mid_run_cancellation_stops_the_event_stream() {
    let store = SequenceStore::new((1..=40).rev().collect());
    let (tx, rx) = mpsc::channel();
    let token = CancelToken::new();
    let mut channel = TraceChannel::new(
        store,
        tx,
        Arc::new(RunCounters::new()),
        token.clone(),
        PacingCell::new(Duration::from_millis(1)),
    );

    let worker = thread::spawn(move || AlgorithmId::Bubble.run(&mut channel));

    // Let a few steps through, then trip the token.
    let first = rx.recv_timeout(Duration::from_secs(5));
    assert!(first.is_ok(), "run produced no events");
    token.cancel();
    assert_eq!(worker.join().unwrap(), Err(EngineError::Cancelled));

    // Whatever was emitted before the abort drains; nothing follows.
    let drained: Vec<_> = rx.try_iter().collect();
    thread::sleep(Duration::from_millis(20));
    assert!(rx.try_iter().next().is_none(), "events after cancellation");
    // Far fewer events than a full bubble run over 40 reversed elements.
    assert!((drained.len() as u64) < 40 * 39, "cancellation did not cut the run short");
}
