use std::sync::Arc;
use std::thread;

use roomsweep::batch::{run_batch, Mode};
use roomsweep::{assign_rooms, minimum_rooms, Span};

const M: i64 = 60_000; // 1 minute in ms

// ── Test infrastructure ──────────────────────────────────────

/// A set of `n` staggered meetings, each `overlap + 1` wide, so exactly
/// `overlap + 1` rooms are needed.
fn staggered(n: usize, overlap: i64, offset: i64) -> Vec<Span> {
    (0..n as i64)
        .map(|i| Span::new(offset + i * M, offset + (i + overlap + 1) * M))
        .collect()
}

// ── Tests ────────────────────────────────────────────────────

#[test]
fn threads_with_disjoint_inputs_do_not_interfere() {
    let inputs: Vec<Arc<Vec<Span>>> = (0..8)
        .map(|k| Arc::new(staggered(500, k as i64, k as i64 * 1_000 * M)))
        .collect();

    let expected: Vec<_> = inputs
        .iter()
        .map(|events| assign_rooms(events).unwrap())
        .collect();

    let handles: Vec<_> = inputs
        .iter()
        .cloned()
        .map(|events| {
            thread::spawn(move || {
                (0..20)
                    .map(|_| assign_rooms(&events).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (k, handle) in handles.into_iter().enumerate() {
        let runs = handle.join().unwrap();
        for run in runs {
            assert_eq!(run, expected[k]);
            assert_eq!(run.room_count, k + 1);
            assert_eq!(minimum_rooms(&inputs[k]).unwrap(), k + 1);
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn batch_matches_sequential_results() {
    let sets: Vec<Vec<Span>> = (0..16).map(|k| staggered(100 + k, (k % 5) as i64, 0)).collect();
    let sequential: Vec<_> = sets.iter().map(|s| assign_rooms(s).unwrap()).collect();

    let reports = run_batch(sets, Mode::Assign, 4).await;
    assert_eq!(reports.len(), 16);
    for (k, report) in reports.iter().enumerate() {
        assert_eq!(report.set, k);
        assert_eq!(report.rooms, Some(sequential[k].room_count));
        assert_eq!(report.assignment.as_ref(), Some(&sequential[k].rooms));
    }
}

#[tokio::test]
async fn batch_count_mode_reports_rooms_only() {
    let reports = run_batch(
        vec![vec![Span::new(0, 30), Span::new(5, 10), Span::new(15, 20)]],
        Mode::Count,
        1,
    )
    .await;
    assert_eq!(reports[0].rooms, Some(2));
    assert!(reports[0].assignment.is_none());
}
