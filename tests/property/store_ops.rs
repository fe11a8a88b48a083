//! Property-based tests for `TaskStore` operation sequences.
//!
//! Uses proptest to verify, over arbitrary Add/Complete/Delete
//! sequences:
//! 1. Ids are dense over successful adds and monotonically increasing.
//! 2. Listing preserves creation order, excluding deleted tasks.
//! 3. Failed operations never change the store.
//! 4. Complete is idempotent.

use proptest::prelude::*;

use taskdeck_core::{StoreError, TaskId, TaskStore};

/// A single store operation, as generated by proptest.
#[derive(Debug, Clone)]
enum Op {
    Add { title: String, description: String },
    Complete(u64),
    Delete(u64),
}

/// Strategy for arbitrary operations. Titles may be empty so that the
/// validation path is exercised; ids range past what a short sequence
/// can allocate so that both hits and misses occur.
fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        ("[a-z]{0,8}", "[a-z ]{0,12}")
            .prop_map(|(title, description)| Op::Add { title, description }),
        (1u64..24).prop_map(Op::Complete),
        (1u64..24).prop_map(Op::Delete),
    ]
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(arb_op(), 0..40)
}

proptest! {
    /// Every successful add is assigned `successes + 1`, regardless of
    /// interleaved failures, completions, and deletions.
    #[test]
    fn ids_are_dense_and_monotonic(ops in arb_ops()) {
        let mut store = TaskStore::new();
        let mut successes = 0u64;

        for op in ops {
            match op {
                Op::Add { title, description } => {
                    match store.add(&title, &description) {
                        Ok(task) => {
                            successes += 1;
                            prop_assert_eq!(task.id.get(), successes);
                        }
                        Err(e) => {
                            prop_assert_eq!(e, StoreError::TitleEmpty);
                            prop_assert!(title.is_empty());
                        }
                    }
                }
                Op::Complete(id) => {
                    let _ = store.complete(TaskId::from_raw(id));
                }
                Op::Delete(id) => {
                    let _ = store.remove(TaskId::from_raw(id));
                }
            }
        }

        prop_assert_eq!(store.next_id(), successes + 1);
    }

    /// The store agrees with a naive model: same surviving ids in the
    /// same creation order, with the same completion flags.
    #[test]
    fn listing_matches_naive_model(ops in arb_ops()) {
        let mut store = TaskStore::new();
        // Model: (id, completed) pairs in creation order.
        let mut model: Vec<(u64, bool)> = Vec::new();
        let mut next_id = 1u64;

        for op in ops {
            match op {
                Op::Add { title, description } => {
                    if store.add(&title, &description).is_ok() {
                        model.push((next_id, false));
                        next_id += 1;
                    }
                }
                Op::Complete(id) => {
                    let hit = model.iter_mut().find(|(mid, _)| *mid == id);
                    let result = store.complete(TaskId::from_raw(id));
                    match hit {
                        Some(entry) => {
                            entry.1 = true;
                            prop_assert!(result.is_ok());
                        }
                        None => prop_assert!(result.is_err()),
                    }
                }
                Op::Delete(id) => {
                    let pos = model.iter().position(|(mid, _)| *mid == id);
                    let result = store.remove(TaskId::from_raw(id));
                    match pos {
                        Some(p) => {
                            model.remove(p);
                            prop_assert!(result.is_ok());
                        }
                        None => prop_assert!(result.is_err()),
                    }
                }
            }
        }

        let actual: Vec<(u64, bool)> = store
            .tasks()
            .iter()
            .map(|t| (t.id.get(), t.completed))
            .collect();
        prop_assert_eq!(actual, model);
    }

    /// Operations on a missing id leave the store byte-for-byte intact.
    #[test]
    fn misses_never_mutate(ops in arb_ops(), probe in 1u64..64) {
        let mut store = TaskStore::new();
        for op in ops {
            match op {
                Op::Add { title, description } => {
                    let _ = store.add(&title, &description);
                }
                Op::Complete(id) => {
                    let _ = store.complete(TaskId::from_raw(id));
                }
                Op::Delete(id) => {
                    let _ = store.remove(TaskId::from_raw(id));
                }
            }
        }

        let id = TaskId::from_raw(probe);
        if store.tasks().iter().any(|t| t.id == id) {
            return Ok(());
        }

        let snapshot = store.tasks().to_vec();
        let counter = store.next_id();
        prop_assert_eq!(store.complete(id), Err(StoreError::TaskNotFound(id)));
        prop_assert_eq!(store.remove(id), Err(StoreError::TaskNotFound(id)));
        prop_assert_eq!(store.tasks(), snapshot.as_slice());
        prop_assert_eq!(store.next_id(), counter);
    }

    /// Completing a task twice yields the same state as completing once.
    #[test]
    fn complete_is_idempotent(titles in prop::collection::vec("[a-z]{1,8}", 1..8), pick in 0usize..8) {
        let mut store = TaskStore::new();
        for title in &titles {
            store.add(title, "").unwrap();
        }
        let idx = pick % titles.len();
        let id = store.tasks()[idx].id;

        store.complete(id).unwrap();
        let snapshot = store.tasks().to_vec();
        store.complete(id).unwrap();
        prop_assert_eq!(store.tasks(), snapshot.as_slice());
    }
}
