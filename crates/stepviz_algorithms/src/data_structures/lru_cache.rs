//! LRU cache simulation over an explicit operation sequence. The internal
//! order vector runs least-recently-used first, most-recently-used last, and
//! every snapshot shows the full order, so eviction is visible as the front
//! entry disappearing. Each `get` contributes its answer (value or -1) to the
//! final result list.

use serde::Deserialize;
use stepviz_core::{Action, Recorder, Ref, Scalar, Step, TableView, Trace};

use crate::error::InputError;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum LruOp {
    Put { key: String, value: i64 },
    Get { key: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct LruCacheInput {
    pub capacity: usize,
    pub operations: Vec<LruOp>,
}

/// LRU order first -> last, linear scan; fine for animation-sized inputs.
struct Cache {
    entries: Vec<(String, i64)>,
}

impl Cache {
    fn view(&self) -> TableView {
        TableView {
            entries: self
                .entries
                .iter()
                .map(|(k, v)| (k.clone(), Scalar::Int(*v)))
                .collect(),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

pub fn run(input: &LruCacheInput) -> Result<Trace, InputError> {
    if input.capacity == 0 {
        return Err(InputError::ZeroCapacity);
    }

    let mut cache = Cache { entries: Vec::new() };
    let mut rec = Recorder::new();
    let mut outputs: Vec<i64> = Vec::new();

    rec.push(
        Step::new(
            cache.view(),
            format!(
                "empty cache with capacity {}; least recent entries sit at the front",
                input.capacity
            ),
        )
        .action(Action::Visit),
    );

    for op in &input.operations {
        match op {
            LruOp::Get { key } => match cache.position(key) {
                Some(pos) => {
                    let (k, v) = cache.entries.remove(pos);
                    cache.entries.push((k, v));
                    outputs.push(v);
                    rec.push(
                        Step::new(
                            cache.view(),
                            format!("get \"{key}\" -> {v}; touching it makes it most recent"),
                        )
                        .action(Action::Visit)
                        .highlight(Ref::key(key.clone())),
                    );
                }
                None => {
                    outputs.push(-1);
                    rec.push(
                        Step::new(cache.view(), format!("get \"{key}\" -> miss (-1)"))
                            .action(Action::Compare),
                    );
                }
            },
            LruOp::Put { key, value } => {
                if let Some(pos) = cache.position(key) {
                    cache.entries.remove(pos);
                    cache.entries.push((key.clone(), *value));
                    rec.push(
                        Step::new(
                            cache.view(),
                            format!("put \"{key}\" = {value}: key exists, update and make most recent"),
                        )
                        .action(Action::Insert)
                        .highlight(Ref::key(key.clone())),
                    );
                    continue;
                }
                if cache.entries.len() == input.capacity {
                    // snapshot before the removal so the highlighted key is
                    // still present in the table
                    let full = cache.view();
                    let (evicted, _) = cache.entries.remove(0);
                    rec.push(
                        Step::new(
                            full,
                            format!("cache full: evict least recent \"{evicted}\""),
                        )
                        .action(Action::Delete)
                        .highlight(Ref::key(evicted)),
                    );
                }
                cache.entries.push((key.clone(), *value));
                rec.push(
                    Step::new(cache.view(), format!("put \"{key}\" = {value}"))
                        .action(Action::Insert)
                        .highlight(Ref::key(key.clone())),
                );
            }
        }
    }

    Ok(rec.finish(
        Step::new(
            cache.view(),
            format!("{} operations processed", input.operations.len()),
        ),
        outputs,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepviz_core::{ResultValue, Snapshot};

    fn put(key: &str, value: i64) -> LruOp {
        LruOp::Put { key: key.to_string(), value }
    }

    fn get(key: &str) -> LruOp {
        LruOp::Get { key: key.to_string() }
    }

    fn run_ops(capacity: usize, operations: Vec<LruOp>) -> Trace {
        let trace = run(&LruCacheInput { capacity, operations }).unwrap();
        trace.check_invariants().unwrap();
        trace
    }

    #[test]
    fn test_classic_sequence() {
        let trace = run_ops(
            2,
            vec![
                put("1", 1),
                put("2", 2),
                get("1"),
                put("3", 3), // evicts "2"
                get("2"),
                put("4", 4), // evicts "1"
                get("1"),
                get("3"),
                get("4"),
            ],
        );
        assert_eq!(
            trace.result(),
            Some(&ResultValue::IntList(vec![1, -1, -1, 3, 4]))
        );
    }

    #[test]
    fn test_touched_key_is_always_last() {
        let trace = run_ops(3, vec![put("a", 1), put("b", 2), get("a"), put("c", 3), get("b")]);
        for step in trace.steps() {
            let Snapshot::Table(table) = &step.state else {
                panic!("lru snapshots must be tables");
            };
            let touched = step.highlights.first();
            if let (Some(stepviz_core::Ref::Key(k)), Some((last, _))) =
                (touched, table.entries.last())
            {
                assert_eq!(k, last);
            }
        }
    }

    #[test]
    fn test_highlighted_keys_exist_in_their_snapshot() {
        let trace = run_ops(2, vec![put("a", 1), put("b", 2), put("c", 3), get("b")]);
        for step in trace.steps() {
            let Snapshot::Table(table) = &step.state else {
                panic!("lru snapshots must be tables");
            };
            for r in step.highlights.iter().chain(&step.secondary) {
                let stepviz_core::Ref::Key(k) = r else {
                    panic!("lru highlights must be keys");
                };
                assert!(
                    table.entries.iter().any(|(key, _)| key == k),
                    "highlighted key {k:?} missing from its snapshot"
                );
            }
        }
    }

    #[test]
    fn test_eviction_only_when_over_capacity() {
        let trace = run_ops(2, vec![put("a", 1), put("b", 2), put("a", 9), put("c", 3)]);
        let evictions: Vec<&str> = trace
            .steps()
            .iter()
            .filter(|s| s.action == Some(Action::Delete))
            .map(|s| s.message.as_str())
            .collect();
        // updating "a" must not evict; inserting "c" evicts "b"
        assert_eq!(evictions.len(), 1);
        assert!(evictions[0].contains("\"b\""));
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert!(matches!(
            run(&LruCacheInput { capacity: 0, operations: vec![] }),
            Err(InputError::ZeroCapacity)
        ));
    }
}
