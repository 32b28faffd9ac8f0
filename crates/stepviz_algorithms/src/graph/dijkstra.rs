//! Dijkstra's shortest paths from a single source. Requires non-negative edge
//! weights. Uses a real binary heap; ties between equal distances pop the
//! smaller node id first, so the trace is deterministic.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Deserialize;
use stepviz_core::{Action, GraphView, Recorder, Ref, Step, Trace};

use super::check_node;
use crate::error::InputError;

fn default_directed() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct DijkstraInput {
    pub n: usize,
    /// `(from, to, weight)` triples; weights must be non-negative.
    pub edges: Vec<(usize, usize, i64)>,
    pub source: usize,
    #[serde(default = "default_directed")]
    pub directed: bool,
}

/// Rebuild the view each step with the current tentative distance in every
/// node label, so the renderer shows the table evolving on the graph itself.
fn view_with_dists(input: &DijkstraInput, dist: &[Option<i64>]) -> GraphView {
    let mut view = GraphView::new(input.directed);
    for id in 0..input.n {
        let label = match dist[id] {
            Some(d) => format!("{id} (d={d})"),
            None => format!("{id} (d=inf)"),
        };
        view.add_node(id, label);
    }
    for &(from, to, weight) in &input.edges {
        view.add_weighted_edge(from, to, weight);
    }
    view
}

pub fn run(input: &DijkstraInput) -> Result<Trace, InputError> {
    let n = input.n;
    check_node(input.source, n)?;
    for &(from, to, weight) in &input.edges {
        check_node(from, n)?;
        check_node(to, n)?;
        if weight < 0 {
            return Err(InputError::NegativeWeight { from, to, weight });
        }
    }

    let mut adj: Vec<Vec<(usize, i64)>> = vec![Vec::new(); n];
    for &(from, to, weight) in &input.edges {
        adj[from].push((to, weight));
        if !input.directed {
            adj[to].push((from, weight));
        }
    }

    let mut dist: Vec<Option<i64>> = vec![None; n];
    dist[input.source] = Some(0);
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0i64, input.source)));

    let mut rec = Recorder::new();
    rec.push(
        Step::new(
            view_with_dists(input, &dist),
            format!("start at node {}: its distance is 0, every other node is unreached", input.source),
        )
        .action(Action::Push)
        .highlight(Ref::Node(input.source)),
    );

    while let Some(Reverse((d, u))) = heap.pop() {
        if settled[u] {
            // stale heap entry, nothing observable happens
            continue;
        }
        settled[u] = true;
        rec.push(
            Step::new(
                view_with_dists(input, &dist),
                format!("settle node {u} at distance {d}: no shorter path can appear"),
            )
            .action(Action::Visit)
            .highlight(Ref::Node(u)),
        );

        for &(v, w) in &adj[u] {
            if settled[v] {
                continue;
            }
            // a path longer than i64::MAX cannot improve any distance
            let Some(candidate) = d.checked_add(w) else {
                continue;
            };
            let improved = match dist[v] {
                Some(current) => candidate < current,
                None => true,
            };
            if improved {
                dist[v] = Some(candidate);
                heap.push(Reverse((candidate, v)));
                rec.push(
                    Step::new(
                        view_with_dists(input, &dist),
                        format!("relax edge {u} -> {v}: distance improves to {candidate}"),
                    )
                    .action(Action::Insert)
                    .highlight(Ref::Node(v))
                    .secondary(Ref::Node(u)),
                );
            } else {
                rec.push(
                    Step::new(
                        view_with_dists(input, &dist),
                        format!(
                            "relax edge {u} -> {v}: {candidate} is no better than {}",
                            dist[v].unwrap_or(i64::MAX)
                        ),
                    )
                    .action(Action::Compare)
                    .highlight(Ref::Node(v))
                    .secondary(Ref::Node(u)),
                );
            }
        }
    }

    // -1 marks unreachable nodes in the answer.
    let result: Vec<i64> = dist.iter().map(|d| d.unwrap_or(-1)).collect();
    Ok(rec.finish(
        Step::new(
            view_with_dists(input, &dist),
            "all reachable nodes settled, distances are final",
        ),
        result,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use stepviz_core::ResultValue;

    fn trace_result(input: &DijkstraInput) -> Vec<i64> {
        let trace = run(input).unwrap();
        trace.check_invariants().unwrap();
        match trace.result() {
            Some(ResultValue::IntList(v)) => v.clone(),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_directed_shortest_paths() {
        let input = DijkstraInput {
            n: 4,
            edges: vec![(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5)],
            source: 0,
            directed: true,
        };
        assert_eq!(trace_result(&input), vec![0, 3, 1, 4]);
    }

    #[test]
    fn test_unreachable_nodes_are_minus_one() {
        let input = DijkstraInput {
            n: 3,
            edges: vec![(0, 1, 7)],
            source: 0,
            directed: true,
        };
        assert_eq!(trace_result(&input), vec![0, 7, -1]);
    }

    #[test]
    fn test_undirected_edges_relax_both_ways() {
        let input = DijkstraInput {
            n: 3,
            edges: vec![(0, 1, 2), (1, 2, 3)],
            source: 2,
            directed: false,
        };
        assert_eq!(trace_result(&input), vec![5, 3, 0]);
    }

    #[rstest]
    #[case(vec![(0, 1, -4)])]
    #[case(vec![(0, 3, 1)])]
    fn test_bad_edges_are_rejected(#[case] edges: Vec<(usize, usize, i64)>) {
        assert!(
            run(&DijkstraInput {
                n: 3,
                edges,
                source: 0,
                directed: true
            })
            .is_err()
        );
    }

    #[test]
    fn test_huge_weights_do_not_overflow() {
        let input = DijkstraInput {
            n: 3,
            edges: vec![(0, 1, i64::MAX), (1, 2, i64::MAX)],
            source: 0,
            directed: true,
        };
        // the path to node 2 is longer than any representable distance
        assert_eq!(trace_result(&input), vec![0, i64::MAX, -1]);
    }

    #[test]
    fn test_settle_order_is_deterministic() {
        // nodes 1 and 2 end up at the same distance; the smaller id settles first
        let input = DijkstraInput {
            n: 3,
            edges: vec![(0, 2, 1), (0, 1, 1)],
            source: 0,
            directed: true,
        };
        let trace = run(&input).unwrap();
        let settles: Vec<&str> = trace
            .steps()
            .iter()
            .filter(|s| s.action == Some(Action::Visit))
            .map(|s| s.message.as_str())
            .collect();
        assert!(settles[1].starts_with("settle node 1"));
        assert!(settles[2].starts_with("settle node 2"));
    }
}
