//! Floyd–Warshall all-pairs shortest paths on a distance matrix. Only
//! improvements are recorded as steps (a full n³ compare log would drown the
//! animation); each intermediate node k gets a marker step.

use serde::Deserialize;
use stepviz_core::{Action, MatrixView, Recorder, Ref, Step, Trace};

use super::check_node;
use crate::error::InputError;

fn default_directed() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct FloydWarshallInput {
    pub n: usize,
    pub edges: Vec<(usize, usize, i64)>,
    #[serde(default = "default_directed")]
    pub directed: bool,
}

pub fn run(input: &FloydWarshallInput) -> Result<Trace, InputError> {
    let n = input.n;
    for &(from, to, _) in &input.edges {
        check_node(from, n)?;
        check_node(to, n)?;
    }

    // None = unreachable
    let mut dist: Vec<Vec<Option<i64>>> = vec![vec![None; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for &(from, to, weight) in &input.edges {
        let keep_smaller = |cell: &mut Option<i64>| match *cell {
            Some(current) if current <= weight => {}
            _ => *cell = Some(weight),
        };
        keep_smaller(&mut dist[from][to]);
        if !input.directed {
            keep_smaller(&mut dist[to][from]);
        }
    }

    let mut rec = Recorder::new();
    rec.push(
        Step::new(
            MatrixView::opt_ints(&dist),
            format!("distance matrix seeded with {} direct edges", input.edges.len()),
        )
        .action(Action::Visit),
    );

    for k in 0..n {
        rec.push(
            Step::new(
                MatrixView::opt_ints(&dist),
                format!("allow paths through intermediate node {k}"),
            )
            .action(Action::Visit)
            .highlight(Ref::Cell { row: k, col: k })
            .pointer("k", k as i64),
        );
        for i in 0..n {
            for j in 0..n {
                let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) else {
                    continue;
                };
                // a combined length outside i64 cannot be a recorded distance
                let Some(through) = ik.checked_add(kj) else {
                    continue;
                };
                let improved = match dist[i][j] {
                    Some(direct) => through < direct,
                    None => true,
                };
                if improved {
                    dist[i][j] = Some(through);
                    rec.push(
                        Step::new(
                            MatrixView::opt_ints(&dist),
                            format!("path {i} -> {k} -> {j} shortens dist[{i}][{j}] to {through}"),
                        )
                        .action(Action::Insert)
                        .highlight(Ref::Cell { row: i, col: j })
                        .secondary(Ref::Cell { row: i, col: k })
                        .secondary(Ref::Cell { row: k, col: j })
                        .pointer("k", k as i64),
                    );
                }
            }
        }
    }

    // -1 marks unreachable pairs in the answer
    let result: Vec<Vec<i64>> = dist
        .iter()
        .map(|row| row.iter().map(|d| d.unwrap_or(-1)).collect())
        .collect();
    Ok(rec.finish(
        Step::new(MatrixView::opt_ints(&dist), "all pairs settled"),
        result,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepviz_core::ResultValue;

    fn result_matrix(input: &FloydWarshallInput) -> Vec<Vec<i64>> {
        let trace = run(input).unwrap();
        trace.check_invariants().unwrap();
        match trace.result() {
            Some(ResultValue::IntListList(m)) => m.clone(),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_directed_all_pairs() {
        let input = FloydWarshallInput {
            n: 4,
            edges: vec![(0, 1, 5), (1, 2, 3), (0, 2, 10), (2, 3, 1)],
            directed: true,
        };
        assert_eq!(
            result_matrix(&input),
            vec![
                vec![0, 5, 8, 9],
                vec![-1, 0, 3, 4],
                vec![-1, -1, 0, 1],
                vec![-1, -1, -1, 0],
            ]
        );
    }

    #[test]
    fn test_undirected_matrix_is_symmetric() {
        let input = FloydWarshallInput {
            n: 3,
            edges: vec![(0, 1, 2), (1, 2, 4)],
            directed: false,
        };
        let m = result_matrix(&input);
        assert_eq!(m, vec![vec![0, 2, 6], vec![2, 0, 4], vec![6, 4, 0]]);
    }

    #[test]
    fn test_parallel_edges_keep_the_cheaper() {
        let input = FloydWarshallInput {
            n: 2,
            edges: vec![(0, 1, 9), (0, 1, 4)],
            directed: true,
        };
        assert_eq!(result_matrix(&input)[0][1], 4);
    }

    #[test]
    fn test_huge_weights_do_not_overflow() {
        let input = FloydWarshallInput {
            n: 3,
            edges: vec![(0, 1, i64::MAX), (1, 2, i64::MAX)],
            directed: true,
        };
        let m = result_matrix(&input);
        assert_eq!(m[0][1], i64::MAX);
        // the two-hop path is longer than any representable distance
        assert_eq!(m[0][2], -1);
    }

    #[test]
    fn test_improvement_steps_carry_the_intermediate() {
        let input = FloydWarshallInput {
            n: 3,
            edges: vec![(0, 1, 1), (1, 2, 1), (0, 2, 5)],
            directed: true,
        };
        let trace = run(&input).unwrap();
        let improvement = trace
            .steps()
            .iter()
            .find(|s| s.action == Some(Action::Insert))
            .unwrap();
        assert_eq!(improvement.pointers.get("k"), Some(&1));
    }
}
