//! Count connected components of an undirected graph with union-find. The
//! final count is invariant under any permutation of the edge list.

use serde::Deserialize;
use stepviz_core::{Action, Recorder, Ref, Step, Trace};

use super::union_find::UnionFind;
use super::{check_node, indexed_view};
use crate::error::InputError;

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectedComponentsInput {
    pub n: usize,
    pub edges: Vec<(usize, usize)>,
}

pub fn run(input: &ConnectedComponentsInput) -> Result<Trace, InputError> {
    let n = input.n;
    for &(a, b) in &input.edges {
        check_node(a, n)?;
        check_node(b, n)?;
    }

    let mut view = indexed_view(n, false);
    let mut uf = UnionFind::new(n);
    let mut rec = Recorder::new();

    rec.push(
        Step::new(
            view.clone(),
            format!("{n} isolated nodes form {n} components"),
        )
        .action(Action::Visit),
    );

    for &(a, b) in &input.edges {
        view.add_edge(a, b);
        if uf.union(a, b) {
            rec.push(
                Step::new(
                    view.clone(),
                    format!(
                        "edge ({a}, {b}) merges two components, {} remain",
                        uf.components()
                    ),
                )
                .action(Action::Insert)
                .highlight(Ref::Node(a))
                .highlight(Ref::Node(b)),
            );
        } else {
            rec.push(
                Step::new(
                    view.clone(),
                    format!("edge ({a}, {b}) connects nodes already in the same component"),
                )
                .action(Action::Compare)
                .highlight(Ref::Node(a))
                .secondary(Ref::Node(b)),
            );
        }
    }

    let count = uf.components();
    Ok(rec.finish(
        Step::new(view, format!("{count} connected components")),
        count as i64,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use stepviz_core::ResultValue;

    #[rstest]
    #[case(5, vec![(0, 1), (1, 2), (3, 4)], 2)]
    #[case(5, vec![(0, 1), (1, 2), (2, 3), (3, 4)], 1)]
    #[case(4, vec![], 4)]
    #[case(1, vec![], 1)]
    #[case(3, vec![(0, 1), (1, 0), (0, 1)], 2)]
    fn test_counts_components(
        #[case] n: usize,
        #[case] edges: Vec<(usize, usize)>,
        #[case] expected: i64,
    ) {
        let trace = run(&ConnectedComponentsInput { n, edges }).unwrap();
        assert_eq!(trace.result(), Some(&ResultValue::Int(expected)));
        trace.check_invariants().unwrap();
    }

    #[test]
    fn test_result_invariant_under_edge_permutation() {
        let edges = vec![(0, 1), (2, 3), (1, 2), (4, 5)];
        let mut rotated = edges.clone();
        rotated.rotate_left(2);
        let a = run(&ConnectedComponentsInput { n: 7, edges }).unwrap();
        let b = run(&ConnectedComponentsInput { n: 7, edges: rotated }).unwrap();
        assert_eq!(a.result(), b.result());
    }

    #[test]
    fn test_out_of_range_node_is_rejected() {
        let err = run(&ConnectedComponentsInput {
            n: 2,
            edges: vec![(0, 2)],
        })
        .unwrap_err();
        assert!(matches!(err, InputError::NodeOutOfRange { node: 2, n: 2 }));
    }
}
