//! Enumerate all subsets by depth-first backtracking. The current path lives
//! in one shared mutable vector; every emission clones it into the snapshot,
//! so recorded steps are immune to later pushes and pops.

use serde::Deserialize;
use stepviz_core::{Action, Recorder, Ref, StackView, Step, Trace};

#[derive(Debug, Clone, Deserialize)]
pub struct SubsetsInput {
    pub nums: Vec<i64>,
}

fn explore(
    nums: &[i64],
    start: usize,
    path: &mut Vec<i64>,
    found: &mut Vec<Vec<i64>>,
    rec: &mut Recorder,
) {
    found.push(path.clone());
    rec.push(
        Step::new(
            StackView::ints(path.iter().copied()),
            format!("record subset {path:?} ({} so far)", found.len()),
        )
        .action(Action::Insert),
    );

    for i in start..nums.len() {
        path.push(nums[i]);
        rec.push(
            Step::new(
                StackView::ints(path.iter().copied()),
                format!("include nums[{i}] = {}", nums[i]),
            )
            .action(Action::Push)
            .highlight(Ref::Index(path.len() - 1)),
        );
        explore(nums, i + 1, path, found, rec);
        path.pop();
        rec.push(
            Step::new(
                StackView::ints(path.iter().copied()),
                format!("backtrack: drop {}", nums[i]),
            )
            .action(Action::Pop),
        );
    }
}

pub fn run(input: &SubsetsInput) -> Trace {
    let mut rec = Recorder::new();
    rec.push(
        Step::new(
            StackView::ints([]),
            format!("enumerate every subset of {:?}", input.nums),
        )
        .action(Action::Visit),
    );

    let mut path = Vec::new();
    let mut found = Vec::new();
    explore(&input.nums, 0, &mut path, &mut found, &mut rec);

    let count = found.len();
    rec.finish(
        Step::new(StackView::ints([]), format!("{count} subsets enumerated")),
        found,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepviz_core::ResultValue;

    fn result_sets(nums: Vec<i64>) -> Vec<Vec<i64>> {
        let trace = run(&SubsetsInput { nums });
        trace.check_invariants().unwrap();
        match trace.result() {
            Some(ResultValue::IntListList(v)) => v.clone(),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_enumerates_in_dfs_order() {
        assert_eq!(
            result_sets(vec![1, 2, 3]),
            vec![
                vec![],
                vec![1],
                vec![1, 2],
                vec![1, 2, 3],
                vec![1, 3],
                vec![2],
                vec![2, 3],
                vec![3],
            ]
        );
    }

    #[test]
    fn test_empty_input_has_only_the_empty_subset() {
        assert_eq!(result_sets(vec![]), vec![Vec::<i64>::new()]);
    }

    #[test]
    fn test_pushes_and_pops_balance() {
        let trace = run(&SubsetsInput { nums: vec![4, 5] });
        let pushes = trace.steps().iter().filter(|s| s.action == Some(Action::Push)).count();
        let pops = trace.steps().iter().filter(|s| s.action == Some(Action::Pop)).count();
        assert_eq!(pushes, pops);
        assert_eq!(pushes, 3); // [4], [4,5], [5]
    }
}
