//! Course ordering via Kahn's topological sort. The ready queue is a
//! `BTreeSet`, so among unblocked courses the smallest id is always taken
//! first and the produced order is deterministic. A cycle leaves some courses
//! never dequeued; that case ends in a terminal step with an empty order.

use std::collections::BTreeSet;

use serde::Deserialize;
use stepviz_core::{Action, Recorder, Ref, Step, Trace};

use super::{check_node, indexed_view};
use crate::error::InputError;

#[derive(Debug, Clone, Deserialize)]
pub struct CourseScheduleInput {
    pub n: usize,
    /// `(course, prerequisite)` pairs: the prerequisite must be taken first.
    pub prerequisites: Vec<(usize, usize)>,
}

pub fn run(input: &CourseScheduleInput) -> Result<Trace, InputError> {
    let n = input.n;
    for &(course, prereq) in &input.prerequisites {
        check_node(course, n)?;
        check_node(prereq, n)?;
    }

    let mut adj: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut indegree = vec![0usize; n];
    let mut view = indexed_view(n, true);
    for &(course, prereq) in &input.prerequisites {
        adj[prereq].push(course);
        indegree[course] += 1;
        view.add_edge(prereq, course);
    }

    let mut rec = Recorder::new();
    let mut ready: BTreeSet<usize> = (0..n).filter(|&c| indegree[c] == 0).collect();
    rec.push(
        Step::new(
            view.clone(),
            format!(
                "{} of {n} courses have no prerequisites and are ready",
                ready.len()
            ),
        )
        .action(Action::Visit)
        .highlights(ready.iter().map(|&c| Ref::Node(c))),
    );

    let mut order: Vec<i64> = Vec::new();
    while let Some(course) = ready.pop_first() {
        order.push(course as i64);
        rec.push(
            Step::new(
                view.clone(),
                format!(
                    "take course {course} (position {} in the order)",
                    order.len()
                ),
            )
            .action(Action::Pop)
            .highlight(Ref::Node(course)),
        );
        for &next in &adj[course] {
            indegree[next] -= 1;
            if indegree[next] == 0 {
                ready.insert(next);
                rec.push(
                    Step::new(
                        view.clone(),
                        format!("course {next} has no remaining prerequisites, now ready"),
                    )
                    .action(Action::Insert)
                    .highlight(Ref::Node(next))
                    .secondary(Ref::Node(course)),
                );
            }
        }
    }

    if order.len() == n {
        Ok(rec.finish(
            Step::new(view, "every course scheduled, the order is valid"),
            order,
        ))
    } else {
        let stuck: Vec<Ref> = (0..n)
            .filter(|&c| indegree[c] > 0)
            .map(Ref::Node)
            .collect();
        Ok(rec.finish(
            Step::new(
                view,
                format!(
                    "{} courses are stuck in a prerequisite cycle, no valid order",
                    n - order.len()
                ),
            )
            .highlights(stuck),
            Vec::<i64>::new(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use stepviz_core::ResultValue;

    #[rstest]
    #[case(2, vec![(1, 0)], vec![0, 1])]
    #[case(4, vec![(1, 0), (2, 0), (3, 1), (3, 2)], vec![0, 1, 2, 3])]
    #[case(3, vec![], vec![0, 1, 2])]
    fn test_produces_valid_order(
        #[case] n: usize,
        #[case] prerequisites: Vec<(usize, usize)>,
        #[case] expected: Vec<i64>,
    ) {
        let trace = run(&CourseScheduleInput { n, prerequisites }).unwrap();
        assert_eq!(trace.result(), Some(&ResultValue::IntList(expected)));
        trace.check_invariants().unwrap();
    }

    #[test]
    fn test_cycle_yields_empty_order() {
        let trace = run(&CourseScheduleInput {
            n: 3,
            prerequisites: vec![(0, 1), (1, 2), (2, 0)],
        })
        .unwrap();
        assert_eq!(trace.result(), Some(&ResultValue::IntList(vec![])));
        assert!(
            trace
                .steps()
                .last()
                .unwrap()
                .message
                .contains("cycle")
        );
    }

    #[test]
    fn test_order_respects_prerequisites() {
        let prerequisites = vec![(2, 0), (2, 1), (3, 2)];
        let trace = run(&CourseScheduleInput { n: 4, prerequisites: prerequisites.clone() }).unwrap();
        let order = match trace.result() {
            Some(ResultValue::IntList(v)) => v.clone(),
            other => panic!("unexpected result {other:?}"),
        };
        for (course, prereq) in prerequisites {
            let pos = |c: usize| order.iter().position(|&x| x == c as i64).unwrap();
            assert!(pos(prereq) < pos(course));
        }
    }
}
