//! Combinations of candidates (with unlimited reuse) summing to a target.
//! Candidates are sorted ascending first, which both fixes the output order
//! and lets the search prune as soon as one candidate overshoots.

use serde::Deserialize;
use stepviz_core::{Action, Recorder, Ref, StackView, Step, Trace};

use crate::error::InputError;

#[derive(Debug, Clone, Deserialize)]
pub struct CombinationSumInput {
    pub candidates: Vec<i64>,
    pub target: i64,
}

fn explore(
    candidates: &[i64],
    target: i64,
    start: usize,
    sum: i64,
    path: &mut Vec<i64>,
    found: &mut Vec<Vec<i64>>,
    rec: &mut Recorder,
) {
    if sum == target {
        found.push(path.clone());
        rec.push(
            Step::new(
                StackView::ints(path.iter().copied()),
                format!("running total hit {target}: record combination {path:?}"),
            )
            .action(Action::Insert),
        );
        return;
    }

    for i in start..candidates.len() {
        let c = candidates[i];
        // a total past i64::MAX is certainly past the target
        let next = match sum.checked_add(c) {
            Some(next) if next <= target => next,
            _ => {
                rec.push(
                    Step::new(
                        StackView::ints(path.iter().copied()),
                        format!("{sum} + {c} overshoots {target}: prune this branch and larger candidates"),
                    )
                    .action(Action::Compare),
                );
                break;
            }
        };
        path.push(c);
        rec.push(
            Step::new(
                StackView::ints(path.iter().copied()),
                format!("choose {c}, running total {next}"),
            )
            .action(Action::Push)
            .highlight(Ref::Index(path.len() - 1))
            .pointer("total", next),
        );
        explore(candidates, target, i, next, path, found, rec);
        path.pop();
        rec.push(
            Step::new(
                StackView::ints(path.iter().copied()),
                format!("backtrack: remove {c}"),
            )
            .action(Action::Pop),
        );
    }
}

pub fn run(input: &CombinationSumInput) -> Result<Trace, InputError> {
    for &c in &input.candidates {
        if c <= 0 {
            return Err(InputError::NonPositive(c));
        }
    }

    let mut candidates = input.candidates.clone();
    candidates.sort_unstable();
    candidates.dedup();

    let mut rec = Recorder::new();
    rec.push(
        Step::new(
            StackView::ints([]),
            format!("find combinations of {candidates:?} summing to {}", input.target),
        )
        .action(Action::Visit),
    );

    let mut path = Vec::new();
    let mut found = Vec::new();
    explore(&candidates, input.target, 0, 0, &mut path, &mut found, &mut rec);

    let count = found.len();
    Ok(rec.finish(
        Step::new(
            StackView::ints([]),
            format!("{count} combinations reach {}", input.target),
        ),
        found,
    ))
}
