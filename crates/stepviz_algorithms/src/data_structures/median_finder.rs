//! Running median over a stream of numbers with two heaps: a max-heap `low`
//! for the smaller half and a min-heap `high` for the larger half, kept within
//! one element of each other (`low` may hold the extra one). Snapshots show
//! both halves sorted ascending as two matrix rows.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Deserialize;
use stepviz_core::{Action, MatrixView, Recorder, Ref, Scalar, Step, Trace};

use crate::error::InputError;

#[derive(Debug, Clone, Deserialize)]
pub struct MedianFinderInput {
    pub nums: Vec<i64>,
}

struct Halves {
    low: BinaryHeap<i64>,
    high: BinaryHeap<Reverse<i64>>,
}

impl Halves {
    fn view(&self) -> MatrixView {
        let mut low: Vec<i64> = self.low.iter().copied().collect();
        low.sort_unstable();
        let mut high: Vec<i64> = self.high.iter().map(|r| r.0).collect();
        high.sort_unstable();
        MatrixView::new(vec![
            low.into_iter().map(Scalar::Int).collect(),
            high.into_iter().map(Scalar::Int).collect(),
        ])
    }

    fn median(&self) -> f64 {
        if self.low.len() > self.high.len() {
            *self.low.peek().unwrap() as f64
        } else {
            let a = *self.low.peek().unwrap();
            let b = self.high.peek().unwrap().0;
            // sum in f64: a + b can leave i64 for extreme stream values
            (a as f64 + b as f64) / 2.0
        }
    }
}

pub fn run(input: &MedianFinderInput) -> Result<Trace, InputError> {
    if input.nums.is_empty() {
        return Err(InputError::EmptyInput);
    }

    let mut halves = Halves {
        low: BinaryHeap::new(),
        high: BinaryHeap::new(),
    };
    let mut rec = Recorder::new();
    let mut medians: Vec<String> = Vec::new();

    rec.push(
        Step::new(
            halves.view(),
            format!(
                "maintain the median of a stream of {} numbers with two heaps",
                input.nums.len()
            ),
        )
        .action(Action::Visit),
    );

    for &x in &input.nums {
        let row = if halves.low.peek().is_none_or(|&top| x <= top) {
            halves.low.push(x);
            0
        } else {
            halves.high.push(Reverse(x));
            1
        };
        let view = halves.view();
        let col = view.rows[row]
            .iter()
            .position(|c| *c == Scalar::Int(x))
            .unwrap_or(0);
        let half = if row == 0 { "lower" } else { "upper" };
        rec.push(
            Step::new(view, format!("{x} belongs to the {half} half (row {row})"))
                .action(Action::Push)
                .highlight(Ref::Cell { row, col }),
        );

        if halves.low.len() > halves.high.len() + 1 {
            let moved = halves.low.pop().unwrap();
            halves.high.push(Reverse(moved));
            rec.push(
                Step::new(
                    halves.view(),
                    format!("rebalance: move {moved} from the lower to the upper half"),
                )
                .action(Action::Swap),
            );
        } else if halves.high.len() > halves.low.len() {
            let Reverse(moved) = halves.high.pop().unwrap();
            halves.low.push(moved);
            rec.push(
                Step::new(
                    halves.view(),
                    format!("rebalance: move {moved} from the upper to the lower half"),
                )
                .action(Action::Swap),
            );
        }

        let median = halves.median();
        medians.push(format!("{median}"));
        rec.push(
            Step::new(halves.view(), format!("median is now {median}"))
                .action(Action::Compare),
        );
    }

    let last = medians.last().cloned().unwrap_or_default();
    Ok(rec.finish(
        Step::new(
            halves.view(),
            format!("stream consumed, final median {last}"),
        ),
        medians,
    ))
}
