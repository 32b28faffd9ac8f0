//! Bubble sort with early exit when a full pass performs no swap.

use serde::Deserialize;
use stepviz_core::{Action, ArrayView, Recorder, Ref, Step, Trace};

#[derive(Debug, Clone, Deserialize)]
pub struct BubbleSortInput {
    pub nums: Vec<i64>,
}

pub fn run(input: &BubbleSortInput) -> Trace {
    let mut nums = input.nums.clone();
    let n = nums.len();
    let mut rec = Recorder::new();

    rec.push(
        Step::new(
            ArrayView::ints(nums.iter().copied()),
            format!("bubble sort {n} values: larger elements sink to the end each pass"),
        )
        .action(Action::Visit),
    );

    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for i in 0..n - 1 - pass {
            let in_order = nums[i] <= nums[i + 1];
            rec.push(
                Step::new(
                    ArrayView::ints(nums.iter().copied()),
                    if in_order {
                        format!("{} <= {}, pair already in order", nums[i], nums[i + 1])
                    } else {
                        format!("{} > {}, pair out of order", nums[i], nums[i + 1])
                    },
                )
                .action(Action::Compare)
                .highlight(Ref::Index(i))
                .secondary(Ref::Index(i + 1))
                .pointer("pass", pass as i64),
            );
            if !in_order {
                nums.swap(i, i + 1);
                swapped = true;
                rec.push(
                    Step::new(
                        ArrayView::ints(nums.iter().copied()),
                        format!("swap indices {i} and {}", i + 1),
                    )
                    .action(Action::Swap)
                    .highlight(Ref::Index(i))
                    .highlight(Ref::Index(i + 1)),
                );
            }
        }
        if !swapped {
            rec.push(
                Step::new(
                    ArrayView::ints(nums.iter().copied()),
                    format!("pass {pass} performed no swap, array is sorted"),
                )
                .action(Action::Visit),
            );
            break;
        }
    }

    rec.finish(
        Step::new(ArrayView::ints(nums.iter().copied()), "array sorted"),
        nums,
    )
}
