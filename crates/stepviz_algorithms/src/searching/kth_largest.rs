//! Kth largest element via quickselect (Lomuto partition, last element as
//! pivot, so the trace is deterministic). Expected O(n), worst case O(n²).

use serde::Deserialize;
use stepviz_core::{Action, ArrayView, Recorder, Ref, Step, Trace};

use crate::error::InputError;

#[derive(Debug, Clone, Deserialize)]
pub struct KthLargestInput {
    pub nums: Vec<i64>,
    pub k: usize,
}

pub fn run(input: &KthLargestInput) -> Result<Trace, InputError> {
    let n = input.nums.len();
    if n == 0 {
        return Err(InputError::EmptyInput);
    }
    if input.k == 0 || input.k > n {
        return Err(InputError::KOutOfRange { k: input.k, n });
    }

    let mut nums = input.nums.clone();
    let mut rec = Recorder::new();
    // kth largest lands at this index once the array is partitioned around it.
    let target = n - input.k;

    rec.push(
        Step::new(
            ArrayView::ints(nums.iter().copied()),
            format!(
                "select the kth largest element (k = {}): it belongs at index {target} of the sorted order",
                input.k
            ),
        )
        .action(Action::Visit)
        .secondary(Ref::Index(target)),
    );

    let mut lo = 0usize;
    let mut hi = n - 1;
    loop {
        let pivot = nums[hi];
        rec.push(
            Step::new(
                ArrayView::ints(nums.iter().copied()),
                format!("partition [{lo}..={hi}] around pivot {pivot}"),
            )
            .action(Action::Visit)
            .highlight(Ref::Index(hi))
            .pointer("lo", lo as i64)
            .pointer("hi", hi as i64),
        );

        let mut store = lo;
        for j in lo..hi {
            let smaller = nums[j] <= pivot;
            rec.push(
                Step::new(
                    ArrayView::ints(nums.iter().copied()),
                    if smaller {
                        format!("nums[{j}] = {} <= pivot {pivot}, keep left of the boundary", nums[j])
                    } else {
                        format!("nums[{j}] = {} > pivot {pivot}, leave right of the boundary", nums[j])
                    },
                )
                .action(Action::Compare)
                .highlight(Ref::Index(j))
                .secondary(Ref::Index(hi))
                .pointer("store", store as i64),
            );
            if smaller {
                if store != j {
                    nums.swap(store, j);
                    rec.push(
                        Step::new(
                            ArrayView::ints(nums.iter().copied()),
                            format!("swap indices {store} and {j}"),
                        )
                        .action(Action::Swap)
                        .highlight(Ref::Index(store))
                        .highlight(Ref::Index(j)),
                    );
                }
                store += 1;
            }
        }
        if store != hi {
            nums.swap(store, hi);
            rec.push(
                Step::new(
                    ArrayView::ints(nums.iter().copied()),
                    format!("move pivot {pivot} into place at index {store}"),
                )
                .action(Action::Swap)
                .highlight(Ref::Index(store))
                .highlight(Ref::Index(hi)),
            );
        }

        if store == target {
            return Ok(rec.finish(
                Step::new(
                    ArrayView::ints(nums.iter().copied()),
                    format!("pivot settled at index {store}: the kth largest element (k = {}) is {}", input.k, nums[store]),
                )
                .highlight(Ref::Index(store)),
                nums[store],
            ));
        }
        if store < target {
            rec.push(
                Step::new(
                    ArrayView::ints(nums.iter().copied()),
                    format!("index {store} is left of {target}, recurse into the right part"),
                )
                .action(Action::Visit)
                .highlight(Ref::Index(store)),
            );
            lo = store + 1;
        } else {
            rec.push(
                Step::new(
                    ArrayView::ints(nums.iter().copied()),
                    format!("index {store} is right of {target}, recurse into the left part"),
                )
                .action(Action::Visit)
                .highlight(Ref::Index(store)),
            );
            hi = store - 1;
        }
    }
}
