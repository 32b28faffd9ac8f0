//! Binary search over a sorted array.
//!
//! `code_line` references point into this canonical listing:
//!
//! ```text
//! 1  left = 0, right = len - 1
//! 2  while left <= right:
//! 3      mid = left + (right - left) / 2
//! 4      if nums[mid] == target: return mid
//! 5      if nums[mid] < target:  left = mid + 1
//! 6      else:                   right = mid - 1
//! 7  return -1
//! ```

use serde::Deserialize;
use stepviz_core::{Action, ArrayView, Recorder, Ref, Step, Trace};

#[derive(Debug, Clone, Deserialize)]
pub struct BinarySearchInput {
    pub nums: Vec<i64>,
    pub target: i64,
}

pub fn run(input: &BinarySearchInput) -> Trace {
    let nums = &input.nums;
    let target = input.target;
    let mut rec = Recorder::new();

    let view = || ArrayView::ints(nums.iter().copied());

    if nums.is_empty() {
        return rec.finish(
            Step::new(view(), "empty array, target cannot be present").code_line(7),
            -1i64,
        );
    }

    let mut left = 0usize;
    let mut right = nums.len() - 1;
    rec.push(
        Step::new(view(), format!("search for {target} in a sorted array of {} values", nums.len()))
            .action(Action::Visit)
            .pointer("left", left as i64)
            .pointer("right", right as i64)
            .code_line(1),
    );

    while left <= right {
        let mid = left + (right - left) / 2;
        let probe = Step::new(view(), "")
            .highlight(Ref::Index(mid))
            .pointer("left", left as i64)
            .pointer("right", right as i64)
            .pointer("mid", mid as i64);

        if nums[mid] == target {
            rec.push(
                Step {
                    message: format!("nums[{mid}] = {} equals the target", nums[mid]),
                    ..probe.clone()
                }
                .action(Action::Compare)
                .code_line(4),
            );
            return rec.finish(
                Step {
                    message: format!("target {target} found at index {mid}"),
                    ..probe
                }
                .code_line(4),
                mid as i64,
            );
        }

        if nums[mid] < target {
            rec.push(
                Step {
                    message: format!("nums[{mid}] = {} < {target}, discard the left half", nums[mid]),
                    ..probe
                }
                .action(Action::Compare)
                .code_line(5),
            );
            left = mid + 1;
        } else {
            rec.push(
                Step {
                    message: format!("nums[{mid}] = {} > {target}, discard the right half", nums[mid]),
                    ..probe
                }
                .action(Action::Compare)
                .code_line(6),
            );
            if mid == 0 {
                break;
            }
            right = mid - 1;
        }
    }

    rec.finish(
        Step::new(view(), format!("{target} is not present in the array")).code_line(7),
        -1i64,
    )
}
