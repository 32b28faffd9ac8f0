//! Search in a rotated sorted array (distinct values). At every probe one half
//! is guaranteed sorted; the probe decides which half can contain the target.

use serde::Deserialize;
use stepviz_core::{Action, ArrayView, Recorder, Ref, Step, Trace};

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRotatedInput {
    pub nums: Vec<i64>,
    pub target: i64,
}

pub fn run(input: &SearchRotatedInput) -> Trace {
    let nums = &input.nums;
    let target = input.target;
    let mut rec = Recorder::new();

    let view = || ArrayView::ints(nums.iter().copied());

    if nums.is_empty() {
        return rec.finish(Step::new(view(), "empty array, target cannot be present"), -1i64);
    }

    let mut left = 0usize;
    let mut right = nums.len() - 1;
    rec.push(
        Step::new(view(), format!("search for {target} in a rotated sorted array"))
            .action(Action::Visit)
            .pointer("left", left as i64)
            .pointer("right", right as i64),
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
                .action(Action::Compare),
            );
            return rec.finish(
                Step {
                    message: format!("target {target} found at index {mid}"),
                    ..probe
                },
                mid as i64,
            );
        }

        // Exactly one half is sorted; check which, then test whether the
        // target lies inside it.
        if nums[left] <= nums[mid] {
            if nums[left] <= target && target < nums[mid] {
                rec.push(
                    Step {
                        message: format!(
                            "left half [{left}..={mid}] is sorted and may contain {target}"
                        ),
                        ..probe
                    }
                    .action(Action::Compare),
                );
                if mid == 0 {
                    break;
                }
                right = mid - 1;
            } else {
                rec.push(
                    Step {
                        message: format!(
                            "left half [{left}..={mid}] is sorted but cannot contain {target}"
                        ),
                        ..probe
                    }
                    .action(Action::Compare),
                );
                left = mid + 1;
            }
        } else if nums[mid] < target && target <= nums[right] {
            rec.push(
                Step {
                    message: format!(
                        "right half [{mid}..={right}] is sorted and may contain {target}"
                    ),
                    ..probe
                }
                .action(Action::Compare),
            );
            left = mid + 1;
        } else {
            rec.push(
                Step {
                    message: format!(
                        "right half [{mid}..={right}] is sorted but cannot contain {target}"
                    ),
                    ..probe
                }
                .action(Action::Compare),
            );
            if mid == 0 {
                break;
            }
            right = mid - 1;
        }
    }

    rec.finish(
        Step::new(view(), format!("{target} is not present in the array")),
        -1i64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use stepviz_core::ResultValue;

    #[rstest]
    #[case(vec![4, 5, 6, 7, 0, 1, 2], 0, 4)]
    #[case(vec![4, 5, 6, 7, 0, 1, 2], 4, 0)]
    #[case(vec![4, 5, 6, 7, 0, 1, 2], 2, 6)]
    #[case(vec![1], 1, 0)]
    #[case(vec![3, 1], 1, 1)]
    fn test_finds_target(#[case] nums: Vec<i64>, #[case] target: i64, #[case] index: i64) {
        let trace = run(&SearchRotatedInput { nums, target });
        assert_eq!(trace.result(), Some(&ResultValue::Int(index)));
        trace.check_invariants().unwrap();
    }

    #[rstest]
    #[case(vec![4, 5, 6, 7, 0, 1, 2], 3)]
    #[case(vec![1], 0)]
    #[case(vec![], 5)]
    fn test_absent_target(#[case] nums: Vec<i64>, #[case] target: i64) {
        let trace = run(&SearchRotatedInput { nums, target });
        assert_eq!(trace.result(), Some(&ResultValue::Int(-1)));
    }

    #[test]
    fn test_every_probe_reports_a_half_decision() {
        let trace = run(&SearchRotatedInput {
            nums: vec![4, 5, 6, 7, 0, 1, 2],
            target: 3,
        });
        for step in trace.steps().iter().filter(|s| s.action == Some(Action::Compare)) {
            assert!(step.message.contains("half"));
        }
    }
}
