//! Maximum subarray sum (Kadane). At every index the running sum either
//! extends the current window or restarts it; the best sum seen so far is
//! carried as a pointer.

use serde::Deserialize;
use stepviz_core::{Action, ArrayView, Recorder, Ref, Step, Trace};

use crate::error::InputError;

#[derive(Debug, Clone, Deserialize)]
pub struct MaxSubarrayInput {
    pub nums: Vec<i64>,
}

pub fn run(input: &MaxSubarrayInput) -> Result<Trace, InputError> {
    let nums = &input.nums;
    if nums.is_empty() {
        return Err(InputError::EmptyInput);
    }

    let view = || ArrayView::ints(nums.iter().copied());
    let mut rec = Recorder::new();

    let mut current = nums[0];
    let mut best = nums[0];
    let mut window_start = 0usize;
    let mut best_range = (0usize, 0usize);

    rec.push(
        Step::new(view(), format!("start the window at index 0 with sum {current}"))
            .action(Action::Visit)
            .highlight(Ref::Index(0))
            .pointer("current", current)
            .pointer("best", best),
    );

    for (i, &x) in nums.iter().enumerate().skip(1) {
        if current < 0 {
            window_start = i;
            current = x;
            rec.push(
                Step::new(
                    view(),
                    format!("running sum was negative, restart the window at index {i} with {x}"),
                )
                .action(Action::Compare)
                .highlight(Ref::Index(i))
                .pointer("current", current)
                .pointer("best", best)
                .pointer("start", window_start as i64),
            );
        } else {
            // clamp rather than panic when the running sum leaves i64
            current = current.saturating_add(x);
            rec.push(
                Step::new(
                    view(),
                    format!("extend the window with nums[{i}] = {x}, running sum {current}"),
                )
                .action(Action::Compare)
                .highlight(Ref::Index(i))
                .secondary(Ref::Index(window_start))
                .pointer("current", current)
                .pointer("best", best)
                .pointer("start", window_start as i64),
            );
        }
        if current > best {
            best = current;
            best_range = (window_start, i);
            rec.push(
                Step::new(
                    view(),
                    format!("new best sum {best} over [{window_start}..={i}]"),
                )
                .action(Action::Insert)
                .highlights((window_start..=i).map(Ref::Index))
                .pointer("current", current)
                .pointer("best", best),
            );
        }
    }

    let (lo, hi) = best_range;
    Ok(rec.finish(
        Step::new(view(), format!("maximum subarray sum is {best} over [{lo}..={hi}]"))
            .highlights((lo..=hi).map(Ref::Index)),
        best,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use stepviz_core::ResultValue;

    fn reference(nums: &[i64]) -> i64 {
        let mut best = i64::MIN;
        for i in 0..nums.len() {
            let mut sum = 0;
            for &x in &nums[i..] {
                sum += x;
                best = best.max(sum);
            }
        }
        best
    }

    #[rstest]
    #[case(vec![-2, 1, -3, 4, -1, 2, 1, -5, 4], 6)]
    #[case(vec![1], 1)]
    #[case(vec![5, 4, -1, 7, 8], 23)]
    #[case(vec![-3, -1, -2], -1)]
    fn test_known_answers(#[case] nums: Vec<i64>, #[case] expected: i64) {
        assert_eq!(reference(&nums), expected);
        let trace = run(&MaxSubarrayInput { nums }).unwrap();
        assert_eq!(trace.result(), Some(&ResultValue::Int(expected)));
        trace.check_invariants().unwrap();
    }

    #[rstest]
    #[case(vec![2, -7, 3, 3, -1, 4])]
    #[case(vec![0, 0, 0])]
    #[case(vec![10, -4, 10, -20, 1])]
    fn test_matches_quadratic_reference(#[case] nums: Vec<i64>) {
        let trace = run(&MaxSubarrayInput { nums: nums.clone() }).unwrap();
        assert_eq!(trace.result(), Some(&ResultValue::Int(reference(&nums))));
    }

    #[rstest]
    #[case(vec![i64::MAX, i64::MAX], i64::MAX)]
    #[case(vec![i64::MIN, i64::MIN], i64::MIN)]
    fn test_extreme_values_do_not_overflow(#[case] nums: Vec<i64>, #[case] expected: i64) {
        let trace = run(&MaxSubarrayInput { nums }).unwrap();
        assert_eq!(trace.result(), Some(&ResultValue::Int(expected)));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(
            run(&MaxSubarrayInput { nums: vec![] }),
            Err(InputError::EmptyInput)
        ));
    }
}
