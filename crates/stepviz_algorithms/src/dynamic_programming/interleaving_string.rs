//! Is `s3` an interleaving of `s1` and `s2`? 2-D boolean table where
//! `dp[i][j]` means the first `i + j` characters of `s3` can be formed from
//! the first `i` of `s1` and the first `j` of `s2`. A length mismatch is
//! answered by an early terminal step, not an error.

use serde::Deserialize;
use stepviz_core::{Action, MatrixView, Recorder, Ref, Step, Trace};

#[derive(Debug, Clone, Deserialize)]
pub struct InterleavingStringInput {
    pub s1: String,
    pub s2: String,
    pub s3: String,
}

pub fn run(input: &InterleavingStringInput) -> Trace {
    let a: Vec<char> = input.s1.chars().collect();
    let b: Vec<char> = input.s2.chars().collect();
    let c: Vec<char> = input.s3.chars().collect();
    let (m, n) = (a.len(), b.len());

    let mut rec = Recorder::new();
    let mut dp = vec![vec![false; n + 1]; m + 1];

    if m + n != c.len() {
        return rec.finish(
            Step::new(
                MatrixView::bools(&dp),
                format!(
                    "lengths {m} + {n} do not add up to {}: cannot interleave",
                    c.len()
                ),
            ),
            false,
        );
    }

    dp[0][0] = true;
    rec.push(
        Step::new(
            MatrixView::bools(&dp),
            "empty prefixes interleave to the empty string",
        )
        .action(Action::Visit)
        .highlight(Ref::Cell { row: 0, col: 0 }),
    );

    for i in 0..=m {
        for j in 0..=n {
            if i == 0 && j == 0 {
                continue;
            }
            let from_s1 = i > 0 && dp[i - 1][j] && a[i - 1] == c[i + j - 1];
            let from_s2 = j > 0 && dp[i][j - 1] && b[j - 1] == c[i + j - 1];
            if from_s1 || from_s2 {
                dp[i][j] = true;
                let source = if from_s1 {
                    format!("taking '{}' from s1", a[i - 1])
                } else {
                    format!("taking '{}' from s2", b[j - 1])
                };
                let mut step = Step::new(
                    MatrixView::bools(&dp),
                    format!("prefix of length {} reachable by {source}", i + j),
                )
                .action(Action::Insert)
                .highlight(Ref::Cell { row: i, col: j });
                if from_s1 {
                    step = step.secondary(Ref::Cell { row: i - 1, col: j });
                }
                if from_s2 {
                    step = step.secondary(Ref::Cell { row: i, col: j - 1 });
                }
                rec.push(step);
            }
        }
    }

    let answer = dp[m][n];
    let message = if answer {
        format!("\"{}\" is an interleaving of \"{}\" and \"{}\"", input.s3, input.s1, input.s2)
    } else {
        format!("\"{}\" cannot be interleaved from \"{}\" and \"{}\"", input.s3, input.s1, input.s2)
    };
    rec.finish(
        Step::new(MatrixView::bools(&dp), message).highlight(Ref::Cell { row: m, col: n }),
        answer,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use stepviz_core::ResultValue;

    fn result_bool(s1: &str, s2: &str, s3: &str) -> bool {
        let trace = run(&InterleavingStringInput {
            s1: s1.to_string(),
            s2: s2.to_string(),
            s3: s3.to_string(),
        });
        trace.check_invariants().unwrap();
        match trace.result() {
            Some(&ResultValue::Bool(b)) => b,
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[rstest]
    #[case("aabcc", "dbbca", "aadbbcbcac", true)]
    #[case("aabcc", "dbbca", "aadbbbaccc", false)]
    #[case("", "", "", true)]
    #[case("abc", "", "abc", true)]
    #[case("a", "b", "ab", true)]
    fn test_interleavings(#[case] s1: &str, #[case] s2: &str, #[case] s3: &str, #[case] expected: bool) {
        assert_eq!(result_bool(s1, s2, s3), expected);
    }

    #[test]
    fn test_length_mismatch_is_an_early_terminal_step() {
        let trace = run(&InterleavingStringInput {
            s1: "ab".to_string(),
            s2: "c".to_string(),
            s3: "abcd".to_string(),
        });
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.result(), Some(&ResultValue::Bool(false)));
    }
}
