//! Partition a string into palindromic pieces by depth-first backtracking.
//! The current partition is one shared mutable vector, cloned into every
//! snapshot at emission time.

use serde::Deserialize;
use stepviz_core::{Action, Recorder, Ref, StackView, Step, Trace};

#[derive(Debug, Clone, Deserialize)]
pub struct PalindromePartitioningInput {
    pub s: String,
}

fn is_palindrome(chars: &[char]) -> bool {
    chars.iter().eq(chars.iter().rev())
}

fn explore(
    chars: &[char],
    start: usize,
    path: &mut Vec<String>,
    found: &mut Vec<Vec<String>>,
    rec: &mut Recorder,
) {
    if start == chars.len() {
        found.push(path.clone());
        rec.push(
            Step::new(
                StackView {
                    items: path.iter().map(|p| p.as_str().into()).collect(),
                },
                format!("string fully consumed: record partition {path:?}"),
            )
            .action(Action::Insert),
        );
        return;
    }

    for end in start + 1..=chars.len() {
        let piece: String = chars[start..end].iter().collect();
        let ok = is_palindrome(&chars[start..end]);
        rec.push(
            Step::new(
                StackView {
                    items: path.iter().map(|p| p.as_str().into()).collect(),
                },
                if ok {
                    format!("\"{piece}\" is a palindrome")
                } else {
                    format!("\"{piece}\" is not a palindrome, skip")
                },
            )
            .action(Action::Compare),
        );
        if !ok {
            continue;
        }
        path.push(piece.clone());
        rec.push(
            Step::new(
                StackView {
                    items: path.iter().map(|p| p.as_str().into()).collect(),
                },
                format!("take \"{piece}\" as the next piece"),
            )
            .action(Action::Push)
            .highlight(Ref::Index(path.len() - 1)),
        );
        explore(chars, end, path, found, rec);
        path.pop();
        rec.push(
            Step::new(
                StackView {
                    items: path.iter().map(|p| p.as_str().into()).collect(),
                },
                format!("backtrack: give back \"{piece}\""),
            )
            .action(Action::Pop),
        );
    }
}

pub fn run(input: &PalindromePartitioningInput) -> Trace {
    let chars: Vec<char> = input.s.chars().collect();
    let mut rec = Recorder::new();
    rec.push(
        Step::new(
            StackView { items: Vec::new() },
            format!("partition \"{}\" into palindromic pieces", input.s),
        )
        .action(Action::Visit),
    );

    let mut path = Vec::new();
    let mut found = Vec::new();
    explore(&chars, 0, &mut path, &mut found, &mut rec);

    let count = found.len();
    rec.finish(
        Step::new(
            StackView { items: Vec::new() },
            format!("{count} palindromic partitions"),
        ),
        found,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepviz_core::ResultValue;

    fn result_parts(s: &str) -> Vec<Vec<String>> {
        let trace = run(&PalindromePartitioningInput { s: s.to_string() });
        trace.check_invariants().unwrap();
        match trace.result() {
            Some(ResultValue::TextListList(v)) => v.clone(),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_classic_example() {
        assert_eq!(
            result_parts("aab"),
            vec![
                vec!["a".to_string(), "a".to_string(), "b".to_string()],
                vec!["aa".to_string(), "b".to_string()],
            ]
        );
    }

    #[test]
    fn test_single_char() {
        assert_eq!(result_parts("x"), vec![vec!["x".to_string()]]);
    }

    #[test]
    fn test_empty_string_has_the_empty_partition() {
        assert_eq!(result_parts(""), vec![Vec::<String>::new()]);
    }

    #[test]
    fn test_all_pieces_are_palindromes() {
        for partition in result_parts("abbab") {
            for piece in &partition {
                let chars: Vec<char> = piece.chars().collect();
                assert!(is_palindrome(&chars));
            }
        }
    }
}
