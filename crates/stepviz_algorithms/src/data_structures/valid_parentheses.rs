//! Bracket matching with a stack. A close bracket that does not match the top
//! of the stack (or arrives on an empty stack) settles the answer immediately.

use serde::Deserialize;
use stepviz_core::{Action, Recorder, Ref, StackView, Step, Trace};

#[derive(Debug, Clone, Deserialize)]
pub struct ValidParenthesesInput {
    pub s: String,
}

fn closing_for(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        _ => open,
    }
}

pub fn run(input: &ValidParenthesesInput) -> Trace {
    let mut rec = Recorder::new();
    let mut stack: Vec<char> = Vec::new();

    rec.push(
        Step::new(
            StackView::chars(&stack),
            format!("scan \"{}\" left to right", input.s),
        )
        .action(Action::Visit),
    );

    for (i, c) in input.s.chars().enumerate() {
        match c {
            '(' | '[' | '{' => {
                stack.push(c);
                rec.push(
                    Step::new(
                        StackView::chars(&stack),
                        format!("position {i}: push '{c}' and wait for '{}'", closing_for(c)),
                    )
                    .action(Action::Push)
                    .highlight(Ref::Index(stack.len() - 1)),
                );
            }
            ')' | ']' | '}' => match stack.last() {
                Some(&open) if closing_for(open) == c => {
                    rec.push(
                        Step::new(
                            StackView::chars(&stack),
                            format!("position {i}: '{c}' matches the open '{open}' on top"),
                        )
                        .action(Action::Compare)
                        .highlight(Ref::Index(stack.len() - 1)),
                    );
                    stack.pop();
                    rec.push(
                        Step::new(StackView::chars(&stack), format!("pop '{open}'"))
                            .action(Action::Pop),
                    );
                }
                Some(&open) => {
                    return rec.finish(
                        Step::new(
                            StackView::chars(&stack),
                            format!("position {i}: '{c}' does not match the open '{open}': invalid"),
                        )
                        .highlight(Ref::Index(stack.len() - 1)),
                        false,
                    );
                }
                None => {
                    return rec.finish(
                        Step::new(
                            StackView::chars(&stack),
                            format!("position {i}: '{c}' arrives with nothing open: invalid"),
                        ),
                        false,
                    );
                }
            },
            other => {
                rec.push(
                    Step::new(
                        StackView::chars(&stack),
                        format!("position {i}: ignore non-bracket character '{other}'"),
                    )
                    .action(Action::Visit),
                );
            }
        }
    }

    if stack.is_empty() {
        rec.finish(
            Step::new(StackView::chars(&stack), "every bracket matched: valid"),
            true,
        )
    } else {
        rec.finish(
            Step::new(
                StackView::chars(&stack),
                format!("{} brackets left unclosed: invalid", stack.len()),
            ),
            false,
        )
    }
}
