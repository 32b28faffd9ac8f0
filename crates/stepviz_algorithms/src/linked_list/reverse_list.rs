//! Reverse a singly linked list in place by redirecting one `next` pointer per
//! step. Node ids stay fixed (they equal the original positions), so the
//! renderer animates the links turning around while the nodes stand still.

use serde::Deserialize;
use stepviz_core::{Action, ListNode, ListView, Recorder, Ref, Step, Trace};

#[derive(Debug, Clone, Deserialize)]
pub struct ReverseListInput {
    pub values: Vec<i64>,
}

pub fn run(input: &ReverseListInput) -> Trace {
    let n = input.values.len();
    let mut rec = Recorder::new();

    // next pointers by node id; id i holds values[i] forever
    let mut next: Vec<Option<usize>> = (0..n)
        .map(|id| if id + 1 < n { Some(id + 1) } else { None })
        .collect();
    let mut head = if n > 0 { Some(0) } else { None };

    let view = |head: Option<usize>, next: &[Option<usize>]| ListView {
        head,
        nodes: input
            .values
            .iter()
            .enumerate()
            .map(|(id, &value)| ListNode {
                id,
                value,
                next: next[id],
            })
            .collect(),
    };

    if n == 0 {
        return rec.finish(
            Step::new(view(head, &next), "empty list is its own reversal"),
            Vec::<i64>::new(),
        );
    }

    rec.push(
        Step::new(
            view(head, &next),
            format!("reverse a list of {n} nodes by redirecting one link at a time"),
        )
        .action(Action::Visit)
        .highlight(Ref::Node(0)),
    );

    let mut prev: Option<usize> = None;
    let mut current = head;
    while let Some(c) = current {
        let following = next[c];
        next[c] = prev;
        head = Some(c);
        rec.push(
            Step::new(
                view(head, &next),
                match prev {
                    Some(p) => format!("point node {c} back at node {p}"),
                    None => format!("node {c} becomes the new tail"),
                },
            )
            .action(Action::Swap)
            .highlight(Ref::Node(c))
            .highlights(prev.map(Ref::Node)),
        );
        prev = Some(c);
        current = following;
    }

    let mut reversed = input.values.clone();
    reversed.reverse();
    rec.finish(
        Step::new(view(head, &next), "every link reversed"),
        reversed,
    )
}
