//! Floyd's tortoise-and-hare cycle detection. `pos` is the index the last
//! node links back to (-1 for no cycle). Phase one races the two pointers
//! until they meet; phase two walks one pointer from the head to find the
//! cycle entry. The result is the entry index, or -1.

use serde::Deserialize;
use stepviz_core::{Action, ListView, Recorder, Ref, Step, Trace};

use super::list_view;
use crate::error::InputError;

#[derive(Debug, Clone, Deserialize)]
pub struct CycleDetectionInput {
    pub values: Vec<i64>,
    /// Index the tail links back to; -1 means the list ends normally.
    pub pos: i64,
}

struct Links {
    next: Vec<Option<usize>>,
    view: ListView,
}

impl Links {
    fn build(input: &CycleDetectionInput) -> Result<Self, InputError> {
        let n = input.values.len();
        let tail = if input.pos < 0 {
            None
        } else {
            let pos = input.pos as usize;
            if pos >= n {
                return Err(InputError::NodeOutOfRange { node: pos, n });
            }
            Some(pos)
        };
        let next: Vec<Option<usize>> = (0..n)
            .map(|id| if id + 1 < n { Some(id + 1) } else { tail })
            .collect();
        Ok(Self {
            next,
            view: list_view(&input.values, tail),
        })
    }
}

pub fn run(input: &CycleDetectionInput) -> Result<Trace, InputError> {
    let links = Links::build(input)?;
    let mut rec = Recorder::new();

    if input.values.is_empty() {
        return Ok(rec.finish(
            Step::new(links.view, "empty list cannot contain a cycle"),
            -1i64,
        ));
    }

    rec.push(
        Step::new(
            links.view.clone(),
            "tortoise moves one node per step, hare moves two",
        )
        .action(Action::Visit)
        .highlight(Ref::Node(0)),
    );

    let mut slow = 0usize;
    let mut fast = 0usize;
    let meeting = loop {
        let Some(f1) = links.next[fast] else {
            break None;
        };
        let Some(f2) = links.next[f1] else {
            break None;
        };
        slow = links.next[slow].unwrap_or(slow);
        fast = f2;
        rec.push(
            Step::new(
                links.view.clone(),
                format!("tortoise at node {slow}, hare at node {fast}"),
            )
            .action(Action::Compare)
            .highlight(Ref::Node(slow))
            .secondary(Ref::Node(fast)),
        );
        if slow == fast {
            break Some(slow);
        }
    };

    let Some(meeting) = meeting else {
        return Ok(rec.finish(
            Step::new(links.view, "the hare ran off the end: no cycle"),
            -1i64,
        ));
    };

    rec.push(
        Step::new(
            links.view.clone(),
            format!("pointers met at node {meeting}: a cycle exists"),
        )
        .action(Action::Visit)
        .highlight(Ref::Node(meeting)),
    );

    // phase two: head and meeting point advance in lockstep until they meet
    let mut a = 0usize;
    let mut b = meeting;
    while a != b {
        a = links.next[a].unwrap_or(a);
        b = links.next[b].unwrap_or(b);
        rec.push(
            Step::new(
                links.view.clone(),
                format!("walk both pointers: {a} and {b}"),
            )
            .action(Action::Visit)
            .highlight(Ref::Node(a))
            .secondary(Ref::Node(b)),
        );
    }

    Ok(rec.finish(
        Step::new(
            links.view,
            format!("the cycle starts at node {a}"),
        )
        .highlight(Ref::Node(a)),
        a as i64,
    ))
}
