use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::snapshot::{ResultValue, Snapshot};

/// Semantic classification of what a step represents. Closed set; renderers may
/// key colors or easing on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Visit,
    Compare,
    Insert,
    Delete,
    Push,
    Pop,
    Swap,
    Found,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Visit => "visit",
            Action::Compare => "compare",
            Action::Insert => "insert",
            Action::Delete => "delete",
            Action::Push => "push",
            Action::Pop => "pop",
            Action::Swap => "swap",
            Action::Found => "found",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of one element of the primary substrate, used for highlighting.
/// Which variant applies depends on the snapshot kind: `Index` for arrays and
/// stacks, `Node` for graphs, lists and tries, `Cell` for matrices, `Key` for
/// tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ref {
    Index(usize),
    Node(usize),
    Cell { row: usize, col: usize },
    Key(String),
}

impl Ref {
    pub fn key(k: impl Into<String>) -> Self {
        Ref::Key(k.into())
    }
}

/// One observable moment of an algorithm's execution: a full snapshot of the
/// working data, what to emphasize, and a narration line. Created once,
/// appended to a trace, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Snapshot of the data the algorithm is operating on at this moment.
    /// Owned and cloned at emission time, so later in-place mutation of the
    /// live structures cannot leak into it.
    pub state: Snapshot,

    /// Primary emphasis.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<Ref>,

    /// Second emphasis tier (comparison target vs. primary focus).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary: Vec<Ref>,

    /// Named scalar cursors (`left`, `right`, `mid`, ...) for animated markers.
    /// BTreeMap keeps serialization order stable.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub pointers: BTreeMap<String, i64>,

    /// Human-readable narration of what just happened.
    pub message: String,

    /// Line number into a displayed reference implementation, if the algorithm
    /// tracks one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_line: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,

    /// Terminal answer. Only ever set on the last step of a trace, by
    /// [`Recorder::finish`](crate::Recorder::finish).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultValue>,
}

impl Step {
    pub fn new(state: impl Into<Snapshot>, message: impl Into<String>) -> Self {
        Step {
            state: state.into(),
            highlights: Vec::new(),
            secondary: Vec::new(),
            pointers: BTreeMap::new(),
            message: message.into(),
            code_line: None,
            action: None,
            result: None,
        }
    }

    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn highlight(mut self, r: Ref) -> Self {
        self.highlights.push(r);
        self
    }

    pub fn highlights(mut self, refs: impl IntoIterator<Item = Ref>) -> Self {
        self.highlights.extend(refs);
        self
    }

    pub fn secondary(mut self, r: Ref) -> Self {
        self.secondary.push(r);
        self
    }

    pub fn pointer(mut self, name: impl Into<String>, value: i64) -> Self {
        self.pointers.insert(name.into(), value);
        self
    }

    pub fn code_line(mut self, line: u32) -> Self {
        self.code_line = Some(line);
        self
    }
}
