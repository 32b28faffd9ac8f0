//! Step-trace protocol shared by every algorithm in the catalog.
//!
//! An instrumented algorithm is a pure function `run(&Input) -> Trace`. Instead
//! of returning only its answer, it pushes an ordered sequence of [`Step`]s into
//! a [`Recorder`], each one an immutable snapshot of the data it is working on
//! plus a human-readable narration. A generic renderer replays the trace frame
//! by frame without knowing anything about the specific algorithm.

pub mod recorder;
pub mod snapshot;
pub mod step;

pub use recorder::{Recorder, Trace, TraceError};
pub use snapshot::{
    ArrayView, GraphEdge, GraphNode, GraphView, ListNode, ListView, MatrixView, ResultValue,
    Scalar, Snapshot, StackView, TableView, TrieNode, TrieView,
};
pub use step::{Action, Ref, Step};
