use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::snapshot::ResultValue;
use crate::step::{Action, Step};

#[derive(Debug, Error, PartialEq)]
pub enum TraceError {
    #[error("trace has no steps")]
    Empty,

    #[error("terminal step is not tagged `found`")]
    MissingTerminalAction,

    #[error("terminal step carries no result")]
    MissingResult,

    #[error("non-terminal step {0} carries a result")]
    EarlyResult(usize),
}

/// Ordered, append-only accumulator for one algorithm invocation.
///
/// Algorithms push intermediate steps in the exact temporal order the
/// corresponding operations happen, then call [`finish`](Recorder::finish)
/// exactly once with the terminal step and the answer.
#[derive(Debug, Default)]
pub struct Recorder {
    steps: Vec<Step>,
}

impl Recorder {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Seal the trace. The terminal step is stamped with [`Action::Found`] and
    /// the answer, which guarantees the trace invariants by construction.
    pub fn finish(mut self, step: Step, result: impl Into<ResultValue>) -> Trace {
        let mut step = step.action(Action::Found);
        step.result = Some(result.into());
        self.steps.push(step);
        Trace { steps: self.steps }
    }
}

/// Complete output of one algorithm invocation: a non-empty step sequence whose
/// last step carries `Action::Found` and the answer. Serializes transparently
/// as the step array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The terminal answer, if the trace is well formed. Traces built through
    /// [`Recorder::finish`] always have one; a deserialized trace may not.
    pub fn result(&self) -> Option<&ResultValue> {
        self.steps.last().and_then(|s| s.result.as_ref())
    }

    /// Re-check the structural invariants. Useful on deserialized traces and
    /// in fuzz targets.
    pub fn check_invariants(&self) -> Result<(), TraceError> {
        let last = self.steps.last().ok_or(TraceError::Empty)?;
        if last.action != Some(Action::Found) {
            return Err(TraceError::MissingTerminalAction);
        }
        if last.result.is_none() {
            return Err(TraceError::MissingResult);
        }
        for (i, step) in self.steps[..self.steps.len() - 1].iter().enumerate() {
            if step.result.is_some() {
                return Err(TraceError::EarlyResult(i));
            }
        }
        Ok(())
    }

    /// One line per step, for text display and snapshot tests. Steps without an
    /// action tag render as `note`.
    pub fn narrate(&self) -> String {
        let mut out = String::new();
        for (i, step) in self.steps.iter().enumerate() {
            let tag = step.action.map(|a| a.as_str()).unwrap_or("note");
            let _ = writeln!(out, "{i:>3} {tag:<7} {}", step.message);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{ArrayView, Scalar};

    fn sample_trace() -> Trace {
        let mut rec = Recorder::new();
        rec.push(Step::new(ArrayView::ints([2, 1]), "inspect pair").action(Action::Compare));
        rec.push(Step::new(ArrayView::ints([1, 2]), "swap out-of-order pair").action(Action::Swap));
        rec.finish(Step::new(ArrayView::ints([1, 2]), "array sorted"), vec![1i64, 2])
    }

    #[test]
    fn test_finish_stamps_terminal_step() {
        let trace = sample_trace();
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.steps()[2].action, Some(Action::Found));
        assert_eq!(trace.result(), Some(&ResultValue::IntList(vec![1, 2])));
        trace.check_invariants().unwrap();
    }

    #[test]
    fn test_snapshots_are_independent_of_later_mutation() {
        let mut working = vec![3i64, 1];
        let mut rec = Recorder::new();
        rec.push(Step::new(ArrayView::ints(working.iter().copied()), "initial"));

        working.swap(0, 1);
        rec.push(Step::new(ArrayView::ints(working.iter().copied()), "swapped"));

        let trace = rec.finish(
            Step::new(ArrayView::ints(working.iter().copied()), "done"),
            working.clone(),
        );

        let first = match &trace.steps()[0].state {
            crate::Snapshot::Array(v) => v,
            other => panic!("expected array snapshot, got {other:?}"),
        };
        assert_eq!(first.values, vec![Scalar::Int(3), Scalar::Int(1)]);
    }

    #[test]
    fn test_check_invariants_rejects_malformed_traces() {
        let empty: Trace = serde_json::from_str("[]").unwrap();
        assert_eq!(empty.check_invariants(), Err(TraceError::Empty));

        let json = serde_json::json!([
            { "state": { "kind": "array", "values": [1] }, "message": "only step", "action": "visit" }
        ]);
        let trace: Trace = serde_json::from_value(json).unwrap();
        assert_eq!(
            trace.check_invariants(),
            Err(TraceError::MissingTerminalAction)
        );

        let json = serde_json::json!([
            { "state": { "kind": "array", "values": [1] }, "message": "early", "result": 1 },
            { "state": { "kind": "array", "values": [1] }, "message": "done", "action": "found", "result": 1 }
        ]);
        let trace: Trace = serde_json::from_value(json).unwrap();
        assert_eq!(trace.check_invariants(), Err(TraceError::EarlyResult(0)));
    }

    #[test]
    fn test_narrate_format() {
        let narration = sample_trace().narrate();
        assert_eq!(
            narration,
            "  0 compare inspect pair\n  1 swap    swap out-of-order pair\n  2 found   array sorted\n"
        );
    }
}
