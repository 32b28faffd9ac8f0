//! Catalog of classic algorithms instrumented with the step-trace protocol.
//!
//! Every algorithm module exposes a typed input struct and a pure
//! `run(&Input) -> Trace` (or `-> Result<Trace, InputError>` where the input
//! has preconditions that cannot be narrated). [`catalog`] adds a uniform
//! JSON-value boundary plus static metadata on top, so a front end can list and
//! run any algorithm without per-algorithm glue.

pub mod backtracking;
pub mod catalog;
pub mod data_structures;
pub mod dynamic_programming;
pub mod error;
pub mod graph;
pub mod linked_list;
pub mod searching;
pub mod sorting;

pub use catalog::{AlgorithmEntry, AlgorithmInfo, Category, Difficulty};
pub use error::InputError;
