use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input does not match the expected shape: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("array must not be empty")]
    EmptyInput,

    #[error("node index {node} out of range for {n} nodes")]
    NodeOutOfRange { node: usize, n: usize },

    #[error("negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize, weight: i64 },

    #[error("k = {k} out of range for {n} elements")]
    KOutOfRange { k: usize, n: usize },

    #[error("capacity must be at least 1")]
    ZeroCapacity,

    #[error("values must be positive, got {0}")]
    NonPositive(i64),

    #[error("amount must be non-negative, got {0}")]
    NegativeAmount(i64),
}
