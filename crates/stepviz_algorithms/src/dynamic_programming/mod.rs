pub mod coin_change;
pub mod interleaving_string;
pub mod max_subarray;
