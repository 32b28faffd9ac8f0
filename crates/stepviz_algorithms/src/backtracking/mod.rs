pub mod combination_sum;
pub mod palindrome_partitioning;
pub mod subsets;
