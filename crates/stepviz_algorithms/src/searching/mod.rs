pub mod binary_search;
pub mod kth_largest;
pub mod search_rotated;
