pub mod lru_cache;
pub mod median_finder;
pub mod trie;
pub mod valid_parentheses;
