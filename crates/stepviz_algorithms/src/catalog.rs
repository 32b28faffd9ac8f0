//! Static catalog: metadata plus a uniform JSON boundary for every algorithm.
//!
//! `run` wrappers deserialize the caller's `serde_json::Value` into the
//! algorithm's typed input and forward to its `run`. Complexity strings are
//! documentation for display, not a verified contract.

use serde::Serialize;
use serde_json::Value;
use stepviz_core::Trace;

use crate::error::InputError;
use crate::{backtracking, data_structures, dynamic_programming, graph, linked_list, searching, sorting};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Searching,
    Sorting,
    Graph,
    DynamicProgramming,
    Backtracking,
    DataStructures,
    LinkedList,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Searching => "searching",
            Category::Sorting => "sorting",
            Category::Graph => "graph",
            Category::DynamicProgramming => "dynamic programming",
            Category::Backtracking => "backtracking",
            Category::DataStructures => "data structures",
            Category::LinkedList => "linked list",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AlgorithmInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub difficulty: Difficulty,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub description: &'static str,
    /// External problem reference for side-by-side display.
    pub reference: &'static str,
    /// Default input, as a JSON document.
    pub sample_input: &'static str,
}

type RunFn = fn(Value) -> Result<Trace, InputError>;

pub struct AlgorithmEntry {
    pub info: AlgorithmInfo,
    run: RunFn,
}

impl AlgorithmEntry {
    pub fn run(&self, input: Value) -> Result<Trace, InputError> {
        (self.run)(input)
    }

    pub fn run_sample(&self) -> Result<Trace, InputError> {
        (self.run)(serde_json::from_str(self.info.sample_input)?)
    }
}

pub fn all() -> &'static [AlgorithmEntry] {
    &ENTRIES
}

pub fn find(id: &str) -> Option<&'static AlgorithmEntry> {
    ENTRIES.iter().find(|e| e.info.id == id)
}

fn run_binary_search(input: Value) -> Result<Trace, InputError> {
    let input: searching::binary_search::BinarySearchInput = serde_json::from_value(input)?;
    Ok(searching::binary_search::run(&input))
}

fn run_search_rotated(input: Value) -> Result<Trace, InputError> {
    let input: searching::search_rotated::SearchRotatedInput = serde_json::from_value(input)?;
    Ok(searching::search_rotated::run(&input))
}

fn run_kth_largest(input: Value) -> Result<Trace, InputError> {
    let input: searching::kth_largest::KthLargestInput = serde_json::from_value(input)?;
    searching::kth_largest::run(&input)
}

fn run_bubble_sort(input: Value) -> Result<Trace, InputError> {
    let input: sorting::bubble_sort::BubbleSortInput = serde_json::from_value(input)?;
    Ok(sorting::bubble_sort::run(&input))
}

fn run_dijkstra(input: Value) -> Result<Trace, InputError> {
    let input: graph::dijkstra::DijkstraInput = serde_json::from_value(input)?;
    graph::dijkstra::run(&input)
}

fn run_course_schedule(input: Value) -> Result<Trace, InputError> {
    let input: graph::course_schedule::CourseScheduleInput = serde_json::from_value(input)?;
    graph::course_schedule::run(&input)
}

fn run_alien_dictionary(input: Value) -> Result<Trace, InputError> {
    let input: graph::alien_dictionary::AlienDictionaryInput = serde_json::from_value(input)?;
    Ok(graph::alien_dictionary::run(&input))
}

fn run_connected_components(input: Value) -> Result<Trace, InputError> {
    let input: graph::connected_components::ConnectedComponentsInput = serde_json::from_value(input)?;
    graph::connected_components::run(&input)
}

fn run_graph_valid_tree(input: Value) -> Result<Trace, InputError> {
    let input: graph::graph_valid_tree::GraphValidTreeInput = serde_json::from_value(input)?;
    graph::graph_valid_tree::run(&input)
}

fn run_itinerary(input: Value) -> Result<Trace, InputError> {
    let input: graph::itinerary::ItineraryInput = serde_json::from_value(input)?;
    Ok(graph::itinerary::run(&input))
}

fn run_floyd_warshall(input: Value) -> Result<Trace, InputError> {
    let input: graph::floyd_warshall::FloydWarshallInput = serde_json::from_value(input)?;
    graph::floyd_warshall::run(&input)
}

fn run_max_subarray(input: Value) -> Result<Trace, InputError> {
    let input: dynamic_programming::max_subarray::MaxSubarrayInput = serde_json::from_value(input)?;
    dynamic_programming::max_subarray::run(&input)
}

fn run_coin_change(input: Value) -> Result<Trace, InputError> {
    let input: dynamic_programming::coin_change::CoinChangeInput = serde_json::from_value(input)?;
    dynamic_programming::coin_change::run(&input)
}

fn run_interleaving_string(input: Value) -> Result<Trace, InputError> {
    let input: dynamic_programming::interleaving_string::InterleavingStringInput =
        serde_json::from_value(input)?;
    Ok(dynamic_programming::interleaving_string::run(&input))
}

fn run_subsets(input: Value) -> Result<Trace, InputError> {
    let input: backtracking::subsets::SubsetsInput = serde_json::from_value(input)?;
    Ok(backtracking::subsets::run(&input))
}

fn run_combination_sum(input: Value) -> Result<Trace, InputError> {
    let input: backtracking::combination_sum::CombinationSumInput = serde_json::from_value(input)?;
    backtracking::combination_sum::run(&input)
}

fn run_palindrome_partitioning(input: Value) -> Result<Trace, InputError> {
    let input: backtracking::palindrome_partitioning::PalindromePartitioningInput =
        serde_json::from_value(input)?;
    Ok(backtracking::palindrome_partitioning::run(&input))
}

fn run_valid_parentheses(input: Value) -> Result<Trace, InputError> {
    let input: data_structures::valid_parentheses::ValidParenthesesInput =
        serde_json::from_value(input)?;
    Ok(data_structures::valid_parentheses::run(&input))
}

fn run_lru_cache(input: Value) -> Result<Trace, InputError> {
    let input: data_structures::lru_cache::LruCacheInput = serde_json::from_value(input)?;
    data_structures::lru_cache::run(&input)
}

fn run_median_finder(input: Value) -> Result<Trace, InputError> {
    let input: data_structures::median_finder::MedianFinderInput = serde_json::from_value(input)?;
    data_structures::median_finder::run(&input)
}

fn run_trie(input: Value) -> Result<Trace, InputError> {
    let input: data_structures::trie::TrieInput = serde_json::from_value(input)?;
    Ok(data_structures::trie::run(&input))
}

fn run_cycle_detection(input: Value) -> Result<Trace, InputError> {
    let input: linked_list::cycle_detection::CycleDetectionInput = serde_json::from_value(input)?;
    linked_list::cycle_detection::run(&input)
}

fn run_reverse_list(input: Value) -> Result<Trace, InputError> {
    let input: linked_list::reverse_list::ReverseListInput = serde_json::from_value(input)?;
    Ok(linked_list::reverse_list::run(&input))
}

static ENTRIES: [AlgorithmEntry; 23] = [
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "binary-search",
            name: "Binary Search",
            category: Category::Searching,
            difficulty: Difficulty::Easy,
            time_complexity: "O(log n)",
            space_complexity: "O(1)",
            description: "Find a target in a sorted array by repeatedly halving the search range.",
            reference: "https://leetcode.com/problems/binary-search/",
            sample_input: r#"{"nums": [-1, 0, 3, 5, 9, 12], "target": 9}"#,
        },
        run: run_binary_search,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "search-rotated",
            name: "Search in Rotated Sorted Array",
            category: Category::Searching,
            difficulty: Difficulty::Medium,
            time_complexity: "O(log n)",
            space_complexity: "O(1)",
            description: "Binary search variant where one half of every range is guaranteed sorted.",
            reference: "https://leetcode.com/problems/search-in-rotated-sorted-array/",
            sample_input: r#"{"nums": [4, 5, 6, 7, 0, 1, 2], "target": 0}"#,
        },
        run: run_search_rotated,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "kth-largest",
            name: "Kth Largest Element",
            category: Category::Searching,
            difficulty: Difficulty::Medium,
            time_complexity: "O(n) expected, O(n^2) worst",
            space_complexity: "O(1)",
            description: "Quickselect: partition around a pivot until it settles at the kth position.",
            reference: "https://leetcode.com/problems/kth-largest-element-in-an-array/",
            sample_input: r#"{"nums": [3, 2, 1, 5, 6, 4], "k": 2}"#,
        },
        run: run_kth_largest,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "bubble-sort",
            name: "Bubble Sort",
            category: Category::Sorting,
            difficulty: Difficulty::Easy,
            time_complexity: "O(n^2)",
            space_complexity: "O(1)",
            description: "Repeatedly swap adjacent out-of-order pairs until a pass makes no swap.",
            reference: "https://en.wikipedia.org/wiki/Bubble_sort",
            sample_input: r#"{"nums": [5, 1, 4, 2, 8]}"#,
        },
        run: run_bubble_sort,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "dijkstra",
            name: "Dijkstra Shortest Paths",
            category: Category::Graph,
            difficulty: Difficulty::Medium,
            time_complexity: "O((n + m) log n)",
            space_complexity: "O(n + m)",
            description: "Single-source shortest paths with non-negative weights, settling the closest unsettled node first.",
            reference: "https://leetcode.com/problems/network-delay-time/",
            sample_input: r#"{"n": 4, "edges": [[0, 1, 4], [0, 2, 1], [2, 1, 2], [1, 3, 1], [2, 3, 5]], "source": 0}"#,
        },
        run: run_dijkstra,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "course-schedule",
            name: "Course Schedule (Topological Sort)",
            category: Category::Graph,
            difficulty: Difficulty::Medium,
            time_complexity: "O(n + m)",
            space_complexity: "O(n + m)",
            description: "Kahn's algorithm: repeatedly take a course with no remaining prerequisites; a leftover means a cycle.",
            reference: "https://leetcode.com/problems/course-schedule-ii/",
            sample_input: r#"{"n": 4, "prerequisites": [[1, 0], [2, 0], [3, 1], [3, 2]]}"#,
        },
        run: run_course_schedule,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "alien-dictionary",
            name: "Alien Dictionary",
            category: Category::Graph,
            difficulty: Difficulty::Hard,
            time_complexity: "O(total word length)",
            space_complexity: "O(letters + precedences)",
            description: "Recover an unknown alphabet from a sorted word list via topological sort over letter precedences.",
            reference: "https://leetcode.com/problems/alien-dictionary/",
            sample_input: r#"{"words": ["wrt", "wrf", "er", "ett", "rftt"]}"#,
        },
        run: run_alien_dictionary,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "connected-components",
            name: "Connected Components",
            category: Category::Graph,
            difficulty: Difficulty::Medium,
            time_complexity: "O(m α(n))",
            space_complexity: "O(n)",
            description: "Union-find over the edge list; each successful union merges two components.",
            reference: "https://leetcode.com/problems/number-of-connected-components-in-an-undirected-graph/",
            sample_input: r#"{"n": 5, "edges": [[0, 1], [1, 2], [3, 4]]}"#,
        },
        run: run_connected_components,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "graph-valid-tree",
            name: "Graph Valid Tree",
            category: Category::Graph,
            difficulty: Difficulty::Medium,
            time_complexity: "O(m α(n))",
            space_complexity: "O(n)",
            description: "Exactly n-1 edges and no cycle make a tree; union-find catches the first cycle edge.",
            reference: "https://leetcode.com/problems/graph-valid-tree/",
            sample_input: r#"{"n": 5, "edges": [[0, 1], [0, 2], [0, 3], [1, 4]]}"#,
        },
        run: run_graph_valid_tree,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "itinerary",
            name: "Reconstruct Itinerary",
            category: Category::Graph,
            difficulty: Difficulty::Hard,
            time_complexity: "O(m log m)",
            space_complexity: "O(m)",
            description: "Hierholzer's algorithm from JFK, always flying to the lexicographically smallest unused destination.",
            reference: "https://leetcode.com/problems/reconstruct-itinerary/",
            sample_input: r#"{"tickets": [["MUC", "LHR"], ["JFK", "MUC"], ["SFO", "SJC"], ["LHR", "SFO"]]}"#,
        },
        run: run_itinerary,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "floyd-warshall",
            name: "Floyd-Warshall All-Pairs Shortest Paths",
            category: Category::Graph,
            difficulty: Difficulty::Medium,
            time_complexity: "O(n^3)",
            space_complexity: "O(n^2)",
            description: "Grow the set of allowed intermediate nodes one at a time, improving the distance matrix.",
            reference: "https://en.wikipedia.org/wiki/Floyd%E2%80%93Warshall_algorithm",
            sample_input: r#"{"n": 4, "edges": [[0, 1, 5], [1, 2, 3], [0, 2, 10], [2, 3, 1]]}"#,
        },
        run: run_floyd_warshall,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "max-subarray",
            name: "Maximum Subarray (Kadane)",
            category: Category::DynamicProgramming,
            difficulty: Difficulty::Medium,
            time_complexity: "O(n)",
            space_complexity: "O(1)",
            description: "Extend the running window while its sum helps, restart it when it turns negative.",
            reference: "https://leetcode.com/problems/maximum-subarray/",
            sample_input: r#"{"nums": [-2, 1, -3, 4, -1, 2, 1, -5, 4]}"#,
        },
        run: run_max_subarray,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "coin-change",
            name: "Coin Change",
            category: Category::DynamicProgramming,
            difficulty: Difficulty::Medium,
            time_complexity: "O(amount * coins)",
            space_complexity: "O(amount)",
            description: "Bottom-up table of the fewest coins for every amount up to the target.",
            reference: "https://leetcode.com/problems/coin-change/",
            sample_input: r#"{"coins": [1, 2, 5], "amount": 11}"#,
        },
        run: run_coin_change,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "interleaving-string",
            name: "Interleaving String",
            category: Category::DynamicProgramming,
            difficulty: Difficulty::Medium,
            time_complexity: "O(|s1| * |s2|)",
            space_complexity: "O(|s1| * |s2|)",
            description: "2-D reachability table over prefix pairs of the two source strings.",
            reference: "https://leetcode.com/problems/interleaving-string/",
            sample_input: r#"{"s1": "aabcc", "s2": "dbbca", "s3": "aadbbcbcac"}"#,
        },
        run: run_interleaving_string,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "subsets",
            name: "Subsets",
            category: Category::Backtracking,
            difficulty: Difficulty::Medium,
            time_complexity: "O(n * 2^n)",
            space_complexity: "O(n)",
            description: "Depth-first backtracking that records the current path at every node of the decision tree.",
            reference: "https://leetcode.com/problems/subsets/",
            sample_input: r#"{"nums": [1, 2, 3]}"#,
        },
        run: run_subsets,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "combination-sum",
            name: "Combination Sum",
            category: Category::Backtracking,
            difficulty: Difficulty::Medium,
            time_complexity: "O(branching^depth)",
            space_complexity: "O(target)",
            description: "Backtracking with unlimited reuse of candidates, pruning as soon as the total overshoots.",
            reference: "https://leetcode.com/problems/combination-sum/",
            sample_input: r#"{"candidates": [2, 3, 6, 7], "target": 7}"#,
        },
        run: run_combination_sum,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "palindrome-partitioning",
            name: "Palindrome Partitioning",
            category: Category::Backtracking,
            difficulty: Difficulty::Medium,
            time_complexity: "O(n * 2^n)",
            space_complexity: "O(n)",
            description: "Backtracking over prefix cuts, descending only into palindromic pieces.",
            reference: "https://leetcode.com/problems/palindrome-partitioning/",
            sample_input: r#"{"s": "aab"}"#,
        },
        run: run_palindrome_partitioning,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "valid-parentheses",
            name: "Valid Parentheses",
            category: Category::DataStructures,
            difficulty: Difficulty::Easy,
            time_complexity: "O(n)",
            space_complexity: "O(n)",
            description: "Match brackets with a stack; any mismatch settles the answer immediately.",
            reference: "https://leetcode.com/problems/valid-parentheses/",
            sample_input: r#"{"s": "({[]})"}"#,
        },
        run: run_valid_parentheses,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "lru-cache",
            name: "LRU Cache",
            category: Category::DataStructures,
            difficulty: Difficulty::Medium,
            time_complexity: "O(1) amortized per operation",
            space_complexity: "O(capacity)",
            description: "Simulate an LRU cache over a put/get sequence; the least recent entry is evicted when full.",
            reference: "https://leetcode.com/problems/lru-cache/",
            sample_input: r#"{"capacity": 2, "operations": [{"op": "put", "key": "1", "value": 1}, {"op": "put", "key": "2", "value": 2}, {"op": "get", "key": "1"}, {"op": "put", "key": "3", "value": 3}, {"op": "get", "key": "2"}]}"#,
        },
        run: run_lru_cache,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "median-finder",
            name: "Find Median from Data Stream",
            category: Category::DataStructures,
            difficulty: Difficulty::Hard,
            time_complexity: "O(log n) per insert",
            space_complexity: "O(n)",
            description: "Two balanced heaps: the lower half's max and the upper half's min surround the median.",
            reference: "https://leetcode.com/problems/find-median-from-data-stream/",
            sample_input: r#"{"nums": [6, 10, 2, 6, 5]}"#,
        },
        run: run_median_finder,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "trie",
            name: "Trie (Prefix Tree)",
            category: Category::DataStructures,
            difficulty: Difficulty::Medium,
            time_complexity: "O(word length) per operation",
            space_complexity: "O(total inserted length)",
            description: "Insert, search, and prefix queries over an arena-backed prefix tree.",
            reference: "https://leetcode.com/problems/implement-trie-prefix-tree/",
            sample_input: r#"{"operations": [{"op": "insert", "word": "apple"}, {"op": "search", "word": "apple"}, {"op": "search", "word": "app"}, {"op": "starts_with", "prefix": "app"}]}"#,
        },
        run: run_trie,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "cycle-detection",
            name: "Linked List Cycle Detection",
            category: Category::LinkedList,
            difficulty: Difficulty::Medium,
            time_complexity: "O(n)",
            space_complexity: "O(1)",
            description: "Floyd's tortoise and hare: a meeting proves a cycle, a second walk finds its entry.",
            reference: "https://leetcode.com/problems/linked-list-cycle-ii/",
            sample_input: r#"{"values": [3, 2, 0, -4], "pos": 1}"#,
        },
        run: run_cycle_detection,
    },
    AlgorithmEntry {
        info: AlgorithmInfo {
            id: "reverse-list",
            name: "Reverse Linked List",
            category: Category::LinkedList,
            difficulty: Difficulty::Easy,
            time_complexity: "O(n)",
            space_complexity: "O(1)",
            description: "Redirect one next pointer per step until the whole list points backwards.",
            reference: "https://leetcode.com/problems/reverse-linked-list/",
            sample_input: r#"{"values": [1, 2, 3, 4, 5]}"#,
        },
        run: run_reverse_list,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = all().iter().map(|e| e.info.id).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert!(find("binary-search").is_some());
        assert!(find("bogosort").is_none());
    }

    #[test]
    fn test_shape_errors_surface_as_input_error() {
        let entry = find("binary-search").unwrap();
        let err = entry.run(serde_json::json!({"target": 3})).unwrap_err();
        assert!(matches!(err, InputError::Shape(_)));
    }
}
