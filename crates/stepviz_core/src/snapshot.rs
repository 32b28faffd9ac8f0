//! Typed snapshot substrates.
//!
//! Every algorithm family renders onto one of a small set of substrate shapes
//! (linear array, stack, graph, 2-D grid, linked list, key-value table, trie).
//! [`Snapshot`] is the tagged union of those shapes, so a renderer can match on
//! the kind instead of probing an untyped bag of fields.

use serde::{Deserialize, Serialize};

/// Cell payload for array / matrix / stack / table views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Text(String),
    Bool(bool),
    Null,
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

impl From<char> for Scalar {
    fn from(v: char) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<Option<i64>> for Scalar {
    fn from(v: Option<i64>) -> Self {
        match v {
            Some(v) => Scalar::Int(v),
            None => Scalar::Null,
        }
    }
}

/// Linear array of values, highlighted by `Ref::Index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayView {
    pub values: Vec<Scalar>,
}

impl ArrayView {
    pub fn new(values: Vec<Scalar>) -> Self {
        Self { values }
    }

    pub fn ints(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            values: values.into_iter().map(Scalar::Int).collect(),
        }
    }

    pub fn texts<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self {
            values: values.into_iter().map(|s| Scalar::Text(s.into())).collect(),
        }
    }
}

/// Stack rendered bottom-to-top; index 0 is the bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackView {
    pub items: Vec<Scalar>,
}

impl StackView {
    pub fn chars(items: &[char]) -> Self {
        Self {
            items: items.iter().map(|c| Scalar::Text(c.to_string())).collect(),
        }
    }

    pub fn ints(items: impl IntoIterator<Item = i64>) -> Self {
        Self {
            items: items.into_iter().map(Scalar::Int).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: usize,
    pub to: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}

/// Node-and-edge graph, highlighted by `Ref::Node`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphView {
    pub directed: bool,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphView {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn add_node(&mut self, id: usize, label: impl Into<String>) {
        self.nodes.push(GraphNode {
            id,
            label: label.into(),
        });
    }

    pub fn add_edge(&mut self, from: usize, to: usize) {
        self.edges.push(GraphEdge {
            from,
            to,
            weight: None,
        });
    }

    pub fn add_weighted_edge(&mut self, from: usize, to: usize, weight: i64) {
        self.edges.push(GraphEdge {
            from,
            to,
            weight: Some(weight),
        });
    }
}

/// 2-D grid (DP tables, adjacency matrices). Rows may be ragged, e.g. when the
/// grid is really two heaps side by side. Highlighted by `Ref::Cell`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixView {
    pub rows: Vec<Vec<Scalar>>,
}

impl MatrixView {
    pub fn new(rows: Vec<Vec<Scalar>>) -> Self {
        Self { rows }
    }

    pub fn ints(rows: &[Vec<i64>]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|r| r.iter().map(|&v| Scalar::Int(v)).collect())
                .collect(),
        }
    }

    pub fn bools(rows: &[Vec<bool>]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|r| r.iter().map(|&v| Scalar::Bool(v)).collect())
                .collect(),
        }
    }

    /// `None` cells render as null (used for "unreachable" distances).
    pub fn opt_ints(rows: &[Vec<Option<i64>>]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|r| r.iter().map(|&v| Scalar::from(v)).collect())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListNode {
    pub id: usize,
    pub value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<usize>,
}

/// Singly linked list. Node ids are stable across snapshots of one run so the
/// renderer can animate relink operations; they are assigned by the algorithm's
/// list builder, never by global counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<usize>,
    pub nodes: Vec<ListNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrieNode {
    pub id: usize,
    /// Edge character from the parent; `None` on the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<char>,
    pub terminal: bool,
    pub children: Vec<usize>,
}

/// Prefix tree, highlighted by `Ref::Node`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrieView {
    pub root: usize,
    pub nodes: Vec<TrieNode>,
}

/// Ordered key-value table (hash map simulations, LRU order). Entry order is
/// part of the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableView {
    pub entries: Vec<(String, Scalar)>,
}

impl TableView {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl Default for TableView {
    fn default() -> Self {
        Self::new()
    }
}

/// Tagged union of all substrate shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Snapshot {
    Array(ArrayView),
    Stack(StackView),
    Graph(GraphView),
    Matrix(MatrixView),
    List(ListView),
    Table(TableView),
    Trie(TrieView),
}

impl From<ArrayView> for Snapshot {
    fn from(v: ArrayView) -> Self {
        Snapshot::Array(v)
    }
}

impl From<StackView> for Snapshot {
    fn from(v: StackView) -> Self {
        Snapshot::Stack(v)
    }
}

impl From<GraphView> for Snapshot {
    fn from(v: GraphView) -> Self {
        Snapshot::Graph(v)
    }
}

impl From<MatrixView> for Snapshot {
    fn from(v: MatrixView) -> Self {
        Snapshot::Matrix(v)
    }
}

impl From<ListView> for Snapshot {
    fn from(v: ListView) -> Self {
        Snapshot::List(v)
    }
}

impl From<TableView> for Snapshot {
    fn from(v: TableView) -> Self {
        Snapshot::Table(v)
    }
}

impl From<TrieView> for Snapshot {
    fn from(v: TrieView) -> Self {
        Snapshot::Trie(v)
    }
}

/// Terminal answer embedded in the last step of a trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    Int(i64),
    Bool(bool),
    Text(String),
    IntList(Vec<i64>),
    TextList(Vec<String>),
    BoolList(Vec<bool>),
    IntListList(Vec<Vec<i64>>),
    TextListList(Vec<Vec<String>>),
    None,
}

impl From<i64> for ResultValue {
    fn from(v: i64) -> Self {
        ResultValue::Int(v)
    }
}

impl From<bool> for ResultValue {
    fn from(v: bool) -> Self {
        ResultValue::Bool(v)
    }
}

impl From<&str> for ResultValue {
    fn from(v: &str) -> Self {
        ResultValue::Text(v.to_string())
    }
}

impl From<String> for ResultValue {
    fn from(v: String) -> Self {
        ResultValue::Text(v)
    }
}

impl From<Vec<i64>> for ResultValue {
    fn from(v: Vec<i64>) -> Self {
        ResultValue::IntList(v)
    }
}

impl From<Vec<String>> for ResultValue {
    fn from(v: Vec<String>) -> Self {
        ResultValue::TextList(v)
    }
}

impl From<Vec<bool>> for ResultValue {
    fn from(v: Vec<bool>) -> Self {
        ResultValue::BoolList(v)
    }
}

impl From<Vec<Vec<i64>>> for ResultValue {
    fn from(v: Vec<Vec<i64>>) -> Self {
        ResultValue::IntListList(v)
    }
}

impl From<Vec<Vec<String>>> for ResultValue {
    fn from(v: Vec<Vec<String>>) -> Self {
        ResultValue::TextListList(v)
    }
}
