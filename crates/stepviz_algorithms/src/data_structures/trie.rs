//! Trie (prefix tree) built and queried by an explicit operation sequence.
//! Nodes live in an arena vector; node 0 is the root. Children are kept in a
//! BTreeMap so child order, node ids, and therefore the whole trace are
//! deterministic. Each `search`/`starts_with` contributes a boolean to the
//! final result list.

use std::collections::BTreeMap;

use serde::Deserialize;
use stepviz_core::{Action, Recorder, Ref, Step, Trace, TrieNode, TrieView};

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TrieOp {
    Insert { word: String },
    Search { word: String },
    StartsWith { prefix: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrieInput {
    pub operations: Vec<TrieOp>,
}

struct Node {
    label: Option<char>,
    terminal: bool,
    children: BTreeMap<char, usize>,
}

struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    fn new() -> Self {
        Self {
            nodes: vec![Node {
                label: None,
                terminal: false,
                children: BTreeMap::new(),
            }],
        }
    }

    fn view(&self) -> TrieView {
        TrieView {
            root: 0,
            nodes: self
                .nodes
                .iter()
                .enumerate()
                .map(|(id, n)| TrieNode {
                    id,
                    label: n.label,
                    terminal: n.terminal,
                    children: n.children.values().copied().collect(),
                })
                .collect(),
        }
    }

    /// Walk as far as the prefix exists; `Ok` is the reached node, `Err` the
    /// last node on the path plus the character that was missing.
    fn walk(&self, word: &str) -> Result<usize, (usize, char)> {
        let mut at = 0usize;
        for c in word.chars() {
            match self.nodes[at].children.get(&c) {
                Some(&next) => at = next,
                None => return Err((at, c)),
            }
        }
        Ok(at)
    }
}

pub fn run(input: &TrieInput) -> Trace {
    let mut arena = Arena::new();
    let mut rec = Recorder::new();
    let mut answers: Vec<bool> = Vec::new();

    rec.push(
        Step::new(
            arena.view(),
            format!("empty trie; apply {} operations", input.operations.len()),
        )
        .action(Action::Visit)
        .highlight(Ref::Node(0)),
    );

    for op in &input.operations {
        match op {
            TrieOp::Insert { word } => {
                let mut at = 0usize;
                for c in word.chars() {
                    match arena.nodes[at].children.get(&c) {
                        Some(&next) => {
                            at = next;
                            rec.push(
                                Step::new(
                                    arena.view(),
                                    format!("insert \"{word}\": '{c}' already present, descend"),
                                )
                                .action(Action::Visit)
                                .highlight(Ref::Node(at)),
                            );
                        }
                        None => {
                            let id = arena.nodes.len();
                            arena.nodes.push(Node {
                                label: Some(c),
                                terminal: false,
                                children: BTreeMap::new(),
                            });
                            arena.nodes[at].children.insert(c, id);
                            at = id;
                            rec.push(
                                Step::new(
                                    arena.view(),
                                    format!("insert \"{word}\": create a node for '{c}'"),
                                )
                                .action(Action::Insert)
                                .highlight(Ref::Node(id)),
                            );
                        }
                    }
                }
                arena.nodes[at].terminal = true;
                rec.push(
                    Step::new(
                        arena.view(),
                        format!("mark the end of \"{word}\" as a complete word"),
                    )
                    .action(Action::Insert)
                    .highlight(Ref::Node(at)),
                );
            }
            TrieOp::Search { word } => match arena.walk(word) {
                Ok(at) if arena.nodes[at].terminal => {
                    answers.push(true);
                    rec.push(
                        Step::new(arena.view(), format!("search \"{word}\": found a complete word"))
                            .action(Action::Compare)
                            .highlight(Ref::Node(at)),
                    );
                }
                Ok(at) => {
                    answers.push(false);
                    rec.push(
                        Step::new(
                            arena.view(),
                            format!("search \"{word}\": path exists but is only a prefix"),
                        )
                        .action(Action::Compare)
                        .highlight(Ref::Node(at)),
                    );
                }
                Err((at, c)) => {
                    answers.push(false);
                    rec.push(
                        Step::new(
                            arena.view(),
                            format!("search \"{word}\": no edge for '{c}', not present"),
                        )
                        .action(Action::Compare)
                        .highlight(Ref::Node(at)),
                    );
                }
            },
            TrieOp::StartsWith { prefix } => match arena.walk(prefix) {
                Ok(at) => {
                    answers.push(true);
                    rec.push(
                        Step::new(
                            arena.view(),
                            format!("starts_with \"{prefix}\": the prefix path exists"),
                        )
                        .action(Action::Compare)
                        .highlight(Ref::Node(at)),
                    );
                }
                Err((at, c)) => {
                    answers.push(false);
                    rec.push(
                        Step::new(
                            arena.view(),
                            format!("starts_with \"{prefix}\": no edge for '{c}'"),
                        )
                        .action(Action::Compare)
                        .highlight(Ref::Node(at)),
                    );
                }
            },
        }
    }

    rec.finish(
        Step::new(
            arena.view(),
            format!("{} operations applied, {} queries answered", input.operations.len(), answers.len()),
        ),
        answers,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepviz_core::ResultValue;

    fn insert(word: &str) -> TrieOp {
        TrieOp::Insert { word: word.to_string() }
    }

    fn search(word: &str) -> TrieOp {
        TrieOp::Search { word: word.to_string() }
    }

    fn starts_with(prefix: &str) -> TrieOp {
        TrieOp::StartsWith { prefix: prefix.to_string() }
    }

    fn answers(operations: Vec<TrieOp>) -> Vec<bool> {
        let trace = run(&TrieInput { operations });
        trace.check_invariants().unwrap();
        match trace.result() {
            Some(ResultValue::BoolList(v)) => v.clone(),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_classic_sequence() {
        assert_eq!(
            answers(vec![
                insert("apple"),
                search("apple"),
                search("app"),
                starts_with("app"),
                insert("app"),
                search("app"),
            ]),
            vec![true, false, true, true]
        );
    }

    #[test]
    fn test_shared_prefixes_share_nodes() {
        let trace = run(&TrieInput {
            operations: vec![insert("car"), insert("cat")],
        });
        let stepviz_core::Snapshot::Trie(view) = &trace.steps().last().unwrap().state else {
            panic!("trie snapshots expected");
        };
        // root + c, a, r, t
        assert_eq!(view.nodes.len(), 5);
    }

    #[test]
    fn test_search_on_empty_trie() {
        assert_eq!(answers(vec![search("x")]), vec![false]);
    }
}
