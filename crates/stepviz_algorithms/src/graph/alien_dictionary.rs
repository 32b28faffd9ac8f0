//! Alien dictionary: recover the letter order of an unknown alphabet from a
//! lexicographically sorted word list. Adjacent word pairs contribute one
//! precedence edge each; Kahn's algorithm with a lexicographically sorted
//! ready queue produces a deterministic order. Two invalid shapes end in an
//! early terminal step with an empty-string result: a word followed by its own
//! proper prefix, and a contradiction cycle.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;
use stepviz_core::{Action, GraphView, Recorder, Ref, Step, Trace};

#[derive(Debug, Clone, Deserialize)]
pub struct AlienDictionaryInput {
    pub words: Vec<String>,
}

struct Letters {
    /// Letter -> node id, ordered so ids follow lexicographic letter order.
    ids: BTreeMap<char, usize>,
}

impl Letters {
    fn collect(words: &[String]) -> Self {
        let distinct: BTreeSet<char> = words.iter().flat_map(|w| w.chars()).collect();
        Self {
            ids: distinct.into_iter().enumerate().map(|(i, c)| (c, i)).collect(),
        }
    }

    fn id(&self, c: char) -> usize {
        self.ids[&c]
    }

    fn view(&self, edges: &BTreeSet<(char, char)>) -> GraphView {
        let mut view = GraphView::new(true);
        for (&c, &id) in &self.ids {
            view.add_node(id, c.to_string());
        }
        for &(a, b) in edges {
            view.add_edge(self.id(a), self.id(b));
        }
        view
    }
}

pub fn run(input: &AlienDictionaryInput) -> Trace {
    let letters = Letters::collect(&input.words);
    let mut edges: BTreeSet<(char, char)> = BTreeSet::new();
    let mut rec = Recorder::new();

    rec.push(
        Step::new(
            letters.view(&edges),
            format!(
                "{} distinct letters across {} sorted words",
                letters.ids.len(),
                input.words.len()
            ),
        )
        .action(Action::Visit),
    );

    for pair in input.words.windows(2) {
        let (w1, w2) = (&pair[0], &pair[1]);
        match w1.chars().zip(w2.chars()).find(|(a, b)| a != b) {
            Some((a, b)) => {
                if edges.insert((a, b)) {
                    rec.push(
                        Step::new(
                            letters.view(&edges),
                            format!("'{w1}' before '{w2}': letter '{a}' precedes '{b}'"),
                        )
                        .action(Action::Insert)
                        .highlight(Ref::Node(letters.id(a)))
                        .secondary(Ref::Node(letters.id(b))),
                    );
                } else {
                    rec.push(
                        Step::new(
                            letters.view(&edges),
                            format!("'{w1}' before '{w2}': '{a}' precedes '{b}' was already known"),
                        )
                        .action(Action::Compare)
                        .highlight(Ref::Node(letters.id(a)))
                        .secondary(Ref::Node(letters.id(b))),
                    );
                }
            }
            None if w1.len() > w2.len() => {
                // a word may not be followed by its own proper prefix
                return rec.finish(
                    Step::new(
                        letters.view(&edges),
                        format!("'{w2}' is a proper prefix of '{w1}' but sorts after it: invalid ordering"),
                    ),
                    "",
                );
            }
            None => {}
        }
    }

    let mut indegree: BTreeMap<char, usize> = letters.ids.keys().map(|&c| (c, 0)).collect();
    for &(_, b) in &edges {
        *indegree.get_mut(&b).unwrap() += 1;
    }

    // lexicographically sorted ready queue keeps the output deterministic
    let mut ready: BTreeSet<char> =
        indegree.iter().filter(|&(_, &d)| d == 0).map(|(&c, _)| c).collect();
    let mut order = String::new();

    while let Some(c) = ready.pop_first() {
        order.push(c);
        rec.push(
            Step::new(
                letters.view(&edges),
                format!("no letter still precedes '{c}': append it, order so far \"{order}\""),
            )
            .action(Action::Pop)
            .highlight(Ref::Node(letters.id(c))),
        );
        for &(a, b) in edges.iter().filter(|&&(a, _)| a == c) {
            let d = indegree.get_mut(&b).unwrap();
            *d -= 1;
            if *d == 0 {
                ready.insert(b);
                rec.push(
                    Step::new(
                        letters.view(&edges),
                        format!("letter '{b}' has no remaining predecessors"),
                    )
                    .action(Action::Insert)
                    .highlight(Ref::Node(letters.id(b)))
                    .secondary(Ref::Node(letters.id(a))),
                );
            }
        }
    }

    if order.chars().count() == letters.ids.len() {
        rec.finish(
            Step::new(letters.view(&edges), format!("alphabet recovered: \"{order}\"")),
            order,
        )
    } else {
        rec.finish(
            Step::new(
                letters.view(&edges),
                "remaining letters form a precedence cycle: invalid ordering",
            ),
            "",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use stepviz_core::ResultValue;

    fn result_text(words: &[&str]) -> String {
        let input = AlienDictionaryInput {
            words: words.iter().map(|s| s.to_string()).collect(),
        };
        let trace = run(&input);
        trace.check_invariants().unwrap();
        match trace.result() {
            Some(ResultValue::Text(s)) => s.clone(),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_recovers_wertf() {
        assert_eq!(result_text(&["wrt", "wrf", "er", "ett", "rftt"]), "wertf");
    }

    #[rstest]
    #[case(&["z", "x"], "zx")]
    #[case(&["ab", "adc"], "abcd")]
    #[case(&["ca", "cb"], "abc")]
    #[case(&["x"], "x")]
    fn test_recovers_order(#[case] words: &[&str], #[case] expected: &str) {
        assert_eq!(result_text(words), expected);
    }

    #[rstest]
    #[case(&["abc", "ab"])]
    #[case(&["z", "x", "z"])]
    fn test_invalid_orderings_return_empty(#[case] words: &[&str]) {
        assert_eq!(result_text(words), "");
    }
}
