//! Reconstruct an itinerary that uses every ticket once, starting at JFK,
//! picking the lexicographically smallest destination first (Hierholzer's
//! algorithm, iterative stack form). Destination lists are sorted descending
//! so the smallest unused destination is always at the end, ready to pop.

use std::collections::BTreeMap;

use serde::Deserialize;
use stepviz_core::{Action, GraphView, Recorder, Ref, Step, Trace};

const START: &str = "JFK";

#[derive(Debug, Clone, Deserialize)]
pub struct ItineraryInput {
    /// `(from, to)` airport code pairs.
    pub tickets: Vec<(String, String)>,
}

struct Airports {
    ids: BTreeMap<String, usize>,
}

impl Airports {
    fn collect(tickets: &[(String, String)]) -> Self {
        let mut ids = BTreeMap::new();
        ids.insert(START.to_string(), 0);
        let mut codes: Vec<&str> = tickets
            .iter()
            .flat_map(|(a, b)| [a.as_str(), b.as_str()])
            .filter(|&c| c != START)
            .collect();
        codes.sort_unstable();
        codes.dedup();
        for code in codes {
            let id = ids.len();
            ids.insert(code.to_string(), id);
        }
        Self { ids }
    }

    fn id(&self, code: &str) -> usize {
        self.ids[code]
    }

    fn view(&self, tickets: &[(String, String)]) -> GraphView {
        let mut view = GraphView::new(true);
        for (code, &id) in &self.ids {
            view.add_node(id, code.clone());
        }
        for (from, to) in tickets {
            view.add_edge(self.id(from), self.id(to));
        }
        view
    }
}

pub fn run(input: &ItineraryInput) -> Trace {
    let airports = Airports::collect(&input.tickets);
    let view = airports.view(&input.tickets);
    let mut rec = Recorder::new();

    // descending sort, so pop() yields the smallest remaining destination
    let mut adj: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (from, to) in &input.tickets {
        adj.entry(from.as_str()).or_default().push(to.as_str());
    }
    for dests in adj.values_mut() {
        dests.sort_unstable_by(|a, b| b.cmp(a));
    }

    rec.push(
        Step::new(
            view.clone(),
            format!("use all {} tickets starting from {START}", input.tickets.len()),
        )
        .action(Action::Visit)
        .highlight(Ref::Node(airports.id(START))),
    );

    let mut stack: Vec<&str> = vec![START];
    let mut route: Vec<String> = Vec::new();
    while let Some(&airport) = stack.last() {
        let next = adj.get_mut(airport).and_then(|d| d.pop());
        match next {
            Some(dest) => {
                stack.push(dest);
                rec.push(
                    Step::new(
                        view.clone(),
                        format!("{airport} still has tickets: fly to {dest}, the smallest destination"),
                    )
                    .action(Action::Push)
                    .highlight(Ref::Node(airports.id(dest)))
                    .secondary(Ref::Node(airports.id(airport))),
                );
            }
            None => {
                stack.pop();
                route.push(airport.to_string());
                rec.push(
                    Step::new(
                        view.clone(),
                        format!("{airport} has no unused tickets: it becomes stop {} from the end", route.len()),
                    )
                    .action(Action::Pop)
                    .highlight(Ref::Node(airports.id(airport))),
                );
            }
        }
    }

    route.reverse();
    let label = route.join(" -> ");
    rec.finish(Step::new(view, format!("itinerary complete: {label}")), route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use stepviz_core::ResultValue;

    fn result_route(tickets: &[(&str, &str)]) -> Vec<String> {
        let input = ItineraryInput {
            tickets: tickets
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        };
        let trace = run(&input);
        trace.check_invariants().unwrap();
        match trace.result() {
            Some(ResultValue::TextList(v)) => v.clone(),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[rstest]
    #[case(
        &[("MUC", "LHR"), ("JFK", "MUC"), ("SFO", "SJC"), ("LHR", "SFO")],
        &["JFK", "MUC", "LHR", "SFO", "SJC"]
    )]
    #[case(
        &[("JFK", "SFO"), ("JFK", "ATL"), ("SFO", "ATL"), ("ATL", "JFK"), ("ATL", "SFO")],
        &["JFK", "ATL", "JFK", "SFO", "ATL", "SFO"]
    )]
    #[case(&[], &["JFK"])]
    fn test_reconstructs_itinerary(#[case] tickets: &[(&str, &str)], #[case] expected: &[&str]) {
        assert_eq!(result_route(tickets), expected);
    }

    #[test]
    fn test_prefers_lexicographically_smaller_destination() {
        // both orders use all tickets; ATL must be chosen before SFO
        let route = result_route(&[("JFK", "SFO"), ("JFK", "ATL"), ("SFO", "JFK"), ("ATL", "JFK")]);
        assert_eq!(route[1], "ATL");
    }
}
