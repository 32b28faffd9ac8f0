//! End-to-end checks over the whole catalog: every entry runs on its sample
//! input, produces a well-formed trace, and does so deterministically.

use serde_json::Value;
use stepviz_algorithms::catalog;
use stepviz_core::ResultValue;

#[test]
fn every_sample_input_parses_and_runs() {
    for entry in catalog::all() {
        let parsed: Result<Value, _> = serde_json::from_str(entry.info.sample_input);
        let value = parsed.unwrap_or_else(|e| panic!("{}: bad sample json: {e}", entry.info.id));
        let trace = entry
            .run(value)
            .unwrap_or_else(|e| panic!("{}: sample input rejected: {e}", entry.info.id));
        trace
            .check_invariants()
            .unwrap_or_else(|e| panic!("{}: malformed trace: {e}", entry.info.id));
        assert!(
            trace.result().is_some(),
            "{}: terminal step carries no result",
            entry.info.id
        );
    }
}

#[test]
fn traces_are_deterministic() {
    for entry in catalog::all() {
        let first = entry.run_sample().unwrap();
        let second = entry.run_sample().unwrap();
        let a = serde_json::to_string(&first).unwrap();
        let b = serde_json::to_string(&second).unwrap();
        assert_eq!(a, b, "{}: two runs disagree", entry.info.id);
    }
}

#[test]
fn traces_serialize_as_step_arrays() {
    let trace = catalog::find("binary-search").unwrap().run_sample().unwrap();
    let json: Value = serde_json::to_value(&trace).unwrap();
    let steps = json.as_array().expect("trace serializes as an array");
    assert_eq!(steps.len(), trace.len());
    assert_eq!(steps[0]["state"]["kind"], "array");
    assert_eq!(steps.last().unwrap()["action"], "found");
}

fn sample_result(id: &str) -> ResultValue {
    catalog::find(id)
        .unwrap_or_else(|| panic!("missing entry {id}"))
        .run_sample()
        .unwrap()
        .result()
        .unwrap()
        .clone()
}

#[test]
fn sample_answers_match_known_solutions() {
    assert_eq!(sample_result("binary-search"), ResultValue::Int(4));
    assert_eq!(sample_result("search-rotated"), ResultValue::Int(4));
    assert_eq!(sample_result("kth-largest"), ResultValue::Int(5));
    assert_eq!(
        sample_result("bubble-sort"),
        ResultValue::IntList(vec![1, 2, 4, 5, 8])
    );
    assert_eq!(
        sample_result("dijkstra"),
        ResultValue::IntList(vec![0, 3, 1, 4])
    );
    assert_eq!(
        sample_result("alien-dictionary"),
        ResultValue::Text("wertf".to_string())
    );
    assert_eq!(sample_result("connected-components"), ResultValue::Int(2));
    assert_eq!(sample_result("graph-valid-tree"), ResultValue::Bool(true));
    assert_eq!(
        sample_result("itinerary"),
        ResultValue::TextList(
            ["JFK", "MUC", "LHR", "SFO", "SJC"]
                .iter()
                .map(|s| s.to_string())
                .collect()
        )
    );
    assert_eq!(sample_result("max-subarray"), ResultValue::Int(6));
    assert_eq!(sample_result("coin-change"), ResultValue::Int(3));
    assert_eq!(sample_result("interleaving-string"), ResultValue::Bool(true));
    assert_eq!(sample_result("valid-parentheses"), ResultValue::Bool(true));
    assert_eq!(
        sample_result("lru-cache"),
        ResultValue::IntList(vec![1, -1])
    );
    assert_eq!(sample_result("cycle-detection"), ResultValue::Int(1));
    assert_eq!(
        sample_result("reverse-list"),
        ResultValue::IntList(vec![5, 4, 3, 2, 1])
    );
}

#[test]
fn course_schedule_sample_is_a_valid_topological_order() {
    let trace = catalog::find("course-schedule").unwrap().run_sample().unwrap();
    let Some(ResultValue::IntList(order)) = trace.result() else {
        panic!("order expected");
    };
    let position = |course: i64| order.iter().position(|&c| c == course).unwrap();
    assert_eq!(order.len(), 4);
    for (course, prereq) in [(1, 0), (2, 0), (3, 1), (3, 2)] {
        assert!(position(prereq) < position(course));
    }
}

fn sample_narration(id: &str) -> String {
    catalog::find(id).unwrap().run_sample().unwrap().narrate()
}

#[test]
fn sample_narrations_are_stable() {
    insta::assert_snapshot!("binary_search_narration", sample_narration("binary-search"));
    insta::assert_snapshot!(
        "valid_parentheses_narration",
        sample_narration("valid-parentheses")
    );
}

#[test]
fn info_strings_are_filled_in() {
    for entry in catalog::all() {
        let info = &entry.info;
        assert!(!info.name.is_empty(), "{}", info.id);
        assert!(!info.description.is_empty(), "{}", info.id);
        assert!(info.reference.starts_with("https://"), "{}", info.id);
        assert!(info.time_complexity.starts_with("O("), "{}", info.id);
    }
}
