#![no_main]

use libfuzzer_sys::fuzz_target;
use stepviz_algorithms::catalog;

// The selector picks a catalog entry, the text is fed through the JSON dispatch
// boundary. Any outcome is fine except a panic or a trace that fails its own
// invariants.
fuzz_target!(|input: (u8, &str)| {
    let (selector, json) = input;
    let entries = catalog::all();
    let entry = &entries[selector as usize % entries.len()];

    let Ok(value) = serde_json::from_str::<serde_json::Value>(json) else {
        return;
    };
    if let Ok(trace) = entry.run(value) {
        trace.check_invariants().unwrap();
    }
});
