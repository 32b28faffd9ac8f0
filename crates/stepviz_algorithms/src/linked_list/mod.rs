pub mod cycle_detection;
pub mod reverse_list;

use stepviz_core::{ListNode, ListView};

/// Build a list view for values `0..n` where node ids equal input positions
/// and `next` follows input order, optionally closing a cycle back to `tail`.
pub(crate) fn list_view(values: &[i64], tail: Option<usize>) -> ListView {
    let n = values.len();
    ListView {
        head: if n > 0 { Some(0) } else { None },
        nodes: values
            .iter()
            .enumerate()
            .map(|(id, &value)| ListNode {
                id,
                value,
                next: if id + 1 < n { Some(id + 1) } else { tail },
            })
            .collect(),
    }
}
