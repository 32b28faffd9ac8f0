pub mod alien_dictionary;
pub mod connected_components;
pub mod course_schedule;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod graph_valid_tree;
pub mod itinerary;
pub mod union_find;

use stepviz_core::GraphView;

use crate::error::InputError;

/// Build a view with nodes `0..n` labeled by index.
pub(crate) fn indexed_view(n: usize, directed: bool) -> GraphView {
    let mut view = GraphView::new(directed);
    for id in 0..n {
        view.add_node(id, id.to_string());
    }
    view
}

pub(crate) fn check_node(node: usize, n: usize) -> Result<(), InputError> {
    if node < n {
        Ok(())
    } else {
        Err(InputError::NodeOutOfRange { node, n })
    }
}
