//! Graph assertion helpers.

use ecore_graph::graph::{Edge, Graph, Node};

/// Assert a node exists and return it for further assertions.
pub fn get_node<'a>(graph: &'a Graph, id: &str) -> &'a Node {
    graph
        .node(id)
        .unwrap_or_else(|| panic!("Expected node '{}' to exist", id))
}

/// Assert the attribute entries of a node, in order.
pub fn assert_attributes(graph: &Graph, id: &str, expected: &[(&str, &str)]) {
    let node = get_node(graph, id);
    let actual: Vec<(&str, &str)> = node
        .attributes
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(actual, expected, "attributes of node '{}'", id);
}

/// `(kind, source, target, label)` per edge, ignoring generated ids.
pub fn edge_summary(graph: &Graph) -> Vec<(String, String, String, Option<String>)> {
    graph
        .edges
        .iter()
        .map(|e| {
            (
                e.kind.to_string(),
                e.source.clone(),
                e.target.clone(),
                e.label.clone(),
            )
        })
        .collect()
}

/// The graph with every edge id replaced by its position.
pub fn without_edge_ids(graph: &Graph) -> (Vec<Node>, Vec<Edge>) {
    let edges = graph
        .edges
        .iter()
        .enumerate()
        .map(|(i, e)| Edge {
            id: i.to_string(),
            ..e.clone()
        })
        .collect();
    (graph.nodes.clone(), edges)
}

/// Assert no two edges share an id.
pub fn assert_unique_edge_ids(graph: &Graph) {
    let mut seen = std::collections::HashSet::new();
    for edge in &graph.edges {
        if !seen.insert(&edge.id) {
            panic!("Duplicate edge id found: {}", edge.id);
        }
    }
}
