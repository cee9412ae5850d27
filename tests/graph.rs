use glam::IVec2;
use lingomap::error::MapError;
use lingomap::map::graph::{Edge, EdgeKey, LocationGraph, LocationNode};
use pretty_assertions::assert_eq;

fn node(id: &str, x: i32, y: i32) -> LocationNode {
    LocationNode::new(id, IVec2::new(x, y))
}

fn create_test_graph() -> LocationGraph {
    LocationGraph::from_parts(
        [node("plaza", 0, 0), node("market", 1, 0), node("inn", 0, 1)],
        vec![Edge::new("plaza", "market"), Edge::new("plaza", "inn")],
    )
    .unwrap()
}

#[test]
fn test_adjacency_is_symmetric() {
    let graph = create_test_graph();

    assert_eq!(graph.connected_locations("plaza").as_slice(), ["market", "inn"]);
    assert_eq!(graph.connected_locations("market").as_slice(), ["plaza"]);
    assert_eq!(graph.connected_locations("inn").as_slice(), ["plaza"]);
}

#[test]
fn test_adjacency_is_deterministic() {
    let graph = create_test_graph();

    let first = graph.connected_locations("plaza");
    let second = graph.connected_locations("plaza");
    assert_eq!(first, second);
}

#[test]
fn test_unknown_id_returns_empty() {
    let graph = create_test_graph();

    assert!(graph.connected_locations("nonexistent").is_empty());
}

#[test]
fn test_node_without_edges_returns_empty() {
    let graph = LocationGraph::from_parts(
        [node("plaza", 0, 0), node("shrine", 5, 5)],
        vec![Edge::new("plaza", "plaza")],
    )
    .unwrap();

    assert!(graph.connected_locations("shrine").is_empty());
}

#[test]
fn test_duplicate_edges_do_not_duplicate_neighbors() {
    let graph = LocationGraph::from_parts(
        [node("plaza", 0, 0), node("market", 1, 0)],
        vec![
            Edge::new("plaza", "market"),
            Edge::new("market", "plaza"),
            Edge::new("plaza", "market"),
        ],
    )
    .unwrap();

    assert_eq!(graph.connected_locations("plaza").as_slice(), ["market"]);
    assert_eq!(graph.connected_locations("market").as_slice(), ["plaza"]);
}

#[test]
fn test_unique_edges_collapses_both_orientations() {
    let graph = LocationGraph::from_parts(
        [node("plaza", 0, 0), node("market", 1, 0), node("inn", 0, 1)],
        vec![
            Edge::new("plaza", "market"),
            Edge::new("market", "plaza"),
            Edge::new("inn", "plaza"),
        ],
    )
    .unwrap();

    let edges: Vec<(&str, &str)> = graph.unique_edges().collect();
    assert_eq!(edges, vec![("market", "plaza"), ("inn", "plaza")]);
}

#[test]
fn test_edge_key_is_order_independent() {
    assert_eq!(EdgeKey::new("A", "B"), EdgeKey::new("B", "A"));
    assert_eq!(EdgeKey::new("B", "A").to_string(), "A-B");
    assert_eq!(Edge::new("B", "A").key(), Edge::new("A", "B").key());
}

#[test]
fn test_duplicate_node_id_fails_load() {
    let result = LocationGraph::from_parts(
        [node("plaza", 0, 0), node("plaza", 1, 1)],
        Vec::new(),
    );

    assert!(matches!(result, Err(MapError::DuplicateNode(id)) if id == "plaza"));
}

#[test]
fn test_empty_graph_fails_load() {
    let result = LocationGraph::from_parts(Vec::new(), Vec::new());

    assert!(matches!(result, Err(MapError::Empty)));
}

#[test]
fn test_bounds_cover_all_nodes() {
    let graph = LocationGraph::from_parts(
        [node("a", -2, 3), node("b", 4, -1), node("c", 0, 0)],
        Vec::new(),
    )
    .unwrap();

    let bounds = graph.bounds();
    assert_eq!(bounds.min, IVec2::new(-2, -1));
    assert_eq!(bounds.max, IVec2::new(4, 3));
    for n in graph.nodes() {
        assert!(bounds.contains(n.grid));
    }
}

#[test]
fn test_spec_example_layout() {
    // nodes {A:(0,0), B:(1,0), C:(0,1)}, edges [(A,B), (A,C)]
    let graph = LocationGraph::from_parts(
        [node("A", 0, 0), node("B", 1, 0), node("C", 0, 1)],
        vec![Edge::new("A", "B"), Edge::new("A", "C")],
    )
    .unwrap();

    let bounds = graph.bounds();
    assert_eq!((bounds.min.x, bounds.max.x), (0, 1));
    assert_eq!((bounds.min.y, bounds.max.y), (0, 1));
    assert_eq!(graph.connected_locations("A").as_slice(), ["B", "C"]);
    assert_eq!(graph.connected_locations("B").as_slice(), ["A"]);
    assert_eq!(graph.connected_locations("C").as_slice(), ["A"]);
}

#[test]
fn test_dangling_edges_are_skipped_but_reported() {
    let graph = LocationGraph::from_parts(
        [node("plaza", 0, 0), node("market", 1, 0)],
        vec![Edge::new("plaza", "market"), Edge::new("plaza", "ruins")],
    )
    .unwrap();

    // Skipped for traversal and rendering
    assert_eq!(graph.connected_locations("plaza").as_slice(), ["market"]);
    assert_eq!(graph.unique_edges().count(), 1);

    // Still visible for diagnostics
    let dangling: Vec<&Edge> = graph.dangling_edges().collect();
    assert_eq!(dangling.len(), 1);
    assert_eq!(dangling[0].to, "ruins");
}

#[test]
fn test_self_loops_are_ignored() {
    let graph = LocationGraph::from_parts(
        [node("plaza", 0, 0), node("market", 1, 0)],
        vec![Edge::new("plaza", "plaza"), Edge::new("plaza", "market")],
    )
    .unwrap();

    assert_eq!(graph.connected_locations("plaza").as_slice(), ["market"]);
    assert_eq!(graph.unique_edges().count(), 1);
    assert_eq!(graph.self_loops().count(), 1);
}

#[test]
fn test_node_iteration_follows_insertion_order() {
    let graph = create_test_graph();

    let ids: Vec<&str> = graph.nodes().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["plaza", "market", "inn"]);
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.node("market").unwrap().grid, IVec2::new(1, 0));
    assert!(graph.node("nonexistent").is_none());
}

#[test]
fn test_edges_are_stored_verbatim() {
    let edges = vec![Edge::new("plaza", "market"), Edge::new("market", "plaza")];
    let graph = LocationGraph::from_parts([node("plaza", 0, 0), node("market", 1, 0)], edges.clone()).unwrap();

    assert_eq!(graph.edges(), edges.as_slice());
}
