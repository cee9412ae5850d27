//! The location graph: an undirected graph of locations with layout coordinates.

use std::collections::{HashMap, HashSet};
use std::fmt;

use glam::IVec2;
use smallvec::SmallVec;
use tracing::warn;

use crate::constants::ADJACENCY_INLINE;
use crate::error::MapError;
use crate::map::layout::Bounds;

/// A node in the location graph, defined by its location id and grid position.
///
/// Coordinates are abstract layout-grid positions, not pixels; conversion to
/// a rendering position is a pure function of the graph's [`Bounds`] and a
/// caller-chosen cell size (see [`crate::map::layout::cell_to_pixel`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationNode {
    /// The id of the location this node represents.
    pub id: String,
    /// The 2D layout-grid coordinates of the node.
    pub grid: IVec2,
}

impl LocationNode {
    pub fn new(id: impl Into<String>, grid: IVec2) -> Self {
        LocationNode { id: id.into(), grid }
    }
}

/// An undirected connection between two locations.
///
/// `(A, B)` and `(B, A)` denote the same connection. The edge list of a
/// [`LocationGraph`] is stored verbatim as authored, so it may contain both
/// orientations or outright duplicates; consumers that must visit each
/// connection exactly once deduplicate by [`Edge::key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Returns the canonical, order-independent identity of this edge.
    pub fn key(&self) -> EdgeKey<'_> {
        EdgeKey::new(&self.from, &self.to)
    }

    /// Returns `true` if both endpoints name the same location.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// Returns the endpoint opposite to `id`, if `id` is an endpoint of this edge.
    pub fn other_endpoint(&self, id: &str) -> Option<&str> {
        if self.from == id {
            Some(&self.to)
        } else if self.to == id {
            Some(&self.from)
        } else {
            None
        }
    }
}

/// Canonical identity of an undirected edge: the two endpoint ids in sorted
/// order, so `(A, B)` and `(B, A)` produce an equal key.
///
/// Displays as `"a-b"`, which doubles as a stable dedup key for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey<'a> {
    a: &'a str,
    b: &'a str,
}

impl<'a> EdgeKey<'a> {
    pub fn new(x: &'a str, y: &'a str) -> Self {
        if x <= y {
            EdgeKey { a: x, b: y }
        } else {
            EdgeKey { a: y, b: x }
        }
    }

    /// The two endpoints of the edge in canonical (sorted) order.
    pub fn endpoints(&self) -> (&'a str, &'a str) {
        (self.a, self.b)
    }
}

impl fmt::Display for EdgeKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// An undirected graph of locations with 2D layout coordinates.
///
/// The graph is populated once at world load time and is read-only
/// afterwards: every method takes `&self`, and the struct contains only
/// owned data, so it can be shared freely across readers.
///
/// Node iteration follows insertion order and adjacency results follow edge
/// list order, so all query results are deterministic for a given graph.
pub struct LocationGraph {
    nodes: HashMap<String, LocationNode>,
    /// Node ids in insertion order, for deterministic iteration.
    order: Vec<String>,
    edges: Vec<Edge>,
    bounds: Bounds,
}

impl LocationGraph {
    /// Builds a graph from node and edge descriptors.
    ///
    /// The edge list is stored verbatim: duplicates and reversed pairs are
    /// allowed at rest and are deduplicated at query time. Edges referencing
    /// unknown node ids and self-loops are tolerated but reported once each
    /// as warnings; they are skipped by every query.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two nodes share the same id ([`MapError::DuplicateNode`])
    /// - The node set is empty ([`MapError::Empty`]); a playable world always
    ///   has locations, so bounds over zero nodes are a configuration error
    pub fn from_parts<N, E>(nodes: N, edges: E) -> Result<Self, MapError>
    where
        N: IntoIterator<Item = LocationNode>,
        E: IntoIterator<Item = Edge>,
    {
        let mut index = HashMap::new();
        let mut order = Vec::new();
        for node in nodes {
            if index.contains_key(&node.id) {
                return Err(MapError::DuplicateNode(node.id));
            }
            order.push(node.id.clone());
            index.insert(node.id.clone(), node);
        }

        let bounds = Bounds::of(index.values().map(|node| node.grid)).ok_or(MapError::Empty)?;

        let graph = LocationGraph {
            nodes: index,
            order,
            edges: edges.into_iter().collect(),
            bounds,
        };

        for edge in graph.dangling_edges() {
            warn!("Edge references unknown location: {} -> {}", edge.from, edge.to);
        }
        for edge in graph.self_loops() {
            warn!("Ignoring self-loop on location: {}", edge.from);
        }

        Ok(graph)
    }

    /// Returns every location directly connected to `id` by a single edge.
    ///
    /// Edges are undirected: `id` may appear as either endpoint. Duplicate
    /// edges contribute one entry, self-loops and edges to unknown locations
    /// are skipped, and the result follows edge list order, so repeated calls
    /// return the same sequence.
    ///
    /// An unknown `id` yields an empty result rather than an error, so the UI
    /// can query freely while the world is still loading.
    pub fn connected_locations(&self, id: &str) -> SmallVec<[&str; ADJACENCY_INLINE]> {
        let mut connected = SmallVec::new();
        if !self.nodes.contains_key(id) {
            return connected;
        }

        for edge in &self.edges {
            if edge.is_self_loop() {
                continue;
            }
            if let Some(other) = edge.other_endpoint(id) {
                if self.nodes.contains_key(other) && !connected.contains(&other) {
                    connected.push(other);
                }
            }
        }

        connected
    }

    /// Iterates over each connection exactly once, in canonical orientation.
    ///
    /// This is the enumeration renderers draw from: duplicates and reversed
    /// pairs collapse to a single entry via [`EdgeKey`], and self-loops and
    /// dangling edges are skipped. Order follows the edge list.
    pub fn unique_edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let mut seen = HashSet::new();
        self.edges.iter().filter_map(move |edge| {
            if edge.is_self_loop() {
                return None;
            }
            if !self.nodes.contains_key(&edge.from) || !self.nodes.contains_key(&edge.to) {
                return None;
            }
            let key = edge.key();
            if !seen.insert(key) {
                return None;
            }
            Some(key.endpoints())
        })
    }

    /// Iterates over edges whose endpoints include an unknown location id.
    ///
    /// Such edges come from bad map authoring; they are inert for traversal
    /// and rendering but remain visible here for diagnostics.
    pub fn dangling_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges
            .iter()
            .filter(|edge| !self.nodes.contains_key(&edge.from) || !self.nodes.contains_key(&edge.to))
    }

    /// Iterates over edges that connect a location to itself.
    pub fn self_loops(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(|edge| edge.is_self_loop())
    }

    /// Retrieves a node by location id.
    pub fn node(&self, id: &str) -> Option<&LocationNode> {
        self.nodes.get(id)
    }

    /// Iterates over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &LocationNode> + '_ {
        self.order.iter().map(|id| &self.nodes[id.as_str()])
    }

    /// The raw edge list, verbatim as authored.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The bounding box over all node coordinates.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns the total number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
