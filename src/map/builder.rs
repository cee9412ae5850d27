//! World map construction from authored map data.

use std::collections::HashSet;

use glam::IVec2;
use pathfinding::prelude::bfs_reach;
use tracing::{debug, warn};

use crate::error::{MapError, WorldResult};
use crate::map::data::{MapMetadata, WorldMapData};
use crate::map::graph::{Edge, LocationGraph, LocationNode};

/// The validated world map: the location graph plus the load-time facts the
/// game needs alongside it.
pub struct WorldMap {
    /// The location graph for travel and rendering.
    pub graph: LocationGraph,
    /// The id of the location where a new game begins.
    pub starting_location: String,
    /// Display metadata for the map header, if authored.
    pub metadata: Option<MapMetadata>,
    unreachable: Vec<String>,
}

impl WorldMap {
    /// Builds a `WorldMap` from decoded map data.
    ///
    /// Per-location connection lists become the graph's edge list verbatim;
    /// since connections may be authored on either side or both, the edge
    /// list routinely contains both orientations, which the graph's queries
    /// deduplicate.
    ///
    /// After construction the map is audited: every location should be
    /// reachable from the starting location. Unreachable locations are
    /// warned about and listed in [`WorldMap::unreachable`], but do not fail
    /// the load.
    ///
    /// # Errors
    ///
    /// Returns an error if the data contains duplicate location ids, no
    /// locations at all, or a `starting_location` that names an unknown id.
    pub fn new(data: WorldMapData) -> WorldResult<WorldMap> {
        let nodes = data
            .locations
            .iter()
            .map(|loc| LocationNode::new(&loc.id, IVec2::new(loc.coordinates.x, loc.coordinates.y)));
        let edges = data
            .locations
            .iter()
            .flat_map(|loc| loc.connections.iter().map(|to| Edge::new(&loc.id, to)));
        let graph = LocationGraph::from_parts(nodes, edges)?;

        let starting_location = match data.starting_location {
            Some(id) => {
                if graph.node(&id).is_none() {
                    return Err(MapError::UnknownStart(id).into());
                }
                id
            }
            // The generator always names a start, but older data may not;
            // fall back to the first authored location.
            None => graph
                .nodes()
                .map(|node| node.id.clone())
                .next()
                .ok_or(MapError::Empty)?,
        };

        let unreachable = audit_reachability(&graph, &starting_location);
        for id in &unreachable {
            warn!("Location is unreachable from {starting_location}: {id}");
        }

        debug!(
            "Built world map: {} locations, {} unique edges, bounds {:?}",
            graph.len(),
            graph.unique_edges().count(),
            graph.bounds(),
        );

        Ok(WorldMap {
            graph,
            starting_location,
            metadata: data.map_metadata,
            unreachable,
        })
    }

    /// Locations the player can never reach from the starting location.
    ///
    /// Non-empty only for badly authored maps; listed in node order.
    pub fn unreachable(&self) -> &[String] {
        &self.unreachable
    }
}

/// Returns the ids of nodes not reachable from `start`, in node order.
fn audit_reachability(graph: &LocationGraph, start: &str) -> Vec<String> {
    let reachable: HashSet<&str> = bfs_reach(start, |id| graph.connected_locations(id)).collect();
    graph
        .nodes()
        .filter(|node| !reachable.contains(node.id.as_str()))
        .map(|node| node.id.clone())
        .collect()
}
