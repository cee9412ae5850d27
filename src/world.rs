//! The world state holder: owns the map and the player's current location.
//!
//! The [`World`] is the single writer of player position; the graph it owns
//! is never mutated after load, so UI consumers may hold `&World` (or share
//! it behind an `Arc`) and query freely.

use std::collections::HashMap;

use smallvec::SmallVec;
use tracing::debug;

use crate::constants::ADJACENCY_INLINE;
use crate::error::{WorldError, WorldResult};
use crate::map::builder::WorldMap;
use crate::map::data::{BilingualText, LocationType, WorldMapData};
use crate::map::graph::LocationGraph;

/// Label data for one location: everything the UI renders that the graph
/// itself does not care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: String,
    pub name: BilingualText,
    pub emoji: Option<String>,
    pub kind: LocationType,
    pub description: BilingualText,
}

/// The game world: locations, the validated map, and the current location.
pub struct World {
    locations: HashMap<String, Location>,
    map: WorldMap,
    current: String,
}

impl World {
    /// Builds a world from decoded map data and places the player at the
    /// starting location.
    pub fn new(data: WorldMapData) -> WorldResult<World> {
        let locations: HashMap<String, Location> = data
            .locations
            .iter()
            .map(|loc| {
                let location = Location {
                    id: loc.id.clone(),
                    name: loc.name.clone(),
                    emoji: loc.emoji.clone(),
                    kind: LocationType::parse(&loc.kind),
                    description: loc.description.clone(),
                };
                (loc.id.clone(), location)
            })
            .collect();

        let map = WorldMap::new(data)?;
        let current = map.starting_location.clone();

        Ok(World { locations, map, current })
    }

    /// The validated world map.
    pub fn map(&self) -> &WorldMap {
        &self.map
    }

    /// The location graph, for map rendering and movement validation.
    pub fn graph(&self) -> &LocationGraph {
        &self.map.graph
    }

    /// Retrieves a location's label data by id.
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    /// The id of the location the player is currently in.
    pub fn current_id(&self) -> &str {
        &self.current
    }

    /// The location the player is currently in.
    pub fn current(&self) -> &Location {
        // `current` is always a validated location id.
        &self.locations[self.current.as_str()]
    }

    /// Returns `true` if the player can move directly to `to` from here.
    pub fn can_travel(&self, to: &str) -> bool {
        self.map.graph.connected_locations(&self.current).contains(&to)
    }

    /// Moves the player to a directly connected location.
    ///
    /// # Errors
    ///
    /// Returns an error if `to` is not a known location, or is not directly
    /// connected to the current one.
    pub fn travel(&mut self, to: &str) -> WorldResult<&Location> {
        if !self.locations.contains_key(to) {
            return Err(WorldError::UnknownLocation(to.to_string()));
        }
        if !self.can_travel(to) {
            return Err(WorldError::NotConnected {
                from: self.current.clone(),
                to: to.to_string(),
            });
        }

        debug!("Traveling from {} to {to}", self.current);
        self.current = to.to_string();
        Ok(&self.locations[to])
    }

    /// The locations directly connected to the player's current location.
    pub fn connected_from_here(&self) -> SmallVec<[&str; ADJACENCY_INLINE]> {
        self.map.graph.connected_locations(&self.current)
    }
}
