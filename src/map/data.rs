//! Map data ingestion: the JSON shape emitted by the world generator.
//!
//! The generator produces a `map.json` with bilingual labels, location
//! coordinates, and per-location connection id lists. This module holds the
//! serde model for that shape; converting it into a validated
//! [`crate::map::graph::LocationGraph`] is the builder's job.

use std::io;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::DataError;

/// A piece of text in both the player's native language and the target
/// language being learned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualText {
    #[serde(default)]
    pub native_language: String,
    #[serde(default)]
    pub target_language: String,
}

/// A 2D layout-grid position, as authored in map data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

/// The broad category of a location, parsed from the free-form `type` string
/// in map data. Unrecognized values fall back to [`LocationType::Unknown`]
/// rather than failing the load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LocationType {
    Building,
    Outdoor,
    Dungeon,
    Home,
    Shop,
    Landmark,
    #[default]
    Unknown,
}

impl LocationType {
    /// Parses a raw `type` string, tolerating unknown values.
    pub fn parse(raw: &str) -> LocationType {
        LocationType::from_str(raw.trim()).unwrap_or_default()
    }
}

/// One location as authored in map data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationData {
    pub id: String,
    pub name: BilingualText,
    #[serde(default)]
    pub description: BilingualText,
    /// Free-form location category, e.g. `"shop"`; see [`LocationType`].
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub emoji: Option<String>,
    pub coordinates: Coordinates,
    /// Ids of directly connected locations. Connections are undirected and
    /// may be authored on either side, or both.
    #[serde(default)]
    pub connections: Vec<String>,
}

/// Display metadata for the map as a whole, used for the UI header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapMetadata {
    #[serde(default)]
    pub name: BilingualText,
    #[serde(default)]
    pub description: BilingualText,
    #[serde(default)]
    pub scale: Option<String>,
}

/// The full world map document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldMapData {
    #[serde(default)]
    pub map_metadata: Option<MapMetadata>,
    #[serde(default)]
    pub starting_location: Option<String>,
    pub locations: Vec<LocationData>,
}

impl WorldMapData {
    /// Decodes map data from a JSON string.
    pub fn from_str(raw: &str) -> Result<WorldMapData, DataError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Decodes map data from a JSON reader, e.g. an open file.
    pub fn from_reader(reader: impl io::Read) -> Result<WorldMapData, DataError> {
        Ok(serde_json::from_reader(reader)?)
    }
}
