//! Centralized error types for the map engine.
//!
//! This module defines all error types used throughout the crate,
//! providing a consistent error handling approach.

use std::io;

/// Main error type for world loading and travel.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum WorldError {
    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Map data error: {0}")]
    Data(#[from] DataError),

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("No connection from {from} to {to}")]
    NotConnected { from: String, to: String },
}

/// Errors related to the location graph and its construction.
///
/// Dangling edges are deliberately absent here: an edge referencing a missing
/// node is a data-quality warning, reported via `tracing` and the graph's
/// diagnostics accessors, never a failure.
#[derive(thiserror::Error, Debug)]
pub enum MapError {
    #[error("Duplicate location id: {0}")]
    DuplicateNode(String),

    #[error("World map contains no locations")]
    Empty,

    #[error("Starting location not found: {0}")]
    UnknownStart(String),
}

/// Errors related to reading and decoding map data.
#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for world operations.
pub type WorldResult<T> = Result<T, WorldError>;
