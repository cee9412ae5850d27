//! Location graph and world map engine for a language-learning RPG.
//!
//! The world of the game is a set of locations (market, inn, town square)
//! connected by travel routes. This crate models that topology as an
//! undirected graph with 2D layout coordinates, ingests the generated map
//! data, and answers the structural queries the UI needs: adjacency for
//! movement validation and bounds for sizing the rendered map diagram.
//!
//! The graph is built once during world loading and is immutable afterwards;
//! any number of consumers may share it read-only.

pub mod constants;
pub mod error;
pub mod map;
pub mod world;
