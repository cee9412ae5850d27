//! This module defines the world map and provides functions for interacting with it.

pub mod builder;
pub mod data;
pub mod graph;
pub mod layout;
