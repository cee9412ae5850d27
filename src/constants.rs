//! This module contains the constants used by the map engine.

/// The default size of one layout cell, in pixels.
///
/// Consumers that render the map diagram at a different scale pass their own
/// cell size to [`crate::map::layout::cell_to_pixel`].
pub const DEFAULT_CELL_SIZE: f32 = 48.0;

/// Inline capacity for adjacency query results.
///
/// Generated maps connect most locations to a handful of neighbors, so
/// results of this size avoid a heap allocation.
pub const ADJACENCY_INLINE: usize = 4;
