//! Layout math: coordinate bounds and the grid-to-pixel transform.
//!
//! The graph stores abstract grid coordinates only; mapping a coordinate to
//! a rendering position is a pure function of the bounds and a caller-chosen
//! cell size, kept here so the graph stays free of pixel concerns.

use glam::{IVec2, Vec2};

/// The minimal axis-aligned rectangle, in layout-grid space, containing a set
/// of node coordinates. Both corners are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: IVec2,
    pub max: IVec2,
}

impl Bounds {
    /// Computes the bounding box over a set of points.
    ///
    /// Returns `None` for an empty set, where a bounding box is undefined.
    pub fn of(points: impl IntoIterator<Item = IVec2>) -> Option<Bounds> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Bounds { min: first, max: first };
        for point in points {
            bounds.min = bounds.min.min(point);
            bounds.max = bounds.max.max(point);
        }
        Some(bounds)
    }

    /// The number of grid columns covered, inclusive of both edges.
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x + 1
    }

    /// The number of grid rows covered, inclusive of both edges.
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y + 1
    }

    /// Returns `true` if `point` falls within the bounds (inclusive).
    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

/// Maps a grid coordinate to the pixel center of its cell.
///
/// The transform is `(coord - min + 0.5) * cell_size`, placing the minimum
/// coordinate's cell center at half a cell from the origin.
pub fn cell_to_pixel(bounds: Bounds, grid: IVec2, cell_size: f32) -> Vec2 {
    ((grid - bounds.min).as_vec2() + Vec2::splat(0.5)) * cell_size
}

/// The pixel dimensions of the full diagram at the given cell size.
pub fn pixel_size(bounds: Bounds, cell_size: f32) -> Vec2 {
    Vec2::new(bounds.width() as f32, bounds.height() as f32) * cell_size
}
