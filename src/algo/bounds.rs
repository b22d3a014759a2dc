//! Bounding boxes over island UV coordinates.
//!
//! This module reduces the UV coordinates of one or more islands to an
//! axis-aligned bounding box. Boxes are derived on demand and never stored;
//! the reduction is a pure read over the session's active UV layer.
//!
//! # Example
//!
//! ```
//! use skerry::algo::bounds::bounding_box;
//! use skerry::mesh::{build_from_uv_polygons, Island, UvMesh};
//! use skerry::session::UvEditSession;
//!
//! let faces = vec![(
//!     vec![0, 1, 2, 3],
//!     vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
//! )];
//! let mut mesh: UvMesh = build_from_uv_polygons(4, &faces).unwrap();
//! let island = Island::from_indices(&[0]);
//!
//! let session = UvEditSession::begin(&mut mesh).unwrap();
//! let bbox = bounding_box(&session, std::slice::from_ref(&island)).unwrap();
//! assert_eq!(bbox.width(), 1.0);
//! assert_eq!(bbox.height(), 1.0);
//! ```

use nalgebra::Point2;

use crate::error::{Result, UvError};
use crate::mesh::{Island, MeshIndex};
use crate::session::UvEditSession;

/// An axis-aligned bounding box in UV space.
///
/// Once computed from a non-empty point set, `min.x <= max.x` and
/// `min.y <= max.y` hold. The aggregation functions in this module never
/// return a degenerate (min > max) box; they fail instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner (lowest u, lowest v).
    pub min: Point2<f64>,
    /// Maximum corner (highest u, highest v).
    pub max: Point2<f64>,
}

impl BoundingBox {
    /// Create a box from its corners.
    pub fn new(min: Point2<f64>, max: Point2<f64>) -> Self {
        Self { min, max }
    }

    /// The nominal UV space: (0, 0) to (1, 1).
    pub fn uv_space() -> Self {
        Self {
            min: Point2::new(0.0, 0.0),
            max: Point2::new(1.0, 1.0),
        }
    }

    /// An empty box that any point expansion will overwrite.
    ///
    /// Seeded with infinities so that coordinates of any magnitude fold in
    /// correctly. Degenerate (min > max) until at least one point is added.
    fn empty() -> Self {
        Self {
            min: Point2::new(f64::INFINITY, f64::INFINITY),
            max: Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// True until at least one point has been folded in.
    fn is_degenerate(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Grow the box to include a point.
    pub fn expand(&mut self, p: Point2<f64>) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Width of the box (u extent).
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the box (v extent).
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center point of the box.
    pub fn center(&self) -> Point2<f64> {
        Point2::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Top-left corner (lowest u, highest v).
    pub fn top_left(&self) -> Point2<f64> {
        Point2::new(self.min.x, self.max.y)
    }

    /// Bottom-right corner (highest u, lowest v).
    pub fn bottom_right(&self) -> Point2<f64> {
        Point2::new(self.max.x, self.min.y)
    }

    /// Check whether a point lies inside the box (inclusive bounds).
    pub fn contains(&self, p: Point2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// The smallest box containing both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

/// Compute the bounding box of every UV coordinate in a set of islands.
///
/// Scans every corner of every face of every island on the session's active
/// layer and reduces to a single box. The result is invariant under island
/// order and face order.
///
/// # Errors
///
/// - [`UvError::EmptyInput`] if `islands` is empty or no island contributes
///   a face; a degenerate box is never returned
/// - [`UvError::InvalidFaceId`] if an island references a face outside the
///   mesh
pub fn bounding_box<I: MeshIndex>(
    session: &UvEditSession<'_, I>,
    islands: &[Island<I>],
) -> Result<BoundingBox> {
    if islands.is_empty() {
        return Err(UvError::EmptyInput { what: "islands" });
    }

    let mut bbox = BoundingBox::empty();
    for island in islands {
        for corner in island.corners(session.mesh())? {
            bbox.expand(session.uv(corner));
        }
    }

    if bbox.is_degenerate() {
        return Err(UvError::EmptyInput {
            what: "island faces",
        });
    }
    Ok(bbox)
}

/// Compute the bounding box of a single island.
pub fn island_bounding_box<I: MeshIndex>(
    session: &UvEditSession<'_, I>,
    island: &Island<I>,
) -> Result<BoundingBox> {
    bounding_box(session, std::slice::from_ref(island))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{build_from_uv_polygons, UvMesh};

    fn session_mesh() -> UvMesh {
        // Face 0: unit quad. Face 1: quad offset to (2, 3)..(2.5, 3.5).
        build_from_uv_polygons(
            8,
            &[
                (
                    vec![0, 1, 2, 3],
                    vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
                ),
                (
                    vec![4, 5, 6, 7],
                    vec![[2.0, 3.0], [2.5, 3.0], [2.5, 3.5], [2.0, 3.5]],
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_unit_quad_bbox() {
        let mut mesh = session_mesh();
        let session = UvEditSession::begin(&mut mesh).unwrap();
        let island = Island::from_indices(&[0]);

        let bbox = island_bounding_box(&session, &island).unwrap();
        assert_eq!(bbox.min, Point2::new(0.0, 0.0));
        assert_eq!(bbox.max, Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_multi_island_bbox() {
        let mut mesh = session_mesh();
        let session = UvEditSession::begin(&mut mesh).unwrap();
        let islands = vec![Island::from_indices(&[0]), Island::from_indices(&[1])];

        let bbox = bounding_box(&session, &islands).unwrap();
        assert_eq!(bbox.min, Point2::new(0.0, 0.0));
        assert_eq!(bbox.max, Point2::new(2.5, 3.5));
    }

    #[test]
    fn test_island_order_invariance() {
        let mut mesh = session_mesh();
        let session = UvEditSession::begin(&mut mesh).unwrap();
        let a = Island::from_indices(&[0]);
        let b = Island::from_indices(&[1]);

        let fwd = bounding_box(&session, &[a.clone(), b.clone()]).unwrap();
        let rev = bounding_box(&session, &[b, a]).unwrap();
        assert_eq!(fwd, rev);
    }

    #[test]
    fn test_large_coordinates_aggregate() {
        // Coordinates far outside the nominal [0, 1] range must still fold in.
        let mut mesh: UvMesh = build_from_uv_polygons(
            3,
            &[(
                vec![0, 1, 2],
                vec![[-4000.0, 0.0], [4000.0, 0.0], [0.0, 2500.0]],
            )],
        )
        .unwrap();
        let session = UvEditSession::begin(&mut mesh).unwrap();
        let island = Island::from_indices(&[0]);

        let bbox = island_bounding_box(&session, &island).unwrap();
        assert_eq!(bbox.min, Point2::new(-4000.0, 0.0));
        assert_eq!(bbox.max, Point2::new(4000.0, 2500.0));
    }

    #[test]
    fn test_empty_inputs_fail() {
        let mut mesh = session_mesh();
        let session = UvEditSession::begin(&mut mesh).unwrap();

        let err = bounding_box(&session, &[]).unwrap_err();
        assert!(matches!(err, UvError::EmptyInput { what: "islands" }));

        let hollow: Island = Island::default();
        let err = island_bounding_box(&session, &hollow).unwrap_err();
        assert!(matches!(err, UvError::EmptyInput { .. }));
    }

    #[test]
    fn test_box_helpers() {
        let bbox = BoundingBox::new(Point2::new(1.0, 2.0), Point2::new(3.0, 6.0));
        assert_eq!(bbox.width(), 2.0);
        assert_eq!(bbox.height(), 4.0);
        assert_eq!(bbox.center(), Point2::new(2.0, 4.0));
        assert_eq!(bbox.top_left(), Point2::new(1.0, 6.0));
        assert_eq!(bbox.bottom_right(), Point2::new(3.0, 2.0));
        assert!(bbox.contains(Point2::new(2.0, 3.0)));
        assert!(!bbox.contains(Point2::new(0.0, 3.0)));

        let other = BoundingBox::new(Point2::new(-1.0, 3.0), Point2::new(2.0, 8.0));
        let joined = bbox.union(&other);
        assert_eq!(joined.min, Point2::new(-1.0, 2.0));
        assert_eq!(joined.max, Point2::new(3.0, 8.0));
    }
}
