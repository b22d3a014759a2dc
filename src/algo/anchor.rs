//! Target-anchor resolution for alignment operations.
//!
//! Editing operations that position islands relative to something need a
//! reference: the whole UV space, the currently active island, or the 2D
//! cursor. This module dispatches on that choice. It is a pure selection
//! function; the cursor position is supplied by the caller because the
//! viewport owning it belongs to the host editor.

use nalgebra::Point2;

use crate::algo::bounds::{island_bounding_box, BoundingBox};
use crate::error::Result;
use crate::mesh::{IslandSet, MeshIndex};
use crate::session::UvEditSession;

/// What to anchor an operation to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorMode {
    /// The nominal (0, 0) to (1, 1) UV space.
    UvSpace,
    /// The bounding box of the active island.
    ActiveIsland,
    /// The 2D cursor position.
    Cursor,
}

/// A resolved anchor: either a region or a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetAnchor {
    /// An anchoring region, as a bounding box.
    Bounds(BoundingBox),
    /// A single anchoring point.
    Point(Point2<f64>),
}

/// Resolve an anchor mode against an island set.
///
/// Returns `Ok(None)` only for [`AnchorMode::ActiveIsland`] when no island
/// is active; that is an expected absence callers must handle, not an
/// error. [`AnchorMode::UvSpace`] ignores the islands entirely and
/// [`AnchorMode::Cursor`] returns the supplied cursor point unchanged.
///
/// # Errors
///
/// Propagates bounding-box failures for an active island with no faces or
/// with face identifiers outside the mesh.
///
/// # Example
///
/// ```
/// use nalgebra::Point2;
/// use skerry::algo::anchor::{resolve_anchor, AnchorMode, TargetAnchor};
/// use skerry::mesh::{build_from_uv_polygons, IslandSet, UvMesh};
/// use skerry::session::UvEditSession;
///
/// let faces = vec![(
///     vec![0, 1, 2, 3],
///     vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
/// )];
/// let mut mesh: UvMesh = build_from_uv_polygons(4, &faces).unwrap();
/// let session = UvEditSession::begin(&mut mesh).unwrap();
///
/// let islands = IslandSet::default();
/// let anchor = resolve_anchor(&session, AnchorMode::UvSpace, &islands, Point2::origin())
///     .unwrap()
///     .unwrap();
/// match anchor {
///     TargetAnchor::Bounds(bbox) => assert_eq!(bbox.max, Point2::new(1.0, 1.0)),
///     TargetAnchor::Point(_) => unreachable!(),
/// }
/// ```
pub fn resolve_anchor<I: MeshIndex>(
    session: &UvEditSession<'_, I>,
    mode: AnchorMode,
    islands: &IslandSet<I>,
    cursor: Point2<f64>,
) -> Result<Option<TargetAnchor>> {
    match mode {
        AnchorMode::UvSpace => Ok(Some(TargetAnchor::Bounds(BoundingBox::uv_space()))),
        AnchorMode::ActiveIsland => match islands.active_island() {
            Some(island) => {
                let bbox = island_bounding_box(session, island)?;
                Ok(Some(TargetAnchor::Bounds(bbox)))
            }
            None => Ok(None),
        },
        AnchorMode::Cursor => Ok(Some(TargetAnchor::Point(cursor))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{build_from_uv_polygons, Island, UvMesh};

    fn mesh_and_islands() -> (UvMesh, IslandSet) {
        let mesh = build_from_uv_polygons(
            8,
            &[
                (
                    vec![0, 1, 2, 3],
                    vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
                ),
                (
                    vec![4, 5, 6, 7],
                    vec![[2.0, 2.0], [3.0, 2.0], [3.0, 4.0], [2.0, 4.0]],
                ),
            ],
        )
        .unwrap();
        let islands = IslandSet::new(vec![
            Island::from_indices(&[0]),
            Island::from_indices(&[1]),
        ]);
        (mesh, islands)
    }

    #[test]
    fn test_uv_space_ignores_islands() {
        let (mut mesh, islands) = mesh_and_islands();
        let session = UvEditSession::begin(&mut mesh).unwrap();

        let anchor = resolve_anchor(&session, AnchorMode::UvSpace, &islands, Point2::origin())
            .unwrap()
            .unwrap();
        assert_eq!(
            anchor,
            TargetAnchor::Bounds(BoundingBox::new(
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 1.0)
            ))
        );

        // Same result for an empty set
        let empty = IslandSet::default();
        let again = resolve_anchor(&session, AnchorMode::UvSpace, &empty, Point2::origin())
            .unwrap()
            .unwrap();
        assert_eq!(again, anchor);
    }

    #[test]
    fn test_active_island_bounds() {
        let (mut mesh, mut islands) = mesh_and_islands();
        islands.set_active(1).unwrap();
        let session = UvEditSession::begin(&mut mesh).unwrap();

        let anchor = resolve_anchor(
            &session,
            AnchorMode::ActiveIsland,
            &islands,
            Point2::origin(),
        )
        .unwrap()
        .unwrap();
        match anchor {
            TargetAnchor::Bounds(bbox) => {
                assert_eq!(bbox.min, Point2::new(2.0, 2.0));
                assert_eq!(bbox.max, Point2::new(3.0, 4.0));
            }
            TargetAnchor::Point(_) => panic!("expected bounds"),
        }
    }

    #[test]
    fn test_no_active_island_is_none() {
        let (mut mesh, islands) = mesh_and_islands();
        let session = UvEditSession::begin(&mut mesh).unwrap();

        let anchor = resolve_anchor(
            &session,
            AnchorMode::ActiveIsland,
            &islands,
            Point2::origin(),
        )
        .unwrap();
        assert!(anchor.is_none());
    }

    #[test]
    fn test_cursor_passthrough() {
        let (mut mesh, islands) = mesh_and_islands();
        let session = UvEditSession::begin(&mut mesh).unwrap();

        let cursor = Point2::new(0.3, -0.7);
        let anchor = resolve_anchor(&session, AnchorMode::Cursor, &islands, cursor)
            .unwrap()
            .unwrap();
        assert_eq!(anchor, TargetAnchor::Point(cursor));
    }
}
