//! # Skerry
//!
//! Editing operations for UV islands: connected groups of mesh faces laid
//! out together in 2D texture space.
//!
//! Skerry is the geometry core of a UV editing workflow. It computes
//! bounding boxes over island UV coordinates, snaps one island's vertices
//! onto coinciding or nearby vertices of another, and resolves the anchor
//! an alignment operation positions against. The host editor owns the real
//! mesh, the selection state, and the viewport; skerry operates on a small
//! face-corner stand-in it hands over for the duration of an edit session.
//!
//! ## Features
//!
//! - **Face-corner mesh with UV layers**: per-corner coordinates, so seams
//!   split vertices into independently editable UV points
//! - **Explicit edit sessions**: mesh + active layer bound per operation,
//!   no ambient editor state
//! - **Tie-inclusive snapping**: every candidate at minimum distance is
//!   matched, never an arbitrary single best
//! - **Flexible indexing**: 16-bit, 32-bit, and 64-bit indices
//!
//! ## Quick Start
//!
//! ```
//! use skerry::algo::snap::snap_target_onto_source;
//! use skerry::prelude::*;
//!
//! // Two single-face islands; the second sits 0.01 from the first in u.
//! let faces = vec![
//!     (
//!         vec![0, 1, 2],
//!         vec![[0.5, 0.5], [0.0, 0.0], [0.25, 0.0]],
//!     ),
//!     (
//!         vec![3, 4, 5],
//!         vec![[0.51, 0.5], [1.0, 0.0], [1.0, 1.0]],
//!     ),
//! ];
//! let mut mesh: UvMesh = build_from_uv_polygons(6, &faces).unwrap();
//!
//! let source = Island::from_indices(&[0]);
//! let target = Island::from_indices(&[1]);
//!
//! let mut session = UvEditSession::begin(&mut mesh).unwrap();
//! let report = snap_target_onto_source(&mut session, &source, &target, 0.02).unwrap();
//! let summary = session.commit();
//!
//! assert_eq!(report.moved, 1);
//! assert_eq!(summary.rewritten, 1);
//! ```
//!
//! ## Measuring Islands
//!
//! ```
//! use skerry::algo::bounds::island_bounding_box;
//! use skerry::prelude::*;
//!
//! let faces = vec![(
//!     vec![0, 1, 2, 3],
//!     vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
//! )];
//! let mut mesh: UvMesh = build_from_uv_polygons(4, &faces).unwrap();
//! let island = Island::from_indices(&[0]);
//!
//! let session = UvEditSession::begin(&mut mesh).unwrap();
//! let bbox = island_bounding_box(&session, &island).unwrap();
//! assert_eq!(bbox.center(), nalgebra::Point2::new(0.5, 0.5));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod mesh;
pub mod session;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use skerry::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, UvError};
    pub use crate::mesh::{
        build_from_polygons, build_from_uv_polygons, CornerId, FaceId, Island, IslandSet,
        MeshIndex, UvLayerId, UvMesh, VertexId,
    };
    pub use crate::session::{EditSummary, UvEditSession};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
