//! Edit sessions binding a mesh and its active UV layer.
//!
//! Every editing operation runs inside a [`UvEditSession`], which pairs a
//! mutable mesh borrow with the UV layer being edited. This replaces the
//! host editor's ambient "current mesh / current layer" state with an
//! explicit context: two sessions over different meshes cannot interfere,
//! and the borrow checker rules out two sessions over the same mesh.
//!
//! A session begins by resolving the active UV layer (creating a default
//! layer if the mesh has none) and ends with [`commit`](UvEditSession::commit),
//! which reports what was touched so the host knows to propagate in-memory
//! edits back to persisted mesh storage.
//!
//! # Example
//!
//! ```
//! use skerry::mesh::{build_from_uv_polygons, UvMesh};
//! use skerry::session::UvEditSession;
//!
//! let faces = vec![(
//!     vec![0, 1, 2, 3],
//!     vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
//! )];
//! let mut mesh: UvMesh = build_from_uv_polygons(4, &faces).unwrap();
//!
//! let session = UvEditSession::begin(&mut mesh).unwrap();
//! let summary = session.commit();
//! assert_eq!(summary.rewritten, 0);
//! ```

use nalgebra::Point2;

use crate::error::Result;
use crate::mesh::{CornerId, FaceId, MeshIndex, UvLayerId, UvMesh};

/// Name given to the UV layer created when a mesh has none.
const DEFAULT_LAYER_NAME: &str = "UVMap";

/// What an edit session changed, reported by [`UvEditSession::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditSummary {
    /// Number of UV coordinate writes performed during the session.
    pub rewritten: usize,
}

/// An editing session over one mesh and its active UV layer.
///
/// All mutation performed by the editing operations funnels through the
/// session, so the commit summary accounts for every coordinate write.
#[derive(Debug)]
pub struct UvEditSession<'m, I: MeshIndex = u32> {
    mesh: &'m mut UvMesh<I>,
    layer: UvLayerId,
    rewritten: usize,
}

impl<'m, I: MeshIndex> UvEditSession<'m, I> {
    /// Begin a session, resolving the mesh's active UV layer.
    ///
    /// If the mesh has no UV layer at all, a default layer named `"UVMap"`
    /// is created and made active, matching the host editor's verify-on-use
    /// behavior.
    pub fn begin(mesh: &'m mut UvMesh<I>) -> Result<Self> {
        let layer = match mesh.active_layer() {
            Some(layer) => layer,
            None => mesh.add_layer(DEFAULT_LAYER_NAME),
        };
        Ok(Self {
            mesh,
            layer,
            rewritten: 0,
        })
    }

    /// Get the mesh being edited.
    #[inline]
    pub fn mesh(&self) -> &UvMesh<I> {
        self.mesh
    }

    /// Get the UV layer this session edits.
    #[inline]
    pub fn layer(&self) -> UvLayerId {
        self.layer
    }

    /// Get a corner's UV coordinate on the session's layer.
    #[inline]
    pub fn uv(&self, corner: CornerId<I>) -> Point2<f64> {
        self.mesh.uv(self.layer, corner)
    }

    /// Overwrite a corner's UV coordinate on the session's layer.
    #[inline]
    pub fn set_uv(&mut self, corner: CornerId<I>, uv: Point2<f64>) {
        self.mesh.set_uv(self.layer, corner, uv);
        self.rewritten += 1;
    }

    /// Iterate over the corners of a face, in winding order.
    pub fn face_corners(&self, f: FaceId<I>) -> impl Iterator<Item = CornerId<I>> + '_ {
        self.mesh.face_corners(f)
    }

    /// End the session and report what was changed.
    ///
    /// The host uses the summary to decide whether in-memory edits need to
    /// be flushed back to persisted mesh storage.
    pub fn commit(self) -> EditSummary {
        EditSummary {
            rewritten: self.rewritten,
        }
    }
}
