//! Face-corner mesh data structure with UV layers.
//!
//! This module provides the in-memory stand-in for the host editor's mesh:
//! polygonal faces, the corners (loops) that make them up, and one or more
//! UV layers storing a 2D texture coordinate per corner.
//!
//! # Structure
//!
//! - Each **face** owns a contiguous run of corners
//! - Each **corner** references the 3D vertex it sits on and the face it
//!   belongs to
//! - Each **UV layer** stores one `Point2<f64>` per corner; exactly one
//!   layer is *active* at a time and is the one editing operations touch
//!
//! # Seams
//!
//! UV coordinates live on corners, not vertices. Two faces meeting at a
//! vertex each have their own corner there, so a seam splits the vertex into
//! independently editable UV points.

use nalgebra::Point2;

use super::index::{CornerId, FaceId, MeshIndex, VertexId};
use crate::error::{Result, UvError};

/// A face corner (loop) in the mesh.
///
/// A corner is one face's reference to one vertex; the corner's index is
/// also its key into every UV layer.
#[derive(Debug, Clone, Copy)]
pub struct Corner<I: MeshIndex = u32> {
    /// The 3D vertex this corner sits on.
    pub vertex: VertexId<I>,

    /// The face this corner belongs to.
    pub face: FaceId<I>,
}

/// A polygonal face in the mesh.
///
/// Faces store their corners as a contiguous range into the mesh's corner
/// table, in winding order.
#[derive(Debug, Clone, Copy)]
pub struct Face<I: MeshIndex = u32> {
    /// The first corner of this face's contiguous corner run.
    pub first_corner: CornerId<I>,

    /// Number of corners (at least 3 for a valid face).
    pub corner_count: usize,
}

/// Identifier for a UV layer on a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct UvLayerId(pub(crate) usize);

impl UvLayerId {
    /// Get the raw layer index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named UV layer: one texture coordinate per corner.
#[derive(Debug, Clone)]
pub struct UvLayer {
    name: String,
    uv: Vec<Point2<f64>>,
}

impl UvLayer {
    /// Get the layer's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the raw coordinate slice, indexed by corner.
    pub fn as_slice(&self) -> &[Point2<f64>] {
        &self.uv
    }
}

/// A polygonal mesh with per-corner UV layers.
///
/// This structure owns the face, corner, and UV-layer tables that editing
/// operations read and write. It deliberately carries no 3D positions or
/// edge connectivity; those belong to the host editor.
#[derive(Debug, Clone, Default)]
pub struct UvMesh<I: MeshIndex = u32> {
    /// All faces in the mesh.
    pub(crate) faces: Vec<Face<I>>,

    /// All corners, grouped contiguously by face.
    pub(crate) corners: Vec<Corner<I>>,

    /// UV layers, each with one coordinate per corner.
    pub(crate) layers: Vec<UvLayer>,

    /// Index of the active UV layer, if any.
    pub(crate) active_layer: Option<usize>,
}

impl<I: MeshIndex> UvMesh<I> {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self {
            faces: Vec::new(),
            corners: Vec::new(),
            layers: Vec::new(),
            active_layer: None,
        }
    }

    /// Create a mesh with pre-allocated capacity.
    pub fn with_capacity(num_faces: usize, num_corners: usize) -> Self {
        Self {
            faces: Vec::with_capacity(num_faces),
            corners: Vec::with_capacity(num_corners),
            layers: Vec::new(),
            active_layer: None,
        }
    }

    // ==================== Accessors ====================

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Get the number of corners.
    #[inline]
    pub fn num_corners(&self) -> usize {
        self.corners.len()
    }

    /// Get the number of UV layers.
    #[inline]
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Get a face by ID.
    #[inline]
    pub fn face(&self, id: FaceId<I>) -> &Face<I> {
        &self.faces[id.index()]
    }

    /// Get a corner by ID.
    #[inline]
    pub fn corner(&self, id: CornerId<I>) -> &Corner<I> {
        &self.corners[id.index()]
    }

    /// Check whether a face ID resolves in this mesh.
    #[inline]
    pub fn contains_face(&self, id: FaceId<I>) -> bool {
        id.is_valid() && id.index() < self.faces.len()
    }

    // ==================== Construction ====================

    /// Append a face from its vertex IDs, in winding order.
    ///
    /// Every UV layer grows by one origin coordinate per new corner; set the
    /// actual coordinates afterwards with [`set_uv`](Self::set_uv).
    ///
    /// Input validation (index range, degeneracy) belongs to the builder
    /// functions; this method trusts its input.
    pub fn add_face(&mut self, vertices: &[VertexId<I>]) -> FaceId<I> {
        let face_id = FaceId::new(self.faces.len());
        let first_corner = CornerId::new(self.corners.len());

        for &v in vertices {
            self.corners.push(Corner {
                vertex: v,
                face: face_id,
            });
        }
        for layer in &mut self.layers {
            layer
                .uv
                .resize(self.corners.len(), Point2::origin());
        }

        self.faces.push(Face {
            first_corner,
            corner_count: vertices.len(),
        });
        face_id
    }

    // ==================== UV Layers ====================

    /// Add a UV layer with the given name, initialized to the origin.
    ///
    /// The first layer added becomes the active layer.
    pub fn add_layer(&mut self, name: &str) -> UvLayerId {
        let id = UvLayerId(self.layers.len());
        self.layers.push(UvLayer {
            name: name.to_string(),
            uv: vec![Point2::origin(); self.corners.len()],
        });
        if self.active_layer.is_none() {
            self.active_layer = Some(id.0);
        }
        id
    }

    /// Get the active UV layer, if the mesh has one.
    #[inline]
    pub fn active_layer(&self) -> Option<UvLayerId> {
        self.active_layer.map(UvLayerId)
    }

    /// Set the active UV layer.
    pub fn set_active_layer(&mut self, layer: UvLayerId) -> Result<()> {
        if layer.0 >= self.layers.len() {
            return Err(UvError::InvalidLayer {
                layer: layer.0,
                num_layers: self.layers.len(),
            });
        }
        self.active_layer = Some(layer.0);
        Ok(())
    }

    /// Get a UV layer by ID.
    #[inline]
    pub fn layer(&self, layer: UvLayerId) -> &UvLayer {
        &self.layers[layer.0]
    }

    /// Get a corner's UV coordinate on a layer.
    #[inline]
    pub fn uv(&self, layer: UvLayerId, corner: CornerId<I>) -> Point2<f64> {
        self.layers[layer.0].uv[corner.index()]
    }

    /// Set a corner's UV coordinate on a layer.
    #[inline]
    pub fn set_uv(&mut self, layer: UvLayerId, corner: CornerId<I>, uv: Point2<f64>) {
        self.layers[layer.0].uv[corner.index()] = uv;
    }

    // ==================== Iteration ====================

    /// Iterate over all face IDs.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId<I>> + '_ {
        (0..self.faces.len()).map(|i| FaceId::new(i))
    }

    /// Iterate over all faces with their IDs.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId<I>, &Face<I>)> + '_ {
        self.faces
            .iter()
            .enumerate()
            .map(|(i, f)| (FaceId::new(i), f))
    }

    /// Iterate over all corner IDs.
    pub fn corner_ids(&self) -> impl Iterator<Item = CornerId<I>> + '_ {
        (0..self.corners.len()).map(|i| CornerId::new(i))
    }

    /// Iterate over all corners with their IDs.
    pub fn corners(&self) -> impl Iterator<Item = (CornerId<I>, &Corner<I>)> + '_ {
        self.corners
            .iter()
            .enumerate()
            .map(|(i, c)| (CornerId::new(i), c))
    }

    /// Iterate over the corners of a face, in winding order.
    pub fn face_corners(&self, f: FaceId<I>) -> impl Iterator<Item = CornerId<I>> + '_ {
        let face = self.face(f);
        let start = face.first_corner.index();
        (start..start + face.corner_count).map(|i| CornerId::new(i))
    }
}
