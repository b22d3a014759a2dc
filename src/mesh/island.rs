//! UV islands: groups of faces treated as one unit in texture space.
//!
//! An island is a connected group of faces laid out together in UV space.
//! Islands group face *identifiers*; they never own faces, and every
//! identifier must resolve in the mesh an operation runs against. Island
//! detection itself (deciding which faces are connected) belongs to the host
//! editor; islands arrive here ready-made.

use super::facemesh::UvMesh;
use super::index::{CornerId, FaceId, MeshIndex};
use crate::error::{Result, UvError};

/// A group of face identifiers forming one UV island.
#[derive(Debug, Clone, Default)]
pub struct Island<I: MeshIndex = u32> {
    faces: Vec<FaceId<I>>,
}

impl<I: MeshIndex> Island<I> {
    /// Create an island from face IDs.
    pub fn new(faces: Vec<FaceId<I>>) -> Self {
        Self { faces }
    }

    /// Create an island from raw face indices.
    pub fn from_indices(faces: &[usize]) -> Self {
        Self {
            faces: faces.iter().map(|&f| FaceId::new(f)).collect(),
        }
    }

    /// Get the island's face list.
    #[inline]
    pub fn faces(&self) -> &[FaceId<I>] {
        &self.faces
    }

    /// Get the number of faces in the island.
    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Check if the island has no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Check whether the island contains a face.
    pub fn contains(&self, face: FaceId<I>) -> bool {
        self.faces.contains(&face)
    }

    /// Add a face to the island.
    pub fn push(&mut self, face: FaceId<I>) {
        self.faces.push(face);
    }

    /// Collect the IDs of every corner in the island, in face order.
    ///
    /// Fails if any face identifier does not resolve in `mesh`.
    pub fn corners(&self, mesh: &UvMesh<I>) -> Result<Vec<CornerId<I>>> {
        let mut out = Vec::new();
        for &face in &self.faces {
            if !mesh.contains_face(face) {
                return Err(UvError::InvalidFaceId {
                    face: face.index(),
                    num_faces: mesh.num_faces(),
                });
            }
            out.extend(mesh.face_corners(face));
        }
        Ok(out)
    }
}

/// A collection of islands with an optional active (selected) island.
///
/// Mirrors the host editor's single-selection notion: at most one island is
/// active at a time, and operations that need "the active island" receive
/// this set rather than reading ambient editor state.
#[derive(Debug, Clone, Default)]
pub struct IslandSet<I: MeshIndex = u32> {
    islands: Vec<Island<I>>,
    active: Option<usize>,
}

impl<I: MeshIndex> IslandSet<I> {
    /// Create a set from islands, with no active island.
    pub fn new(islands: Vec<Island<I>>) -> Self {
        Self {
            islands,
            active: None,
        }
    }

    /// Get the islands as a slice.
    #[inline]
    pub fn islands(&self) -> &[Island<I>] {
        &self.islands
    }

    /// Get the number of islands.
    #[inline]
    pub fn len(&self) -> usize {
        self.islands.len()
    }

    /// Check if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.islands.is_empty()
    }

    /// Add an island to the set.
    pub fn push(&mut self, island: Island<I>) {
        self.islands.push(island);
    }

    /// Mark an island as active.
    pub fn set_active(&mut self, island: usize) -> Result<()> {
        if island >= self.islands.len() {
            return Err(UvError::InvalidIslandIndex {
                island,
                num_islands: self.islands.len(),
            });
        }
        self.active = Some(island);
        Ok(())
    }

    /// Clear the active island.
    pub fn clear_active(&mut self) {
        self.active = None;
    }

    /// Get the active island, if one is marked.
    ///
    /// Absence is an expected condition, not an error; callers decide how to
    /// proceed without a selection.
    pub fn active_island(&self) -> Option<&Island<I>> {
        self.active.map(|i| &self.islands[i])
    }
}
