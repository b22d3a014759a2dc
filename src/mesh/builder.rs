//! Mesh construction utilities.
//!
//! This module provides functions for building UV meshes from face-vertex
//! lists as commonly handed over by a host mesh editor.

use nalgebra::Point2;

use super::facemesh::UvMesh;
use super::index::{CornerId, MeshIndex, VertexId};
use crate::error::{Result, UvError};

/// Build a UV mesh from polygonal faces.
///
/// # Arguments
/// * `num_vertices` - Number of vertices in the host mesh
/// * `faces` - List of faces, each as a list of vertex indices in winding order
///
/// # Returns
/// A mesh with no UV layers yet, or an error if the input is invalid.
///
/// # Example
/// ```
/// use skerry::mesh::{build_from_polygons, UvMesh};
///
/// let faces = vec![vec![0, 1, 2, 3], vec![1, 4, 5, 2]];
/// let mesh: UvMesh = build_from_polygons(6, &faces).unwrap();
/// assert_eq!(mesh.num_faces(), 2);
/// assert_eq!(mesh.num_corners(), 8);
/// ```
pub fn build_from_polygons<I: MeshIndex>(
    num_vertices: usize,
    faces: &[Vec<usize>],
) -> Result<UvMesh<I>> {
    if faces.is_empty() {
        return Err(UvError::EmptyInput { what: "faces" });
    }

    // Validate vertex indices and face arity
    for (fi, face) in faces.iter().enumerate() {
        if face.len() < 3 {
            return Err(UvError::DegenerateFace { face: fi });
        }
        for &vi in face {
            if vi >= num_vertices {
                return Err(UvError::InvalidVertexIndex { face: fi, vertex: vi });
            }
        }
        // Check for repeated vertices within the face
        for (i, &vi) in face.iter().enumerate() {
            if face[i + 1..].contains(&vi) {
                return Err(UvError::DegenerateFace { face: fi });
            }
        }
    }

    let num_corners = faces.iter().map(Vec::len).sum();
    let mut mesh = UvMesh::with_capacity(faces.len(), num_corners);

    for face in faces {
        let vertex_ids: Vec<VertexId<I>> = face.iter().map(|&vi| VertexId::new(vi)).collect();
        mesh.add_face(&vertex_ids);
    }

    Ok(mesh)
}

/// Build a UV mesh from polygonal faces with per-corner UV coordinates.
///
/// Creates a default UV layer named `"UVMap"`, fills it from the supplied
/// coordinates, and leaves it active. Each face's UV list must match its
/// corner count.
///
/// # Example
/// ```
/// use skerry::mesh::{build_from_uv_polygons, UvMesh};
///
/// let faces = vec![(
///     vec![0, 1, 2, 3],
///     vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
/// )];
/// let mesh: UvMesh = build_from_uv_polygons(4, &faces).unwrap();
/// assert!(mesh.active_layer().is_some());
/// ```
pub fn build_from_uv_polygons<I: MeshIndex>(
    num_vertices: usize,
    faces: &[(Vec<usize>, Vec<[f64; 2]>)],
) -> Result<UvMesh<I>> {
    for (fi, (face, uvs)) in faces.iter().enumerate() {
        if face.len() != uvs.len() {
            return Err(UvError::CornerCountMismatch {
                face: fi,
                corners: face.len(),
                uvs: uvs.len(),
            });
        }
    }

    let indices: Vec<Vec<usize>> = faces.iter().map(|(f, _)| f.clone()).collect();
    let mut mesh = build_from_polygons(num_vertices, &indices)?;

    let layer = mesh.add_layer("UVMap");
    // Corner order follows face order, so a flat index lines up
    let mut corner = 0;
    for (_, uvs) in faces {
        for uv in uvs {
            mesh.set_uv(layer, CornerId::new(corner), Point2::new(uv[0], uv[1]));
            corner += 1;
        }
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_polygons() {
        let faces = vec![vec![0, 1, 2, 3], vec![1, 4, 5, 2]];
        let mesh: UvMesh = build_from_polygons(6, &faces).unwrap();

        assert_eq!(mesh.num_faces(), 2);
        assert_eq!(mesh.num_corners(), 8);
        assert_eq!(mesh.num_layers(), 0);
    }

    #[test]
    fn test_empty_faces_rejected() {
        let err = build_from_polygons::<u32>(4, &[]).unwrap_err();
        assert!(matches!(err, UvError::EmptyInput { .. }));
    }

    #[test]
    fn test_invalid_vertex_rejected() {
        let faces = vec![vec![0, 1, 9]];
        let err = build_from_polygons::<u32>(3, &faces).unwrap_err();
        assert!(matches!(
            err,
            UvError::InvalidVertexIndex { face: 0, vertex: 9 }
        ));
    }

    #[test]
    fn test_degenerate_faces_rejected() {
        let too_few = vec![vec![0, 1]];
        assert!(matches!(
            build_from_polygons::<u32>(3, &too_few).unwrap_err(),
            UvError::DegenerateFace { face: 0 }
        ));

        let repeated = vec![vec![0, 1, 1]];
        assert!(matches!(
            build_from_polygons::<u32>(3, &repeated).unwrap_err(),
            UvError::DegenerateFace { face: 0 }
        ));
    }

    #[test]
    fn test_build_with_uvs() {
        let faces = vec![(
            vec![0, 1, 2, 3],
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
        )];
        let mesh: UvMesh = build_from_uv_polygons(4, &faces).unwrap();

        let layer = mesh.active_layer().unwrap();
        let coords = mesh.layer(layer).as_slice();
        assert_eq!(coords[0], Point2::new(0.0, 0.0));
        assert_eq!(coords[2], Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_uv_count_mismatch_rejected() {
        let faces = vec![(vec![0, 1, 2], vec![[0.0, 0.0], [1.0, 0.0]])];
        let err = build_from_uv_polygons::<u32>(3, &faces).unwrap_err();
        assert!(matches!(
            err,
            UvError::CornerCountMismatch {
                face: 0,
                corners: 3,
                uvs: 2
            }
        ));
    }
}
