//! Core mesh data structures.
//!
//! This module provides the face-corner mesh representation, UV layers, and
//! island grouping used by the editing operations.
//!
//! # Overview
//!
//! The primary type is [`UvMesh`], which stores polygonal faces, the corners
//! (loops) that make them up, and per-corner UV layers. It is the in-library
//! stand-in for the host editor's mesh: just enough structure to resolve a
//! face identifier to its corners and a corner to a mutable texture
//! coordinate.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`VertexId`] - Identifies a 3D vertex
//! - [`FaceId`] - Identifies a face
//! - [`CornerId`] - Identifies a face corner (one per-face UV point)
//!
//! These indices are generic over the underlying integer type ([`MeshIndex`]
//! trait), allowing you to choose `u16`, `u32`, or `u64` based on mesh size.
//!
//! # Construction
//!
//! Meshes are typically constructed from the host's face-vertex lists:
//!
//! ```
//! use skerry::mesh::{build_from_uv_polygons, UvMesh};
//!
//! let faces = vec![(
//!     vec![0, 1, 2, 3],
//!     vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
//! )];
//!
//! let mesh: UvMesh = build_from_uv_polygons(4, &faces).unwrap();
//! ```

mod builder;
mod facemesh;
mod index;
mod island;

pub use builder::{build_from_polygons, build_from_uv_polygons};
pub use facemesh::{Corner, Face, UvLayer, UvLayerId, UvMesh};
pub use index::{CornerId, FaceId, MeshIndex, VertexId};
pub use island::{Island, IslandSet};
