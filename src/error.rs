//! Error types for skerry.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`UvError`].
pub type Result<T> = std::result::Result<T, UvError>;

/// Errors that can occur during UV editing operations.
#[derive(Error, Debug)]
pub enum UvError {
    /// An operation received an empty point or island set.
    ///
    /// Reducing an empty set to a bounding box or searching it for nearest
    /// neighbors is a programmer error, never a silent sentinel result.
    #[error("empty input: {what}")]
    EmptyInput {
        /// Description of the empty input.
        what: &'static str,
    },

    /// An island references a face that does not exist in the mesh.
    #[error("island references invalid face {face} (mesh has {num_faces} faces)")]
    InvalidFaceId {
        /// The invalid face index.
        face: usize,
        /// Number of faces in the mesh.
        num_faces: usize,
    },

    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face has fewer than three corners or duplicate vertex indices.
    #[error("face {face} is degenerate")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// A face's UV list does not match its corner count.
    #[error("face {face} has {corners} corners but {uvs} UV coordinates")]
    CornerCountMismatch {
        /// The face index.
        face: usize,
        /// Number of corners in the face.
        corners: usize,
        /// Number of UV coordinates supplied.
        uvs: usize,
    },

    /// A UV layer index is out of range.
    #[error("invalid UV layer {layer} (mesh has {num_layers} layers)")]
    InvalidLayer {
        /// The invalid layer index.
        layer: usize,
        /// Number of layers in the mesh.
        num_layers: usize,
    },

    /// An island index is out of range for the island set.
    #[error("invalid island index {island} (set has {num_islands} islands)")]
    InvalidIslandIndex {
        /// The invalid island index.
        island: usize,
        /// Number of islands in the set.
        num_islands: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl UvError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        UvError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
