//! UV editing algorithms.
//!
//! This module contains the operations the crate exists for:
//!
//! - **Bounding boxes**: min/max reduction over island UV coordinates
//! - **Snapping**: tie-inclusive nearest-neighbor vertex matching between
//!   islands, with threshold-gated coordinate overwrites
//! - **Anchors**: resolving what an alignment operation positions against
//!   (UV space, the active island, or the cursor)

pub mod anchor;
pub mod bounds;
pub mod snap;
