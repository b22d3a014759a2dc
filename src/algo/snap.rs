//! Nearest-neighbor vertex snapping between UV islands.
//!
//! This module moves UV vertices of one island onto coinciding or nearby
//! vertices of other islands. For every scanned corner, the distance to
//! every candidate corner is computed and **all** candidates at the minimum
//! distance are kept; ties are never broken by picking an arbitrary single
//! best match. Matches within the threshold are then applied in one
//! write-back pass.
//!
//! The search is a brute-force O(n·m) scan. Islands are small (tens to low
//! hundreds of corners), so no spatial index is used; at much larger scales
//! one would be needed, but it would have to preserve the tie-inclusive
//! minimum semantics exactly.
//!
//! # Example
//!
//! ```
//! use skerry::algo::snap::snap_target_onto_source;
//! use skerry::mesh::{build_from_uv_polygons, Island, UvMesh};
//! use skerry::session::UvEditSession;
//!
//! // Two triangles: the target's first corner sits 0.01 from the source's.
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
//! let source = Island::from_indices(&[0]);
//! let target = Island::from_indices(&[1]);
//!
//! let mut session = UvEditSession::begin(&mut mesh).unwrap();
//! let report = snap_target_onto_source(&mut session, &source, &target, 0.02).unwrap();
//! assert_eq!(report.moved, 1);
//! ```

use nalgebra::Point2;
use rayon::prelude::*;

use crate::error::{Result, UvError};
use crate::mesh::{CornerId, Island, MeshIndex};
use crate::session::UvEditSession;

/// Decimal digits the multi-island snap rounds distances to before
/// comparing, so that near-equidistant candidates tie instead of being
/// separated by floating-point noise.
const MULTI_ISLAND_ROUND_DIGITS: u32 = 10;

/// Euclidean distance between two UV points.
///
/// The sole distance metric used by the snapping search.
#[inline]
pub fn uv_distance(a: Point2<f64>, b: Point2<f64>) -> f64 {
    (b - a).norm()
}

/// Which side of a match gets overwritten.
///
/// The two island snap operations mutate different sides of the match; the
/// direction is an explicit choice here so callers decide deliberately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapDirection {
    /// Move each scanned corner onto its matched candidate's coordinate.
    ScannedOntoMatched,
    /// Move each matched candidate onto the scanned corner's coordinate.
    MatchedOntoScanned,
}

/// Options for the snapping search.
#[derive(Debug, Clone)]
pub struct SnapOptions {
    /// Maximum distance at which a match is applied.
    pub threshold: f64,

    /// Which side of each match is overwritten.
    pub direction: SnapDirection,

    /// Round distances to this many decimal digits before comparison.
    /// `None` compares exact distances.
    pub round_digits: Option<u32>,

    /// Whether the gather phase runs in parallel (default: true).
    /// The result is identical either way; only distance computation is
    /// parallelized, the write-back pass is always sequential.
    pub parallel: bool,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            direction: SnapDirection::ScannedOntoMatched,
            round_digits: None,
            parallel: true,
        }
    }
}

impl SnapOptions {
    /// Create options with the given threshold.
    ///
    /// A zero threshold moves only corners already exactly coincident with
    /// a candidate.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Set the mutation direction.
    pub fn with_direction(mut self, direction: SnapDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Round distances to the given number of decimal digits.
    pub fn with_round_digits(mut self, digits: u32) -> Self {
        self.round_digits = Some(digits);
        self
    }

    /// Compare exact distances (no rounding).
    pub fn exact(mut self) -> Self {
        self.round_digits = None;
        self
    }

    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// What a snapping pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapReport {
    /// Number of corners scanned.
    pub scanned: usize,
    /// Number of match candidates recorded (ties included).
    pub matched: usize,
    /// Number of coordinate writes applied (matches within threshold).
    pub moved: usize,
}

/// One recorded nearest match for a scanned corner.
struct MatchCandidate<I: MeshIndex> {
    dist: f64,
    scanned: CornerId<I>,
    matched: CornerId<I>,
}

fn round_to_digits(d: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (d * scale).round() / scale
}

/// Collect, for every scanned corner, all candidates at minimum distance.
fn gather_matches<I: MeshIndex>(
    session: &UvEditSession<'_, I>,
    scanned: &[CornerId<I>],
    candidates: &[CornerId<I>],
    round_digits: Option<u32>,
    parallel: bool,
) -> Vec<MatchCandidate<I>> {
    let matches_for = |&s: &CornerId<I>| -> Vec<MatchCandidate<I>> {
        let origin = session.uv(s);

        let dists: Vec<(f64, CornerId<I>)> = candidates
            .iter()
            .map(|&c| {
                let mut d = uv_distance(origin, session.uv(c));
                if let Some(digits) = round_digits {
                    d = round_to_digits(d, digits);
                }
                (d, c)
            })
            .collect();

        // First pass: lowest distance. Second pass: keep every candidate at it.
        let min = dists.iter().map(|&(d, _)| d).fold(f64::INFINITY, f64::min);
        dists
            .into_iter()
            .filter(|&(d, _)| d <= min)
            .map(|(d, c)| MatchCandidate {
                dist: d,
                scanned: s,
                matched: c,
            })
            .collect()
    };

    if parallel {
        // Per-corner result vectors keep the output order deterministic.
        let per_corner: Vec<Vec<MatchCandidate<I>>> = scanned.par_iter().map(matches_for).collect();
        per_corner.into_iter().flatten().collect()
    } else {
        scanned.iter().flat_map(matches_for).collect()
    }
}

/// Snap between a scanned island and a set of candidate islands.
///
/// The shared algorithm behind both island snap operations: gather all match
/// candidates first (a pure read), then apply every match with distance
/// within the threshold in a single write-back pass. Deferring the writes
/// keeps the gather phase side-effect free, which is what allows it to run
/// in parallel with results identical to the sequential scan.
///
/// # Errors
///
/// - [`UvError::EmptyInput`] if the scanned island or the candidate islands
///   contribute no corners
/// - [`UvError::InvalidFaceId`] if an island references a face outside the
///   mesh
/// - [`UvError::InvalidParameter`] if the threshold is negative or not finite
pub fn snap_islands<I: MeshIndex>(
    session: &mut UvEditSession<'_, I>,
    scanned: &Island<I>,
    candidates: &[Island<I>],
    options: &SnapOptions,
) -> Result<SnapReport> {
    if !options.threshold.is_finite() || options.threshold < 0.0 {
        return Err(UvError::invalid_param(
            "threshold",
            options.threshold,
            "must be finite and non-negative",
        ));
    }

    let scanned_corners = scanned.corners(session.mesh())?;
    if scanned_corners.is_empty() {
        return Err(UvError::EmptyInput {
            what: "scanned island",
        });
    }

    let mut candidate_corners = Vec::new();
    for island in candidates {
        candidate_corners.extend(island.corners(session.mesh())?);
    }
    if candidate_corners.is_empty() {
        return Err(UvError::EmptyInput {
            what: "candidate islands",
        });
    }

    let matches = gather_matches(
        session,
        &scanned_corners,
        &candidate_corners,
        options.round_digits,
        options.parallel,
    );

    let mut moved = 0;
    for m in &matches {
        if m.dist <= options.threshold {
            match options.direction {
                SnapDirection::ScannedOntoMatched => {
                    let uv = session.uv(m.matched);
                    session.set_uv(m.scanned, uv);
                }
                SnapDirection::MatchedOntoScanned => {
                    let uv = session.uv(m.scanned);
                    session.set_uv(m.matched, uv);
                }
            }
            moved += 1;
        }
    }

    Ok(SnapReport {
        scanned: scanned_corners.len(),
        matched: matches.len(),
        moved,
    })
}

/// Snap a target island's corners onto a source island.
///
/// Scans every corner of `target`, matches against every corner of
/// `source` with exact (unrounded) distances, and moves matched **target**
/// corners onto the source coordinates. `source` is never mutated.
pub fn snap_target_onto_source<I: MeshIndex>(
    session: &mut UvEditSession<'_, I>,
    source: &Island<I>,
    target: &Island<I>,
    threshold: f64,
) -> Result<SnapReport> {
    snap_islands(
        session,
        target,
        std::slice::from_ref(source),
        &SnapOptions::new(threshold),
    )
}

/// Snap unselected target islands onto an island, scanning from the island.
///
/// Scans every corner of `island`, matches against every corner of every
/// island in `targets` with distances rounded to 10 decimal digits, and
/// moves the matched **target** corners onto the island's coordinates.
///
/// Note the inverted mutation direction relative to
/// [`snap_target_onto_source`]: the scan runs over `island`, but it is the
/// matched targets that move. Use [`snap_islands`] with an explicit
/// [`SnapDirection`] to choose the direction deliberately.
pub fn snap_unselected_onto_island<I: MeshIndex>(
    session: &mut UvEditSession<'_, I>,
    island: &Island<I>,
    targets: &[Island<I>],
    threshold: f64,
) -> Result<SnapReport> {
    snap_islands(
        session,
        island,
        targets,
        &SnapOptions::new(threshold)
            .with_direction(SnapDirection::MatchedOntoScanned)
            .with_round_digits(MULTI_ISLAND_ROUND_DIGITS),
    )
}
