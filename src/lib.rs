//! # rips-homology
//!
//! Vietoris-Rips complexes and exact simplicial homology for finite
//! point clouds in Euclidean space.
//!
//! ## Pipeline
//!
//! 1. **Neighborhood graph**: condense the cloud into per-vertex lists
//!    of lower-indexed neighbors within the distance threshold
//! 2. **Incremental expansion**: enumerate every clique of the proximity
//!    graph up to a dimension bound, each discovered exactly once
//! 3. **Boundary matrices**: encode signed face incidence between
//!    adjacent dimensions
//! 4. **Simultaneous reduction**: column-reduce ∂ₖ while mirroring row
//!    operations on ∂ₖ₊₁, keeping both maps in one chain basis, then
//!    read off βₖ = dim ker ∂ₖ - dim im ∂ₖ₊₁
//!
//! ## Usage
//!
//! A complex is an explicit value: build it from points, a maximum
//! dimension, and a radius, then hand it to the homology walk. Rebuild
//! from scratch whenever the points or the radius change; there is no
//! incremental update between radii.
//!
//! Coefficients are real. Boundary entries are exact signed units and
//! reduction pivots on the first nonzero entry, never by magnitude, so
//! the routines are exact on complexes but make no stability promises
//! for general floating-point matrices.

pub mod geometry;
pub mod complex;
pub mod homology;
pub mod error;

// Re-exports from geometry
pub use geometry::{euclidean_distance, sorted_intersection};

// Re-exports from complex
pub use complex::{
    // Proximity structure
    NeighborhoodGraph,
    // Simplices and their containers
    Simplex,
    SimplicialComplex,
    // Construction
    build_complex,
};

// Re-exports from homology
pub use homology::{
    // Boundary operators
    SignedFace,
    hat_operator,
    boundary_matrix,
    // Elementary matrix operations
    row_swap,
    col_swap,
    scale_row,
    scale_col,
    row_combine,
    col_combine,
    // Reduction and ranks
    simultaneous_reduce,
    finish_row_reducing,
    num_pivot_rows,
    num_pivot_cols,
    betti_number,
    // Homology orchestration
    compute_homology,
    compute_homology_full,
};

// Re-exports from error
pub use error::{TopologyError, TopologyResult};
