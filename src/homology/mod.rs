//! Simplicial homology over the reals: boundary matrices, simultaneous
//! reduction, and Betti numbers.
//!
//! The chain of responsibilities mirrors the mathematics. `boundary`
//! turns adjacent simplex layers into signed incidence matrices,
//! `reduction` brings a matrix pair into echelon form while preserving
//! their shared chain basis, and `betti` sequences the two per dimension
//! to read off
//!
//!   βₖ = dim ker ∂ₖ - dim im ∂ₖ₊₁
//!
//! The reduction routines are exported individually so callers can
//! compose or test them outside the orchestrated walk.

mod betti;
mod boundary;
mod reduction;

pub use betti::{compute_homology, compute_homology_full};
pub use boundary::{boundary_matrix, hat_operator, SignedFace};
pub use reduction::{
    betti_number, col_combine, col_swap, finish_row_reducing, num_pivot_cols, num_pivot_rows,
    row_combine, row_swap, scale_col, scale_row, simultaneous_reduce,
};
