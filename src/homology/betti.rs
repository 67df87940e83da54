//! Homology orchestration: walk a complex dimension by dimension and
//! assemble its Betti sequence.
//!
//! - β₀ counts connected components
//! - β₁ counts independent loops
//! - β₂ counts enclosed voids
//!
//! Each dimension pair (k, k+1) is reduced with the boundary matrix of
//! dimension k carried over from the previous iteration, so every matrix
//! is built exactly once per call.

use ndarray::Array2;

use crate::complex::SimplicialComplex;
use crate::error::TopologyResult;

use super::{betti_number, boundary_matrix};

/// Betti numbers of a complex for dimensions `0..max_dimension`.
///
/// Walks dimensions upward and stops at the first empty layer, so the
/// returned sequence can be shorter than requested; that is a property
/// of the complex, not an error. The entry for dimension k is produced
/// once the (k+1)-layer is reached: an edgeless complex therefore yields
/// an empty sequence, and a complex whose top built layer is k reports
/// Betti numbers up to dimension k-1.
///
/// The boundary map out of dimension 0 is the trivial zero map, a
/// `1 x |vertices|` zero matrix.
pub fn compute_homology(
    complex: &SimplicialComplex,
    max_dimension: usize,
) -> TopologyResult<Vec<usize>> {
    let mut betti = Vec::new();
    let mut previous: Option<Array2<f64>> = None;

    for dim in 0..=max_dimension {
        let simplices = complex.simplices(dim);
        if simplices.is_empty() {
            break;
        }

        let current = if dim == 0 {
            Array2::zeros((1, simplices.len()))
        } else {
            boundary_matrix(complex.simplices(dim - 1), simplices)
        };

        if let Some(prev) = &previous {
            let number = betti_number(prev, &current)?;
            betti.push(number.max(0) as usize);
        }

        previous = Some(current);
    }

    Ok(betti)
}

/// [`compute_homology`] over every dimension the complex was built for.
pub fn compute_homology_full(complex: &SimplicialComplex) -> TopologyResult<Vec<usize>> {
    compute_homology(complex, complex.max_dimension())
}
