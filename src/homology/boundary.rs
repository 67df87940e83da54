//! Boundary matrices: signed incidence between adjacent simplex layers.
//!
//! The boundary operator ∂ₖ maps a k-simplex to the alternating sum of
//! its (k-1)-faces:
//!
//!   ∂[v₀, ..., vₖ] = Σᵢ (-1)ⁱ [v₀, ..., v̂ᵢ, ..., vₖ]
//!
//! where the hat removes the vertex at position i. Expressed in the bases
//! given by two adjacent layers this becomes a dense matrix with entries
//! in {-1, 0, +1}, rows indexed by (k-1)-simplices and columns by
//! k-simplices.

use std::collections::HashMap;

use ndarray::Array2;

use crate::complex::Simplex;

/// A face together with the sign it carries in the boundary sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedFace {
    /// `(-1)^position` for the removed vertex position.
    pub sign: i32,
    /// The simplex with one vertex removed.
    pub face: Simplex,
}

/// Remove the vertex at `position`, returning the face and its sign.
///
/// `position` must index into the simplex's vertex sequence.
pub fn hat_operator(simplex: &Simplex, position: usize) -> SignedFace {
    let mut face = simplex.vertices().to_vec();
    face.remove(position);

    let sign = if position % 2 == 0 { 1 } else { -1 };

    SignedFace {
        sign,
        face: Simplex::from_sorted(face),
    }
}

/// Signed incidence matrix between two adjacent simplex layers.
///
/// Shape is `|lower| x |upper|`. Each upper simplex contributes one
/// column holding the signs of its faces; a face not present in `lower`
/// simply leaves its entry at zero.
pub fn boundary_matrix(lower: &[Simplex], upper: &[Simplex]) -> Array2<f64> {
    let mut row_index: HashMap<Vec<usize>, usize> = HashMap::with_capacity(lower.len());
    for (row, simplex) in lower.iter().enumerate() {
        row_index.insert(simplex.vertices().to_vec(), row);
    }

    let mut matrix = Array2::zeros((lower.len(), upper.len()));

    for (col, simplex) in upper.iter().enumerate() {
        for position in 0..simplex.vertices().len() {
            let hatted = hat_operator(simplex, position);
            if let Some(&row) = row_index.get(hatted.face.vertices()) {
                matrix[[row, col]] = hatted.sign as f64;
            }
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_hat_operator_even_position() {
        let hatted = hat_operator(&Simplex::new(vec![1, 2, 3, 4, 5]), 2);
        assert_eq!(hatted.sign, 1);
        assert_eq!(hatted.face, Simplex::new(vec![1, 2, 4, 5]));
    }

    #[test]
    fn test_hat_operator_odd_position() {
        let hatted = hat_operator(&Simplex::new(vec![1, 2, 3, 4, 5]), 1);
        assert_eq!(hatted.sign, -1);
        assert_eq!(hatted.face, Simplex::new(vec![1, 3, 4, 5]));
    }

    #[test]
    fn test_hat_operator_sign_alternates() {
        let simplex = Simplex::new(vec![0, 1, 2, 3]);
        let signs: Vec<i32> = (0..4).map(|i| hat_operator(&simplex, i).sign).collect();
        assert_eq!(signs, vec![1, -1, 1, -1]);
    }

    #[test]
    fn test_boundary_matrix_two_triangles() {
        let edges = [
            Simplex::new(vec![1, 2]),
            Simplex::new(vec![1, 4]),
            Simplex::new(vec![2, 3]),
            Simplex::new(vec![2, 4]),
            Simplex::new(vec![3, 4]),
        ];
        let triangles = [Simplex::new(vec![1, 2, 4]), Simplex::new(vec![2, 3, 4])];

        let matrix = boundary_matrix(&edges, &triangles);

        assert_eq!(
            matrix,
            array![
                [1.0, 0.0],
                [-1.0, 0.0],
                [0.0, 1.0],
                [1.0, -1.0],
                [0.0, 1.0]
            ]
        );
    }

    #[test]
    fn test_absent_faces_stay_zero() {
        // Only one of the three faces of [1, 2, 4] is present.
        let edges = [Simplex::new(vec![1, 2])];
        let triangles = [Simplex::new(vec![1, 2, 4])];

        let matrix = boundary_matrix(&edges, &triangles);
        assert_eq!(matrix, array![[1.0]]);
    }

    #[test]
    fn test_empty_layers() {
        let matrix = boundary_matrix(&[], &[]);
        assert_eq!(matrix.nrows(), 0);
        assert_eq!(matrix.ncols(), 0);
    }
}
