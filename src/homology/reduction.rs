//! Matrix reduction engine: elementary operations, coupled echelon
//! reduction of a boundary-matrix pair, and Betti numbers.
//!
//! ## Simultaneous reduction
//!
//! For consecutive boundary maps ∂ₖ and ∂ₖ₊₁ the middle chain space is
//! shared: the columns of ∂ₖ and the rows of ∂ₖ₊₁ are expressed in the
//! same basis of k-chains. Column-reducing ∂ₖ changes that basis, so
//! every column operation is mirrored on ∂ₖ₊₁ as the matching row
//! operation: column swap as row swap, column scale as row scale by the
//! same factor, column combine as the row combine with negated
//! coefficient. Keeping the two maps in one consistent basis is what
//! makes the final rank of ∂ₖ₊₁ measure its image inside the kernel
//! basis of ∂ₖ, giving
//!
//!   βₖ = dim ker ∂ₖ - dim im ∂ₖ₊₁
//!
//! ## Pivoting
//!
//! Pivots are found by first-nonzero scan, never by magnitude. Boundary
//! matrices carry exact {-1, 0, +1} entries, for which any nonzero pivot
//! is safe; handing these routines ill-conditioned general matrices can
//! produce numerically unstable results.

use ndarray::Array2;

use crate::error::{TopologyError, TopologyResult};

/// Swap two rows in place.
pub fn row_swap(matrix: &mut Array2<f64>, i: usize, j: usize) {
    for col in 0..matrix.ncols() {
        matrix.swap([i, col], [j, col]);
    }
}

/// Swap two columns in place.
pub fn col_swap(matrix: &mut Array2<f64>, i: usize, j: usize) {
    for row in 0..matrix.nrows() {
        matrix.swap([row, i], [row, j]);
    }
}

/// Multiply a row by a scalar in place.
pub fn scale_row(matrix: &mut Array2<f64>, row: usize, factor: f64) {
    matrix.row_mut(row).mapv_inplace(|v| v * factor);
}

/// Multiply a column by a scalar in place.
pub fn scale_col(matrix: &mut Array2<f64>, col: usize, factor: f64) {
    matrix.column_mut(col).mapv_inplace(|v| v * factor);
}

/// Add `factor` times row `source` to row `add_to` in place.
pub fn row_combine(matrix: &mut Array2<f64>, add_to: usize, source: usize, factor: f64) {
    let source_row = matrix.row(source).to_owned();
    matrix
        .row_mut(add_to)
        .zip_mut_with(&source_row, |target, &s| *target += factor * s);
}

/// Add `factor` times column `source` to column `add_to` in place.
pub fn col_combine(matrix: &mut Array2<f64>, add_to: usize, source: usize, factor: f64) {
    let source_col = matrix.column(source).to_owned();
    matrix
        .column_mut(add_to)
        .zip_mut_with(&source_col, |target, &s| *target += factor * s);
}

/// Count rows holding at least one nonzero entry.
///
/// On a reduced matrix this is the rank along the row axis.
pub fn num_pivot_rows(matrix: &Array2<f64>) -> usize {
    matrix
        .rows()
        .into_iter()
        .filter(|row| row.iter().any(|&v| v != 0.0))
        .count()
}

/// Count columns holding at least one nonzero entry.
///
/// On a reduced matrix this is the rank along the column axis.
pub fn num_pivot_cols(matrix: &Array2<f64>) -> usize {
    matrix
        .columns()
        .into_iter()
        .filter(|col| col.iter().any(|&v| v != 0.0))
        .count()
}

/// Column-echelon reduce `a`, mirroring every operation on `b` so both
/// stay expressed in one shared basis of the middle chain space.
///
/// Requires `a.ncols() == b.nrows()`, the shape of composable maps;
/// otherwise fails with [`TopologyError::ShapeMismatch`]. A row with no
/// pivot advances the row index only, so `b` ends up only partially
/// reduced: callers follow with [`finish_row_reducing`].
pub fn simultaneous_reduce(a: &mut Array2<f64>, b: &mut Array2<f64>) -> TopologyResult<()> {
    if a.ncols() != b.nrows() {
        return Err(TopologyError::ShapeMismatch {
            lhs_cols: a.ncols(),
            rhs_rows: b.nrows(),
        });
    }

    let num_rows = a.nrows();
    let num_cols = a.ncols();
    let mut i = 0;
    let mut j = 0;

    while i < num_rows && j < num_cols {
        if a[[i, j]] == 0.0 {
            let mut nonzero_col = j;
            while nonzero_col < num_cols && a[[i, nonzero_col]] == 0.0 {
                nonzero_col += 1;
            }
            if nonzero_col == num_cols {
                i += 1;
                continue;
            }

            col_swap(a, j, nonzero_col);
            row_swap(b, j, nonzero_col);
        }

        let pivot = a[[i, j]];
        scale_col(a, j, 1.0 / pivot);
        scale_row(b, j, 1.0 / pivot);

        for other in 0..num_cols {
            if other == j {
                continue;
            }
            let entry = a[[i, other]];
            if entry != 0.0 {
                col_combine(a, other, j, -entry);
                row_combine(b, j, other, entry);
            }
        }

        i += 1;
        j += 1;
    }

    Ok(())
}

/// Complete ordinary row-echelon reduction of `b` alone.
///
/// Same first-nonzero pivoting as [`simultaneous_reduce`], scanning
/// downward within a column; a column with no pivot advances the column
/// index only.
pub fn finish_row_reducing(b: &mut Array2<f64>) {
    let num_rows = b.nrows();
    let num_cols = b.ncols();
    let mut i = 0;
    let mut j = 0;

    while i < num_rows && j < num_cols {
        if b[[i, j]] == 0.0 {
            let mut nonzero_row = i;
            while nonzero_row < num_rows && b[[nonzero_row, j]] == 0.0 {
                nonzero_row += 1;
            }
            if nonzero_row == num_rows {
                j += 1;
                continue;
            }

            row_swap(b, i, nonzero_row);
        }

        let pivot = b[[i, j]];
        scale_row(b, i, 1.0 / pivot);

        for other in 0..num_rows {
            if other == i {
                continue;
            }
            let entry = b[[other, j]];
            if entry != 0.0 {
                row_combine(b, other, i, -entry);
            }
        }

        i += 1;
        j += 1;
    }
}

/// Betti number of the homology group sandwiched between two boundary
/// maps: nullity of `d_k` minus the rank of `d_k_plus_one` in the shared
/// basis.
///
/// Both inputs are copied; the caller's matrices are never mutated. The
/// result is signed because arbitrary matrix pairs can make the
/// difference negative; boundary matrices of a face-closed complex
/// cannot.
pub fn betti_number(d_k: &Array2<f64>, d_k_plus_one: &Array2<f64>) -> TopologyResult<i64> {
    let mut a = d_k.clone();
    let mut b = d_k_plus_one.clone();

    simultaneous_reduce(&mut a, &mut b)?;
    finish_row_reducing(&mut b);

    let kernel_dim = d_k.ncols() - num_pivot_cols(&a);
    let image_dim = num_pivot_rows(&b);

    Ok(kernel_dim as i64 - image_dim as i64)
}
