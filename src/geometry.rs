//! Geometry primitives: Euclidean distance and sorted-sequence intersection.
//!
//! These two operations carry the whole metric side of the construction:
//! the neighborhood graph is defined by pairwise distances, and the
//! incremental expansion narrows candidate sets by intersecting sorted
//! lower-neighbor lists.

use ndarray::ArrayView1;

use crate::error::{TopologyError, TopologyResult};

/// Euclidean distance between two points of equal ambient dimension.
///
/// Returns [`TopologyError::DimensionMismatch`] when the views have
/// different lengths. O(D) in the ambient dimension D.
pub fn euclidean_distance(p: ArrayView1<f64>, q: ArrayView1<f64>) -> TopologyResult<f64> {
    if p.len() != q.len() {
        return Err(TopologyError::DimensionMismatch {
            expected: p.len(),
            actual: q.len(),
        });
    }

    let mut dist_sq = 0.0;
    for (a, b) in p.iter().zip(q.iter()) {
        let diff = a - b;
        dist_sq += diff * diff;
    }

    Ok(dist_sq.sqrt())
}

/// Intersection of two ascending, duplicate-free index sequences.
///
/// Two-pointer merge in O(|a| + |b|); the output is ascending.
///
/// Precondition: both inputs must already be sorted ascending without
/// duplicates. This is not checked at runtime; unsorted input produces
/// an unspecified (generally incorrect) result rather than an error.
pub fn sorted_intersection(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut result = Vec::new();
    let mut ai = 0;
    let mut bi = 0;

    while ai < a.len() && bi < b.len() {
        if a[ai] < b[bi] {
            ai += 1;
        } else if a[ai] > b[bi] {
            bi += 1;
        } else {
            result.push(a[ai]);
            ai += 1;
            bi += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_distance_3_4_5() {
        let p = array![0.0, 0.0];
        let q = array![3.0, 4.0];
        let d = euclidean_distance(p.view(), q.view()).unwrap();
        assert!((d - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_distance_symmetric() {
        let p = array![1.0, 2.0, 3.0];
        let q = array![-2.0, 0.5, 7.0];
        let d_pq = euclidean_distance(p.view(), q.view()).unwrap();
        let d_qp = euclidean_distance(q.view(), p.view()).unwrap();
        assert!((d_pq - d_qp).abs() < 1e-10);
    }

    #[test]
    fn test_distance_triangle_inequality() {
        let p = array![0.0, 0.0];
        let q = array![5.0, 1.0];
        let r = array![2.0, -3.0];
        let d_pq = euclidean_distance(p.view(), q.view()).unwrap();
        let d_pr = euclidean_distance(p.view(), r.view()).unwrap();
        let d_rq = euclidean_distance(r.view(), q.view()).unwrap();
        assert!(d_pq <= d_pr + d_rq + 1e-10);
    }

    #[test]
    fn test_distance_dimension_mismatch() {
        let p = array![0.0, 0.0];
        let q = array![1.0, 2.0, 3.0];
        let err = euclidean_distance(p.view(), q.view()).unwrap_err();
        assert_eq!(
            err,
            TopologyError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_intersection_merge() {
        assert_eq!(
            sorted_intersection(&[1, 3, 5, 7], &[2, 3, 4, 7, 9]),
            vec![3, 7]
        );
    }

    #[test]
    fn test_intersection_commutative() {
        let a = [0, 2, 4, 6, 8];
        let b = [1, 2, 3, 4, 5];
        assert_eq!(sorted_intersection(&a, &b), sorted_intersection(&b, &a));
    }

    #[test]
    fn test_intersection_idempotent() {
        let a = [1, 4, 9, 16];
        assert_eq!(sorted_intersection(&a, &a), a.to_vec());
    }

    #[test]
    fn test_intersection_disjoint() {
        assert_eq!(sorted_intersection(&[0, 2, 4], &[1, 3, 5]), Vec::<usize>::new());
    }

    #[test]
    fn test_intersection_empty_input() {
        assert_eq!(sorted_intersection(&[], &[1, 2, 3]), Vec::<usize>::new());
        assert_eq!(sorted_intersection(&[1, 2, 3], &[]), Vec::<usize>::new());
    }
}
