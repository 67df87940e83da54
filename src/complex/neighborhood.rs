//! Lower-neighbor graph of a point cloud under a distance threshold.
//!
//! For every vertex `i` the graph stores the ascending list of vertices
//! `j < i` within the threshold, not the full adjacency. The asymmetry is
//! deliberate: restricting candidate sets to strictly lower indices turns
//! the proximity graph into a DAG over the natural vertex order, which is
//! what lets the incremental expansion discover every clique exactly once
//! with no deduplication.

use ndarray::Array2;

/// Adjacency structure holding, per vertex, its lower-indexed neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborhoodGraph {
    lower: Vec<Vec<usize>>,
}

impl NeighborhoodGraph {
    /// Build the lower-neighbor graph of a point cloud.
    ///
    /// `points` has one row per point; the rectangular shape guarantees a
    /// uniform ambient dimension. A pair is connected when its Euclidean
    /// distance is at most `radius` (inclusive). O(n² · D).
    pub fn from_points(points: &Array2<f64>, radius: f64) -> Self {
        let n = points.nrows();
        let dim = points.ncols();
        let mut lower = Vec::with_capacity(n);

        for i in 0..n {
            let mut neighbors = Vec::new();
            for j in 0..i {
                let mut dist_sq = 0.0;
                for d in 0..dim {
                    let diff = points[[i, d]] - points[[j, d]];
                    dist_sq += diff * diff;
                }
                if dist_sq.sqrt() <= radius {
                    neighbors.push(j);
                }
            }
            lower.push(neighbors);
        }

        Self { lower }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.lower.len()
    }

    /// True when the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// Ascending list of neighbors of `vertex` with strictly smaller index.
    pub fn lower_neighbors(&self, vertex: usize) -> &[usize] {
        &self.lower[vertex]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_unit_square_lower_neighbors() {
        // Side length 1, diagonal sqrt(2); radius 1 keeps the sides only.
        let points = array![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
        let graph = NeighborhoodGraph::from_points(&points, 1.0);

        assert_eq!(graph.len(), 4);
        assert_eq!(graph.lower_neighbors(0), &[] as &[usize]);
        assert_eq!(graph.lower_neighbors(1), &[0]);
        assert_eq!(graph.lower_neighbors(2), &[0]);
        assert_eq!(graph.lower_neighbors(3), &[1, 2]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let points = array![[0.0, 0.0], [2.0, 0.0]];
        let graph = NeighborhoodGraph::from_points(&points, 2.0);
        assert_eq!(graph.lower_neighbors(1), &[0]);
    }

    #[test]
    fn test_neighbors_are_ascending() {
        let points = array![[0.0, 0.0], [1.0, 0.0], [0.5, 0.5], [0.6, 0.1]];
        let graph = NeighborhoodGraph::from_points(&points, 2.0);
        for v in 0..graph.len() {
            let neighbors = graph.lower_neighbors(v);
            assert!(neighbors.windows(2).all(|w| w[0] < w[1]));
            assert!(neighbors.iter().all(|&j| j < v));
        }
    }

    #[test]
    fn test_empty_cloud() {
        let points = Array2::<f64>::zeros((0, 2));
        let graph = NeighborhoodGraph::from_points(&points, 1.0);
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
    }
}
