//! Simplices and dimension-indexed simplicial complexes.
//!
//! A k-simplex is a set of k+1 vertex indices treated as one combinatorial
//! cell. Vertex sequences are kept in canonical ascending order so that two
//! simplices are equal exactly when they span the same vertices.

/// A simplex identified by its canonically sorted vertex indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Simplex {
    vertices: Vec<usize>,
}

impl Simplex {
    /// Create a simplex from arbitrary vertex indices.
    ///
    /// The input is canonicalized: sorted ascending, duplicates removed.
    pub fn new(mut vertices: Vec<usize>) -> Self {
        vertices.sort_unstable();
        vertices.dedup();
        Self { vertices }
    }

    /// Create a 0-simplex (a single vertex).
    pub fn vertex(v: usize) -> Self {
        Self { vertices: vec![v] }
    }

    /// Create a simplex from an already ascending, duplicate-free sequence.
    pub(crate) fn from_sorted(vertices: Vec<usize>) -> Self {
        debug_assert!(vertices.windows(2).all(|w| w[0] < w[1]));
        Self { vertices }
    }

    /// Canonical vertex sequence, ascending.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Dimension of the simplex: vertex count minus one.
    pub fn dimension(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// A simplicial complex organized as one simplex layer per dimension.
///
/// The layer at index `d` holds all d-simplices. Face closure is an
/// invariant of construction: every face of a stored simplex is stored one
/// layer below. It is guaranteed by the builder, never re-checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplicialComplex {
    layers: Vec<Vec<Simplex>>,
}

impl SimplicialComplex {
    pub(crate) fn from_layers(layers: Vec<Vec<Simplex>>) -> Self {
        Self { layers }
    }

    /// All simplices of the given dimension.
    ///
    /// Dimensions beyond the built range read as empty.
    pub fn simplices(&self, dimension: usize) -> &[Simplex] {
        self.layers
            .get(dimension)
            .map(|layer| layer.as_slice())
            .unwrap_or(&[])
    }

    /// Highest dimension the complex was built for.
    ///
    /// Layers up to and including this dimension exist, though the upper
    /// ones may be empty.
    pub fn max_dimension(&self) -> usize {
        self.layers.len().saturating_sub(1)
    }

    /// Simplex count per dimension, index order = dimension order.
    pub fn simplex_counts(&self) -> Vec<usize> {
        self.layers.iter().map(|layer| layer.len()).collect()
    }

    /// Total number of simplices across all dimensions.
    pub fn total_simplices(&self) -> usize {
        self.layers.iter().map(|layer| layer.len()).sum()
    }

    /// Euler characteristic: the alternating sum of simplex counts.
    pub fn euler_characteristic(&self) -> i64 {
        self.layers
            .iter()
            .enumerate()
            .map(|(d, layer)| {
                let sign = if d % 2 == 0 { 1 } else { -1 };
                sign * layer.len() as i64
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplex_canonicalizes() {
        let s = Simplex::new(vec![3, 1, 2, 3]);
        assert_eq!(s.vertices(), &[1, 2, 3]);
        assert_eq!(s.dimension(), 2);
    }

    #[test]
    fn test_simplex_equality_ignores_input_order() {
        assert_eq!(Simplex::new(vec![2, 1]), Simplex::new(vec![1, 2]));
    }

    #[test]
    fn test_vertex_simplex() {
        let v = Simplex::vertex(5);
        assert_eq!(v.vertices(), &[5]);
        assert_eq!(v.dimension(), 0);
    }

    #[test]
    fn test_complex_accessors() {
        let complex = SimplicialComplex::from_layers(vec![
            vec![Simplex::vertex(0), Simplex::vertex(1), Simplex::vertex(2)],
            vec![Simplex::new(vec![0, 1]), Simplex::new(vec![1, 2])],
            vec![],
        ]);

        assert_eq!(complex.max_dimension(), 2);
        assert_eq!(complex.simplex_counts(), vec![3, 2, 0]);
        assert_eq!(complex.total_simplices(), 5);
        assert_eq!(complex.euler_characteristic(), 1); // 3 - 2 + 0
        assert_eq!(complex.simplices(1).len(), 2);
    }

    #[test]
    fn test_out_of_range_dimension_reads_empty() {
        let complex = SimplicialComplex::from_layers(vec![vec![Simplex::vertex(0)]]);
        assert!(complex.simplices(7).is_empty());
    }
}
