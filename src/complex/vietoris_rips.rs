//! Incremental Vietoris-Rips expansion.
//!
//! The Vietoris-Rips complex VR_r(X) contains a k-simplex [v₀, ..., vₖ]
//! exactly when every vertex pair lies within distance r, so its simplices
//! are the cliques of the proximity graph. Enumerating them naively
//! revisits each clique once per vertex ordering; the incremental scheme
//! (Zomorodian, "Fast Construction of the Vietoris-Rips Complex") avoids
//! that by only ever growing a simplex with vertices below its current
//! minimum, drawn from the lower-neighbor graph.
//!
//! ## Expansion
//!
//! Each vertex `u` seeds the pair `([u], lower(u))` of a simplex and its
//! candidate set. Expanding a pair emits the simplex and, while it can
//! still grow without passing the dimension bound, forms one child per
//! candidate `v`: the simplex `[v] ++ t` with candidate set
//! `candidates ∩ lower(v)`. Candidates are always below every vertex of
//! `t`, so prepending keeps vertex sequences ascending and no clique is
//! reached along two different paths.
//!
//! Branching is exponential in local clique size. There is no internal
//! escape hatch; callers bound the input size and radius.

use ndarray::Array2;

use super::{NeighborhoodGraph, Simplex, SimplicialComplex};
use crate::geometry::sorted_intersection;

/// Build the Vietoris-Rips complex of a point cloud.
///
/// `points` has one row per point. The result always carries
/// `max_dimension + 1` layers; upper layers are empty when the cloud is
/// too sparse to fill them. Simplices land in their layer in discovery
/// order: depth-first, lowest candidate first, which makes the output
/// deterministic for identical input.
pub fn build_complex(
    points: &Array2<f64>,
    max_dimension: usize,
    radius: f64,
) -> SimplicialComplex {
    let graph = NeighborhoodGraph::from_points(points, radius);
    let mut layers: Vec<Vec<Simplex>> = vec![Vec::new(); max_dimension + 1];

    // Depth-first worklist. Entries are pushed in reverse so that the
    // lowest vertex, then the lowest candidate, is expanded first.
    let mut worklist: Vec<(Vec<usize>, Vec<usize>)> = Vec::new();
    for u in (0..graph.len()).rev() {
        worklist.push((vec![u], graph.lower_neighbors(u).to_vec()));
    }

    while let Some((vertices, candidates)) = worklist.pop() {
        // A simplex with max_dimension + 1 vertices is at the bound and
        // must not grow further.
        if vertices.len() <= max_dimension {
            for &v in candidates.iter().rev() {
                let mut extended = Vec::with_capacity(vertices.len() + 1);
                extended.push(v);
                extended.extend_from_slice(&vertices);

                let narrowed = sorted_intersection(&candidates, graph.lower_neighbors(v));
                worklist.push((extended, narrowed));
            }
        }

        layers[vertices.len() - 1].push(Simplex::from_sorted(vertices));
    }

    SimplicialComplex::from_layers(layers)
}
