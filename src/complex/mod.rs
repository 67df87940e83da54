//! Complex construction: simplices, neighborhood graphs, and the
//! incremental Vietoris-Rips expansion.
//!
//! A complex is built in two stages. The point cloud is first condensed
//! into a lower-neighbor graph under the distance threshold, then the
//! graph is expanded into all cliques of at most `max_dimension + 1`
//! vertices, grouped into per-dimension layers. The result is a plain
//! value; rebuilding with the same input reproduces it exactly.

mod neighborhood;
mod simplex;
mod vietoris_rips;

pub use neighborhood::NeighborhoodGraph;
pub use simplex::{Simplex, SimplicialComplex};
pub use vietoris_rips::build_complex;
