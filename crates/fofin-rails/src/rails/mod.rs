mod continuous;
mod parallel;
mod strip;

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use fofin_core::error::{FofinError, Result};

pub use continuous::continuous_edge_line;
pub use parallel::parallel_edges;
pub use strip::face_strip;

/// An ordered chain of edges, each as a vertex pair.
pub type EdgeRail<V> = Vec<(V, V)>;

/// An ordered chain of faces.
pub type FaceRail<F> = Vec<F>;

/// Result of a single one-directional walk.
struct Walk<V> {
    edges: Vec<(V, V)>,
    /// The walk came back around to the seed.
    closed: bool,
}

fn ensure_edge<V>(edges: &HashSet<(V, V)>, (u, v): (V, V)) -> Result<()>
where
    V: Copy + Eq + Hash + Debug,
{
    if edges.contains(&(u, v)) || edges.contains(&(v, u)) {
        Ok(())
    } else {
        Err(FofinError::InvalidArgument(format!(
            "({:?}, {:?}) is not an edge of the mesh",
            u, v
        )))
    }
}

/// Flip every edge whose reverse is the registered orientation.
fn orient<V>(edges: &HashSet<(V, V)>, rail: EdgeRail<V>) -> EdgeRail<V>
where
    V: Copy + Eq + Hash,
{
    rail.into_iter()
        .map(|(u, v)| if edges.contains(&(u, v)) { (u, v) } else { (v, u) })
        .collect()
}

/// `items[i - offset]` with wrap-around.
fn cyclic_back<T: Copy>(items: &[T], i: usize, offset: usize) -> T {
    let n = items.len();
    items[(i + n - offset % n) % n]
}
