use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;

/// Validate structural integrity of a topological entity.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Read-only adjacency queries over a polygon mesh.
///
/// This is the whole surface rail traversal needs from a mesh. Neighbour and
/// face-vertex lists are *cyclically ordered*: rail walks index into them with
/// wrap-around offsets, so an implementation must never hand out an arbitrary
/// adjacency order.
pub trait MeshTopology {
    type Vertex: Copy + Eq + Hash + Debug;
    type Face: Copy + Eq + Hash + Debug;

    fn contains_face(&self, face: Self::Face) -> bool;

    fn face_count(&self) -> usize;

    /// Number of edges incident to `vertex`.
    fn vertex_degree(&self, vertex: Self::Vertex) -> usize;

    /// Neighbours of `vertex` in cyclic order around it, consistent with face winding.
    fn ordered_neighbors(&self, vertex: Self::Vertex) -> Vec<Self::Vertex>;

    /// Whether `vertex` touches a half-edge with no face.
    fn is_boundary_vertex(&self, vertex: Self::Vertex) -> bool;

    fn boundary_vertices(&self) -> HashSet<Self::Vertex>;

    fn boundary_faces(&self) -> HashSet<Self::Face>;

    /// The vertex loop of `face`; empty if the face does not exist.
    fn face_vertices(&self, face: Self::Face) -> Vec<Self::Vertex>;

    /// The face whose loop contains the directed edge `u -> v`.
    /// `None` for a boundary half-edge or a pair that is not an edge.
    fn face_across(&self, u: Self::Vertex, v: Self::Vertex) -> Option<Self::Face>;

    /// Every edge exactly once, in its registered orientation.
    fn canonical_edges(&self) -> HashSet<(Self::Vertex, Self::Vertex)>;

    /// The registered orientation of the edge `{u, v}`, if it is an edge.
    fn canonical_edge(
        &self,
        u: Self::Vertex,
        v: Self::Vertex,
    ) -> Option<(Self::Vertex, Self::Vertex)> {
        let edges = self.canonical_edges();
        if edges.contains(&(u, v)) {
            Some((u, v))
        } else if edges.contains(&(v, u)) {
            Some((v, u))
        } else {
            None
        }
    }

    fn has_edge(&self, u: Self::Vertex, v: Self::Vertex) -> bool {
        self.canonical_edge(u, v).is_some()
    }
}
