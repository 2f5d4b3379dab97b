use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

pub type Point3 = glam::DVec3;

// --- SlotMap key types ---

new_key_type! {
    pub struct VertexId;
    pub struct HalfEdgeId;
    pub struct EdgeId;
    pub struct FaceId;
}

// --- Entity structs ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Point3,
    pub halfedge: Option<HalfEdgeId>,
}

/// A directed edge. `face` is the face on its left; `None` on the boundary,
/// in which case `next`/`prev` are unset as well.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HalfEdge {
    pub origin: VertexId,
    pub twin: Option<HalfEdgeId>,
    pub next: Option<HalfEdgeId>,
    pub prev: Option<HalfEdgeId>,
    pub face: Option<FaceId>,
    pub edge: Option<EdgeId>,
}

/// An undirected edge. `halfedge_a` carries the registered orientation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    pub halfedge_a: HalfEdgeId,
    pub halfedge_b: HalfEdgeId,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Face {
    pub halfedge: HalfEdgeId,
}
