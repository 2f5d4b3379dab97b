use std::collections::{HashMap, HashSet};

use fofin_core::error::{FofinError, Result};
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use super::types::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "MeshRecord")]
pub struct Mesh {
    pub vertices: SlotMap<VertexId, Vertex>,
    pub halfedges: SlotMap<HalfEdgeId, HalfEdge>,
    pub edges: SlotMap<EdgeId, Edge>,
    pub faces: SlotMap<FaceId, Face>,
    /// `(origin, target) -> half-edge`, derived from `halfedges`.
    #[serde(skip)]
    pub(crate) lookup: HashMap<(VertexId, VertexId), HalfEdgeId>,
}

/// Serialized form of [`Mesh`]; the directed lookup is rebuilt on load.
#[derive(Deserialize)]
struct MeshRecord {
    vertices: SlotMap<VertexId, Vertex>,
    halfedges: SlotMap<HalfEdgeId, HalfEdge>,
    edges: SlotMap<EdgeId, Edge>,
    faces: SlotMap<FaceId, Face>,
}

impl From<MeshRecord> for Mesh {
    fn from(record: MeshRecord) -> Self {
        let mut mesh = Self {
            vertices: record.vertices,
            halfedges: record.halfedges,
            edges: record.edges,
            faces: record.faces,
            lookup: HashMap::new(),
        };
        mesh.rebuild_lookup();
        mesh
    }
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: SlotMap::with_key(),
            halfedges: SlotMap::with_key(),
            edges: SlotMap::with_key(),
            faces: SlotMap::with_key(),
            lookup: HashMap::new(),
        }
    }

    /// Build a mesh from positions and faces given as indices into `positions`.
    pub fn from_vertices_and_faces(positions: &[Point3], faces: &[Vec<usize>]) -> Result<Self> {
        let mut mesh = Self::new();
        let keys: Vec<VertexId> = positions.iter().map(|&p| mesh.add_vertex(p)).collect();

        for (index, face) in faces.iter().enumerate() {
            let loop_keys = face
                .iter()
                .map(|&i| {
                    keys.get(i).copied().ok_or_else(|| {
                        FofinError::InvalidArgument(format!(
                            "Face {} references vertex index {} but only {} vertices exist",
                            index,
                            i,
                            keys.len()
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            mesh.make_face(&loop_keys)?;
        }

        Ok(mesh)
    }

    pub fn add_vertex(&mut self, position: Point3) -> VertexId {
        self.vertices.insert(Vertex {
            position,
            halfedge: None,
        })
    }

    /// Create an edge between two vertices, returning the EdgeId.
    /// Creates two half-edges (twins) and links them; `v1 -> v2` becomes the
    /// registered orientation of the edge.
    pub fn make_edge(&mut self, v1: VertexId, v2: VertexId) -> Result<EdgeId> {
        if !self.vertices.contains_key(v1) || !self.vertices.contains_key(v2) {
            return Err(FofinError::NotFound("Vertex not found".into()));
        }
        if v1 == v2 {
            return Err(FofinError::Topology(format!(
                "Cannot create an edge from vertex {:?} to itself",
                v1
            )));
        }
        if self.lookup.contains_key(&(v1, v2)) {
            return Err(FofinError::Topology(format!(
                "Edge between {:?} and {:?} already exists",
                v1, v2
            )));
        }

        let he_a = self.halfedges.insert(HalfEdge {
            origin: v1,
            twin: None,
            next: None,
            prev: None,
            face: None,
            edge: None,
        });

        let he_b = self.halfedges.insert(HalfEdge {
            origin: v2,
            twin: Some(he_a),
            next: None,
            prev: None,
            face: None,
            edge: None,
        });

        self.halfedges[he_a].twin = Some(he_b);

        let edge_id = self.edges.insert(Edge {
            halfedge_a: he_a,
            halfedge_b: he_b,
        });

        self.halfedges[he_a].edge = Some(edge_id);
        self.halfedges[he_b].edge = Some(edge_id);
        self.lookup.insert((v1, v2), he_a);
        self.lookup.insert((v2, v1), he_b);

        // Set outgoing half-edge for vertices if not set
        if self.vertices[v1].halfedge.is_none() {
            self.vertices[v1].halfedge = Some(he_a);
        }
        if self.vertices[v2].halfedge.is_none() {
            self.vertices[v2].halfedge = Some(he_b);
        }

        Ok(edge_id)
    }

    /// Create a face from an ordered list of vertices (CCW winding).
    /// Reuses existing edges/half-edges where possible.
    pub fn make_face(&mut self, vertices: &[VertexId]) -> Result<FaceId> {
        let n = vertices.len();
        if n < 3 {
            return Err(FofinError::Topology(
                "A face requires at least 3 vertices".into(),
            ));
        }

        let mut seen = HashSet::with_capacity(n);
        for &v in vertices {
            if !self.vertices.contains_key(v) {
                return Err(FofinError::NotFound("Vertex not found".into()));
            }
            if !seen.insert(v) {
                return Err(FofinError::Topology(format!(
                    "Vertex {:?} appears more than once in the face loop",
                    v
                )));
            }
        }

        // Check every existing half-edge before touching the arenas
        for i in 0..n {
            if let Some(he_id) = self.find_halfedge(vertices[i], vertices[(i + 1) % n]) {
                if self.halfedges[he_id].face.is_some() {
                    return Err(FofinError::Topology(
                        "Half-edge already belongs to a face (non-manifold)".into(),
                    ));
                }
            }
        }

        // Collect or create half-edges for each edge of the face
        let mut face_halfedges = Vec::with_capacity(n);
        for i in 0..n {
            let v_from = vertices[i];
            let v_to = vertices[(i + 1) % n];

            match self.find_halfedge(v_from, v_to) {
                Some(he_id) => face_halfedges.push(he_id),
                None => {
                    let edge_id = self.make_edge(v_from, v_to)?;
                    face_halfedges.push(self.edges[edge_id].halfedge_a);
                }
            }
        }

        let face_id = self.faces.insert(Face {
            halfedge: face_halfedges[0],
        });

        // Link half-edges: next/prev chain + face assignment
        for i in 0..n {
            let he = face_halfedges[i];
            let next_he = face_halfedges[(i + 1) % n];
            let prev_he = face_halfedges[(n + i - 1) % n];

            self.halfedges[he].next = Some(next_he);
            self.halfedges[he].prev = Some(prev_he);
            self.halfedges[he].face = Some(face_id);
        }

        Ok(face_id)
    }

    /// Convenience: create a quadrilateral face.
    pub fn make_quad(
        &mut self,
        v1: VertexId,
        v2: VertexId,
        v3: VertexId,
        v4: VertexId,
    ) -> Result<FaceId> {
        self.make_face(&[v1, v2, v3, v4])
    }

    /// Find a half-edge going from `origin` to `target`.
    pub fn find_halfedge(&self, origin: VertexId, target: VertexId) -> Option<HalfEdgeId> {
        self.lookup.get(&(origin, target)).copied()
    }

    /// Get the target (destination) vertex of a half-edge.
    pub fn halfedge_target(&self, he_id: HalfEdgeId) -> Option<VertexId> {
        let he = self.halfedges.get(he_id)?;
        let twin_id = he.twin?;
        let twin = self.halfedges.get(twin_id)?;
        Some(twin.origin)
    }

    /// Get both faces adjacent to an edge.
    pub fn edge_faces(&self, edge_id: EdgeId) -> (Option<FaceId>, Option<FaceId>) {
        let edge = match self.edges.get(edge_id) {
            Some(e) => e,
            None => return (None, None),
        };
        let face_a = self
            .halfedges
            .get(edge.halfedge_a)
            .and_then(|he| he.face);
        let face_b = self
            .halfedges
            .get(edge.halfedge_b)
            .and_then(|he| he.face);
        (face_a, face_b)
    }

    /// The end points of an edge in its registered orientation.
    pub fn edge_vertices(&self, edge_id: EdgeId) -> Option<(VertexId, VertexId)> {
        let edge = self.edges.get(edge_id)?;
        let u = self.halfedges.get(edge.halfedge_a)?.origin;
        let v = self.halfedges.get(edge.halfedge_b)?.origin;
        Some((u, v))
    }

    /// All edges as vertex pairs, in registered orientation.
    pub fn edge_pairs(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.edges
            .keys()
            .filter_map(move |edge_id| self.edge_vertices(edge_id))
    }

    /// The face on the left of the directed edge `u -> v`.
    pub fn halfedge_face(&self, u: VertexId, v: VertexId) -> Option<FaceId> {
        let he_id = self.find_halfedge(u, v)?;
        self.halfedges.get(he_id)?.face
    }

    /// Vertices that lie on an open boundary.
    pub fn vertices_on_boundary(&self) -> HashSet<VertexId> {
        let mut boundary = HashSet::new();
        for (he_id, he) in &self.halfedges {
            if he.face.is_none() {
                boundary.insert(he.origin);
                if let Some(target) = self.halfedge_target(he_id) {
                    boundary.insert(target);
                }
            }
        }
        boundary
    }

    /// Faces with at least one edge on an open boundary.
    pub fn faces_on_boundary(&self) -> HashSet<FaceId> {
        self.halfedges
            .values()
            .filter(|he| he.face.is_none())
            .filter_map(|he| he.twin)
            .filter_map(|twin| self.halfedges.get(twin).and_then(|t| t.face))
            .collect()
    }

    pub(crate) fn rebuild_lookup(&mut self) {
        let lookup: HashMap<_, _> = self
            .halfedges
            .keys()
            .filter_map(|he_id| {
                let origin = self.halfedges[he_id].origin;
                let target = self.halfedge_target(he_id)?;
                Some(((origin, target), he_id))
            })
            .collect();
        self.lookup = lookup;
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
