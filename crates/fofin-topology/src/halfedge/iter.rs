use super::mesh::Mesh;
use super::types::*;

/// Iterator over half-edges around a face (follows `next` pointers).
pub struct FaceHalfEdgeIter<'a> {
    mesh: &'a Mesh,
    start: HalfEdgeId,
    current: Option<HalfEdgeId>,
    started: bool,
}

impl<'a> FaceHalfEdgeIter<'a> {
    pub fn new(mesh: &'a Mesh, start: HalfEdgeId) -> Self {
        Self {
            mesh,
            start,
            current: Some(start),
            started: false,
        }
    }
}

impl<'a> Iterator for FaceHalfEdgeIter<'a> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<HalfEdgeId> {
        let cur = self.current?;

        if self.started && cur == self.start {
            return None;
        }
        self.started = true;

        let he = self.mesh.halfedges.get(cur)?;
        self.current = he.next;
        Some(cur)
    }
}

/// Iterator over vertices around a face.
pub struct FaceVertexIter<'a> {
    inner: FaceHalfEdgeIter<'a>,
}

impl<'a> FaceVertexIter<'a> {
    pub fn new(mesh: &'a Mesh, start: HalfEdgeId) -> Self {
        Self {
            inner: FaceHalfEdgeIter::new(mesh, start),
        }
    }
}

impl<'a> Iterator for FaceVertexIter<'a> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        let he_id = self.inner.next()?;
        self.inner.mesh.halfedges.get(he_id).map(|he| he.origin)
    }
}

/// Iterator over outgoing half-edges from a vertex, in cyclic order.
///
/// Circulates with `twin -> next`. On a boundary vertex the start is first
/// rewound (`prev -> twin`) to the outgoing boundary half-edge so the whole
/// fan is visited before the circulation runs off the boundary.
pub struct VertexOutgoingIter<'a> {
    mesh: &'a Mesh,
    start: HalfEdgeId,
    current: Option<HalfEdgeId>,
    started: bool,
    remaining: usize,
}

impl<'a> VertexOutgoingIter<'a> {
    pub fn new(mesh: &'a Mesh, start: HalfEdgeId) -> Self {
        let limit = mesh.halfedges.len();

        let mut first = start;
        for _ in 0..limit {
            match rotate_back(mesh, first) {
                Some(prev) if prev != start => first = prev,
                _ => break,
            }
        }

        Self {
            mesh,
            start: first,
            current: Some(first),
            started: false,
            remaining: limit,
        }
    }
}

impl<'a> Iterator for VertexOutgoingIter<'a> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<HalfEdgeId> {
        let cur = self.current?;

        if (self.started && cur == self.start) || self.remaining == 0 {
            return None;
        }
        self.started = true;
        self.remaining -= 1;

        // twin.next is None past the last face of a boundary fan
        self.current = rotate_forward(self.mesh, cur);
        Some(cur)
    }
}

fn rotate_forward(mesh: &Mesh, he_id: HalfEdgeId) -> Option<HalfEdgeId> {
    let twin = mesh.halfedges.get(he_id)?.twin?;
    mesh.halfedges.get(twin)?.next
}

fn rotate_back(mesh: &Mesh, he_id: HalfEdgeId) -> Option<HalfEdgeId> {
    let prev = mesh.halfedges.get(he_id)?.prev?;
    mesh.halfedges.get(prev)?.twin
}

// --- Mesh iterator methods ---

impl Mesh {
    /// Iterate over half-edges around a face.
    pub fn face_halfedges(&self, face_id: FaceId) -> Option<FaceHalfEdgeIter<'_>> {
        let face = self.faces.get(face_id)?;
        Some(FaceHalfEdgeIter::new(self, face.halfedge))
    }

    /// Iterate over vertices around a face.
    pub fn face_vertices(&self, face_id: FaceId) -> Option<FaceVertexIter<'_>> {
        let face = self.faces.get(face_id)?;
        Some(FaceVertexIter::new(self, face.halfedge))
    }

    /// Iterate over outgoing half-edges from a vertex.
    pub fn vertex_outgoing(&self, vertex_id: VertexId) -> Option<VertexOutgoingIter<'_>> {
        let vertex = self.vertices.get(vertex_id)?;
        let he_id = vertex.halfedge?;
        Some(VertexOutgoingIter::new(self, he_id))
    }

    /// Neighbours of a vertex in cyclic order. Empty for isolated or unknown vertices.
    pub fn vertex_neighbors(&self, vertex_id: VertexId) -> Vec<VertexId> {
        self.vertex_outgoing(vertex_id)
            .map(|iter| {
                iter.filter_map(|he_id| self.halfedge_target(he_id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn vertex_degree(&self, vertex_id: VertexId) -> usize {
        self.vertex_outgoing(vertex_id)
            .map(|iter| iter.count())
            .unwrap_or(0)
    }

    pub fn face_degree(&self, face_id: FaceId) -> usize {
        self.face_halfedges(face_id)
            .map(|iter| iter.count())
            .unwrap_or(0)
    }

    pub fn is_boundary_vertex(&self, vertex_id: VertexId) -> bool {
        let Some(mut outgoing) = self.vertex_outgoing(vertex_id) else {
            return false;
        };
        outgoing.any(|he_id| {
            let he = &self.halfedges[he_id];
            let twin_face = he
                .twin
                .and_then(|t| self.halfedges.get(t))
                .and_then(|t| t.face);
            he.face.is_none() || twin_face.is_none()
        })
    }
}
