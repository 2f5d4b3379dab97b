use std::collections::HashSet;

use fofin_core::traits::MeshTopology;

use super::mesh::Mesh;
use super::types::*;

impl MeshTopology for Mesh {
    type Vertex = VertexId;
    type Face = FaceId;

    fn contains_face(&self, face: FaceId) -> bool {
        self.faces.contains_key(face)
    }

    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex_degree(&self, vertex: VertexId) -> usize {
        Mesh::vertex_degree(self, vertex)
    }

    fn ordered_neighbors(&self, vertex: VertexId) -> Vec<VertexId> {
        self.vertex_neighbors(vertex)
    }

    fn is_boundary_vertex(&self, vertex: VertexId) -> bool {
        Mesh::is_boundary_vertex(self, vertex)
    }

    fn boundary_vertices(&self) -> HashSet<VertexId> {
        self.vertices_on_boundary()
    }

    fn boundary_faces(&self) -> HashSet<FaceId> {
        self.faces_on_boundary()
    }

    fn face_vertices(&self, face: FaceId) -> Vec<VertexId> {
        Mesh::face_vertices(self, face)
            .map(|iter| iter.collect())
            .unwrap_or_default()
    }

    fn face_across(&self, u: VertexId, v: VertexId) -> Option<FaceId> {
        self.halfedge_face(u, v)
    }

    fn canonical_edges(&self) -> HashSet<(VertexId, VertexId)> {
        self.edge_pairs().collect()
    }

    fn canonical_edge(&self, u: VertexId, v: VertexId) -> Option<(VertexId, VertexId)> {
        let he_id = self.find_halfedge(u, v)?;
        let edge_id = self.halfedges.get(he_id)?.edge?;
        self.edge_vertices(edge_id)
    }
}
