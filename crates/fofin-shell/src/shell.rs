use fofin_core::error::{FofinError, Result};
use fofin_core::traits::Validate;
use fofin_rails::{EdgeRail, FaceRail};
use fofin_topology::{EdgeId, FaceId, Mesh, Point3, VertexId};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use slotmap::SecondaryMap;
use tracing::debug;

use crate::attributes::{EdgeAttributes, FaceAttributes, VertexAttributes};
use crate::settings::ShellSettings;

/// A half-edge mesh with form-finding attributes on every vertex, edge and face.
///
/// The mesh is only reachable immutably from outside so that every element
/// always has an attribute record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shell {
    mesh: Mesh,
    vertex_attributes: SecondaryMap<VertexId, VertexAttributes>,
    edge_attributes: SecondaryMap<EdgeId, EdgeAttributes>,
    face_attributes: SecondaryMap<FaceId, FaceAttributes>,
    pub settings: ShellSettings,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            mesh: Mesh::new(),
            vertex_attributes: SecondaryMap::new(),
            edge_attributes: SecondaryMap::new(),
            face_attributes: SecondaryMap::new(),
            settings: ShellSettings::default(),
        }
    }

    /// Build a shell from positions and faces given as indices into `positions`.
    pub fn from_vertices_and_faces(positions: &[Point3], faces: &[Vec<usize>]) -> Result<Self> {
        let mut shell = Self::new();
        let keys: Vec<VertexId> = positions.iter().map(|&p| shell.add_vertex(p)).collect();

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
            shell.add_face(&loop_keys)?;
        }

        debug!(
            vertices = shell.mesh.vertices.len(),
            faces = shell.mesh.faces.len(),
            "built shell"
        );
        Ok(shell)
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn add_vertex(&mut self, position: Point3) -> VertexId {
        let key = self.mesh.add_vertex(position);
        self.vertex_attributes.insert(key, VertexAttributes::default());
        key
    }

    /// Add a face; edges it creates get default attributes.
    pub fn add_face(&mut self, vertices: &[VertexId]) -> Result<FaceId> {
        let face = self.mesh.make_face(vertices)?;
        self.face_attributes.insert(face, FaceAttributes::default());

        let edges: Vec<EdgeId> = self
            .mesh
            .face_halfedges(face)
            .into_iter()
            .flatten()
            .filter_map(|he_id| self.mesh.halfedges[he_id].edge)
            .collect();
        for edge in edges {
            if !self.edge_attributes.contains_key(edge) {
                self.edge_attributes.insert(edge, EdgeAttributes::default());
            }
        }

        Ok(face)
    }

    // --- Attribute access ---

    pub fn position(&self, vertex: VertexId) -> Option<Point3> {
        self.mesh.vertices.get(vertex).map(|v| v.position)
    }

    pub fn set_position(&mut self, vertex: VertexId, position: Point3) -> Result<()> {
        let record = self
            .mesh
            .vertices
            .get_mut(vertex)
            .ok_or_else(|| FofinError::NotFound(format!("Vertex {:?}", vertex)))?;
        record.position = position;
        Ok(())
    }

    pub fn vertex(&self, vertex: VertexId) -> Option<&VertexAttributes> {
        self.vertex_attributes.get(vertex)
    }

    pub fn vertex_mut(&mut self, vertex: VertexId) -> Option<&mut VertexAttributes> {
        self.vertex_attributes.get_mut(vertex)
    }

    /// Attributes of the edge `{u, v}`, in either orientation.
    pub fn edge(&self, u: VertexId, v: VertexId) -> Option<&EdgeAttributes> {
        let edge = self.edge_key(u, v)?;
        self.edge_attributes.get(edge)
    }

    pub fn edge_mut(&mut self, u: VertexId, v: VertexId) -> Option<&mut EdgeAttributes> {
        let edge = self.edge_key(u, v)?;
        self.edge_attributes.get_mut(edge)
    }

    pub fn face(&self, face: FaceId) -> Option<&FaceAttributes> {
        self.face_attributes.get(face)
    }

    pub fn face_mut(&mut self, face: FaceId) -> Option<&mut FaceAttributes> {
        self.face_attributes.get_mut(face)
    }

    fn edge_key(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        let he_id = self.mesh.find_halfedge(u, v)?;
        self.mesh.halfedges.get(he_id)?.edge
    }

    // --- Vertex selections ---

    pub fn vertices_where<P>(&self, predicate: P) -> Vec<VertexId>
    where
        P: Fn(VertexId, &VertexAttributes) -> bool,
    {
        self.vertex_attributes
            .iter()
            .filter(|(key, attr)| predicate(*key, *attr))
            .map(|(key, _)| key)
            .collect()
    }

    pub fn anchors(&self) -> Vec<VertexId> {
        self.vertices_where(|_, attr| attr.is_anchor)
    }

    pub fn fixed(&self) -> Vec<VertexId> {
        self.vertices_where(|_, attr| attr.is_fixed)
    }

    pub fn constrained(&self) -> Vec<VertexId> {
        self.vertices_where(|_, attr| attr.is_constrained())
    }

    /// Mark vertices as anchors. Fails without changes if any vertex is unknown.
    pub fn set_anchors<I>(&mut self, vertices: I) -> Result<()>
    where
        I: IntoIterator<Item = VertexId>,
    {
        let vertices: Vec<VertexId> = vertices.into_iter().collect();
        if let Some(missing) = vertices
            .iter()
            .find(|&&key| !self.vertex_attributes.contains_key(key))
        {
            return Err(FofinError::NotFound(format!("Vertex {:?}", missing)));
        }
        for key in vertices {
            self.vertex_attributes[key].is_anchor = true;
        }
        Ok(())
    }

    /// Anchor every vertex on the open boundary.
    pub fn anchor_boundary(&mut self) -> usize {
        let boundary = self.mesh.vertices_on_boundary();
        for &key in &boundary {
            if let Some(attr) = self.vertex_attributes.get_mut(key) {
                attr.is_anchor = true;
            }
        }
        boundary.len()
    }

    pub fn total_load(&self) -> DVec3 {
        self.vertex_attributes.values().map(|attr| attr.load).sum()
    }

    /// Sum of the reactions at anchored vertices.
    pub fn total_reaction(&self) -> DVec3 {
        self.vertex_attributes
            .values()
            .filter_map(VertexAttributes::reaction)
            .sum()
    }

    /// Store the current length of every edge in its `l` attribute.
    pub fn update_edge_lengths(&mut self) {
        for (edge, attr) in self.edge_attributes.iter_mut() {
            if let Some((u, v)) = self.mesh.edge_vertices(edge) {
                attr.l = self.mesh.vertices[u].position.distance(self.mesh.vertices[v].position);
            }
        }
    }

    // --- Rail selection ---

    /// Edges forming a straight line through `edge`.
    pub fn continuous_edges(
        &self,
        edge: (VertexId, VertexId),
        directed: bool,
    ) -> Result<EdgeRail<VertexId>> {
        fofin_rails::continuous_edge_line(&self.mesh, edge, directed)
    }

    /// Edges parallel to `edge` across its quad strip.
    pub fn parallel_edges(&self, edge: (VertexId, VertexId)) -> Result<EdgeRail<VertexId>> {
        fofin_rails::parallel_edges(&self.mesh, edge)
    }

    /// The quad strip anchored at a boundary face; empty for other faces.
    pub fn face_strip(&self, face: FaceId) -> Result<FaceRail<FaceId>> {
        fofin_rails::face_strip(&self.mesh, face)
    }

    /// Write `label` into the `strip` attribute of every face of the strip at `face`.
    pub fn label_face_strip(&mut self, face: FaceId, label: &str) -> Result<FaceRail<FaceId>> {
        let strip = self.face_strip(face)?;
        for &key in &strip {
            if let Some(attr) = self.face_attributes.get_mut(key) {
                attr.strip = Some(label.to_owned());
            }
        }
        debug!(seed = ?face, label, len = strip.len(), "labelled face strip");
        Ok(strip)
    }

    /// Faces carrying the given strip label.
    pub fn faces_in_strip(&self, label: &str) -> Vec<FaceId> {
        self.face_attributes
            .iter()
            .filter(|(_, attr)| attr.strip.as_deref() == Some(label))
            .map(|(key, _)| key)
            .collect()
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Shell {
    fn validate(&self) -> Result<()> {
        self.mesh.validate()?;

        if let Some(key) = self
            .mesh
            .vertices
            .keys()
            .find(|&key| !self.vertex_attributes.contains_key(key))
        {
            return Err(FofinError::Topology(format!(
                "Vertex {:?} has no attributes",
                key
            )));
        }
        if let Some(key) = self
            .mesh
            .edges
            .keys()
            .find(|&key| !self.edge_attributes.contains_key(key))
        {
            return Err(FofinError::Topology(format!("Edge {:?} has no attributes", key)));
        }
        if let Some(key) = self
            .mesh
            .faces
            .keys()
            .find(|&key| !self.face_attributes.contains_key(key))
        {
            return Err(FofinError::Topology(format!("Face {:?} has no attributes", key)));
        }

        Ok(())
    }
}
