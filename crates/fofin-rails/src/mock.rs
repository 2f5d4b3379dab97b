//! Minimal index-based mesh for exercising the walks without a half-edge arena.

use std::collections::{HashMap, HashSet};

use fofin_core::traits::MeshTopology;

pub(crate) struct IndexMesh {
    faces: Vec<Vec<u32>>,
    halfedge: HashMap<(u32, u32), Option<usize>>,
    edges: HashSet<(u32, u32)>,
}

impl IndexMesh {
    pub(crate) fn from_faces(faces: Vec<Vec<u32>>) -> Self {
        let mut halfedge = HashMap::new();
        let mut edges = HashSet::new();
        for (f, face) in faces.iter().enumerate() {
            let n = face.len();
            for i in 0..n {
                let (a, b) = (face[i], face[(i + 1) % n]);
                if !halfedge.contains_key(&(a, b)) && !halfedge.contains_key(&(b, a)) {
                    edges.insert((a, b));
                    halfedge.insert((b, a), None);
                }
                halfedge.insert((a, b), Some(f));
            }
        }
        Self {
            faces,
            halfedge,
            edges,
        }
    }

    /// `nx` by `ny` quads; vertex `(i, j)` is `j * (nx + 1) + i`, faces row by row.
    pub(crate) fn grid(nx: u32, ny: u32) -> Self {
        let id = |i: u32, j: u32| j * (nx + 1) + i;
        let faces = (0..ny)
            .flat_map(|j| {
                (0..nx).map(move |i| vec![id(i, j), id(i + 1, j), id(i + 1, j + 1), id(i, j + 1)])
            })
            .collect();
        Self::from_faces(faces)
    }

    /// `around` quads per ring, `rows` rings; vertex `(i, j)` is `j * around + i`.
    pub(crate) fn cylinder(around: u32, rows: u32) -> Self {
        let id = move |i: u32, j: u32| j * around + i % around;
        let faces = (0..rows)
            .flat_map(|j| {
                (0..around).map(move |i| vec![id(i, j), id(i + 1, j), id(i + 1, j + 1), id(i, j + 1)])
            })
            .collect();
        Self::from_faces(faces)
    }

    fn position(&self, face: usize, vertex: u32) -> Option<usize> {
        self.faces[face].iter().position(|&x| x == vertex)
    }

    fn rotate_forward(&self, v: u32, a: u32) -> Option<u32> {
        let f = (*self.halfedge.get(&(v, a))?)?;
        let face = &self.faces[f];
        let i = self.position(f, v)?;
        Some(face[(i + face.len() - 1) % face.len()])
    }

    fn rotate_back(&self, v: u32, a: u32) -> Option<u32> {
        let g = (*self.halfedge.get(&(a, v))?)?;
        let face = &self.faces[g];
        let i = self.position(g, v)?;
        Some(face[(i + 1) % face.len()])
    }
}

impl MeshTopology for IndexMesh {
    type Vertex = u32;
    type Face = usize;

    fn contains_face(&self, face: usize) -> bool {
        face < self.faces.len()
    }

    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex_degree(&self, vertex: u32) -> usize {
        self.ordered_neighbors(vertex).len()
    }

    fn ordered_neighbors(&self, vertex: u32) -> Vec<u32> {
        let Some(&(_, first)) = self.halfedge.keys().filter(|(a, _)| *a == vertex).min() else {
            return Vec::new();
        };
        let limit = self.halfedge.len();

        let mut start = first;
        for _ in 0..limit {
            match self.rotate_back(vertex, start) {
                Some(q) if q != first => start = q,
                _ => break,
            }
        }

        let mut nbrs = vec![start];
        let mut current = start;
        for _ in 0..limit {
            match self.rotate_forward(vertex, current) {
                Some(p) if p != start => {
                    nbrs.push(p);
                    current = p;
                }
                _ => break,
            }
        }
        nbrs
    }

    fn is_boundary_vertex(&self, vertex: u32) -> bool {
        self.halfedge
            .iter()
            .any(|(&(a, b), face)| face.is_none() && (a == vertex || b == vertex))
    }

    fn boundary_vertices(&self) -> HashSet<u32> {
        self.halfedge
            .iter()
            .filter(|(_, face)| face.is_none())
            .flat_map(|(&(a, b), _)| [a, b])
            .collect()
    }

    fn boundary_faces(&self) -> HashSet<usize> {
        self.halfedge
            .iter()
            .filter(|(_, face)| face.is_none())
            .filter_map(|(&(a, b), _)| self.halfedge.get(&(b, a)).copied().flatten())
            .collect()
    }

    fn face_vertices(&self, face: usize) -> Vec<u32> {
        self.faces.get(face).cloned().unwrap_or_default()
    }

    fn face_across(&self, u: u32, v: u32) -> Option<usize> {
        self.halfedge.get(&(u, v)).copied().flatten()
    }

    fn canonical_edges(&self) -> HashSet<(u32, u32)> {
        self.edges.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_counts() {
        let mesh = IndexMesh::grid(3, 3);
        assert_eq!(mesh.canonical_edges().len(), 24);
        assert_eq!(mesh.boundary_vertices().len(), 12);
        assert_eq!(mesh.boundary_faces().len(), 8);
        assert_eq!(mesh.face_count(), 9);
    }

    #[test]
    fn test_boundary_vertex_query_agrees_with_set() {
        let mesh = IndexMesh::grid(3, 3);
        let boundary = mesh.boundary_vertices();
        for vertex in 0..16 {
            assert_eq!(mesh.is_boundary_vertex(vertex), boundary.contains(&vertex));
        }
        assert!(!mesh.is_boundary_vertex(5));
        assert!(mesh.is_boundary_vertex(4));
    }

    #[test]
    fn test_interior_ring_is_cyclic() {
        let mesh = IndexMesh::grid(2, 2);
        let nbrs = mesh.ordered_neighbors(4);
        assert_eq!(nbrs.len(), 4);
        let i = nbrs.iter().position(|&v| v == 5).unwrap();
        assert_eq!(nbrs[(i + 2) % 4], 3);
    }

    #[test]
    fn test_boundary_fan_is_complete() {
        let mesh = IndexMesh::grid(2, 2);
        let nbrs = mesh.ordered_neighbors(1);
        assert_eq!(nbrs.len(), 3);
        assert_eq!(nbrs[1], 4);
    }
}
