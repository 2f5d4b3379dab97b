//! Parallel rail queries over a shared mesh.
//!
//! The walks only read the mesh, so a batch of seeds fans out over rayon's
//! pool with a plain shared borrow. Results come back in seed order.

use fofin_core::error::Result;
use fofin_core::traits::MeshTopology;
use rayon::prelude::*;

use crate::rails::{continuous_edge_line, face_strip, parallel_edges, EdgeRail, FaceRail};

pub fn continuous_edge_lines<M>(
    mesh: &M,
    seeds: &[(M::Vertex, M::Vertex)],
    directed: bool,
) -> Vec<Result<EdgeRail<M::Vertex>>>
where
    M: MeshTopology + Sync,
    M::Vertex: Send + Sync,
{
    seeds
        .par_iter()
        .map(|&seed| continuous_edge_line(mesh, seed, directed))
        .collect()
}

pub fn parallel_edge_sets<M>(
    mesh: &M,
    seeds: &[(M::Vertex, M::Vertex)],
) -> Vec<Result<EdgeRail<M::Vertex>>>
where
    M: MeshTopology + Sync,
    M::Vertex: Send + Sync,
{
    seeds
        .par_iter()
        .map(|&seed| parallel_edges(mesh, seed))
        .collect()
}

pub fn face_strips<M>(mesh: &M, seeds: &[M::Face]) -> Vec<Result<FaceRail<M::Face>>>
where
    M: MeshTopology + Sync,
    M::Face: Send + Sync,
{
    seeds.par_iter().map(|&seed| face_strip(mesh, seed)).collect()
}
