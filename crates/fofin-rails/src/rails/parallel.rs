use fofin_core::error::Result;
use fofin_core::traits::MeshTopology;
use tracing::{debug, trace, warn};

use super::{cyclic_back, ensure_edge, orient, EdgeRail, Walk};

/// The edges parallel to `edge` across the strip of quads it belongs to.
///
/// Starting from `edge`, each step crosses the quad on the left of the
/// current directed edge to the opposite edge. The walk to the left of
/// `edge` is reversed and joined to the walk to its right, so the seed sits
/// once in the middle of the chain. A strip that closes on itself is walked
/// only once. Every edge comes back in its registered orientation.
///
/// Fails with `InvalidArgument` if `edge` is not an edge of `mesh`.
pub fn parallel_edges<M: MeshTopology>(
    mesh: &M,
    edge: (M::Vertex, M::Vertex),
) -> Result<EdgeRail<M::Vertex>> {
    let edges = mesh.canonical_edges();
    ensure_edge(&edges, edge)?;

    let (u, v) = edge;
    let limit = edges.len();

    let left = walk_parallel(mesh, edge, (u, v), limit);
    let mut rail: EdgeRail<M::Vertex> = left.edges.into_iter().rev().collect();
    rail.push(edge);
    if !left.closed {
        rail.extend(walk_parallel(mesh, edge, (v, u), limit).edges);
    }

    debug!(seed = ?edge, len = rail.len(), closed = left.closed, "parallel edges");

    Ok(orient(&edges, rail))
}

fn walk_parallel<M: MeshTopology>(
    mesh: &M,
    seed: (M::Vertex, M::Vertex),
    start: (M::Vertex, M::Vertex),
    limit: usize,
) -> Walk<M::Vertex> {
    let on_seed = |x: M::Vertex| x == seed.0 || x == seed.1;
    let (mut u, mut v) = start;
    let mut edges = Vec::new();
    let mut closed = false;

    loop {
        if edges.len() >= limit {
            warn!(?seed, limit, "parallel edge walk exceeded the edge count, stopping");
            break;
        }
        let Some(face) = mesh.face_across(u, v) else {
            trace!(edge = ?(u, v), "parallel edges stop at boundary");
            break;
        };
        let vertices = mesh.face_vertices(face);
        if vertices.len() != 4 {
            trace!(?face, sides = vertices.len(), "parallel edges stop at non-quad face");
            break;
        }
        let Some(i) = vertices.iter().position(|&x| x == u) else {
            warn!(?face, vertex = ?u, "vertex missing from face loop");
            break;
        };

        let (a, b) = (cyclic_back(&vertices, i, 1), cyclic_back(&vertices, i, 2));
        if on_seed(a) && on_seed(b) {
            closed = true;
            break;
        }
        trace!(?face, edge = ?(a, b), "parallel edge step");

        edges.push((a, b));
        u = a;
        v = b;
    }

    Walk { edges, closed }
}
