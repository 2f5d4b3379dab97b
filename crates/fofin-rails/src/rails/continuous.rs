use fofin_core::error::Result;
use fofin_core::traits::MeshTopology;
use tracing::{debug, trace, warn};

use super::{cyclic_back, ensure_edge, orient, EdgeRail, Walk};

/// The edges forming a straight line with `edge`, through 4-valent interior vertices.
///
/// The line is returned as one chain: the part beyond `edge.0` (farthest
/// edge first), then `edge` itself, then the part beyond `edge.1`. With
/// `directed == false` every edge points along the chain; with
/// `directed == true` every edge is flipped to its registered orientation.
///
/// A line that closes on itself is walked once, so no edge is repeated.
/// Fails with `InvalidArgument` if `edge` is not an edge of `mesh`.
pub fn continuous_edge_line<M: MeshTopology>(
    mesh: &M,
    edge: (M::Vertex, M::Vertex),
    directed: bool,
) -> Result<EdgeRail<M::Vertex>> {
    let edges = mesh.canonical_edges();
    ensure_edge(&edges, edge)?;

    let (u, v) = edge;
    let limit = edges.len();

    let before = walk_line(mesh, u, v, limit);
    let mut line: EdgeRail<M::Vertex> = before.edges.iter().rev().map(|&(a, b)| (b, a)).collect();
    line.push(edge);
    if !before.closed {
        line.extend(walk_line(mesh, v, u, limit).edges);
    }

    debug!(
        seed = ?edge,
        len = line.len(),
        closed = before.closed,
        "continuous edge line"
    );

    Ok(if directed { orient(&edges, line) } else { line })
}

/// Walk straight on from `start`, having arrived there from `from`.
fn walk_line<M: MeshTopology>(
    mesh: &M,
    start: M::Vertex,
    from: M::Vertex,
    limit: usize,
) -> Walk<M::Vertex> {
    let end = from;
    let (mut u, mut v) = (start, from);
    let mut edges = Vec::new();
    let mut closed = false;

    loop {
        if edges.len() >= limit {
            warn!(?start, limit, "edge line walk exceeded the edge count, stopping");
            break;
        }
        if mesh.vertex_degree(u) != 4 {
            trace!(vertex = ?u, "edge line stops at non 4-valent vertex");
            break;
        }
        if u == end {
            closed = true;
            break;
        }
        if mesh.is_boundary_vertex(u) {
            trace!(vertex = ?u, "edge line stops at boundary");
            break;
        }

        let nbrs = mesh.ordered_neighbors(u);
        let Some(i) = nbrs.iter().position(|&n| n == v) else {
            warn!(vertex = ?u, from = ?v, "vertex missing from neighbour ring");
            break;
        };
        let next = cyclic_back(&nbrs, i, 2);
        trace!(from = ?u, to = ?next, "edge line step");

        edges.push((u, next));
        v = u;
        u = next;
    }

    Walk { edges, closed }
}
