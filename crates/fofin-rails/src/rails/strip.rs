use fofin_core::error::{FofinError, Result};
use fofin_core::traits::MeshTopology;
use tracing::{debug, trace, warn};

use super::{cyclic_back, FaceRail};

/// The strip of quads running from a boundary quad into the mesh.
///
/// The strip starts at `face` and repeatedly crosses the edge opposite the
/// one it entered through, beginning with the edge opposite the seed's
/// boundary edge. It ends at the far boundary or in front of the first
/// non-quad face, which is not included.
///
/// A seed that is not a boundary quad yields an empty strip. Fails with
/// `InvalidArgument` only if `face` is not a face of `mesh`.
pub fn face_strip<M: MeshTopology>(mesh: &M, face: M::Face) -> Result<FaceRail<M::Face>> {
    if !mesh.contains_face(face) {
        return Err(FofinError::InvalidArgument(format!(
            "{:?} is not a face of the mesh",
            face
        )));
    }
    if !mesh.boundary_faces().contains(&face) {
        debug!(?face, "face strip seed is not on the boundary");
        return Ok(Vec::new());
    }

    let vertices = mesh.face_vertices(face);
    if vertices.len() != 4 {
        debug!(?face, sides = vertices.len(), "face strip seed is not a quad");
        return Ok(Vec::new());
    }

    // First side whose reverse has no face
    let Some(i) = (0..4).find(|&i| mesh.face_across(vertices[(i + 1) % 4], vertices[i]).is_none())
    else {
        debug!(?face, "face strip seed has no boundary edge");
        return Ok(Vec::new());
    };

    let limit = mesh.face_count();
    let mut strip = vec![face];
    let (mut a, mut b) = opposite(&vertices, i);

    loop {
        let Some(next) = mesh.face_across(b, a) else {
            trace!(edge = ?(a, b), "face strip reached the boundary");
            break;
        };
        let vertices = mesh.face_vertices(next);
        if vertices.len() != 4 {
            trace!(face = ?next, sides = vertices.len(), "face strip stops at non-quad face");
            break;
        }
        let Some(i) = vertices.iter().position(|&x| x == b) else {
            warn!(face = ?next, vertex = ?b, "vertex missing from face loop");
            break;
        };
        if strip.len() >= limit {
            warn!(seed = ?face, limit, "face strip exceeded the face count, stopping");
            break;
        }

        strip.push(next);
        (a, b) = opposite(&vertices, i);
    }

    debug!(seed = ?face, len = strip.len(), "face strip");

    Ok(strip)
}

/// The side of a quad opposite the side starting at loop position `i`,
/// directed as in the loop.
fn opposite<V: Copy>(vertices: &[V], i: usize) -> (V, V) {
    (cyclic_back(vertices, i, 2), cyclic_back(vertices, i, 1))
}
