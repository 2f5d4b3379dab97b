use fofin_core::error::{FofinError, Result};
use fofin_topology::Point3;
use tracing::debug;

use crate::shell::Shell;

/// Quads along `u` and `v` when no density is given.
pub const DEFAULT_SURFACE_DENSITY: (usize, usize) = (10, 10);

impl Shell {
    /// Sample a parametric surface on `u` by `v` quads over `[0, 1]²`.
    ///
    /// Vertex `(i, j)` sits at `surface(i / u, j / v)`; faces are listed row
    /// by row along `u`, wound counter-clockwise in parameter space.
    pub fn from_surface_uv<S>(surface: S, u: usize, v: usize) -> Result<Self>
    where
        S: Fn(f64, f64) -> Point3,
    {
        if u == 0 || v == 0 {
            return Err(FofinError::InvalidArgument(format!(
                "Surface density must be positive, got {}x{}",
                u, v
            )));
        }
        sample(surface, u, v, false)
    }

    /// Like [`Shell::from_surface_uv`], but the surface is periodic in `u`:
    /// `u = 1` is stitched to `u = 0`, giving a tube of `u` quads per ring.
    pub fn from_surface_uv_closed_u<S>(surface: S, u: usize, v: usize) -> Result<Self>
    where
        S: Fn(f64, f64) -> Point3,
    {
        if u < 3 || v == 0 {
            return Err(FofinError::InvalidArgument(format!(
                "A closed surface needs at least 3x1 quads, got {}x{}",
                u, v
            )));
        }
        sample(surface, u, v, true)
    }
}

fn sample<S>(surface: S, u: usize, v: usize, closed_u: bool) -> Result<Shell>
where
    S: Fn(f64, f64) -> Point3,
{
    let columns = if closed_u { u } else { u + 1 };
    let positions: Vec<Point3> = (0..=v)
        .flat_map(|j| (0..columns).map(move |i| (i, j)))
        .map(|(i, j)| surface(i as f64 / u as f64, j as f64 / v as f64))
        .collect();

    let id = |i: usize, j: usize| j * columns + i % columns;
    let faces: Vec<Vec<usize>> = (0..v)
        .flat_map(|j| (0..u).map(move |i| (i, j)))
        .map(|(i, j)| vec![id(i, j), id(i + 1, j), id(i + 1, j + 1), id(i, j + 1)])
        .collect();

    debug!(u, v, closed_u, "sampling surface");
    Shell::from_vertices_and_faces(&positions, &faces)
}
