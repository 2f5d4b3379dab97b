//! Shell datastructure for structural form finding.
//!
//! A [`Shell`] is a half-edge polygon mesh carrying loads, residual forces,
//! thickness and support conditions on its vertices, force densities and
//! forces on its edges, and strip labels on its faces. Rail queries select
//! families of edges and faces for editing.

pub mod attributes;
mod io;
pub mod settings;
pub mod shell;
mod surface;

pub use attributes::{EdgeAttributes, FaceAttributes, VertexAttributes};
pub use settings::{Rgb, ShellSettings};
pub use shell::Shell;
pub use surface::DEFAULT_SURFACE_DENSITY;
