//! Half-edge polygon mesh used by the form-finding shell.

pub mod halfedge;

pub use halfedge::*;
