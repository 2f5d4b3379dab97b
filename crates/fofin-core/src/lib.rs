pub mod error;
pub mod traits;

pub use error::{FofinError, Result};
pub use traits::{MeshTopology, Validate};
