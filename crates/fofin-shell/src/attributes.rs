use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Per-vertex form-finding data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VertexAttributes {
    /// Externally applied load.
    pub load: DVec3,
    /// Unbalanced force left after equilibrium. On an anchor this is the reaction.
    pub residual: DVec3,
    /// Shell thickness at the vertex.
    pub thickness: f64,
    /// Supported in XYZ; takes reaction forces.
    pub is_anchor: bool,
    /// Held in place during geometric operations such as smoothing.
    pub is_fixed: bool,
    /// Name or id of the geometric object the vertex is constrained to.
    pub constraint: Option<String>,
    /// Current parameter of the vertex on its constraint.
    pub param: Option<f64>,
}

impl Default for VertexAttributes {
    fn default() -> Self {
        Self {
            load: DVec3::ZERO,
            residual: DVec3::ZERO,
            thickness: 0.0,
            is_anchor: false,
            is_fixed: false,
            constraint: None,
            param: None,
        }
    }
}

impl VertexAttributes {
    /// The reaction force, for anchored vertices only.
    pub fn reaction(&self) -> Option<DVec3> {
        self.is_anchor.then_some(self.residual)
    }

    pub fn is_constrained(&self) -> bool {
        self.constraint.is_some()
    }
}

/// Per-edge form-finding data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeAttributes {
    /// Force density.
    pub q: f64,
    /// Axial force; negative in compression.
    pub f: f64,
    /// Current length.
    pub l: f64,
    /// Young's modulus.
    #[serde(rename = "E")]
    pub e: f64,
    /// Cross-section radius.
    pub r: f64,
    /// Rest length.
    pub l0: f64,
    pub is_edge: bool,
}

impl Default for EdgeAttributes {
    fn default() -> Self {
        Self {
            q: 1.0,
            f: 0.0,
            l: 0.0,
            e: 0.0,
            r: 0.0,
            l0: 0.0,
            is_edge: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceAttributes {
    /// Label of the face strip this face was assigned to.
    pub strip: Option<String>,
}
