use serde::{Deserialize, Serialize};

pub type Rgb = [u8; 3];

/// Display colours for force and reaction vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    pub compression: Rgb,
    pub tension: Rgb,
    pub reactions: Rgb,
    pub residuals: Rgb,
    pub loads: Rgb,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            compression: [0, 0, 255],
            tension: [255, 0, 0],
            reactions: [0, 255, 0],
            residuals: [0, 255, 255],
            loads: [0, 0, 255],
        }
    }
}

/// Display scale factors for force and reaction vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleSettings {
    pub forces: f64,
    pub reactions: f64,
    pub residuals: f64,
    pub loads: f64,
}

impl Default for ScaleSettings {
    fn default() -> Self {
        Self {
            forces: 0.1,
            reactions: 1.0,
            residuals: 1.0,
            loads: 1.0,
        }
    }
}

/// Magnitudes below which forces and reactions are treated as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToleranceSettings {
    pub reactions: f64,
    pub residuals: f64,
    pub forces: f64,
}

impl Default for ToleranceSettings {
    fn default() -> Self {
        Self {
            reactions: 1e-3,
            residuals: 1e-3,
            forces: 1e-3,
        }
    }
}

/// Shell-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    pub colors: ColorSettings,
    pub scales: ScaleSettings,
    pub tolerances: ToleranceSettings,
    /// Material density.
    pub density: f64,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            colors: ColorSettings::default(),
            scales: ScaleSettings::default(),
            tolerances: ToleranceSettings::default(),
            density: 1.0,
        }
    }
}
