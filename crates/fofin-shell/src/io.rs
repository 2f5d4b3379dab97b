use std::fs;
use std::path::Path;

use fofin_core::error::Result;
use fofin_core::traits::Validate;
use tracing::info;

use crate::shell::Shell;

impl Shell {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a shell written by [`Shell::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        let shell: Shell = serde_json::from_str(json)?;
        shell.validate()?;
        Ok(shell)
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), "saved shell");
        Ok(())
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let shell = Self::from_json(&fs::read_to_string(path)?)?;
        info!(
            path = %path.display(),
            vertices = shell.mesh().vertices.len(),
            faces = shell.mesh().faces.len(),
            "loaded shell"
        );
        Ok(shell)
    }
}
