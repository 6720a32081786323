use serde::{Deserialize, Serialize};

use crate::maze::InvalidDimensions;

/// Round settings supplied by the host application. Only the grid size is
/// tunable; both dimensions must be odd and at least 5 so the carving
/// lattice has representable walls between cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSettings {
    pub rows: usize,
    pub cols: usize,
}

impl Default for MazeSettings {
    fn default() -> Self {
        Self { rows: 21, cols: 21 }
    }
}

impl MazeSettings {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn validate(&self) -> Result<(), InvalidDimensions> {
        if self.rows < 5 || self.cols < 5 || self.rows % 2 == 0 || self.cols % 2 == 0 {
            return Err(InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// YAML helpers for hosts that keep settings in a config file. The
    /// caller owns file access; the core never touches the filesystem.
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let settings: Self = serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to deserialize settings: {}", e))?;
        settings
            .validate()
            .map_err(|e| format!("Settings validation error: {}", e))?;
        Ok(settings)
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self).map_err(|e| format!("Failed to serialize settings: {}", e))
    }
}
