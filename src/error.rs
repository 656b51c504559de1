//! Error types for layout loading and scripted input

use std::path::PathBuf;
use thiserror::Error;

/// Anything that can go wrong before the gamepad is ready to take input
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse layout YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read touch script: {0}")]
    Csv(#[from] csv::Error),

    #[error("texture atlas has invalid size {width}x{height}")]
    InvalidAtlas { width: f32, height: f32 },

    #[error("atlas region '{0}' is not defined")]
    UnknownRegion(String),

    #[error("{kind} {index} has an empty name")]
    EmptyName { kind: &'static str, index: usize },

    #[error("duplicate {kind} name '{name}'")]
    DuplicateName { kind: &'static str, name: String },

    #[error("joystick '{name}' radius must be positive, got {radius}")]
    InvalidRadius { name: String, radius: f32 },

    #[error("max_contacts must be at least 1")]
    NoContacts,

    #[error("touch script row {row}: {message}")]
    Script { row: usize, message: String },
}
