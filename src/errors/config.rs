// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during mount manifest validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Two or more mounts name the same target anchor
    DuplicateMountTarget {
        /// The target, in selector form
        target: String,
        /// Positions of every mount naming this target
        positions: Vec<usize>,
    },
    /// A mount has an empty component name
    EmptyComponentName {
        /// Position of the mount in the manifest
        position: usize,
    },
    /// A mount has an empty target
    EmptyMountTarget {
        /// Position of the mount in the manifest
        position: usize,
    },
    /// The document declares an anchor with an empty id
    EmptyAnchor {
        /// Position of the anchor in the document's anchor list
        position: usize,
    },
    /// The document declares the same anchor twice
    DuplicateAnchor {
        /// The repeated anchor id
        anchor: String,
    },
    /// Two inline template components share a name
    DuplicateComponentName {
        /// The repeated component name
        name: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateMountTarget { target, positions } => {
                let positions: Vec<String> = positions.iter().map(|p| p.to_string()).collect();
                write!(
                    f,
                    "Mount target '{}' is used by more than one mount (positions {})",
                    target,
                    positions.join(", ")
                )
            }
            ValidationError::EmptyComponentName { position } => {
                write!(f, "Mount at position {} has an empty component name", position)
            }
            ValidationError::EmptyMountTarget { position } => {
                write!(f, "Mount at position {} has an empty target", position)
            }
            ValidationError::EmptyAnchor { position } => {
                write!(f, "Document anchor at position {} has an empty id", position)
            }
            ValidationError::DuplicateAnchor { anchor } => {
                write!(f, "Document declares anchor '{}' more than once", anchor)
            }
            ValidationError::DuplicateComponentName { name } => {
                write!(f, "Template component '{}' is declared more than once", name)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while loading a mount manifest from disk.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read manifest '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML manifest: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported manifest format '{0}' (expected .yaml, .yml, .json or .toml)")]
    UnsupportedFormat(String),

    #[error("manifest validation failed:\n{}", join_lines(.0))]
    Validation(Vec<ValidationError>),
}

fn join_lines(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}
