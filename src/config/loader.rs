// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_DOCUMENT_TITLE;
use crate::engine::MountTarget;
use crate::errors::ConfigError;
use crate::observability::messages::manifest::{ManifestLoaded, ManifestValidationFailed};
use crate::observability::messages::StructuredLog;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Mount manifest: the static declaration of a bootstrap.
///
/// Lists the anchors the host document exposes and the ordered
/// (component, target) pairs to mount into them. Optionally declares
/// inline template components alongside the built-in ones.
///
/// # Fields
/// * `document` - Host document title and anchor ids (optional)
/// * `mounts` - Ordered mount bindings
/// * `components` - Inline template components (optional)
///
/// # Example
/// ```yaml
/// document:
///   title: "Thumbnail Generator"
///   anchors: ["app", "app-navbar"]
/// mounts:
///   - component: app
///     target: "#app"
///   - component: app_navbar
///     target: "#app-navbar"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Manifest {
    #[serde(default)]
    pub document: DocumentConfig,
    pub mounts: Vec<MountConfig>,
    #[serde(default)]
    pub components: Vec<TemplateConfig>,
}

/// Host document description.
///
/// Anchors may be written as `"app"` or `"#app"`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocumentConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub anchors: Vec<String>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            anchors: Vec::new(),
        }
    }
}

fn default_title() -> String {
    DEFAULT_DOCUMENT_TITLE.to_string()
}

/// A single mount binding as declared in the manifest.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MountConfig {
    pub component: String,
    pub target: MountTarget,
}

/// An inline component rendered from literal markup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TemplateConfig {
    pub name: String,
    pub template: String,
}

/// On-disk manifest encodings, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Json,
    Toml,
}

impl ManifestFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Ok(ManifestFormat::Yaml),
            "json" => Ok(ManifestFormat::Json),
            "toml" => Ok(ManifestFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat(extension)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestFormat::Yaml => "yaml",
            ManifestFormat::Json => "json",
            ManifestFormat::Toml => "toml",
        }
    }
}

/// Parse manifest text in the given format.
pub fn parse_manifest(content: &str, format: ManifestFormat) -> Result<Manifest, ConfigError> {
    let manifest: Manifest = match format {
        ManifestFormat::Yaml => serde_yaml::from_str(content)?,
        ManifestFormat::Json => serde_json::from_str(content)?,
        ManifestFormat::Toml => toml::from_str(content)?,
    };
    Ok(manifest)
}

/// Load a manifest from a YAML, JSON or TOML file
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<Manifest, ConfigError> {
    let path = path.as_ref();
    let format = ManifestFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest = parse_manifest(&content, format)?;

    ManifestLoaded {
        path: &path.display().to_string(),
        format: format.as_str(),
        anchor_count: manifest.document.anchors.len(),
        mount_count: manifest.mounts.len(),
    }
    .log();

    Ok(manifest)
}

/// Load and validate a manifest
///
/// Validation errors are accumulated and returned together. A mount whose
/// target is not among the document's anchors is not a validation error;
/// that surfaces when mounting.
pub fn load_and_validate_manifest<P: AsRef<Path>>(path: P) -> Result<Manifest, ConfigError> {
    let path = path.as_ref();
    let manifest = load_manifest(path)?;

    if let Err(errors) = crate::config::validate_manifest(&manifest) {
        ManifestValidationFailed {
            path: &path.display().to_string(),
            errors: &errors,
        }
        .log();
        return Err(ConfigError::Validation(errors));
    }

    Ok(manifest)
}
