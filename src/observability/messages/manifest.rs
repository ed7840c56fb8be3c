// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for mount manifest loading and validation.

use crate::errors::ValidationError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Manifest parsed from disk.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ManifestLoaded<'a> {
    pub path: &'a str,
    pub format: &'a str,
    pub anchor_count: usize,
    pub mount_count: usize,
}

impl Display for ManifestLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} manifest '{}': {} anchors, {} mounts",
            self.format, self.path, self.anchor_count, self.mount_count
        )
    }
}

impl StructuredLog for ManifestLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            format = self.format,
            anchor_count = self.anchor_count,
            mount_count = self.mount_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "manifest_loaded",
            span_name = name,
            path = self.path,
            format = self.format,
        )
    }
}

/// Manifest failed validation.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ManifestValidationFailed<'a> {
    pub path: &'a str,
    pub errors: &'a [ValidationError],
}

impl Display for ManifestValidationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Manifest '{}' failed validation with {} error(s)",
            self.path,
            self.errors.len()
        )
    }
}

impl StructuredLog for ManifestValidationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            path = self.path,
            error_count = self.errors.len(),
            "{}", self
        );
        for error in self.errors {
            tracing::error!(path = self.path, "  {}", error);
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "manifest_validation_failed",
            span_name = name,
            path = self.path,
            error_count = self.errors.len(),
        )
    }
}
