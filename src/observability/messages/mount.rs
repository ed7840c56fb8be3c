// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the mount pass.
//!
//! This module contains message types for logging events related to:
//! * Mount pass start and completion
//! * Bindings that mounted
//! * Bindings whose target was missing or already filled
//! * Rejected re-mount attempts

use crate::engine::MountTarget;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Mount pass started.
///
/// # Log Level
/// `info!` - Important operational event
pub struct MountStarted {
    pub binding_count: usize,
}

impl Display for MountStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Mounting {} bindings", self.binding_count)
    }
}

impl StructuredLog for MountStarted {
    fn log(&self) {
        tracing::info!(binding_count = self.binding_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "mount",
            span_name = name,
            binding_count = self.binding_count,
        )
    }
}

/// A binding's component was instantiated and attached.
///
/// # Log Level
/// `debug!` - Per-binding detail
///
/// # Example
/// ```
/// use mountwood::engine::MountTarget;
/// use mountwood::observability::messages::mount::BindingMounted;
///
/// let target = MountTarget::parse("#app");
/// let msg = BindingMounted {
///     index: 0,
///     component: "App",
///     target: &target,
/// };
///
/// assert_eq!(msg.to_string(), "Mounted 'App' at #app (binding #0)");
/// ```
pub struct BindingMounted<'a> {
    pub index: usize,
    pub component: &'a str,
    pub target: &'a MountTarget,
}

impl Display for BindingMounted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Mounted '{}' at {} (binding #{})",
            self.component, self.target, self.index
        )
    }
}

impl StructuredLog for BindingMounted<'_> {
    fn log(&self) {
        tracing::debug!(
            index = self.index,
            component = self.component,
            mount_target = %self.target,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "binding_mounted",
            span_name = name,
            index = self.index,
            component = self.component,
            mount_target = %self.target,
        )
    }
}

/// The binding's target did not resolve to an anchor.
///
/// # Log Level
/// `warn!` - The application keeps running without this tree
pub struct MountTargetMissing<'a> {
    pub index: usize,
    pub component: &'a str,
    pub target: &'a MountTarget,
}

impl Display for MountTargetMissing<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Mount target {} not found; '{}' was not mounted (binding #{})",
            self.target, self.component, self.index
        )
    }
}

impl StructuredLog for MountTargetMissing<'_> {
    fn log(&self) {
        tracing::warn!(
            index = self.index,
            component = self.component,
            mount_target = %self.target,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "mount_target_missing",
            span_name = name,
            index = self.index,
            component = self.component,
            mount_target = %self.target,
        )
    }
}

/// The binding's target was already filled earlier in the pass.
///
/// # Log Level
/// `warn!` - Declaration error, first binding kept the target
pub struct MountTargetConflicted<'a> {
    pub index: usize,
    pub component: &'a str,
    pub target: &'a MountTarget,
    pub occupied_by: &'a str,
}

impl Display for MountTargetConflicted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Mount target {} already holds '{}'; '{}' was not mounted (binding #{})",
            self.target, self.occupied_by, self.component, self.index
        )
    }
}

impl StructuredLog for MountTargetConflicted<'_> {
    fn log(&self) {
        tracing::warn!(
            index = self.index,
            component = self.component,
            mount_target = %self.target,
            occupied_by = self.occupied_by,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "mount_target_conflicted",
            span_name = name,
            index = self.index,
            component = self.component,
            mount_target = %self.target,
            occupied_by = self.occupied_by,
        )
    }
}

/// Mount pass finished.
///
/// # Log Level
/// `info!` when every binding mounted, `warn!` otherwise
pub struct MountCompleted {
    pub mounted: usize,
    pub failed: usize,
    pub duration: Duration,
}

impl Display for MountCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Mount pass completed: {} mounted, {} failed in {:?}",
            self.mounted, self.failed, self.duration
        )
    }
}

impl StructuredLog for MountCompleted {
    fn log(&self) {
        if self.failed == 0 {
            tracing::info!(
                mounted = self.mounted,
                failed = self.failed,
                duration_us = self.duration.as_micros() as u64,
                "{}", self
            );
        } else {
            tracing::warn!(
                mounted = self.mounted,
                failed = self.failed,
                duration_us = self.duration.as_micros() as u64,
                "{}", self
            );
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "mount_completed",
            span_name = name,
            mounted = self.mounted,
            failed = self.failed,
            duration = ?self.duration,
        )
    }
}

/// `mount` was called on a mounter that already completed.
///
/// # Log Level
/// `error!` - Caller bug
pub struct MountRejected {
    pub binding_count: usize,
}

impl Display for MountRejected {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Refusing to mount {} bindings: mounter already completed",
            self.binding_count
        )
    }
}

impl StructuredLog for MountRejected {
    fn log(&self) {
        tracing::error!(binding_count = self.binding_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "mount_rejected",
            span_name = name,
            binding_count = self.binding_count,
        )
    }
}
