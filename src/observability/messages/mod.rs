// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit the same event with typed fields.

use tracing::Span;

pub mod manifest;
pub mod mount;

/// A log message that knows its level and its structured fields.
pub trait StructuredLog {
    /// Emit the event at the message's level.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
