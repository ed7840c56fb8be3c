// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for component lookup while turning a manifest into bindings.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// One or more mounts reference components nobody registered.
    #[error("unknown component(s): {}; available: {}", .unknown.join(", "), .available.join(", "))]
    UnknownComponent {
        unknown: Vec<String>,
        available: Vec<String>,
    },
}
