// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod mount;
mod registry;

pub use config::{ConfigError, ValidationError};
pub use mount::{MountError, MountFailures};
pub use registry::RegistryError;
