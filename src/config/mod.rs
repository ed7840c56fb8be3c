// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod registry;
mod runtime;
mod validation;

pub mod consts;

pub use loader::{
    load_and_validate_manifest, load_manifest, parse_manifest, DocumentConfig, Manifest,
    ManifestFormat, MountConfig, TemplateConfig,
};
pub use registry::ComponentRegistry;
pub use runtime::{BindingsBuilder, BootstrapBuilder};
pub use validation::validate_manifest;
