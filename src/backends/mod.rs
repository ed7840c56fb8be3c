// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Concrete implementations of the mounting capabilities.
//!
//! # Available Backends
//!
//! ## Components
//! Built-in component definitions implementing [`crate::traits::Component`]:
//! - **App**: the main application view
//! - **AppNavbar**: the navigation bar
//! - **TemplateComponent**: literal markup declared in a manifest
//!
//! ## Memory
//! [`memory::InMemoryDocument`] implements [`crate::traits::HostDocument`]
//! over an ordered set of anchors and renders the finished page as HTML.
//!
//! # Architecture
//!
//! ```text
//! Manifest → ComponentRegistry → MountBinding → BootstrapMounter → InMemoryDocument
//! ```

pub mod components;
pub mod memory;
