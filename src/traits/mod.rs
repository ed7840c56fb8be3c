// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod component;
pub mod document;

pub use component::{Component, RenderedInstance};
pub use document::HostDocument;
