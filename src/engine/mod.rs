// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod binding;
pub mod mounter;
pub mod target;

pub use binding::{MountBinding, MountedBinding};
pub use mounter::{mount, BootstrapMounter, MountReport, MountState};
pub use target::MountTarget;
