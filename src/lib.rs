// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // components + in-memory document
pub mod config;     // manifests + registry
pub mod engine;     // bootstrap mounter
pub mod errors;     // error handling
pub mod observability;
pub mod traits;     // component and document capabilities
