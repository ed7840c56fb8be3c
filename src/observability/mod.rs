// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Message types follow a struct-based pattern with a `Display`
//! implementation, so log text lives in one place instead of being scattered
//! as string literals through the mounter and the manifest loader.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::mount` - Mount pass lifecycle and per-binding outcomes
//! * `messages::manifest` - Manifest loading and validation events
//!
//! # Usage
//!
//! ```rust
//! use mountwood::engine::MountTarget;
//! use mountwood::observability::messages::mount::MountTargetMissing;
//! use mountwood::observability::messages::StructuredLog;
//!
//! let target = MountTarget::parse("#missing");
//! let msg = MountTargetMissing {
//!     index: 1,
//!     component: "AppNavbar",
//!     target: &target,
//! };
//!
//! msg.log();
//! ```

pub mod messages;
