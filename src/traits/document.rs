// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::MountTarget;
use crate::traits::component::RenderedInstance;

/// Capability over the host document's anchor set.
///
/// The mounter never reaches for a global document; whoever drives the
/// bootstrap hands one of these in. Tests use a fake.
pub trait HostDocument {
    /// Handle to a resolved anchor, only valid for the document that produced it.
    type Anchor;

    /// Look up the anchor for `target`, or `None` when the document has no such anchor.
    fn resolve(&self, target: &MountTarget) -> Option<Self::Anchor>;

    /// Insert a rendered instance at a previously resolved anchor.
    fn attach(&mut self, anchor: Self::Anchor, instance: RenderedInstance);
}
