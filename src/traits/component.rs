// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// A component definition: an opaque description of a UI tree that the
/// mounter can turn into a rendered instance.
///
/// Implementations own no mutable state on behalf of the mounter. The same
/// definition may be instantiated any number of times.
pub trait Component: Send + Sync {
    /// Stable identity used in diagnostics and mount receipts.
    fn name(&self) -> &str;

    /// Build a fresh rendered instance of this component tree.
    fn instantiate(&self) -> RenderedInstance;
}

/// The rendered output of a single component instantiation.
///
/// Once attached to a host document the instance belongs to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedInstance {
    pub component: String,
    pub markup: String,
}

impl RenderedInstance {
    pub fn new(component: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            markup: markup.into(),
        }
    }
}
