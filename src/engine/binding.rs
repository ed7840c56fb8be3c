// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::Arc;

use crate::engine::MountTarget;
use crate::traits::Component;

/// A (component, target) pair declared once at start-up.
#[derive(Clone)]
pub struct MountBinding {
    pub component: Arc<dyn Component>,
    pub target: MountTarget,
}

impl MountBinding {
    pub fn new(component: Arc<dyn Component>, target: impl Into<MountTarget>) -> Self {
        Self {
            component,
            target: target.into(),
        }
    }
}

impl fmt::Debug for MountBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountBinding")
            .field("component", &self.component.name())
            .field("target", &self.target)
            .finish()
    }
}

/// Receipt for a binding that mounted. The instance itself lives in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedBinding {
    pub index: usize,
    pub component: String,
    pub target: MountTarget,
}
