// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use crate::backends::components::{App, AppNavbar, TemplateComponent};
use crate::config::consts::{APP_COMPONENT, APP_NAVBAR_COMPONENT};
use crate::config::Manifest;
use crate::traits::Component;

/// Newtype wrapper mapping manifest component names to definitions
#[derive(Clone, Default)]
pub struct ComponentRegistry(pub HashMap<String, Arc<dyn Component>>);

impl ComponentRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Registry holding the built-in `app` and `app_navbar` components
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.insert(APP_COMPONENT, Arc::new(App));
        registry.insert(APP_NAVBAR_COMPONENT, Arc::new(AppNavbar));
        registry
    }

    /// Built-ins plus the manifest's inline template components.
    ///
    /// A template named like a built-in replaces it.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut registry = Self::with_builtins();
        for template in &manifest.components {
            registry.insert(
                template.name.clone(),
                Arc::new(TemplateComponent::new(
                    template.name.clone(),
                    template.template.clone(),
                )),
            );
        }
        registry
    }

    /// Register a component, replacing any previous one with the same name
    pub fn insert(&mut self, name: impl Into<String>, component: Arc<dyn Component>) {
        self.0.insert(name.into(), component);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Component>> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("component_count", &self.0.len())
            .field("component_names", &self.names())
            .finish()
    }
}
