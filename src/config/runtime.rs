// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::memory::InMemoryDocument;
use crate::config::{ComponentRegistry, Manifest};
use crate::engine::MountBinding;
use crate::errors::RegistryError;

/// Bootstrap builder - turns a manifest into ready-to-mount bindings and the
/// host document they mount into.
///
/// # Examples
///
/// ```
/// use mountwood::config::{parse_manifest, BootstrapBuilder, ManifestFormat};
/// use mountwood::engine::BootstrapMounter;
///
/// let manifest = parse_manifest(r##"
/// document: { anchors: [app, app-navbar] }
/// mounts:
///   - { component: app, target: "#app" }
///   - { component: app_navbar, target: "#app-navbar" }
/// "##, ManifestFormat::Yaml).unwrap();
///
/// let (bindings, mut document) = BootstrapBuilder::from_manifest(&manifest).unwrap();
/// let report = BootstrapMounter::new().mount(&mut document, &bindings);
///
/// assert!(report.is_success());
/// ```
pub struct BootstrapBuilder;

impl BootstrapBuilder {
    /// Build bindings and document using the built-ins plus the manifest's templates.
    pub fn from_manifest(
        manifest: &Manifest,
    ) -> Result<(Vec<MountBinding>, InMemoryDocument), RegistryError> {
        let registry = ComponentRegistry::from_manifest(manifest);
        let bindings = BindingsBuilder::from_manifest(manifest, &registry)?;
        let document = InMemoryDocument::from_config(&manifest.document);
        Ok((bindings, document))
    }
}

/// Turns a manifest's mounts into [`MountBinding`]s against a registry.
pub struct BindingsBuilder;

impl BindingsBuilder {
    /// Resolve every mount's component against `registry`, keeping manifest order.
    ///
    /// Reports all unknown component names at once.
    pub fn from_manifest(
        manifest: &Manifest,
        registry: &ComponentRegistry,
    ) -> Result<Vec<MountBinding>, RegistryError> {
        let mut bindings = Vec::with_capacity(manifest.mounts.len());
        let mut unknown: Vec<String> = Vec::new();

        for mount in &manifest.mounts {
            match registry.get(&mount.component) {
                Some(component) => {
                    bindings.push(MountBinding::new(component.clone(), mount.target.clone()))
                }
                None => {
                    if !unknown.contains(&mount.component) {
                        unknown.push(mount.component.clone());
                    }
                }
            }
        }

        if unknown.is_empty() {
            Ok(bindings)
        } else {
            Err(RegistryError::UnknownComponent {
                unknown,
                available: registry.names(),
            })
        }
    }
}
