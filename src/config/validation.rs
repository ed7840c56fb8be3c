//! Mount manifest validation.
//!
//! Checks that a manifest can be turned into a well-formed bootstrap before
//! anything touches the host document:
//!
//! 1. **Non-empty fields**: every mount names a component and a target
//! 2. **Unique targets**: no two mounts name the same anchor
//! 3. **Anchors**: the document declares no empty anchor and no anchor twice
//! 4. **Unique template names**: inline components do not shadow each other
//!
//! All checks run and their errors are accumulated, so a manifest author sees
//! every problem at once.
//!
//! Targets and anchors are compared by anchor id, so `"#app"` and `"app"`
//! collide. A mount whose target is missing from the document is *not* a
//! validation error; the mounter reports it as `TargetNotFound`.
//!
//! # Example
//! ```rust
//! use mountwood::config::{parse_manifest, validate_manifest, ManifestFormat};
//! use mountwood::errors::ValidationError;
//!
//! let manifest = parse_manifest(
//!     "mounts: [{component: a, target: x}, {component: b, target: x}]",
//!     ManifestFormat::Yaml,
//! ).unwrap();
//!
//! let errors = validate_manifest(&manifest).unwrap_err();
//! assert_eq!(
//!     errors,
//!     vec![ValidationError::DuplicateMountTarget {
//!         target: "#x".to_string(),
//!         positions: vec![0, 1],
//!     }]
//! );
//! ```

use std::collections::{HashMap, HashSet};

use crate::config::Manifest;
use crate::engine::MountTarget;
use crate::errors::ValidationError;

/// Validate a manifest, returning every problem found.
pub fn validate_manifest(manifest: &Manifest) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    errors.extend(validate_non_empty_mounts(manifest));
    errors.extend(validate_unique_targets(manifest));
    errors.extend(validate_anchors(manifest));
    errors.extend(validate_unique_template_names(manifest));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_non_empty_mounts(manifest: &Manifest) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (position, mount) in manifest.mounts.iter().enumerate() {
        if mount.component.trim().is_empty() {
            errors.push(ValidationError::EmptyComponentName { position });
        }
        if mount.target.is_empty() {
            errors.push(ValidationError::EmptyMountTarget { position });
        }
    }

    errors
}

/// Groups mount positions by target and reports every target used more than
/// once, in order of first appearance.
fn validate_unique_targets(manifest: &Manifest) -> Vec<ValidationError> {
    let mut order: Vec<&MountTarget> = Vec::new();
    let mut positions: HashMap<&MountTarget, Vec<usize>> = HashMap::new();

    for (position, mount) in manifest.mounts.iter().enumerate() {
        if mount.target.is_empty() {
            continue;
        }
        let entry = positions.entry(&mount.target).or_default();
        if entry.is_empty() {
            order.push(&mount.target);
        }
        entry.push(position);
    }

    order
        .into_iter()
        .filter_map(|target| {
            let seen = &positions[target];
            (seen.len() > 1).then(|| ValidationError::DuplicateMountTarget {
                target: target.to_string(),
                positions: seen.clone(),
            })
        })
        .collect()
}

fn validate_anchors(manifest: &Manifest) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut errors = Vec::new();

    for (position, raw) in manifest.document.anchors.iter().enumerate() {
        let anchor = MountTarget::parse(raw);
        if anchor.is_empty() {
            errors.push(ValidationError::EmptyAnchor { position });
            continue;
        }
        if !seen.insert(anchor.clone()) && reported.insert(anchor.clone()) {
            errors.push(ValidationError::DuplicateAnchor {
                anchor: anchor.id().to_string(),
            });
        }
    }

    errors
}

fn validate_unique_template_names(manifest: &Manifest) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut errors = Vec::new();

    for component in &manifest.components {
        let name = component.name.as_str();
        if !seen.insert(name) && reported.insert(name) {
            errors.push(ValidationError::DuplicateComponentName {
                name: component.name.clone(),
            });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_manifest, ManifestFormat};

    fn manifest(yaml: &str) -> Manifest {
        parse_manifest(yaml, ManifestFormat::Yaml).unwrap()
    }

    #[test]
    fn test_validate_manifest_table_driven() {
        struct TestCase {
            name: &'static str,
            yaml: &'static str,
            expected: Vec<ValidationError>,
        }

        let test_cases = vec![
            TestCase {
                name: "two disjoint targets",
                yaml: r##"
document: { anchors: [app, app-navbar] }
mounts:
  - { component: app, target: "#app" }
  - { component: app_navbar, target: "#app-navbar" }
"##,
                expected: vec![],
            },
            TestCase {
                name: "no mounts",
                yaml: "mounts: []",
                expected: vec![],
            },
            TestCase {
                name: "selector and bare form collide",
                yaml: r##"
mounts:
  - { component: a, target: "#x" }
  - { component: b, target: x }
  - { component: c, target: "#y" }
  - { component: d, target: "#x" }
"##,
                expected: vec![ValidationError::DuplicateMountTarget {
                    target: "#x".to_string(),
                    positions: vec![0, 1, 3],
                }],
            },
            TestCase {
                name: "empty fields",
                yaml: r##"
mounts:
  - { component: "", target: "#a" }
  - { component: b, target: "#" }
"##,
                expected: vec![
                    ValidationError::EmptyComponentName { position: 0 },
                    ValidationError::EmptyMountTarget { position: 1 },
                ],
            },
            TestCase {
                name: "duplicate anchor reported once",
                yaml: r##"
document: { anchors: [app, "#app", app] }
mounts: []
"##,
                expected: vec![ValidationError::DuplicateAnchor {
                    anchor: "app".to_string(),
                }],
            },
            TestCase {
                name: "empty anchors",
                yaml: r##"
document: { anchors: [app, "", "#"] }
mounts: []
"##,
                expected: vec![
                    ValidationError::EmptyAnchor { position: 1 },
                    ValidationError::EmptyAnchor { position: 2 },
                ],
            },
            TestCase {
                name: "template name repeated three times reported once",
                yaml: r##"
mounts: []
components:
  - { name: footer, template: "<footer></footer>" }
  - { name: footer, template: "<footer>2</footer>" }
  - { name: footer, template: "<footer>3</footer>" }
"##,
                expected: vec![ValidationError::DuplicateComponentName {
                    name: "footer".to_string(),
                }],
            },
        ];

        for case in test_cases {
            let result = validate_manifest(&manifest(case.yaml));
            let actual = result.err().unwrap_or_default();
            assert_eq!(actual, case.expected, "case: {}", case.name);
        }
    }

    #[test]
    fn test_missing_anchor_is_not_a_validation_error() {
        let m = manifest(
            r##"
document: { anchors: [app] }
mounts:
  - { component: app, target: "#app" }
  - { component: app_navbar, target: "#missing" }
"##,
        );

        assert!(validate_manifest(&m).is_ok());
    }

    #[test]
    fn test_errors_accumulate_across_checks() {
        let m = manifest(
            r##"
document: { anchors: [x, x] }
mounts:
  - { component: "", target: "#x" }
  - { component: b, target: "#x" }
"##,
        );

        let errors = validate_manifest(&m).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::EmptyComponentName { position: 0 }));
        assert!(errors.contains(&ValidationError::DuplicateAnchor {
            anchor: "x".to_string()
        }));
    }
}
