// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The bootstrap mounter.
//!
//! Runs a fixed list of [`MountBinding`]s against a [`HostDocument`] exactly
//! once. Each binding is resolved, instantiated and attached in declaration
//! order. Failures are isolated per binding: a missing anchor or a target
//! that an earlier binding already filled is recorded and the pass moves on.
//! All failures are logged after the pass and returned in the [`MountReport`].
//!
//! # Duplicate targets
//!
//! The first binding to fill a target keeps it. Every later binding naming
//! the same target gets [`MountError::TargetConflict`] and attaches nothing.
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use mountwood::backends::components::{App, AppNavbar};
//! use mountwood::backends::memory::InMemoryDocument;
//! use mountwood::engine::{BootstrapMounter, MountBinding};
//!
//! let mut document = InMemoryDocument::new("demo", ["app", "app-navbar"]);
//! let bindings = vec![
//!     MountBinding::new(Arc::new(App), "#app"),
//!     MountBinding::new(Arc::new(AppNavbar), "#app-navbar"),
//! ];
//!
//! let report = BootstrapMounter::new().mount(&mut document, &bindings);
//! assert!(report.is_success());
//! assert_eq!(document.mounted_count(), 2);
//! ```

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::engine::{MountBinding, MountTarget, MountedBinding};
use crate::errors::{MountError, MountFailures};
use crate::observability::messages::mount::{
    BindingMounted, MountCompleted, MountRejected, MountStarted, MountTargetConflicted,
    MountTargetMissing,
};
use crate::observability::messages::StructuredLog;
use crate::traits::HostDocument;

/// Lifecycle of a [`BootstrapMounter`]. There is no way back from `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountState {
    NotStarted,
    Mounting,
    Completed,
}

/// Outcome of one mount pass.
#[derive(Debug, Clone)]
pub struct MountReport {
    attempted: usize,
    mounted: Vec<MountedBinding>,
    errors: Vec<MountError>,
    duration: Duration,
}

impl MountReport {
    /// True only when every binding mounted.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.attempted
    }

    pub fn mounted(&self) -> &[MountedBinding] {
        &self.mounted
    }

    pub fn errors(&self) -> &[MountError] {
        &self.errors
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn into_result(self) -> Result<Vec<MountedBinding>, MountFailures> {
        if self.errors.is_empty() {
            Ok(self.mounted)
        } else {
            Err(MountFailures {
                attempted: self.attempted,
                errors: self.errors,
            })
        }
    }
}

/// Executes mount bindings once, at process start.
#[derive(Debug)]
pub struct BootstrapMounter {
    state: MountState,
}

impl Default for BootstrapMounter {
    fn default() -> Self {
        Self::new()
    }
}

impl BootstrapMounter {
    pub fn new() -> Self {
        Self {
            state: MountState::NotStarted,
        }
    }

    pub fn state(&self) -> MountState {
        self.state
    }

    /// Mount every binding into `document`, best-effort.
    ///
    /// A mounter runs once. Calling this again after it completed leaves the
    /// document untouched and reports [`MountError::AlreadyCompleted`].
    pub fn mount<D: HostDocument>(
        &mut self,
        document: &mut D,
        bindings: &[MountBinding],
    ) -> MountReport {
        if self.state == MountState::Completed {
            MountRejected {
                binding_count: bindings.len(),
            }
            .log();
            return MountReport {
                attempted: 0,
                mounted: Vec::new(),
                errors: vec![MountError::AlreadyCompleted],
                duration: Duration::ZERO,
            };
        }

        let started = MountStarted {
            binding_count: bindings.len(),
        };
        let span = started.span("bootstrap");
        let _entered = span.enter();
        started.log();

        self.state = MountState::Mounting;
        let start = Instant::now();

        // target -> component that filled it
        let mut claimed: HashMap<&MountTarget, &str> = HashMap::new();
        let mut mounted = Vec::with_capacity(bindings.len());
        let mut errors = Vec::new();

        for (index, binding) in bindings.iter().enumerate() {
            let component = binding.component.name();

            if let Some(occupant) = claimed.get(&binding.target) {
                errors.push(MountError::TargetConflict {
                    index,
                    component: component.to_string(),
                    target: binding.target.clone(),
                    occupied_by: occupant.to_string(),
                });
                continue;
            }

            let Some(anchor) = document.resolve(&binding.target) else {
                errors.push(MountError::TargetNotFound {
                    index,
                    component: component.to_string(),
                    target: binding.target.clone(),
                });
                continue;
            };

            document.attach(anchor, binding.component.instantiate());
            claimed.insert(&binding.target, component);

            BindingMounted {
                index,
                component,
                target: &binding.target,
            }
            .log();

            mounted.push(MountedBinding {
                index,
                component: component.to_string(),
                target: binding.target.clone(),
            });
        }

        self.state = MountState::Completed;
        let duration = start.elapsed();

        for error in &errors {
            log_failure(error);
        }

        MountCompleted {
            mounted: mounted.len(),
            failed: errors.len(),
            duration,
        }
        .log();

        MountReport {
            attempted: bindings.len(),
            mounted,
            errors,
            duration,
        }
    }
}

/// Run `bindings` against `document` with a fresh mounter.
pub fn mount<D: HostDocument>(document: &mut D, bindings: &[MountBinding]) -> MountReport {
    BootstrapMounter::new().mount(document, bindings)
}

fn log_failure(error: &MountError) {
    match error {
        MountError::TargetNotFound {
            index,
            component,
            target,
        } => MountTargetMissing {
            index: *index,
            component,
            target,
        }
        .log(),
        MountError::TargetConflict {
            index,
            component,
            target,
            occupied_by,
        } => MountTargetConflicted {
            index: *index,
            component,
            target,
            occupied_by,
        }
        .log(),
        MountError::AlreadyCompleted => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Component, RenderedInstance};
    use std::sync::Arc;

    struct Named(&'static str);

    impl Component for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn instantiate(&self) -> RenderedInstance {
            RenderedInstance::new(self.0, format!("<p>{}</p>", self.0))
        }
    }

    /// Records every resolve and attach so tests can check the exact calls made.
    #[derive(Default)]
    struct RecordingDocument {
        anchors: Vec<&'static str>,
        attached: Vec<(String, String)>,
    }

    impl RecordingDocument {
        fn with_anchors(anchors: &[&'static str]) -> Self {
            Self {
                anchors: anchors.to_vec(),
                ..Default::default()
            }
        }
    }

    impl HostDocument for RecordingDocument {
        type Anchor = &'static str;

        fn resolve(&self, target: &MountTarget) -> Option<Self::Anchor> {
            self.anchors.iter().copied().find(|a| *a == target.id())
        }

        fn attach(&mut self, anchor: Self::Anchor, instance: RenderedInstance) {
            self.attached.push((anchor.to_string(), instance.component));
        }
    }

    // resolve takes &self, so count resolutions through a wrapper
    struct CountingDocument {
        inner: RecordingDocument,
        resolves: std::cell::RefCell<Vec<String>>,
    }

    impl HostDocument for CountingDocument {
        type Anchor = &'static str;

        fn resolve(&self, target: &MountTarget) -> Option<Self::Anchor> {
            self.resolves.borrow_mut().push(target.id().to_string());
            self.inner.resolve(target)
        }

        fn attach(&mut self, anchor: Self::Anchor, instance: RenderedInstance) {
            self.inner.attach(anchor, instance);
        }
    }

    fn binding(name: &'static str, target: &str) -> MountBinding {
        MountBinding::new(Arc::new(Named(name)), target)
    }

    #[test]
    fn test_state_transitions() {
        let mut mounter = BootstrapMounter::new();
        assert_eq!(mounter.state(), MountState::NotStarted);

        let mut document = RecordingDocument::with_anchors(&["app"]);
        mounter.mount(&mut document, &[binding("App", "#app")]);
        assert_eq!(mounter.state(), MountState::Completed);
    }

    #[test]
    fn test_all_targets_resolve() {
        let mut document = RecordingDocument::with_anchors(&["app", "app-navbar"]);
        let report = mount(
            &mut document,
            &[binding("App", "#app"), binding("AppNavbar", "#app-navbar")],
        );

        assert!(report.is_success());
        assert_eq!(report.attempted(), 2);
        assert_eq!(
            document.attached,
            vec![
                ("app".to_string(), "App".to_string()),
                ("app-navbar".to_string(), "AppNavbar".to_string()),
            ]
        );
        let mounted = report.into_result().unwrap();
        assert_eq!(mounted[0].index, 0);
        assert_eq!(mounted[1].target, MountTarget::parse("app-navbar"));
    }

    #[test]
    fn test_missing_target_does_not_stop_later_bindings() {
        let mut document = RecordingDocument::with_anchors(&["app", "footer"]);
        let report = mount(
            &mut document,
            &[
                binding("App", "#app"),
                binding("AppNavbar", "#missing"),
                binding("Footer", "#footer"),
            ],
        );

        assert!(!report.is_success());
        assert_eq!(report.mounted().len(), 2);
        assert_eq!(
            report.errors(),
            &[MountError::TargetNotFound {
                index: 1,
                component: "AppNavbar".to_string(),
                target: MountTarget::parse("missing"),
            }]
        );
        assert_eq!(document.attached.len(), 2);
        assert!(document.attached.iter().all(|(a, _)| a != "missing"));
    }

    #[test]
    fn test_duplicate_target_first_writer_wins() {
        let mut document = RecordingDocument::with_anchors(&["x"]);
        let report = mount(
            &mut document,
            &[binding("A", "#x"), binding("B", "x"), binding("C", "#x")],
        );

        assert_eq!(document.attached, vec![("x".to_string(), "A".to_string())]);
        assert_eq!(report.mounted().len(), 1);
        assert_eq!(report.errors().len(), 2);
        for (error, (index, component)) in report.errors().iter().zip([(1, "B"), (2, "C")]) {
            assert_eq!(
                error,
                &MountError::TargetConflict {
                    index,
                    component: component.to_string(),
                    target: MountTarget::parse("x"),
                    occupied_by: "A".to_string(),
                }
            );
        }
    }

    #[test]
    fn test_duplicate_of_missing_target_reports_not_found_twice() {
        let mut document = RecordingDocument::with_anchors(&[]);
        let report = mount(&mut document, &[binding("A", "#x"), binding("B", "#x")]);

        assert!(report
            .errors()
            .iter()
            .all(|e| matches!(e, MountError::TargetNotFound { .. })));
        assert_eq!(report.errors().len(), 2);
    }

    #[test]
    fn test_conflicting_binding_is_not_resolved() {
        let mut document = CountingDocument {
            inner: RecordingDocument::with_anchors(&["x"]),
            resolves: Default::default(),
        };
        mount(&mut document, &[binding("A", "#x"), binding("B", "#x")]);

        assert_eq!(document.resolves.borrow().as_slice(), ["x".to_string()]);
        assert_eq!(document.inner.attached.len(), 1);
    }

    #[test]
    fn test_second_mount_is_rejected() {
        let mut mounter = BootstrapMounter::new();
        let mut document = RecordingDocument::with_anchors(&["app"]);
        let bindings = [binding("App", "#app")];

        assert!(mounter.mount(&mut document, &bindings).is_success());
        let again = mounter.mount(&mut document, &bindings);

        assert_eq!(again.errors(), &[MountError::AlreadyCompleted]);
        assert_eq!(again.attempted(), 0);
        assert_eq!(document.attached.len(), 1);
        assert_eq!(mounter.state(), MountState::Completed);
    }

    #[test]
    fn test_empty_bindings_succeed() {
        let mut document = RecordingDocument::default();
        let report = mount(&mut document, &[]);

        assert!(report.is_success());
        assert!(report.into_result().unwrap().is_empty());
    }

    #[test]
    fn test_into_result_carries_every_failure() {
        let mut document = RecordingDocument::with_anchors(&["app"]);
        let failures = mount(
            &mut document,
            &[
                binding("App", "#app"),
                binding("B", "#gone"),
                binding("C", "#also-gone"),
            ],
        )
        .into_result()
        .unwrap_err();

        assert_eq!(failures.attempted, 3);
        let indices: Vec<_> = failures
            .errors
            .iter()
            .filter_map(MountError::binding_index)
            .collect();
        assert_eq!(indices, vec![1, 2]);
    }
}
