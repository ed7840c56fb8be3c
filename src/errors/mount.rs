// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors produced while mounting bindings into a host document.
//!
//! Every variant except `AlreadyCompleted` belongs to exactly one binding and
//! carries the binding's position so reports stay in declaration order.

use crate::engine::MountTarget;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// The target's anchor identifier did not resolve in the host document.
    #[error("binding #{index}: mount target '{target}' not found for component '{component}'")]
    TargetNotFound {
        index: usize,
        component: String,
        target: MountTarget,
    },

    /// An earlier binding in the same pass already filled this target.
    #[error(
        "binding #{index}: mount target '{target}' already holds '{occupied_by}', refusing to mount '{component}'"
    )]
    TargetConflict {
        index: usize,
        component: String,
        target: MountTarget,
        occupied_by: String,
    },

    /// The mounter already ran; re-mounting is not supported.
    #[error("mounter has already completed; re-mounting is not supported")]
    AlreadyCompleted,
}

impl MountError {
    /// Position of the failing binding, if the error belongs to one.
    pub fn binding_index(&self) -> Option<usize> {
        match self {
            MountError::TargetNotFound { index, .. } | MountError::TargetConflict { index, .. } => {
                Some(*index)
            }
            MountError::AlreadyCompleted => None,
        }
    }

    pub fn target(&self) -> Option<&MountTarget> {
        match self {
            MountError::TargetNotFound { target, .. } | MountError::TargetConflict { target, .. } => {
                Some(target)
            }
            MountError::AlreadyCompleted => None,
        }
    }
}

/// The full set of failures from a mount pass that did not fully succeed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} of {attempted} bindings failed to mount", .errors.len())]
pub struct MountFailures {
    pub attempted: usize,
    pub errors: Vec<MountError>,
}
