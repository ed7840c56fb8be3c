// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-memory host document.
//!
//! Holds an ordered set of anchors, each of which can receive one rendered
//! instance, and renders the whole page as HTML once mounting is done.

use std::fmt::Write;

use crate::config::DocumentConfig;
use crate::engine::MountTarget;
use crate::traits::{HostDocument, RenderedInstance};

/// Handle to an anchor of an [`InMemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorHandle(usize);

#[derive(Debug, Clone)]
struct AnchorSlot {
    id: String,
    mounted: Option<RenderedInstance>,
}

#[derive(Debug, Clone)]
pub struct InMemoryDocument {
    title: String,
    anchors: Vec<AnchorSlot>,
}

impl InMemoryDocument {
    /// Anchors may be given as `"app"` or `"#app"`. Repeats and empty ids are dropped;
    /// manifest validation rejects both before a document is built.
    pub fn new<I, S>(title: impl Into<String>, anchors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut slots: Vec<AnchorSlot> = Vec::new();
        for raw in anchors {
            let target = MountTarget::parse(raw.as_ref());
            if target.is_empty() || slots.iter().any(|s| s.id == target.id()) {
                continue;
            }
            slots.push(AnchorSlot {
                id: target.id().to_string(),
                mounted: None,
            });
        }

        Self {
            title: title.into(),
            anchors: slots,
        }
    }

    pub fn from_config(config: &DocumentConfig) -> Self {
        Self::new(config.title.clone(), &config.anchors)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Anchor ids in declaration order.
    pub fn anchor_ids(&self) -> Vec<&str> {
        self.anchors.iter().map(|s| s.id.as_str()).collect()
    }

    /// The instance mounted at `anchor`, if any.
    pub fn mounted(&self, anchor: &str) -> Option<&RenderedInstance> {
        let target = MountTarget::parse(anchor);
        self.anchors
            .iter()
            .find(|s| s.id == target.id())
            .and_then(|s| s.mounted.as_ref())
    }

    pub fn mounted_count(&self) -> usize {
        self.anchors.iter().filter(|s| s.mounted.is_some()).count()
    }

    /// Render the page. Every anchor becomes a `<div>` with its id; unmounted
    /// anchors stay empty.
    pub fn render_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "  <title>{}</title>", escape(&self.title));
        html.push_str("</head>\n<body>\n");

        for slot in &self.anchors {
            match &slot.mounted {
                Some(instance) => {
                    let _ = writeln!(
                        html,
                        "  <div id=\"{}\">{}</div>",
                        escape(&slot.id),
                        instance.markup
                    );
                }
                None => {
                    let _ = writeln!(html, "  <div id=\"{}\"></div>", escape(&slot.id));
                }
            }
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}

impl HostDocument for InMemoryDocument {
    type Anchor = AnchorHandle;

    fn resolve(&self, target: &MountTarget) -> Option<Self::Anchor> {
        self.anchors
            .iter()
            .position(|s| s.id == target.id())
            .map(AnchorHandle)
    }

    fn attach(&mut self, anchor: Self::Anchor, instance: RenderedInstance) {
        if let Some(slot) = self.anchors.get_mut(anchor.0) {
            slot.mounted = Some(instance);
        }
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
