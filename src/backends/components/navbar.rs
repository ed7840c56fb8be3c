// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::{Component, RenderedInstance};

const MARKUP: &str = concat!(
    "<nav class=\"navbar\">",
    "<a class=\"navbar-brand\" href=\"/\">Thumbnails</a>",
    "<ul class=\"navbar-links\">",
    "<li><a href=\"/\">Home</a></li>",
    "<li><a href=\"/about\">About</a></li>",
    "</ul>",
    "</nav>"
);

/// Navigation bar, mounted independently of [`super::App`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AppNavbar;

impl Component for AppNavbar {
    fn name(&self) -> &str {
        "AppNavbar"
    }

    fn instantiate(&self) -> RenderedInstance {
        RenderedInstance::new(self.name(), MARKUP)
    }
}
