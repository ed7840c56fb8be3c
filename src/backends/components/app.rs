// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::{Component, RenderedInstance};

const MARKUP: &str = concat!(
    "<main class=\"app\">",
    "<h1>Website thumbnail generator</h1>",
    "<form class=\"thumbnail-form\">",
    "<label for=\"website-url\">Website URL</label>",
    "<input id=\"website-url\" name=\"url\" type=\"url\" placeholder=\"https://example.com\">",
    "<button type=\"submit\">Generate!</button>",
    "</form>",
    "<section class=\"thumbnail-preview\"></section>",
    "</main>"
);

/// Main application view: URL form and thumbnail preview area.
#[derive(Debug, Clone, Copy, Default)]
pub struct App;

impl Component for App {
    fn name(&self) -> &str {
        "App"
    }

    fn instantiate(&self) -> RenderedInstance {
        RenderedInstance::new(self.name(), MARKUP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instances_are_independent_and_identical() {
        let first = App.instantiate();
        let second = App.instantiate();

        assert_eq!(first, second);
        assert_eq!(first.component, "App");
        assert!(first.markup.starts_with("<main"));
        assert!(first.markup.contains("type=\"url\""));
    }
}
