// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::{Component, RenderedInstance};

/// Component whose markup is a literal declared in the manifest.
#[derive(Debug, Clone)]
pub struct TemplateComponent {
    name: String,
    template: String,
}

impl TemplateComponent {
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
        }
    }
}

impl Component for TemplateComponent {
    fn name(&self) -> &str {
        &self.name
    }

    fn instantiate(&self) -> RenderedInstance {
        RenderedInstance::new(self.name.clone(), self.template.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_template_verbatim() {
        let footer = TemplateComponent::new("footer", "<footer>&copy;</footer>");
        let instance = footer.instantiate();

        assert_eq!(footer.name(), "footer");
        assert_eq!(instance, RenderedInstance::new("footer", "<footer>&copy;</footer>"));
    }
}
