// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in component definitions.

mod app;
mod navbar;
mod template;

pub use app::App;
pub use navbar::AppNavbar;
pub use template::TemplateComponent;
