/// Manifest the binary loads when no path is given
pub const DEFAULT_MANIFEST_PATH: &str = "configs/index.yaml";
/// Page title used when the manifest's document section omits one
pub const DEFAULT_DOCUMENT_TITLE: &str = "mountwood";
/// Registry name of the main application component
pub const APP_COMPONENT: &str = "app";
/// Registry name of the navigation bar component
pub const APP_NAVBAR_COMPONENT: &str = "app_navbar";
