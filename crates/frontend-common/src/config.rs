//! Frontend configuration

use tracing::Level;

/// Panel configuration
pub struct PanelConfig;

impl PanelConfig {
    /// Backend origin for every API call
    pub const API_BASE_URL: &'static str = panel_http::DEFAULT_BASE_URL;

    /// How long error toasts stay visible, in milliseconds
    pub const NOTIFICATION_TIMEOUT_MS: u32 = 5_000;

    /// Store keys, used as the `store` field of log events
    pub const AUTH_STORE_KEY: &'static str = "auth";
    pub const NOTIFICATIONS_STORE_KEY: &'static str = "notifications";

    /// Placeholder credentials the login form starts with
    pub const DEFAULT_EMAIL: &'static str = "admin@zendev.cl";
    pub const DEFAULT_PASSWORD: &'static str = "password";

    /// Most verbose level written to the browser console
    pub const LOG_LEVEL: Level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
}
