use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub submit: SubmitConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where and how to reach the Shortening Service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// API endpoint receiving shorten requests.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Prefix used to build short links from a returned code.
    #[serde(default = "default_link_base")]
    pub link_base: String,
    /// Preferred custom code, forwarded as-is.
    #[serde(default)]
    pub custom: Option<String>,
    /// Let the service pick a generated code when `custom` is taken.
    #[serde(default = "default_use_fallback")]
    pub use_fallback: bool,
    /// Whole-request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// What happens on submit while a request is still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SubmitPolicy {
    /// Issue a new request; only the newest one may update the state.
    #[default]
    LastWriteWins,
    /// Reject the submit until the current request settles.
    IgnoreWhileRequesting,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubmitConfig {
    #[serde(default)]
    pub policy: SubmitPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw and spinner period in milliseconds (default: 80).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// How many ticks a toast stays on screen (default: 40).
    #[serde(default = "default_toast_ticks")]
    pub toast_ticks: u16,
}

fn default_endpoint() -> String {
    "https://gotiny.cc/api".to_string()
}

fn default_link_base() -> String {
    "https://gotiny.cc".to_string()
}

fn default_use_fallback() -> bool {
    true
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_ms() -> u64 {
    80
}

fn default_toast_ticks() -> u16 {
    40
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            link_base: default_link_base(),
            custom: None,
            use_fallback: default_use_fallback(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            toast_ticks: default_toast_ticks(),
        }
    }
}
