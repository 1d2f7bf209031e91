//! Catalog of known providers.
//!
//! Static display metadata (official status page, icon, display order) for
//! the providers the collector knows about. Providers not listed here still
//! render, with fallback metadata.

/// Static metadata for a known provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderInfo {
    pub name: &'static str,
    /// Official human-facing status page.
    pub status_url: &'static str,
    pub icon: &'static str,
    /// Status is scraped from a web page rather than read from an API.
    pub scraped: bool,
}

/// Status page link used for providers outside the catalog.
pub const FALLBACK_URL: &str = "#";
/// Icon used for providers outside the catalog.
pub const FALLBACK_ICON: &str = "📊";

/// Known providers, in preferred display order.
pub const PROVIDERS: &[ProviderInfo] = &[
    ProviderInfo {
        name: "OpenAI",
        status_url: "https://status.openai.com",
        icon: "◎",
        scraped: false,
    },
    ProviderInfo {
        name: "Anthropic",
        status_url: "https://status.anthropic.com",
        icon: "✳",
        scraped: false,
    },
    ProviderInfo {
        name: "DeepSeek",
        status_url: "https://status.deepseek.com",
        icon: "◈",
        scraped: false,
    },
    ProviderInfo {
        name: "Google",
        status_url: "https://aistudio.google.com/status",
        icon: "✦",
        scraped: true,
    },
];

/// Look up a provider by exact display name.
pub fn lookup(name: &str) -> Option<&'static ProviderInfo> {
    PROVIDERS.iter().find(|p| p.name == name)
}

/// Position in the preferred order, if the provider is known.
pub fn preferred_rank(name: &str) -> Option<usize> {
    PROVIDERS.iter().position(|p| p.name == name)
}
