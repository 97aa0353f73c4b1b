use typed_builder::TypedBuilder;

/// Base of every short URL when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://sur.ly";

/// Configures a registry instance.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct RegistrySettings {
    /// Scheme and host that short codes are appended to.
    #[builder(default = DEFAULT_BASE_URL.to_string(), setter(into))]
    pub base_url: String,
}

impl RegistrySettings {
    /// The prefix every short URL starts with: the base URL with exactly one
    /// trailing slash. Callers use it to tell expand input from shorten input.
    pub fn short_url_prefix(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self::builder().build()
    }
}
