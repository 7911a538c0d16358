#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Shop domain or origin, e.g. `"example.myshopify.com"`.
    pub storefront_domain: String,
    pub storefront_access_token: String,
    pub storefront_api_version: String,
    /// Variant ids offered by the widget, in request order. Never empty.
    pub variant_ids: Vec<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub cart_id: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("storefront_domain", &self.storefront_domain)
            .field("storefront_access_token", &"[redacted]")
            .field("storefront_api_version", &self.storefront_api_version)
            .field("variant_ids", &self.variant_ids)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("cart_id", &self.cart_id)
            .finish()
    }
}
