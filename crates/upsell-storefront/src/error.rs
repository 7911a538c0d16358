use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The GraphQL envelope carried top-level `errors`.
    #[error("GraphQL errors for {context}: {}", .messages.join("; "))]
    GraphQl {
        context: String,
        messages: Vec<String>,
    },

    #[error("response for {context} has no data")]
    MissingData { context: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("normalization error for variant {variant_id}: {reason}")]
    Normalization { variant_id: String, reason: String },

    #[error("invalid shop domain \"{domain}\": {reason}")]
    InvalidShopDomain { domain: String, reason: String },
}
