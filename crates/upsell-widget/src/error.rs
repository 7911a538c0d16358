use thiserror::Error;
use upsell_core::Status;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The catalog could not be loaded. Never partially populated.
#[derive(Debug, Error)]
#[error("catalog fetch failed: {source}")]
pub struct FetchError {
    #[source]
    source: BoxError,
}

impl FetchError {
    pub(crate) fn new(source: impl Into<BoxError>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoaderConfigError {
    #[error("at least one variant id is required")]
    NoVariantIds,
}

/// Why an add-to-cart attempt produced no new cart line.
///
/// The `Display` text of each variant is the message shown to the shopper,
/// so it must never include transport detail.
#[derive(Debug, Error)]
pub enum AddToCartError {
    #[error("{heading} is already in the cart")]
    AlreadyInCart { heading: String },

    /// Another add of the same variant is still in flight.
    #[error("{heading} is already being added to the cart")]
    Pending { heading: String },

    #[error("Failed to add {heading}: {reason}")]
    Rejected { heading: String, reason: String },

    #[error("An unexpected error occurred while adding {heading}")]
    Transport {
        heading: String,
        #[source]
        source: BoxError,
    },

    #[error("Failed to add {heading}: product is not offered")]
    UnknownProduct { heading: String },
}

impl AddToCartError {
    /// Converts the error into the banner shown to the shopper.
    #[must_use]
    pub fn into_status(self) -> Status {
        match self {
            AddToCartError::AlreadyInCart { .. } | AddToCartError::Pending { .. } => {
                Status::info(self.to_string())
            }
            AddToCartError::Rejected { .. }
            | AddToCartError::Transport { .. }
            | AddToCartError::UnknownProduct { .. } => Status::critical(self.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use upsell_core::Severity;

    use super::*;

    #[test]
    fn duplicate_is_informational() {
        let status = AddToCartError::AlreadyInCart {
            heading: "Widget".to_owned(),
        }
        .into_status();
        assert_eq!(status, Status::info("Widget is already in the cart"));
    }

    #[test]
    fn rejection_carries_reason() {
        let status = AddToCartError::Rejected {
            heading: "Widget".to_owned(),
            reason: "Out of stock".to_owned(),
        }
        .into_status();
        assert_eq!(status, Status::critical("Failed to add Widget: Out of stock"));
    }

    #[test]
    fn transport_message_hides_source_detail() {
        let status = AddToCartError::Transport {
            heading: "Widget".to_owned(),
            source: "connection reset by peer at 10.0.0.3".into(),
        }
        .into_status();
        assert_eq!(status.severity, Severity::Critical);
        assert!(status.message.contains("Widget"));
        assert!(!status.message.contains("connection reset"));
    }
}
