//! Read-only view of the live cart plus the single change kind this crate
//! ever requests.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One line of the live order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    /// Variant identifier of the merchandise on this line.
    pub merchandise_id: String,
    pub quantity: u32,
}

/// The set of variant ids currently in the cart.
///
/// Built fresh from the host's lines on every evaluation and never cached
/// past it: the cart can change between any two reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartSnapshot {
    merchandise_ids: HashSet<String>,
}

impl CartSnapshot {
    #[must_use]
    pub fn from_lines(lines: &[CartLine]) -> Self {
        Self {
            merchandise_ids: lines.iter().map(|l| l.merchandise_id.clone()).collect(),
        }
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            merchandise_ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, merchandise_id: &str) -> bool {
        self.merchandise_ids.contains(merchandise_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.merchandise_ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.merchandise_ids.is_empty()
    }
}

/// A change request sent to the live cart feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CartLineChange {
    #[serde(rename_all = "camelCase")]
    AddCartLine {
        merchandise_id: String,
        quantity: u32,
    },
}

impl CartLineChange {
    /// A single-unit add of `merchandise_id`.
    #[must_use]
    pub fn add_one(merchandise_id: impl Into<String>) -> Self {
        Self::AddCartLine {
            merchandise_id: merchandise_id.into(),
            quantity: 1,
        }
    }
}

/// Result of a change the cart feed accepted for processing.
///
/// `Error` is a business-level rejection (inventory, policy, ...) carrying a
/// merchant-facing reason. Transport failures are reported separately as the
/// feed's `Err` type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChangeOutcome {
    Success,
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, merchandise_id: &str) -> CartLine {
        CartLine {
            id: id.to_owned(),
            merchandise_id: merchandise_id.to_owned(),
            quantity: 1,
        }
    }

    #[test]
    fn snapshot_projects_merchandise_ids() {
        let snapshot = CartSnapshot::from_lines(&[line("l1", "v1"), line("l2", "v2")]);
        assert!(snapshot.contains("v1"));
        assert!(snapshot.contains("v2"));
        assert!(!snapshot.contains("l1"));
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn snapshot_collapses_duplicate_lines() {
        let snapshot = CartSnapshot::from_lines(&[line("l1", "v1"), line("l2", "v1")]);
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn empty_snapshot_contains_nothing() {
        let snapshot = CartSnapshot::default();
        assert!(snapshot.is_empty());
        assert!(!snapshot.contains("v1"));
    }

    #[test]
    fn add_change_serializes_like_the_checkout_api() {
        let json = serde_json::to_value(CartLineChange::add_one("v1")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "addCartLine", "merchandiseId": "v1", "quantity": 1})
        );
    }
}
