use std::collections::HashMap;

use upsell_core::{ProductGroup, VariantRef};

/// The chosen variant id for each product heading.
///
/// Holds exactly one entry per heading of the groups it was initialized
/// from. Only [`SelectionState::select`] changes an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    chosen: HashMap<String, String>,
}

impl SelectionState {
    /// Selects each group's first variant.
    #[must_use]
    pub fn initialize(groups: &[ProductGroup]) -> Self {
        let chosen = groups
            .iter()
            .map(|g| (g.heading().to_owned(), g.first_variant().id.clone()))
            .collect();
        Self { chosen }
    }

    /// Chooses `variant_id` for `heading`, leaving every other heading as is.
    ///
    /// Membership of `variant_id` in the heading's group is not checked;
    /// [`SelectionState::resolve`] falls back to the first variant for a
    /// foreign id. Returns `false` and changes nothing if `heading` has no
    /// entry.
    pub fn select(&mut self, heading: &str, variant_id: impl Into<String>) -> bool {
        match self.chosen.get_mut(heading) {
            Some(slot) => {
                *slot = variant_id.into();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn selected(&self, heading: &str) -> Option<&str> {
        self.chosen.get(heading).map(String::as_str)
    }

    /// The group's currently selected variant, or its first variant when
    /// the stored id does not belong to the group.
    #[must_use]
    pub fn resolve<'g>(&self, group: &'g ProductGroup) -> &'g VariantRef {
        group.resolve(self.selected(group.heading()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }
}
