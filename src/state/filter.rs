/// Tag filter for the project listing
///
/// The controller owns the active-tag state, the filter buttons and the
/// visibility flag of every rendered card. `select_tag` updates all of
/// them in one call so the UI never observes a half-applied filter.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Label of the button that clears the filter
pub const ALL_LABEL: &str = "All";

/// The tags a card belongs to, used for membership tests only
pub type TagMembership = BTreeSet<String>;

/// Which tag is selected; `None` shows everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub active_tag: Option<String>,
}

/// One button in the `tag-filters` mount point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    /// Text shown on the button
    pub label: String,
    /// Tag selected by this button (`None` for "All")
    pub tag: Option<String>,
    /// Whether this button is highlighted
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct FilterController {
    state: FilterState,
    buttons: Vec<FilterButton>,
    memberships: Vec<TagMembership>,
    visible: Vec<bool>,
}

impl FilterController {
    /// Build the "All" button plus one button per derived tag.
    ///
    /// `memberships` holds one entry per rendered card, in grid order.
    /// Starts with "All" active and every card visible.
    pub fn new(tags: &[String], memberships: Vec<TagMembership>) -> Self {
        let mut buttons = Vec::with_capacity(tags.len() + 1);
        buttons.push(FilterButton {
            label: ALL_LABEL.to_string(),
            tag: None,
            active: true,
        });
        buttons.extend(tags.iter().map(|tag| FilterButton {
            label: tag.clone(),
            tag: Some(tag.clone()),
            active: false,
        }));

        let visible = vec![true; memberships.len()];

        Self {
            state: FilterState::default(),
            buttons,
            memberships,
            visible,
        }
    }

    /// Apply a filter; `None` shows every card.
    ///
    /// A tag with no matching button is rejected and leaves the state
    /// untouched: tags offered to the user always come from the derived set.
    pub fn select_tag(&mut self, tag: Option<&str>) -> Result<()> {
        let target = match tag {
            None => self.buttons.iter().position(|b| b.tag.is_none()),
            Some(tag) => self
                .buttons
                .iter()
                .position(|b| b.tag.as_deref() == Some(tag)),
        };

        let Some(target) = target else {
            let tag = tag.unwrap_or(ALL_LABEL).to_string();
            warn!(%tag, "ignoring filter for unknown tag");
            return Err(Error::UnknownTag(tag));
        };

        for (i, button) in self.buttons.iter_mut().enumerate() {
            button.active = i == target;
        }

        for (visible, membership) in self.visible.iter_mut().zip(&self.memberships) {
            *visible = match tag {
                None => true,
                Some(tag) => membership.contains(tag),
            };
        }

        self.state.active_tag = tag.map(str::to_string);
        debug!(
            tag = tag.unwrap_or(ALL_LABEL),
            shown = self.visible_count(),
            "filter applied"
        );
        Ok(())
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    /// Whether the card at grid position `index` is shown
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn membership(tags: &[&str]) -> TagMembership {
        tags.iter().map(|t| t.to_string()).collect()
    }

    /// A(x,y), B(y), C(z)
    fn abc_controller() -> FilterController {
        let tags = vec!["x".to_string(), "y".to_string(), "z".to_string()];
        FilterController::new(
            &tags,
            vec![membership(&["x", "y"]), membership(&["y"]), membership(&["z"])],
        )
    }

    fn active_labels(controller: &FilterController) -> Vec<&str> {
        controller
            .buttons()
            .iter()
            .filter(|b| b.active)
            .map(|b| b.label.as_str())
            .collect()
    }

    #[test]
    fn test_initial_state_shows_all() {
        let controller = abc_controller();

        assert_eq!(controller.state().active_tag, None);
        assert_eq!(active_labels(&controller), vec!["All"]);
        assert_eq!(controller.visible_count(), 3);

        let labels: Vec<_> = controller.buttons().iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["All", "x", "y", "z"]);
    }

    #[test]
    fn test_select_shared_tag() {
        let mut controller = abc_controller();
        controller.select_tag(Some("y")).unwrap();

        assert!(controller.is_visible(0));
        assert!(controller.is_visible(1));
        assert!(!controller.is_visible(2));
        assert_eq!(active_labels(&controller), vec!["y"]);
        assert_eq!(controller.state().active_tag.as_deref(), Some("y"));
    }

    #[test]
    fn test_select_none_restores_all() {
        let mut controller = abc_controller();
        controller.select_tag(Some("z")).unwrap();
        assert_eq!(controller.visible_count(), 1);

        controller.select_tag(None).unwrap();
        assert_eq!(controller.visible_count(), 3);
        assert_eq!(active_labels(&controller), vec!["All"]);
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let mut controller = abc_controller();
        controller.select_tag(Some("x")).unwrap();

        let err = controller.select_tag(Some("walnut")).unwrap_err();
        assert!(matches!(err, Error::UnknownTag(ref t) if t == "walnut"));

        // Nothing changed
        assert_eq!(active_labels(&controller), vec!["x"]);
        assert_eq!(controller.visible_count(), 1);
        assert_eq!(controller.state().active_tag.as_deref(), Some("x"));
    }

    #[test]
    fn test_tag_named_all() {
        let tags = vec!["All".to_string()];
        let mut controller = FilterController::new(&tags, vec![membership(&["All"]), membership(&[])]);

        controller.select_tag(Some("All")).unwrap();

        let active: Vec<_> = controller.buttons().iter().map(|b| b.active).collect();
        assert_eq!(active, vec![false, true]);
        assert!(controller.is_visible(0));
        assert!(!controller.is_visible(1));
    }

    #[test]
    fn test_out_of_range_card_is_hidden() {
        assert!(!abc_controller().is_visible(42));
    }

    proptest! {
        #[test]
        fn select_then_clear_restores_everything(
            cards in prop::collection::vec(prop::collection::btree_set("[a-d]", 0..4), 0..10),
            pick in 0usize..4,
        ) {
            let mut tags: Vec<String> = cards.iter().flatten().cloned().collect();
            tags.sort();
            tags.dedup();
            let count = cards.len();
            let mut controller = FilterController::new(&tags, cards);

            if let Some(tag) = tags.get(pick % tags.len().max(1)) {
                controller.select_tag(Some(tag)).unwrap();
                prop_assert_eq!(controller.buttons().iter().filter(|b| b.active).count(), 1);
            }
            controller.select_tag(None).unwrap();

            prop_assert_eq!(controller.visible_count(), count);
            prop_assert!(controller.buttons()[0].active);
        }
    }
}
