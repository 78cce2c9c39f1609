// SPDX-License-Identifier: MPL-2.0
//! Selected value per exclusive-selection group.
//!
//! Iced has no form controls grouped by name, so the "at most one active
//! option per group" rule lives here. The parent screen stores the value
//! reported by a [`JoinItem`](super::join_item::JoinItem) and passes the
//! current selection back when rendering the group.

use crate::ui::join_item::GroupName;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct SelectionGroups<V> {
    selected: HashMap<GroupName, V>,
}

impl<V> Default for SelectionGroups<V> {
    fn default() -> Self {
        Self {
            selected: HashMap::new(),
        }
    }
}

impl<V: Copy + PartialEq> SelectionGroups<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `value` the active option of `group`, returning the option it
    /// replaced.
    pub fn select(&mut self, group: &GroupName, value: V) -> Option<V> {
        self.selected.insert(group.clone(), value)
    }

    #[must_use]
    pub fn selected(&self, group: &GroupName) -> Option<V> {
        self.selected.get(group).copied()
    }

    #[must_use]
    pub fn is_selected(&self, group: &GroupName, value: V) -> bool {
        self.selected(group) == Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crop::Crop;

    fn group(name: &str) -> GroupName {
        GroupName::new(name).expect("valid group name")
    }

    #[test]
    fn new_groups_have_no_selection() {
        let groups: SelectionGroups<Crop> = SelectionGroups::new();
        assert_eq!(groups.selected(&group("crop")), None);
    }

    #[test]
    fn selecting_replaces_the_previous_option() {
        let crop = group("crop");
        let mut groups = SelectionGroups::new();

        assert_eq!(groups.select(&crop, Crop::Tomato), None);
        assert_eq!(groups.select(&crop, Crop::Apple), Some(Crop::Tomato));

        assert!(groups.is_selected(&crop, Crop::Apple));
        assert!(!groups.is_selected(&crop, Crop::Tomato));
    }

    #[test]
    fn groups_are_independent() {
        let front = group("front-bed");
        let back = group("back-bed");
        let mut groups = SelectionGroups::new();

        groups.select(&front, Crop::Rice);
        groups.select(&back, Crop::Wheat);

        assert_eq!(groups.selected(&front), Some(Crop::Rice));
        assert_eq!(groups.selected(&back), Some(Crop::Wheat));
    }
}
