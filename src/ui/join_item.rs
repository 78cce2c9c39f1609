// SPDX-License-Identifier: MPL-2.0
//! One option of an exclusive-selection group.
//!
//! A [`JoinItem`] pairs an invisible selection control with arbitrary
//! content acting as its label. Options that share a [`GroupName`] form one
//! exclusive choice; which option is active is owned by the caller (see
//! [`SelectionGroups`](super::selection::SelectionGroups)) and handed back to
//! the item on every render.
//!
//! Each item gets an [`ItemId`] at construction. The id ties the label to
//! its control and is stable for the lifetime of the item, so rendering the
//! same item twice with the same selection produces the same [`Binding`].

use crate::error::{Error, Result};
use crate::ui::design_tokens::{emphasis, spacing};
use crate::ui::selection::SelectionGroups;
use crate::ui::styles;
use iced::widget::button;
use iced::Element;
use std::borrow::Cow;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(0);

/// Process-local identifier of a rendered option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    /// Returns an id never handed out before in this process.
    #[must_use]
    pub fn unique() -> Self {
        Self(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "join-item-{}", self.0)
    }
}

/// Name of an exclusive-selection group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupName(Cow<'static, str>);

impl GroupName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidGroupName(name));
        }
        Ok(Self(Cow::Owned(name)))
    }

    /// Group name known at compile time.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or only ASCII whitespace. In a `const`
    /// context this is a compile error.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        let bytes = name.as_bytes();
        let mut i = 0;
        let mut blank = true;
        while i < bytes.len() {
            if !bytes[i].is_ascii_whitespace() {
                blank = false;
            }
            i += 1;
        }
        assert!(!blank, "group name must not be blank");
        Self(Cow::Borrowed(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Visual treatment of an option for a given interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    /// Rendered without color.
    pub desaturated: bool,
    pub scale: f32,
    /// Stacking order relative to sibling options.
    pub layer: u8,
}

impl Appearance {
    /// Desaturated unless checked or hovered; hovering also scales the
    /// option up and lifts it above its neighbours.
    #[must_use]
    pub fn resolve(checked: bool, hovered: bool) -> Self {
        Self {
            desaturated: !(checked || hovered),
            scale: if hovered { emphasis::HOVER_SCALE } else { 1.0 },
            layer: if hovered {
                emphasis::HOVER_LAYER
            } else {
                emphasis::REST_LAYER
            },
        }
    }

    #[must_use]
    pub fn raised(&self) -> bool {
        self.layer > emphasis::REST_LAYER
    }
}

/// The hidden selection control of an option.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioInput {
    pub id: ItemId,
    pub name: GroupName,
    pub checked: bool,
    pub hidden: bool,
}

/// Structural description of one render of a [`JoinItem`].
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// Control the label activates.
    pub label_for: ItemId,
    pub input: RadioInput,
    /// Appearance at rest (pointer elsewhere).
    pub appearance: Appearance,
}

/// One option of an exclusive-selection group, standing for `value`.
#[derive(Debug, Clone)]
pub struct JoinItem<V> {
    id: ItemId,
    group: GroupName,
    value: V,
}

impl<V: Copy + PartialEq> JoinItem<V> {
    pub fn new(group: GroupName, value: V) -> Self {
        Self {
            id: ItemId::unique(),
            group,
            value,
        }
    }

    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn group(&self) -> &GroupName {
        &self.group
    }

    #[must_use]
    pub fn value(&self) -> V {
        self.value
    }

    /// Whether this item is the active option of its own group.
    #[must_use]
    pub fn is_checked(&self, selection: &SelectionGroups<V>) -> bool {
        selection.is_selected(&self.group, self.value)
    }

    /// Describes what [`view`](Self::view) renders for `selection`.
    #[must_use]
    pub fn binding(&self, selection: &SelectionGroups<V>) -> Binding {
        let checked = self.is_checked(selection);
        Binding {
            label_for: self.id,
            input: RadioInput {
                id: self.id,
                name: self.group.clone(),
                checked,
                hidden: true,
            },
            appearance: Appearance::resolve(checked, false),
        }
    }

    /// Renders the option. Pressing anywhere on `content` emits
    /// `on_select(value)`; the item itself keeps no selection state.
    pub fn view<'a, Message: Clone + 'a>(
        &self,
        selection: &SelectionGroups<V>,
        content: impl Into<Element<'a, Message>>,
        on_select: impl Fn(V) -> Message,
    ) -> Element<'a, Message> {
        let binding = self.binding(selection);

        button(content)
            .on_press(on_select(self.value))
            .padding(spacing::XXS)
            .style(styles::button::join_item(binding.input.checked))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn group(name: &str) -> GroupName {
        GroupName::new(name).expect("valid group name")
    }

    fn selecting<V: Copy + PartialEq>(group: &GroupName, value: Option<V>) -> SelectionGroups<V> {
        let mut selection = SelectionGroups::new();
        if let Some(value) = value {
            selection.select(group, value);
        }
        selection
    }

    #[test]
    fn ids_are_unique_per_instance() {
        let a = JoinItem::new(group("crop"), 1);
        let b = JoinItem::new(group("crop"), 1);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn ids_are_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..250).map(|_| ItemId::unique()).collect::<Vec<_>>()))
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().expect("thread panicked") {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn label_targets_its_own_input() {
        let item = JoinItem::new(group("crop"), 'a');
        for selected in [None, Some('a'), Some('b')] {
            let binding = item.binding(&selecting(item.group(), selected));
            assert_eq!(binding.label_for, binding.input.id);
            assert_eq!(binding.input.id, item.id());
            assert!(binding.input.hidden);
        }
    }

    #[test]
    fn items_sharing_a_group_share_the_input_name() {
        let a = JoinItem::new(group("crop"), 1);
        let b = JoinItem::new(group("crop"), 2);
        let other = JoinItem::new(group("layout"), 1);
        let none = SelectionGroups::new();

        assert_eq!(a.binding(&none).input.name, b.binding(&none).input.name);
        assert_eq!(a.binding(&none).input.name.as_str(), "crop");
        assert_ne!(a.binding(&none).input.name, other.binding(&none).input.name);
    }

    #[test]
    fn only_the_matching_value_is_checked() {
        let a = JoinItem::new(group("crop"), 1);
        let b = JoinItem::new(group("crop"), 2);
        let one = selecting(&group("crop"), Some(1));

        assert!(a.binding(&one).input.checked);
        assert!(!b.binding(&one).input.checked);
        assert!(!a.binding(&SelectionGroups::new()).input.checked);
    }

    #[test]
    fn selection_in_another_group_never_checks_the_item() {
        let front = group("front-bed");
        let back = group("back-bed");
        let mut selection = SelectionGroups::new();
        selection.select(&front, 4);

        let front_item = JoinItem::new(front, 4);
        let back_item = JoinItem::new(back.clone(), 4);

        assert!(front_item.binding(&selection).input.checked);
        assert!(!back_item.binding(&selection).input.checked);
        assert!(back_item.binding(&selection).appearance.desaturated);
        assert_eq!(selection.selected(&back), None);
    }

    #[test]
    fn rerendering_is_idempotent() {
        let item = JoinItem::new(group("crop"), 7);
        let seven = selecting(item.group(), Some(7));
        let none = SelectionGroups::new();
        assert_eq!(item.binding(&seven), item.binding(&seven));
        assert_eq!(item.binding(&none), item.binding(&none));
    }

    #[test]
    fn appearance_follows_checked_and_hover_state() {
        let rest = Appearance::resolve(false, false);
        assert!(rest.desaturated);
        assert_eq!(rest.scale, 1.0);
        assert!(!rest.raised());

        let checked = Appearance::resolve(true, false);
        assert!(!checked.desaturated);
        assert_eq!(checked.scale, 1.0);

        let hovered = Appearance::resolve(false, true);
        assert!(!hovered.desaturated);
        assert_eq!(hovered.scale, emphasis::HOVER_SCALE);
        assert_eq!(hovered.layer, emphasis::HOVER_LAYER);
        assert!(hovered.raised());
    }

    #[test]
    fn blank_group_names_are_rejected() {
        assert_eq!(GroupName::new(""), Err(Error::InvalidGroupName(String::new())));
        assert!(GroupName::new("   ").is_err());
        assert_eq!(group("crop").to_string(), "crop");
    }

    #[test]
    fn static_and_owned_names_compare_equal() {
        const CROP: GroupName = GroupName::from_static("crop");
        assert_eq!(CROP, group("crop"));
    }

    #[test]
    #[should_panic(expected = "group name must not be blank")]
    fn blank_static_name_panics_at_runtime() {
        let name: &'static str = Box::leak(String::from(" \t").into_boxed_str());
        let _ = GroupName::from_static(name);
    }

    #[test]
    fn item_id_display_is_prefixed() {
        assert!(ItemId::unique().to_string().starts_with("join-item-"));
    }

    #[test]
    fn view_builds_for_any_selection() {
        #[derive(Debug, Clone)]
        enum Message {
            Picked(u8),
        }

        let item = JoinItem::new(group("crop"), 3u8);
        let none = SelectionGroups::new();
        let three = selecting(item.group(), Some(3u8));
        let _: Element<'_, Message> = item.view(&none, "three", Message::Picked);
        let _: Element<'_, Message> = item.view(&three, "three", Message::Picked);
    }
}
