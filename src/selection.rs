//! Selection Tracker
//!
//! Multi-select over the visible item list: shift-click selects a range,
//! ctrl/cmd-click toggles, a plain click selects a single item.
//! `Selection` is the only record of what is selected; the view renders
//! from it and never reads selection back from the page.

use crate::models::{Item, ItemId};

/// Modifier keys held during a click
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    /// Ctrl or Cmd
    pub toggle: bool,
}

impl Modifiers {
    pub fn from_event(ev: &web_sys::MouseEvent) -> Self {
        Self {
            shift: ev.shift_key(),
            toggle: ev.ctrl_key() || ev.meta_key(),
        }
    }
}

/// A selected item and its position when it was selected
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedItem {
    pub id: ItemId,
    pub position: i64,
}

impl From<&Item> for SelectedItem {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            position: item.current_position,
        }
    }
}

/// Selected items in the order they were selected. Ids are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    entries: Vec<SelectedItem>,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.entries.iter().any(|e| &e.id == id)
    }

    pub fn entries(&self) -> &[SelectedItem] {
        &self.entries
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.entries.iter().map(|e| e.id.clone()).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Add if absent. Returns whether the item was added.
    pub fn insert(&mut self, item: &Item) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.entries.push(SelectedItem::from(item));
        true
    }

    pub fn remove(&mut self, id: &ItemId) {
        self.entries.retain(|e| &e.id != id);
    }

    pub fn toggle(&mut self, item: &Item) {
        if self.contains(&item.id) {
            self.remove(&item.id);
        } else {
            self.entries.push(SelectedItem::from(item));
        }
    }

    /// Index within `visible` of the selected item furthest down the list
    pub fn last_selected_index(&self, visible: &[&Item]) -> Option<usize> {
        visible.iter().rposition(|item| self.contains(&item.id))
    }

    /// Apply a click on `visible[index]`.
    ///
    /// Rules, first match wins:
    /// 1. shift: select every visible item between the last selected
    ///    visible item and the clicked one, inclusive. With no selected
    ///    visible item the range collapses to the clicked item.
    /// 2. ctrl/cmd, or an active search: toggle the clicked item only.
    /// 3. otherwise: the clicked item becomes the whole selection.
    pub fn click(&mut self, visible: &[&Item], index: usize, modifiers: Modifiers, search_active: bool) {
        let Some(clicked) = visible.get(index).copied() else {
            return;
        };

        if modifiers.shift {
            let anchor = self.last_selected_index(visible).unwrap_or(index);
            let (start, end) = (anchor.min(index), anchor.max(index));
            for item in &visible[start..=end] {
                self.insert(item);
            }
        } else if modifiers.toggle || search_active {
            self.toggle(clicked);
        } else {
            self.clear();
            self.insert(clicked);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_item;

    const PLAIN: Modifiers = Modifiers { shift: false, toggle: false };
    const SHIFT: Modifiers = Modifiers { shift: true, toggle: false };
    const CTRL: Modifiers = Modifiers { shift: false, toggle: true };

    fn items(n: i64) -> Vec<Item> {
        (0..n).map(|i| make_item(i, &format!("Item {}", i), i)).collect()
    }

    fn ids(sel: &Selection) -> Vec<i64> {
        sel.ids()
            .into_iter()
            .map(|id| match id {
                ItemId::Num(n) => n,
                ItemId::Text(_) => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn test_plain_click_replaces_selection() {
        let all = items(4);
        let visible: Vec<&Item> = all.iter().collect();
        let mut sel = Selection::default();

        sel.click(&visible, 1, PLAIN, false);
        sel.click(&visible, 3, PLAIN, false);
        assert_eq!(ids(&sel), vec![3]);
    }

    #[test]
    fn test_ctrl_click_twice_restores_selection() {
        let all = items(4);
        let visible: Vec<&Item> = all.iter().collect();
        let mut sel = Selection::default();
        sel.click(&visible, 0, PLAIN, false);
        let before = sel.clone();

        sel.click(&visible, 2, CTRL, false);
        assert_eq!(ids(&sel), vec![0, 2]);
        sel.click(&visible, 2, CTRL, false);
        assert_eq!(sel, before);
    }

    #[test]
    fn test_active_search_makes_plain_click_toggle() {
        let all = items(3);
        let visible: Vec<&Item> = all.iter().collect();
        let mut sel = Selection::default();

        sel.click(&visible, 0, PLAIN, true);
        sel.click(&visible, 2, PLAIN, true);
        assert_eq!(ids(&sel), vec![0, 2]);
        sel.click(&visible, 0, PLAIN, true);
        assert_eq!(ids(&sel), vec![2]);
    }

    #[test]
    fn test_shift_click_selects_range_downwards() {
        let all = items(6);
        let visible: Vec<&Item> = all.iter().collect();
        let mut sel = Selection::default();

        sel.click(&visible, 1, PLAIN, false);
        sel.click(&visible, 4, SHIFT, false);
        assert_eq!(ids(&sel), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_shift_click_anchors_on_lowest_visible_selection() {
        let all = items(6);
        let visible: Vec<&Item> = all.iter().collect();
        let mut sel = Selection::default();

        // Most recently clicked is 1, but 4 is further down the list
        sel.click(&visible, 4, PLAIN, false);
        sel.click(&visible, 1, CTRL, false);
        sel.click(&visible, 5, SHIFT, false);
        assert_eq!(ids(&sel), vec![4, 1, 5]);

        // Shift above the anchor covers anchor..=clicked
        let mut sel = Selection::default();
        sel.click(&visible, 3, PLAIN, false);
        sel.click(&visible, 0, SHIFT, false);
        assert_eq!(ids(&sel), vec![3, 0, 1, 2]);
    }

    #[test]
    fn test_shift_click_is_union() {
        let all = items(8);
        let visible: Vec<&Item> = all.iter().collect();
        let mut sel = Selection::default();

        sel.click(&visible, 0, PLAIN, false);
        sel.click(&visible, 2, SHIFT, false);
        sel.click(&visible, 6, CTRL, false);
        sel.click(&visible, 7, SHIFT, false);
        assert_eq!(ids(&sel), vec![0, 1, 2, 6, 7]);
        assert_eq!(sel.len(), 5);
    }

    #[test]
    fn test_shift_click_without_selection_selects_clicked() {
        let all = items(3);
        let visible: Vec<&Item> = all.iter().collect();
        let mut sel = Selection::default();

        sel.click(&visible, 2, SHIFT, false);
        assert_eq!(ids(&sel), vec![2]);
    }

    #[test]
    fn test_shift_range_skips_hidden_items() {
        let all = items(5);
        // Item 2 is filtered out
        let visible: Vec<&Item> = all.iter().filter(|i| i.id != ItemId::Num(2)).collect();
        let mut sel = Selection::default();

        sel.click(&visible, 0, PLAIN, false);
        sel.click(&visible, 3, SHIFT, false);
        assert_eq!(ids(&sel), vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_hidden_selection_is_kept_but_not_an_anchor() {
        let all = items(5);
        let all_visible: Vec<&Item> = all.iter().collect();
        let mut sel = Selection::default();
        sel.click(&all_visible, 4, PLAIN, false);

        // Hide item 4, then shift-click: no visible anchor
        let visible: Vec<&Item> = all.iter().take(4).collect();
        assert_eq!(sel.last_selected_index(&visible), None);
        sel.click(&visible, 1, SHIFT, false);
        assert_eq!(ids(&sel), vec![4, 1]);
    }

    #[test]
    fn test_out_of_range_click_is_ignored() {
        let all = items(2);
        let visible: Vec<&Item> = all.iter().collect();
        let mut sel = Selection::default();
        sel.click(&visible, 5, PLAIN, false);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_selected_position_is_recorded() {
        let all = vec![make_item(9, "A", 17)];
        let visible: Vec<&Item> = all.iter().collect();
        let mut sel = Selection::default();
        sel.click(&visible, 0, PLAIN, false);
        assert_eq!(sel.entries()[0].position, 17);
    }
}
