//! Transient interaction records: loading flags, selection, forms, quick
//! actions, comparison tray and drag-and-drop.

use crate::identity::ItemId;
use crate::Payload;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// LOADING
// ============================================================================

pub const GLOBAL_LOADING_KEY: &str = "global";

/// Named busy flags. A key that was never written reads as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Loading(BTreeMap<String, bool>);

impl Loading {
    pub fn is_loading(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: impl Into<String>, value: bool) {
        self.0.insert(key.into(), value);
    }

    pub fn any(&self) -> bool {
        self.0.values().any(|v| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Default for Loading {
    fn default() -> Self {
        Self(BTreeMap::from([
            (GLOBAL_LOADING_KEY.to_string(), false),
            ("uploadingFile".to_string(), false),
            ("processing".to_string(), false),
        ]))
    }
}

// ============================================================================
// SELECTION
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// Unique; kept in selection order for display.
    pub selected_ids: Vec<ItemId>,
    pub is_select_all: bool,
    pub bulk_action: Option<String>,
}

impl Selection {
    pub fn contains(&self, id: &ItemId) -> bool {
        self.selected_ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    /// Remove `id` if selected, otherwise append it.
    pub fn toggle(&mut self, id: ItemId) {
        match self.selected_ids.iter().position(|s| *s == id) {
            Some(index) => {
                self.selected_ids.remove(index);
            }
            None => self.selected_ids.push(id),
        }
    }

    pub fn select_all(&mut self, ids: Vec<ItemId>) {
        let mut unique = Vec::with_capacity(ids.len());
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        self.selected_ids = unique;
        self.is_select_all = true;
    }

    pub fn deselect_all(&mut self) {
        self.selected_ids.clear();
        self.is_select_all = false;
    }
}

// ============================================================================
// FORMS
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forms {
    pub is_dirty: bool,
    pub has_unsaved_changes: bool,
    pub active_form: Option<String>,
}

// ============================================================================
// QUICK ACTIONS
// ============================================================================

pub const RECENT_SEARCH_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickActions {
    pub is_open: bool,
    /// Most recent first, unique, at most [`RECENT_SEARCH_LIMIT`] entries.
    pub recent_searches: Vec<String>,
}

impl QuickActions {
    pub fn remember_search(&mut self, search: String) {
        self.recent_searches.retain(|s| *s != search);
        self.recent_searches.insert(0, search);
        self.recent_searches.truncate(RECENT_SEARCH_LIMIT);
    }
}

// ============================================================================
// COMPARISON
// ============================================================================

/// An entry in the comparison tray. Everything except the id is opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonItem {
    pub id: ItemId,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, Payload>,
}

impl ComparisonItem {
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            attributes: serde_json::Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Payload) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

/// Items are unique by id. The tray size limit is applied by callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub is_active: bool,
    pub items: Vec<ComparisonItem>,
}

impl Comparison {
    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.iter().any(|item| item.id == *id)
    }

    /// Turning the tray off empties it.
    pub fn toggle(&mut self) {
        self.is_active = !self.is_active;
        if !self.is_active {
            self.items.clear();
        }
    }

    /// Returns `false` when an item with the same id is already present.
    pub fn add(&mut self, item: ComparisonItem) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn remove(&mut self, id: &ItemId) {
        self.items.retain(|item| item.id != *id);
    }
}

// ============================================================================
// DRAG AND DROP
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragDrop {
    pub is_dragging: bool,
    pub dragged_item: Option<Payload>,
    pub drop_zone: Option<String>,
}

impl DragDrop {
    pub fn start(&mut self, item: Payload) {
        self.is_dragging = true;
        self.dragged_item = Some(item);
    }

    pub fn end(&mut self) {
        *self = DragDrop::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_loading_defaults_to_false() {
        let mut loading = Loading::default();
        assert!(!loading.is_loading("global"));
        assert!(!loading.is_loading("never-set"));
        loading.set("export", true);
        assert!(loading.is_loading("export"));
        assert!(loading.any());
    }

    #[test]
    fn test_selection_toggle_is_symmetric() {
        let mut selection = Selection::default();
        selection.toggle(ItemId::from(1_i64));
        selection.toggle(ItemId::from(2_i64));
        selection.toggle(ItemId::from(1_i64));
        assert_eq!(selection.selected_ids, vec![ItemId::from(2_i64)]);
    }

    #[test]
    fn test_select_all_dedupes_and_sets_flag() {
        let mut selection = Selection::default();
        selection.select_all(vec!["a".into(), "b".into(), "a".into()]);
        assert_eq!(selection.len(), 2);
        assert!(selection.is_select_all);
        selection.deselect_all();
        assert!(selection.is_empty());
        assert!(!selection.is_select_all);
    }

    #[test]
    fn test_recent_searches_capped_and_most_recent_first() {
        let mut quick = QuickActions::default();
        for i in 0..12 {
            quick.remember_search(format!("q{i}"));
        }
        quick.remember_search("q5".to_string());
        assert_eq!(quick.recent_searches.len(), RECENT_SEARCH_LIMIT);
        assert_eq!(quick.recent_searches[0], "q5");
        assert_eq!(
            quick.recent_searches.iter().filter(|s| *s == "q5").count(),
            1
        );
    }

    #[test]
    fn test_comparison_unique_by_id() {
        let mut tray = Comparison::default();
        assert!(tray.add(ComparisonItem::new("boiler-1")));
        assert!(!tray.add(ComparisonItem::new("boiler-1").with_attribute("price", json!(10))));
        assert_eq!(tray.items.len(), 1);
    }

    #[test]
    fn test_comparison_toggle_off_clears() {
        let mut tray = Comparison::default();
        tray.toggle();
        tray.add(ComparisonItem::new(7_i64));
        tray.toggle();
        assert!(!tray.is_active);
        assert!(tray.items.is_empty());
    }

    #[test]
    fn test_comparison_item_flattens_attributes() {
        let item: ComparisonItem =
            serde_json::from_str(r#"{"id": 3, "name": "Chiller", "price": 1200}"#).unwrap();
        assert_eq!(item.id, ItemId::from(3_i64));
        assert_eq!(item.attributes["name"], json!("Chiller"));
    }

    #[test]
    fn test_drag_end_clears_everything() {
        let mut drag = DragDrop::default();
        drag.start(json!({"id": 1}));
        drag.drop_zone = Some("done".into());
        drag.end();
        assert_eq!(drag, DragDrop::default());
    }
}
