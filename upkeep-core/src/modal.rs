//! Modal registry

use crate::Payload;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Modals registered at start-up.
pub const DEFAULT_MODALS: &[&str] = &[
    "createUser",
    "editUser",
    "deleteConfirm",
    "imagePreview",
    "settings",
    "profile",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalState {
    pub is_open: bool,
    pub data: Option<Payload>,
}

impl ModalState {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn opened(data: Option<Payload>) -> Self {
        Self {
            is_open: true,
            data,
        }
    }
}

/// Modal name to open/closed state.
///
/// Lookups never register a name. Only [`ModalRegistry::open`] adds entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModalRegistry(BTreeMap<String, ModalState>);

impl ModalRegistry {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, name: &str) -> Option<&ModalState> {
        self.0.get(name)
    }

    pub fn is_open(&self, name: &str) -> bool {
        self.0.get(name).is_some_and(|m| m.is_open)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModalState)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn open(&mut self, name: impl Into<String>, data: Option<Payload>) {
        self.0.insert(name.into(), ModalState::opened(data));
    }

    /// Returns `false` when the name was never registered.
    pub fn close(&mut self, name: &str) -> bool {
        match self.0.get_mut(name) {
            Some(modal) => {
                *modal = ModalState::closed();
                true
            }
            None => false,
        }
    }

    pub fn close_all(&mut self) {
        for modal in self.0.values_mut() {
            *modal = ModalState::closed();
        }
    }

    /// Returns `false` when the name was never registered.
    pub fn update_data(&mut self, name: &str, data: Option<Payload>) -> bool {
        match self.0.get_mut(name) {
            Some(modal) => {
                modal.data = data;
                true
            }
            None => false,
        }
    }
}

impl Default for ModalRegistry {
    fn default() -> Self {
        Self(
            DEFAULT_MODALS
                .iter()
                .map(|name| (name.to_string(), ModalState::closed()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_registry_has_closed_modals() {
        let registry = ModalRegistry::default();
        assert_eq!(registry.len(), DEFAULT_MODALS.len());
        assert!(registry.iter().all(|(_, m)| !m.is_open && m.data.is_none()));
    }

    #[test]
    fn test_close_clears_data() {
        let mut registry = ModalRegistry::default();
        registry.open("editUser", Some(json!({"id": 7})));
        assert!(registry.is_open("editUser"));
        assert!(registry.close("editUser"));
        assert_eq!(registry.get("editUser"), Some(&ModalState::closed()));
    }

    #[test]
    fn test_unknown_names_are_not_created() {
        let mut registry = ModalRegistry::default();
        assert!(!registry.close("ghost"));
        assert!(!registry.update_data("ghost", Some(json!(1))));
        assert!(registry.get("ghost").is_none());
        assert!(!registry.is_open("ghost"));
        assert!(!registry.contains("ghost"));
    }

    #[test]
    fn test_open_registers_new_names() {
        let mut registry = ModalRegistry::empty();
        registry.open("workOrder", None);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["workOrder"]);
    }
}
