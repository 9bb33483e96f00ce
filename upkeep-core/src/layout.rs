//! Page chrome: sidebar, drawers, tabs, layout toggles and theme settings.

use crate::enums::{DrawerSide, FontSize, ThemeMode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sidebar {
    pub is_open: bool,
    pub is_collapsed: bool,
    pub active_section: String,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self {
            is_open: true,
            is_collapsed: false,
            active_section: "dashboard".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub compact_mode: bool,
    pub show_toolbar: bool,
    pub show_footer: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            compact_mode: false,
            show_toolbar: true,
            show_footer: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerState {
    pub is_open: bool,
    /// Names the panel shown inside the drawer; not interpreted here.
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drawers {
    pub left: DrawerState,
    pub right: DrawerState,
}

impl Drawers {
    pub fn get(&self, side: DrawerSide) -> &DrawerState {
        match side {
            DrawerSide::Left => &self.left,
            DrawerSide::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, side: DrawerSide) -> &mut DrawerState {
        match side {
            DrawerSide::Left => &mut self.left,
            DrawerSide::Right => &mut self.right,
        }
    }

    pub fn open(&mut self, side: DrawerSide, content: Option<String>) {
        *self.get_mut(side) = DrawerState {
            is_open: true,
            content,
        };
    }

    pub fn close(&mut self, side: DrawerSide) {
        *self.get_mut(side) = DrawerState::default();
    }

    /// Flip visibility; the content tag is kept.
    pub fn toggle(&mut self, side: DrawerSide) {
        let drawer = self.get_mut(side);
        drawer.is_open = !drawer.is_open;
    }
}

/// Section name to selected tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveTabs(BTreeMap<String, String>);

impl ActiveTabs {
    pub fn get(&self, section: &str) -> Option<&str> {
        self.0.get(section).map(String::as_str)
    }

    pub fn set(&mut self, section: impl Into<String>, tab: impl Into<String>) {
        self.0.insert(section.into(), tab.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for ActiveTabs {
    fn default() -> Self {
        Self(BTreeMap::from([
            ("main".to_string(), "overview".to_string()),
            ("settings".to_string(), "general".to_string()),
            ("profile".to_string(), "personal".to_string()),
        ]))
    }
}

pub const DEFAULT_PRIMARY_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub mode: ThemeMode,
    pub primary_color: String,
    pub font_size: FontSize,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            font_size: FontSize::Medium,
        }
    }
}

impl ThemeSettings {
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawer_toggle_keeps_content() {
        let mut drawers = Drawers::default();
        drawers.open(DrawerSide::Right, Some("filters".into()));
        drawers.toggle(DrawerSide::Right);
        assert!(!drawers.right.is_open);
        assert_eq!(drawers.right.content.as_deref(), Some("filters"));
        assert_eq!(drawers.left, DrawerState::default());
    }

    #[test]
    fn test_drawer_close_clears_content() {
        let mut drawers = Drawers::default();
        drawers.open(DrawerSide::Left, Some("nav".into()));
        drawers.close(DrawerSide::Left);
        assert_eq!(drawers.get(DrawerSide::Left), &DrawerState::default());
    }

    #[test]
    fn test_default_tabs() {
        let tabs = ActiveTabs::default();
        assert_eq!(tabs.get("main"), Some("overview"));
        assert_eq!(tabs.get("settings"), Some("general"));
        assert_eq!(tabs.get("profile"), Some("personal"));
        assert_eq!(tabs.get("reports"), None);
    }

    #[test]
    fn test_theme_toggle() {
        let mut theme = ThemeSettings::default();
        theme.toggle_mode();
        assert!(theme.is_dark());
        theme.toggle_mode();
        assert_eq!(theme, ThemeSettings::default());
    }
}
