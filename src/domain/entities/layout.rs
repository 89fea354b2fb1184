//! Layout documents
//!
//! Typed layout data: the application's menu bars and per-class object
//! layouts. Both are persisted as TOML resources next to the model.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{MenuBarKind, Where};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuBars {
    #[serde(default)]
    pub primary: MenuBar,
    #[serde(default)]
    pub secondary: MenuBar,
    #[serde(default)]
    pub tertiary: MenuBar,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuBar {
    #[serde(default)]
    pub menus: Vec<Menu>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Menu {
    pub named: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class_fa: Option<String>,
    /// Catch-all menu receiving actions the layout does not mention
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub unreferenced_actions: bool,
    #[serde(default)]
    pub sections: Vec<MenuSection>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named: Option<String>,
    #[serde(default)]
    pub actions: Vec<ServiceActionLayout>,
}

/// Reference to a service action, with optional layout overrides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceActionLayout {
    /// Logical type name of the declaring service
    pub object_type: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub described_as: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class_fa: Option<String>,
}

impl ServiceActionLayout {
    pub fn new(object_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn key(&self) -> (String, String) {
        (self.object_type.clone(), self.id.clone())
    }
}

impl MenuBars {
    pub fn bar(&self, kind: MenuBarKind) -> &MenuBar {
        match kind {
            MenuBarKind::Primary => &self.primary,
            MenuBarKind::Secondary => &self.secondary,
            MenuBarKind::Tertiary => &self.tertiary,
        }
    }

    pub fn bar_mut(&mut self, kind: MenuBarKind) -> &mut MenuBar {
        match kind {
            MenuBarKind::Primary => &mut self.primary,
            MenuBarKind::Secondary => &mut self.secondary,
            MenuBarKind::Tertiary => &mut self.tertiary,
        }
    }

    pub fn menus(&self) -> impl Iterator<Item = &Menu> {
        self.primary
            .menus
            .iter()
            .chain(self.secondary.menus.iter())
            .chain(self.tertiary.menus.iter())
    }

    fn menus_mut(&mut self) -> impl Iterator<Item = &mut Menu> {
        self.primary
            .menus
            .iter_mut()
            .chain(self.secondary.menus.iter_mut())
            .chain(self.tertiary.menus.iter_mut())
    }

    pub fn actions(&self) -> impl Iterator<Item = &ServiceActionLayout> {
        self.menus()
            .flat_map(|m| m.sections.iter())
            .flat_map(|s| s.actions.iter())
    }

    pub fn actions_mut(&mut self) -> impl Iterator<Item = &mut ServiceActionLayout> {
        self.menus_mut()
            .flat_map(|m| m.sections.iter_mut())
            .flat_map(|s| s.actions.iter_mut())
    }

    /// Drops action references for which `keep` returns false, then any
    /// section left empty.
    pub fn retain_actions(&mut self, mut keep: impl FnMut(&ServiceActionLayout) -> bool) {
        for menu in self.menus_mut() {
            for section in &mut menu.sections {
                section.actions.retain(&mut keep);
            }
            menu.sections.retain(|s| !s.actions.is_empty());
        }
    }

    pub fn unreferenced_actions_menu_count(&self) -> usize {
        self.menus().filter(|m| m.unreferenced_actions).count()
    }

    pub fn unreferenced_actions_menu_mut(&mut self) -> Option<&mut Menu> {
        self.menus_mut().find(|m| m.unreferenced_actions)
    }

    /// Plain-text outline, one line per bar, menu, section and action.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for kind in [MenuBarKind::Primary, MenuBarKind::Secondary, MenuBarKind::Tertiary] {
            let bar = self.bar(kind);
            if bar.menus.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{:?}", kind);
            for menu in &bar.menus {
                let marker = if menu.unreferenced_actions { " *" } else { "" };
                let _ = writeln!(out, "  {}{}", menu.named, marker);
                for section in &menu.sections {
                    if let Some(named) = &section.named {
                        let _ = writeln!(out, "    [{}]", named);
                    }
                    for action in &section.actions {
                        let label = action.named.as_deref().unwrap_or(&action.id);
                        let _ = writeln!(
                            out,
                            "      {} ({}#{})",
                            label, action.object_type, action.id
                        );
                    }
                }
            }
        }
        out
    }
}

/// Per-class layout resource.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub described_as: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class_fa: Option<String>,
    #[serde(default)]
    pub members: Vec<MemberLayout>,
}

impl ObjectLayout {
    pub fn member(&self, id: &str) -> Option<&MemberLayout> {
        self.members.iter().find(|m| m.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MemberLayout {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub described_as: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class_fa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<Where>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,
}
