use serde::{Deserialize, Serialize};

use crate::domain::{
    devtools::plugin::{PluginDescriptor, PluginPage},
    errors::{DomainError, DomainResult},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectedPage {
    pub plugin_id: String,
    pub page_id: String,
}

/// In-memory plugin registry. Plugins keep their registration order; active
/// and pinned ids are ordered and duplicate-free.
///
/// Mutating methods return `Ok(true)` when state actually changed so callers
/// can skip persisting no-ops.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: Vec<PluginDescriptor>,
    active: Vec<String>,
    pinned: Vec<String>,
    selected: Option<SelectedPage>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the plugin, replacing any descriptor registered under the same id.
    /// Returns `true` when an existing descriptor was replaced.
    pub fn register(&mut self, descriptor: PluginDescriptor) -> bool {
        let disabled = !descriptor.enabled;
        let id = descriptor.id.clone();

        let replaced = match self.plugins.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                *existing = descriptor;
                true
            }
            None => {
                self.plugins.push(descriptor);
                false
            }
        };

        if disabled {
            self.active.retain(|active| active != &id);
        }
        replaced
    }

    pub fn unregister(&mut self, id: &str) -> DomainResult<PluginDescriptor> {
        let index = self
            .plugins
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| plugin_not_found(id))?;
        let removed = self.plugins.remove(index);

        self.active.retain(|active| active != id);
        if self
            .selected
            .as_ref()
            .is_some_and(|selected| selected.plugin_id == id)
        {
            self.selected = None;
        }
        Ok(removed)
    }

    pub fn get(&self, id: &str) -> Option<&PluginDescriptor> {
        self.plugins.iter().find(|p| p.id == id)
    }

    pub fn list(&self) -> &[PluginDescriptor] {
        &self.plugins
    }

    pub fn activate(&mut self, id: &str) -> DomainResult<bool> {
        let plugin = self.get(id).ok_or_else(|| plugin_not_found(id))?;
        if !plugin.enabled {
            return Err(DomainError::Validation(format!("plugin {id} is disabled")));
        }
        if self.is_active(id) {
            return Ok(false);
        }
        self.active.push(id.to_string());
        Ok(true)
    }

    pub fn deactivate(&mut self, id: &str) -> DomainResult<bool> {
        self.ensure_registered(id)?;
        let before = self.active.len();
        self.active.retain(|active| active != id);
        Ok(self.active.len() != before)
    }

    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> DomainResult<bool> {
        let plugin = self
            .plugins
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| plugin_not_found(id))?;
        let changed = plugin.enabled != enabled;
        plugin.enabled = enabled;

        if !enabled {
            self.active.retain(|active| active != id);
        }
        Ok(changed)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.iter().any(|active| active == id)
    }

    pub fn active(&self) -> &[String] {
        &self.active
    }

    pub fn pin(&mut self, id: &str) -> DomainResult<bool> {
        self.ensure_registered(id)?;
        if self.is_pinned(id) {
            return Ok(false);
        }
        self.pinned.push(id.to_string());
        Ok(true)
    }

    /// Unpinning does not require the plugin to be registered, so stale pins
    /// from a previous session can always be removed.
    pub fn unpin(&mut self, id: &str) -> bool {
        let before = self.pinned.len();
        self.pinned.retain(|pinned| pinned != id);
        self.pinned.len() != before
    }

    pub fn toggle_pin(&mut self, id: &str) -> DomainResult<bool> {
        if self.is_pinned(id) {
            self.unpin(id);
            Ok(false)
        } else {
            self.pin(id)?;
            Ok(true)
        }
    }

    pub fn is_pinned(&self, id: &str) -> bool {
        self.pinned.iter().any(|pinned| pinned == id)
    }

    pub fn pinned(&self) -> &[String] {
        &self.pinned
    }

    pub fn find_page(&self, plugin_id: &str, page_id: &str) -> Option<&PluginPage> {
        self.get(plugin_id)?.find_page(page_id)
    }

    pub fn select_page(&mut self, plugin_id: &str, page_id: &str) -> DomainResult<()> {
        self.ensure_registered(plugin_id)?;
        if self.find_page(plugin_id, page_id).is_none() {
            return Err(DomainError::NotFound(format!(
                "page {page_id} in plugin {plugin_id}"
            )));
        }
        self.selected = Some(SelectedPage {
            plugin_id: plugin_id.to_string(),
            page_id: page_id.to_string(),
        });
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&SelectedPage> {
        self.selected.as_ref()
    }

    /// Ids of registered plugins that are switched off.
    pub fn disabled(&self) -> Vec<String> {
        self.plugins
            .iter()
            .filter(|p| !p.enabled)
            .map(|p| p.id.clone())
            .collect()
    }

    /// Restores persisted preferences. Pins are kept verbatim since their
    /// plugins may register later; active ids are only kept for plugins that
    /// are currently registered and enabled. Disabled ids apply before the
    /// active set is rebuilt.
    pub fn restore(&mut self, pinned: Vec<String>, active: Vec<String>, disabled: Vec<String>) {
        for plugin in self.plugins.iter_mut() {
            if disabled.contains(&plugin.id) {
                plugin.enabled = false;
            }
        }

        self.pinned.clear();
        for id in pinned {
            if !self.is_pinned(&id) {
                self.pinned.push(id);
            }
        }

        self.active.clear();
        for id in active {
            let enabled = self.get(&id).is_some_and(|p| p.enabled);
            if enabled && !self.is_active(&id) {
                self.active.push(id);
            }
        }
    }

    fn ensure_registered(&self, id: &str) -> DomainResult<()> {
        self.get(id).map(|_| ()).ok_or_else(|| plugin_not_found(id))
    }
}

fn plugin_not_found(id: &str) -> DomainError {
    DomainError::NotFound(format!("plugin {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::devtools::plugin::{PageGroup, PluginMetadata};

    fn plugin(id: &str) -> PluginDescriptor {
        PluginDescriptor {
            id: id.to_string(),
            metadata: PluginMetadata {
                name: id.to_string(),
                description: None,
                icon: None,
                version: None,
                author: None,
            },
            groups: vec![PageGroup {
                id: "main".to_string(),
                title: "Main".to_string(),
                pages: vec![PluginPage::new("root", "Root")
                    .with_children(vec![PluginPage::new("nested", "Nested")])],
            }],
            enabled: true,
        }
    }

    #[test]
    fn activating_an_active_plugin_is_a_no_op() {
        let mut registry = PluginRegistry::new();
        registry.register(plugin("logs"));

        assert!(registry.activate("logs").unwrap());
        assert!(!registry.activate("logs").unwrap());
        assert_eq!(registry.active(), ["logs".to_string()]);
    }

    #[test]
    fn unregister_clears_selection_pointing_at_plugin() {
        let mut registry = PluginRegistry::new();
        registry.register(plugin("logs"));
        registry.register(plugin("network"));
        registry.activate("logs").unwrap();
        registry.pin("logs").unwrap();
        registry.select_page("logs", "nested").unwrap();

        registry.unregister("logs").unwrap();

        assert!(registry.selected().is_none());
        assert!(!registry.is_active("logs"));
        assert!(registry.is_pinned("logs"));
        assert_eq!(registry.list().len(), 1);
    }

    #[test]
    fn unregister_keeps_selection_for_other_plugins() {
        let mut registry = PluginRegistry::new();
        registry.register(plugin("logs"));
        registry.register(plugin("network"));
        registry.select_page("network", "root").unwrap();

        registry.unregister("logs").unwrap();

        assert_eq!(registry.selected().unwrap().plugin_id, "network");
    }

    #[test]
    fn disabled_plugins_cannot_be_activated() {
        let mut registry = PluginRegistry::new();
        registry.register(plugin("logs"));
        registry.activate("logs").unwrap();

        assert!(registry.set_enabled("logs", false).unwrap());
        assert!(!registry.is_active("logs"));
        assert!(matches!(
            registry.activate("logs"),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn unknown_plugins_are_not_found() {
        let mut registry = PluginRegistry::new();
        assert!(matches!(registry.activate("nope"), Err(DomainError::NotFound(_))));
        assert!(matches!(registry.unregister("nope"), Err(DomainError::NotFound(_))));
        assert!(matches!(
            registry.select_page("nope", "root"),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn select_page_searches_nested_children() {
        let mut registry = PluginRegistry::new();
        registry.register(plugin("logs"));

        registry.select_page("logs", "nested").unwrap();
        assert_eq!(registry.selected().unwrap().page_id, "nested");
        assert!(registry.select_page("logs", "missing").is_err());
    }

    #[test]
    fn register_replaces_in_place() {
        let mut registry = PluginRegistry::new();
        registry.register(plugin("a"));
        registry.register(plugin("b"));

        let mut updated = plugin("a");
        updated.metadata.name = "Renamed".to_string();
        assert!(registry.register(updated));

        let ids: Vec<_> = registry.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(registry.get("a").unwrap().metadata.name, "Renamed");
    }

    #[test]
    fn toggle_pin_round_trips() {
        let mut registry = PluginRegistry::new();
        registry.register(plugin("logs"));

        assert!(registry.toggle_pin("logs").unwrap());
        assert!(registry.is_pinned("logs"));
        assert!(!registry.toggle_pin("logs").unwrap());
        assert!(registry.pinned().is_empty());
    }

    #[test]
    fn restore_drops_active_ids_for_unknown_plugins() {
        let mut registry = PluginRegistry::new();
        registry.register(plugin("logs"));

        registry.restore(
            vec!["later".to_string(), "logs".to_string(), "logs".to_string()],
            vec!["logs".to_string(), "later".to_string()],
            Vec::new(),
        );

        assert_eq!(registry.pinned(), ["later".to_string(), "logs".to_string()]);
        assert_eq!(registry.active(), ["logs".to_string()]);
    }

    #[test]
    fn restore_applies_disabled_ids_before_active_ones() {
        let mut registry = PluginRegistry::new();
        registry.register(plugin("logs"));
        registry.register(plugin("network"));

        registry.restore(
            Vec::new(),
            vec!["logs".to_string(), "network".to_string()],
            vec!["logs".to_string()],
        );

        assert!(!registry.get("logs").unwrap().enabled);
        assert_eq!(registry.active(), ["network".to_string()]);
        assert_eq!(registry.disabled(), vec!["logs".to_string()]);
    }
}
