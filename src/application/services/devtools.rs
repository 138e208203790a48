use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    application::services::storage::KeyValueStorage,
    domain::{
        devtools::{
            DevToolAction, DevToolMode, DevToolPosition, DevToolSettings, PersistedDevToolState,
            PluginDescriptor, PluginRegistry, STATE_STORAGE_KEY, SelectedPage,
        },
        errors::{DomainError, DomainResult},
    },
};

#[derive(Debug, Clone)]
pub struct DevToolSnapshot {
    pub mode: DevToolMode,
    pub position: DevToolPosition,
    pub settings: DevToolSettings,
    pub pinned_plugins: Vec<String>,
    pub active_plugins: Vec<String>,
    pub selected_page: Option<SelectedPage>,
}

#[derive(Debug, Clone)]
pub struct PluginView {
    pub descriptor: PluginDescriptor,
    pub active: bool,
    pub pinned: bool,
}

struct DevToolsState {
    mode: DevToolMode,
    position: DevToolPosition,
    settings: DevToolSettings,
    registry: PluginRegistry,
}

impl DevToolsState {
    fn snapshot(&self) -> DevToolSnapshot {
        DevToolSnapshot {
            mode: self.mode,
            position: self.position,
            settings: self.settings.clone(),
            pinned_plugins: self.registry.pinned().to_vec(),
            active_plugins: self.registry.active().to_vec(),
            selected_page: self.registry.selected().cloned(),
        }
    }

    fn persisted(&self) -> PersistedDevToolState {
        PersistedDevToolState {
            position: self.position,
            pinned_plugins: self.registry.pinned().to_vec(),
            settings: self.settings.clone(),
            active_plugins: self.registry.active().to_vec(),
            disabled_plugins: self.registry.disabled(),
        }
    }

    fn view(&self, descriptor: &PluginDescriptor) -> PluginView {
        PluginView {
            descriptor: descriptor.clone(),
            active: self.registry.is_active(&descriptor.id),
            pinned: self.registry.is_pinned(&descriptor.id),
        }
    }
}

/// Devtools panel state shared by all requests: visibility mode, plugin
/// registry and the preferences persisted under [`STATE_STORAGE_KEY`].
pub struct DevToolsService {
    storage: Arc<dyn KeyValueStorage>,
    state: RwLock<DevToolsState>,
}

impl DevToolsService {
    /// Registers `plugins` and restores saved preferences. Missing or
    /// unreadable saved state falls back to defaults.
    pub async fn load(storage: Arc<dyn KeyValueStorage>, plugins: Vec<PluginDescriptor>) -> Self {
        let mut registry = PluginRegistry::new();
        for plugin in plugins {
            registry.register(plugin);
        }

        let saved = read_saved_state(storage.as_ref()).await;
        registry.restore(
            saved.pinned_plugins,
            saved.active_plugins,
            saved.disabled_plugins,
        );

        Self {
            storage,
            state: RwLock::new(DevToolsState {
                mode: DevToolMode::default(),
                position: saved.position,
                settings: saved.settings,
                registry,
            }),
        }
    }

    pub async fn snapshot(&self) -> DevToolSnapshot {
        self.state.read().await.snapshot()
    }

    pub async fn apply(&self, action: DevToolAction) -> DevToolSnapshot {
        let mut state = self.state.write().await;
        state.mode = action.apply(state.mode);
        tracing::debug!(?action, mode = ?state.mode, "devtools mode changed");
        state.snapshot()
    }

    pub async fn set_position(&self, position: DevToolPosition) -> DevToolSnapshot {
        let mut state = self.state.write().await;
        if state.position != position {
            state.position = position;
            self.persist(&state).await;
        }
        state.snapshot()
    }

    pub async fn update_settings(&self, settings: DevToolSettings) -> DevToolSnapshot {
        let mut state = self.state.write().await;
        if state.settings != settings {
            state.settings = settings;
            self.persist(&state).await;
        }
        state.snapshot()
    }

    pub async fn plugins(&self) -> Vec<PluginView> {
        let state = self.state.read().await;
        state
            .registry
            .list()
            .iter()
            .map(|descriptor| state.view(descriptor))
            .collect()
    }

    pub async fn plugin(&self, id: &str) -> Option<PluginView> {
        let state = self.state.read().await;
        state.registry.get(id).map(|descriptor| state.view(descriptor))
    }

    pub async fn register(&self, descriptor: PluginDescriptor) -> PluginView {
        let mut state = self.state.write().await;
        let registered = descriptor.clone();
        let was_active = state.registry.is_active(&registered.id);

        if state.registry.register(descriptor) {
            tracing::info!(plugin = %registered.id, "replaced devtools plugin");
        } else {
            tracing::info!(plugin = %registered.id, "registered devtools plugin");
        }
        if was_active != state.registry.is_active(&registered.id) {
            self.persist(&state).await;
        }

        state.view(&registered)
    }

    pub async fn unregister(&self, id: &str) -> DomainResult<PluginDescriptor> {
        let mut state = self.state.write().await;
        let was_active = state.registry.is_active(id);
        let removed = state.registry.unregister(id)?;
        if was_active {
            self.persist(&state).await;
        }
        tracing::info!(plugin = %id, "unregistered devtools plugin");
        Ok(removed)
    }

    pub async fn activate(&self, id: &str) -> DomainResult<PluginView> {
        self.mutate_plugin(id, |registry| registry.activate(id)).await
    }

    pub async fn deactivate(&self, id: &str) -> DomainResult<PluginView> {
        self.mutate_plugin(id, |registry| registry.deactivate(id)).await
    }

    pub async fn set_enabled(&self, id: &str, enabled: bool) -> DomainResult<PluginView> {
        self.mutate_plugin(id, |registry| registry.set_enabled(id, enabled))
            .await
    }

    pub async fn pin(&self, id: &str) -> DomainResult<PluginView> {
        self.mutate_plugin(id, |registry| registry.pin(id)).await
    }

    /// Works for ids that are no longer registered so stale pins can be dropped.
    pub async fn unpin(&self, id: &str) -> DevToolSnapshot {
        let mut state = self.state.write().await;
        if state.registry.unpin(id) {
            self.persist(&state).await;
        }
        state.snapshot()
    }

    pub async fn select_page(&self, plugin_id: &str, page_id: &str) -> DomainResult<DevToolSnapshot> {
        let mut state = self.state.write().await;
        state.registry.select_page(plugin_id, page_id)?;
        Ok(state.snapshot())
    }

    pub async fn clear_selection(&self) -> DevToolSnapshot {
        let mut state = self.state.write().await;
        state.registry.clear_selection();
        state.snapshot()
    }

    async fn mutate_plugin<F>(&self, id: &str, mutation: F) -> DomainResult<PluginView>
    where
        F: FnOnce(&mut PluginRegistry) -> DomainResult<bool>,
    {
        let mut state = self.state.write().await;
        let changed = mutation(&mut state.registry)?;
        if changed {
            self.persist(&state).await;
        }

        let descriptor = state
            .registry
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("plugin {id}")))?;
        Ok(state.view(&descriptor))
    }

    async fn persist(&self, state: &DevToolsState) {
        let result = match serde_json::to_string(&state.persisted()) {
            Ok(raw) => self.storage.set_item(STATE_STORAGE_KEY, &raw).await,
            Err(err) => Err(err.into()),
        };
        if let Err(err) = result {
            tracing::warn!(error = %err, "failed to persist devtools state");
        }
    }
}

async fn read_saved_state(storage: &dyn KeyValueStorage) -> PersistedDevToolState {
    let raw = match storage.get_item(STATE_STORAGE_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return PersistedDevToolState::default(),
        Err(err) => {
            tracing::warn!(error = %err, "failed to read devtools state, using defaults");
            return PersistedDevToolState::default();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "discarding unreadable devtools state");
        PersistedDevToolState::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::devtools::{Theme, core_plugins},
        infrastructure::storage::in_memory::InMemoryStorage,
    };

    async fn service(storage: Arc<InMemoryStorage>) -> DevToolsService {
        DevToolsService::load(storage, core_plugins()).await
    }

    #[tokio::test]
    async fn preferences_survive_a_reload() {
        let storage = Arc::new(InMemoryStorage::new());
        let devtools = service(storage.clone()).await;

        devtools.pin("health").await.unwrap();
        devtools.activate("api-explorer").await.unwrap();
        devtools.set_position(DevToolPosition::TopLeft).await;
        devtools.apply(DevToolAction::Expand).await;

        let reloaded = service(storage.clone()).await;
        let snapshot = reloaded.snapshot().await;

        assert_eq!(snapshot.position, DevToolPosition::TopLeft);
        assert_eq!(snapshot.pinned_plugins, vec!["health".to_string()]);
        assert_eq!(snapshot.active_plugins, vec!["api-explorer".to_string()]);
        assert_eq!(snapshot.mode, DevToolMode::None);
    }

    #[tokio::test]
    async fn corrupt_state_falls_back_to_defaults() {
        let storage = Arc::new(InMemoryStorage::new());
        storage.set_item(STATE_STORAGE_KEY, "{not json").await.unwrap();

        let snapshot = service(storage).await.snapshot().await;

        assert_eq!(snapshot.position, DevToolPosition::BottomRight);
        assert!(snapshot.pinned_plugins.is_empty());
    }

    #[tokio::test]
    async fn repeated_activation_does_not_rewrite_storage() {
        let storage = Arc::new(InMemoryStorage::new());
        let devtools = service(storage.clone()).await;

        devtools.activate("health").await.unwrap();
        storage.remove_item(STATE_STORAGE_KEY).await.unwrap();
        let view = devtools.activate("health").await.unwrap();

        assert!(view.active);
        assert!(storage.get_item(STATE_STORAGE_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unregister_clears_selected_page() {
        let devtools = service(Arc::new(InMemoryStorage::new())).await;
        devtools.select_page("api-explorer", "api-routes-users").await.unwrap();

        devtools.unregister("api-explorer").await.unwrap();

        assert!(devtools.snapshot().await.selected_page.is_none());
        assert!(matches!(
            devtools.activate("api-explorer").await,
            Err(DomainError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn settings_survive_a_reload() {
        let storage = Arc::new(InMemoryStorage::new());
        let devtools = service(storage.clone()).await;

        devtools
            .update_settings(DevToolSettings {
                theme: Theme::Dark,
                open_on_start: true,
            })
            .await;

        let snapshot = service(storage).await.snapshot().await;

        assert_eq!(snapshot.settings.theme, Theme::Dark);
        assert!(snapshot.settings.open_on_start);
    }

    #[tokio::test]
    async fn disabled_plugins_stay_disabled_after_a_reload() {
        let storage = Arc::new(InMemoryStorage::new());
        let devtools = service(storage.clone()).await;
        devtools.activate("health").await.unwrap();

        let view = devtools.set_enabled("health", false).await.unwrap();
        assert!(!view.active);

        let reloaded = service(storage).await;
        let plugin = reloaded.plugin("health").await.unwrap();

        assert!(!plugin.descriptor.enabled);
        assert!(!plugin.active);
        assert!(matches!(
            reloaded.activate("health").await,
            Err(DomainError::Validation(_))
        ));
    }
}
