use serde::{Deserialize, Serialize};

/// Storage key holding the serialized [`PersistedDevToolState`].
pub const STATE_STORAGE_KEY: &str = "devtool-state";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DevToolPosition {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DevToolSettings {
    pub theme: Theme,
    pub open_on_start: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedDevToolState {
    pub position: DevToolPosition,
    pub pinned_plugins: Vec<String>,
    pub settings: DevToolSettings,
    pub active_plugins: Vec<String>,
    pub disabled_plugins: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_state_written_without_active_plugins() {
        let raw = r#"{"position":"top-left","pinnedPlugins":["health"],"settings":{"theme":"dark"}}"#;
        let state: PersistedDevToolState = serde_json::from_str(raw).unwrap();

        assert_eq!(state.position, DevToolPosition::TopLeft);
        assert_eq!(state.pinned_plugins, vec!["health".to_string()]);
        assert_eq!(state.settings.theme, Theme::Dark);
        assert!(!state.settings.open_on_start);
        assert!(state.active_plugins.is_empty());
        assert!(state.disabled_plugins.is_empty());
    }
}
