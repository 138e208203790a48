pub mod plugin;
pub mod registry;
pub mod state;
pub mod visibility;

pub use plugin::{PageGroup, PluginDescriptor, PluginMetadata, PluginPage, core_plugins};
pub use registry::{PluginRegistry, SelectedPage};
pub use state::{
    DevToolPosition, DevToolSettings, PersistedDevToolState, STATE_STORAGE_KEY, Theme,
};
pub use visibility::{DevToolAction, DevToolMode};
