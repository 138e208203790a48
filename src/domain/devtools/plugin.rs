use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PluginMetadata {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub version: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PluginPage {
    pub id: String,
    pub title: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub children: Vec<PluginPage>,
}

impl PluginPage {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: None,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<PluginPage>) -> Self {
        self.children = children;
        self
    }

    fn find(&self, page_id: &str) -> Option<&PluginPage> {
        if self.id == page_id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(page_id))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageGroup {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub pages: Vec<PluginPage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PluginDescriptor {
    pub id: String,
    pub metadata: PluginMetadata,
    #[serde(default)]
    pub groups: Vec<PageGroup>,
    pub enabled: bool,
}

impl PluginDescriptor {
    /// Depth-first search across every group and nested child page.
    pub fn find_page(&self, page_id: &str) -> Option<&PluginPage> {
        self.groups
            .iter()
            .flat_map(|group| group.pages.iter())
            .find_map(|page| page.find(page_id))
    }
}

/// Plugins that ship with the service and are registered at startup.
pub fn core_plugins() -> Vec<PluginDescriptor> {
    vec![
        PluginDescriptor {
            id: "health".to_string(),
            metadata: PluginMetadata {
                name: "Health".to_string(),
                description: Some("Process and database health".to_string()),
                icon: Some("activity".to_string()),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
                author: None,
            },
            groups: vec![PageGroup {
                id: "status".to_string(),
                title: "Status".to_string(),
                pages: vec![
                    PluginPage::new("health-overview", "Overview"),
                    PluginPage::new("health-database", "Database"),
                ],
            }],
            enabled: true,
        },
        PluginDescriptor {
            id: "api-explorer".to_string(),
            metadata: PluginMetadata {
                name: "API Explorer".to_string(),
                description: Some("Browse the HTTP surface".to_string()),
                icon: Some("route".to_string()),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
                author: None,
            },
            groups: vec![PageGroup {
                id: "endpoints".to_string(),
                title: "Endpoints".to_string(),
                pages: vec![PluginPage::new("api-routes", "Routes").with_children(vec![
                    PluginPage::new("api-routes-users", "Users"),
                    PluginPage::new("api-routes-auth", "Auth"),
                ])],
            }],
            enabled: true,
        },
    ]
}
