use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use crate::presentation::{
    http::{
        endpoints::root::{ApiState, EndpointsTags},
        errors::HttpError,
        mappers::{map_devtool_state, map_plugin, map_register_plugin, map_settings_request},
        requests::{EnabledRequestDto, PositionRequestDto, RegisterPluginRequestDto},
        responses::{
            DevToolSettingsDto, DevToolStateDto, PluginDto, RegisterPluginResponse,
            SelectedPageDto,
        },
    },
    models::DevToolActionKind,
};

#[derive(Clone)]
pub struct DevToolsEndpoints {
    state: Arc<ApiState>,
}

impl DevToolsEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi(prefix_path = "/api/devtools")]
impl DevToolsEndpoints {
    #[oai(path = "/state", method = "get", tag = EndpointsTags::DevTools)]
    pub async fn state(&self) -> Json<DevToolStateDto> {
        Json(map_devtool_state(&self.state.devtools.snapshot().await))
    }

    #[oai(path = "/mode/:action", method = "post", tag = EndpointsTags::DevTools)]
    pub async fn change_mode(&self, action: Path<DevToolActionKind>) -> Json<DevToolStateDto> {
        let snapshot = self.state.devtools.apply(action.0.into()).await;
        Json(map_devtool_state(&snapshot))
    }

    #[oai(path = "/position", method = "put", tag = EndpointsTags::DevTools)]
    pub async fn set_position(&self, request: Json<PositionRequestDto>) -> Json<DevToolStateDto> {
        let snapshot = self
            .state
            .devtools
            .set_position(request.position.into())
            .await;
        Json(map_devtool_state(&snapshot))
    }

    #[oai(path = "/settings", method = "put", tag = EndpointsTags::DevTools)]
    pub async fn update_settings(
        &self,
        request: Json<DevToolSettingsDto>,
    ) -> Json<DevToolStateDto> {
        let snapshot = self
            .state
            .devtools
            .update_settings(map_settings_request(&request.0))
            .await;
        Json(map_devtool_state(&snapshot))
    }

    #[oai(path = "/plugins", method = "get", tag = EndpointsTags::DevTools)]
    pub async fn list_plugins(&self) -> Json<Vec<PluginDto>> {
        let plugins = self.state.devtools.plugins().await;
        Json(plugins.iter().map(map_plugin).collect())
    }

    #[oai(path = "/plugins/:id", method = "get", tag = EndpointsTags::DevTools)]
    pub async fn get_plugin(&self, id: Path<String>) -> PoemResult<Json<PluginDto>> {
        let plugin = self
            .state
            .devtools
            .plugin(&id.0)
            .await
            .ok_or_else(|| HttpError::not_found(format!("plugin {} not found", id.0)))?;

        Ok(Json(map_plugin(&plugin)))
    }

    /// Registers a plugin, replacing any plugin with the same id.
    #[oai(path = "/plugins", method = "post", tag = EndpointsTags::DevTools)]
    pub async fn register_plugin(
        &self,
        request: Json<RegisterPluginRequestDto>,
    ) -> RegisterPluginResponse {
        let plugin = self
            .state
            .devtools
            .register(map_register_plugin(request.0))
            .await;
        RegisterPluginResponse::Created(Json(map_plugin(&plugin)))
    }

    #[oai(path = "/plugins/:id", method = "delete", tag = EndpointsTags::DevTools)]
    pub async fn unregister_plugin(&self, id: Path<String>) -> PoemResult<Json<DevToolStateDto>> {
        self.state.devtools.unregister(&id.0).await?;
        Ok(Json(map_devtool_state(&self.state.devtools.snapshot().await)))
    }

    #[oai(path = "/plugins/:id/activate", method = "post", tag = EndpointsTags::DevTools)]
    pub async fn activate_plugin(&self, id: Path<String>) -> PoemResult<Json<PluginDto>> {
        let plugin = self.state.devtools.activate(&id.0).await?;
        Ok(Json(map_plugin(&plugin)))
    }

    #[oai(path = "/plugins/:id/deactivate", method = "post", tag = EndpointsTags::DevTools)]
    pub async fn deactivate_plugin(&self, id: Path<String>) -> PoemResult<Json<PluginDto>> {
        let plugin = self.state.devtools.deactivate(&id.0).await?;
        Ok(Json(map_plugin(&plugin)))
    }

    #[oai(path = "/plugins/:id/enabled", method = "put", tag = EndpointsTags::DevTools)]
    pub async fn set_plugin_enabled(
        &self,
        id: Path<String>,
        request: Json<EnabledRequestDto>,
    ) -> PoemResult<Json<PluginDto>> {
        let plugin = self
            .state
            .devtools
            .set_enabled(&id.0, request.enabled)
            .await?;
        Ok(Json(map_plugin(&plugin)))
    }

    #[oai(path = "/plugins/:id/pin", method = "post", tag = EndpointsTags::DevTools)]
    pub async fn pin_plugin(&self, id: Path<String>) -> PoemResult<Json<PluginDto>> {
        let plugin = self.state.devtools.pin(&id.0).await?;
        Ok(Json(map_plugin(&plugin)))
    }

    /// Unpinning an unknown id is accepted so stale pins can be cleaned up.
    #[oai(path = "/plugins/:id/unpin", method = "post", tag = EndpointsTags::DevTools)]
    pub async fn unpin_plugin(&self, id: Path<String>) -> Json<DevToolStateDto> {
        Json(map_devtool_state(&self.state.devtools.unpin(&id.0).await))
    }

    #[oai(path = "/selection", method = "put", tag = EndpointsTags::DevTools)]
    pub async fn select_page(
        &self,
        request: Json<SelectedPageDto>,
    ) -> PoemResult<Json<DevToolStateDto>> {
        let snapshot = self
            .state
            .devtools
            .select_page(&request.plugin_id, &request.page_id)
            .await?;
        Ok(Json(map_devtool_state(&snapshot)))
    }

    #[oai(path = "/selection", method = "delete", tag = EndpointsTags::DevTools)]
    pub async fn clear_selection(&self) -> Json<DevToolStateDto> {
        Json(map_devtool_state(&self.state.devtools.clear_selection().await))
    }
}
