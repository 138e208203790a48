use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use crate::presentation::http::{
    endpoints::root::{ApiState, EndpointsTags},
    mappers::{map_database_check, map_detailed_health, map_health},
    responses::{DetailedHealthDto, HealthDto, LivenessDto, ReadinessDto, ReadinessResponse},
};

#[derive(Clone)]
pub struct HealthEndpoints {
    state: Arc<ApiState>,
}

impl HealthEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl HealthEndpoints {
    #[oai(path = "/health", method = "get", tag = EndpointsTags::Health)]
    pub async fn health(&self) -> Json<HealthDto> {
        Json(map_health(&self.state.health_usecase.check()))
    }

    #[oai(path = "/health/live", method = "get", tag = EndpointsTags::Health)]
    pub async fn live(&self) -> Json<LivenessDto> {
        Json(LivenessDto {
            status: "alive".to_string(),
            uptime_seconds: self.state.health_usecase.uptime_seconds(),
        })
    }

    /// Mirrors the database probe: 503 while the database is unreachable.
    #[oai(path = "/health/ready", method = "get", tag = EndpointsTags::Health)]
    pub async fn ready(&self) -> ReadinessResponse {
        let readiness = self.state.health_usecase.ready().await;
        let body = Json(ReadinessDto {
            ready: readiness.ready,
            database: map_database_check(&readiness.database),
        });

        if readiness.ready {
            ReadinessResponse::Ready(body)
        } else {
            ReadinessResponse::NotReady(body)
        }
    }

    #[oai(path = "/health/detailed", method = "get", tag = EndpointsTags::Health)]
    pub async fn detailed(&self) -> Json<DetailedHealthDto> {
        Json(map_detailed_health(&self.state.health_usecase.detailed().await))
    }
}
