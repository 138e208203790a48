use std::{sync::Arc, time::Instant};

use chrono::Utc;

use crate::{
    application::services::system_metrics::SystemMetrics,
    domain::{
        models::{
            ComponentStatus, DatabaseCheck, DetailedHealth, HealthSnapshot, OverallStatus,
            Readiness,
        },
        repositories::DatabaseProbe,
    },
};

/// Reported in place of the probe error, which may carry connection details.
const DATABASE_UNREACHABLE: &str = "database unreachable";

pub struct HealthUseCase {
    probe: Arc<dyn DatabaseProbe>,
    metrics: Arc<dyn SystemMetrics>,
    started_at: Instant,
}

impl HealthUseCase {
    pub fn new(probe: Arc<dyn DatabaseProbe>, metrics: Arc<dyn SystemMetrics>) -> Self {
        Self {
            probe,
            metrics,
            started_at: Instant::now(),
        }
    }

    pub fn check(&self) -> HealthSnapshot {
        HealthSnapshot {
            timestamp: Utc::now(),
            uptime_seconds: self.uptime_seconds(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub async fn ready(&self) -> Readiness {
        let database = self.check_database().await;
        Readiness {
            ready: database.is_up(),
            database,
        }
    }

    pub async fn detailed(&self) -> DetailedHealth {
        let database = self.check_database().await;
        let status = if database.is_up() {
            OverallStatus::Ok
        } else {
            OverallStatus::Degraded
        };

        DetailedHealth {
            status,
            timestamp: Utc::now(),
            uptime_seconds: self.uptime_seconds(),
            version: env!("CARGO_PKG_VERSION"),
            memory: self.metrics.memory(),
            database,
        }
    }

    async fn check_database(&self) -> DatabaseCheck {
        let started = Instant::now();
        let result = self.probe.ping().await;
        let latency_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(()) => DatabaseCheck {
                status: ComponentStatus::Up,
                latency_ms,
                error: None,
            },
            Err(err) => {
                tracing::warn!(error = ?err, "database probe failed");
                DatabaseCheck {
                    status: ComponentStatus::Down,
                    latency_ms,
                    error: Some(DATABASE_UNREACHABLE.to_string()),
                }
            }
        }
    }
}
