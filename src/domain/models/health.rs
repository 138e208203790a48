use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OverallStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ComponentStatus {
    Up,
    Down,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseCheck {
    pub status: ComponentStatus,
    pub latency_ms: u64,
    pub error: Option<String>,
}

impl DatabaseCheck {
    pub fn is_up(&self) -> bool {
        self.status == ComponentStatus::Up
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemoryUsage {
    pub resident_bytes: u64,
    pub virtual_bytes: u64,
    pub system_total_bytes: u64,
}

#[derive(Debug, Clone)]
pub struct HealthSnapshot {
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct Readiness {
    pub ready: bool,
    pub database: DatabaseCheck,
}

#[derive(Debug, Clone)]
pub struct DetailedHealth {
    pub status: OverallStatus,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub version: &'static str,
    pub memory: MemoryUsage,
    pub database: DatabaseCheck,
}
