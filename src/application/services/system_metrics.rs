use crate::domain::models::MemoryUsage;

pub trait SystemMetrics: Send + Sync {
    fn memory(&self) -> MemoryUsage;
}
