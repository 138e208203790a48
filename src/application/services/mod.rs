pub mod auth_gateway;
pub mod devtools;
pub mod storage;
pub mod system_metrics;
