use std::sync::Mutex;

use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

use crate::{application::services::system_metrics::SystemMetrics, domain::models::MemoryUsage};

/// Samples memory for the current process.
pub struct SysinfoMetrics {
    pid: Option<Pid>,
    system: Mutex<System>,
}

impl SysinfoMetrics {
    pub fn new() -> Self {
        let pid = sysinfo::get_current_pid()
            .inspect_err(|err| tracing::warn!(error = %err, "cannot resolve current pid"))
            .ok();

        Self {
            pid,
            system: Mutex::new(System::new()),
        }
    }
}

impl Default for SysinfoMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemMetrics for SysinfoMetrics {
    fn memory(&self) -> MemoryUsage {
        let Ok(mut system) = self.system.lock() else {
            return MemoryUsage::default();
        };
        system.refresh_memory();

        let mut usage = MemoryUsage {
            system_total_bytes: system.total_memory(),
            ..Default::default()
        };

        if let Some(pid) = self.pid {
            system.refresh_processes_specifics(
                ProcessesToUpdate::Some(&[pid]),
                true,
                ProcessRefreshKind::nothing().with_memory(),
            );
            if let Some(process) = system.process(pid) {
                usage.resident_bytes = process.memory();
                usage.virtual_bytes = process.virtual_memory();
            }
        }
        usage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_current_process() {
        let usage = SysinfoMetrics::new().memory();
        assert!(usage.system_total_bytes > 0);
    }
}
