// Seam between report assembly and the OS collaborators

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ReportError;
use crate::models::{
    CoreTickSnapshot, CpuInfo, DiskSpace, HostIdentity, InterfaceAddress, InterfaceCounters,
    LoadAverage, MemoryStats, ProcessCpuSnapshot, ProcessMemory, UptimeStats,
};

/// Point-in-time host readings. Methods may block on filesystem or syscalls; async
/// callers run them on the blocking pool.
pub trait HostSource: Send + Sync + 'static {
    /// Per-core tick counters, in a stable core order.
    fn cpu_ticks(&self) -> anyhow::Result<Vec<CoreTickSnapshot>>;

    /// Cumulative CPU time of this process plus a monotonic wall-clock mark.
    fn process_cpu(&self) -> anyhow::Result<ProcessCpuSnapshot>;

    fn cpu_info(&self) -> anyhow::Result<CpuInfo>;

    fn load_average(&self) -> LoadAverage;

    fn memory(&self) -> anyhow::Result<MemoryStats>;

    /// Size and free space of the filesystem mounted at `path`.
    fn disk_space(&self, path: &str) -> anyhow::Result<DiskSpace>;

    fn uptime(&self) -> UptimeStats;

    fn process_memory(&self) -> anyhow::Result<ProcessMemory>;

    fn host_identity(&self) -> HostIdentity;

    /// IPv4 addresses bound to each interface (loopback included; callers filter).
    fn network_interfaces(&self) -> anyhow::Result<Vec<InterfaceAddress>>;

    /// Host-stats collaborator: cumulative counters keyed by interface name.
    fn network_counters(&self) -> anyhow::Result<HashMap<String, InterfaceCounters>>;
}

/// Runs one collaborator call on the blocking pool, tagging failures with `what`.
pub(crate) async fn read<T, F>(
    source: &Arc<dyn HostSource>,
    what: &'static str,
    f: F,
) -> Result<T, ReportError>
where
    T: Send + 'static,
    F: FnOnce(&dyn HostSource) -> anyhow::Result<T> + Send + 'static,
{
    let source = source.clone();
    tokio::task::spawn_blocking(move || f(source.as_ref()))
        .await?
        .map_err(|e| ReportError::unavailable(what, e))
}
