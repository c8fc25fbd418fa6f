// Assembles one SystemReport from concurrent collaborator reads

use std::sync::Arc;
use std::time::Duration;

use tracing::instrument;

use crate::error::ReportError;
use crate::host_source::{HostSource, read};
use crate::models::*;
use crate::sampler::{sample_process_usage, sample_system_usage};

/// Filesystem root the disk figures describe.
pub fn default_disk_path() -> &'static str {
    if cfg!(windows) { "C:\\" } else { "/" }
}

pub struct Collector {
    source: Arc<dyn HostSource>,
    sample_interval: Duration,
    disk_path: String,
}

impl Collector {
    pub fn new(
        source: Arc<dyn HostSource>,
        sample_interval: Duration,
        disk_path: impl Into<String>,
    ) -> Self {
        Self {
            source,
            sample_interval,
            disk_path: disk_path.into(),
        }
    }

    pub fn disk_path(&self) -> &str {
        &self.disk_path
    }

    /// Builds a fresh report. Disk, CPU, memory and process failures fail the whole
    /// report; network failures degrade to an empty section.
    #[instrument(skip(self), fields(disk_path = %self.disk_path))]
    pub async fn collect(&self) -> Result<SystemReport, ReportError> {
        let source = &self.source;
        let disk_path = self.disk_path.clone();

        let (core, network) = tokio::join!(
            async {
                tokio::try_join!(
                    read(source, "disk space", move |s| s.disk_space(&disk_path)),
                    sample_system_usage(source.clone(), self.sample_interval),
                    sample_process_usage(source.clone(), self.sample_interval),
                    read(source, "memory", |s| s.memory()),
                    read(source, "cpu info", |s| s.cpu_info()),
                    read(source, "process memory", |s| s.process_memory()),
                    read(source, "host identity", |s| Ok(s.host_identity())),
                    read(source, "uptime", |s| Ok(s.uptime())),
                    read(source, "load average", |s| Ok(s.load_average())),
                )
            },
            self.collect_network(),
        );
        let (disk, system_usage, process_usage, memory, cpu_info, process, host, uptime, load) =
            core?;

        tracing::debug!(
            system_usage,
            process_usage,
            interfaces = network.interfaces.len(),
            "report collected"
        );

        Ok(SystemReport {
            timestamp: crate::now_rfc3339(),
            host: host.into(),
            cpu: CpuReport::new(cpu_info, load, system_usage, process_usage),
            memory: memory.into(),
            disk: DiskReport::new(self.disk_path.clone(), disk),
            uptime: uptime.into(),
            process: process.into(),
            network,
        })
    }

    async fn collect_network(&self) -> NetworkReport {
        let (addresses, counters) = tokio::join!(
            read(&self.source, "network interfaces", |s| s.network_interfaces()),
            read(&self.source, "network stats", |s| s.network_counters()),
        );
        match (addresses, counters) {
            (Ok(addresses), Ok(counters)) => NetworkReport::assemble(addresses, &counters),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(
                    error = %e,
                    "network stats unavailable; reporting empty network section"
                );
                NetworkReport::unavailable()
            }
        }
    }
}
