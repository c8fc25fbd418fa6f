// Aggregate report and its sections (one per request, never cached)

use serde::Serialize;

use super::{
    CpuInfo, DiskSpace, HostIdentity, MemoryStats, NetworkReport, ProcessMemory, UptimeStats,
};
use crate::format::{format_bytes, format_uptime, round2};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostInfo {
    pub hostname: String,
    pub platform: String,
    pub arch: String,
    pub os_version: String,
}

impl From<HostIdentity> for HostInfo {
    fn from(id: HostIdentity) -> Self {
        Self {
            hostname: id.hostname,
            platform: id.platform,
            arch: id.arch,
            os_version: id.os_version,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

impl LoadAverage {
    pub fn rounded(self) -> Self {
        Self {
            one: round2(self.one),
            five: round2(self.five),
            fifteen: round2(self.fifteen),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuReport {
    pub count: u32,
    pub physical_cores: u32,
    pub model: String,
    pub load_average: LoadAverage,
    pub system_usage_percent: f64,
    pub process_usage_percent: f64,
}

impl CpuReport {
    pub fn new(info: CpuInfo, load: LoadAverage, system_usage: f64, process_usage: f64) -> Self {
        Self {
            count: info.logical_cores,
            physical_cores: info.physical_cores,
            model: info.model,
            load_average: load.rounded(),
            system_usage_percent: system_usage,
            process_usage_percent: process_usage,
        }
    }
}

fn usage_percent(used: u64, total: u64) -> f64 {
    if total > 0 {
        round2((used as f64 / total as f64) * 100.0)
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryReport {
    pub total_bytes: u64,
    pub free_bytes: u64,
    pub used_bytes: u64,
    pub usage_percent: f64,
    pub total: String,
    pub free: String,
    pub used: String,
}

impl From<MemoryStats> for MemoryReport {
    fn from(m: MemoryStats) -> Self {
        let used = m.total.saturating_sub(m.free);
        Self {
            total_bytes: m.total,
            free_bytes: m.free,
            used_bytes: used,
            usage_percent: usage_percent(used, m.total),
            total: format_bytes(m.total),
            free: format_bytes(m.free),
            used: format_bytes(used),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskReport {
    pub path: String,
    pub total_bytes: u64,
    pub free_bytes: u64,
    pub used_bytes: u64,
    pub usage_percent: f64,
    pub total: String,
    pub free: String,
    pub used: String,
}

impl DiskReport {
    pub fn new(path: impl Into<String>, space: DiskSpace) -> Self {
        let used = space.total.saturating_sub(space.free);
        Self {
            path: path.into(),
            total_bytes: space.total,
            free_bytes: space.free,
            used_bytes: used,
            usage_percent: usage_percent(used, space.total),
            total: format_bytes(space.total),
            free: format_bytes(space.free),
            used: format_bytes(used),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UptimeReport {
    pub system_seconds: u64,
    pub system: String,
    pub process_seconds: u64,
    pub process: String,
}

impl From<UptimeStats> for UptimeReport {
    fn from(u: UptimeStats) -> Self {
        Self {
            system_seconds: u.system_secs,
            system: format_uptime(u.system_secs),
            process_seconds: u.process_secs,
            process: format_uptime(u.process_secs),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessReport {
    pub pid: u32,
    pub resident_bytes: u64,
    pub virtual_bytes: u64,
    pub heap_allocated_bytes: Option<u64>,
    pub heap_resident_bytes: Option<u64>,
    pub resident: String,
    #[serde(rename = "virtual")]
    pub virtual_size: String,
    pub heap_allocated: Option<String>,
    pub heap_resident: Option<String>,
}

impl From<ProcessMemory> for ProcessReport {
    fn from(p: ProcessMemory) -> Self {
        Self {
            pid: p.pid,
            resident_bytes: p.resident,
            virtual_bytes: p.virtual_memory,
            heap_allocated_bytes: p.heap_allocated,
            heap_resident_bytes: p.heap_resident,
            resident: format_bytes(p.resident),
            virtual_size: format_bytes(p.virtual_memory),
            heap_allocated: p.heap_allocated.map(format_bytes),
            heap_resident: p.heap_resident.map(format_bytes),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemReport {
    pub timestamp: String,
    pub host: HostInfo,
    pub cpu: CpuReport,
    pub memory: MemoryReport,
    pub disk: DiskReport,
    pub uptime: UptimeReport,
    pub process: ProcessReport,
    pub network: NetworkReport,
}

/// `/api/metrics/system` subset.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemView<'a> {
    pub timestamp: &'a str,
    pub host: &'a HostInfo,
    pub cpu: &'a CpuReport,
    pub memory: &'a MemoryReport,
    pub disk: &'a DiskReport,
    pub process: &'a ProcessReport,
}

/// `/api/metrics/uptime` subset.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UptimeView<'a> {
    pub timestamp: &'a str,
    #[serde(flatten)]
    pub uptime: &'a UptimeReport,
}

impl SystemReport {
    pub fn system_view(&self) -> SystemView<'_> {
        SystemView {
            timestamp: &self.timestamp,
            host: &self.host,
            cpu: &self.cpu,
            memory: &self.memory,
            disk: &self.disk,
            process: &self.process,
        }
    }

    pub fn uptime_view(&self) -> UptimeView<'_> {
        UptimeView {
            timestamp: &self.timestamp,
            uptime: &self.uptime,
        }
    }

    pub fn network_view(&self) -> &NetworkReport {
        &self.network
    }
}
