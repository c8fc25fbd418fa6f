// Raw readings returned by host collaborators before they are shaped into a report

use std::net::Ipv4Addr;
use std::time::Duration;

/// Cumulative per-core tick counters since boot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoreTickSnapshot {
    pub user: u64,
    pub nice: u64,
    pub sys: u64,
    pub irq: u64,
    pub idle: u64,
}

/// Cumulative CPU time of the calling process plus a monotonic wall-clock mark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessCpuSnapshot {
    pub user_micros: u64,
    pub system_micros: u64,
    /// Offset from the source's fixed anchor; only differences are meaningful.
    pub wall_clock: Duration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuInfo {
    pub logical_cores: u32,
    pub physical_cores: u32,
    pub model: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStats {
    pub total: u64,
    pub free: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiskSpace {
    pub total: u64,
    pub free: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UptimeStats {
    pub system_secs: u64,
    pub process_secs: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessMemory {
    pub pid: u32,
    pub resident: u64,
    pub virtual_memory: u64,
    /// Allocator-reported bytes; `None` when the allocator exposes no statistics.
    pub heap_allocated: Option<u64>,
    pub heap_resident: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostIdentity {
    pub hostname: String,
    pub platform: String,
    pub arch: String,
    pub os_version: String,
}

/// One IPv4 address bound to an interface, as enumerated by the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    pub name: String,
    pub address: Ipv4Addr,
    pub prefix: u8,
    pub mac: String,
}

/// Counters from the host-stats collaborator, keyed by interface name upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceCounters {
    pub rx_bytes: u64,
    pub tx_bytes: u64,
    pub rx_errors: u64,
    pub tx_errors: u64,
    pub rx_dropped: Option<u64>,
    pub tx_dropped: Option<u64>,
    pub speed_mbps: Option<u64>,
    pub link_type: Option<String>,
}
