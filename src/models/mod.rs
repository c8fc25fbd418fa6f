// Domain models: raw collaborator samples and the aggregate report

mod network;
mod report;
mod samples;

pub use network::{BandwidthSummary, NetworkInterfaceInfo, NetworkReport, Reading};
pub use report::{
    CpuReport, DiskReport, HostInfo, LoadAverage, MemoryReport, ProcessReport, SystemReport,
    SystemView, UptimeReport, UptimeView,
};
pub use samples::{
    CoreTickSnapshot, CpuInfo, DiskSpace, HostIdentity, InterfaceAddress, InterfaceCounters,
    MemoryStats, ProcessCpuSnapshot, ProcessMemory, UptimeStats,
};
