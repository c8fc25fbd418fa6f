// One-shot console rendering of a SystemReport

use std::fmt;

use crate::format::bytes_to_mb;
use crate::models::SystemReport;

pub fn render(report: &SystemReport) -> String {
    ConsoleReport(report).to_string()
}

/// Text layout of the one-shot report, one section per line.
pub struct ConsoleReport<'a>(pub &'a SystemReport);

impl fmt::Display for ConsoleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let cpu = &report.cpu;
        let mem = &report.memory;
        let disk = &report.disk;
        let bw = &report.network.bandwidth;

        writeln!(f, "=== Server Performance & Usage ===")?;
        writeln!(
            f,
            "Host: {} ({} {})",
            report.host.hostname, report.host.platform, report.host.arch
        )?;
        writeln!(f, "CPU Count: {}", cpu.count)?;
        writeln!(f, "Load Average (1 min): {:.2}", cpu.load_average.one)?;
        writeln!(
            f,
            "Memory - Total: {}, Free: {}, Used: {}, Usage: {:.2}%",
            bytes_to_mb(mem.total_bytes),
            bytes_to_mb(mem.free_bytes),
            bytes_to_mb(mem.used_bytes),
            mem.usage_percent
        )?;
        writeln!(
            f,
            "Disk Storage ({}): Total: {}, Free: {}, Used: {}, Usage: {:.2}%",
            disk.path,
            bytes_to_mb(disk.total_bytes),
            bytes_to_mb(disk.free_bytes),
            bytes_to_mb(disk.used_bytes),
            disk.usage_percent
        )?;
        writeln!(f, "System CPU Usage (all cores): {:.2} %", cpu.system_usage_percent)?;
        writeln!(f, "Process CPU Usage (this process): {:.2} %", cpu.process_usage_percent)?;
        writeln!(
            f,
            "Uptime - System: {}, Process: {}",
            report.uptime.system, report.uptime.process
        )?;
        writeln!(
            f,
            "Network ({} interfaces): Received: {}, Sent: {}",
            bw.interface_count, bw.total_rx, bw.total_tx
        )
    }
}
