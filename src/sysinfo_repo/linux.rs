// Linux-specific helpers: /proc, /etc/os-release, /sys/class/net.

use std::collections::HashMap;
use std::path::Path;

use crate::models::{CoreTickSnapshot, InterfaceCounters};

/// Per-core tick counters from /proc/stat (Linux).
pub(super) fn read_core_ticks() -> anyhow::Result<Vec<CoreTickSnapshot>> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/proc/stat")
            .map_err(|e| anyhow::anyhow!("read /proc/stat: {}", e))?;
        parse_proc_stat(&content)
    }
    #[cfg(not(target_os = "linux"))]
    anyhow::bail!("per-core tick counters are not available on {}", std::env::consts::OS)
}

/// Parse the `cpuN` lines of /proc/stat, ordered by core id.
/// Columns: user nice system idle iowait irq softirq ...; iowait and softirq are not counted.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
pub(crate) fn parse_proc_stat(content: &str) -> anyhow::Result<Vec<CoreTickSnapshot>> {
    let mut cores: Vec<(u32, CoreTickSnapshot)> = Vec::new();
    for line in content.lines() {
        let mut fields = line.split_whitespace();
        let Some(label) = fields.next() else {
            continue;
        };
        let Some(id) = label.strip_prefix("cpu").and_then(|s| s.parse::<u32>().ok()) else {
            continue;
        };
        let values: Vec<u64> = fields
            .map(|f| f.parse::<u64>())
            .collect::<Result<_, _>>()
            .map_err(|e| anyhow::anyhow!("/proc/stat {}: {}", label, e))?;
        anyhow::ensure!(
            values.len() >= 4,
            "/proc/stat {}: expected at least 4 counters, got {}",
            label,
            values.len()
        );
        let at = |i: usize| values.get(i).copied().unwrap_or(0);
        cores.push((
            id,
            CoreTickSnapshot {
                user: at(0),
                nice: at(1),
                sys: at(2),
                idle: at(3),
                irq: at(5),
            },
        ));
    }
    anyhow::ensure!(!cores.is_empty(), "/proc/stat: no per-core cpu lines");
    cores.sort_by_key(|(id, _)| *id);
    Ok(cores.into_iter().map(|(_, c)| c).collect())
}

/// Read first "model name" from /proc/cpuinfo (Linux). Prefer over sysinfo when it returns "cpu0" etc.
pub(super) fn read_cpu_model_linux() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/proc/cpuinfo").ok()?;
        for line in content.lines() {
            if line.starts_with("model name") {
                let name = line
                    .find(": ")
                    .map(|i| line[i + 2..].trim())
                    .filter(|s| !s.is_empty() && *s != "cpu0")?;
                return Some(name.to_string());
            }
        }
    }
    None
}

/// PRETTY_NAME from /etc/os-release (Linux).
pub(super) fn read_os_pretty_name() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/etc/os-release").ok()?;
        content
            .lines()
            .find_map(|line| line.strip_prefix("PRETTY_NAME="))
            .map(|v| v.trim_matches('"').to_string())
            .filter(|v| !v.is_empty())
    }
    #[cfg(not(target_os = "linux"))]
    None
}

/// Counters for every interface under `root` (normally /sys/class/net).
/// Fails only when `root` itself cannot be listed; unreadable files become zero / `None`.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
pub(crate) fn read_interface_counters(
    root: &Path,
) -> anyhow::Result<HashMap<String, InterfaceCounters>> {
    let entries = std::fs::read_dir(root)
        .map_err(|e| anyhow::anyhow!("list {}: {}", root.display(), e))?;
    let mut out = HashMap::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        let dir = entry.path();
        let stat = |file: &str| read_u64(&dir.join("statistics").join(file));
        out.insert(
            name,
            InterfaceCounters {
                rx_bytes: stat("rx_bytes").unwrap_or(0),
                tx_bytes: stat("tx_bytes").unwrap_or(0),
                rx_errors: stat("rx_errors").unwrap_or(0),
                tx_errors: stat("tx_errors").unwrap_or(0),
                rx_dropped: stat("rx_dropped"),
                tx_dropped: stat("tx_dropped"),
                speed_mbps: interface_speed_mbps(&dir),
                link_type: Some(link_type(&dir).to_string()),
            },
        );
    }
    Ok(out)
}

fn read_u64(path: &Path) -> Option<u64> {
    std::fs::read_to_string(path).ok()?.trim().parse().ok()
}

/// Link speed from <iface>/speed in Mbit/s; unset links report -1 and map to `None`.
fn interface_speed_mbps(dir: &Path) -> Option<u64> {
    let content = std::fs::read_to_string(dir.join("speed")).ok()?;
    let mbps = content.trim().parse::<i64>().ok()?;
    (mbps > 0).then_some(mbps as u64)
}

/// Interfaces without a backing device are virtual (bridges, veth, tun).
fn link_type(dir: &Path) -> &'static str {
    if dir.join("wireless").exists() {
        "wireless"
    } else if dir.join("device").exists() {
        "wired"
    } else {
        "virtual"
    }
}
