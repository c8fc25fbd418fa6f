// Host readings via sysinfo, procfs/sysfs and getrusage

mod heap;
mod linux;
mod rusage;

use std::collections::HashMap;
use std::net::IpAddr;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

use sysinfo::{Disks, Networks, Pid, ProcessesToUpdate, System};
use tracing::instrument;

use crate::host_source::HostSource;
use crate::models::*;

pub struct SysinfoRepo {
    sys: Mutex<System>,
    disks: Mutex<Disks>,
    networks: Mutex<Networks>,
    /// Monotonic anchor for process CPU snapshots and the process-uptime fallback.
    anchor: Instant,
}

impl Default for SysinfoRepo {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<'a, T>(m: &'a Mutex<T>, what: &str) -> anyhow::Result<MutexGuard<'a, T>> {
    m.lock()
        .map_err(|e| anyhow::anyhow!("sysinfo {} lock poisoned: {}", what, e))
}

impl SysinfoRepo {
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        let disks = Disks::new_with_refreshed_list();
        let networks = Networks::new_with_refreshed_list();
        Self {
            sys: Mutex::new(sys),
            disks: Mutex::new(disks),
            networks: Mutex::new(networks),
            anchor: Instant::now(),
        }
    }

    fn current_pid() -> anyhow::Result<Pid> {
        sysinfo::get_current_pid().map_err(|e| anyhow::anyhow!("current pid: {}", e))
    }
}

impl HostSource for SysinfoRepo {
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "cpu_ticks"))]
    fn cpu_ticks(&self) -> anyhow::Result<Vec<CoreTickSnapshot>> {
        linux::read_core_ticks()
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "process_cpu"))]
    fn process_cpu(&self) -> anyhow::Result<ProcessCpuSnapshot> {
        let (user_micros, system_micros) = rusage::process_cpu_micros()?;
        Ok(ProcessCpuSnapshot {
            user_micros,
            system_micros,
            wall_clock: self.anchor.elapsed(),
        })
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "cpu_info"))]
    fn cpu_info(&self) -> anyhow::Result<CpuInfo> {
        let sys = lock(&self.sys, "system")?;
        let model = linux::read_cpu_model_linux()
            .or_else(|| {
                sys.cpus()
                    .first()
                    .map(|c| c.brand().trim().to_string())
                    .filter(|s| !s.is_empty())
            })
            .unwrap_or_else(|| "Unknown".into());
        Ok(CpuInfo {
            logical_cores: sys.cpus().len() as u32,
            physical_cores: System::physical_core_count().unwrap_or(0) as u32,
            model,
        })
    }

    fn load_average(&self) -> LoadAverage {
        let load = System::load_average();
        LoadAverage {
            one: load.one,
            five: load.five,
            fifteen: load.fifteen,
        }
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "memory"))]
    fn memory(&self) -> anyhow::Result<MemoryStats> {
        let mut sys = lock(&self.sys, "system")?;
        sys.refresh_memory();
        Ok(MemoryStats {
            total: sys.total_memory(),
            free: sys.available_memory(),
        })
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "disk_space"))]
    fn disk_space(&self, path: &str) -> anyhow::Result<DiskSpace> {
        let mut disks = lock(&self.disks, "disks")?;
        disks.refresh(true);
        let wanted = Path::new(path);
        let disk = disks
            .list()
            .iter()
            .find(|d| d.mount_point() == wanted)
            .ok_or_else(|| anyhow::anyhow!("no filesystem mounted at {}", path))?;
        Ok(DiskSpace {
            total: disk.total_space(),
            free: disk.available_space(),
        })
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "uptime"))]
    fn uptime(&self) -> UptimeStats {
        let fallback = self.anchor.elapsed().as_secs();
        let process_secs = Self::current_pid()
            .ok()
            .and_then(|pid| {
                let mut sys = self.sys.lock().ok()?;
                sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
                sys.process(pid).map(|p| p.run_time())
            })
            .unwrap_or(fallback);
        UptimeStats {
            system_secs: System::uptime(),
            process_secs,
        }
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "process_memory"))]
    fn process_memory(&self) -> anyhow::Result<ProcessMemory> {
        let pid = Self::current_pid()?;
        let mut sys = lock(&self.sys, "system")?;
        sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        let process = sys
            .process(pid)
            .ok_or_else(|| anyhow::anyhow!("process {} not found", pid))?;
        let heap = heap::heap_stats();
        Ok(ProcessMemory {
            pid: pid.as_u32(),
            resident: process.memory(),
            virtual_memory: process.virtual_memory(),
            heap_allocated: heap.map(|(allocated, _)| allocated),
            heap_resident: heap.map(|(_, resident)| resident),
        })
    }

    fn host_identity(&self) -> HostIdentity {
        HostIdentity {
            hostname: System::host_name().unwrap_or_default(),
            platform: std::env::consts::OS.into(),
            arch: std::env::consts::ARCH.into(),
            os_version: linux::read_os_pretty_name()
                .or_else(System::long_os_version)
                .unwrap_or_default(),
        }
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "network_interfaces"))]
    fn network_interfaces(&self) -> anyhow::Result<Vec<InterfaceAddress>> {
        let mut networks = lock(&self.networks, "networks")?;
        networks.refresh(true);
        let mut addresses: Vec<InterfaceAddress> = networks
            .list()
            .iter()
            .flat_map(|(name, data)| {
                let mac = data.mac_address().to_string();
                data.ip_networks().iter().filter_map(move |n| match n.addr {
                    IpAddr::V4(address) => Some(InterfaceAddress {
                        name: name.clone(),
                        address,
                        prefix: n.prefix,
                        mac: mac.clone(),
                    }),
                    IpAddr::V6(_) => None,
                })
            })
            .collect();
        addresses.sort_by(|a, b| a.name.cmp(&b.name).then(a.address.cmp(&b.address)));
        Ok(addresses)
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "network_counters"))]
    fn network_counters(&self) -> anyhow::Result<HashMap<String, InterfaceCounters>> {
        #[cfg(target_os = "linux")]
        {
            linux::read_interface_counters(Path::new("/sys/class/net"))
        }
        #[cfg(not(target_os = "linux"))]
        {
            let mut networks = lock(&self.networks, "networks")?;
            networks.refresh(true);
            Ok(networks
                .list()
                .iter()
                .map(|(name, data)| {
                    (
                        name.clone(),
                        InterfaceCounters {
                            rx_bytes: data.total_received(),
                            tx_bytes: data.total_transmitted(),
                            rx_errors: data.total_errors_on_received(),
                            tx_errors: data.total_errors_on_transmitted(),
                            ..Default::default()
                        },
                    )
                })
                .collect())
        }
    }
}
