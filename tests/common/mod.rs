// Shared test helpers: a scripted HostSource

#![allow(dead_code)]

use hostmetrics::collector::Collector;
use hostmetrics::host_source::HostSource;
use hostmetrics::models::*;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const GIB: u64 = 1024 * 1024 * 1024;

pub fn core(user: u64, nice: u64, sys: u64, irq: u64, idle: u64) -> CoreTickSnapshot {
    CoreTickSnapshot {
        user,
        nice,
        sys,
        irq,
        idle,
    }
}

/// Replays `ticks` and `process` snapshots in order, cycling, so every sampling
/// window sees the same pair.
pub struct FakeSource {
    pub ticks: Vec<Vec<CoreTickSnapshot>>,
    pub process: Vec<ProcessCpuSnapshot>,
    pub addresses: Vec<InterfaceAddress>,
    pub counters: HashMap<String, InterfaceCounters>,
    pub fail_disk: bool,
    pub fail_ticks: bool,
    pub fail_memory: bool,
    pub fail_network_counters: bool,
    pub fail_network_interfaces: bool,
    tick_calls: AtomicUsize,
    process_calls: AtomicUsize,
    pub disk_paths: std::sync::Mutex<Vec<String>>,
}

impl FakeSource {
    /// Two cores at 15% busy, process at 49.9%, 8 GiB RAM 75% used, 100 GiB disk 75% used.
    pub fn healthy() -> Self {
        let before = vec![core(100, 0, 50, 0, 850), core(100, 0, 50, 0, 850)];
        let after = vec![core(200, 0, 100, 0, 1700), core(200, 0, 100, 0, 1700)];
        let mut counters = HashMap::new();
        counters.insert(
            "eth0".to_string(),
            InterfaceCounters {
                rx_bytes: 1024,
                tx_bytes: 2048,
                rx_errors: 1,
                tx_errors: 2,
                rx_dropped: Some(3),
                tx_dropped: None,
                speed_mbps: Some(1000),
                link_type: Some("wired".into()),
            },
        );
        counters.insert(
            "lo".to_string(),
            InterfaceCounters {
                rx_bytes: 1 << 30,
                tx_bytes: 1 << 30,
                link_type: Some("virtual".into()),
                ..Default::default()
            },
        );
        Self {
            ticks: vec![before, after],
            process: vec![
                ProcessCpuSnapshot {
                    user_micros: 1_000,
                    system_micros: 0,
                    wall_clock: Duration::ZERO,
                },
                ProcessCpuSnapshot {
                    user_micros: 300_000,
                    system_micros: 200_000,
                    wall_clock: Duration::from_secs(1),
                },
            ],
            addresses: vec![
                InterfaceAddress {
                    name: "eth0".into(),
                    address: Ipv4Addr::new(192, 168, 1, 10),
                    prefix: 24,
                    mac: "aa:bb:cc:dd:ee:ff".into(),
                },
                InterfaceAddress {
                    name: "lo".into(),
                    address: Ipv4Addr::LOCALHOST,
                    prefix: 8,
                    mac: "00:00:00:00:00:00".into(),
                },
                InterfaceAddress {
                    name: "wlan0".into(),
                    address: Ipv4Addr::new(10, 0, 0, 5),
                    prefix: 16,
                    mac: "11:22:33:44:55:66".into(),
                },
            ],
            counters,
            fail_disk: false,
            fail_ticks: false,
            fail_memory: false,
            fail_network_counters: false,
            fail_network_interfaces: false,
            tick_calls: AtomicUsize::new(0),
            process_calls: AtomicUsize::new(0),
            disk_paths: std::sync::Mutex::new(vec![]),
        }
    }

    pub fn tick_calls(&self) -> usize {
        self.tick_calls.load(Ordering::SeqCst)
    }
}

impl HostSource for FakeSource {
    fn cpu_ticks(&self) -> anyhow::Result<Vec<CoreTickSnapshot>> {
        anyhow::ensure!(!self.fail_ticks, "tick counters unreadable");
        let i = self.tick_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.ticks[i % self.ticks.len()].clone())
    }

    fn process_cpu(&self) -> anyhow::Result<ProcessCpuSnapshot> {
        let i = self.process_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.process[i % self.process.len()])
    }

    fn cpu_info(&self) -> anyhow::Result<CpuInfo> {
        Ok(CpuInfo {
            logical_cores: 2,
            physical_cores: 1,
            model: "Fake CPU".into(),
        })
    }

    fn load_average(&self) -> LoadAverage {
        LoadAverage {
            one: 0.123,
            five: 0.456,
            fifteen: 0.789,
        }
    }

    fn memory(&self) -> anyhow::Result<MemoryStats> {
        anyhow::ensure!(!self.fail_memory, "memory unreadable");
        Ok(MemoryStats {
            total: 8 * GIB,
            free: 2 * GIB,
        })
    }

    fn disk_space(&self, path: &str) -> anyhow::Result<DiskSpace> {
        self.disk_paths.lock().unwrap().push(path.to_string());
        anyhow::ensure!(!self.fail_disk, "no filesystem mounted at {}", path);
        Ok(DiskSpace {
            total: 100 * GIB,
            free: 25 * GIB,
        })
    }

    fn uptime(&self) -> UptimeStats {
        UptimeStats {
            system_secs: 90_065,
            process_secs: 65,
        }
    }

    fn process_memory(&self) -> anyhow::Result<ProcessMemory> {
        Ok(ProcessMemory {
            pid: 42,
            resident: 1_572_864,
            virtual_memory: 4 * GIB,
            heap_allocated: Some(1024),
            heap_resident: Some(2048),
        })
    }

    fn host_identity(&self) -> HostIdentity {
        HostIdentity {
            hostname: "testhost".into(),
            platform: "linux".into(),
            arch: "x86_64".into(),
            os_version: "Test OS 1.0".into(),
        }
    }

    fn network_interfaces(&self) -> anyhow::Result<Vec<InterfaceAddress>> {
        anyhow::ensure!(!self.fail_network_interfaces, "interface list unavailable");
        Ok(self.addresses.clone())
    }

    fn network_counters(&self) -> anyhow::Result<HashMap<String, InterfaceCounters>> {
        anyhow::ensure!(!self.fail_network_counters, "host stats unavailable");
        Ok(self.counters.clone())
    }
}

pub fn collector_for(source: FakeSource) -> Collector {
    let source: Arc<dyn HostSource> = Arc::new(source);
    Collector::new(source, Duration::ZERO, "/")
}
