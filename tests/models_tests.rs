// Model serialization tests (JSON camelCase, Unknown marker)

use hostmetrics::models::*;
use std::collections::HashMap;
use std::net::Ipv4Addr;

#[test]
fn test_reading_serializes_value_or_unknown() {
    assert_eq!(serde_json::to_string(&Reading::Known(5u64)).unwrap(), "5");
    assert_eq!(
        serde_json::to_string(&Reading::<u64>::Unknown).unwrap(),
        "\"Unknown\""
    );
    assert_eq!(Reading::from(Some(3u64)), Reading::Known(3));
    assert_eq!(Reading::<u64>::from(None), Reading::Unknown);
}

#[test]
fn test_memory_report_derives_used_and_percent() {
    let report = MemoryReport::from(MemoryStats {
        total: 4 * 1024 * 1024,
        free: 1024 * 1024,
    });
    assert_eq!(report.used_bytes, 3 * 1024 * 1024);
    assert_eq!(report.usage_percent, 75.0);
    assert_eq!(report.used, "3 MB");
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"usagePercent\""));
    assert!(json.contains("\"totalBytes\""));
}

#[test]
fn test_zero_sized_disk_reports_zero_percent() {
    let report = DiskReport::new("/", DiskSpace { total: 0, free: 0 });
    assert_eq!(report.usage_percent, 0.0);
    assert_eq!(report.total, "0 B");
}

#[test]
fn test_free_larger_than_total_saturates() {
    let report = DiskReport::new("/", DiskSpace { total: 10, free: 20 });
    assert_eq!(report.used_bytes, 0);
}

#[test]
fn test_uptime_report_formats_both_clocks() {
    let report = UptimeReport::from(UptimeStats {
        system_secs: 3661,
        process_secs: 0,
    });
    assert_eq!(report.system, "1h 1m 1s");
    assert_eq!(report.process, "0s");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["systemSeconds"], 3661);
}

#[test]
fn test_process_report_without_heap_stats() {
    let report = ProcessReport::from(ProcessMemory {
        pid: 7,
        resident: 1024,
        virtual_memory: 2048,
        heap_allocated: None,
        heap_resident: None,
    });
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["residentBytes"], 1024);
    assert!(json["heapAllocatedBytes"].is_null());
    assert!(json["heapAllocated"].is_null());
    assert!(json["heapResident"].is_null());
    assert_eq!(json["virtual"], "2 KB");
}

#[test]
fn test_process_report_formats_every_byte_figure() {
    let report = ProcessReport::from(ProcessMemory {
        pid: 7,
        resident: 1024,
        virtual_memory: 3 * 1024 * 1024,
        heap_allocated: Some(512),
        heap_resident: Some(2048),
    });
    assert_eq!(report.resident, "1 KB");
    assert_eq!(report.virtual_size, "3 MB");
    assert_eq!(report.heap_allocated.as_deref(), Some("512 B"));
    assert_eq!(report.heap_resident.as_deref(), Some("2 KB"));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["virtualBytes"], 3 * 1024 * 1024);
    assert_eq!(json["virtual"], "3 MB");
    assert_eq!(json["heapResident"], "2 KB");
}

#[test]
fn test_network_assemble_skips_loopback_and_sums_known() {
    let addresses = vec![
        InterfaceAddress {
            name: "lo".into(),
            address: Ipv4Addr::LOCALHOST,
            prefix: 8,
            mac: String::new(),
        },
        InterfaceAddress {
            name: "eth0".into(),
            address: Ipv4Addr::new(10, 1, 2, 3),
            prefix: 8,
            mac: "aa:aa:aa:aa:aa:aa".into(),
        },
        InterfaceAddress {
            name: "eth1".into(),
            address: Ipv4Addr::new(10, 9, 9, 9),
            prefix: 30,
            mac: "bb:bb:bb:bb:bb:bb".into(),
        },
    ];
    let mut counters = HashMap::new();
    for (name, rx) in [("lo", 999), ("eth0", 1000), ("eth1", 24)] {
        counters.insert(
            name.to_string(),
            InterfaceCounters {
                rx_bytes: rx,
                tx_bytes: 1,
                ..Default::default()
            },
        );
    }
    let report = NetworkReport::assemble(addresses, &counters);
    assert_eq!(report.interfaces.len(), 2);
    assert_eq!(report.interfaces[0].netmask, "255.0.0.0");
    assert_eq!(report.interfaces[1].netmask, "255.255.255.252");
    assert_eq!(report.bandwidth.total_rx_bytes, 1024);
    assert_eq!(report.bandwidth.total_rx, "1 KB");
    assert_eq!(report.bandwidth.total_tx_bytes, 2);
    assert_eq!(report.interfaces[0].speed_mbps, Reading::Unknown);
}

#[test]
fn test_interface_with_two_addresses_counts_once_in_bandwidth() {
    let addresses = ["10.0.0.1", "10.0.0.2"]
        .into_iter()
        .map(|ip| InterfaceAddress {
            name: "eth0".into(),
            address: ip.parse().unwrap(),
            prefix: 24,
            mac: "aa:aa:aa:aa:aa:aa".into(),
        })
        .collect();
    let counters = HashMap::from([(
        "eth0".to_string(),
        InterfaceCounters {
            rx_bytes: 1000,
            tx_bytes: 500,
            ..Default::default()
        },
    )]);

    let report = NetworkReport::assemble(addresses, &counters);
    assert_eq!(report.interfaces.len(), 2);
    assert_eq!(report.interfaces[0].address, "10.0.0.1");
    assert_eq!(report.interfaces[1].address, "10.0.0.2");
    assert_eq!(report.interfaces[1].rx_bytes, Reading::Known(1000));
    assert_eq!(report.bandwidth.interface_count, 1);
    assert_eq!(report.bandwidth.total_rx_bytes, 1000);
    assert_eq!(report.bandwidth.total_tx_bytes, 500);
    assert_eq!(report.bandwidth.total_rx, "1000 B");
}

#[test]
fn test_interface_info_serializes_camel_case() {
    let report = NetworkReport::assemble(
        vec![InterfaceAddress {
            name: "eth0".into(),
            address: Ipv4Addr::new(192, 168, 0, 2),
            prefix: 24,
            mac: "aa:bb:cc:dd:ee:ff".into(),
        }],
        &HashMap::new(),
    );
    let json = serde_json::to_value(&report).unwrap();
    let iface = &json["interfaces"][0];
    assert_eq!(iface["linkType"], "Unknown");
    assert_eq!(iface["speedMbps"], "Unknown");
    assert_eq!(iface["address"], "192.168.0.2");
    assert_eq!(json["bandwidth"]["interfaceCount"], 1);
    assert_eq!(json["bandwidth"]["totalRxBytes"], 0);
}

#[test]
fn test_unavailable_network_report_is_empty() {
    let report = NetworkReport::unavailable();
    assert!(report.interfaces.is_empty());
    assert_eq!(report.bandwidth.total_rx, "0 B");
}

#[test]
fn test_load_average_rounding() {
    let load = LoadAverage {
        one: 1.005_1,
        five: 2.0,
        fifteen: 0.333_3,
    }
    .rounded();
    assert_eq!(load.one, 1.01);
    assert_eq!(load.fifteen, 0.33);
}
