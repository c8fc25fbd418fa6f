// Network interface models

use serde::{Serialize, Serializer};
use std::collections::{BTreeSet, HashMap};
use std::net::Ipv4Addr;

use super::{InterfaceAddress, InterfaceCounters};
use crate::format::format_bytes;

/// A stat that the host-stats collaborator may not have reported.
/// Serializes as the bare value, or as the string `"Unknown"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading<T> {
    Known(T),
    Unknown,
}

impl<T> Reading<T> {
    pub fn known(self) -> Option<T> {
        match self {
            Reading::Known(v) => Some(v),
            Reading::Unknown => None,
        }
    }
}

impl<T> From<Option<T>> for Reading<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Reading::Unknown, Reading::Known)
    }
}

impl<T: Serialize> Serialize for Reading<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Reading::Known(v) => v.serialize(serializer),
            Reading::Unknown => serializer.serialize_str("Unknown"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterfaceInfo {
    pub name: String,
    pub address: String,
    pub netmask: String,
    pub mac: String,
    pub link_type: Reading<String>,
    pub speed_mbps: Reading<u64>,
    pub rx_bytes: Reading<u64>,
    pub tx_bytes: Reading<u64>,
    pub rx_errors: Reading<u64>,
    pub tx_errors: Reading<u64>,
    pub rx_dropped: Reading<u64>,
    pub tx_dropped: Reading<u64>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BandwidthSummary {
    pub interface_count: usize,
    pub total_rx_bytes: u64,
    pub total_tx_bytes: u64,
    pub total_rx: String,
    pub total_tx: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkReport {
    pub interfaces: Vec<NetworkInterfaceInfo>,
    pub bandwidth: BandwidthSummary,
}

impl NetworkReport {
    /// Empty list and zeroed totals, used when the host-stats collaborator fails.
    pub fn unavailable() -> Self {
        Self {
            interfaces: vec![],
            bandwidth: BandwidthSummary {
                total_rx: format_bytes(0),
                total_tx: format_bytes(0),
                ..Default::default()
            },
        }
    }

    /// Joins enumerated addresses with per-interface counters. Interfaces without a
    /// counters entry keep their address data and report `Unknown` stats. The
    /// bandwidth summary counts each interface name once.
    pub fn assemble(
        addresses: Vec<InterfaceAddress>,
        counters: &HashMap<String, InterfaceCounters>,
    ) -> Self {
        let interfaces: Vec<NetworkInterfaceInfo> = addresses
            .into_iter()
            .filter(|a| !a.address.is_loopback())
            .map(|a| {
                let stats = counters.get(&a.name);
                NetworkInterfaceInfo {
                    address: a.address.to_string(),
                    netmask: netmask_from_prefix(a.prefix).to_string(),
                    mac: a.mac,
                    link_type: stats.and_then(|s| s.link_type.clone()).into(),
                    speed_mbps: stats.and_then(|s| s.speed_mbps).into(),
                    rx_bytes: stats.map(|s| s.rx_bytes).into(),
                    tx_bytes: stats.map(|s| s.tx_bytes).into(),
                    rx_errors: stats.map(|s| s.rx_errors).into(),
                    tx_errors: stats.map(|s| s.tx_errors).into(),
                    rx_dropped: stats.and_then(|s| s.rx_dropped).into(),
                    tx_dropped: stats.and_then(|s| s.tx_dropped).into(),
                    name: a.name,
                }
            })
            .collect();

        // An interface with several IPv4 addresses appears once per address, but its
        // counters are cumulative per interface.
        let names: BTreeSet<&str> = interfaces.iter().map(|i| i.name.as_str()).collect();
        let (total_rx_bytes, total_tx_bytes) = names
            .iter()
            .filter_map(|name| counters.get(*name))
            .fold((0u64, 0u64), |(rx, tx), c| (rx + c.rx_bytes, tx + c.tx_bytes));

        Self {
            bandwidth: BandwidthSummary {
                interface_count: names.len(),
                total_rx_bytes,
                total_tx_bytes,
                total_rx: format_bytes(total_rx_bytes),
                total_tx: format_bytes(total_tx_bytes),
            },
            interfaces,
        }
    }
}

/// IPv4 netmask for a CIDR prefix length (values above 32 saturate to /32).
pub(crate) fn netmask_from_prefix(prefix: u8) -> Ipv4Addr {
    let bits = match prefix.min(32) {
        0 => 0,
        p => u32::MAX << (32 - u32::from(p)),
    };
    Ipv4Addr::from(bits)
}
