// Human-readable units for bytes, uptime and percentages

const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];
const MB: f64 = 1024.0 * 1024.0;

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Base-1024 size with at most two decimals, trailing zeros dropped: `1.5 MB`, `1 KB`, `0 B`.
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{} {}", round2(value), UNITS[unit])
}

/// Fixed megabyte rendering used by the console report: `512.00 MB`.
pub fn bytes_to_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / MB)
}

/// `1d 1h 1m 5s`; zero components are omitted, seconds are kept when nothing else is.
pub fn format_uptime(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    let mut parts = Vec::with_capacity(4);
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{seconds}s"));
    }
    parts.join(" ")
}
