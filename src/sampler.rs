// CPU utilization by differencing two counter snapshots across a fixed wait

use std::sync::Arc;
use std::time::Duration;

use crate::error::ReportError;
use crate::format::round2;
use crate::host_source::{HostSource, read};
use crate::models::{CoreTickSnapshot, ProcessCpuSnapshot};

/// Wait between the two snapshots in production.
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(1000);

/// System-wide utilization across all cores between `before` and `after`.
///
/// Counters that went backwards count as zero. If the core count changed, only the
/// cores present in both snapshots are compared. When no ticks elapsed the result
/// is `0.0` instead of NaN.
pub fn system_usage_between(before: &[CoreTickSnapshot], after: &[CoreTickSnapshot]) -> f64 {
    if before.len() != after.len() {
        tracing::debug!(
            before = before.len(),
            after = after.len(),
            "core count changed between snapshots"
        );
    }
    let (idle_diff, total_diff) = before
        .iter()
        .zip(after)
        .fold((0u64, 0u64), |(idle_acc, total_acc), (s1, s2)| {
            let idle = s2.idle.saturating_sub(s1.idle);
            let total = idle
                + s2.user.saturating_sub(s1.user)
                + s2.nice.saturating_sub(s1.nice)
                + s2.sys.saturating_sub(s1.sys)
                + s2.irq.saturating_sub(s1.irq);
            (idle_acc + idle, total_acc + total)
        });

    if total_diff == 0 {
        tracing::debug!("no CPU ticks elapsed between snapshots; reporting 0.0");
        return 0.0;
    }
    let usage = 100.0 - (idle_diff as f64 / total_diff as f64) * 100.0;
    round2(usage).clamp(0.0, 100.0)
}

/// Percentage of one core's worth of time the process used between the two marks.
/// Exceeds 100 when the process ran on more than one core. Zero elapsed wall time
/// yields `0.0`.
pub fn process_usage_between(before: &ProcessCpuSnapshot, after: &ProcessCpuSnapshot) -> f64 {
    let cpu_micros = (after.user_micros + after.system_micros)
        .saturating_sub(before.user_micros + before.system_micros);
    let wall_ms = after.wall_clock.saturating_sub(before.wall_clock).as_secs_f64() * 1000.0;
    if wall_ms <= 0.0 {
        tracing::debug!("no wall-clock time elapsed between snapshots; reporting 0.0");
        return 0.0;
    }
    round2((cpu_micros as f64 / 1000.0) / wall_ms * 100.0)
}

/// Snapshot per-core ticks, wait `interval` without blocking the runtime, snapshot again.
pub async fn sample_system_usage(
    source: Arc<dyn HostSource>,
    interval: Duration,
) -> Result<f64, ReportError> {
    let before = read(&source, "cpu ticks", |s| s.cpu_ticks()).await?;
    tokio::time::sleep(interval).await;
    let after = read(&source, "cpu ticks", |s| s.cpu_ticks()).await?;
    Ok(system_usage_between(&before, &after))
}

/// Snapshot this process's CPU time, wait `interval`, snapshot again.
pub async fn sample_process_usage(
    source: Arc<dyn HostSource>,
    interval: Duration,
) -> Result<f64, ReportError> {
    let before = read(&source, "process cpu time", |s| s.process_cpu()).await?;
    tokio::time::sleep(interval).await;
    let after = read(&source, "process cpu time", |s| s.process_cpu()).await?;
    Ok(process_usage_between(&before, &after))
}
