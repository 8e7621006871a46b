use colored::Colorize;

use crate::domain::ports::collector::MetricsSource;

/// Collects one raw snapshot and prints it without running any analysis.
///
/// # Errors
///
/// Returns an error if collection fails or JSON serialization fails.
pub fn run_snapshot(source: &dyn MetricsSource, json: bool) -> anyhow::Result<()> {
    let snapshot = source.collect()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("{}", "Metrics snapshot".bold());
    println!(
        "Host: {hostname} ({platform} {version}, {arch})",
        hostname = snapshot.system.hostname,
        platform = snapshot.system.platform,
        version = snapshot.system.platform_version,
        arch = snapshot.system.architecture,
    );
    println!(
        "CPU: {usage:.1}% over {cores} cores (load {one:.2} / {five:.2} / {fifteen:.2})",
        usage = snapshot.cpu.usage,
        cores = snapshot.cpu.core_count,
        one = snapshot.cpu.load_avg_1m,
        five = snapshot.cpu.load_avg_5m,
        fifteen = snapshot.cpu.load_avg_15m,
    );
    println!(
        "Memory: {usage:.1}% ({used} / {total} bytes)",
        usage = snapshot.memory.usage,
        used = snapshot.memory.used,
        total = snapshot.memory.total,
    );
    println!(
        "Swap: {usage:.1}%  Disk: {disk:.1}% across {partitions} partition(s)",
        usage = snapshot.swap.usage,
        disk = snapshot.disk.usage,
        partitions = snapshot.disk.partitions.len(),
    );
    println!(
        "Processes: {count}  Listening ports: {ports}  Services: {services}",
        count = snapshot.processes.len(),
        ports = snapshot.ports.len(),
        services = snapshot.services.len(),
    );

    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::entities::snapshot::MetricsSnapshot;
    use crate::domain::ports::collector::CollectionError;
    use colored::control;

    struct MockSource;

    impl MetricsSource for MockSource {
        fn collect(&self) -> Result<MetricsSnapshot, CollectionError> {
            Ok(MetricsSnapshot::default())
        }
    }

    struct FailingSource;

    impl MetricsSource for FailingSource {
        fn collect(&self) -> Result<MetricsSnapshot, CollectionError> {
            Err(CollectionError::PermissionDenied("/proc".into()))
        }
    }

    #[test]
    fn snapshot_human_output_succeeds() {
        control::set_override(false);
        assert!(run_snapshot(&MockSource, false).is_ok());
    }

    #[test]
    fn snapshot_json_output_succeeds() {
        assert!(run_snapshot(&MockSource, true).is_ok());
    }

    #[test]
    fn collection_failure_propagates() {
        let result = run_snapshot(&FailingSource, false);
        assert!(result.is_err());
    }
}
