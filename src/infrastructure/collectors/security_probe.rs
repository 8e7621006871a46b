use std::net::Ipv4Addr;
use std::process::Command;

use tracing::{debug, warn};

use crate::domain::entities::process::ProcessRecord;
use crate::domain::entities::security::{
    AntivirusMetrics, FirewallMetrics, OpenPort, ServiceRecord, SslCertificate, UpdateMetrics,
};

/// TCP state code for LISTEN in `/proc/net/tcp`.
const TCP_LISTEN: &str = "0A";

/// Firewall units probed in order; the first active one wins.
const FIREWALL_UNITS: &[&str] = &["ufw", "firewalld", "nftables"];

/// Process names that identify a running antivirus product.
const ANTIVIRUS_PROCESSES: &[(&str, &str)] = &[
    ("clamd", "ClamAV"),
    ("freshclam", "ClamAV"),
    ("savd", "Sophos"),
    ("esets_daemon", "ESET"),
    ("rtkdaemon", "Rootkit Hunter"),
];

/// Probes host security state from `/proc`, systemd and well-known files.
///
/// Every probe degrades to an empty default when the underlying source is
/// unavailable; the analyzers treat absent data per their own rules.
pub struct SecurityProbe;

impl SecurityProbe {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Listening TCP ports parsed from `/proc/net/tcp` and `/proc/net/tcp6`.
    #[must_use]
    pub fn listening_ports(&self) -> Vec<OpenPort> {
        let mut ports = Vec::new();
        for path in ["/proc/net/tcp", "/proc/net/tcp6"] {
            match std::fs::read_to_string(path) {
                Ok(content) => ports.extend(parse_proc_net_tcp(&content)),
                Err(e) => warn!("could not read {path}: {e}"),
            }
        }
        ports.sort_by_key(|p| p.port);
        ports.dedup_by_key(|p| p.port);
        ports
    }

    /// Running services from `systemctl list-units`. Returns an empty list
    /// on hosts without systemd.
    #[must_use]
    pub fn running_services(&self) -> Vec<ServiceRecord> {
        let output = Command::new("systemctl")
            .args([
                "list-units",
                "--type=service",
                "--state=running",
                "--no-legend",
                "--plain",
            ])
            .output();

        match output {
            Ok(out) if out.status.success() => {
                String::from_utf8_lossy(&out.stdout)
                    .lines()
                    .filter_map(parse_systemctl_line)
                    .collect()
            }
            Ok(out) => {
                debug!("systemctl exited with {status}", status = out.status);
                Vec::new()
            }
            Err(e) => {
                debug!("systemctl not available: {e}");
                Vec::new()
            }
        }
    }

    /// Pending update count from the update-notifier state file.
    #[must_use]
    pub fn pending_updates(&self) -> UpdateMetrics {
        match std::fs::read_to_string("/var/lib/update-notifier/updates-available") {
            Ok(content) => UpdateMetrics {
                updates_available: parse_updates_available(&content),
                last_update: None,
            },
            Err(e) => {
                debug!("update-notifier state unavailable: {e}");
                UpdateMetrics::default()
            }
        }
    }

    /// Firewall state from systemd unit activity. An unprobeable firewall
    /// stays at the default (disabled) so it surfaces as a finding.
    #[must_use]
    pub fn firewall_state(&self) -> FirewallMetrics {
        for unit in FIREWALL_UNITS {
            if unit_is_active(unit) {
                return FirewallMetrics {
                    enabled: true,
                    rules: vec![format!("{unit}: active")],
                };
            }
        }
        FirewallMetrics::default()
    }

    /// Antivirus presence inferred from the already-collected process list.
    #[must_use]
    pub fn antivirus_state(&self, processes: &[ProcessRecord]) -> AntivirusMetrics {
        for process in processes {
            let name = process.name.to_lowercase();
            if let Some((_, product)) = ANTIVIRUS_PROCESSES
                .iter()
                .find(|(proc_name, _)| name.starts_with(proc_name))
            {
                return AntivirusMetrics {
                    enabled: true,
                    product: Some((*product).to_string()),
                    last_scan: None,
                };
            }
        }
        AntivirusMetrics::default()
    }

    /// SSL certificate expiry data. Certificate stores vary too much between
    /// hosts to inspect without a TLS stack, so the live probe reports none;
    /// snapshots from other sources can still carry certificates.
    #[must_use]
    pub fn ssl_certificates(&self) -> Vec<SslCertificate> {
        Vec::new()
    }
}

impl Default for SecurityProbe {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses `/proc/net/tcp`-format content, keeping LISTEN sockets only.
fn parse_proc_net_tcp(content: &str) -> Vec<OpenPort> {
    content
        .lines()
        .skip(1)
        .filter_map(parse_proc_net_tcp_line)
        .collect()
}

fn parse_proc_net_tcp_line(line: &str) -> Option<OpenPort> {
    let mut fields = line.split_whitespace();
    let _slot = fields.next()?;
    let local_address = fields.next()?;
    let _remote_address = fields.next()?;
    let state = fields.next()?;

    if state != TCP_LISTEN {
        return None;
    }

    let (addr_hex, port_hex) = local_address.rsplit_once(':')?;
    let port = u16::from_str_radix(port_hex, 16).ok()?;

    Some(OpenPort {
        port,
        state: "LISTEN".to_string(),
        address: decode_proc_address(addr_hex),
    })
}

/// Decodes the hex-encoded local address. IPv4 addresses are one
/// little-endian u32; anything longer is left as the raw hex form.
fn decode_proc_address(addr_hex: &str) -> String {
    if addr_hex.len() == 8 {
        if let Ok(raw) = u32::from_str_radix(addr_hex, 16) {
            return Ipv4Addr::from(raw.swap_bytes()).to_string();
        }
    }
    addr_hex.to_string()
}

/// Parses one `systemctl list-units --plain` line into a service record.
fn parse_systemctl_line(line: &str) -> Option<ServiceRecord> {
    let mut fields = line.split_whitespace();
    let unit = fields.next()?;
    let _load = fields.next()?;
    let _active = fields.next()?;
    let sub = fields.next()?;

    let name = unit.strip_suffix(".service").unwrap_or(unit);
    Some(ServiceRecord {
        name: name.to_string(),
        state: sub.to_string(),
    })
}

/// Extracts the update count from update-notifier text, e.g.
/// "5 updates can be applied immediately.".
fn parse_updates_available(content: &str) -> u32 {
    content
        .lines()
        .filter(|line| line.contains("update"))
        .filter_map(|line| line.split_whitespace().next())
        .filter_map(|word| word.parse::<u32>().ok())
        .sum()
}

fn unit_is_active(unit: &str) -> bool {
    Command::new("systemctl")
        .args(["is-active", "--quiet", unit])
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    const PROC_NET_TCP_SAMPLE: &str = "\
  sl  local_address rem_address   st tx_queue rx_queue tr tm->when retrnsmt   uid  timeout inode
   0: 0100007F:0CEA 00000000:0000 0A 00000000:00000000 00:00000000 00000000   101        0 21814 1 0000000000000000 100 0 0 10 0
   1: 00000000:0016 00000000:0000 0A 00000000:00000000 00:00000000 00000000     0        0 25043 1 0000000000000000 100 0 0 10 0
   2: 0100007F:8124 0100007F:0016 01 00000000:00000000 00:00000000 00000000  1000        0 31337 1 0000000000000000 20 4 30 10 -1
";

    #[test]
    fn parses_listening_sockets_only() {
        let ports = parse_proc_net_tcp(PROC_NET_TCP_SAMPLE);
        assert_eq!(ports.len(), 2);
        assert_eq!(ports[0].port, 0x0CEA);
        assert_eq!(ports[1].port, 22);
        assert_eq!(ports[1].state, "LISTEN");
    }

    #[test]
    fn decodes_ipv4_loopback() {
        let ports = parse_proc_net_tcp(PROC_NET_TCP_SAMPLE);
        assert_eq!(ports[0].address, "127.0.0.1");
        assert_eq!(ports[1].address, "0.0.0.0");
    }

    #[test]
    fn ipv6_address_kept_as_hex() {
        let addr = decode_proc_address("00000000000000000000000001000000");
        assert_eq!(addr, "00000000000000000000000001000000");
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let ports = parse_proc_net_tcp("header\ngarbage line\n   0: nonsense\n");
        assert!(ports.is_empty());
    }

    #[test]
    fn listening_ports_deduplicates_across_stacks() {
        // sshd usually listens on both v4 and v6; parsing both /proc files
        // must not double-count the port.
        let probe = SecurityProbe::new();
        let ports = probe.listening_ports();
        let mut seen = ports.iter().map(|p| p.port).collect::<Vec<_>>();
        let before = seen.len();
        seen.dedup();
        assert_eq!(seen.len(), before, "ports should already be unique");
    }

    #[test]
    fn parses_systemctl_output_line() {
        let record = parse_systemctl_line(
            "ssh.service loaded active running OpenBSD Secure Shell server",
        )
        .expect("valid line");
        assert_eq!(record.name, "ssh");
        assert_eq!(record.state, "running");
    }

    #[test]
    fn short_systemctl_line_is_skipped() {
        assert!(parse_systemctl_line("ssh.service loaded").is_none());
    }

    #[test]
    fn parses_update_notifier_text() {
        let content = "\n12 updates can be applied immediately.\n3 of these updates are standard security updates.\n";
        assert_eq!(parse_updates_available(content), 15);
    }

    #[test]
    fn no_updates_parses_to_zero() {
        assert_eq!(parse_updates_available("0 updates can be applied immediately.\n"), 0);
        assert_eq!(parse_updates_available(""), 0);
    }

    #[test]
    fn antivirus_detected_from_process_list() {
        let probe = SecurityProbe::new();
        let processes = vec![ProcessRecord {
            pid: 1234,
            name: "clamd".to_string(),
            ..ProcessRecord::default()
        }];
        let antivirus = probe.antivirus_state(&processes);
        assert!(antivirus.enabled);
        assert_eq!(antivirus.product.as_deref(), Some("ClamAV"));
    }

    #[test]
    fn antivirus_defaults_to_disabled() {
        let probe = SecurityProbe::new();
        let antivirus = probe.antivirus_state(&[]);
        assert!(!antivirus.enabled);
        assert!(antivirus.product.is_none());
    }
}
