use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A listening TCP port observed on the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenPort {
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
}

/// A system service and its unit state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: String,
}

/// Pending package update information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMetrics {
    #[serde(default)]
    pub updates_available: u32,
    #[serde(default)]
    pub last_update: Option<String>,
}

/// Host firewall state. `enabled` defaults to false so an unprobeable
/// firewall is reported as a finding rather than silently passing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallMetrics {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub rules: Vec<String>,
}

/// Antivirus presence. Same default-false convention as the firewall.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntivirusMetrics {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub last_scan: Option<String>,
}

/// One SSL certificate and its expiry flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslCertificate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expired: bool,
    #[serde(default)]
    pub expiring_soon: bool,
}
