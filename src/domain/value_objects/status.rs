use serde::{Deserialize, Serialize};

/// Classification of a single category check
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Normal,
    Warning,
    Critical,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Overall health classification of a domain, derived from its score
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    #[default]
    Healthy,
    Warning,
    Critical,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn status_ordering() {
        assert!(Status::Normal < Status::Warning);
        assert!(Status::Warning < Status::Critical);
    }

    #[test]
    fn status_display() {
        assert_eq!(Status::Normal.to_string(), "normal");
        assert_eq!(Status::Warning.to_string(), "warning");
        assert_eq!(Status::Critical.to_string(), "critical");
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&Status::Critical).expect("serialize");
        assert_eq!(json, "\"critical\"");
    }

    #[test]
    fn health_status_serializes_lowercase() {
        let json = serde_json::to_string(&HealthStatus::Healthy).expect("serialize");
        assert_eq!(json, "\"healthy\"");
    }

    #[test]
    fn defaults_are_benign() {
        assert_eq!(Status::default(), Status::Normal);
        assert_eq!(HealthStatus::default(), HealthStatus::Healthy);
    }
}
