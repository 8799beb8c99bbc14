//! Integer code to canonical name resolution.
//!
//! Each family is a closed, dense table indexed by the wire code. Casing is
//! per family and matches what dashboards already compare against: network
//! monitor names are uppercase, daemon names are lowercase.

/// Closed code domains carried by telemetry messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumFamily {
    /// Kind of network probe.
    NetworkCheckType,
    /// Outcome of a network probe.
    NetworkCheckStatus,
    /// Lifecycle state of a daemon-managed node.
    NodeStatus,
    /// Heartbeat health of a daemon-managed node.
    NodeHealth,
}

const NETWORK_CHECK_TYPES: &[&str] = &["HTTP", "DNS", "PING"];
const NETWORK_CHECK_STATUSES: &[&str] = &["OK", "FAILED", "TIMEOUT"];
const NODE_STATUSES: &[&str] = &[
    "unknown",
    "stopped",
    "running",
    "failed",
    "installing",
    "building",
    "not-installed",
];
const NODE_HEALTH: &[&str] = &["unknown", "healthy", "unhealthy"];

impl EnumFamily {
    fn table(self) -> &'static [&'static str] {
        match self {
            EnumFamily::NetworkCheckType => NETWORK_CHECK_TYPES,
            EnumFamily::NetworkCheckStatus => NETWORK_CHECK_STATUSES,
            EnumFamily::NodeStatus => NODE_STATUSES,
            EnumFamily::NodeHealth => NODE_HEALTH,
        }
    }

    /// Name returned for codes outside the table.
    pub fn fallback(self) -> &'static str {
        match self {
            EnumFamily::NetworkCheckType | EnumFamily::NetworkCheckStatus => "UNKNOWN",
            EnumFamily::NodeStatus | EnumFamily::NodeHealth => "unknown",
        }
    }
}

/// Resolve a wire code to its canonical name.
///
/// Total: negative and out-of-table codes resolve to
/// [`EnumFamily::fallback`].
///
/// # Examples
/// ```
/// use wirelens_core::{EnumFamily, resolve};
///
/// assert_eq!(resolve(EnumFamily::NetworkCheckType, 1), "DNS");
/// assert_eq!(resolve(EnumFamily::NodeStatus, 6), "not-installed");
/// assert_eq!(resolve(EnumFamily::NodeStatus, -1), "unknown");
/// ```
pub fn resolve(family: EnumFamily, code: i32) -> &'static str {
    usize::try_from(code)
        .ok()
        .and_then(|index| family.table().get(index))
        .copied()
        .unwrap_or_else(|| family.fallback())
}

#[cfg(test)]
mod tests {
    use super::{EnumFamily, resolve};

    #[test]
    fn network_check_type_names() {
        assert_eq!(resolve(EnumFamily::NetworkCheckType, 0), "HTTP");
        assert_eq!(resolve(EnumFamily::NetworkCheckType, 1), "DNS");
        assert_eq!(resolve(EnumFamily::NetworkCheckType, 2), "PING");
        assert_eq!(resolve(EnumFamily::NetworkCheckType, 99), "UNKNOWN");
    }

    #[test]
    fn network_check_status_names() {
        assert_eq!(resolve(EnumFamily::NetworkCheckStatus, 0), "OK");
        assert_eq!(resolve(EnumFamily::NetworkCheckStatus, 1), "FAILED");
        assert_eq!(resolve(EnumFamily::NetworkCheckStatus, 2), "TIMEOUT");
        assert_eq!(resolve(EnumFamily::NetworkCheckStatus, 3), "UNKNOWN");
    }

    #[test]
    fn node_status_names() {
        let expected = [
            "unknown",
            "stopped",
            "running",
            "failed",
            "installing",
            "building",
            "not-installed",
        ];
        for (code, name) in expected.iter().enumerate() {
            assert_eq!(resolve(EnumFamily::NodeStatus, code as i32), *name);
        }
        assert_eq!(resolve(EnumFamily::NodeStatus, 7), "unknown");
        assert_eq!(resolve(EnumFamily::NodeStatus, -1), "unknown");
    }

    #[test]
    fn node_health_names() {
        assert_eq!(resolve(EnumFamily::NodeHealth, 1), "healthy");
        assert_eq!(resolve(EnumFamily::NodeHealth, 2), "unhealthy");
        assert_eq!(resolve(EnumFamily::NodeHealth, i32::MIN), "unknown");
    }

    #[test]
    fn extreme_codes_fall_back() {
        for family in [
            EnumFamily::NetworkCheckType,
            EnumFamily::NetworkCheckStatus,
            EnumFamily::NodeStatus,
            EnumFamily::NodeHealth,
        ] {
            assert_eq!(resolve(family, i32::MAX), family.fallback());
            assert_eq!(resolve(family, i32::MIN), family.fallback());
        }
    }
}
