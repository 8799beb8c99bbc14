//! Normalized domain records handed to presentation code.
//!
//! Every field is concrete: wire absence is resolved to the documented default
//! at decode time. The only `Option`s left are the ones whose absence carries
//! meaning (no header, no summary, no attached node state). Enum-coded fields
//! keep the raw code next to the resolved name.

use serde::{Deserialize, Serialize};

/// Provenance envelope shared by most families.
///
/// A record without an envelope (`header: None`) is distinct from an envelope
/// whose fields are all zero.
///
/// # Examples
/// ```
/// use wirelens_core::Envelope;
///
/// let envelope = Envelope {
///     acquisition_time: 1_700_000_000_000_000_000,
///     sequence: 7,
///     frame_id: "cam0".to_string(),
///     ..Envelope::default()
/// };
/// assert!(envelope.machine_id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Envelope {
    /// Acquisition time, nanoseconds since the Unix epoch.
    pub acquisition_time: i64,
    /// Publication time, nanoseconds since the Unix epoch.
    pub publish_time: i64,
    /// Per-publisher sequence number.
    pub sequence: u32,
    /// Source identifier (camera name, probe name, ...).
    pub frame_id: String,
    /// Machine that produced the message, when the sender reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_id: Option<String>,
    /// Deployment scope, when the sender reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// One compressed camera frame.
///
/// The `Default` value doubles as the empty sentinel returned when a frame
/// cannot be decoded.
///
/// # Examples
/// ```
/// use wirelens_core::CompressedImage;
///
/// let empty = CompressedImage::empty();
/// assert!(empty.is_empty());
/// assert!(empty.header.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompressedImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Envelope>,
    /// Codec name (e.g. "h264", "jpeg"); "" when unknown.
    pub format: String,
    /// Encoded frame payload.
    pub data: Vec<u8>,
}

impl CompressedImage {
    /// The placeholder frame: no header, no format, no payload.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True for the placeholder frame.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.format.is_empty() && self.data.is_empty()
    }
}

/// Result of one network probe.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HealthCheck {
    pub name: String,
    pub check_type: i32,
    /// "HTTP", "DNS", "PING" or "UNKNOWN".
    pub check_type_name: String,
    pub target: String,
    pub status: i32,
    /// "OK", "FAILED", "TIMEOUT" or "UNKNOWN".
    pub status_name: String,
    pub latency_ms: f64,
    pub error_message: String,
    /// Protocol status code (HTTP), 0 when not applicable.
    pub status_code: u32,
}

/// Probe counters for one network status report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkSummary {
    pub total: u32,
    pub healthy: u32,
    pub unhealthy: u32,
}

/// Network monitor report.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetworkStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Envelope>,
    /// Probes in wire order; undecodable probes are omitted.
    pub checks: Vec<HealthCheck>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<NetworkSummary>,
}

/// State of one daemon-managed node.
///
/// # Examples
/// ```
/// use wirelens_core::NodeState;
///
/// let state = NodeState::default();
/// assert_eq!(state.version, "");
/// assert!(!state.installed);
/// assert!(state.machine_ips.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeState {
    pub name: String,
    pub path: String,
    pub status: i32,
    /// Lowercase lifecycle name, e.g. "running" or "not-installed".
    pub status_name: String,
    pub installed: bool,
    pub autostart_enabled: bool,
    pub version: String,
    pub description: String,
    pub node_type: String,
    pub is_built: bool,
    pub last_updated_ms: i64,
    /// Captured build log lines, oldest first.
    pub build_output: Vec<String>,
    pub health_status: i32,
    /// "unknown", "healthy" or "unhealthy".
    pub health_status_name: String,
    pub last_health_check_ms: i64,
    pub machine_id: String,
    pub machine_hostname: String,
    pub machine_ips: Vec<String>,
    /// Node this instance was derived from; "" for base nodes.
    pub base_node: String,
    pub config_override: String,
}

/// Snapshot of all nodes on one machine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeList {
    pub nodes: Vec<NodeState>,
    pub timestamp_ms: i64,
    pub machine_id: String,
}

/// Single node state change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeEvent {
    pub event_type: String,
    pub node_name: String,
    /// Attached state; `None` when missing or undecodable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<NodeState>,
    pub timestamp_ms: i64,
}

/// Current weather observation for one location.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentWeather {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Envelope>,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub apparent_temperature: f64,
    pub precipitation: f64,
    pub rain: f64,
    pub weather_code: u32,
    pub cloud_cover: f64,
    pub pressure_msl: f64,
    pub surface_pressure: f64,
    pub wind_speed_10m: f64,
    pub wind_direction_10m: f64,
    pub wind_gusts_10m: f64,
    pub is_day: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HourlyForecastEntry {
    /// Slot start, seconds since the Unix epoch.
    pub time: i64,
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub precipitation_probability: f64,
    pub precipitation: f64,
    pub weather_code: u32,
    pub wind_speed_10m: f64,
    pub wind_direction_10m: f64,
    pub cloud_cover: f64,
}

/// Hourly forecast, entries in wire order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HourlyForecast {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Envelope>,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub entries: Vec<HourlyForecastEntry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyForecastEntry {
    /// Day start, seconds since the Unix epoch.
    pub time: i64,
    pub temperature_2m_max: f64,
    pub temperature_2m_min: f64,
    pub precipitation_sum: f64,
    pub precipitation_probability_max: f64,
    pub weather_code: u32,
    pub wind_speed_10m_max: f64,
    pub wind_gusts_10m_max: f64,
    pub wind_direction_10m_dominant: f64,
}

/// Daily forecast, entries in wire order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyForecast {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Envelope>,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub entries: Vec<DailyForecastEntry>,
}

/// Weather location as published on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone name, or "" to let the weather service decide.
    pub timezone: String,
}

/// Location settings as a user or config file supplies them.
///
/// # Examples
/// ```
/// use wirelens_core::LocationSettings;
///
/// let settings = LocationSettings::from_json(r#"{"latitude": 41.39, "longitude": 2.17}"#)?;
/// assert_eq!(settings.timezone, None);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationSettings {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl LocationSettings {
    /// Parse settings from a JSON document.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Timezone with missing and empty values folded to "".
    pub fn normalized_timezone(&self) -> &str {
        self.timezone.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_options_are_omitted_from_json() {
        let image = CompressedImage {
            header: Some(Envelope::default()),
            format: "jpeg".to_string(),
            data: vec![1, 2],
        };
        let value = serde_json::to_value(&image).expect("image json");
        let header = value.get("header").expect("header");
        assert!(header.get("machine_id").is_none());
        assert!(header.get("scope").is_none());

        let value = serde_json::to_value(CompressedImage::empty()).expect("sentinel json");
        assert!(value.get("header").is_none());
        assert_eq!(value["format"], "");

        let event = NodeEvent::default();
        let value = serde_json::to_value(&event).expect("event json");
        assert!(value.get("state").is_none());
    }

    #[test]
    fn sentinel_detection() {
        assert!(CompressedImage::empty().is_empty());
        let frame = CompressedImage {
            format: "h264".to_string(),
            ..CompressedImage::default()
        };
        assert!(!frame.is_empty());
    }

    #[test]
    fn location_settings_timezone_normalization() {
        let mut settings = LocationSettings::from_json(
            r#"{"latitude": 1.5, "longitude": -2.5, "timezone": "Europe/Madrid"}"#,
        )
        .expect("settings");
        assert_eq!(settings.normalized_timezone(), "Europe/Madrid");
        settings.timezone = Some(String::new());
        assert_eq!(settings.normalized_timezone(), "");
        settings.timezone = None;
        assert_eq!(settings.normalized_timezone(), "");
    }

    #[test]
    fn location_settings_reject_missing_coordinates() {
        assert!(LocationSettings::from_json(r#"{"latitude": 1.0}"#).is_err());
    }
}
