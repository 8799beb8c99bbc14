//! Wire schemas for every telemetry family.
//!
//! These are the protobuf messages exactly as senders publish them; tag
//! numbers here are the source of truth for the binary layout. Decoders in
//! `messages` never touch raw bytes directly, they go through these types.
//!
//! Repeated entries that must fail independently (health checks, node
//! states) and the optional node state of an event are declared as `bytes`
//! on the container. Length-delimited bytes and embedded messages share the
//! same wire encoding, so senders are unaffected, but each entry can be
//! decoded on its own and dropped without losing its siblings.

use prost::Message;

/// Common provenance envelope (`telemetry.header.v1.Header`).
#[derive(Clone, PartialEq, Message)]
pub struct Header {
    /// Acquisition time, nanoseconds since the Unix epoch.
    #[prost(uint64, tag = "1")]
    pub acq_time: u64,
    /// Publication time, nanoseconds since the Unix epoch.
    #[prost(uint64, tag = "2")]
    pub pub_time: u64,
    #[prost(uint32, tag = "3")]
    pub sequence: u32,
    #[prost(string, tag = "4")]
    pub frame_id: String,
    #[prost(string, optional, tag = "5")]
    pub machine_id: Option<String>,
    #[prost(string, optional, tag = "6")]
    pub scope: Option<String>,
}

/// Any message carrying its header at field 1.
///
/// Protobuf skips unknown fields, so this decodes the header out of every
/// family that follows the convention and ignores the rest.
#[derive(Clone, PartialEq, Message)]
pub struct HeaderProbe {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
}

/// `telemetry.camera.v1.CompressedImage`
#[derive(Clone, PartialEq, Message)]
pub struct CompressedImage {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(string, tag = "2")]
    pub format: String,
    #[prost(bytes = "vec", tag = "3")]
    pub data: Vec<u8>,
}

/// `telemetry.network_monitor.v1.HealthCheck`
#[derive(Clone, PartialEq, Message)]
pub struct HealthCheck {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(int32, tag = "2")]
    pub check_type: i32,
    #[prost(string, tag = "3")]
    pub target: String,
    #[prost(int32, tag = "4")]
    pub status: i32,
    #[prost(double, tag = "5")]
    pub latency_ms: f64,
    #[prost(string, tag = "6")]
    pub error_message: String,
    #[prost(uint32, tag = "7")]
    pub status_code: u32,
}

/// `telemetry.network_monitor.v1.Summary`
#[derive(Clone, PartialEq, Message)]
pub struct Summary {
    #[prost(uint32, tag = "1")]
    pub total: u32,
    #[prost(uint32, tag = "2")]
    pub healthy: u32,
    #[prost(uint32, tag = "3")]
    pub unhealthy: u32,
}

/// `telemetry.network_monitor.v1.NetworkStatus`
#[derive(Clone, PartialEq, Message)]
pub struct NetworkStatus {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    /// Encoded [`HealthCheck`] entries.
    #[prost(bytes = "vec", repeated, tag = "2")]
    pub checks: Vec<Vec<u8>>,
    #[prost(message, optional, tag = "3")]
    pub summary: Option<Summary>,
}

/// `telemetry.daemon.v1.NodeState`
#[derive(Clone, PartialEq, Message)]
pub struct NodeState {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub path: String,
    #[prost(int32, tag = "3")]
    pub status: i32,
    #[prost(bool, tag = "4")]
    pub installed: bool,
    #[prost(bool, tag = "5")]
    pub autostart_enabled: bool,
    #[prost(string, tag = "6")]
    pub version: String,
    #[prost(string, tag = "7")]
    pub description: String,
    #[prost(string, tag = "8")]
    pub node_type: String,
    #[prost(bool, tag = "9")]
    pub is_built: bool,
    #[prost(int64, tag = "10")]
    pub last_updated_ms: i64,
    #[prost(string, repeated, tag = "11")]
    pub build_output: Vec<String>,
    #[prost(int32, tag = "12")]
    pub health_status: i32,
    #[prost(int64, tag = "13")]
    pub last_health_check_ms: i64,
    #[prost(string, tag = "14")]
    pub machine_id: String,
    #[prost(string, tag = "15")]
    pub machine_hostname: String,
    #[prost(string, repeated, tag = "16")]
    pub machine_ips: Vec<String>,
    #[prost(string, tag = "17")]
    pub base_node: String,
    #[prost(string, tag = "18")]
    pub config_override: String,
}

/// `telemetry.daemon.v1.NodeList`
#[derive(Clone, PartialEq, Message)]
pub struct NodeList {
    /// Encoded [`NodeState`] entries.
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub nodes: Vec<Vec<u8>>,
    #[prost(int64, tag = "2")]
    pub timestamp_ms: i64,
    #[prost(string, tag = "3")]
    pub machine_id: String,
}

/// `telemetry.daemon.v1.NodeEvent`
#[derive(Clone, PartialEq, Message)]
pub struct NodeEvent {
    #[prost(string, tag = "1")]
    pub event_type: String,
    #[prost(string, tag = "2")]
    pub node_name: String,
    /// Encoded [`NodeState`], when the sender attached one.
    #[prost(bytes = "vec", optional, tag = "3")]
    pub state: Option<Vec<u8>>,
    #[prost(int64, tag = "4")]
    pub timestamp_ms: i64,
}

/// `telemetry.weather.v1.CurrentWeather`
#[derive(Clone, PartialEq, Message)]
pub struct CurrentWeather {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(double, tag = "2")]
    pub latitude: f64,
    #[prost(double, tag = "3")]
    pub longitude: f64,
    #[prost(string, tag = "4")]
    pub timezone: String,
    #[prost(double, tag = "5")]
    pub temperature_2m: f64,
    #[prost(double, tag = "6")]
    pub relative_humidity_2m: f64,
    #[prost(double, tag = "7")]
    pub apparent_temperature: f64,
    #[prost(double, tag = "8")]
    pub precipitation: f64,
    #[prost(double, tag = "9")]
    pub rain: f64,
    #[prost(uint32, tag = "10")]
    pub weather_code: u32,
    #[prost(double, tag = "11")]
    pub cloud_cover: f64,
    #[prost(double, tag = "12")]
    pub pressure_msl: f64,
    #[prost(double, tag = "13")]
    pub surface_pressure: f64,
    #[prost(double, tag = "14")]
    pub wind_speed_10m: f64,
    #[prost(double, tag = "15")]
    pub wind_direction_10m: f64,
    #[prost(double, tag = "16")]
    pub wind_gusts_10m: f64,
    #[prost(uint32, tag = "17")]
    pub is_day: u32,
}

/// `telemetry.weather.v1.HourlyForecastEntry`
#[derive(Clone, PartialEq, Message)]
pub struct HourlyForecastEntry {
    /// Slot start, seconds since the Unix epoch.
    #[prost(int64, tag = "1")]
    pub time: i64,
    #[prost(double, tag = "2")]
    pub temperature_2m: f64,
    #[prost(double, tag = "3")]
    pub relative_humidity_2m: f64,
    #[prost(double, tag = "4")]
    pub precipitation_probability: f64,
    #[prost(double, tag = "5")]
    pub precipitation: f64,
    #[prost(uint32, tag = "6")]
    pub weather_code: u32,
    #[prost(double, tag = "7")]
    pub wind_speed_10m: f64,
    #[prost(double, tag = "8")]
    pub wind_direction_10m: f64,
    #[prost(double, tag = "9")]
    pub cloud_cover: f64,
}

/// `telemetry.weather.v1.HourlyForecast`
#[derive(Clone, PartialEq, Message)]
pub struct HourlyForecast {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(double, tag = "2")]
    pub latitude: f64,
    #[prost(double, tag = "3")]
    pub longitude: f64,
    #[prost(string, tag = "4")]
    pub timezone: String,
    #[prost(message, repeated, tag = "5")]
    pub entries: Vec<HourlyForecastEntry>,
}

/// `telemetry.weather.v1.DailyForecastEntry`
#[derive(Clone, PartialEq, Message)]
pub struct DailyForecastEntry {
    /// Day start, seconds since the Unix epoch.
    #[prost(int64, tag = "1")]
    pub time: i64,
    #[prost(double, tag = "2")]
    pub temperature_2m_max: f64,
    #[prost(double, tag = "3")]
    pub temperature_2m_min: f64,
    #[prost(double, tag = "4")]
    pub precipitation_sum: f64,
    #[prost(double, tag = "5")]
    pub precipitation_probability_max: f64,
    #[prost(uint32, tag = "6")]
    pub weather_code: u32,
    #[prost(double, tag = "7")]
    pub wind_speed_10m_max: f64,
    #[prost(double, tag = "8")]
    pub wind_gusts_10m_max: f64,
    #[prost(double, tag = "9")]
    pub wind_direction_10m_dominant: f64,
}

/// `telemetry.weather.v1.DailyForecast`
#[derive(Clone, PartialEq, Message)]
pub struct DailyForecast {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(double, tag = "2")]
    pub latitude: f64,
    #[prost(double, tag = "3")]
    pub longitude: f64,
    #[prost(string, tag = "4")]
    pub timezone: String,
    #[prost(message, repeated, tag = "5")]
    pub entries: Vec<DailyForecastEntry>,
}

/// `telemetry.weather.v1.LocationConfig`
///
/// Coordinates use explicit presence so that the origin is still written;
/// the tags and wire types are unchanged for receivers.
#[derive(Clone, PartialEq, Message)]
pub struct LocationConfig {
    #[prost(double, optional, tag = "1")]
    pub latitude: Option<f64>,
    #[prost(double, optional, tag = "2")]
    pub longitude: Option<f64>,
    #[prost(string, tag = "3")]
    pub timezone: String,
}
