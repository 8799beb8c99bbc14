use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    CompressedImage, CurrentWeather, DailyForecast, FamilyParseError, HourlyForecast,
    LocationConfig, NetworkStatus, NodeEvent, NodeList,
};

/// The telemetry message families this crate understands.
///
/// # Examples
/// ```
/// use wirelens_core::MessageFamily;
///
/// let family: MessageFamily = "node_list".parse()?;
/// assert_eq!(family.type_name(), "telemetry.daemon.v1.NodeList");
/// assert_eq!(
///     MessageFamily::from_type_name("telemetry.camera.v1.CompressedImage"),
///     Some(MessageFamily::CompressedImage)
/// );
/// # Ok::<(), wirelens_core::FamilyParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageFamily {
    CompressedImage,
    NetworkStatus,
    NodeList,
    NodeEvent,
    CurrentWeather,
    HourlyForecast,
    DailyForecast,
    LocationConfig,
}

impl MessageFamily {
    pub const ALL: [MessageFamily; 8] = [
        MessageFamily::CompressedImage,
        MessageFamily::NetworkStatus,
        MessageFamily::NodeList,
        MessageFamily::NodeEvent,
        MessageFamily::CurrentWeather,
        MessageFamily::HourlyForecast,
        MessageFamily::DailyForecast,
        MessageFamily::LocationConfig,
    ];

    /// Stable short name, used in diagnostics and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            MessageFamily::CompressedImage => "compressed_image",
            MessageFamily::NetworkStatus => "network_status",
            MessageFamily::NodeList => "node_list",
            MessageFamily::NodeEvent => "node_event",
            MessageFamily::CurrentWeather => "current_weather",
            MessageFamily::HourlyForecast => "hourly_forecast",
            MessageFamily::DailyForecast => "daily_forecast",
            MessageFamily::LocationConfig => "location_config",
        }
    }

    /// Fully qualified protobuf message name.
    pub fn type_name(self) -> &'static str {
        match self {
            MessageFamily::CompressedImage => "telemetry.camera.v1.CompressedImage",
            MessageFamily::NetworkStatus => "telemetry.network_monitor.v1.NetworkStatus",
            MessageFamily::NodeList => "telemetry.daemon.v1.NodeList",
            MessageFamily::NodeEvent => "telemetry.daemon.v1.NodeEvent",
            MessageFamily::CurrentWeather => "telemetry.weather.v1.CurrentWeather",
            MessageFamily::HourlyForecast => "telemetry.weather.v1.HourlyForecast",
            MessageFamily::DailyForecast => "telemetry.weather.v1.DailyForecast",
            MessageFamily::LocationConfig => "telemetry.weather.v1.LocationConfig",
        }
    }

    pub fn from_type_name(type_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.type_name() == type_name)
    }

    /// Whether a failed decode still yields a (sentinel) record.
    pub fn has_sentinel(self) -> bool {
        matches!(self, MessageFamily::CompressedImage)
    }
}

impl fmt::Display for MessageFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MessageFamily {
    type Err = FamilyParseError;

    /// Accepts the short name (case-insensitive, `-` or `_`) or the protobuf
    /// type name.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let short = value.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|family| family.name() == short)
            .or_else(|| Self::from_type_name(value.trim()))
            .ok_or_else(|| FamilyParseError {
                name: value.to_string(),
            })
    }
}

/// A decoded record of any family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", content = "record", rename_all = "snake_case")]
pub enum TelemetryRecord {
    CompressedImage(CompressedImage),
    NetworkStatus(NetworkStatus),
    NodeList(NodeList),
    NodeEvent(NodeEvent),
    CurrentWeather(CurrentWeather),
    HourlyForecast(HourlyForecast),
    DailyForecast(DailyForecast),
    LocationConfig(LocationConfig),
}

impl TelemetryRecord {
    pub fn family(&self) -> MessageFamily {
        match self {
            TelemetryRecord::CompressedImage(_) => MessageFamily::CompressedImage,
            TelemetryRecord::NetworkStatus(_) => MessageFamily::NetworkStatus,
            TelemetryRecord::NodeList(_) => MessageFamily::NodeList,
            TelemetryRecord::NodeEvent(_) => MessageFamily::NodeEvent,
            TelemetryRecord::CurrentWeather(_) => MessageFamily::CurrentWeather,
            TelemetryRecord::HourlyForecast(_) => MessageFamily::HourlyForecast,
            TelemetryRecord::DailyForecast(_) => MessageFamily::DailyForecast,
            TelemetryRecord::LocationConfig(_) => MessageFamily::LocationConfig,
        }
    }
}
