//! Failure boundary around the per-family parsers.
//!
//! Every public decode goes through [`Normalizer::contain`]: parser errors are
//! reported to the sink and replaced by the family's documented fallback
//! (`None`, or the empty frame for camera images). Nothing panics and nothing
//! is retained between calls.

use crate::diagnostics::{Diagnostic, DiagnosticScope, DiagnosticSink, TracingSink};
use crate::header::parse_header_probe;
use crate::messages::{camera, daemon, location, network, weather};
use crate::{
    CompressedImage, CurrentWeather, DailyForecast, DecodeError, Envelope, HourlyForecast,
    LocationConfig, LocationSettings, MessageFamily, NetworkStatus, NodeEvent, NodeList,
    TelemetryRecord,
};

/// Decodes telemetry payloads into records, reporting failures to `S`.
///
/// # Examples
/// ```
/// use wirelens_core::{CollectingSink, Normalizer};
///
/// let normalizer = Normalizer::with_sink(CollectingSink::default());
/// let frame = normalizer.compressed_image(b"\xff\xff");
/// assert!(frame.is_empty());
/// assert_eq!(normalizer.sink().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Normalizer<S = TracingSink> {
    sink: S,
}

impl Normalizer<TracingSink> {
    /// A normalizer that logs diagnostics through `tracing`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: DiagnosticSink> Normalizer<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Decode a camera frame; failures yield [`CompressedImage::empty`].
    pub fn compressed_image(&self, payload: &[u8]) -> CompressedImage {
        self.contain(
            MessageFamily::CompressedImage,
            camera::parse_compressed_image(payload),
        )
        .unwrap_or_else(CompressedImage::empty)
    }

    pub fn network_status(&self, payload: &[u8]) -> Option<NetworkStatus> {
        self.contain(
            MessageFamily::NetworkStatus,
            network::parse_network_status(payload, &self.sink),
        )
    }

    pub fn node_list(&self, payload: &[u8]) -> Option<NodeList> {
        self.contain(
            MessageFamily::NodeList,
            daemon::parse_node_list(payload, &self.sink),
        )
    }

    pub fn node_event(&self, payload: &[u8]) -> Option<NodeEvent> {
        self.contain(
            MessageFamily::NodeEvent,
            daemon::parse_node_event(payload, &self.sink),
        )
    }

    pub fn current_weather(&self, payload: &[u8]) -> Option<CurrentWeather> {
        self.contain(
            MessageFamily::CurrentWeather,
            weather::parse_current_weather(payload),
        )
    }

    pub fn hourly_forecast(&self, payload: &[u8]) -> Option<HourlyForecast> {
        self.contain(
            MessageFamily::HourlyForecast,
            weather::parse_hourly_forecast(payload),
        )
    }

    pub fn daily_forecast(&self, payload: &[u8]) -> Option<DailyForecast> {
        self.contain(
            MessageFamily::DailyForecast,
            weather::parse_daily_forecast(payload),
        )
    }

    pub fn location_config(&self, payload: &[u8]) -> Option<LocationConfig> {
        self.contain(
            MessageFamily::LocationConfig,
            location::parse_location_config(payload),
        )
    }

    /// Envelope of any message that carries its header at field 1.
    pub fn header(&self, payload: &[u8]) -> Option<Envelope> {
        match parse_header_probe(payload) {
            Ok(envelope) => envelope,
            Err(error) => {
                self.sink.report(Diagnostic {
                    family: "header",
                    scope: DiagnosticScope::Message,
                    error,
                });
                None
            }
        }
    }

    /// Decode a payload of a family known only at runtime.
    ///
    /// Camera frames always produce a record (possibly the empty frame).
    pub fn decode(&self, family: MessageFamily, payload: &[u8]) -> Option<TelemetryRecord> {
        match family {
            MessageFamily::CompressedImage => Some(TelemetryRecord::CompressedImage(
                self.compressed_image(payload),
            )),
            MessageFamily::NetworkStatus => {
                self.network_status(payload).map(TelemetryRecord::NetworkStatus)
            }
            MessageFamily::NodeList => self.node_list(payload).map(TelemetryRecord::NodeList),
            MessageFamily::NodeEvent => self.node_event(payload).map(TelemetryRecord::NodeEvent),
            MessageFamily::CurrentWeather => self
                .current_weather(payload)
                .map(TelemetryRecord::CurrentWeather),
            MessageFamily::HourlyForecast => self
                .hourly_forecast(payload)
                .map(TelemetryRecord::HourlyForecast),
            MessageFamily::DailyForecast => self
                .daily_forecast(payload)
                .map(TelemetryRecord::DailyForecast),
            MessageFamily::LocationConfig => self
                .location_config(payload)
                .map(TelemetryRecord::LocationConfig),
        }
    }

    fn contain<T>(&self, family: MessageFamily, result: Result<T, DecodeError>) -> Option<T> {
        match result {
            Ok(record) => Some(record),
            Err(error) => {
                self.sink.report(Diagnostic {
                    family: family.name(),
                    scope: DiagnosticScope::Message,
                    error,
                });
                None
            }
        }
    }
}

/// Decode a camera frame, logging failures through `tracing`.
pub fn decode_compressed_image(payload: &[u8]) -> CompressedImage {
    Normalizer::new().compressed_image(payload)
}

pub fn decode_network_status(payload: &[u8]) -> Option<NetworkStatus> {
    Normalizer::new().network_status(payload)
}

pub fn decode_node_list(payload: &[u8]) -> Option<NodeList> {
    Normalizer::new().node_list(payload)
}

pub fn decode_node_event(payload: &[u8]) -> Option<NodeEvent> {
    Normalizer::new().node_event(payload)
}

pub fn decode_current_weather(payload: &[u8]) -> Option<CurrentWeather> {
    Normalizer::new().current_weather(payload)
}

pub fn decode_hourly_forecast(payload: &[u8]) -> Option<HourlyForecast> {
    Normalizer::new().hourly_forecast(payload)
}

pub fn decode_daily_forecast(payload: &[u8]) -> Option<DailyForecast> {
    Normalizer::new().daily_forecast(payload)
}

pub fn decode_location_config(payload: &[u8]) -> Option<LocationConfig> {
    Normalizer::new().location_config(payload)
}

pub fn decode_message(family: MessageFamily, payload: &[u8]) -> Option<TelemetryRecord> {
    Normalizer::new().decode(family, payload)
}

/// Extract the envelope from any message with a header at field 1.
pub fn peek_header(payload: &[u8]) -> Option<Envelope> {
    Normalizer::new().header(payload)
}

/// Encode location settings to wire bytes; a missing timezone is sent as "".
///
/// # Examples
/// ```
/// use wirelens_core::{LocationSettings, decode_location_config, encode_location_config};
///
/// let settings = LocationSettings {
///     latitude: 41.39,
///     longitude: 2.17,
///     timezone: None,
/// };
/// let config = decode_location_config(&encode_location_config(&settings)).unwrap();
/// assert_eq!(config.timezone, "");
/// ```
pub fn encode_location_config(settings: &LocationSettings) -> Vec<u8> {
    location::encode_location(settings)
}
