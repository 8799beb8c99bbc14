//! WireLens core library: decode and normalize robot telemetry messages.
//!
//! Producers publish protobuf payloads per message family (camera frames,
//! network probes, daemon node state, weather). This crate turns each payload
//! into a plain, serde-serializable record that presentation code can use
//! without knowing anything about the wire format:
//! wire schema (`wire`) -> family parsers -> [`Normalizer`] -> records.
//!
//! Invariants:
//! - Decoding never panics and never returns an error to the caller. A payload
//!   that cannot be decoded yields `None` (or the empty camera frame) and a
//!   [`Diagnostic`] on the injected [`DiagnosticSink`].
//! - One malformed entry of a repeated collection is dropped; its siblings are
//!   kept in wire order.
//! - 64-bit integers are reconciled exactly ([`reconcile`]) and enum codes
//!   resolve to canonical names with a per-family fallback ([`resolve`]).
//! - Every call is single-shot; no state is kept between calls.
//!
//! # Examples
//! ```
//! use wirelens_core::{MessageFamily, decode_message, decode_node_list};
//!
//! assert!(decode_node_list(&[]).is_none());
//!
//! let frame = decode_message(MessageFamily::CompressedImage, b"\xff").unwrap();
//! assert_eq!(frame.family(), MessageFamily::CompressedImage);
//! ```

mod diagnostics;
mod enums;
mod error;
mod family;
mod header;
mod messages;
mod normalizer;
mod numeric;
mod records;
mod timefmt;
pub mod wire;

pub use diagnostics::{
    CollectingSink, Diagnostic, DiagnosticScope, DiagnosticSink, NullSink, TracingSink,
};
pub use enums::{EnumFamily, resolve};
pub use error::{DecodeError, FamilyParseError};
pub use family::{MessageFamily, TelemetryRecord};
pub use header::normalize_header;
pub use normalizer::{
    Normalizer, decode_compressed_image, decode_current_weather, decode_daily_forecast,
    decode_hourly_forecast, decode_location_config, decode_message, decode_network_status,
    decode_node_event, decode_node_list, encode_location_config, peek_header,
};
pub use numeric::{WireInt, reconcile};
pub use records::{
    CompressedImage, CurrentWeather, DailyForecast, DailyForecastEntry, Envelope, HealthCheck,
    HourlyForecast, HourlyForecastEntry, LocationConfig, LocationSettings, NetworkStatus,
    NetworkSummary, NodeEvent, NodeList, NodeState,
};
pub use timefmt::timestamp_to_rfc3339;
