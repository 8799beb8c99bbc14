use prost::Message;

use super::common::read_payload;
use crate::{DecodeError, LocationConfig, LocationSettings, wire};

/// Encode location settings for publication.
///
/// A missing or empty timezone is sent as "".
pub(crate) fn encode_location(settings: &LocationSettings) -> Vec<u8> {
    wire::LocationConfig {
        latitude: Some(settings.latitude),
        longitude: Some(settings.longitude),
        timezone: settings.normalized_timezone().to_string(),
    }
    .encode_to_vec()
}

pub(crate) fn parse_location_config(payload: &[u8]) -> Result<LocationConfig, DecodeError> {
    let raw: wire::LocationConfig = read_payload(payload)?;
    Ok(LocationConfig {
        latitude: raw.latitude.unwrap_or_default(),
        longitude: raw.longitude.unwrap_or_default(),
        timezone: raw.timezone,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(latitude: f64, longitude: f64, timezone: Option<&str>) -> LocationSettings {
        LocationSettings {
            latitude,
            longitude,
            timezone: timezone.map(str::to_string),
        }
    }

    #[test]
    fn round_trip_representative_locations() {
        let cases = [
            settings(41.3874, 2.1686, Some("Europe/Madrid")),
            settings(-33.8688, 151.2093, Some("Australia/Sydney")),
            settings(64.1466, -21.9426, Some("")),
            settings(-90.0, 180.0, None),
        ];
        for case in cases {
            let decoded = parse_location_config(&encode_location(&case)).unwrap();
            assert_eq!(
                decoded,
                LocationConfig {
                    latitude: case.latitude,
                    longitude: case.longitude,
                    timezone: case.timezone.clone().unwrap_or_default(),
                }
            );
        }
    }

    #[test]
    fn empty_and_missing_timezone_encode_identically() {
        let empty = encode_location(&settings(1.0, 2.0, Some("")));
        let missing = encode_location(&settings(1.0, 2.0, None));
        assert_eq!(empty, missing);
    }

    #[test]
    fn origin_round_trips() {
        for timezone in [None, Some("")] {
            let bytes = encode_location(&settings(0.0, 0.0, timezone));
            assert!(!bytes.is_empty());
            assert_eq!(
                parse_location_config(&bytes),
                Ok(LocationConfig {
                    latitude: 0.0,
                    longitude: 0.0,
                    timezone: String::new(),
                })
            );
        }
    }

    #[test]
    fn sender_omitting_default_coordinates_still_decodes() {
        // Field 3 only, as an implicit-presence sender writes (0, 0, "UTC").
        let payload = [0x1a, 0x03, b'U', b'T', b'C'];
        let config = parse_location_config(&payload).unwrap();
        assert_eq!((config.latitude, config.longitude), (0.0, 0.0));
        assert_eq!(config.timezone, "UTC");
    }

    #[test]
    fn empty_payload_is_rejected() {
        assert_eq!(parse_location_config(&[]), Err(DecodeError::Empty));
    }
}
