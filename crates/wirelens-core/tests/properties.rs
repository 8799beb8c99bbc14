use proptest::prelude::*;
use wirelens_core::{
    LocationConfig, LocationSettings, MessageFamily, Normalizer, NullSink, TelemetryRecord,
    WireInt, decode_location_config, encode_location_config, reconcile,
};

fn family_strategy() -> impl Strategy<Value = MessageFamily> {
    prop::sample::select(MessageFamily::ALL.to_vec())
}

fn timezone_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[A-Za-z_]{0,12}(/[A-Za-z_]{1,12})?")
}

proptest! {
    /// Arbitrary bytes never panic and decode the same way twice.
    #[test]
    fn arbitrary_bytes_are_contained(
        family in family_strategy(),
        bytes in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let normalizer = Normalizer::with_sink(NullSink);
        let first = normalizer.decode(family, &bytes);
        let second = normalizer.decode(family, &bytes);
        // Debug output compares NaN fields as equal.
        prop_assert_eq!(format!("{first:?}"), format!("{second:?}"));
        if family.has_sentinel() {
            prop_assert!(matches!(first, Some(TelemetryRecord::CompressedImage(_))));
        }
        prop_assert_eq!(normalizer.header(&bytes), normalizer.header(&bytes));
    }

    /// Location settings survive an encode/decode round trip.
    #[test]
    fn location_round_trips(
        latitude in prop_oneof![Just(0.0_f64), -90.0_f64..90.0],
        longitude in prop_oneof![Just(0.0_f64), -180.0_f64..180.0],
        timezone in timezone_strategy(),
    ) {
        let settings = LocationSettings { latitude, longitude, timezone };
        let bytes = encode_location_config(&settings);
        prop_assert!(!bytes.is_empty());
        let decoded = decode_location_config(&bytes);
        prop_assert_eq!(
            decoded,
            Some(LocationConfig {
                latitude,
                longitude,
                timezone: settings.normalized_timezone().to_string(),
            })
        );
    }

    /// Every native 64-bit value is reconciled exactly from its split halves.
    #[test]
    fn split_halves_reconcile_exactly(value in any::<i64>()) {
        prop_assert_eq!(reconcile(value), value);
        prop_assert_eq!(reconcile(WireInt::Decimal(value.to_string())), value);
        if value >= 0 {
            prop_assert_eq!(reconcile(value as u64), value);
        }
    }
}
