use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Render an envelope timestamp (nanoseconds since the Unix epoch) as RFC3339.
///
/// Zero is the "not reported" default and renders as `None`, as does anything
/// `time` cannot represent.
///
/// # Examples
/// ```
/// use wirelens_core::timestamp_to_rfc3339;
///
/// assert_eq!(
///     timestamp_to_rfc3339(1_700_000_000_000_000_000).as_deref(),
///     Some("2023-11-14T22:13:20Z")
/// );
/// assert_eq!(timestamp_to_rfc3339(0), None);
/// ```
pub fn timestamp_to_rfc3339(nanos: i64) -> Option<String> {
    if nanos == 0 {
        return None;
    }
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(nanos))
        .ok()
        .and_then(|dt| dt.format(&Rfc3339).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_sub_second_precision() {
        assert_eq!(
            timestamp_to_rfc3339(1_700_000_000_123_000_000).as_deref(),
            Some("2023-11-14T22:13:20.123Z")
        );
    }

    #[test]
    fn formats_pre_epoch() {
        assert_eq!(
            timestamp_to_rfc3339(-1_000_000_000).as_deref(),
            Some("1969-12-31T23:59:59Z")
        );
    }

    #[test]
    fn zero_is_not_reported() {
        assert_eq!(timestamp_to_rfc3339(0), None);
    }
}
