use prost::Message;

use crate::numeric::reconcile;
use crate::{DecodeError, Envelope, wire};

/// Build an [`Envelope`] from a decoded wire header.
///
/// A missing header stays missing; it is never replaced by an all-zero
/// envelope. Empty machine id and scope strings are treated as not reported.
///
/// # Examples
/// ```
/// use wirelens_core::{normalize_header, wire};
///
/// assert!(normalize_header(None).is_none());
///
/// let raw = wire::Header {
///     acq_time: 1_700_000_000_000_000_000,
///     frame_id: "cam0".to_string(),
///     ..Default::default()
/// };
/// let envelope = normalize_header(Some(&raw)).unwrap();
/// assert_eq!(envelope.acquisition_time, 1_700_000_000_000_000_000);
/// assert_eq!(envelope.publish_time, 0);
/// ```
pub fn normalize_header(raw: Option<&wire::Header>) -> Option<Envelope> {
    let raw = raw?;
    Some(Envelope {
        acquisition_time: reconcile(raw.acq_time),
        publish_time: reconcile(raw.pub_time),
        sequence: raw.sequence,
        frame_id: raw.frame_id.clone(),
        machine_id: non_empty(raw.machine_id.as_deref()),
        scope: non_empty(raw.scope.as_deref()),
    })
}

/// Decode only the header at field 1 of any message.
pub(crate) fn parse_header_probe(payload: &[u8]) -> Result<Option<Envelope>, DecodeError> {
    if payload.is_empty() {
        return Err(DecodeError::Empty);
    }
    let probe = wire::HeaderProbe::decode(payload)?;
    Ok(normalize_header(probe.header.as_ref()))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|value| !value.is_empty()).map(str::to_string)
}
