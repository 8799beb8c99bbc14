use thiserror::Error;

/// Why a payload could not be turned into a record.
///
/// Decode errors never leave the public decode API; they only reach the
/// [`DiagnosticSink`](crate::DiagnosticSink).
///
/// # Examples
/// ```
/// use wirelens_core::DecodeError;
///
/// assert_eq!(DecodeError::Empty.to_string(), "empty payload");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("empty payload")]
    Empty,
    #[error("malformed payload: {0}")]
    Malformed(#[from] prost::DecodeError),
}

/// Returned when a family name or protobuf type name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown message family: {name}")]
pub struct FamilyParseError {
    pub name: String,
}
