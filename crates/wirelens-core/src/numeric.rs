//! 64-bit integer reconciliation.
//!
//! Producers hand over 64-bit integers in several shapes: a double that was
//! already narrowed by a JSON hop, the split low/high pair of a native wire
//! integer, the decimal text of the proto3 JSON mapping, or nothing at all.
//! [`reconcile`] folds every shape into one exact `i64`.

use serde::{Deserialize, Serialize};

/// Every representation a 64-bit wire integer may arrive in.
///
/// # Examples
/// ```
/// use wirelens_core::{WireInt, reconcile};
///
/// assert_eq!(reconcile(WireInt::Absent), 0);
/// assert_eq!(reconcile(WireInt::from(1_700_000_000_123_i64)), 1_700_000_000_123);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum WireInt {
    #[default]
    Absent,
    /// Double-precision value; exact only up to 2^53.
    Float(f64),
    /// Native 64-bit integer as two 32-bit halves.
    Split { low: u32, high: u32, unsigned: bool },
    /// Decimal text form.
    Decimal(String),
}

impl From<i64> for WireInt {
    fn from(value: i64) -> Self {
        let bits = value as u64;
        WireInt::Split {
            low: bits as u32,
            high: (bits >> 32) as u32,
            unsigned: false,
        }
    }
}

impl From<u64> for WireInt {
    fn from(value: u64) -> Self {
        WireInt::Split {
            low: value as u32,
            high: (value >> 32) as u32,
            unsigned: true,
        }
    }
}

impl From<f64> for WireInt {
    fn from(value: f64) -> Self {
        WireInt::Float(value)
    }
}

impl From<String> for WireInt {
    fn from(value: String) -> Self {
        WireInt::Decimal(value)
    }
}

impl From<&str> for WireInt {
    fn from(value: &str) -> Self {
        WireInt::Decimal(value.to_string())
    }
}

impl<T: Into<WireInt>> From<Option<T>> for WireInt {
    fn from(value: Option<T>) -> Self {
        value.map_or(WireInt::Absent, Into::into)
    }
}

/// Convert any wire integer shape into an exact `i64`.
///
/// Absent, non-finite, out-of-range and unparsable inputs all yield `0`.
/// Doubles are truncated toward zero and saturate at the `i64` bounds.
pub fn reconcile(value: impl Into<WireInt>) -> i64 {
    match value.into() {
        WireInt::Absent => 0,
        WireInt::Float(value) if value.is_finite() => value as i64,
        WireInt::Float(_) => 0,
        WireInt::Split {
            low,
            high,
            unsigned,
        } => {
            let bits = (u64::from(high) << 32) | u64::from(low);
            if unsigned {
                i64::try_from(bits).unwrap_or(0)
            } else {
                bits as i64
            }
        }
        WireInt::Decimal(text) => text.trim().parse::<i64>().unwrap_or(0),
    }
}
