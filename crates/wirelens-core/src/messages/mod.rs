//! Per-family decoders.
//!
//! Each family follows the same layering:
//! - `wire`: protobuf schema and tag numbers (source of truth)
//! - `common`: payload and entry readers shared by every family
//! - family parser: domain assembly (header, enum names, defaults)
//!
//! Parsers are pure and return explicit errors; containment of those errors
//! happens one level up, in the [`Normalizer`](crate::Normalizer).

pub(crate) mod camera;
pub(crate) mod common;
pub(crate) mod daemon;
pub(crate) mod location;
pub(crate) mod network;
pub(crate) mod weather;
