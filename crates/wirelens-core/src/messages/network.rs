use super::common::{EntryReader, read_payload};
use crate::diagnostics::DiagnosticSink;
use crate::enums::{EnumFamily, resolve};
use crate::header::normalize_header;
use crate::{DecodeError, HealthCheck, MessageFamily, NetworkStatus, NetworkSummary, wire};

pub(crate) fn parse_network_status(
    payload: &[u8],
    sink: &dyn DiagnosticSink,
) -> Result<NetworkStatus, DecodeError> {
    let raw: wire::NetworkStatus = read_payload(payload)?;
    let reader = EntryReader::new(MessageFamily::NetworkStatus, sink);
    let checks = reader.read_entries("checks", &raw.checks, health_check);

    tracing::debug!(checks = checks.len(), "decoded network status");
    Ok(NetworkStatus {
        header: normalize_header(raw.header.as_ref()),
        checks,
        summary: raw.summary.map(summary),
    })
}

fn health_check(raw: wire::HealthCheck) -> HealthCheck {
    HealthCheck {
        check_type_name: resolve(EnumFamily::NetworkCheckType, raw.check_type).to_string(),
        status_name: resolve(EnumFamily::NetworkCheckStatus, raw.status).to_string(),
        name: raw.name,
        check_type: raw.check_type,
        target: raw.target,
        status: raw.status,
        latency_ms: raw.latency_ms,
        error_message: raw.error_message,
        status_code: raw.status_code,
    }
}

fn summary(raw: wire::Summary) -> NetworkSummary {
    NetworkSummary {
        total: raw.total,
        healthy: raw.healthy,
        unhealthy: raw.unhealthy,
    }
}
