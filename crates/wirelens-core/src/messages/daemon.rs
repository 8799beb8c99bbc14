use super::common::{EntryReader, read_payload};
use crate::diagnostics::DiagnosticSink;
use crate::enums::{EnumFamily, resolve};
use crate::numeric::reconcile;
use crate::{DecodeError, MessageFamily, NodeEvent, NodeList, NodeState, wire};

pub(crate) fn parse_node_list(
    payload: &[u8],
    sink: &dyn DiagnosticSink,
) -> Result<NodeList, DecodeError> {
    let raw: wire::NodeList = read_payload(payload)?;
    let reader = EntryReader::new(MessageFamily::NodeList, sink);
    let nodes = reader.read_entries("nodes", &raw.nodes, node_state);

    tracing::debug!(nodes = nodes.len(), machine_id = %raw.machine_id, "decoded node list");
    Ok(NodeList {
        nodes,
        timestamp_ms: reconcile(raw.timestamp_ms),
        machine_id: raw.machine_id,
    })
}

pub(crate) fn parse_node_event(
    payload: &[u8],
    sink: &dyn DiagnosticSink,
) -> Result<NodeEvent, DecodeError> {
    let raw: wire::NodeEvent = read_payload(payload)?;
    let reader = EntryReader::new(MessageFamily::NodeEvent, sink);
    let state = reader.read_nested("state", raw.state.as_deref(), node_state);

    Ok(NodeEvent {
        event_type: raw.event_type,
        node_name: raw.node_name,
        state,
        timestamp_ms: reconcile(raw.timestamp_ms),
    })
}

fn node_state(raw: wire::NodeState) -> NodeState {
    NodeState {
        status_name: resolve(EnumFamily::NodeStatus, raw.status).to_string(),
        health_status_name: resolve(EnumFamily::NodeHealth, raw.health_status).to_string(),
        name: raw.name,
        path: raw.path,
        status: raw.status,
        installed: raw.installed,
        autostart_enabled: raw.autostart_enabled,
        version: raw.version,
        description: raw.description,
        node_type: raw.node_type,
        is_built: raw.is_built,
        last_updated_ms: reconcile(raw.last_updated_ms),
        build_output: raw.build_output,
        health_status: raw.health_status,
        last_health_check_ms: reconcile(raw.last_health_check_ms),
        machine_id: raw.machine_id,
        machine_hostname: raw.machine_hostname,
        machine_ips: raw.machine_ips,
        base_node: raw.base_node,
        config_override: raw.config_override,
    }
}

#[cfg(test)]
mod tests {
    use prost::Message;

    use super::{parse_node_event, parse_node_list};
    use crate::diagnostics::{CollectingSink, DiagnosticScope, NullSink};
    use crate::{DecodeError, wire};

    fn node(name: &str, status: i32) -> wire::NodeState {
        wire::NodeState {
            name: name.to_string(),
            path: format!("/opt/nodes/{name}"),
            status,
            installed: true,
            version: "0.3.1".to_string(),
            node_type: "rust".to_string(),
            last_updated_ms: 1_700_000_000_123,
            build_output: vec!["Compiling".to_string(), "Finished".to_string()],
            health_status: 1,
            machine_ips: vec!["10.0.0.5".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn parse_node_list_resolves_status_names() {
        let raw = wire::NodeList {
            nodes: vec![
                node("rtsp-camera", 2).encode_to_vec(),
                node("openmeteo", 6).encode_to_vec(),
            ],
            timestamp_ms: 1_700_000_000_999,
            machine_id: "jetson1".to_string(),
        };

        let list = parse_node_list(&raw.encode_to_vec(), &NullSink).unwrap();
        assert_eq!(list.nodes.len(), 2);
        assert_eq!(list.nodes[0].status_name, "running");
        assert_eq!(list.nodes[1].status_name, "not-installed");
        assert_eq!(list.nodes[0].health_status_name, "healthy");
        assert_eq!(list.nodes[0].last_updated_ms, 1_700_000_000_123);
        assert_eq!(list.nodes[0].build_output, vec!["Compiling", "Finished"]);
        assert_eq!(list.timestamp_ms, 1_700_000_000_999);
        assert_eq!(list.machine_id, "jetson1");
    }

    #[test]
    fn parse_node_list_defaults_sparse_state() {
        let raw = wire::NodeList {
            nodes: vec![wire::NodeState::default().encode_to_vec()],
            timestamp_ms: 0,
            machine_id: String::new(),
        };
        let list = parse_node_list(&raw.encode_to_vec(), &NullSink).unwrap();
        let state = &list.nodes[0];
        assert_eq!(state.status_name, "unknown");
        assert_eq!(state.version, "");
        assert_eq!(state.description, "");
        assert_eq!(state.node_type, "");
        assert!(!state.installed && !state.autostart_enabled && !state.is_built);
        assert!(state.build_output.is_empty());
        assert!(state.machine_ips.is_empty());
    }

    #[test]
    fn parse_node_list_drops_malformed_entry() {
        let raw = wire::NodeList {
            nodes: vec![
                node("a", 1).encode_to_vec(),
                vec![0xff, 0xff, 0xff],
                node("c", 3).encode_to_vec(),
            ],
            timestamp_ms: 5,
            machine_id: "m".to_string(),
        };
        let sink = CollectingSink::default();
        let list = parse_node_list(&raw.encode_to_vec(), &sink).unwrap();
        let names: Vec<_> = list.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(
            sink.diagnostics()[0].scope,
            DiagnosticScope::Entry {
                field: "nodes",
                index: 1
            }
        );
    }

    #[test]
    fn parse_node_event_with_state() {
        let raw = wire::NodeEvent {
            event_type: "state_changed".to_string(),
            node_name: "rtsp-camera".to_string(),
            state: Some(node("rtsp-camera", 3).encode_to_vec()),
            timestamp_ms: 1_700_000_000_500,
        };
        let event = parse_node_event(&raw.encode_to_vec(), &NullSink).unwrap();
        assert_eq!(event.event_type, "state_changed");
        assert_eq!(event.state.unwrap().status_name, "failed");
        assert_eq!(event.timestamp_ms, 1_700_000_000_500);
    }

    #[test]
    fn parse_node_event_with_broken_state_keeps_event() {
        let raw = wire::NodeEvent {
            event_type: "removed".to_string(),
            node_name: "old".to_string(),
            state: Some(vec![0x0a, 0x09, b'o']),
            timestamp_ms: 7,
        };
        let sink = CollectingSink::default();
        let event = parse_node_event(&raw.encode_to_vec(), &sink).unwrap();
        assert_eq!(event.node_name, "old");
        assert!(event.state.is_none());
        assert_eq!(
            sink.diagnostics()[0].scope,
            DiagnosticScope::Nested { field: "state" }
        );
    }

    #[test]
    fn parse_node_event_without_state() {
        let raw = wire::NodeEvent {
            event_type: "removed".to_string(),
            node_name: "old".to_string(),
            state: None,
            timestamp_ms: 0,
        };
        let event = parse_node_event(&raw.encode_to_vec(), &NullSink).unwrap();
        assert!(event.state.is_none());
        assert_eq!(event.timestamp_ms, 0);
    }

    #[test]
    fn parse_empty_payloads() {
        assert_eq!(parse_node_list(&[], &NullSink), Err(DecodeError::Empty));
        assert_eq!(parse_node_event(&[], &NullSink), Err(DecodeError::Empty));
    }
}
