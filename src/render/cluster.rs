//! Cluster and ProxmoxCluster documents.

use super::{
    Document, ResourceNames, CLUSTER_API_VERSION, CONTROL_PLANE_API_VERSION,
    INFRASTRUCTURE_API_VERSION,
};
use crate::config::ClusterConfig;

/// Top-level CAPI `Cluster` tying the control plane and infrastructure together
pub(crate) fn cluster_document(config: &ClusterConfig, names: &ResourceNames) -> String {
    let mut doc = Document::new("CLUSTER DEFINITION");
    doc.resource(
        CLUSTER_API_VERSION,
        "Cluster",
        &names.cluster,
        Some(config.namespace.as_str()),
    );
    doc.line(0, "spec:");
    doc.line(2, "controlPlaneRef:");
    doc.field(4, "apiVersion", CONTROL_PLANE_API_VERSION);
    doc.field(4, "kind", "TalosControlPlane");
    doc.field(4, "name", &names.control_plane);
    doc.line(2, "infrastructureRef:");
    doc.field(4, "apiVersion", INFRASTRUCTURE_API_VERSION);
    doc.field(4, "kind", "ProxmoxCluster");
    doc.field(4, "name", &names.proxmox_cluster);
    doc.finish()
}

/// `ProxmoxCluster`: node placement, endpoint, DNS and the IPv4 pool
pub(crate) fn proxmox_cluster_document(config: &ClusterConfig, names: &ResourceNames) -> String {
    let mut doc = Document::new("INFRASTRUCTURE CONFIGURATION");
    doc.resource(
        INFRASTRUCTURE_API_VERSION,
        "ProxmoxCluster",
        &names.proxmox_cluster,
        Some(config.namespace.as_str()),
    );
    doc.line(0, "spec:");
    doc.line(2, "schedulerHints:");
    doc.field(4, "memoryAdjustment", config.scheduler_hints.memory_adjustment);
    doc.line(2, "allowedNodes:");
    doc.items(4, &config.allowed_nodes);
    doc.line(2, "controlPlaneEndpoint:");
    doc.field(4, "host", &config.control_plane_endpoint.host);
    doc.field(4, "port", config.control_plane_endpoint.port);
    doc.line(2, "dnsServers:");
    doc.items(4, &config.dns_servers);
    doc.line(2, "ipv4Config:");
    doc.line(4, "addresses:");
    doc.items(6, &config.ipv4_config.addresses);
    doc.field(4, "gateway", &config.ipv4_config.gateway);
    doc.field(4, "prefix", config.ipv4_config.prefix);
    doc.finish()
}
