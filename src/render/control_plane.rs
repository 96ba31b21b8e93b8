//! TalosControlPlane document with its install, kernel-args and network patches.

use super::{Document, ResourceNames, CONTROL_PLANE_API_VERSION, INFRASTRUCTURE_API_VERSION};
use crate::config::ClusterConfig;

pub(crate) fn talos_control_plane_document(config: &ClusterConfig, names: &ResourceNames) -> String {
    let talos = &config.talos_config;

    let mut doc = Document::new("CONTROL PLANE CONFIGURATION");
    doc.resource(
        CONTROL_PLANE_API_VERSION,
        "TalosControlPlane",
        &names.control_plane,
        None,
    );
    doc.line(0, "spec:");
    doc.field(2, "version", &config.kubernetes_version);
    doc.field(2, "replicas", config.replicas);
    doc.line(2, "infrastructureTemplate:");
    doc.field(4, "kind", "ProxmoxMachineTemplate");
    doc.field(4, "apiVersion", INFRASTRUCTURE_API_VERSION);
    doc.field(4, "name", &names.control_plane_template);
    doc.field(4, "namespace", &config.namespace);
    doc.line(2, "controlPlaneConfig:");
    doc.line(4, "controlplane:");
    doc.field(6, "generateType", "controlplane");
    doc.line(6, "strategicPatches:");

    // Each patch is a block scalar holding a JSON6902 operation list
    doc.line(8, "- |");
    doc.line(10, "- op: replace");
    doc.field(12, "path", "/machine/install");
    doc.line(12, "value:");
    doc.field(14, "disk", &talos.install_disk);
    doc.line(14, "extensions:");
    doc.prefixed_items(16, "image: ", &talos.extensions);

    doc.line(8, "- |");
    doc.line(10, "- op: add");
    doc.field(12, "path", "/machine/install/extraKernelArgs");
    doc.line(12, "value:");
    doc.items(14, &talos.kernel_args);

    doc.line(8, "- |");
    doc.line(10, "- op: add");
    doc.field(12, "path", "/machine/network/interfaces");
    doc.line(12, "value:");
    doc.line(14, format!("- interface: {}", talos.network_interface));
    doc.field(16, "dhcp", talos.dhcp);
    doc.line(16, "vip:");
    doc.field(18, "ip", &config.control_plane_endpoint.host);
    doc.finish()
}
