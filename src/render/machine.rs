//! ProxmoxMachineTemplate document, shared by control-plane and worker machines.

use super::{Document, INFRASTRUCTURE_API_VERSION};
use crate::config::MachineTemplate;

pub(crate) fn machine_template_document(
    title: &str,
    name: &str,
    namespace: &str,
    template: &MachineTemplate,
) -> String {
    let boot_volume = &template.disks.boot_volume;

    let mut doc = Document::new(title);
    doc.resource(
        INFRASTRUCTURE_API_VERSION,
        "ProxmoxMachineTemplate",
        name,
        Some(namespace),
    );
    doc.line(0, "spec:");
    doc.line(2, "template:");
    doc.line(4, "spec:");
    doc.line(6, "disks:");
    doc.line(8, "bootVolume:");
    doc.field(10, "disk", &boot_volume.disk);
    doc.field(10, "sizeGb", boot_volume.size_gb);
    doc.field(10, "format", &boot_volume.format);
    doc.field(10, "full", boot_volume.full);
    doc.field(6, "memoryMiB", template.memory_mib);
    doc.line(6, "network:");
    doc.line(8, "default:");
    doc.field(10, "bridge", &template.network.bridge);
    doc.field(10, "model", &template.network.model);
    doc.field(6, "numCores", template.cpu.cores);
    doc.field(6, "numSockets", template.cpu.sockets);
    doc.field(6, "sourceNode", &template.source_node);
    doc.field(6, "templateID", template.template_id);
    doc.line(6, "checks:");
    doc.field(8, "skipCloudInitStatus", template.checks.skip_cloud_init_status);
    doc.finish()
}
