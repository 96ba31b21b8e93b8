//! Worker documents: MachineDeployment, worker machine template and TalosConfigTemplate.
//!
//! Only rendered when workers are enabled. The worker subtree is optional in the config, so
//! every field these documents dereference is checked here first.

use super::machine::machine_template_document;
use super::{
    Document, ResourceNames, BOOTSTRAP_API_VERSION, CLUSTER_API_VERSION,
    INFRASTRUCTURE_API_VERSION,
};
use crate::config::{ClusterConfig, WorkerTalosConfig};
use crate::error::RenderError;

pub(crate) fn worker_documents(
    config: &ClusterConfig,
    names: &ResourceNames,
) -> Result<Vec<String>, RenderError> {
    let workers = &config.workers;
    let replicas = workers
        .replicas
        .ok_or(RenderError::MissingField("workers.replicas"))?;
    let template = workers
        .machine_template
        .as_ref()
        .ok_or(RenderError::MissingField("workers.machine_template"))?;
    let talos = workers
        .talos_config
        .as_ref()
        .ok_or(RenderError::MissingField("workers.talos_config"))?;

    Ok(vec![
        machine_deployment_document(config, names, replicas),
        machine_template_document(
            "WORKER MACHINE TEMPLATE",
            &names.worker_template,
            &config.namespace,
            template,
        ),
        talos_config_template_document(config, names, talos)?,
    ])
}

fn machine_deployment_document(
    config: &ClusterConfig,
    names: &ResourceNames,
    replicas: u32,
) -> String {
    let mut doc = Document::new("WORKER NODES DEPLOYMENT");
    doc.resource(
        CLUSTER_API_VERSION,
        "MachineDeployment",
        &names.workers,
        Some(config.namespace.as_str()),
    );
    doc.line(0, "spec:");
    doc.field(2, "clusterName", &names.cluster);
    doc.field(2, "replicas", replicas);
    doc.line(2, "selector:");
    doc.field(4, "matchLabels", "null");
    doc.line(2, "template:");
    doc.line(4, "spec:");
    doc.line(6, "bootstrap:");
    doc.line(8, "configRef:");
    doc.field(10, "apiVersion", BOOTSTRAP_API_VERSION);
    doc.field(10, "kind", "TalosConfigTemplate");
    doc.field(10, "name", &names.workers_config);
    doc.field(6, "clusterName", &names.cluster);
    doc.line(6, "infrastructureRef:");
    doc.field(8, "apiVersion", INFRASTRUCTURE_API_VERSION);
    doc.field(8, "kind", "ProxmoxMachineTemplate");
    doc.field(8, "name", &names.worker_template);
    doc.field(6, "version", &config.kubernetes_version);
    doc.finish()
}

/// Worker bootstrap config. The extensions list, the kernel-args patch and the network
/// patch are each emitted only when their source field is non-empty.
fn talos_config_template_document(
    config: &ClusterConfig,
    names: &ResourceNames,
    talos: &WorkerTalosConfig,
) -> Result<String, RenderError> {
    let mut doc = Document::new("WORKER TALOS CONFIGURATION TEMPLATE");
    doc.resource(
        BOOTSTRAP_API_VERSION,
        "TalosConfigTemplate",
        &names.workers_config,
        Some(config.namespace.as_str()),
    );
    doc.line(0, "spec:");
    doc.line(2, "template:");
    doc.line(4, "spec:");
    doc.field(6, "generateType", "worker");
    doc.field(6, "talosVersion", &talos.talos_version);
    doc.line(6, "configPatches:");

    doc.line(8, "- op: replace");
    doc.field(10, "path", "/machine/install");
    doc.line(10, "value:");
    doc.field(12, "disk", &talos.install_disk);
    if !talos.extensions().is_empty() {
        doc.line(12, "extensions:");
        doc.prefixed_items(14, "image: ", talos.extensions());
    }

    if !talos.kernel_args().is_empty() {
        doc.line(8, "- op: add");
        doc.field(10, "path", "/machine/install/extraKernelArgs");
        doc.line(10, "value:");
        doc.items(12, talos.kernel_args());
    }

    if let Some(interface) = talos.network_interface() {
        let dhcp = talos
            .dhcp
            .ok_or(RenderError::MissingField("workers.talos_config.dhcp"))?;
        doc.line(8, "- op: add");
        doc.field(10, "path", "/machine/network/interfaces");
        doc.line(10, "value:");
        doc.line(12, format!("- interface: {}", interface));
        doc.field(14, "dhcp", dhcp);
    }

    Ok(doc.finish())
}
