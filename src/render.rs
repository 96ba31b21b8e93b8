//! Manifest Renderer
//!
//! Turns a [`ClusterConfig`] into a multi-document Cluster API manifest for Talos on Proxmox.
//! Each document is produced by its own section builder from a subtree of the config; the
//! worker documents are appended only when workers are enabled.

use crate::config::ClusterConfig;
use crate::error::RenderError;
use tracing::debug;

mod cluster;
mod control_plane;
mod document;
mod machine;
mod workers;

pub(crate) use document::Document;

/// Line that separates documents in the rendered stream
pub const DOCUMENT_MARKER: &str = "---";

pub(crate) const CLUSTER_API_VERSION: &str = "cluster.x-k8s.io/v1beta1";
pub(crate) const CONTROL_PLANE_API_VERSION: &str = "controlplane.cluster.x-k8s.io/v1alpha3";
pub(crate) const BOOTSTRAP_API_VERSION: &str = "bootstrap.cluster.x-k8s.io/v1alpha3";
pub(crate) const INFRASTRUCTURE_API_VERSION: &str = "infrastructure.cluster.x-k8s.io/v1alpha1";

const MANIFEST_HEADER: &[&str] = &[
    "HOMELAB KUBERNETES CLUSTER CONFIGURATION",
    "",
    "Generated cluster configuration using:",
    "- Cluster API for cluster lifecycle management",
    "- Talos Linux as the operating system",
    "- Proxmox as the infrastructure provider",
];

/// Resource names derived from the cluster name
#[derive(Debug, Clone)]
pub(crate) struct ResourceNames {
    pub cluster: String,
    pub control_plane: String,
    pub proxmox_cluster: String,
    pub control_plane_template: String,
    pub workers: String,
    pub worker_template: String,
    pub workers_config: String,
}

impl ResourceNames {
    pub fn new(cluster_name: &str) -> Self {
        Self {
            cluster: cluster_name.to_string(),
            control_plane: format!("{}-cp", cluster_name),
            proxmox_cluster: format!("{}-proxmox", cluster_name),
            control_plane_template: format!("{}-cp-template", cluster_name),
            workers: format!("{}-workers", cluster_name),
            worker_template: format!("{}-worker-template", cluster_name),
            workers_config: format!("{}-workers-config", cluster_name),
        }
    }
}

/// Render the full manifest for `config`.
///
/// The output is materialized completely before returning, so callers never write a
/// partial manifest. Fails when workers are enabled but the config lacks a field the
/// worker documents need.
pub fn render_manifest(config: &ClusterConfig) -> Result<String, RenderError> {
    let names = ResourceNames::new(&config.cluster_name);

    let mut documents = vec![
        cluster::cluster_document(config, &names),
        cluster::proxmox_cluster_document(config, &names),
        machine::machine_template_document(
            "CONTROL PLANE MACHINE TEMPLATE",
            &names.control_plane_template,
            &config.namespace,
            &config.machine_template,
        ),
        control_plane::talos_control_plane_document(config, &names),
    ];

    if config.workers_enabled() {
        documents.extend(workers::worker_documents(config, &names)?);
    }

    let mut output = Document::banner(MANIFEST_HEADER);
    for document in &documents {
        output.push_str("\n\n");
        output.push_str(DOCUMENT_MARKER);
        output.push('\n');
        output.push_str(document);
    }
    output.push('\n');

    debug!(
        cluster = %config.cluster_name,
        documents = documents.len(),
        bytes = output.len(),
        "Rendered cluster manifest"
    );
    Ok(output)
}

/// Number of documents in a rendered stream, i.e. its `---` marker lines.
pub fn count_documents(manifest: &str) -> usize {
    manifest
        .lines()
        .filter(|line| *line == DOCUMENT_MARKER)
        .count()
}
