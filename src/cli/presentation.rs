//! CLI presentation: human-readable summary printed after a manifest is written.

use crate::config::ClusterConfig;
use std::path::Path;

pub fn format_generation_summary(config: &ClusterConfig, output: &Path) -> String {
    let mut s = format!("Cluster YAML generated successfully: {}\n", output.display());
    s.push_str(&format!("Cluster name: {}\n", config.cluster_name));
    s.push_str(&format!("Control plane replicas: {}\n", config.replicas));
    s.push_str(&format!(
        "Control plane endpoint: {}\n",
        config.endpoint_address()
    ));
    s.push_str(&format!("Allowed nodes: {}", config.allowed_nodes.join(", ")));

    if config.workers_enabled() {
        let workers = &config.workers;
        if let Some(replicas) = workers.replicas {
            s.push_str(&format!("\nWorker nodes enabled: {} replicas", replicas));
        }
        if let Some(ref template) = workers.machine_template {
            s.push_str(&format!(
                "\nWorker specs: {} cores, {}MB RAM",
                template.cpu.cores, template.memory_mib
            ));
        }
    } else {
        s.push_str("\nWorker nodes: disabled");
    }
    s
}
