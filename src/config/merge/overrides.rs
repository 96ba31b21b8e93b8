//! Override layer: quick command-line adjustments applied on top of a cluster config.
//!
//! Precedence: flags > config file (or defaults). Each present override replaces one nested
//! field in place; absent overrides leave the config untouched.

use crate::config::{ClusterConfig, MachineTemplate};
use crate::error::GeneratorError;
use tracing::{debug, warn};

/// Set of optional overrides, one per supported flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterOverrides {
    pub cluster_name: Option<String>,
    pub replicas: Option<u32>,
    pub control_plane_ip: Option<String>,
    /// Raw comma-separated node list, split by [`parse_node_list`]
    pub allowed_nodes: Option<String>,
    pub memory_mib: Option<u32>,
    pub cores: Option<u32>,
    pub disk_size_gb: Option<u32>,
    pub workers_enabled: bool,
    pub workers_disabled: bool,
    pub worker_replicas: Option<u32>,
    pub worker_memory_mib: Option<u32>,
    pub worker_cores: Option<u32>,
    pub worker_disk_size_gb: Option<u32>,
}

/// Split a comma-separated node list, trimming each entry.
///
/// Order is preserved and duplicates are kept.
pub fn parse_node_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|node| node.trim().to_string()).collect()
}

impl ClusterOverrides {
    /// True when no override is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply every present override to `config`.
    ///
    /// Empty strings for the name, endpoint and node-list flags count as absent.
    /// `workers_enabled` is applied before `workers_disabled`, so disabling wins when both
    /// are set. Worker machine overrides fail with [`GeneratorError::OverrideTarget`] when
    /// the config has no worker machine template to adjust.
    pub fn apply(&self, config: &mut ClusterConfig) -> Result<(), GeneratorError> {
        if let Some(name) = non_empty(&self.cluster_name) {
            debug!(path = "cluster_name", value = %name, "Applying override");
            config.cluster_name = name.to_string();
        }
        if let Some(replicas) = self.replicas {
            debug!(path = "replicas", value = replicas, "Applying override");
            config.replicas = replicas;
        }
        if let Some(ip) = non_empty(&self.control_plane_ip) {
            debug!(path = "control_plane_endpoint.host", value = %ip, "Applying override");
            config.control_plane_endpoint.host = ip.to_string();
        }
        if let Some(nodes) = non_empty(&self.allowed_nodes) {
            let nodes = parse_node_list(nodes);
            debug!(path = "allowed_nodes", value = ?nodes, "Applying override");
            config.allowed_nodes = nodes;
        }
        apply_machine_overrides(
            &mut config.machine_template,
            self.memory_mib,
            self.cores,
            self.disk_size_gb,
            "machine_template",
        );

        if self.workers_enabled && self.workers_disabled {
            warn!("Both --workers-enabled and --workers-disabled given; workers stay disabled");
        }
        if self.workers_enabled {
            debug!(path = "workers.enabled", value = true, "Applying override");
            config.workers.enabled = true;
        }
        if self.workers_disabled {
            debug!(path = "workers.enabled", value = false, "Applying override");
            config.workers.enabled = false;
        }
        if let Some(replicas) = self.worker_replicas {
            debug!(path = "workers.replicas", value = replicas, "Applying override");
            config.workers.replicas = Some(replicas);
        }

        if let Some(flag) = self.first_worker_machine_flag() {
            let template = config.workers.machine_template.as_mut().ok_or(
                GeneratorError::OverrideTarget {
                    flag,
                    path: "workers.machine_template",
                },
            )?;
            apply_machine_overrides(
                template,
                self.worker_memory_mib,
                self.worker_cores,
                self.worker_disk_size_gb,
                "workers.machine_template",
            );
        }

        Ok(())
    }

    fn first_worker_machine_flag(&self) -> Option<&'static str> {
        if self.worker_memory_mib.is_some() {
            Some("worker-memory")
        } else if self.worker_cores.is_some() {
            Some("worker-cores")
        } else if self.worker_disk_size_gb.is_some() {
            Some("worker-disk-size")
        } else {
            None
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn apply_machine_overrides(
    template: &mut MachineTemplate,
    memory_mib: Option<u32>,
    cores: Option<u32>,
    disk_size_gb: Option<u32>,
    scope: &str,
) {
    if let Some(memory) = memory_mib {
        debug!(scope = scope, field = "memory_mib", value = memory, "Applying override");
        template.memory_mib = memory;
    }
    if let Some(cores) = cores {
        debug!(scope = scope, field = "cpu.cores", value = cores, "Applying override");
        template.cpu.cores = cores;
    }
    if let Some(size) = disk_size_gb {
        debug!(scope = scope, field = "disks.boot_volume.size_gb", value = size, "Applying override");
        template.disks.boot_volume.size_gb = size;
    }
}
