//! Cluster Configuration
//!
//! Typed model of the cluster description consumed by the manifest renderer. A config is
//! built once per invocation (from a file or the built-in defaults), mutated in place by
//! command-line overrides, and then handed read-only to the renderer.

use serde::{Deserialize, Serialize};

mod defaults;
mod loader;
mod merge;

pub use defaults::default_cluster_config;
pub use loader::{ConfigFormat, ConfigLoader};
pub use merge::overrides::{parse_node_list, ClusterOverrides};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    pub cluster_name: String,
    pub namespace: String,
    pub kubernetes_version: String,

    /// Control-plane replica count
    pub replicas: u32,

    /// Proxmox nodes the cluster may schedule VMs on
    pub allowed_nodes: Vec<String>,
    pub control_plane_endpoint: ControlPlaneEndpoint,
    pub dns_servers: Vec<String>,
    pub ipv4_config: Ipv4Config,
    pub scheduler_hints: SchedulerHints,

    /// Control-plane VM spec
    pub machine_template: MachineTemplate,

    /// Control-plane OS bootstrap spec
    pub talos_config: TalosConfig,

    /// Worker pool; an absent block means workers are disabled
    #[serde(default)]
    pub workers: WorkersConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPlaneEndpoint {
    pub host: String,
    pub port: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ipv4Config {
    /// Address ranges or CIDRs handed out to VMs; not validated
    pub addresses: Vec<String>,
    pub gateway: String,
    pub prefix: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerHints {
    pub memory_adjustment: i64,
}

/// Proxmox VM template shared by control-plane and worker machines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineTemplate {
    pub disks: Disks,
    pub memory_mib: u32,
    pub network: Network,
    pub cpu: Cpu,
    pub source_node: String,
    pub template_id: u32,
    pub checks: Checks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disks {
    pub boot_volume: BootVolume,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootVolume {
    pub disk: String,
    pub size_gb: u32,
    pub format: String,
    /// Full clone instead of a linked clone
    pub full: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub bridge: String,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cpu {
    pub cores: u32,
    pub sockets: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checks {
    pub skip_cloud_init_status: bool,
}

/// Talos install and network settings for control-plane nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TalosConfig {
    pub install_disk: String,
    pub extensions: Vec<String>,
    pub kernel_args: Vec<String>,
    pub network_interface: String,
    pub dhcp: bool,
}

/// Worker pool settings.
///
/// Everything except `enabled` is optional so that a control-plane-only config can omit
/// the worker subtree; the renderer requires the pieces it dereferences once workers are
/// enabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkersConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_template: Option<MachineTemplate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talos_config: Option<WorkerTalosConfig>,
}

/// Talos config template settings for worker nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerTalosConfig {
    pub talos_version: String,
    pub install_disk: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel_args: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_interface: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dhcp: Option<bool>,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        default_cluster_config()
    }
}

impl ClusterConfig {
    /// Whether the worker documents are part of the rendered manifest
    pub fn workers_enabled(&self) -> bool {
        self.workers.enabled
    }

    /// `host:port` form of the control-plane endpoint
    pub fn endpoint_address(&self) -> String {
        format!(
            "{}:{}",
            self.control_plane_endpoint.host, self.control_plane_endpoint.port
        )
    }
}

impl WorkerTalosConfig {
    /// Extensions to install, treating an absent list as empty
    pub fn extensions(&self) -> &[String] {
        self.extensions.as_deref().unwrap_or_default()
    }

    /// Extra kernel arguments, treating an absent list as empty
    pub fn kernel_args(&self) -> &[String] {
        self.kernel_args.as_deref().unwrap_or_default()
    }

    /// Network interface to configure, if one is set and non-empty
    pub fn network_interface(&self) -> Option<&str> {
        self.network_interface
            .as_deref()
            .filter(|iface| !iface.is_empty())
    }
}
