//! CLI parse: clap types for paracluster. No behavior beyond flag-to-override mapping.

use crate::cli::help::USAGE_EXAMPLES;
use crate::config::ClusterOverrides;
use clap::Parser;
use std::path::PathBuf;

/// Generate Kubernetes cluster YAML configuration
#[derive(Parser, Debug)]
#[command(name = "paracluster")]
#[command(about = "Generate Kubernetes cluster YAML configuration")]
#[command(after_help = USAGE_EXAMPLES)]
pub struct Cli {
    /// Configuration file (JSON or YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Create default configuration file
    #[arg(long)]
    pub create_config: Option<PathBuf>,

    /// Output YAML file
    #[arg(short, long, default_value = "cluster.yaml")]
    pub output: PathBuf,

    /// Cluster name
    #[arg(long, help_heading = "Overrides")]
    pub cluster_name: Option<String>,

    /// Number of control plane replicas
    #[arg(long, help_heading = "Overrides")]
    pub replicas: Option<u32>,

    /// Control plane endpoint IP
    #[arg(long, help_heading = "Overrides")]
    pub control_plane_ip: Option<String>,

    /// Comma-separated list of allowed Proxmox nodes
    #[arg(long, help_heading = "Overrides")]
    pub allowed_nodes: Option<String>,

    /// Memory in MiB for control plane VMs
    #[arg(long, help_heading = "Overrides")]
    pub memory: Option<u32>,

    /// CPU cores for control plane VMs
    #[arg(long, help_heading = "Overrides")]
    pub cores: Option<u32>,

    /// Disk size in GB for control plane VMs
    #[arg(long, help_heading = "Overrides")]
    pub disk_size: Option<u32>,

    /// Enable worker nodes
    #[arg(long, help_heading = "Worker overrides")]
    pub workers_enabled: bool,

    /// Disable worker nodes (wins over --workers-enabled)
    #[arg(long, help_heading = "Worker overrides")]
    pub workers_disabled: bool,

    /// Number of worker nodes
    #[arg(long, help_heading = "Worker overrides")]
    pub worker_replicas: Option<u32>,

    /// Memory in MiB for worker VMs
    #[arg(long, help_heading = "Worker overrides")]
    pub worker_memory: Option<u32>,

    /// CPU cores for worker VMs
    #[arg(long, help_heading = "Worker overrides")]
    pub worker_cores: Option<u32>,

    /// Disk size in GB for worker VMs
    #[arg(long, help_heading = "Worker overrides")]
    pub worker_disk_size: Option<u32>,

    /// Enable verbose logging to stderr (default: off)
    #[arg(long, help_heading = "Logging")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, help_heading = "Logging")]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, help_heading = "Logging")]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, help_heading = "Logging")]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, help_heading = "Logging")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Collect the override flags into a [`ClusterOverrides`].
    pub fn overrides(&self) -> ClusterOverrides {
        ClusterOverrides {
            cluster_name: self.cluster_name.clone(),
            replicas: self.replicas,
            control_plane_ip: self.control_plane_ip.clone(),
            allowed_nodes: self.allowed_nodes.clone(),
            memory_mib: self.memory,
            cores: self.cores,
            disk_size_gb: self.disk_size,
            workers_enabled: self.workers_enabled,
            workers_disabled: self.workers_disabled,
            worker_replicas: self.worker_replicas,
            worker_memory_mib: self.worker_memory,
            worker_cores: self.worker_cores,
            worker_disk_size_gb: self.worker_disk_size,
        }
    }
}
