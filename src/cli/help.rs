//! CLI help: usage examples shown after the flag reference.

/// Example invocations appended to `--help`.
pub const USAGE_EXAMPLES: &str = "\
Examples:
  # Generate default config file
  paracluster --create-config config.yaml

  # Generate cluster YAML with workers
  paracluster --config config.yaml --output cluster.yaml

  # Generate cluster with workers disabled
  paracluster --workers-disabled --output control-plane-only.yaml

  # Generate with custom worker configuration
  paracluster --worker-replicas 5 --worker-memory 8192 --worker-cores 4 --output large-cluster.yaml

  # Restrict to specific Proxmox nodes
  paracluster --allowed-nodes \"NODE01,NODE02,NODE03\" --output restricted.yaml";
