//! Integration tests for loading and saving cluster configuration files

use paracluster::config::{default_cluster_config, ConfigFormat, ConfigLoader};
use paracluster::error::GeneratorError;
use tempfile::TempDir;

#[test]
fn test_default_config_round_trips_for_both_formats() {
    let temp_dir = TempDir::new().unwrap();

    for name in ["config.json", "config.yaml", "config.yml", "config.conf"] {
        let path = temp_dir.path().join(name);
        ConfigLoader::save_default(&path).unwrap();

        let loaded = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(loaded, default_cluster_config(), "round trip failed for {}", name);
    }
}

#[test]
fn test_non_json_extension_is_written_as_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cluster.conf");
    ConfigLoader::save_default(&path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("cluster_name: homelab-cluster"));
    assert!(ConfigLoader::parse_str(&contents, ConfigFormat::Json).is_err());
}

#[test]
fn test_hand_written_yaml_without_workers() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cp-only.yaml");
    std::fs::write(
        &path,
        r#"
cluster_name: edge
namespace: infra
kubernetes_version: v1.31.2
replicas: 3
allowed_nodes: [pve1, pve2]
control_plane_endpoint:
  host: 10.0.0.10
  port: 6443
dns_servers:
  - 1.1.1.1
ipv4_config:
  addresses:
    - 10.0.0.20-10.0.0.40
  gateway: 10.0.0.1
  prefix: 24
scheduler_hints:
  memory_adjustment: 120
machine_template:
  disks:
    boot_volume:
      disk: scsi0
      size_gb: 32
      format: raw
      full: false
  memory_mib: 4096
  network:
    bridge: vmbr1
    model: virtio
  cpu:
    cores: 4
    sockets: 1
  source_node: pve1
  template_id: 9000
  checks:
    skip_cloud_init_status: false
talos_config:
  install_disk: /dev/vda
  extensions: []
  kernel_args: []
  network_interface: ens18
  dhcp: true
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(config.cluster_name, "edge");
    assert_eq!(config.replicas, 3);
    assert_eq!(config.allowed_nodes, vec!["pve1", "pve2"]);
    assert_eq!(config.scheduler_hints.memory_adjustment, 120);
    assert!(!config.machine_template.disks.boot_volume.full);
    assert!(config.talos_config.dhcp);
    assert!(!config.workers.enabled);
    assert!(config.workers.machine_template.is_none());
}

#[test]
fn test_malformed_yaml_reports_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.yaml");
    std::fs::write(&path, "cluster_name: [unterminated\n").unwrap();

    let err = ConfigLoader::load_from_file(&path).unwrap_err();
    assert!(matches!(err, GeneratorError::ConfigParse { .. }));
    assert!(err.to_string().starts_with("Error parsing configuration file"));
}

#[test]
fn test_wrong_type_reports_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    let mut value = serde_json::to_value(default_cluster_config()).unwrap();
    value["replicas"] = serde_json::json!("three");
    std::fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();

    let err = ConfigLoader::load_from_file(&path).unwrap_err();
    match err {
        GeneratorError::ConfigParse { message, .. } => {
            assert!(message.contains("invalid type"), "message: {}", message)
        }
        other => panic!("expected ConfigParse, got {:?}", other),
    }
}
