//! Built-in cluster defaults: a homelab cluster with three Proxmox nodes and two workers.

use super::{
    BootVolume, Checks, ClusterConfig, ControlPlaneEndpoint, Cpu, Disks, Ipv4Config,
    MachineTemplate, Network, SchedulerHints, TalosConfig, WorkerTalosConfig, WorkersConfig,
};

const QEMU_GUEST_AGENT_EXTENSION: &str = "ghcr.io/siderolabs/qemu-guest-agent:9.2.0";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn default_machine_template(memory_mib: u32) -> MachineTemplate {
    MachineTemplate {
        disks: Disks {
            boot_volume: BootVolume {
                disk: "scsi0".to_string(),
                size_gb: 20,
                format: "qcow2".to_string(),
                full: true,
            },
        },
        memory_mib,
        network: Network {
            bridge: "vmbr0".to_string(),
            model: "virtio".to_string(),
        },
        cpu: Cpu {
            cores: 2,
            sockets: 1,
        },
        source_node: "K8S0".to_string(),
        template_id: 8700,
        checks: Checks {
            skip_cloud_init_status: true,
        },
    }
}

/// Complete cluster configuration used when no config file is given.
///
/// Every field the renderer dereferences is populated, workers included, so the result
/// renders all seven documents.
pub fn default_cluster_config() -> ClusterConfig {
    ClusterConfig {
        cluster_name: "homelab-cluster".to_string(),
        namespace: "default".to_string(),
        kubernetes_version: "v1.32.0".to_string(),
        replicas: 1,
        allowed_nodes: strings(&["K8S0", "K8S1", "K8S2"]),
        control_plane_endpoint: ControlPlaneEndpoint {
            host: "192.168.0.30".to_string(),
            port: 6443,
        },
        dns_servers: strings(&["8.8.8.8", "8.8.4.4"]),
        ipv4_config: Ipv4Config {
            addresses: strings(&["192.168.0.20-192.168.0.29"]),
            gateway: "192.168.0.254".to_string(),
            prefix: 24,
        },
        scheduler_hints: SchedulerHints {
            memory_adjustment: 0,
        },
        machine_template: default_machine_template(2048),
        talos_config: TalosConfig {
            install_disk: "/dev/sda".to_string(),
            extensions: strings(&[QEMU_GUEST_AGENT_EXTENSION]),
            kernel_args: strings(&["net.ifnames=0"]),
            network_interface: "eth0".to_string(),
            dhcp: false,
        },
        workers: WorkersConfig {
            enabled: true,
            replicas: Some(2),
            machine_template: Some(default_machine_template(4096)),
            talos_config: Some(WorkerTalosConfig {
                talos_version: "v1.9".to_string(),
                install_disk: "/dev/sda".to_string(),
                extensions: Some(strings(&[QEMU_GUEST_AGENT_EXTENSION])),
                kernel_args: Some(strings(&["net.ifnames=0"])),
                network_interface: Some("eth0".to_string()),
                dhcp: Some(false),
            }),
        },
    }
}
