//! Property tests: override idempotence, node list parsing, boolean rendering

use paracluster::config::{default_cluster_config, parse_node_list, ClusterOverrides};
use paracluster::render::{count_documents, render_manifest};
use proptest::prelude::*;

fn arb_overrides() -> impl Strategy<Value = ClusterOverrides> {
    (
        proptest::option::of("[a-z][a-z0-9-]{0,12}"),
        proptest::option::of(0u32..10),
        proptest::option::of("[A-Z0-9 ,]{0,20}"),
        proptest::option::of(256u32..65536),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(0u32..20),
        proptest::option::of(1u32..64),
    )
        .prop_map(
            |(name, replicas, nodes, memory, enable, disable, worker_replicas, worker_cores)| {
                ClusterOverrides {
                    cluster_name: name,
                    replicas,
                    allowed_nodes: nodes,
                    memory_mib: memory,
                    workers_enabled: enable,
                    workers_disabled: disable,
                    worker_replicas,
                    worker_cores,
                    ..Default::default()
                }
            },
        )
}

/// Applying the same overrides twice matches applying them once
#[test]
fn test_override_application_is_idempotent() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&arb_overrides(), |overrides| {
            let mut once = default_cluster_config();
            overrides.apply(&mut once).unwrap();

            let mut twice = default_cluster_config();
            overrides.apply(&mut twice).unwrap();
            overrides.apply(&mut twice).unwrap();

            prop_assert_eq!(once, twice);
            Ok(())
        })
        .unwrap();
}

/// Node lists keep every comma-separated entry, trimmed and in order
#[test]
fn test_node_list_is_trimmed_and_ordered() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &proptest::collection::vec("[A-Za-z0-9]{1,8}", 1..6),
            |nodes| {
                let raw = nodes
                    .iter()
                    .map(|n| format!("  {} ", n))
                    .collect::<Vec<_>>()
                    .join(",");
                prop_assert_eq!(parse_node_list(&raw), nodes);
                Ok(())
            },
        )
        .unwrap();
}

/// Document count depends only on the final workers flag
#[test]
fn test_document_count_follows_workers_flag() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&arb_overrides(), |overrides| {
            let mut config = default_cluster_config();
            overrides.apply(&mut config).unwrap();
            let manifest = render_manifest(&config).unwrap();

            let expected = if overrides.workers_disabled { 4 } else { 7 };
            prop_assert_eq!(count_documents(&manifest), expected);
            Ok(())
        })
        .unwrap();
}

/// Boolean fields always render as lowercase tokens
#[test]
fn test_booleans_render_lowercase() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(any::<bool>(), any::<bool>(), any::<bool>()),
            |(full, skip, dhcp)| {
                let mut config = default_cluster_config();
                config.machine_template.disks.boot_volume.full = full;
                config.machine_template.checks.skip_cloud_init_status = skip;
                config.talos_config.dhcp = dhcp;

                let manifest = render_manifest(&config).unwrap();
                let expected_lines = [
                    format!("          full: {}\n", full),
                    format!("skipCloudInitStatus: {}\n", skip),
                    format!("                dhcp: {}\n", dhcp),
                ];
                for needle in &expected_lines {
                    prop_assert!(manifest.contains(needle.as_str()), "missing {:?}", needle);
                }
                prop_assert!(!manifest.contains("True") && !manifest.contains("False"));
                Ok(())
            },
        )
        .unwrap();
}
