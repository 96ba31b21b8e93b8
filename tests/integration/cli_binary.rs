//! End-to-end tests running the paracluster binary.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_paracluster");
    Command::new(bin)
        .current_dir(dir)
        .env_remove("PARACLUSTER_LOG")
        .env_remove("PARACLUSTER_LOG_OUTPUT")
        .env_remove("PARACLUSTER_LOG_FORMAT")
        .args(args)
        .output()
        .unwrap()
}

fn count_markers(text: &str) -> usize {
    text.lines().filter(|line| *line == "---").count()
}

#[test]
fn test_default_run_writes_cluster_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(temp_dir.path(), &[]);

    assert!(
        output.status.success(),
        "paracluster should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Using default configuration. Use --create-config to customize."));
    assert!(stdout.contains("Cluster YAML generated successfully: cluster.yaml"));
    assert!(stdout.contains("Control plane endpoint: 192.168.0.30:6443"));
    assert!(stdout.contains("Worker nodes enabled: 2 replicas"));

    let manifest = std::fs::read_to_string(temp_dir.path().join("cluster.yaml")).unwrap();
    assert_eq!(count_markers(&manifest), 7);
}

#[test]
fn test_create_config_then_render_from_it() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &["--create-config", "config.yaml"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Default configuration saved to 'config.yaml'"));
    assert!(!temp_dir.path().join("cluster.yaml").exists());

    let output = run_in(
        temp_dir.path(),
        &["--config", "config.yaml", "--output", "out.yaml", "--workers-disabled"],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Using default configuration"));
    assert!(stdout.contains("Worker nodes: disabled"));

    let manifest = std::fs::read_to_string(temp_dir.path().join("out.yaml")).unwrap();
    assert_eq!(count_markers(&manifest), 4);
}

#[test]
fn test_missing_config_exits_non_zero_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(temp_dir.path(), &["--config", "nope.yaml", "-o", "result.yaml"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration file 'nope.yaml' not found"));
    assert!(!temp_dir.path().join("result.yaml").exists());
}

#[test]
fn test_missing_config_leaves_existing_output_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("cluster.yaml");
    std::fs::write(&out, "previous").unwrap();

    let output = run_in(temp_dir.path(), &["-c", "nope.json"]);
    assert!(!output.status.success());
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "previous");
}

#[test]
fn test_quick_overrides_show_in_summary() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(
        temp_dir.path(),
        &[
            "--cluster-name",
            "big",
            "--allowed-nodes",
            "NODE01, NODE02",
            "--worker-replicas",
            "5",
            "--worker-memory",
            "8192",
            "--worker-cores",
            "4",
        ],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Cluster name: big"));
    assert!(stdout.contains("Allowed nodes: NODE01, NODE02"));
    assert!(stdout.contains("Worker nodes enabled: 5 replicas"));
    assert!(stdout.contains("Worker specs: 4 cores, 8192MB RAM"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(temp_dir.path(), &["--verbose"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Cluster manifest written"),
        "verbose mode should emit logs to stderr; got: {}",
        stderr
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Cluster manifest written"));
}
