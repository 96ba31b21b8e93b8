//! Paracluster: Parametric Cluster Manifest Generator
//!
//! Renders a multi-document Cluster API manifest (Talos Linux on Proxmox) from a cluster
//! configuration loaded from JSON/YAML or built from defaults, with command-line overrides
//! layered on top.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
