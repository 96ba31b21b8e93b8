//! Merge rules: command-line overrides layered onto a loaded or default config.

pub mod overrides;
