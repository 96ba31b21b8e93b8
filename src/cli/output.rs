//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::GeneratorError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &GeneratorError) -> String {
    format!("Error: {}", e)
}
