//! CLI domain: parse, route, help, output, and presentation only.
//! Generation itself lives in `config` and `render`; the route table only orchestrates.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::USAGE_EXAMPLES;
pub use output::map_error;
pub use parse::Cli;
pub use presentation::format_generation_summary;
pub use route::{Mode, RunContext, DEFAULT_CONFIG_NOTICE};
