// src/launcher/invocation.rs

use std::path::Path;

use crate::types::RunConfig;

/// The engine rejects any other number of positional arguments.
pub const ENGINE_ARG_COUNT: usize = 4;

/// Positional arguments for the engine, in contract order:
/// `order_count, map_kind, debug(0|1), generate(0|1)`.
pub fn build_invocation(config: &RunConfig) -> Vec<String> {
    vec![
        config.order_count.to_string(),
        config.map_kind.to_string(),
        flag(config.debug),
        flag(config.generate_input),
    ]
}

fn flag(on: bool) -> String {
    (if on { "1" } else { "0" }).to_string()
}

/// Space-joined command line, for logs and `--dry-run` output.
pub fn render_command(executable: &Path, args: &[String]) -> String {
    let mut line = executable.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
