//! Environment-backed flag values.
//!
//! Deploy tooling sets configuration through environment variables; the same
//! settings are also exposed as command-line flags. The env key for a flag
//! is derived mechanically: `drain-duration` reads `DRAIN_DURATION`.

use clap::{value_parser, Arg, Command};

/// Transform a flag name into its environment key: uppercase, `-` → `_`.
pub fn env_key(name: &str) -> String {
    name.replace('-', "_").to_uppercase()
}

/// Read the environment value backing `name`. Unset and empty are
/// equivalent.
pub fn lookup(name: &str) -> Option<String> {
    match std::env::var(env_key(name)) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

/// Resolve a duration-valued setting from the environment.
///
/// The raw integer is returned as-is; the caller decides the unit. A value
/// that does not parse as an integer is treated the same as an absent one
/// and yields `default`.
pub fn duration_or(name: &str, default: u64) -> u64 {
    match lookup(name).map(|value| value.parse::<u64>()) {
        Some(Ok(value)) => value,
        _ => default,
    }
}

/// Register `--<name>` on `cmd` with its default resolved through
/// [`duration_or`], so precedence is flag > env > `default`.
pub fn duration_flag(cmd: Command, name: &'static str, default: u64, help: &'static str) -> Command {
    cmd.arg(
        Arg::new(name)
            .long(name)
            .value_name("N")
            .value_parser(value_parser!(u64))
            .default_value(Box::leak(duration_or(name, default).to_string().into_boxed_str()) as &'static str)
            .help(help),
    )
}
