use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "PROMPTSITE_LOG";

/// Install the stderr subscriber.
///
/// Priority order (highest to lowest):
/// 1. `-v` flags
/// 2. PROMPTSITE_LOG, then RUST_LOG
/// 3. warn
pub fn init(verbosity: u8) -> Result<()> {
    let directive = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok();
    let filter = EnvFilter::try_new(filter_directive(verbosity, directive.as_deref()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialise logging: {}", e))
}

fn filter_directive(verbosity: u8, from_env: Option<&str>) -> String {
    match (verbosity, from_env) {
        (0, Some(directive)) if !directive.trim().is_empty() => directive.to_string(),
        (0, _) => "warn".to_string(),
        (1, _) => "info".to_string(),
        (2, _) => "debug".to_string(),
        _ => "trace".to_string(),
    }
}
