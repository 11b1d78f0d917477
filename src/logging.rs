use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber for a function binary.
///
/// `RUST_LOG` overrides the default `info` filter. `LOG_FORMAT=json` switches to JSON lines.
/// Timestamps are left to CloudWatch.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time();
    let result = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    // Only fails when a global subscriber is already installed.
    if let Err(error) = result {
        tracing::debug!(%error, "subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use crate::logging::init_logging;

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
        tracing::info!("still logging");
    }
}
