use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directive used when `RUST_LOG` is unset: `level` for this crate, warnings elsewhere.
fn default_directive(level: &str) -> String {
    format!("zmadmin_wire={level},warn")
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(level)))
}

pub fn init_cli_logger(verbose: bool) {
    init_logger(if verbose { "debug" } else { "info" }, false);
}

/// Logs go to stderr so converted documents on stdout stay clean.
pub fn init_logger(level: &str, json: bool) {
    let registry = tracing_subscriber::registry().with(filter(level));
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    // A global subscriber may already be installed.
    let result = if json {
        registry.with(layer.json()).try_init()
    } else {
        registry.with(layer.compact()).try_init()
    };
    if let Err(e) = result {
        tracing::debug!("Logger already initialised: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive("debug"), "zmadmin_wire=debug,warn");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logger("info", false);
        init_logger("debug", true);
    }
}
