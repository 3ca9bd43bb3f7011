//! Logger setup based on `tracing-subscriber`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise the binary's own crates log at
/// `default_level` and everything else (axum, hyper, tower-http) at `info`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(bin_name, default_level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .try_init();
}

/// Build the default filter directives for the given binary.
fn default_directives(bin_name: &str, default_level: &str) -> String {
    let crate_name = bin_name.replace('-', "_");
    format!("info,{crate_name}={default_level},chatter_shared={default_level},tower_http=debug")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_uses_crate_name() {
        // テスト項目: バイナリ名のハイフンがクレート名形式に変換される
        // when (操作):
        let directives = default_directives("chatter-server", "debug");

        // then (期待する結果):
        assert!(directives.starts_with("info,"));
        assert!(directives.contains("chatter_server=debug"));
        assert!(!directives.contains("chatter-server"));
    }

    #[test]
    fn test_default_directives_are_parseable() {
        // テスト項目: 生成したディレクティブが EnvFilter として解釈できる
        // when (操作):
        let result = EnvFilter::try_new(default_directives("chatter-server", "trace"));

        // then (期待する結果):
        assert!(result.is_ok());
    }

    #[test]
    fn test_setup_logger_twice_does_not_panic() {
        // テスト項目: setup_logger を複数回呼んでも panic しない
        setup_logger("chatter-server", "debug");
        setup_logger("chatter-server", "debug");
    }
}
