//! 基于 tracing 的日志初始化
//!
//! 日志统一写到 stderr，stdout 只留给命令输出。

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::config::LogConfig;

/// 初始化日志系统
///
/// `RUST_LOG` 优先于配置中的 `level`。重复初始化返回错误。
pub fn init(config: &LogConfig) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| format!("Invalid log level '{}': {}", config.level, e))?;

    let console_layer = if config.format.eq_ignore_ascii_case("json") {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        let mut layer = fmt::layer().with_writer(std::io::stderr);

        if config.show_source_location {
            layer = layer.with_file(true).with_line_number(true);
        }

        layer.boxed()
    };

    Registry::default()
        .with(filter)
        .with(console_layer)
        .try_init()
        .map_err(|e| format!("Failed to initialize logger: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let config = LogConfig::default();
        let _ = init(&config);

        let err = init(&config).unwrap_err();
        assert!(err.starts_with("Failed to initialize logger"));
    }
}
