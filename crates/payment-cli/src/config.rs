use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use payment_contracts::PaymentType;
use serde::Deserialize;
use thiserror::Error;

/// 配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "PAYCTL_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("配置文件不存在: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("配置加载失败: {0}")]
    Load(#[from] config::ConfigError),

    #[error("未知的支付类型: {0}")]
    UnknownPaymentType(String),
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct PayctlConfig {
    pub log: LogConfig,
    pub payment: PaymentSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// `pretty` 或 `json`
    pub format: String,
    pub show_source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            show_source_location: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PaymentSettings {
    /// 是否允许 parse 回退到旧格式
    pub legacy_attach: bool,
    /// 启用的支付类型，为空表示全部
    pub enabled_types: Vec<String>,
}

impl Default for PaymentSettings {
    fn default() -> Self {
        Self {
            legacy_attach: true,
            enabled_types: Vec::new(),
        }
    }
}

impl PaymentSettings {
    /// 启用的支付类型，按声明顺序
    pub fn enabled(&self) -> Result<Vec<PaymentType>, ConfigError> {
        if self.enabled_types.is_empty() {
            return Ok(PaymentType::all_values()
                .into_iter()
                .filter_map(PaymentType::from_value)
                .collect());
        }

        let mut enabled = Vec::with_capacity(self.enabled_types.len());
        for value in &self.enabled_types {
            let payment_type = PaymentType::from_value(value)
                .ok_or_else(|| ConfigError::UnknownPaymentType(value.clone()))?;
            enabled.push(payment_type);
        }
        Ok(enabled)
    }
}

impl PayctlConfig {
    /// 配置加载优先级：
    /// 1. 配置文件（`--config` 参数或 `PAYCTL_CONFIG` 环境变量）
    /// 2. 环境变量 (PAYCTL_*)，层级用 `__` 分隔，如 `PAYCTL_LOG__LEVEL=debug`
    pub fn load(custom_path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(custom_path, env_source())
    }

    fn load_with_env(custom_path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut config_builder = Config::builder();

        let path = custom_path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from));

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::MissingFile(path));
            }
            config_builder = config_builder.add_source(File::from(path));
        }

        config_builder = config_builder.add_source(env);

        let config: PayctlConfig = config_builder.build()?.try_deserialize()?;

        // 提前校验支付类型，避免运行时才发现配置错误
        config.payment.enabled()?;

        Ok(config)
    }
}

/// `PAYCTL_` 之后的部分按 `__` 拆成层级
fn env_source() -> Environment {
    Environment::with_prefix("PAYCTL")
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("payment.enabled_types")
        .try_parsing(true)
}
