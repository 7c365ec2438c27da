//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `LIBRIS_`，层级分隔符 `__`，
///    另接受部署模板沿用的 `BOOKS_TABLE_NAME`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `LIBRIS_TABLE__NAME=books-prod`
/// - `LIBRIS_LOG__LEVEL=debug`
/// - `LIBRIS_LOG__JSON=true`
/// - `BOOKS_TABLE_NAME=books-prod`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("table.name", "books")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    for name in CONFIG_FILE_NAMES {
        builder = builder.add_source(File::with_name(name).required(false));
    }

    // 3. 环境变量
    // 前缀: LIBRIS_，层级分隔符: __ (双下划线)
    builder = builder.add_source(
        Environment::with_prefix("LIBRIS")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 部署模板注入的表名优先生效
    if let Ok(table_name) = std::env::var("BOOKS_TABLE_NAME") {
        builder = builder.set_override("table.name", table_name)?;
    }

    let config = builder.build()?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.table.name.is_empty() {
        return Err(ConfigError::ValidationError(
            "Table name cannot be empty".to_string(),
        ));
    }

    if config.log.level.is_empty() {
        return Err(ConfigError::ValidationError(
            "Log level cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Table: {}", config.table.name);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("Log JSON: {}", config.log.json);
    tracing::info!("=================================");
}
