//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 存储表配置
    #[serde(default)]
    pub table: TableConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            table: TableConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// 存储表配置
#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    /// DynamoDB 表名
    #[serde(default = "default_table_name")]
    pub name: String,
}

fn default_table_name() -> String {
    "books".to_string()
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            name: default_table_name(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
