//! Libris - 无服务器书籍目录 API
//!
//! Lambda 入口: 每次调用构建 DynamoDB 仓储并分发 API Gateway 事件。

use std::sync::Arc;

use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;

use libris::config::{load_config, print_config};
use libris::infrastructure::http::{route_event, ApiGatewayResponse, AppState};
use libris::infrastructure::persistence::dynamodb::DynamoBookRepository;

async fn handle_request(
    event: LambdaEvent<Value>,
    table_name: String,
) -> Result<ApiGatewayResponse, lambda_runtime::Error> {
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = aws_sdk_dynamodb::Client::new(&aws_config);

    let repository = Arc::new(DynamoBookRepository::new(client, table_name));
    let state = AppState::new(repository);

    Ok(route_event(&state, event.payload).await)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!("{},libris={}", config.log.level, config.log.level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(env_filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Libris - 书籍目录 API");
    print_config(&config);

    let table_name = config.table.name.clone();
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        handle_request(event, table_name.clone())
    }))
    .await
    .map_err(|error| anyhow::anyhow!("Lambda runtime failed: {error}"))
}
