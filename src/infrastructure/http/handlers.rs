//! Book HTTP Handlers
//!
//! 把解析后的请求翻译为命令/查询，把结果序列化为 API Gateway 响应。

use serde::de::DeserializeOwned;

use super::dto::{json_response, ApiGatewayResponse, BookInformation};
use super::error::ApiError;
use super::state::AppState;
use crate::application::{CreateBook, DeleteBook, GetBook, ListBooks, UpdateBook};
use crate::domain::BookId;

fn parse_body<T: DeserializeOwned>(body: Option<&str>) -> Result<T, ApiError> {
    let body = body.ok_or_else(|| ApiError::BadRequest("Request body is required".to_string()))?;
    serde_json::from_str(body)
        .map_err(|error| ApiError::BadRequest(format!("Malformed request body: {error}")))
}

fn parse_book_id(raw: &str) -> Result<BookId, ApiError> {
    BookId::new(raw).map_err(|error| ApiError::BadRequest(error.to_string()))
}

/// 书籍一览
pub async fn list_books(state: &AppState) -> Result<ApiGatewayResponse, ApiError> {
    let books = state.list_books_handler.handle(ListBooks).await?;
    Ok(json_response(200, &books))
}

/// 书籍创建
pub async fn create_book(
    state: &AppState,
    body: Option<&str>,
) -> Result<ApiGatewayResponse, ApiError> {
    let info: BookInformation = parse_body(body)?;

    let book = state
        .create_book_handler
        .handle(CreateBook {
            title: info.title,
            author: info.author,
            published_year: info.published_year,
            summary: info.summary,
        })
        .await?;

    Ok(json_response(201, &book))
}

/// 书籍单体获取
pub async fn get_book(state: &AppState, raw_id: &str) -> Result<ApiGatewayResponse, ApiError> {
    let book_id = parse_book_id(raw_id)?;
    let book = state.get_book_handler.handle(GetBook { book_id }).await?;
    Ok(json_response(200, &book))
}

/// 书籍更新
pub async fn update_book(
    state: &AppState,
    raw_id: &str,
    body: Option<&str>,
) -> Result<ApiGatewayResponse, ApiError> {
    let book_id = parse_book_id(raw_id)?;
    let info: BookInformation = parse_body(body)?;

    let book = state
        .update_book_handler
        .handle(UpdateBook {
            book_id,
            title: info.title,
            author: info.author,
            published_year: info.published_year,
            summary: info.summary,
        })
        .await?;

    Ok(json_response(200, &book))
}

/// 书籍删除
pub async fn delete_book(state: &AppState, raw_id: &str) -> Result<ApiGatewayResponse, ApiError> {
    let book_id = parse_book_id(raw_id)?;
    state
        .delete_book_handler
        .handle(DeleteBook { book_id })
        .await?;
    Ok(json_response(200, &"completed"))
}
