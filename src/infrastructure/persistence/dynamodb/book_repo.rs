//! DynamoDB Book Repository
//!
//! 单表存储，主键为 `id`。存在性语义全部交给 DynamoDB 的条件写:
//! - 创建: `attribute_not_exists(id)`，条件失败 => AlreadyExists
//! - 更新/删除: `attribute_exists(id)`，条件失败 => NotFound
//!
//! 不做写前读取，并发竞争由存储引擎仲裁。

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::application::ports::{BookRepositoryPort, RepositoryError};
use crate::domain::{Author, Book, BookId, BookList, PublishedYear, Summary, Title, ValidationError};

/// DynamoDB 书籍仓储
pub struct DynamoBookRepository {
    client: Client,
    table_name: String,
}

impl DynamoBookRepository {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

// ============================================================================
// Item <-> Book 映射
// ============================================================================

/// Book 转 DynamoDB item
///
/// 时间戳以 ISO-8601 文本落库，缺失摘要写 NULL 属性。
fn to_item(book: &Book) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert(
        "id".to_string(),
        AttributeValue::S(book.id().as_str().to_string()),
    );
    item.insert(
        "title".to_string(),
        AttributeValue::S(book.title().as_str().to_string()),
    );
    item.insert(
        "author".to_string(),
        AttributeValue::S(book.author().as_str().to_string()),
    );
    item.insert(
        "published_year".to_string(),
        AttributeValue::N(book.published_year().value().to_string()),
    );
    item.insert(
        "summary".to_string(),
        match book.summary().as_deref() {
            Some(text) => AttributeValue::S(text.to_string()),
            None => AttributeValue::Null(true),
        },
    );
    item.insert(
        "created_at".to_string(),
        AttributeValue::S(book.created_at().to_rfc3339()),
    );
    item.insert(
        "updated_at".to_string(),
        AttributeValue::S(book.updated_at().to_rfc3339()),
    );
    item
}

/// DynamoDB item 转 Book
///
/// 必须走聚合根构造器，让出版年份等不变量对每次加载重新生效。
/// 反序列化失败说明表里有坏数据，按存储故障上报，不静默丢行。
fn from_item(item: &HashMap<String, AttributeValue>) -> Result<Book, RepositoryError> {
    let id = BookId::new(string_attr(item, "id")?).map_err(corrupt_record)?;
    let title = Title::new(string_attr(item, "title")?).map_err(corrupt_record)?;
    let author = Author::new(string_attr(item, "author")?).map_err(corrupt_record)?;

    let year_raw = number_attr(item, "published_year")?;
    let published_year = PublishedYear::new(year_raw).map_err(corrupt_record)?;

    let summary_raw = match item.get("summary") {
        None | Some(AttributeValue::Null(_)) => None,
        Some(AttributeValue::S(text)) => Some(text.clone()),
        Some(_) => {
            return Err(RepositoryError::OperationFailed(
                "corrupt book record: summary must be a string or NULL".to_string(),
            ))
        }
    };
    let summary = Summary::new(summary_raw).map_err(corrupt_record)?;

    let created_at = datetime_attr(item, "created_at")?;
    let updated_at = datetime_attr(item, "updated_at")?;

    Book::new(
        id,
        title,
        author,
        published_year,
        summary,
        created_at,
        updated_at,
    )
    .map_err(corrupt_record)
}

fn string_attr<'a>(
    item: &'a HashMap<String, AttributeValue>,
    name: &str,
) -> Result<&'a str, RepositoryError> {
    item.get(name)
        .and_then(|value| value.as_s().ok())
        .map(String::as_str)
        .ok_or_else(|| {
            RepositoryError::OperationFailed(format!(
                "corrupt book record: missing string attribute {name}"
            ))
        })
}

fn number_attr(item: &HashMap<String, AttributeValue>, name: &str) -> Result<i32, RepositoryError> {
    item.get(name)
        .and_then(|value| value.as_n().ok())
        .and_then(|raw| raw.parse::<i32>().ok())
        .ok_or_else(|| {
            RepositoryError::OperationFailed(format!(
                "corrupt book record: missing number attribute {name}"
            ))
        })
}

fn datetime_attr(
    item: &HashMap<String, AttributeValue>,
    name: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let raw = string_attr(item, name)?;
    DateTime::parse_from_rfc3339(raw)
        .map(|value| value.with_timezone(&Utc))
        .map_err(|error| {
            RepositoryError::OperationFailed(format!(
                "corrupt book record: invalid timestamp {name}: {error}"
            ))
        })
}

fn corrupt_record(error: ValidationError) -> RepositoryError {
    RepositoryError::OperationFailed(format!("corrupt book record: {error}"))
}

// ============================================================================
// Port 实现
// ============================================================================

#[async_trait]
impl BookRepositoryPort for DynamoBookRepository {
    async fn list_books(&self) -> Result<BookList, RepositoryError> {
        let response = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|error| {
                tracing::error!(operation = "list_books", error = %DisplayErrorContext(&error), "Scan failed");
                RepositoryError::OperationFailed(format!("{}", DisplayErrorContext(error)))
            })?;

        let items = response.items.unwrap_or_default();
        let books = items
            .iter()
            .map(from_item)
            .collect::<Result<Vec<Book>, RepositoryError>>()?;

        Ok(BookList::from_items(books))
    }

    async fn create_book(&self, book: Book) -> Result<Book, RepositoryError> {
        let result = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(&book)))
            .condition_expression("attribute_not_exists(id)")
            .send()
            .await;

        match result {
            Ok(_) => Ok(book),
            Err(error) => {
                let service_error = error.into_service_error();
                if service_error.is_conditional_check_failed_exception() {
                    tracing::warn!(
                        operation = "create_book",
                        book_id = %book.id(),
                        "Conditional check failed: already exists"
                    );
                    Err(RepositoryError::AlreadyExists(format!(
                        "Book {} already exists",
                        book.id()
                    )))
                } else {
                    tracing::error!(
                        operation = "create_book",
                        book_id = %book.id(),
                        error = %service_error,
                        "PutItem failed"
                    );
                    Err(RepositoryError::OperationFailed(service_error.to_string()))
                }
            }
        }
    }

    async fn get_book(&self, id: &BookId) -> Result<Book, RepositoryError> {
        let response = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.as_str().to_string()))
            .send()
            .await
            .map_err(|error| {
                tracing::error!(operation = "get_book", book_id = %id, error = %DisplayErrorContext(&error), "GetItem failed");
                RepositoryError::OperationFailed(format!("{}", DisplayErrorContext(error)))
            })?;

        match response.item {
            Some(item) => from_item(&item),
            None => Err(RepositoryError::NotFound(format!("Book {id} not found"))),
        }
    }

    async fn update_book(&self, book: Book) -> Result<Book, RepositoryError> {
        let result = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(&book)))
            .condition_expression("attribute_exists(id)")
            .send()
            .await;

        match result {
            Ok(_) => Ok(book),
            Err(error) => {
                let service_error = error.into_service_error();
                if service_error.is_conditional_check_failed_exception() {
                    tracing::warn!(
                        operation = "update_book",
                        book_id = %book.id(),
                        "Conditional check failed: not found"
                    );
                    Err(RepositoryError::NotFound(format!(
                        "Book {} not found",
                        book.id()
                    )))
                } else {
                    tracing::error!(
                        operation = "update_book",
                        book_id = %book.id(),
                        error = %service_error,
                        "PutItem failed"
                    );
                    Err(RepositoryError::OperationFailed(service_error.to_string()))
                }
            }
        }
    }

    async fn delete_book(&self, id: &BookId) -> Result<(), RepositoryError> {
        let result = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.as_str().to_string()))
            .condition_expression("attribute_exists(id)")
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(error) => {
                let service_error = error.into_service_error();
                if service_error.is_conditional_check_failed_exception() {
                    tracing::warn!(
                        operation = "delete_book",
                        book_id = %id,
                        "Conditional check failed: not found"
                    );
                    Err(RepositoryError::NotFound(format!("Book {id} not found")))
                } else {
                    tracing::error!(
                        operation = "delete_book",
                        book_id = %id,
                        error = %service_error,
                        "DeleteItem failed"
                    );
                    Err(RepositoryError::OperationFailed(service_error.to_string()))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    fn sample_book() -> Book {
        let now = Utc::now();
        Book::new(
            BookId::new("book-1").unwrap(),
            Title::new("Dune").unwrap(),
            Author::new("Herbert").unwrap(),
            PublishedYear::new(1965).unwrap(),
            Summary::new(Some("Desert planet".to_string())).unwrap(),
            now,
            now,
        )
        .unwrap()
    }

    #[test]
    fn test_item_round_trip_preserves_book() {
        let book = sample_book();
        let item = to_item(&book);
        let restored = from_item(&item).unwrap();
        assert_eq!(restored, book);

        // 再序列化一次应得到完全相同的 item
        assert_eq!(to_item(&restored), item);
    }

    #[test]
    fn test_none_summary_round_trips_as_null() {
        let now = Utc::now();
        let book = Book::new(
            BookId::new("book-2").unwrap(),
            Title::new("Dune").unwrap(),
            Author::new("Herbert").unwrap(),
            PublishedYear::new(1965).unwrap(),
            Summary::none(),
            now,
            now,
        )
        .unwrap();

        let item = to_item(&book);
        assert_eq!(item.get("summary"), Some(&AttributeValue::Null(true)));

        let restored = from_item(&item).unwrap();
        assert_eq!(restored.summary().as_deref(), None);
    }

    #[test]
    fn test_missing_summary_attribute_reads_as_none() {
        let mut item = to_item(&sample_book());
        item.remove("summary");

        let restored = from_item(&item).unwrap();
        assert_eq!(restored.summary().as_deref(), None);
    }

    #[test]
    fn test_missing_attribute_is_a_storage_failure() {
        let mut item = to_item(&sample_book());
        item.remove("title");

        let result = from_item(&item);
        assert!(matches!(result, Err(RepositoryError::OperationFailed(_))));
    }

    #[test]
    fn test_invalid_timestamp_is_a_storage_failure() {
        let mut item = to_item(&sample_book());
        item.insert(
            "created_at".to_string(),
            AttributeValue::S("yesterday".to_string()),
        );

        let result = from_item(&item);
        assert!(matches!(result, Err(RepositoryError::OperationFailed(_))));
    }

    #[test]
    fn test_future_year_row_fails_deserialization() {
        // 落库后规则变化（或坏数据）也要在加载时被拦下
        let mut item = to_item(&sample_book());
        let next_year = Utc::now().year() + 1;
        item.insert(
            "published_year".to_string(),
            AttributeValue::N(next_year.to_string()),
        );

        let result = from_item(&item);
        assert!(matches!(result, Err(RepositoryError::OperationFailed(_))));
    }
}
