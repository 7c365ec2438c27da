//! Book Context - Aggregate Root

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use super::{Author, BookId, PublishedYear, Summary, Title, ValidationError};

/// Book 聚合根
///
/// 不变量:
/// - `published_year` 不得晚于当前日历年（每次构造/反序列化时重新检查）
/// - `id` 与 `created_at` 创建后不可变
/// - 更新只能通过 [`Book::update`] 整体替换，原实例不受影响
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    id: BookId,
    title: Title,
    author: Author,
    published_year: PublishedYear,
    summary: Summary,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Book {
    /// 构造书籍
    ///
    /// 存储层反序列化也必须经过这里，以保证出版年份检查对每次加载生效。
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: BookId,
        title: Title,
        author: Author,
        published_year: PublishedYear,
        summary: Summary,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let current_year = Utc::now().year();
        if published_year.value() > current_year {
            return Err(ValidationError::OutOfRange {
                field: "published_year",
                value: i64::from(published_year.value()),
            });
        }

        Ok(Self {
            id,
            title,
            author,
            published_year,
            summary,
            created_at,
            updated_at,
        })
    }

    /// 整体替换可变字段，返回新实例
    ///
    /// `id` 与 `created_at` 保持不变，`updated_at` 置为 `now`。纯函数。
    pub fn update(
        &self,
        title: Title,
        author: Author,
        published_year: PublishedYear,
        summary: Summary,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: self.id.clone(),
            title,
            author,
            published_year,
            summary,
            created_at: self.created_at,
            updated_at: now,
        }
    }

    // Getters
    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn published_year(&self) -> PublishedYear {
        self.published_year
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        let now = Utc::now();
        Book::new(
            BookId::generate(),
            Title::new("Dune").unwrap(),
            Author::new("Herbert").unwrap(),
            PublishedYear::new(1965).unwrap(),
            Summary::none(),
            now,
            now,
        )
        .unwrap()
    }

    #[test]
    fn test_new_book_has_equal_timestamps() {
        let book = sample_book();
        assert!(!book.id().as_str().is_empty());
        assert_eq!(book.created_at(), book.updated_at());
        assert_eq!(book.title().as_str(), "Dune");
        assert_eq!(book.author().as_str(), "Herbert");
        assert_eq!(book.published_year().value(), 1965);
        assert_eq!(book.summary().as_deref(), None);
    }

    #[test]
    fn test_future_year_is_rejected() {
        let now = Utc::now();
        let next_year = now.year() + 1;
        let result = Book::new(
            BookId::generate(),
            Title::new("From the Future").unwrap(),
            Author::new("Nobody").unwrap(),
            PublishedYear::new(next_year).unwrap(),
            Summary::none(),
            now,
            now,
        );
        assert_eq!(
            result,
            Err(ValidationError::OutOfRange {
                field: "published_year",
                value: i64::from(next_year),
            })
        );
    }

    #[test]
    fn test_current_year_is_accepted() {
        let now = Utc::now();
        let result = Book::new(
            BookId::generate(),
            Title::new("This Year").unwrap(),
            Author::new("Somebody").unwrap(),
            PublishedYear::new(now.year()).unwrap(),
            Summary::none(),
            now,
            now,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_update_preserves_identity_and_creation_time() {
        let original = sample_book();
        let later = original.created_at() + chrono::Duration::seconds(5);

        let updated = original.update(
            Title::new("Dune Messiah").unwrap(),
            Author::new("Herbert").unwrap(),
            PublishedYear::new(1969).unwrap(),
            Summary::new(Some("Sequel".to_string())).unwrap(),
            later,
        );

        assert_eq!(updated.id(), original.id());
        assert_eq!(updated.created_at(), original.created_at());
        assert_eq!(updated.title().as_str(), "Dune Messiah");
        assert_eq!(updated.published_year().value(), 1969);
        assert_eq!(updated.summary().as_deref(), Some("Sequel"));
        assert_eq!(updated.updated_at(), later);
    }

    #[test]
    fn test_update_never_mutates_the_receiver() {
        let original = sample_book();
        let later = original.created_at() + chrono::Duration::seconds(5);

        let first = original.update(
            Title::new("First").unwrap(),
            Author::new("Herbert").unwrap(),
            PublishedYear::new(1970).unwrap(),
            Summary::none(),
            later,
        );
        let second = original.update(
            Title::new("Second").unwrap(),
            Author::new("Herbert").unwrap(),
            PublishedYear::new(1971).unwrap(),
            Summary::none(),
            later,
        );

        // 原实例保持不变，两次派生互相独立
        assert_eq!(original.title().as_str(), "Dune");
        assert_eq!(first.title().as_str(), "First");
        assert_eq!(second.title().as_str(), "Second");
        assert_eq!(first.published_year().value(), 1970);
        assert_eq!(second.published_year().value(), 1971);
    }

    #[test]
    fn test_serializes_with_camel_case_and_iso8601() {
        let book = sample_book();
        let value = serde_json::to_value(&book).unwrap();

        assert_eq!(value["title"], "Dune");
        assert_eq!(value["publishedYear"], 1965);
        assert!(value["summary"].is_null());

        let created_at = value["createdAt"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
        assert!(value.get("updatedAt").is_some());
    }
}
