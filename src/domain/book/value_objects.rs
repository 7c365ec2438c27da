//! Book Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ValidationError;

/// 书籍唯一标识
///
/// 非空字符串。服务层通过 [`BookId::generate`] 生成 UUID v4，
/// 调用方不得自行指定新建书籍的标识。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct BookId(String);

impl BookId {
    /// 生成全新标识
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::Empty("id"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BookId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 书籍标题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Title(String);

impl Title {
    pub const MAX_LEN: usize = 200;

    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ValidationError::Empty("title"));
        }
        if title.chars().count() > Self::MAX_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: Self::MAX_LEN,
            });
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Title {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 作者名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Author(String);

impl Author {
    pub const MAX_LEN: usize = 120;

    pub fn new(author: impl Into<String>) -> Result<Self, ValidationError> {
        let author = author.into();
        if author.is_empty() {
            return Err(ValidationError::Empty("author"));
        }
        if author.chars().count() > Self::MAX_LEN {
            return Err(ValidationError::TooLong {
                field: "author",
                max: Self::MAX_LEN,
            });
        }
        Ok(Self(author))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Author {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 出版年份
///
/// 非负整数。是否晚于当前年份属于跨字段不变量，由聚合根在构造时检查。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32")]
pub struct PublishedYear(i32);

impl PublishedYear {
    pub fn new(year: i32) -> Result<Self, ValidationError> {
        if year < 0 {
            return Err(ValidationError::OutOfRange {
                field: "published_year",
                value: i64::from(year),
            });
        }
        Ok(Self(year))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for PublishedYear {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for PublishedYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 摘要（可空）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Option<String>")]
pub struct Summary(Option<String>);

impl Summary {
    pub const MAX_LEN: usize = 2000;

    pub fn new(summary: Option<String>) -> Result<Self, ValidationError> {
        if let Some(text) = &summary {
            if text.chars().count() > Self::MAX_LEN {
                return Err(ValidationError::TooLong {
                    field: "summary",
                    max: Self::MAX_LEN,
                });
            }
        }
        Ok(Self(summary))
    }

    /// 空摘要
    pub fn none() -> Self {
        Self(None)
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl TryFrom<Option<String>> for Summary {
    type Error = ValidationError;

    fn try_from(value: Option<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_generate_is_non_empty() {
        let id = BookId::generate();
        assert!(!id.as_str().is_empty());
    }

    #[test]
    fn test_book_id_rejects_empty() {
        assert_eq!(BookId::new(""), Err(ValidationError::Empty("id")));
    }

    #[test]
    fn test_title_valid() {
        let title = Title::new("Dune").unwrap();
        assert_eq!(title.as_str(), "Dune");
    }

    #[test]
    fn test_title_rejects_empty() {
        assert_eq!(Title::new(""), Err(ValidationError::Empty("title")));
    }

    #[test]
    fn test_title_rejects_201_chars() {
        let result = Title::new("a".repeat(201));
        assert_eq!(
            result,
            Err(ValidationError::TooLong {
                field: "title",
                max: 200
            })
        );
    }

    #[test]
    fn test_title_accepts_200_chars() {
        assert!(Title::new("a".repeat(200)).is_ok());
    }

    #[test]
    fn test_author_rejects_121_chars() {
        let result = Author::new("b".repeat(121));
        assert_eq!(
            result,
            Err(ValidationError::TooLong {
                field: "author",
                max: 120
            })
        );
    }

    #[test]
    fn test_published_year_rejects_negative() {
        let result = PublishedYear::new(-1);
        assert_eq!(
            result,
            Err(ValidationError::OutOfRange {
                field: "published_year",
                value: -1
            })
        );
    }

    #[test]
    fn test_summary_none_is_valid() {
        assert!(Summary::new(None).is_ok());
        assert_eq!(Summary::none().as_deref(), None);
    }

    #[test]
    fn test_summary_rejects_2001_chars() {
        let result = Summary::new(Some("s".repeat(2001)));
        assert_eq!(
            result,
            Err(ValidationError::TooLong {
                field: "summary",
                max: 2000
            })
        );
    }

    #[test]
    fn test_value_objects_serialize_as_bare_primitives() {
        let title = Title::new("Dune").unwrap();
        assert_eq!(serde_json::to_string(&title).unwrap(), "\"Dune\"");

        let year = PublishedYear::new(1965).unwrap();
        assert_eq!(serde_json::to_string(&year).unwrap(), "1965");

        let summary = Summary::none();
        assert_eq!(serde_json::to_string(&summary).unwrap(), "null");
    }

    #[test]
    fn test_deserialization_runs_validation() {
        let result: Result<Title, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());

        let result: Result<PublishedYear, _> = serde_json::from_str("-5");
        assert!(result.is_err());
    }
}
