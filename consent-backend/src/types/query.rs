// src/types/query.rs

use serde::{Deserialize, Deserializer, Serialize};

/// デフォルトページサイズ
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// 最大ページサイズ
pub const MAX_PAGE_SIZE: u32 = 100;

/// デフォルトページ番号
fn default_page() -> u32 {
    1
}

/// デフォルトページサイズ
fn default_per_page() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// 文字列または数値からu32をデシリアライズ
fn deserialize_u32_from_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(u32),
    }

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s.parse::<u32>().map_err(serde::de::Error::custom),
        StringOrNumber::Number(n) => Ok(n),
    }
}

/// 文字列または真偽値からOption<bool>をデシリアライズ
pub fn deserialize_option_bool_from_string<'de, D>(
    deserializer: D,
) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrBool {
        String(String),
        Bool(bool),
    }

    match Option::<StringOrBool>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrBool::Bool(b)) => Ok(Some(b)),
        Some(StringOrBool::String(s)) => match s.as_str() {
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!(
                "invalid boolean: {}",
                other
            ))),
        },
    }
}

/// 統一ページネーションクエリパラメータ
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_u32_from_string"
    )]
    pub page: u32,
    #[serde(
        default = "default_per_page",
        deserialize_with = "deserialize_u32_from_string"
    )]
    pub per_page: u32,
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl PaginationQuery {
    /// デフォルト値を適用してページとper_pageを取得
    pub fn get_pagination(&self) -> (i32, i32) {
        let page = self.page.max(1) as i32;
        let per_page = self.per_page.clamp(1, MAX_PAGE_SIZE) as i32;
        (page, per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let query = PaginationQuery::default();
        assert_eq!(query.get_pagination(), (1, DEFAULT_PAGE_SIZE as i32));
    }

    #[test]
    fn test_pagination_clamps_out_of_range() {
        let query = PaginationQuery {
            page: 0,
            per_page: 10_000,
        };
        assert_eq!(query.get_pagination(), (1, MAX_PAGE_SIZE as i32));
    }

    #[test]
    fn test_page_deserializes_from_string() {
        let query: PaginationQuery = serde_json::from_str(r#"{"page":"3","per_page":"50"}"#).unwrap();
        assert_eq!(query.page, 3);
        assert_eq!(query.per_page, 50);
    }
}
