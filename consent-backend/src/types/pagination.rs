// src/types/pagination.rs

use serde::{Deserialize, Serialize};

/// ページネーション情報
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: i32,
    pub per_page: i32,
    pub total_pages: i32,
    pub total_count: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: i32, per_page: i32, total_count: i64) -> Self {
        let total_pages = ((total_count as f64) / (per_page as f64)).ceil() as i32;

        Self {
            page,
            per_page,
            total_pages,
            total_count,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// ページネーション付きレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, page: i32, per_page: i32, total_count: i64) -> Self {
        Self {
            items,
            pagination: PaginationMeta::new(page, per_page, total_count),
        }
    }

    /// フィルタ済みの全件からページ分を切り出してレスポンスを作成
    pub fn paginate(all_items: Vec<T>, page: i32, per_page: i32) -> Self {
        let total_count = all_items.len() as i64;
        let offset = ((page - 1) * per_page).max(0) as usize;
        let items: Vec<T> = all_items
            .into_iter()
            .skip(offset)
            .take(per_page.max(0) as usize)
            .collect();
        Self::new(items, page, per_page, total_count)
    }
}
