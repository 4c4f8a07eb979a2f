//! 表工作表的固定布局
//!
//! 前 9 行为元数据区，每行的取值位于 B 列；之后每行描述一个字段。

use crate::config::MarkerConfig;
use crate::constants::workbook::HEADER_ROW_COUNT;

/// 元数据区字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    TableNameCn,
    TableNameEn,
    PrimaryKeys,
    UniqueKeys,
    DbType,
    DbName,
    Reserved,
}

/// 元数据区行号（从 0 开始）到字段的映射
pub const HEADER_LAYOUT: [HeaderField; HEADER_ROW_COUNT] = [
    HeaderField::TableNameCn,
    HeaderField::TableNameEn,
    HeaderField::PrimaryKeys,
    HeaderField::UniqueKeys,
    HeaderField::DbType,
    HeaderField::DbName,
    HeaderField::Reserved,
    HeaderField::Reserved,
    HeaderField::Reserved,
];

impl HeaderField {
    /// 字段在元数据区中的行号（从 0 开始），保留行返回 `None`
    pub fn row_index(self) -> Option<usize> {
        if self == HeaderField::Reserved {
            return None;
        }
        HEADER_LAYOUT.iter().position(|field| *field == self)
    }
}

/// 字段定义行各列的位置（从 0 开始）
pub mod column {
    pub const SEQUENCE: usize = 0;
    pub const NAME_EN: usize = 1;
    pub const NAME_CN: usize = 2;
    pub const DATA_TYPE: usize = 3;
    pub const INDEX: usize = 4;
    pub const PRIMARY_KEY: usize = 5;
    pub const AUTO_INCREMENT: usize = 6;
    pub const NOT_NULL: usize = 7;
    pub const COMMENT: usize = 8;
}

/// 标记值匹配：大小写不敏感的完全匹配，不去除空白
pub fn marker_matches(text: &str, marker: &str) -> bool {
    text.to_lowercase() == marker.to_lowercase()
}

impl MarkerConfig {
    pub fn is_index(&self, text: &str) -> bool {
        marker_matches(text, &self.index)
    }

    pub fn is_primary_key(&self, text: &str) -> bool {
        marker_matches(text, &self.primary_key)
    }

    pub fn is_auto_increment(&self, text: &str) -> bool {
        marker_matches(text, &self.auto_increment)
    }

    pub fn is_not_null(&self, text: &str) -> bool {
        marker_matches(text, &self.not_null)
    }
}

/// 解析主键单元格：逗号分隔，去掉空白项，其余原样保留
///
/// 单元格为空白时返回 `None`。
pub fn split_primary_keys(cell: &str) -> Option<Vec<String>> {
    if cell.trim().is_empty() {
        return None;
    }
    Some(
        cell.split(',')
            .filter(|item| !item.trim().is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// 解析唯一索引单元格：分号分隔分组，组内逗号分隔字段
pub fn split_unique_keys(cell: &str) -> Vec<Vec<String>> {
    cell.split(';')
        .filter(|group| !group.trim().is_empty())
        .map(|group| {
            group
                .split(',')
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|group| !group.is_empty())
        .collect()
}
