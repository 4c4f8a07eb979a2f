use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DdlError>;

/// 工作表中的单元格位置，显示为 `sheet!B3` 形式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRef {
    pub sheet: String,
    /// 从 1 开始的行号
    pub row: u32,
    /// 从 0 开始的列号
    pub column: u32,
}

impl CellRef {
    pub fn new(sheet: impl Into<String>, row: u32, column: u32) -> Self {
        Self {
            sheet: sheet.into(),
            row,
            column,
        }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}{}", self.sheet, column_letters(self.column), self.row)
    }
}

/// 0 -> A, 25 -> Z, 26 -> AA
pub fn column_letters(column: u32) -> String {
    let mut n = column + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

#[derive(Error, Debug)]
pub enum DdlError {
    #[error("配置错误: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel 工作簿错误: {0}")]
    Workbook(String),

    #[error("工作表不存在: {0}")]
    SheetNotFound(String),

    #[error("单元格缺失: {0}")]
    MissingCell(CellRef),

    #[error("单元格类型错误: {cell} 期望 {expected}，实际为 {found}")]
    CellType {
        cell: CellRef,
        expected: &'static str,
        found: &'static str,
    },

    #[error("自定义错误: {0}")]
    Custom(String),
}

impl From<calamine::XlsxError> for DdlError {
    fn from(err: calamine::XlsxError) -> Self {
        DdlError::Workbook(err.to_string())
    }
}

impl DdlError {
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    pub fn workbook(msg: impl Into<String>) -> Self {
        Self::Workbook(msg.into())
    }

    /// 是否属于单个工作表的数据问题（可跳过该表继续处理）
    pub fn is_sheet_data_error(&self) -> bool {
        matches!(
            self,
            DdlError::SheetNotFound(_) | DdlError::MissingCell(_) | DdlError::CellType { .. }
        )
    }
}
