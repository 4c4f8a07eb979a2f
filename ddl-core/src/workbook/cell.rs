use crate::error::{CellRef, DdlError, Result};

/// 单元格取值
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    String(String),
    Float(f64),
    Int(i64),
    Bool(bool),
    /// 日期、错误值等其他类型，保留其文本形式
    Other(String),
}

impl CellValue {
    /// 类型的中文显示名称，用于错误信息
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "空白",
            CellValue::String(_) => "文本",
            CellValue::Float(_) | CellValue::Int(_) => "数值",
            CellValue::Bool(_) => "布尔",
            CellValue::Other(_) => "其他",
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::String(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// 工作表中实际存在的一行
///
/// `cells` 按绝对列号索引，第 0 个元素对应 A 列。
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    /// 从 1 开始的行号
    pub number: u32,
    pub cells: Vec<CellValue>,
}

impl SheetRow {
    pub fn new(number: u32, cells: Vec<CellValue>) -> Self {
        Self { number, cells }
    }

    /// 整行没有任何取值
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(CellValue::is_empty)
    }

    fn cell(&self, sheet: &str, column: usize) -> Result<&CellValue> {
        self.cells
            .get(column)
            .ok_or_else(|| DdlError::MissingCell(self.cell_ref(sheet, column)))
    }

    fn cell_ref(&self, sheet: &str, column: usize) -> CellRef {
        CellRef::new(sheet, self.number, column as u32)
    }

    /// 读取文本单元格，空白单元格读作空字符串
    pub fn text(&self, sheet: &str, column: usize) -> Result<&str> {
        match self.cell(sheet, column)? {
            CellValue::String(s) => Ok(s.as_str()),
            CellValue::Empty => Ok(""),
            other => Err(DdlError::CellType {
                cell: self.cell_ref(sheet, column),
                expected: "文本",
                found: other.type_name(),
            }),
        }
    }

    /// 读取必填的文本单元格，空白单元格与缺失单元格同样报错
    pub fn required_text(&self, sheet: &str, column: usize) -> Result<&str> {
        match self.text(sheet, column)? {
            "" => Err(DdlError::MissingCell(self.cell_ref(sheet, column))),
            text => Ok(text),
        }
    }

    /// 读取可选的文本单元格，单元格不存在时返回 `None`
    pub fn optional_text(&self, sheet: &str, column: usize) -> Result<Option<&str>> {
        if column >= self.cells.len() {
            return Ok(None);
        }
        self.text(sheet, column).map(Some)
    }

    /// 读取数值单元格，小数向零截断，空白单元格读作 0
    pub fn integer(&self, sheet: &str, column: usize) -> Result<i64> {
        match self.cell(sheet, column)? {
            CellValue::Int(i) => Ok(*i),
            CellValue::Float(f) => Ok(f.trunc() as i64),
            CellValue::Empty => Ok(0),
            other => Err(DdlError::CellType {
                cell: self.cell_ref(sheet, column),
                expected: "数值",
                found: other.type_name(),
            }),
        }
    }
}
