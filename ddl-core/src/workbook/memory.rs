use super::{CellValue, SheetRow, SheetSource};
use crate::error::{DdlError, Result};

/// 内存中的工作簿，行号从 1 开始依次编号
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbook {
    sheets: Vec<(String, Vec<SheetRow>)>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一个工作表，同名工作表会被替换
    pub fn add_sheet(&mut self, name: impl Into<String>, rows: Vec<Vec<CellValue>>) {
        let name = name.into();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(idx, cells)| SheetRow::new(idx as u32 + 1, cells))
            .collect();

        match self.sheets.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = rows,
            None => self.sheets.push((name, rows)),
        }
    }

    pub fn with_sheet(mut self, name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        self.add_sheet(name, rows);
        self
    }
}

impl SheetSource for MemoryWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|(name, _)| name.clone()).collect()
    }

    fn sheet_rows(&mut self, sheet: &str) -> Result<Vec<SheetRow>> {
        self.sheets
            .iter()
            .find(|(name, _)| name == sheet)
            .map(|(_, rows)| rows.clone())
            .ok_or_else(|| DdlError::SheetNotFound(sheet.to_string()))
    }
}
