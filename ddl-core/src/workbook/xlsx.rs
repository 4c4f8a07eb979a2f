use super::{CellValue, SheetRow, SheetSource};
use crate::error::{DdlError, Result};
use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 基于 calamine 的 `.xlsx` 工作簿
///
/// 在整个批处理期间持有，离开作用域时释放文件句柄。
pub struct XlsxWorkbook {
    path: PathBuf,
    inner: Xlsx<BufReader<File>>,
}

impl XlsxWorkbook {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let inner: Xlsx<_> = open_workbook(&path).map_err(|e| {
            DdlError::workbook(format!("无法打开 Excel 文件 {}: {e}", path.display()))
        })?;
        debug!("已打开 Excel 文件: {}", path.display());

        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SheetSource for XlsxWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names()
    }

    fn sheet_rows(&mut self, sheet: &str) -> Result<Vec<SheetRow>> {
        if !self.inner.sheet_names().iter().any(|name| name == sheet) {
            return Err(DdlError::SheetNotFound(sheet.to_string()));
        }
        let range = self.inner.worksheet_range(sheet)?;
        Ok(range_to_rows(&range))
    }
}

/// 将 calamine 的区域转换为按绝对行列定位的行
///
/// 全空的行视为不存在，与"物理行"的概念保持一致。
fn range_to_rows(range: &Range<Data>) -> Vec<SheetRow> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    range
        .rows()
        .enumerate()
        .map(|(offset, cells)| {
            let mut row = vec![CellValue::Empty; start_col as usize];
            row.extend(cells.iter().map(convert_cell));
            SheetRow::new(start_row + offset as u32 + 1, row)
        })
        .filter(|row| !row.is_blank())
        .collect()
}

fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::String(s.clone()),
        Data::Float(f) => CellValue::Float(*f),
        Data::Int(i) => CellValue::Int(*i),
        Data::Bool(b) => CellValue::Bool(*b),
        other => CellValue::Other(other.to_string()),
    }
}
