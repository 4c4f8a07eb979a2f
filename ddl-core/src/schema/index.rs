use crate::constants::workbook::INDEX_SHEET_NAME_COLUMN;
use crate::error::Result;
use crate::workbook::{SheetRow, SheetSource};
use tracing::info;

/// 读取目录索引工作表，得到待处理的工作表名称列表
///
/// 跳过首行表头，按行顺序读取 B 列，不去重。B 列为空白时报错。
pub fn resolve_index<S: SheetSource + ?Sized>(
    source: &mut S,
    index_sheet: &str,
) -> Result<Vec<String>> {
    let rows = source.sheet_rows(index_sheet)?;
    let names = sheet_names_from_rows(index_sheet, &rows)?;
    info!("目录索引 {} 共列出 {} 个工作表", index_sheet, names.len());
    Ok(names)
}

pub fn sheet_names_from_rows(index_sheet: &str, rows: &[SheetRow]) -> Result<Vec<String>> {
    rows.iter()
        .skip(1)
        .map(|row| row.required_text(index_sheet, INDEX_SHEET_NAME_COLUMN).map(str::to_string))
        .collect()
}
