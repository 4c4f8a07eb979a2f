// 模块声明
mod cell;
mod memory;
mod xlsx;

use crate::error::Result;

// 重新导出公共API
pub use cell::{CellValue, SheetRow};
pub use memory::MemoryWorkbook;
pub use xlsx::XlsxWorkbook;

/// 按名称读取工作表行的数据源
pub trait SheetSource {
    /// 工作簿中所有工作表的名称，按工作簿中的顺序
    fn sheet_names(&self) -> Vec<String>;

    /// 读取指定工作表的全部物理行，工作表不存在时返回 `SheetNotFound`
    fn sheet_rows(&mut self, sheet: &str) -> Result<Vec<SheetRow>>;
}
