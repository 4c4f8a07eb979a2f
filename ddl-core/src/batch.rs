use crate::config::AppConfig;
use crate::error::{DdlError, Result};
use crate::output::write_sql_file;
use crate::schema::{SheetParser, generate_create_table_sql, resolve_index};
use crate::workbook::SheetSource;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// 批处理选项
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// SQL 文件输出目录，必须已存在
    pub output_dir: PathBuf,
    /// 工作表数据有误时跳过该表继续处理，否则终止
    pub keep_going: bool,
}

/// 处理失败的工作表
#[derive(Debug)]
pub struct SheetFailure {
    pub sheet: String,
    pub error: DdlError,
}

/// 批处理结果
#[derive(Debug, Default)]
pub struct BatchReport {
    /// 成功写出的 SQL 文件
    pub written: Vec<PathBuf>,
    /// 没有字段定义行的工作表
    pub degenerate: Vec<String>,
    /// 被跳过的工作表（数据错误或写文件失败）
    pub failed: Vec<SheetFailure>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// 按目录索引逐个处理工作表：解析、生成 SQL、写文件
///
/// 写文件失败只记录并继续；工作表数据有误时默认终止，`keep_going` 时跳过。
pub fn convert_workbook<S: SheetSource + ?Sized>(
    source: &mut S,
    config: &AppConfig,
    options: &BatchOptions,
) -> Result<BatchReport> {
    let sheet_names = resolve_index(source, &config.workbook.index_sheet)?;
    let parser = SheetParser::new(config.markers.clone());
    let mut report = BatchReport::default();

    for sheet_name in &sheet_names {
        let table = match parser.parse(source, sheet_name) {
            Ok(table) => table,
            Err(e) if options.keep_going && e.is_sheet_data_error() => {
                error!("❌ 工作表 {} 解析失败，已跳过: {}", sheet_name, e);
                report.failed.push(SheetFailure {
                    sheet: sheet_name.clone(),
                    error: e,
                });
                continue;
            }
            Err(e) => {
                error!("❌ 工作表 {} 解析失败: {}", sheet_name, e);
                return Err(e);
            }
        };

        if table.is_degenerate() {
            report.degenerate.push(sheet_name.clone());
        }

        let lines = generate_create_table_sql(&table);
        match write_sql_file(&lines, &options.output_dir, sheet_name) {
            Ok(path) => {
                info!("✅ {} -> {}", sheet_name, path.display());
                report.written.push(path);
            }
            Err(e) => {
                error!("❌ 写入工作表 {} 的 SQL 文件失败: {}", sheet_name, e);
                report.failed.push(SheetFailure {
                    sheet: sheet_name.clone(),
                    error: e,
                });
            }
        }
    }

    if report.has_failures() {
        warn!(
            "处理完成: 成功 {} 个，失败 {} 个",
            report.written.len(),
            report.failed.len()
        );
    } else {
        info!("处理完成: 共生成 {} 个 SQL 文件", report.written.len());
    }

    Ok(report)
}
