use anyhow::{Context, Result};
use ddl_core::batch::{BatchOptions, BatchReport, convert_workbook};
use ddl_core::config::AppConfig;
use ddl_core::workbook::XlsxWorkbook;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct CliApp {
    pub config: AppConfig,
    pub excel: PathBuf,
    pub options: BatchOptions,
}

impl CliApp {
    /// 根据命令行参数加载配置并初始化CLI应用
    pub fn new(cli: &Cli) -> Result<Self> {
        let config = AppConfig::find_and_load_config(cli.config.as_deref())
            .context("加载配置文件失败")?;

        Ok(Self {
            config,
            excel: cli.excel.clone(),
            options: BatchOptions {
                output_dir: cli.output.clone(),
                keep_going: cli.keep_going,
            },
        })
    }

    /// 打开工作簿并逐表生成 SQL 文件
    ///
    /// 工作簿在整个批处理期间保持打开，返回前释放。
    pub fn run(&self) -> Result<BatchReport> {
        info!("📖 读取 Excel 文件: {}", self.excel.display());
        let mut workbook = XlsxWorkbook::open(&self.excel)?;

        let report = convert_workbook(&mut workbook, &self.config, &self.options)
            .with_context(|| format!("处理 Excel 文件 {} 失败", self.excel.display()))?;

        for failure in &report.failed {
            warn!("⚠️ 工作表 {} 未生成: {}", failure.sheet, failure.error);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    fn write_workbook(path: &std::path::Path) {
        let mut book = rust_xlsxwriter::Workbook::new();
        let index = book.add_worksheet();
        index.set_name("目录索引").unwrap();
        index.write_string(0, 0, "序号").unwrap();
        index.write_string(0, 1, "表名").unwrap();
        index.write_number(1, 0, 1).unwrap();
        index.write_string(1, 1, "Orders").unwrap();

        let sheet = book.add_worksheet();
        sheet.set_name("Orders").unwrap();
        let header = [
            ("表中文名", "订单表"),
            ("表英文名", "orders"),
            ("主键", "id"),
            ("唯一索引", "order_no"),
            ("数据库类型", "mysql"),
            ("数据库", "shop"),
            ("备注", "-"),
            ("说明", "-"),
            ("序号", "英文名"),
        ];
        for (row, (label, value)) in header.iter().enumerate() {
            sheet.write_string(row as u32, 0, *label).unwrap();
            if !value.is_empty() {
                sheet.write_string(row as u32, 1, *value).unwrap();
            }
        }
        let columns = [
            ("id", "BIGINT", "主键", "自增", "非空", "主键"),
            ("order_no", "VARCHAR(32)", "", "", "非空", "订单号"),
        ];
        for (idx, (name, ty, pk, ai, nn, comment)) in columns.iter().enumerate() {
            let row = idx as u32 + 9;
            sheet.write_number(row, 0, idx as f64 + 1.0).unwrap();
            for (col, value) in [*name, "", *ty, "", *pk, *ai, *nn, *comment].iter().enumerate() {
                if !value.is_empty() {
                    sheet.write_string(row, col as u16 + 1, *value).unwrap();
                }
            }
        }
        book.save(path).unwrap();
    }

    #[test]
    fn test_run_generates_sql_files() {
        let dir = tempdir().unwrap();
        let excel = dir.path().join("tables.xlsx");
        write_workbook(&excel);
        let out = dir.path().join("sql");
        std::fs::create_dir(&out).unwrap();

        let cli = Cli::try_parse_from([
            "ddl-cli",
            "--excel",
            excel.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ])
        .unwrap();
        let app = CliApp::new(&cli).unwrap();
        let report = app.run().unwrap();

        assert_eq!(report.written, vec![out.join("orders.sql")]);
        let sql = std::fs::read_to_string(out.join("orders.sql")).unwrap();
        assert_eq!(
            sql.lines().collect::<Vec<_>>(),
            vec![
                "CREATE TABLE `shop`.`orders`(",
                "    `id` BIGINT NOT NULL AUTO_INCREMENT COMMENT '主键',",
                "    `order_no` VARCHAR(32) NOT NULL COMMENT '订单号',",
                "PRIMARY KEY(`id`),",
                "UNIQUE KEY (`order_no`)",
                ")",
                "COMMENT='订单表'",
                "ENGINE=InnoDB",
            ]
        );
    }

    #[test]
    fn test_run_with_invalid_workbook_fails() {
        let dir = tempdir().unwrap();
        let excel = dir.path().join("broken.xlsx");
        std::fs::write(&excel, b"not a zip").unwrap();

        let cli = Cli::try_parse_from([
            "ddl-cli",
            "--excel",
            excel.to_str().unwrap(),
            "--output",
            dir.path().to_str().unwrap(),
        ])
        .unwrap();
        let app = CliApp::new(&cli).unwrap();
        assert!(app.run().is_err());
    }

    #[test]
    fn test_explicit_config_is_applied() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("custom.toml");
        std::fs::write(&config, "[workbook]\nindex_sheet = \"Index\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "ddl-cli",
            "-e",
            "a.xlsx",
            "-o",
            "out",
            "-c",
            config.to_str().unwrap(),
        ])
        .unwrap();
        let app = CliApp::new(&cli).unwrap();
        assert_eq!(app.config.workbook.index_sheet, "Index");
        assert!(!app.options.keep_going);
    }
}
