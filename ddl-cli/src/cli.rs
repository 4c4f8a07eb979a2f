use crate::error::{USAGE_EXIT_CODE, UsageError};
use crate::project_info::{metadata, version_info};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// DDL CLI - Excel 表结构定义转换为 MySQL 建表语句
#[derive(Parser, Debug)]
#[command(name = "ddl-cli")]
#[command(about = metadata::PROJECT_DESCRIPTION)]
#[command(version = version_info::CLI_VERSION)]
#[command(long_about = metadata::display::DESCRIPTION_LONG)]
#[command(author = metadata::PROJECT_AUTHORS)]
pub struct Cli {
    /// Excel 文件路径
    #[arg(short, long, value_name = "FILE")]
    pub excel: PathBuf,

    /// SQL 文件输出目录，必须已存在
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// 配置文件路径（默认查找 ddl.toml、.ddl.toml）
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 详细输出
    #[arg(short, long)]
    pub verbose: bool,

    /// 工作表数据有误时跳过该表继续处理
    #[arg(long)]
    pub keep_going: bool,
}

impl Cli {
    /// 校验路径参数：不能为空，且必须存在
    pub fn validate(&self) -> Result<(), UsageError> {
        if self.excel.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(UsageError::EmptyExcel);
        }
        if !self.excel.exists() {
            return Err(UsageError::ExcelNotFound(self.excel.display().to_string()));
        }
        if self.output.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(UsageError::EmptyOutput);
        }
        if !self.output.exists() {
            return Err(UsageError::OutputNotFound(self.output.display().to_string()));
        }
        Ok(())
    }
}

/// 解析并校验命令行参数
///
/// `--help`、`--version` 正常退出；其余参数错误打印用法后以状态码 1 退出。
pub fn parse_args() -> Cli {
    let cli = Cli::try_parse().unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            let _ = e.print();
            std::process::exit(USAGE_EXIT_CODE);
        }
    });

    if let Err(e) = cli.validate() {
        print_usage_and_exit(&e.to_string());
    }
    cli
}

/// 打印错误信息和用法到标准错误并退出
pub fn print_usage_and_exit(message: &str) -> ! {
    eprintln!("{message}");
    eprintln!("{}", Cli::command().render_usage());
    std::process::exit(USAGE_EXIT_CODE);
}
