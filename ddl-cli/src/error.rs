use thiserror::Error;

/// 命令行参数错误，打印用法后以状态码 1 退出
#[derive(Error, Debug, PartialEq)]
pub enum UsageError {
    #[error("error: excel 参数为空或无效!")]
    EmptyExcel,

    #[error("error: excel 文件路径不存在: {0}")]
    ExcelNotFound(String),

    #[error("error: output 参数为空或无效!")]
    EmptyOutput,

    #[error("error: output 目录路径不存在: {0}")]
    OutputNotFound(String),
}

/// 参数错误时的退出状态码
pub const USAGE_EXIT_CODE: i32 = 1;
