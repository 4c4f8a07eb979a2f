/// # DDL CLI 日志系统使用说明
///
/// 库代码（ddl-core）只使用 `tracing` 宏，日志订阅者由 `main.rs` 调用 `setup_logging()` 安装。
///
/// ## 日志配置选项
///
/// - `-v, --verbose`：启用详细日志模式（DEBUG 级别），会输出每个字段的解析结果
/// - `RUST_LOG`：标准的 Rust 日志级别控制，优先于 `--verbose`
/// - `DDL_LOG_FILE`：日志文件路径，设置后日志输出到文件而非终端
///
/// ```bash
/// # 日志输出到文件
/// DDL_LOG_FILE=ddl.log ddl-cli --excel tables.xlsx --output sql
///
/// # 只看解析器的调试日志
/// RUST_LOG=ddl_core::schema=debug ddl-cli --excel tables.xlsx --output sql
/// ```
pub fn setup_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));

    // 检查环境变量，决定是否输出到文件
    if let Ok(log_file) = std::env::var("DDL_LOG_FILE") {
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
        {
            Ok(file) => {
                // 输出到文件 - 使用详细格式便于调试
                fmt()
                    .with_env_filter(env_filter)
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .init();
                return;
            }
            Err(e) => eprintln!("无法打开日志文件 {log_file}: {e}，改为输出到终端"),
        }
    }

    // 输出到终端 - 使用简洁格式，用户友好
    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(false)
        .without_time()
        .compact()
        .init();
}

fn default_log_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        assert_eq!(default_log_level(true), "debug");
        assert_eq!(default_log_level(false), "info");
    }
}
