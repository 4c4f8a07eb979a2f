// 私有模块声明
mod app;
mod cli;
mod error;
pub mod project_info; // 公开项目信息模块
mod utils;

// 通过 pub use 精确控制对外暴露的接口
pub use app::CliApp;
pub use cli::{Cli, parse_args, print_usage_and_exit};
pub use error::{USAGE_EXIT_CODE, UsageError};
pub use utils::setup_logging;
