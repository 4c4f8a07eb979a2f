use ddl_cli::{CliApp, parse_args, project_info, setup_logging};
use tracing::{debug, error, info};

fn main() {
    // 解析并校验命令行参数，参数错误时打印用法并以状态码 1 退出
    let cli = parse_args();

    // 设置日志记录
    setup_logging(cli.verbose);
    debug!("{}", project_info::get_version_string());

    let app = match CliApp::new(&cli) {
        Ok(app) => app,
        Err(e) => {
            error!("❌ 应用初始化失败: {:#}", e);
            std::process::exit(1);
        }
    };

    match app.run() {
        Ok(report) => {
            info!(
                "🎉 完成: 生成 {} 个文件，跳过 {} 个工作表",
                report.written.len(),
                report.failed.len()
            );
        }
        Err(e) => {
            error!("❌ 操作失败: {:#}", e);
            std::process::exit(1);
        }
    }
}
