/// 工作簿相关常量
pub mod workbook {
    /// 目录索引工作表名称
    pub const INDEX_SHEET_NAME: &str = "目录索引";

    /// 目录索引工作表中存放工作表名称的列（从 0 开始）
    pub const INDEX_SHEET_NAME_COLUMN: usize = 1;

    /// 表工作表头部元数据占用的行数
    pub const HEADER_ROW_COUNT: usize = 9;

    /// 头部元数据值所在的列（从 0 开始）
    pub const HEADER_VALUE_COLUMN: usize = 1;
}

/// 字段标记值（大小写不敏感的完全匹配）
pub mod markers {
    /// 索引
    pub const INDEX: &str = "索引";

    /// 主键
    pub const PRIMARY_KEY: &str = "主键";

    /// 自增
    pub const AUTO_INCREMENT: &str = "自增";

    /// 非空
    pub const NOT_NULL: &str = "非空";
}

/// SQL 生成相关常量
pub mod sql {
    /// 输出行分隔符
    pub const LINE_SEPARATOR: &str = "\n";

    /// 列定义缩进
    pub const COLUMN_INDENT: &str = "    ";

    /// 表引擎，固定值
    pub const ENGINE: &str = "InnoDB";

    /// 注释中的控制字符统一替换为该字符
    pub const COMMENT_CONTROL_REPLACEMENT: char = ';';

    /// 输出文件扩展名
    pub const FILE_EXTENSION: &str = "sql";
}

/// 配置文件相关常量
pub mod config {
    /// 按优先级查找的默认配置文件名
    pub const CONFIG_FILE_CANDIDATES: &[&str] = &["ddl.toml", ".ddl.toml"];
}
