use super::types::{ColumnDefinition, TableSchema};
use crate::constants::sql::{COLUMN_INDENT, COMMENT_CONTROL_REPLACEMENT, ENGINE, LINE_SEPARATOR};

/// 生成 CREATE TABLE 语句，每个元素为一行
///
/// 每个字段行末尾都带逗号（包括最后一个字段），主键、唯一索引行按固定格式追加。
/// 不校验主键与唯一索引中的字段是否存在于字段列表中。
pub fn generate_create_table_sql(table: &TableSchema) -> Vec<String> {
    let mut lines = Vec::with_capacity(table.columns.len() + table.unique_keys.len() + 5);

    lines.push(format!("CREATE TABLE `{}`.`{}`(", table.db_name, table.name_en));

    for column in &table.columns {
        lines.push(format!("{COLUMN_INDENT}{},", generate_column_sql(column)));
    }

    if let Some(keys) = table.primary_keys.as_deref().filter(|keys| !keys.is_empty()) {
        lines.push(format!("{},", generate_primary_key_sql(keys)));
    }

    let unique_count = table.unique_keys.len();
    for (idx, group) in table.unique_keys.iter().enumerate() {
        let mut line = generate_unique_key_sql(group);
        if idx + 1 != unique_count {
            line.push(',');
        }
        lines.push(line);
    }

    lines.push(")".to_string());
    lines.push(format!("COMMENT='{}'", table.name_cn));
    lines.push(format!("ENGINE={ENGINE}"));

    lines
}

/// 生成字段定义SQL（不含缩进和结尾逗号）
pub fn generate_column_sql(column: &ColumnDefinition) -> String {
    let mut sql = format!("`{}` {}", column.name_en, column.data_type);

    if column.flags.not_null {
        sql.push_str(" NOT NULL");
    }

    if column.flags.auto_increment {
        sql.push_str(" AUTO_INCREMENT");
    }

    if let Some(comment) = column.comment.as_deref().filter(|c| !c.trim().is_empty()) {
        sql.push_str(&format!(" COMMENT '{}'", normalize_comment(comment)));
    }

    sql
}

/// 生成主键定义SQL（不含结尾逗号）
pub fn generate_primary_key_sql(keys: &[String]) -> String {
    format!("PRIMARY KEY({})", quote_columns(keys))
}

/// 生成唯一索引定义SQL（不含结尾逗号）
pub fn generate_unique_key_sql(columns: &[String]) -> String {
    format!("UNIQUE KEY ({})", quote_columns(columns))
}

fn quote_columns(columns: &[String]) -> String {
    columns
        .iter()
        .map(|c| format!("`{c}`"))
        .collect::<Vec<_>>()
        .join(",")
}

/// 将注释中的换行、回车、制表符替换为分号
pub fn normalize_comment(comment: &str) -> String {
    comment
        .chars()
        .map(|c| match c {
            '\r' | '\n' | '\t' => COMMENT_CONTROL_REPLACEMENT,
            other => other,
        })
        .collect()
}

/// 将 SQL 行拼接为文件内容，每行以换行符结尾
pub fn join_sql_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push_str(LINE_SEPARATOR);
    }
    content
}
