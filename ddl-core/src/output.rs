use crate::constants::sql::FILE_EXTENSION;
use crate::error::Result;
use crate::schema::join_sql_lines;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 输出文件路径：`<output_dir>/<小写工作表名>.sql`
pub fn sql_file_path(output_dir: &Path, sheet_name: &str) -> PathBuf {
    output_dir.join(format!("{}.{FILE_EXTENSION}", sheet_name.to_lowercase()))
}

/// 写出 SQL 文件，UTF-8 编码，每行以换行符结尾
pub fn write_sql_file<S: AsRef<str>>(
    lines: &[S],
    output_dir: &Path,
    sheet_name: &str,
) -> Result<PathBuf> {
    let path = sql_file_path(output_dir, sheet_name);
    fs::write(&path, join_sql_lines(lines))?;
    debug!("已写入 {} 行到 {}", lines.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sql_file_path_lowercases_sheet_name() {
        let path = sql_file_path(Path::new("/out"), "T_User");
        assert_eq!(path, PathBuf::from("/out/t_user.sql"));
    }

    #[test]
    fn test_write_sql_file() {
        let dir = tempdir().unwrap();
        let lines = vec!["CREATE TABLE `app`.`users`(", ")", "ENGINE=InnoDB"];

        let path = write_sql_file(&lines, dir.path(), "USERS").unwrap();
        assert_eq!(path, dir.path().join("users.sql"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "CREATE TABLE `app`.`users`(\n)\nENGINE=InnoDB\n");
    }

    #[test]
    fn test_write_sql_file_missing_dir() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        let result = write_sql_file(&["x"], &missing, "users");
        assert!(matches!(result, Err(crate::DdlError::Io(_))));
    }
}
