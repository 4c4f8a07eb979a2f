use crate::constants::{config, markers, workbook};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 应用配置结构
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub workbook: WorkbookConfig,
    pub markers: MarkerConfig,
}

/// 工作簿相关配置
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WorkbookConfig {
    /// 目录索引工作表名称
    pub index_sheet: String,
}

/// 字段标记配置
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MarkerConfig {
    pub index: String,
    pub primary_key: String,
    pub auto_increment: String,
    pub not_null: String,
}

impl Default for WorkbookConfig {
    fn default() -> Self {
        Self {
            index_sheet: workbook::INDEX_SHEET_NAME.to_string(),
        }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            index: markers::INDEX.to_string(),
            primary_key: markers::PRIMARY_KEY.to_string(),
            auto_increment: markers::AUTO_INCREMENT.to_string(),
            not_null: markers::NOT_NULL.to_string(),
        }
    }
}

impl AppConfig {
    /// 查找并加载配置文件
    /// 优先使用显式指定的路径，其次按顺序查找：ddl.toml -> .ddl.toml
    /// 都不存在时使用默认配置（不写入磁盘）
    pub fn find_and_load_config(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::info!("使用指定的配置文件: {}", path.display());
            return Self::load_from_file(path);
        }

        for config_file in config::CONFIG_FILE_CANDIDATES {
            if Path::new(config_file).exists() {
                tracing::info!("找到配置文件: {}", config_file);
                return Self::load_from_file(config_file);
            }
        }

        tracing::debug!("未找到配置文件，使用默认配置");
        Ok(Self::default())
    }

    /// 从指定文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let config: AppConfig = toml::from_str(&content)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_matches_constants() {
        let config = AppConfig::default();
        assert_eq!(config.workbook.index_sheet, "目录索引");
        assert_eq!(config.markers.index, "索引");
        assert_eq!(config.markers.primary_key, "主键");
        assert_eq!(config.markers.auto_increment, "自增");
        assert_eq!(config.markers.not_null, "非空");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ddl.toml");
        std::fs::write(
            &path,
            r#"
[markers]
not_null = "Y"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(config.markers.not_null, "Y");
        assert_eq!(config.markers.primary_key, "主键");
        assert_eq!(config.workbook.index_sheet, "目录索引");
    }

    #[test]
    fn test_explicit_config_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            r#"
[workbook]
index_sheet = "Index"
"#,
        )
        .unwrap();

        let config = AppConfig::find_and_load_config(Some(&path)).unwrap();
        assert_eq!(config.workbook.index_sheet, "Index");
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempdir().unwrap();
        let result = AppConfig::find_and_load_config(Some(&dir.path().join("nope.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ddl.toml");
        std::fs::write(&path, "[markers\nindex = ").unwrap();

        let err = AppConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, crate::DdlError::Config(_)));
    }
}
