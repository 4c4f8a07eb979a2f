use std::fmt;

/// 字段标记
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnFlags {
    pub index: bool,
    pub primary_key: bool,
    pub auto_increment: bool,
    pub not_null: bool,
}

/// 表字段定义，对应工作表中元数据区之后的一行
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    /// 序号，仅作记录，不参与排序
    pub sequence: i64,
    pub name_en: String,
    pub name_cn: String,
    /// SQL 类型，原样取自工作表
    pub data_type: String,
    pub flags: ColumnFlags,
    pub comment: Option<String>,
}

/// 表定义，对应一个工作表
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    pub name_cn: String,
    pub name_en: String,
    pub db_name: String,
    /// 数据库类型，读取后不参与生成
    pub db_type: String,
    /// 主键字段，单元格为空时为 `None`
    pub primary_keys: Option<Vec<String>>,
    /// 唯一索引分组，每组生成一条 `UNIQUE KEY`
    pub unique_keys: Vec<Vec<String>>,
    pub columns: Vec<ColumnDefinition>,
}

impl TableSchema {
    /// 工作表没有任何字段定义行
    pub fn is_degenerate(&self) -> bool {
        self.columns.is_empty()
    }
}

impl fmt::Display for ColumnDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "序号:{},英文名:{},中文名:{},类型:{},索引:{},主键:{},非空:{},自增:{},注释:{}",
            self.sequence,
            self.name_en,
            self.name_cn,
            self.data_type,
            self.flags.index,
            self.flags.primary_key,
            self.flags.not_null,
            self.flags.auto_increment,
            self.comment.as_deref().unwrap_or("")
        )
    }
}

impl fmt::Display for TableSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let primary_keys = self
            .primary_keys
            .as_ref()
            .map(|keys| keys.join(","))
            .unwrap_or_default();
        let unique_keys = self
            .unique_keys
            .iter()
            .map(|group| group.join(","))
            .collect::<Vec<_>>()
            .join(";");

        write!(
            f,
            "表中文名:{},表英文名:{},主键:{},唯一索引:{},数据库类型:{},数据库:{},字段数:{}",
            self.name_cn,
            self.name_en,
            primary_keys,
            unique_keys,
            self.db_type,
            self.db_name,
            self.columns.len()
        )
    }
}
