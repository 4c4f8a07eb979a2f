use super::layout::{HeaderField, column, split_primary_keys, split_unique_keys};
use super::types::{ColumnDefinition, ColumnFlags, TableSchema};
use crate::config::MarkerConfig;
use crate::constants::workbook::{HEADER_ROW_COUNT, HEADER_VALUE_COLUMN};
use crate::error::Result;
use crate::workbook::{SheetRow, SheetSource};
use tracing::{debug, warn};

/// 表工作表解析器
#[derive(Debug, Clone, Default)]
pub struct SheetParser {
    markers: MarkerConfig,
}

impl SheetParser {
    pub fn new(markers: MarkerConfig) -> Self {
        Self { markers }
    }

    /// 从工作簿中读取并解析指定工作表
    pub fn parse<S: SheetSource + ?Sized>(
        &self,
        source: &mut S,
        sheet: &str,
    ) -> Result<TableSchema> {
        let rows = source.sheet_rows(sheet)?;
        self.parse_rows(sheet, &rows)
    }

    /// 解析工作表的物理行
    pub fn parse_rows(&self, sheet: &str, rows: &[SheetRow]) -> Result<TableSchema> {
        let table = TableSchema {
            name_cn: header_text(sheet, rows, HeaderField::TableNameCn)?.to_string(),
            name_en: header_text(sheet, rows, HeaderField::TableNameEn)?.to_string(),
            primary_keys: split_primary_keys(header_text(sheet, rows, HeaderField::PrimaryKeys)?),
            unique_keys: split_unique_keys(header_text(sheet, rows, HeaderField::UniqueKeys)?),
            db_type: header_text(sheet, rows, HeaderField::DbType)?.to_string(),
            db_name: header_text(sheet, rows, HeaderField::DbName)?.to_string(),
            columns: self.parse_columns(sheet, rows)?,
        };

        debug!("解析工作表 {}: {}", sheet, table);
        Ok(table)
    }

    fn parse_columns(&self, sheet: &str, rows: &[SheetRow]) -> Result<Vec<ColumnDefinition>> {
        if rows.len() <= HEADER_ROW_COUNT {
            warn!("⚠️ 工作表 {} 没有字段定义行，表字段数为 0", sheet);
            return Ok(Vec::new());
        }

        rows[HEADER_ROW_COUNT..]
            .iter()
            .map(|row| self.parse_column(sheet, row))
            .collect()
    }

    fn parse_column(&self, sheet: &str, row: &SheetRow) -> Result<ColumnDefinition> {
        let markers = &self.markers;
        let definition = ColumnDefinition {
            sequence: row.integer(sheet, column::SEQUENCE)?,
            name_en: row.text(sheet, column::NAME_EN)?.to_string(),
            name_cn: row.text(sheet, column::NAME_CN)?.to_string(),
            data_type: row.text(sheet, column::DATA_TYPE)?.to_string(),
            flags: ColumnFlags {
                index: markers.is_index(row.text(sheet, column::INDEX)?),
                primary_key: markers.is_primary_key(row.text(sheet, column::PRIMARY_KEY)?),
                auto_increment: markers.is_auto_increment(row.text(sheet, column::AUTO_INCREMENT)?),
                not_null: markers.is_not_null(row.text(sheet, column::NOT_NULL)?),
            },
            comment: row.optional_text(sheet, column::COMMENT)?.map(str::to_string),
        };

        debug!("  {}", definition);
        Ok(definition)
    }
}

/// 读取元数据字段的文本，元数据行不存在时读作空字符串
///
/// 没有字段定义行的工作表尽力读取元数据，取值无法读取时同样读作空字符串。
fn header_text<'a>(sheet: &str, rows: &'a [SheetRow], field: HeaderField) -> Result<&'a str> {
    let Some(row) = field.row_index().and_then(|idx| rows.get(idx)) else {
        return Ok("");
    };

    match row.text(sheet, HEADER_VALUE_COLUMN) {
        Err(e) if rows.len() <= HEADER_ROW_COUNT => {
            warn!("⚠️ 工作表 {} 的元数据 {:?} 无法读取，按空值处理: {}", sheet, field, e);
            Ok("")
        }
        other => other,
    }
}

/// 使用默认标记值解析工作表
pub fn parse_sheet<S: SheetSource + ?Sized>(source: &mut S, sheet: &str) -> Result<TableSchema> {
    SheetParser::default().parse(source, sheet)
}
