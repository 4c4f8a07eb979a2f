mod generator;
mod index;
pub mod layout;
mod parser;
mod types;


// 重新导出公共接口
pub use generator::{
    generate_column_sql, generate_create_table_sql, generate_primary_key_sql,
    generate_unique_key_sql, join_sql_lines, normalize_comment,
};
pub use index::{resolve_index, sheet_names_from_rows};
pub use parser::{SheetParser, parse_sheet};
pub use types::{ColumnDefinition, ColumnFlags, TableSchema};
