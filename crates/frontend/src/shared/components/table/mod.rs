pub mod cell_value;
pub mod columns;
pub mod dynamic_table;
pub mod kv_table;

pub use cell_value::CellValue;
pub use columns::discover_columns;
pub use dynamic_table::DynamicTable;
pub use kv_table::KvTable;
