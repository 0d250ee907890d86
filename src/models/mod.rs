pub mod duty;
pub mod field;
pub mod log_row;
pub mod row_set;
pub mod sheet_meta;
