pub mod config;
pub mod duty;
pub mod export;
pub mod header;
pub mod import;
pub mod init;
pub mod lifecycle;
pub mod list;
pub mod log;
pub mod print;
pub mod row;
