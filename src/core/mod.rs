pub mod aggregate;
pub mod import;
pub mod log;
pub mod logic;
pub mod migrate;
pub mod sequencing;
pub mod sheet;
pub mod store;
